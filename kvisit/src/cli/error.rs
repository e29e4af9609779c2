use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("{source}"))]
    Configuration { source: crate::config::Error },

    #[snafu(display("{source}"))]
    InitializeLog { source: kvisit_cli::config::InitializeLogError },

    #[snafu(display("Visit of record {namespace}/{name} failed, error: {source}"))]
    Visit { namespace: String, name: String, source: kvisit_visitor::Error },

    #[snafu(display("Failed to write to stdout, error: {source}"))]
    WriteStdout { source: std::io::Error },

    #[snafu(display("Failed to serialize record as JSON, error: {source}"))]
    SerializeRecordJson { source: serde_json::Error },

    #[snafu(display("Failed to serialize record as YAML, error: {source}"))]
    SerializeRecordYaml { source: serde_yaml::Error },
}

impl From<crate::config::Error> for Error {
    fn from(source: crate::config::Error) -> Self { Self::Configuration { source } }
}
