use clap::ValueEnum;
use kvisit_visitor::Record;
use snafu::ResultExt;

use crate::{
    cli::error::{self, Error},
    ui::table::RecordExt,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Renders `record`, always ending with a newline.
    pub fn render(self, record: &Record) -> Result<String, Error> {
        let mut output = match self {
            Self::Table => record.render_table(),
            Self::Json => {
                serde_json::to_string_pretty(record).context(error::SerializeRecordJsonSnafu)?
            }
            Self::Yaml => serde_yaml::to_string(record).context(error::SerializeRecordYamlSnafu)?,
        };
        if !output.ends_with('\n') {
            output.push('\n');
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        Record {
            namespace: "JorgeLuis".to_string(),
            name: "Jorge Luis".to_string(),
            auxiliary: "We are running as remote team.".to_string(),
        }
    }

    #[test]
    fn test_render_json_uses_camel_case_fields() {
        let output = OutputFormat::Json.render(&record()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["namespace"], "JorgeLuis");
        assert_eq!(value["name"], "Jorge Luis");
        assert_eq!(value["auxiliary"], "We are running as remote team.");
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_render_yaml_parses_back() {
        let output = OutputFormat::Yaml.render(&record()).unwrap();
        let parsed: Record = serde_yaml::from_str(&output).unwrap();

        assert_eq!(parsed, record());
    }

    #[test]
    fn test_render_table_ends_with_newline() {
        let output = OutputFormat::Table.render(&record()).unwrap();

        assert!(output.contains("Jorge Luis"));
        assert!(output.ends_with('\n'));
    }
}
