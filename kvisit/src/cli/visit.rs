use std::io::Write;

use clap::Args;
use kvisit_visitor::{Record, Visitor, new_chain};
use snafu::ResultExt;

use crate::{
    cli::{
        error::{self, Error},
        internal::{OutputFormat, RecordArgs, RecordResolver, load_action},
    },
    config::{Config, DecoratorKind},
    decorator::{self, Report},
};

#[derive(Args, Clone)]
pub struct VisitCommand {
    #[command(flatten)]
    pub record: RecordArgs,

    #[arg(
        short,
        long = "decorator",
        help = "Decorator to run after the record is loaded, may be repeated and runs in the \
                given order. Replaces the decorators of the configuration file."
    )]
    pub decorators: Vec<DecoratorKind>,

    #[arg(short, long, value_enum, default_value_t, help = "Output format of the visited record.")]
    pub output: OutputFormat,
}

impl VisitCommand {
    pub fn run(self, config: &Config) -> Result<(), Error> {
        self.execute(config, &mut std::io::stdout().lock())
    }

    /// Loads the seed record into an empty record through a chain of the
    /// selected decorators, then writes the decorator report and the record
    /// to `out`.
    ///
    /// # Errors
    ///
    /// Returns the error of the first stage that fails, or an error if the
    /// output cannot be written. Nothing is written when a stage fails.
    fn execute<W: Write>(self, config: &Config, out: &mut W) -> Result<(), Error> {
        let Self { record, decorators, output } = self;
        let seed = RecordResolver::from(config).resolve(record);
        let decorators = select_decorators(config, decorators);

        let report = Report::default();
        let mut visited = Record::default();
        {
            let mut chain = new_chain(
                Box::new(&mut visited),
                decorators.iter().map(|kind| decorator::build(*kind, &report)),
            );
            tracing::debug!(?decorators, "Constructed visit chain");
            tracing::info!(namespace = %seed.namespace, name = %seed.name, "Visiting record");
            if let Err(err) = chain.visit(&mut load_action(&seed)) {
                tracing::warn!(stage = err.stage(), "Visit failed");
                return Err(err).context(error::VisitSnafu {
                    namespace: seed.namespace.clone(),
                    name: seed.name.clone(),
                });
            }
            tracing::info!("Visit completed");
        }

        for line in report.into_lines() {
            writeln!(out, "{line}").context(error::WriteStdoutSnafu)?;
        }
        out.write_all(output.render(&visited)?.as_bytes()).context(error::WriteStdoutSnafu)
    }
}

/// Decorators given on the command line replace the configured ones.
fn select_decorators(config: &Config, requested: Vec<DecoratorKind>) -> Vec<DecoratorKind> {
    if requested.is_empty() { config.decorators.clone() } else { requested }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(decorators: Vec<DecoratorKind>) -> VisitCommand {
        VisitCommand { record: RecordArgs::default(), decorators, output: OutputFormat::Json }
    }

    fn report_lines(output: &str) -> Vec<&str> {
        output.lines().take_while(|line| line.starts_with("==> ")).collect()
    }

    #[test]
    fn test_configured_decorators_run_without_overrides() {
        let config = Config::default();
        let mut out = Vec::new();

        command(Vec::new()).execute(&config, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert_eq!(report_lines(&output), vec![
            "==> Name=Jorge Luis, NameSpace=JorgeLuis",
            "==> Auxiliary=We are running as remote team.",
        ]);
    }

    #[test]
    fn test_requested_decorators_replace_configured_ones() {
        let config = Config::default();
        let mut out = Vec::new();

        command(vec![DecoratorKind::Auxiliary]).execute(&config, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert_eq!(report_lines(&output), vec!["==> Auxiliary=We are running as remote team."]);
        let record: Record =
            serde_json::from_str(output.trim_start_matches(|c: char| c != '{')).unwrap();
        assert_eq!(record, config.record);
    }

    #[test]
    fn test_failed_visit_writes_nothing() {
        let mut config = Config::default();
        config.record.namespace.clear();
        let mut out = Vec::new();

        let result =
            command(vec![DecoratorKind::Name, DecoratorKind::Validate]).execute(&config, &mut out);

        let Err(Error::Visit { source, .. }) = result else {
            panic!("expected the visit to fail");
        };
        assert_eq!(source.stage(), "validate");
        assert!(out.is_empty());
    }

    #[test]
    fn test_select_decorators_falls_back_to_config() {
        let config = Config::default();

        assert_eq!(select_decorators(&config, Vec::new()), config.decorators);
        assert_eq!(select_decorators(&config, vec![DecoratorKind::Trace]), vec![
            DecoratorKind::Trace
        ]);
    }
}
