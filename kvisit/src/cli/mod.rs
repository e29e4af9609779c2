//! The `kvisit` command line interface.
//!
//! It visits a Kubernetes-style record through a chain of decorators, the
//! way `kubectl` visits the resources it loads.
//!
//! # Examples
//!
//! ```bash
//! # Visit the configured record with the configured decorators
//! kvisit visit
//!
//! # Override the record and the decorators, print JSON
//! kvisit visit --namespace kube-system --name coredns -d validate -d name -o json
//!
//! # Load the record without running any decorator
//! kvisit inspect
//!
//! # List the available decorators
//! kvisit decorator list
//! ```

mod decorator;
pub mod error;
mod inspect;
mod internal;
mod visit;

use std::{io::Write, path::PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use kvisit_base::{CLI_PROGRAM_NAME, PROJECT_SEMVER};
use snafu::ResultExt;

pub use self::error::Error;
use self::{decorator::DecoratorCommands, inspect::InspectCommand, visit::VisitCommand};
use crate::config::Config;

#[derive(Parser)]
#[command(
    name = CLI_PROGRAM_NAME,
    author,
    version,
    about = "Kvisit CLI: Visit a resource record through an ordered chain of decorators.",
    long_about = "Kvisit loads a Kubernetes-style resource record (namespace, name and an \
                  auxiliary description) and runs it through an ordered chain of decorators. \
                  Decorators run after the record is loaded, in registration order, and the \
                  first one that fails stops the visit.",
    color = clap::ColorChoice::Auto
)]
pub struct Cli {
    #[clap(subcommand)]
    commands: Option<Commands>,

    #[clap(
        long = "config",
        short = 'c',
        env = "KVISIT_CONFIG_FILE_PATH",
        help = "Specify a configuration file. Defaults to ~/.config/kvisit/config.yaml or \
                KVISIT_CONFIG_FILE_PATH env var."
    )]
    config_file: Option<PathBuf>,

    #[clap(
        long = "log-level",
        env = "KVISIT_LOG_LEVEL",
        help = "Set the logging level (e.g., info, debug, trace)."
    )]
    log_level: Option<tracing::Level>,
}

#[derive(Clone, Subcommand)]
pub enum Commands {
    #[command(about = "Display version information")]
    Version,

    #[command(about = "Generate shell completion script for the specified shell (bash, zsh, fish)")]
    Completions { shell: clap_complete::Shell },

    #[command(about = "Output the default configuration in YAML format")]
    DefaultConfig,

    /// Visits the configured record through the chain of decorators.
    #[command(alias = "v", about = "Visit a record through the configured chain of decorators")]
    Visit(VisitCommand),

    /// Visits the configured record without any decorator.
    #[command(alias = "i", about = "Load a record without running any decorator")]
    Inspect(InspectCommand),

    #[command(alias = "d", about = "Manage decorators")]
    Decorator {
        #[command(subcommand)]
        commands: DecoratorCommands,
    },
}

impl Default for Cli {
    fn default() -> Self { Self::parse() }
}

impl Cli {
    /// Loads the configuration and applies the `--log-level` override.
    ///
    /// An explicitly given configuration file must exist. Without one, the
    /// default locations are searched and the built-in defaults are used if
    /// none of them exists.
    fn load_config(&self) -> Result<Config, Error> {
        self.load_config_or(Config::search_config_file_path)
    }

    /// Like [`Cli::load_config`], with `search` standing in for the lookup of
    /// the default locations.
    fn load_config_or(&self, search: impl FnOnce() -> Option<PathBuf>) -> Result<Config, Error> {
        let mut config = match &self.config_file {
            Some(path) => Config::load(path)?,
            None => search().map_or_else(|| Ok(Config::default()), Config::load)?,
        };

        if let Some(log_level) = self.log_level {
            config.log.level = log_level;
        }

        Ok(config)
    }

    /// Runs the selected command and returns the process exit code.
    ///
    /// # Errors
    ///
    /// Returns an `Error` if the configuration cannot be loaded, logging
    /// cannot be initialized, a visit fails or output cannot be written.
    ///
    /// # Panics
    ///
    /// Panics if the help text cannot be written to stderr.
    pub fn run(self) -> Result<i32, Error> {
        match self.commands {
            Some(Commands::Version) => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(Self::command().render_long_version().as_bytes())
                    .context(error::WriteStdoutSnafu)?;
                return Ok(0);
            }
            Some(Commands::Completions { shell }) => {
                let mut app = Self::command();
                let bin_name = app.get_name().to_string();
                clap_complete::generate(shell, &mut app, bin_name, &mut std::io::stdout());
                return Ok(0);
            }
            Some(Commands::DefaultConfig) => {
                std::io::stdout()
                    .write_all(Config::TEMPLATE.as_bytes())
                    .context(error::WriteStdoutSnafu)?;
                return Ok(0);
            }
            _ => {}
        }

        let config = self.load_config()?;
        config.log.registry().context(error::InitializeLogSnafu)?;
        let version = &*PROJECT_SEMVER;
        tracing::debug!(%version, "Configuration loaded");

        match self.commands {
            Some(Commands::Visit(cmd)) => cmd.run(&config)?,
            Some(Commands::Inspect(cmd)) => cmd.run(&config)?,
            Some(Commands::Decorator { commands }) => commands.run(&config)?,
            _ => {
                let help = Self::command().render_long_help().ansi().to_string();
                std::io::stderr().write_all(help.as_bytes()).expect("Failed to write to stderr");
                return Ok(-1);
            }
        }

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() { Cli::command().debug_assert(); }

    #[test]
    fn test_parse_visit_with_overrides() {
        let cli = Cli::try_parse_from([
            "kvisit",
            "--log-level",
            "debug",
            "visit",
            "--namespace",
            "kube-system",
            "--name",
            "coredns",
            "-d",
            "validate",
            "-d",
            "name",
            "-o",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.log_level, Some(tracing::Level::DEBUG));
        let Some(Commands::Visit(cmd)) = cli.commands else {
            panic!("expected the visit command");
        };
        assert_eq!(cmd.record.namespace.as_deref(), Some("kube-system"));
        assert_eq!(cmd.record.name.as_deref(), Some("coredns"));
        assert_eq!(cmd.decorators, vec![
            crate::config::DecoratorKind::Validate,
            crate::config::DecoratorKind::Name
        ]);
        assert_eq!(cmd.output, internal::OutputFormat::Json);
    }

    #[test]
    fn test_parse_rejects_unknown_decorator() {
        let result = Cli::try_parse_from(["kvisit", "visit", "-d", "metrics"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_inspect_defaults_to_table() {
        let cli = Cli::try_parse_from(["kvisit", "inspect"]).unwrap();
        let Some(Commands::Inspect(cmd)) = cli.commands else {
            panic!("expected the inspect command");
        };
        assert_eq!(cmd.output, internal::OutputFormat::Table);
        assert!(cmd.record.namespace.is_none());
    }

    #[test]
    fn test_explicit_missing_config_file_fails() {
        let cli =
            Cli::try_parse_from(["kvisit", "-c", "/nonexistent-kvisit-dir/config.yaml", "inspect"])
                .unwrap();
        assert!(matches!(cli.load_config(), Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_missing_default_config_uses_builtin_defaults() {
        let cli = Cli { commands: None, config_file: None, log_level: Some(tracing::Level::TRACE) };

        let config = cli.load_config_or(|| None).unwrap();

        assert_eq!(config.record, Config::default().record);
        assert_eq!(config.decorators, Config::default().decorators);
        assert_eq!(config.log.level, tracing::Level::TRACE);
    }
}
