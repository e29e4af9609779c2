use clap::Args;
use kvisit_visitor::{Error, Record, VisitResult};

use crate::config::Config;

/// Command line overrides for the fields of the seed record.
///
/// An empty value cannot clear a configured field; a record with an empty
/// field can only come from the configuration file.
#[derive(Args, Clone, Debug, Default)]
pub struct RecordArgs {
    #[arg(
        short,
        long,
        help = "Namespace of the visited record. Defaults to the namespace of the configured \
                record, an empty value also falls back to it."
    )]
    pub namespace: Option<String>,

    #[arg(
        long,
        help = "Name of the visited record. Defaults to the name of the configured record, an \
                empty value also falls back to it."
    )]
    pub name: Option<String>,

    #[arg(
        short,
        long,
        help = "Auxiliary description of the visited record. Defaults to the auxiliary field of \
                the configured record, an empty value also falls back to it."
    )]
    pub auxiliary: Option<String>,
}

/// Resolves the seed record of a visit from the configuration and the
/// command line overrides.
pub struct RecordResolver<'c> {
    config: &'c Config,
}

impl<'c> From<&'c Config> for RecordResolver<'c> {
    fn from(config: &'c Config) -> Self { Self { config } }
}

impl RecordResolver<'_> {
    /// Fields given as `None` or as an empty string fall back to the
    /// configured record.
    pub fn resolve(&self, args: RecordArgs) -> Record {
        let RecordArgs { namespace, name, auxiliary } = args;
        let Record {
            namespace: default_namespace,
            name: default_name,
            auxiliary: default_auxiliary,
        } = &self.config.record;

        Record {
            namespace: namespace
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| default_namespace.clone()),
            name: name.filter(|s| !s.is_empty()).unwrap_or_else(|| default_name.clone()),
            auxiliary: auxiliary
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| default_auxiliary.clone()),
        }
    }
}

/// The primary action of a visit: fills the visited record from `seed`.
pub fn load_action(seed: &Record) -> impl FnMut(&mut Record, Option<Error>) -> VisitResult + '_ {
    move |record: &mut Record, err: Option<Error>| -> VisitResult {
        tracing::debug!(namespace = %seed.namespace, name = %seed.name, "Loading record");
        record.clone_from(seed);
        err.map_or(Ok(()), Err)
    }
}
