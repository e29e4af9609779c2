use std::io::Write;

use clap::Args;
use kvisit_visitor::{Record, Visitor, new_chain};
use snafu::ResultExt;

use crate::{
    cli::{
        error::{self, Error},
        internal::{OutputFormat, RecordArgs, RecordResolver, load_action},
    },
    config::Config,
};

/// Visits the record without any decorator.
#[derive(Args, Clone)]
pub struct InspectCommand {
    #[command(flatten)]
    pub record: RecordArgs,

    #[arg(short, long, value_enum, default_value_t, help = "Output format of the visited record.")]
    pub output: OutputFormat,
}

impl InspectCommand {
    pub fn run(self, config: &Config) -> Result<(), Error> {
        self.execute(config, &mut std::io::stdout().lock())
    }

    fn execute<W: Write>(self, config: &Config, out: &mut W) -> Result<(), Error> {
        let Self { record, output } = self;
        let seed = RecordResolver::from(config).resolve(record);

        let mut visited = Record::default();
        new_chain(Box::new(&mut visited), Vec::new()).visit(&mut load_action(&seed)).context(
            error::VisitSnafu { namespace: seed.namespace.clone(), name: seed.name.clone() },
        )?;

        out.write_all(output.render(&visited)?.as_bytes()).context(error::WriteStdoutSnafu)
    }
}
