mod list;

use clap::Subcommand;

use crate::{
    cli::{Error, decorator::list::ListCommand},
    config::Config,
};

#[derive(Clone, Subcommand)]
pub enum DecoratorCommands {
    #[command(alias = "l", about = "List the available decorators")]
    List(ListCommand),
}

impl DecoratorCommands {
    pub fn run(self, config: &Config) -> Result<(), Error> {
        match self {
            Self::List(cmd) => cmd.run(config),
        }
    }
}
