use std::io::Write;

use clap::Args;
use snafu::ResultExt;

use crate::{
    cli::{Error, error},
    config::Config,
    ui::table::DecoratorKindExt,
};

/// Prints every available decorator together with its position in the
/// configured chain.
#[derive(Args, Clone)]
pub struct ListCommand {}

impl ListCommand {
    /// # Errors
    ///
    /// This function will return an `Error` if it fails to write to standard
    /// output.
    pub fn run(self, config: &Config) -> Result<(), Error> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(config.decorators.render_table().as_bytes())
            .context(error::WriteStdoutSnafu)?;
        stdout.write_all(b"\n").context(error::WriteStdoutSnafu)
    }
}
