//! Helpers shared by the commands that visit a record.

mod output;
mod record;

pub use self::{
    output::OutputFormat,
    record::{RecordArgs, RecordResolver, load_action},
};
