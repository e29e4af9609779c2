//! Table rendering for command output.

mod decorator_kind_ext;
mod record_ext;

pub use self::{decorator_kind_ext::DecoratorKindExt, record_ext::RecordExt};
