//! Seed values for the record a visit starts from when the configuration
//! file does not provide one.

pub const DEFAULT_NAMESPACE: &str = "JorgeLuis";
pub const DEFAULT_NAME: &str = "Jorge Luis";
pub const DEFAULT_AUXILIARY: &str = "We are running as remote team.";
