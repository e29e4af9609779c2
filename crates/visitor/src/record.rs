use serde::{Deserialize, Serialize};

/// The object a visit inspects and mutates.
///
/// A record starts out empty and is filled in by the primary action of a
/// visit; decorators read it afterwards.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(default)]
    pub namespace: String,

    #[serde(default)]
    pub name: String,

    /// Free-form description that does not fit the other fields.
    #[serde(default)]
    pub auxiliary: String,
}
