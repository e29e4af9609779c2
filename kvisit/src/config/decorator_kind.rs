use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use snafu::Snafu;

/// The decorators a visit can be configured with.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum DecoratorKind {
    Name,
    Auxiliary,
    Validate,
    Trace,
}

impl DecoratorKind {
    pub const ALL: [Self; 4] = [Self::Name, Self::Auxiliary, Self::Validate, Self::Trace];

    pub const fn description(self) -> &'static str {
        match self {
            Self::Name => "Report the name and namespace of the visited record",
            Self::Auxiliary => "Report the auxiliary field of the visited record",
            Self::Validate => "Fail the visit if the namespace or the name is empty",
            Self::Trace => "Emit the whole visited record as a debug log event",
        }
    }
}

impl fmt::Display for DecoratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val = match self {
            Self::Name => "name",
            Self::Auxiliary => "auxiliary",
            Self::Validate => "validate",
            Self::Trace => "trace",
        };
        f.write_str(val)
    }
}

impl FromStr for DecoratorKind {
    type Err = ParseDecoratorKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "auxiliary" | "aux" => Ok(Self::Auxiliary),
            "validate" => Ok(Self::Validate),
            "trace" => Ok(Self::Trace),
            _ => Err(ParseDecoratorKindError::Invalid { value: value.to_string() }),
        }
    }
}

#[derive(Debug, Snafu)]
pub enum ParseDecoratorKindError {
    #[snafu(display(
        "'{value}' is not a valid decorator, expected one of: name, auxiliary, validate, trace"
    ))]
    Invalid { value: String },
}
