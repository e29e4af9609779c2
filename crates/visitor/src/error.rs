use snafu::Snafu;

/// Failure of one stage of a visit.
///
/// The chain never inspects or rewrites it: whatever the failing stage
/// returned reaches the caller of `visit` as is.
#[derive(Clone, Debug, Snafu, PartialEq, Eq)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Stage {stage} failed, reason: {reason}"))]
    StageFailed { stage: String, reason: String },
}

impl Error {
    /// Name of the stage that produced this error.
    #[must_use]
    pub fn stage(&self) -> &str {
        match self {
            Self::StageFailed { stage, .. } => stage,
        }
    }
}
