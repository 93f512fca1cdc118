use thiserror::Error;

/// Tracker operation failures.
///
/// Both variants are synchronous validation errors raised at the offending
/// call; callers recover by re-prompting for valid input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("Invalid zone: {0}")]
    InvalidZone(String),

    #[error("Please set a target first")]
    NoTargetSet,
}

pub type Result<T> = std::result::Result<T, TrackerError>;
