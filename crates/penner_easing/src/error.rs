use thiserror::Error;

/// Failure to resolve an easing curve from its name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEasingError {
    #[error("easing curve name is empty")]
    Empty,

    #[error("unknown easing curve `{0}`")]
    UnknownCurve(String),
}
