use thiserror::Error;

/// Errors returned by curve evaluation and profile sampling.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// A parameter would make the curve formula undefined.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl CurveError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        CurveError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

impl From<CurveError> for std::io::Error {
    fn from(e: CurveError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    }
}
