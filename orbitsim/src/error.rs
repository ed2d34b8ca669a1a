use thiserror::Error;

/// Errors raised while building a simulation.
///
/// Stepping never fails; these only come out of the validated construction
/// path and scenario loading.
#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("invalid state for body `{name}`: {reason}")]
    InvalidBodyState { name: String, reason: String },

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("scenario config: {0}")]
    Config(String),
}

impl SimError {
    pub(crate) fn body(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidBodyState {
            name: name.to_owned(),
            reason: reason.into(),
        }
    }

    pub(crate) fn param(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
