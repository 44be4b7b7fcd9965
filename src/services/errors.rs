use std::fmt::Display;

use thiserror::Error;
use tracing::error;

/// Failures signalled by the team services
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Caller-supplied data violates an invariant
    #[error("{0}")]
    Validation(String),

    /// Referenced record does not exist
    #[error("{0}")]
    NotFound(String),

    /// Persistence failure; carries only a generic message
    #[error("{0}")]
    Storage(String),

    /// Upstream directory could not be used
    #[error("{0}")]
    Upstream(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Logs `cause` and returns a storage error that only carries `context`
    pub(crate) fn storage(context: &str, cause: impl Display) -> Self {
        error!(error = %cause, "{}", context);
        ServiceError::Storage(context.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_hides_cause() {
        let err = ServiceError::storage("Error saving team", "connection reset by peer");
        assert_eq!(err.to_string(), "Error saving team");
    }
}
