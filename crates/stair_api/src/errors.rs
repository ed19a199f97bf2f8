use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

pub type OperationName = String;
pub type FailureReason = String;

/// A failed call to the remote service. Every variant names the operation
/// ("fetch customers", "create order", ...) so it can be shown as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("failed to {operation}: {reason}")]
    FetchFailed {
        operation: OperationName,
        reason: FailureReason,
    },
    #[error("failed to {operation}: {reason}")]
    SaveFailed {
        operation: OperationName,
        reason: FailureReason,
    },
    #[error("failed to {operation}: {reason}")]
    DeleteFailed {
        operation: OperationName,
        reason: FailureReason,
    },
}

impl ApiError {
    pub fn operation(&self) -> &str {
        match self {
            ApiError::FetchFailed { operation, .. }
            | ApiError::SaveFailed { operation, .. }
            | ApiError::DeleteFailed { operation, .. } => operation,
        }
    }

    pub(crate) fn fetch(operation: &str, error: anyhow::Error) -> Self {
        ApiError::FetchFailed {
            operation: operation.to_string(),
            reason: format!("{:#}", error),
        }
    }

    pub(crate) fn save(operation: &str, error: anyhow::Error) -> Self {
        ApiError::SaveFailed {
            operation: operation.to_string(),
            reason: format!("{:#}", error),
        }
    }

    pub(crate) fn delete(operation: &str, error: anyhow::Error) -> Self {
        ApiError::DeleteFailed {
            operation: operation.to_string(),
            reason: format!("{:#}", error),
        }
    }
}
