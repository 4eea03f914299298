use thiserror::Error;

/// The main error type for fleet operations.
///
/// This enum represents all possible errors that can occur while managing
/// the cluster registry or aggregating data from remote Proxmox clusters:
/// connection, authentication, validation, and registry-state conflicts.
///
/// Per-node failures inside an aggregation are deliberately *not* part of
/// this taxonomy: they are captured in the per-node `error` field of the
/// aggregate response and never abort the surrounding operation.
#[derive(Error, Debug)]
pub enum FleetError {
    /// A remote call could not be completed (unreachable endpoint,
    /// unexpected status code, malformed response body).
    #[error("connection error: {0}")]
    Connection(String),

    /// The remote cluster rejected the supplied credentials, or a ticket
    /// was refused mid-operation.
    #[error("authentication error: {0}")]
    Authentication(String),

    /// Malformed caller input or an invalid entity.
    #[error("validation error: {source}")]
    Validation {
        #[from]
        source: ValidationError,
    },

    /// A cluster with the same name is already registered.
    #[error("cluster '{0}' already exists")]
    AlreadyExists(String),

    /// The requested cluster is not in the registry.
    #[error("not found: {0}")]
    NotFound(String),

    /// An empty or otherwise unusable cluster id was supplied.
    #[error("invalid cluster id")]
    InvalidClusterId,

    /// Local persistence failed. Fatal to the triggering operation.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Specialized error type for validation failures.
///
/// Provides detailed context about why a validation failed, including
/// field-specific errors and format violations.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A specific field failed validation.
    #[error("field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Format/syntax validation failure.
    #[error("format error: {0}")]
    Format(String),

    /// Violation of a domain constraint.
    #[error("domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with a FleetError
pub type FleetResult<T> = Result<T, FleetError>;
