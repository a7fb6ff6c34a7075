//! # Application Errors
//!
//! Error types for the application layer.
//!
//! Every market operation returns [`ApplicationResult`]. The variants split
//! expected, user-facing outcomes (a rule violation, a missing record, a
//! club acting on something it does not own) from failures of the system
//! itself, so a caller can always tell "your offer was too late" apart from
//! "the store is down".
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)                  - Business rule violations
//! ├── NotFound { resource_type, id }       - Unknown player or negotiation
//! ├── Forbidden(String)                    - Actor is not the authorised club
//! └── Infrastructure(InfrastructureError)  - Storage failures
//! ```
//!
//! # Examples
//!
//! ```
//! use transfer_market::application::error::{ApplicationError, ErrorKind};
//! use transfer_market::infrastructure::persistence::RepositoryError;
//!
//! let err = ApplicationError::not_found("Player", "player-123");
//! assert_eq!(err.kind(), ErrorKind::NotFound);
//!
//! let err: ApplicationError = RepositoryError::connection("refused").into();
//! assert_eq!(err.kind(), ErrorKind::Infrastructure);
//! ```

use crate::domain::errors::DomainError;
use crate::infrastructure::persistence::RepositoryError;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Infrastructure layer error.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// Repository error.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Stable classification of an [`ApplicationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Referenced player or negotiation does not exist.
    NotFound,
    /// Actor's club is not the authorised party.
    Forbidden,
    /// The operation would make a club trade with itself.
    SelfTrade,
    /// Purchase of a player that is not listed.
    NotForSale,
    /// Unlist of a player that is not listed.
    NotListed,
    /// Offered price is not positive.
    InvalidPrice,
    /// Negotiation is no longer pending.
    AlreadyResolved,
    /// Storage failure.
    Infrastructure,
}

impl ErrorKind {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Forbidden => "forbidden",
            Self::SelfTrade => "self_trade",
            Self::NotForSale => "not_for_sale",
            Self::NotListed => "not_listed",
            Self::InvalidPrice => "invalid_price",
            Self::AlreadyResolved => "already_resolved",
            Self::Infrastructure => "infrastructure",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&DomainError> for ErrorKind {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::SelfTrade { .. } => Self::SelfTrade,
            DomainError::NotForSale(_) => Self::NotForSale,
            DomainError::NotListed(_) => Self::NotListed,
            DomainError::InvalidPrice(_) | DomainError::NegativeAmount(_) => Self::InvalidPrice,
            DomainError::AlreadyResolved { .. } | DomainError::OwnershipMismatch { .. } => {
                Self::AlreadyResolved
            }
        }
    }
}

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain error from business logic.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Resource not found.
    #[error("not found: {resource_type} with id {id}")]
    NotFound {
        /// Type of resource.
        resource_type: String,
        /// Resource identifier.
        id: String,
    },

    /// The acting club may not perform this operation.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Infrastructure error from external systems.
    #[error("infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),
}

impl ApplicationError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(resource_type: impl Into<String>, id: impl fmt::Display) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a forbidden error.
    #[must_use]
    pub fn forbidden(reason: impl Into<String>) -> Self {
        Self::Forbidden(reason.into())
    }

    /// Returns the error classification.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(e) => ErrorKind::from(e),
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Forbidden(_) => ErrorKind::Forbidden,
            Self::Infrastructure(_) => ErrorKind::Infrastructure,
        }
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is an authorization error.
    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden(_))
    }

    /// Returns true if the caller lost a race for a negotiation.
    #[must_use]
    pub fn is_already_resolved(&self) -> bool {
        self.kind() == ErrorKind::AlreadyResolved
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        Self::Infrastructure(InfrastructureError::Repository(err))
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
