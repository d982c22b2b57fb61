//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Product not found: {0}")]
    ProductNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Unknown product status: {0}")]
    InvalidProductStatus(String),

    #[error("Unknown content type: {0}")]
    InvalidContentType(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Product already in favorites")]
    AlreadyFavorited,
}

impl DomainError {
    /// Stable error code for logs and rendered output
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ProductNotFound(_) => "UNKNOWN_PRODUCT",
            Self::InvalidProductStatus(_) => "INVALID_PRODUCT_STATUS",
            Self::InvalidContentType(_) => "INVALID_CONTENT_TYPE",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::AlreadyFavorited => "ALREADY_FAVORITED",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::ProductNotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidProductStatus(_) | Self::InvalidContentType(_)
        )
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists | Self::AlreadyFavorited)
    }
}
