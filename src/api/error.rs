//! API error type.
//!
//! Every handler failure ends up as an [`ApiError`], rendered as
//!
//! ```json
//! { "code": "CUSTOMER_NOT_FOUND", "message": "Customer with identifier '9' not found" }
//! ```

use axum::Json;
use axum::http::header::WWW_AUTHENTICATE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::api::dto::ErrorResponse;
use crate::domain::{CustomerIdError, PointEventError};
use crate::infrastructure::{CredentialError, LedgerError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthenticated.")]
    Unauthenticated,

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("{entity_type} with identifier '{identifier}' not found")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

// =============================================================================
// Factory Methods
// =============================================================================

impl ApiError {
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found(entity_type: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            identifier: identifier.into(),
        }
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// =============================================================================
// Query Methods
// =============================================================================

impl ApiError {
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub fn error_code(&self) -> String {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED".to_string(),
            Self::Validation { .. } => "VALIDATION_ERROR".to_string(),
            Self::NotFound { entity_type, .. } => {
                format!("{}_NOT_FOUND", entity_type.to_uppercase().replace(' ', "_"))
            }
            Self::Internal { .. } => "INTERNAL_ERROR".to_string(),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<LedgerError> for ApiError {
    fn from(error: LedgerError) -> Self {
        match error {
            LedgerError::UnknownCustomer(customer_id) => {
                Self::not_found("Customer", customer_id.to_string())
            }
            LedgerError::Storage(message) => {
                tracing::error!(error = %message, "Point ledger failure");
                Self::internal("point ledger unavailable")
            }
        }
    }
}

impl From<CredentialError> for ApiError {
    fn from(error: CredentialError) -> Self {
        tracing::error!(error = %error, "Credential validation failure");
        Self::internal("credential store unavailable")
    }
}

impl From<PointEventError> for ApiError {
    fn from(error: PointEventError) -> Self {
        Self::validation(error.to_string())
    }
}

impl From<CustomerIdError> for ApiError {
    fn from(error: CustomerIdError) -> Self {
        Self::validation(error.to_string())
    }
}

// =============================================================================
// IntoResponse Implementation
// =============================================================================

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let body = ErrorResponse::new(self.error_code(), self.to_string());

        let mut response = (status_code, Json(body)).into_response();
        if matches!(self, Self::Unauthenticated) {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
