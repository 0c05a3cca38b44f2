use car_models::{CarId, PayloadValidationError};
use common_errors::AppError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

pub const NOT_FOUND_CODE: u32 = 404;
pub const INVALID_PAYLOAD_CODE: u32 = 400;
pub const INTERNAL_CODE: u32 = 500;

/// Typed failure returned by every fallible car operation.
///
/// Serialized externally tagged, e.g.
/// `{"NotFound":{"code":404,"msg":"car with id=1 not found"}}`.
#[derive(
    Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, ToSchema,
)]
pub enum CarError {
    #[error("{msg}")]
    NotFound { code: u32, msg: String },
    #[error("{msg}")]
    InvalidPayload { code: u32, msg: String },
    #[error("{msg}")]
    Internal { code: u32, msg: String },
}

impl CarError {
    pub fn not_found(id: CarId) -> Self {
        Self::NotFound {
            code: NOT_FOUND_CODE,
            msg: format!("car with id={id} not found"),
        }
    }

    pub fn invalid_payload(msg: impl Into<String>) -> Self {
        Self::InvalidPayload {
            code: INVALID_PAYLOAD_CODE,
            msg: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal {
            code: INTERNAL_CODE,
            msg: msg.into(),
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            Self::NotFound { code, .. }
            | Self::InvalidPayload { code, .. }
            | Self::Internal { code, .. } => *code,
        }
    }

    pub fn msg(&self) -> &str {
        match self {
            Self::NotFound { msg, .. }
            | Self::InvalidPayload { msg, .. }
            | Self::Internal { msg, .. } => msg,
        }
    }

    pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound { .. }) }
}

impl From<PayloadValidationError> for CarError {
    fn from(err: PayloadValidationError) -> Self {
        Self::invalid_payload(format!("invalid car payload: {err}"))
    }
}

impl From<CarError> for AppError {
    fn from(err: CarError) -> Self {
        match err {
            CarError::NotFound { msg, .. } => {
                AppError::not_found("CAR_NOT_FOUND", &msg)
            }
            CarError::InvalidPayload { msg, .. } => {
                AppError::unprocessable_entity("INVALID_CAR_PAYLOAD", &msg)
            }
            CarError::Internal { msg, .. } => {
                AppError::internal_server_error(&msg)
            }
        }
    }
}
