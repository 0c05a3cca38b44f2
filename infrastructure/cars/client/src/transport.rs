use async_trait::async_trait;
use car_http::{CarServices, RpcError};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("method `{0}` is not exposed by the service")]
    UnknownMethod(String),
    #[error("service rejected the call: {0}")]
    Rejected(String),
    #[error("transport failure: {0}")]
    Other(String),
}

impl From<RpcError> for TransportError {
    fn from(err: RpcError) -> Self {
        match err {
            RpcError::UnknownMethod(method) => Self::UnknownMethod(method),
            RpcError::InvalidArguments { .. } => Self::Rejected(err.to_string()),
            RpcError::Encode { .. } => Self::Other(err.to_string()),
        }
    }
}

/// The single call interface the client needs from whatever carries its
/// requests: a method name plus the positional arguments as a JSON array.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn invoke(
        &self, method: &str, args: Value,
    ) -> Result<Value, TransportError>;
}

/// Calls the service in-process, without any wire in between.
#[async_trait]
impl Transport for CarServices {
    async fn invoke(
        &self, method: &str, args: Value,
    ) -> Result<Value, TransportError> {
        Ok(CarServices::invoke(self, method, args).await?)
    }
}
