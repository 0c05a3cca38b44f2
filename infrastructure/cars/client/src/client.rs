use car_errors::CarError;
use car_models::{Car, CarId, CarPayload, PayloadValidationError};
use car_responses::{BooleanResult, CarResult, methods};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;
use tracing::instrument;

use crate::{Transport, TransportError};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid car payload: {0}")]
    InvalidPayload(#[from] PayloadValidationError),
    #[error(transparent)]
    Service(#[from] CarError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("could not encode arguments for `{method}`: {source}")]
    Encode {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not decode response of `{method}`: {source}")]
    Decode {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// The service's own error, if the call got that far.
    pub fn service_error(&self) -> Option<&CarError> {
        match self {
            Self::Service(err) => Some(err),
            _ => None,
        }
    }
}

/// Typed bindings for the car service.
///
/// Tagged `Err` results are unwrapped into `ClientError::Service`, so
/// callers only ever see the success payload on the `Ok` side. Payloads are
/// checked locally before anything is sent.
#[derive(Debug, Clone)]
pub struct CarServiceClient<T> {
    transport: T,
}

impl<T: Transport> CarServiceClient<T> {
    pub fn new(transport: T) -> Self { Self { transport } }

    pub fn transport(&self) -> &T { &self.transport }

    async fn call<A, R>(
        &self, method: &'static str, args: A,
    ) -> Result<R, ClientError>
    where
        A: Serialize,
        R: DeserializeOwned,
    {
        let args = serde_json::to_value(args)
            .map_err(|source| ClientError::Encode { method, source })?;
        let raw: Value = self.transport.invoke(method, args).await?;
        serde_json::from_value(raw)
            .map_err(|source| ClientError::Decode { method, source })
    }

    /// Creates a car. `None` means the service declined to store it.
    #[instrument(skip(self))]
    pub async fn add_car(
        &self, payload: &CarPayload,
    ) -> Result<Option<Car>, ClientError> {
        payload.validate()?;
        self.call(methods::ADD_CAR, (payload,)).await
    }

    #[instrument(skip(self))]
    pub async fn get_car(&self, id: CarId) -> Result<Car, ClientError> {
        let result: CarResult = self.call(methods::GET_CAR, (id,)).await?;
        unwrap_car(result)
    }

    #[instrument(skip(self))]
    pub async fn update_car(
        &self, id: CarId, payload: &CarPayload,
    ) -> Result<Car, ClientError> {
        payload.validate()?;
        let result: CarResult =
            self.call(methods::UPDATE_CAR, (id, payload)).await?;
        unwrap_car(result)
    }

    #[instrument(skip(self))]
    pub async fn delete_car(&self, id: CarId) -> Result<Car, ClientError> {
        let result: CarResult = self.call(methods::DELETE_CAR, (id,)).await?;
        unwrap_car(result)
    }

    #[instrument(skip(self))]
    pub async fn is_booked(&self, id: CarId) -> Result<bool, ClientError> {
        let result: BooleanResult =
            self.call(methods::IS_BOOKED, (id,)).await?;
        let result: Result<bool, CarError> = result.into();
        Ok(result?)
    }
}

fn unwrap_car(result: CarResult) -> Result<Car, ClientError> {
    let result: Result<Car, CarError> = result.into();
    Ok(result?)
}
