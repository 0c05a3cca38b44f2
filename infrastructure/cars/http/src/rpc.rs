//! Method-name dispatch for the RPC surface.
//!
//! Arguments arrive as a JSON array of positional values, e.g.
//! `[1, {"make": "Toyota", ..}]` for `update_car`. Results keep the tagged
//! `{"Ok": ..}` / `{"Err": ..}` shapes, except `add_car` which answers with
//! the car or `null`.

use axum::{
    extract::{Path, State, rejection::JsonRejection},
    response::Json,
};
use car_models::{CarId, CarPayload};
use car_responses::{BooleanResult, CarResult, methods};
use common_errors::AppError;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;
use tracing::instrument;

use crate::CarServices;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("unknown method `{0}`")]
    UnknownMethod(String),
    #[error("invalid arguments for `{method}`: {reason}")]
    InvalidArguments { method: String, reason: String },
    #[error("failed to encode result of `{method}`: {source}")]
    Encode {
        method: String,
        #[source]
        source: serde_json::Error,
    },
}

impl From<RpcError> for AppError {
    fn from(err: RpcError) -> Self {
        match &err {
            RpcError::UnknownMethod(_) => {
                AppError::not_found("UNKNOWN_METHOD", &err.to_string())
                    .with_details(format!(
                        "available methods: {}",
                        methods::ALL.join(", ")
                    ))
            }
            RpcError::InvalidArguments { .. } => {
                AppError::bad_request("INVALID_ARGUMENTS", &err.to_string())
            }
            RpcError::Encode { .. } => {
                AppError::internal_server_error(&err.to_string())
            }
        }
    }
}

fn decode_args<T: DeserializeOwned>(
    method: &str, args: Value,
) -> Result<T, RpcError> {
    serde_json::from_value(args).map_err(|err| {
        RpcError::InvalidArguments {
            method: method.to_string(),
            reason: err.to_string(),
        }
    })
}

fn encode<T: Serialize>(method: &str, value: &T) -> Result<Value, RpcError> {
    serde_json::to_value(value).map_err(|source| {
        RpcError::Encode {
            method: method.to_string(),
            source,
        }
    })
}

impl CarServices {
    #[instrument(skip(self, args))]
    pub async fn invoke(
        &self, method: &str, args: Value,
    ) -> Result<Value, RpcError> {
        match method {
            methods::ADD_CAR => {
                let (payload,): (CarPayload,) = decode_args(method, args)?;
                let car = match self.add_car(payload).await {
                    Ok(car) => Some(car),
                    Err(err) => {
                        tracing::warn!("add_car answered with none: {err}");
                        None
                    }
                };
                encode(method, &car)
            }
            methods::GET_CAR => {
                let (car_id,): (CarId,) = decode_args(method, args)?;
                encode(method, &CarResult::from(self.get_car(car_id).await))
            }
            methods::UPDATE_CAR => {
                let (car_id, payload): (CarId, CarPayload) =
                    decode_args(method, args)?;
                let result = self.update_car(car_id, payload).await;
                encode(method, &CarResult::from(result))
            }
            methods::DELETE_CAR => {
                let (car_id,): (CarId,) = decode_args(method, args)?;
                let result = self.delete_car(car_id).await;
                encode(method, &CarResult::from(result))
            }
            methods::IS_BOOKED => {
                let (car_id,): (CarId,) = decode_args(method, args)?;
                let result = self.is_booked(car_id).await;
                encode(method, &BooleanResult::from(result))
            }
            other => {
                tracing::warn!("Unknown RPC method: {other}");
                Err(RpcError::UnknownMethod(other.to_string()))
            }
        }
    }
}

#[utoipa::path(
    post,
    path = "/rpc/{method}",
    params(
        ("method" = String, Path, description = "One of add_car, get_car, update_car, delete_car, is_booked")
    ),
    responses(
        (status = 200, description = "Method result in its tagged wire shape"),
        (status = 400, description = "Arguments are not a JSON array matching the method", body = common_errors::ApiErrorResponse),
        (status = 404, description = "Unknown method", body = common_errors::ApiErrorResponse)
    ),
    tag = "rpc"
)]
#[instrument(skip_all)]
pub async fn invoke_rpc(
    State(services): State<CarServices>, Path(method): Path<String>,
    args: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(args) = args.map_err(|rejection| {
        AppError::bad_request(
            "INVALID_ARGUMENTS",
            "Request body is not a JSON argument array",
        )
        .with_details(rejection.body_text())
    })?;
    let result = services.invoke(&method, args).await?;
    Ok(Json(result))
}
