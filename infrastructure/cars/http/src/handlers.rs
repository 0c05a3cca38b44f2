use axum::{
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::Json,
};
use car_models::{Car, CarId, CarPayload};
use car_queries::ListCarsQuery;
use car_responses::BookingStatusResponse;
use common_errors::AppError;
use serde::Deserialize;
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};

use crate::CarServices;

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ListCarsParams {
    /// Only return cars whose booking flag matches.
    pub booked: Option<bool>,
}

/// A body that is not a well-formed car payload, e.g. missing `is_booked`.
fn payload_rejection(rejection: JsonRejection) -> AppError {
    AppError::unprocessable_entity(
        "INVALID_CAR_PAYLOAD",
        "Request body is not a valid car payload",
    )
    .with_details(rejection.body_text())
}

fn id_rejection(rejection: PathRejection) -> AppError {
    AppError::bad_request(
        "INVALID_CAR_ID",
        "Car id must be a non-negative integer",
    )
    .with_details(rejection.body_text())
}

fn query_rejection(rejection: QueryRejection) -> AppError {
    AppError::bad_request(
        "INVALID_QUERY_PARAMS",
        "Invalid query parameters provided",
    )
    .with_details(rejection.body_text())
}

#[utoipa::path(
    post,
    path = "/cars",
    request_body = CarPayload,
    responses(
        (status = 201, description = "Car created successfully", body = Car),
        (status = 422, description = "Payload failed validation", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "cars"
)]
#[instrument(skip_all)]
pub async fn add_car(
    State(services): State<CarServices>,
    payload: Result<Json<CarPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Car>), AppError> {
    let Json(payload) = payload.map_err(payload_rejection)?;
    let car = services.add_car(payload).await?;

    tracing::info!("Car created: {}", car.id);

    Ok((StatusCode::CREATED, Json(car)))
}

#[utoipa::path(
    get,
    path = "/cars",
    params(ListCarsParams),
    responses(
        (status = 200, description = "Every stored car, ordered by id", body = Vec<Car>),
        (status = 400, description = "Invalid query parameters", body = common_errors::ApiErrorResponse)
    ),
    tag = "cars"
)]
#[instrument(skip_all)]
pub async fn list_cars(
    State(services): State<CarServices>,
    params: Result<Query<ListCarsParams>, QueryRejection>,
) -> Result<Json<Vec<Car>>, AppError> {
    let Query(params) = params.map_err(query_rejection)?;
    let cars = services
        .list_cars(ListCarsQuery {
            booked: params.booked,
        })
        .await?;
    Ok(Json(cars))
}

#[utoipa::path(
    get,
    path = "/cars/{id}",
    params(
        ("id" = u64, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "Car found", body = Car),
        (status = 400, description = "Car id is not a number", body = common_errors::ApiErrorResponse),
        (status = 404, description = "Car not found", body = common_errors::ApiErrorResponse)
    ),
    tag = "cars"
)]
#[instrument(skip_all)]
pub async fn get_car(
    State(services): State<CarServices>,
    id: Result<Path<CarId>, PathRejection>,
) -> Result<Json<Car>, AppError> {
    let Path(id) = id.map_err(id_rejection)?;
    let car = services.get_car(id).await?;
    Ok(Json(car))
}

#[utoipa::path(
    put,
    path = "/cars/{id}",
    request_body = CarPayload,
    params(
        ("id" = u64, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "Car updated successfully", body = Car),
        (status = 400, description = "Car id is not a number", body = common_errors::ApiErrorResponse),
        (status = 404, description = "Car not found", body = common_errors::ApiErrorResponse),
        (status = 422, description = "Payload failed validation", body = common_errors::ApiErrorResponse)
    ),
    tag = "cars"
)]
#[instrument(skip_all)]
pub async fn update_car(
    State(services): State<CarServices>,
    id: Result<Path<CarId>, PathRejection>,
    payload: Result<Json<CarPayload>, JsonRejection>,
) -> Result<Json<Car>, AppError> {
    let Path(id) = id.map_err(id_rejection)?;
    let Json(payload) = payload.map_err(payload_rejection)?;
    let car = services.update_car(id, payload).await?;
    Ok(Json(car))
}

#[utoipa::path(
    delete,
    path = "/cars/{id}",
    params(
        ("id" = u64, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "Car deleted; the removed record is returned", body = Car),
        (status = 400, description = "Car id is not a number", body = common_errors::ApiErrorResponse),
        (status = 404, description = "Car not found", body = common_errors::ApiErrorResponse)
    ),
    tag = "cars"
)]
#[instrument(skip_all)]
pub async fn delete_car(
    State(services): State<CarServices>,
    id: Result<Path<CarId>, PathRejection>,
) -> Result<Json<Car>, AppError> {
    let Path(id) = id.map_err(id_rejection)?;
    let car = services.delete_car(id).await?;

    tracing::info!("Car deleted: {}", car.id);

    Ok(Json(car))
}

#[utoipa::path(
    get,
    path = "/cars/{id}/booked",
    params(
        ("id" = u64, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "Booking flag of the car", body = BookingStatusResponse),
        (status = 400, description = "Car id is not a number", body = common_errors::ApiErrorResponse),
        (status = 404, description = "Car not found", body = common_errors::ApiErrorResponse)
    ),
    tag = "cars"
)]
#[instrument(skip_all)]
pub async fn is_booked(
    State(services): State<CarServices>,
    id: Result<Path<CarId>, PathRejection>,
) -> Result<Json<BookingStatusResponse>, AppError> {
    let Path(id) = id.map_err(id_rejection)?;
    let is_booked = services.is_booked(id).await?;
    Ok(Json(BookingStatusResponse { id, is_booked }))
}
