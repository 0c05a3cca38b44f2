pub mod config;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use car_dao::CarStore;
use car_http::{CarHandlers, CarServices};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

pub use config::ServerConfig;

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check,
        car_http::add_car,
        car_http::list_cars,
        car_http::get_car,
        car_http::update_car,
        car_http::delete_car,
        car_http::is_booked,
        car_http::invoke_rpc
    ),
    components(
        schemas(
            car_models::Car,
            car_models::CarPayload,
            car_errors::CarError,
            car_responses::CarResult,
            car_responses::BooleanResult,
            car_responses::BookingStatusResponse,
            car_http::ListCarsParams,
            common_errors::ApiErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "cars", description = "Car registry endpoints"),
        (name = "rpc", description = "Method-name dispatch for service clients")
    ),
    info(
        title = "Car Registry API",
        description = "In-memory car records with booking status",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check successful with the number of stored cars", body = String)
    ),
    tag = "health"
)]
pub async fn health_check(
    State(services): State<CarServices>,
) -> impl IntoResponse {
    let cars = services.store().len().await;

    (StatusCode::OK, format!("OK - {cars} cars stored"))
}

/// The full application: car routes, RPC dispatch, health and docs.
pub fn build_app(store: CarStore) -> Router {
    let services = CarServices::new(store);

    let api_routes = CarHandlers::routes()
        .route("/health", get(health_check))
        .with_state(services);

    Router::new()
        .merge(api_routes)
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/docs"))
        .route(
            "/api-docs/openapi.json",
            get(|| async { axum::Json(ApiDoc::openapi()) }),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
