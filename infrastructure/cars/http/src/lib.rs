pub mod handlers;
pub mod rpc;
pub mod services;

use axum::{
    Router,
    routing::{get, post},
};
use car_dao::CarStore;

pub use handlers::*;
pub use rpc::*;
pub use services::CarServices;

pub struct CarHandlers;

impl CarHandlers {
    pub fn routes() -> Router<CarServices> {
        Router::new()
            .route("/cars", get(list_cars).post(add_car))
            .route(
                "/cars/{id}",
                get(get_car).put(update_car).delete(delete_car),
            )
            .route("/cars/{id}/booked", get(is_booked))
            .route("/rpc/{method}", post(invoke_rpc))
    }
}

pub fn car_routes(store: CarStore) -> Router {
    CarHandlers::routes().with_state(CarServices::new(store))
}
