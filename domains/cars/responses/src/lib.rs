use car_errors::CarError;
use car_models::{Car, CarId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Method names of the RPC surface.
pub mod methods {
    pub const ADD_CAR: &str = "add_car";
    pub const GET_CAR: &str = "get_car";
    pub const UPDATE_CAR: &str = "update_car";
    pub const DELETE_CAR: &str = "delete_car";
    pub const IS_BOOKED: &str = "is_booked";

    pub const ALL: [&str; 5] =
        [ADD_CAR, GET_CAR, UPDATE_CAR, DELETE_CAR, IS_BOOKED];
}

/// Wire form of `Result<Car, CarError>`: `{"Ok":{..}}` or `{"Err":{..}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CarResult {
    Ok(Car),
    Err(CarError),
}

/// Wire form of `Result<bool, CarError>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum BooleanResult {
    Ok(bool),
    Err(CarError),
}

impl From<Result<Car, CarError>> for CarResult {
    fn from(result: Result<Car, CarError>) -> Self {
        match result {
            Ok(car) => Self::Ok(car),
            Err(err) => Self::Err(err),
        }
    }
}

impl From<CarResult> for Result<Car, CarError> {
    fn from(result: CarResult) -> Self {
        match result {
            CarResult::Ok(car) => Ok(car),
            CarResult::Err(err) => Err(err),
        }
    }
}

impl From<Result<bool, CarError>> for BooleanResult {
    fn from(result: Result<bool, CarError>) -> Self {
        match result {
            Ok(flag) => Self::Ok(flag),
            Err(err) => Self::Err(err),
        }
    }
}

impl From<BooleanResult> for Result<bool, CarError> {
    fn from(result: BooleanResult) -> Self {
        match result {
            BooleanResult::Ok(flag) => Ok(flag),
            BooleanResult::Err(err) => Err(err),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingStatusResponse {
    pub id: CarId,
    pub is_booked: bool,
}
