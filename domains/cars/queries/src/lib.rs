use car_models::CarId;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GetCarQuery {
    pub car_id: CarId,
}

#[derive(Debug, Deserialize)]
pub struct IsBookedQuery {
    pub car_id: CarId,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ListCarsQuery {
    pub booked: Option<bool>,
}
