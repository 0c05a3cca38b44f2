use car_models::{CarId, CarPayload};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddCarCommand {
    pub payload: CarPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateCarCommand {
    pub car_id: CarId,
    pub payload: CarPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteCarCommand {
    pub car_id: CarId,
}
