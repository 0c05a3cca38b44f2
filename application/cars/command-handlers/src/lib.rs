use car_commands::{AddCarCommand, DeleteCarCommand, UpdateCarCommand};
use car_dao::{CarDao, CarStore};
use car_errors::CarError;
use car_models::{Car, CarPayload};
use database_traits::dao::GenericDao;
use tracing::instrument;

/// Rejects a payload before any store access happens.
fn ensure_valid(payload: &CarPayload) -> Result<(), CarError> {
    payload.validate().map_err(|err| {
        tracing::warn!(field = err.field(), "rejected car payload: {err}");
        CarError::from(err)
    })
}

#[derive(Clone)]
pub struct AddCarHandler {
    car_dao: CarDao,
}

impl AddCarHandler {
    pub fn new(store: CarStore) -> Self {
        Self {
            car_dao: CarDao::new(store),
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, command: AddCarCommand) -> Result<Car, CarError> {
        ensure_valid(&command.payload)?;
        self.car_dao.create(command.payload).await
    }
}

#[derive(Clone)]
pub struct UpdateCarHandler {
    car_dao: CarDao,
}

impl UpdateCarHandler {
    pub fn new(store: CarStore) -> Self {
        Self {
            car_dao: CarDao::new(store),
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: UpdateCarCommand,
    ) -> Result<Car, CarError> {
        ensure_valid(&command.payload)?;
        self.car_dao.update(command.car_id, command.payload).await
    }
}

#[derive(Clone)]
pub struct DeleteCarHandler {
    car_dao: CarDao,
}

impl DeleteCarHandler {
    pub fn new(store: CarStore) -> Self {
        Self {
            car_dao: CarDao::new(store),
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: DeleteCarCommand,
    ) -> Result<Car, CarError> {
        self.car_dao.delete(command.car_id).await
    }
}
