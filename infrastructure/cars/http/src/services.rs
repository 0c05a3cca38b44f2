use car_command_handlers::{AddCarHandler, DeleteCarHandler, UpdateCarHandler};
use car_commands::{AddCarCommand, DeleteCarCommand, UpdateCarCommand};
use car_dao::CarStore;
use car_errors::CarError;
use car_models::{Car, CarId, CarPayload};
use car_queries::{GetCarQuery, IsBookedQuery, ListCarsQuery};
use car_query_handlers::{
    GetCarQueryHandler, IsBookedQueryHandler, ListCarsQueryHandler,
};

/// The operations of the car service, backed by one injected store.
///
/// Payloads are validated by the command handlers before the store is
/// touched; every failure comes back as a `CarError` value.
#[derive(Clone)]
pub struct CarServices {
    add_car_handler: AddCarHandler,
    update_car_handler: UpdateCarHandler,
    delete_car_handler: DeleteCarHandler,

    get_car_handler: GetCarQueryHandler,
    is_booked_handler: IsBookedQueryHandler,
    list_cars_handler: ListCarsQueryHandler,

    store: CarStore,
}

impl CarServices {
    pub fn new(store: CarStore) -> Self {
        Self {
            add_car_handler: AddCarHandler::new(store.clone()),
            update_car_handler: UpdateCarHandler::new(store.clone()),
            delete_car_handler: DeleteCarHandler::new(store.clone()),
            get_car_handler: GetCarQueryHandler::new(store.clone()),
            is_booked_handler: IsBookedQueryHandler::new(store.clone()),
            list_cars_handler: ListCarsQueryHandler::new(store.clone()),
            store,
        }
    }

    pub fn store(&self) -> &CarStore { &self.store }

    pub async fn add_car(&self, payload: CarPayload) -> Result<Car, CarError> {
        self.add_car_handler
            .execute(AddCarCommand { payload })
            .await
    }

    pub async fn get_car(&self, car_id: CarId) -> Result<Car, CarError> {
        self.get_car_handler.execute(GetCarQuery { car_id }).await
    }

    pub async fn update_car(
        &self, car_id: CarId, payload: CarPayload,
    ) -> Result<Car, CarError> {
        self.update_car_handler
            .execute(UpdateCarCommand { car_id, payload })
            .await
    }

    pub async fn delete_car(&self, car_id: CarId) -> Result<Car, CarError> {
        self.delete_car_handler
            .execute(DeleteCarCommand { car_id })
            .await
    }

    pub async fn is_booked(&self, car_id: CarId) -> Result<bool, CarError> {
        self.is_booked_handler
            .execute(IsBookedQuery { car_id })
            .await
    }

    pub async fn list_cars(
        &self, query: ListCarsQuery,
    ) -> Result<Vec<Car>, CarError> {
        self.list_cars_handler.execute(query).await
    }
}
