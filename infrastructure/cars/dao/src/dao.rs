use async_trait::async_trait;
use car_errors::CarError;
use car_models::{Car, CarId, CarPayload};
use database_traits::dao::GenericDao;
use tracing::instrument;

use crate::CarStore;

#[derive(Clone, Debug)]
pub struct CarDao {
    store: CarStore,
}

impl CarDao {
    pub fn new(store: CarStore) -> Self { Self { store } }

    pub fn store(&self) -> &CarStore { &self.store }

    #[instrument(skip(self))]
    pub async fn is_booked(&self, id: CarId) -> Result<bool, CarError> {
        let table = self.store.read().await;
        table
            .cars
            .get(&id)
            .map(|car| car.is_booked)
            .ok_or_else(|| CarError::not_found(id))
    }
}

#[async_trait]
impl GenericDao for CarDao {
    type CreateRequest = CarPayload;
    type Error = CarError;
    type ID = CarId;
    type Response = Car;
    type UpdateRequest = CarPayload;

    #[instrument(skip(self))]
    async fn find_by_id(
        &self, id: Self::ID,
    ) -> Result<Self::Response, Self::Error> {
        let table = self.store.read().await;
        table
            .cars
            .get(&id)
            .cloned()
            .ok_or_else(|| CarError::not_found(id))
    }

    #[instrument(skip(self))]
    async fn all(&self) -> Result<Vec<Self::Response>, Self::Error> {
        let table = self.store.read().await;
        Ok(table.cars.values().cloned().collect())
    }

    #[instrument(skip_all)]
    async fn create(
        &self, req: Self::CreateRequest,
    ) -> Result<Self::Response, Self::Error> {
        let mut table = self.store.write().await;

        let id = table.issue_id().ok_or_else(|| {
            CarError::internal("car identifier space exhausted")
        })?;
        let car = Car::new(id, req, self.store.clock().now_nanos());
        table.cars.insert(id, car.clone());

        tracing::info!(car.id = id, "car stored");
        Ok(car)
    }

    #[instrument(skip(self, req))]
    async fn update(
        &self, id: Self::ID, req: Self::UpdateRequest,
    ) -> Result<Self::Response, Self::Error> {
        let mut table = self.store.write().await;

        let car = table
            .cars
            .get_mut(&id)
            .ok_or_else(|| CarError::not_found(id))?;
        car.apply_update(req, self.store.clock().now_nanos());

        tracing::info!(car.id = id, car.is_booked = car.is_booked, "car updated");
        Ok(car.clone())
    }

    #[instrument(skip(self))]
    async fn delete(
        &self, id: Self::ID,
    ) -> Result<Self::Response, Self::Error> {
        let mut table = self.store.write().await;

        let car = table
            .cars
            .remove(&id)
            .ok_or_else(|| CarError::not_found(id))?;

        tracing::info!(car.id = id, "car removed");
        Ok(car)
    }
}
