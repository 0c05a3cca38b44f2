use car_dao::{CarDao, CarStore};
use car_errors::CarError;
use car_models::Car;
use car_queries::{GetCarQuery, IsBookedQuery, ListCarsQuery};
use database_traits::dao::GenericDao;
use tracing::instrument;

#[derive(Clone)]
pub struct GetCarQueryHandler {
    car_dao: CarDao,
}

impl GetCarQueryHandler {
    pub fn new(store: CarStore) -> Self {
        Self {
            car_dao: CarDao::new(store),
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, query: GetCarQuery) -> Result<Car, CarError> {
        let car = self.car_dao.find_by_id(query.car_id).await?;
        tracing::debug!("Found car {}", car.id);
        Ok(car)
    }
}

#[derive(Clone)]
pub struct IsBookedQueryHandler {
    car_dao: CarDao,
}

impl IsBookedQueryHandler {
    pub fn new(store: CarStore) -> Self {
        Self {
            car_dao: CarDao::new(store),
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, query: IsBookedQuery) -> Result<bool, CarError> {
        self.car_dao.is_booked(query.car_id).await
    }
}

#[derive(Clone)]
pub struct ListCarsQueryHandler {
    car_dao: CarDao,
}

impl ListCarsQueryHandler {
    pub fn new(store: CarStore) -> Self {
        Self {
            car_dao: CarDao::new(store),
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, query: ListCarsQuery,
    ) -> Result<Vec<Car>, CarError> {
        let mut cars = self.car_dao.all().await?;

        if let Some(booked) = query.booked {
            cars.retain(|car| car.is_booked == booked);
        }

        tracing::debug!("Listing {} cars", cars.len());
        Ok(cars)
    }
}
