use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

/// Keyed CRUD access to a single record type.
///
/// `delete` hands back the removed record so callers can confirm what was
/// dropped.
#[async_trait]
pub trait GenericDao {
    type Response: Send + Sync + 'static;
    type CreateRequest: Send + Sync + 'static;
    type UpdateRequest: Send + Sync + 'static;
    type Error: Send + 'static;
    type ID: Serialize + DeserializeOwned + Send + Sync + 'static;

    async fn find_by_id(
        &self, id: Self::ID,
    ) -> Result<Self::Response, Self::Error>;

    async fn all(&self) -> Result<Vec<Self::Response>, Self::Error>;

    async fn create(
        &self, req: Self::CreateRequest,
    ) -> Result<Self::Response, Self::Error>;

    async fn update(
        &self, id: Self::ID, req: Self::UpdateRequest,
    ) -> Result<Self::Response, Self::Error>;

    async fn delete(
        &self, id: Self::ID,
    ) -> Result<Self::Response, Self::Error>;
}
