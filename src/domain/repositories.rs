use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::images::StoredImage;

#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// Every cached image, in store iteration order.
    async fn list_all(&self) -> Result<Vec<StoredImage>, RepositoryError>;

    /// Upsert all images keyed by id. Either the whole batch lands or none of it does.
    async fn save_all(&self, images: &[StoredImage]) -> Result<(), RepositoryError>;

    /// Flip the flag on one image and return the updated value.
    async fn toggle_flag(&self, id: &str) -> Result<StoredImage, RepositoryError>;
}
