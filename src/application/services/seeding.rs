use tracing::info;

use crate::domain::errors::RepositoryError;
use crate::domain::images::{ImageRecord, StoredImage};
use crate::domain::repositories::ImageRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store already had data; nothing was written.
    AlreadySeeded { existing: usize },
    Seeded { inserted: usize },
}

/// Populate an empty store from catalog records.
///
/// A non-empty store is left alone, so this is safe to run on every start.
/// Cached data is never refreshed against a newer catalog.
pub async fn seed(
    repo: &dyn ImageRepository,
    records: Vec<ImageRecord>,
) -> Result<SeedOutcome, RepositoryError> {
    let existing = repo.list_all().await?;
    if !existing.is_empty() {
        info!(existing = existing.len(), "image store already seeded");
        return Ok(SeedOutcome::AlreadySeeded {
            existing: existing.len(),
        });
    }

    let images: Vec<StoredImage> = records.into_iter().map(StoredImage::from).collect();
    repo.save_all(&images).await?;

    info!(inserted = images.len(), "seeded image store");
    Ok(SeedOutcome::Seeded {
        inserted: images.len(),
    })
}
