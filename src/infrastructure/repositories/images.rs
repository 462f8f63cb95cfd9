use async_trait::async_trait;
use sqlx::{query, query_as};

use crate::domain::RepositoryError;
use crate::domain::images::StoredImage;
use crate::domain::repositories::ImageRepository;
use crate::infrastructure::database::{DatabasePool, DatabaseTransaction};

/// Key-value image store: one row per image id holding the JSON-encoded `StoredImage`.
#[derive(Clone)]
pub struct SqlImageRepository {
    pool: DatabasePool,
}

impl SqlImageRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    fn decode(record: &EntryRecord) -> Result<StoredImage, RepositoryError> {
        serde_json::from_str(&record.value).map_err(|err| {
            RepositoryError::decode(format!("image {}: {err}", record.key))
        })
    }

    fn encode(image: &StoredImage) -> Result<String, RepositoryError> {
        serde_json::to_string(image)
            .map_err(|err| RepositoryError::storage(format!("image {}: {err}", image.id)))
    }

    async fn put(
        tx: &mut DatabaseTransaction<'_>,
        key: &str,
        value: &str,
    ) -> Result<(), RepositoryError> {
        query(
            r"INSERT INTO images (key, value) VALUES (?, ?)
              ON CONFLICT (key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&mut **tx)
        .await
        .map_err(|err| RepositoryError::storage(err.to_string()))?;

        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct EntryRecord {
    key: String,
    value: String,
}

#[async_trait]
impl ImageRepository for SqlImageRepository {
    async fn list_all(&self) -> Result<Vec<StoredImage>, RepositoryError> {
        let records = query_as::<_, EntryRecord>(r"SELECT key, value FROM images ORDER BY key")
            .fetch_all(&self.pool)
            .await
            .map_err(|err| RepositoryError::storage(err.to_string()))?;

        records.iter().map(Self::decode).collect()
    }

    async fn save_all(&self, images: &[StoredImage]) -> Result<(), RepositoryError> {
        // Encode the whole batch up front so a bad record aborts before anything is written.
        let entries = images
            .iter()
            .map(|image| Self::encode(image).map(|value| (image.id.as_str(), value)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|err| RepositoryError::storage(err.to_string()))?;

        for (key, value) in &entries {
            Self::put(&mut tx, key, value).await?;
        }

        tx.commit()
            .await
            .map_err(|err| RepositoryError::storage(err.to_string()))?;

        Ok(())
    }

    async fn toggle_flag(&self, id: &str) -> Result<StoredImage, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|err| RepositoryError::storage(err.to_string()))?;

        // Take the write lock before reading so concurrent toggles of one key
        // run one after another against the latest value.
        let claimed = query(r"UPDATE images SET value = value WHERE key = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|err| RepositoryError::storage(err.to_string()))?
            .rows_affected();

        if claimed == 0 {
            return Err(RepositoryError::NotFound);
        }

        let record = query_as::<_, EntryRecord>(r"SELECT key, value FROM images WHERE key = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|err| RepositoryError::storage(err.to_string()))?
            .ok_or(RepositoryError::NotFound)?;

        let image = Self::decode(&record)?.toggled();
        let value = Self::encode(&image)?;
        Self::put(&mut tx, &record.key, &value).await?;

        tx.commit()
            .await
            .map_err(|err| RepositoryError::storage(err.to_string()))?;

        Ok(image)
    }
}
