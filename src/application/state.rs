use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::repositories::ImageRepository;
use crate::infrastructure::database::Database;
use crate::infrastructure::repositories::images::SqlImageRepository;

/// Everything that varies between production and test environments.
pub struct AppStateConfig {
    /// Directory holding the pre-built frontend bundle.
    pub static_dir: PathBuf,
}

#[derive(Clone)]
pub struct AppState {
    pub image_repo: Arc<dyn ImageRepository>,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(image_repo: Arc<dyn ImageRepository>, config: AppStateConfig) -> Self {
        Self {
            image_repo,
            static_dir: config.static_dir,
        }
    }

    /// Build the application state on top of an open database.
    pub fn from_database(database: &Database, config: AppStateConfig) -> Self {
        let image_repo: Arc<dyn ImageRepository> =
            Arc::new(SqlImageRepository::new(database.clone_pool()));
        Self::new(image_repo, config)
    }
}
