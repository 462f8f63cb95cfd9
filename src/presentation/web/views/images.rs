use serde::{Deserialize, Serialize};

use crate::domain::images::StoredImage;

/// Width the frontend renders thumbnails at.
pub const DISPLAY_WIDTH: i64 = 500;

/// Shape of an image in API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageView {
    pub id: String,
    pub author: String,
    pub flag: bool,
    pub download_url: String,
}

impl From<StoredImage> for ImageView {
    fn from(image: StoredImage) -> Self {
        let download_url = image.sized_url(DISPLAY_WIDTH);
        let StoredImage {
            id, author, flagged, ..
        } = image;

        Self {
            id,
            author,
            flag: flagged,
            download_url,
        }
    }
}
