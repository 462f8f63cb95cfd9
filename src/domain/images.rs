use serde::{Deserialize, Serialize};

/// Base for resized image links handed out to the frontend.
pub const IMAGE_HOST: &str = "https://picsum.photos";

/// Image metadata exactly as the catalog reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: String,
    pub author: String,
    pub width: i64,
    pub height: i64,
    pub url: String,
    pub download_url: String,
}

impl ImageRecord {
    /// Link to this image scaled to `width`, keeping the original aspect ratio.
    pub fn sized_url(&self, width: i64) -> String {
        sized_url(&self.id, self.width, self.height, width)
    }
}

/// A cached catalog image plus the user-controlled flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredImage {
    pub id: String,
    pub author: String,
    pub width: i64,
    pub height: i64,
    pub url: String,
    pub download_url: String,
    #[serde(default)]
    pub flagged: bool,
}

impl StoredImage {
    pub fn toggled(mut self) -> Self {
        self.flagged = !self.flagged;
        self
    }

    pub fn sized_url(&self, width: i64) -> String {
        sized_url(&self.id, self.width, self.height, width)
    }
}

impl From<ImageRecord> for StoredImage {
    fn from(record: ImageRecord) -> Self {
        let ImageRecord {
            id,
            author,
            width,
            height,
            url,
            download_url,
        } = record;

        Self {
            id,
            author,
            width,
            height,
            url,
            download_url,
            flagged: false,
        }
    }
}

fn sized_url(id: &str, original_width: i64, original_height: i64, width: i64) -> String {
    let height = scaled_height(original_width, original_height, width);
    format!("{IMAGE_HOST}/id/{id}/{width}/{height}")
}

/// Height matching `width` at the original aspect ratio, truncated toward zero.
fn scaled_height(original_width: i64, original_height: i64, width: i64) -> i64 {
    if original_width == 0 {
        return 0;
    }
    (width as f64 * original_height as f64 / original_width as f64) as i64
}
