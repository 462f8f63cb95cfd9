use anyhow::{Result, anyhow, bail};

use super::SegpicClient;
use crate::presentation::web::views::ImageView;

pub struct ImagesClient<'a> {
    client: &'a SegpicClient,
}

impl<'a> ImagesClient<'a> {
    pub fn new(client: &'a SegpicClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<ImageView>> {
        let url = self.client.endpoint("api/images")?;
        let response = self
            .client
            .request(reqwest::Method::GET, url)
            .send()
            .await?;
        self.client.handle_response(response).await
    }

    pub async fn toggle_flag(&self, id: &str) -> Result<ImageView> {
        if id.trim().is_empty() {
            bail!("image id must not be empty");
        }
        let mut url = self.client.endpoint("api/images/")?;
        url.path_segments_mut()
            .map_err(|()| anyhow!("API url cannot carry a path"))?
            .pop_if_empty()
            .push(id);
        let response = self
            .client
            .request(reqwest::Method::PATCH, url)
            .send()
            .await?;
        self.client.handle_response(response).await
    }
}
