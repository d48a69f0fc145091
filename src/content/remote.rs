use crate::content::{ContentSource, RemoteMedia, RemotePost};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;

pub struct HttpContentSource {
    client: Client,
    base_url: String,
    per_page: u32,
}

impl HttpContentSource {
    pub fn new(base_url: String, per_page: u32) -> Self {
        Self {
            client: Client::new(),
            base_url,
            per_page,
        }
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn list_posts(&self) -> Result<Vec<RemotePost>> {
        let url = format!("{}/learning?per_page={}", self.base_url, self.per_page);

        let res = self.client.get(&url).send().await;

        match res {
            Ok(response) if response.status().is_success() => {
                let posts = response.json::<Vec<RemotePost>>().await?;
                Ok(posts)
            }
            Ok(response) => {
                anyhow::bail!(
                    "Failed to fetch learning posts. Status: {}",
                    response.status()
                );
            }
            Err(e) => {
                anyhow::bail!("Failed to reach content API at {}: {}", url, e);
            }
        }
    }

    async fn fetch_media(&self, media_id: i64) -> Result<RemoteMedia> {
        let url = format!("{}/media/{}", self.base_url, media_id);

        let res = self.client.get(&url).send().await;

        match res {
            Ok(response) if response.status().is_success() => {
                let media = response.json::<RemoteMedia>().await?;
                Ok(media)
            }
            Ok(response) => {
                anyhow::bail!(
                    "Media request for {} failed. Status: {}",
                    media_id,
                    response.status()
                );
            }
            Err(e) => {
                anyhow::bail!("Failed to reach media endpoint for {}: {}", media_id, e);
            }
        }
    }
}
