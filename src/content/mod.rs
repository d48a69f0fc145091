use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

pub mod remote;

// the remote CMS seam: one call for the post list, one per featured image.
// http specific implementation in "remote.rs", mocks live with the tests
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn list_posts(&self) -> Result<Vec<RemotePost>>;
    async fn fetch_media(&self, media_id: i64) -> Result<RemoteMedia>;
}

// wire shape of a post record exactly as the CMS returns it
#[derive(Deserialize, Debug, Clone)]
pub struct RemotePost {
    pub id: i64,
    pub title: RenderedText,
    pub content: RenderedText,
    #[serde(default)]
    pub categories: Vec<i64>,
    // 0 means "no featured image"
    #[serde(default)]
    pub featured_media: i64,
}

// the CMS nests rendered markup under a "rendered" key
#[derive(Deserialize, Debug, Clone)]
pub struct RenderedText {
    pub rendered: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RemoteMedia {
    #[serde(default)]
    pub source_url: String,
}
