use crate::config::FolioConfig;
use crate::content::{ContentSource, RemotePost};
use crate::domain::{Category, CategoryMap, Post};
use crate::services::catalog::fetch_cache::FetchCache;
use anyhow::{Context, Result};
use futures::future::join_all;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct CatalogService {
    source: Box<dyn ContentSource>,
    config: Arc<FolioConfig>,
    // our in-memory revalidation cache, shared across requests
    cache: RwLock<FetchCache>,
}

impl CatalogService {
    pub fn new(source: Box<dyn ContentSource>, config: Arc<FolioConfig>) -> Self {
        Self {
            source,
            config,
            cache: RwLock::new(FetchCache::new()),
        }
    }

    /// Produces the label -> posts mapping for one category, images resolved.
    pub async fn fetch_posts(&self, category: Category) -> Result<CategoryMap> {
        let raw_posts = self.cached_post_list().await?;

        // Enrichment Pass: resolve every featured image concurrently.
        // join_all hands results back in input order no matter which call finishes first.
        let images = join_all(
            raw_posts
                .iter()
                .map(|raw| self.resolve_image(raw.featured_media)),
        )
        .await;

        let posts: Vec<Post> = raw_posts
            .into_iter()
            .zip(images)
            .map(|(raw, image)| Post {
                id: raw.id,
                title: raw.title.rendered,
                content: raw.content.rendered,
                categories: raw.categories,
                image,
            })
            .collect();

        println!("Catalog: {} posts fetched in total.", posts.len());
        let categories_present: BTreeSet<i64> = posts
            .iter()
            .flat_map(|post| post.categories.iter().copied())
            .collect();
        println!("Catalog: categories present: {:?}", categories_present);

        // Partition Pass: keep posts whose category ids intersect the selector's table.
        // any single match counts
        let wanted = self.config.category_ids(category);
        let matching: Vec<Post> = posts
            .into_iter()
            .filter(|post| post.categories.iter().any(|id| wanted.contains(id)))
            .collect();

        let mut categorized = CategoryMap::new();
        categorized.insert(category.label().to_string(), matching);

        Ok(categorized)
    }

    // serve the list from cache inside the revalidation window, otherwise go remote.
    // a failure here fails the whole request
    async fn cached_post_list(&self) -> Result<Vec<RemotePost>> {
        {
            let cache_guard = self.cache.read().await;
            if let Some(posts) = cache_guard.fresh_post_list(self.config.revalidate_secs) {
                return Ok(posts);
            }
        }

        let posts = self
            .source
            .list_posts()
            .await
            .context("Failed to fetch learning posts")?;

        let mut cache_guard = self.cache.write().await;
        cache_guard.store_post_list(posts.clone());

        Ok(posts)
    }

    // best effort: any failure lands on the placeholder and the request moves on
    async fn resolve_image(&self, media_id: i64) -> String {
        if media_id == 0 {
            return self.config.placeholder_image.clone();
        }

        {
            let cache_guard = self.cache.read().await;
            if let Some(url) = cache_guard.fresh_media_url(media_id, self.config.revalidate_secs) {
                return url;
            }
        }

        match self.source.fetch_media(media_id).await {
            Ok(media) => {
                // the remote occasionally returns a media record with no url
                let url = if media.source_url.is_empty() {
                    self.config.placeholder_image.clone()
                } else {
                    media.source_url
                };

                let mut cache_guard = self.cache.write().await;
                cache_guard.store_media_url(media_id, url.clone());

                url
            }
            Err(e) => {
                eprintln!("Warning: could not resolve media {}: {}", media_id, e);
                self.config.placeholder_image.clone()
            }
        }
    }
}
