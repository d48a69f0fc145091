use crate::content::RemotePost;
use std::collections::HashMap;
use std::time::{Duration, Instant};

// one fetched value plus the moment it was fetched
pub struct CachedAt<T> {
    pub fetched_at: Instant,
    pub value: T,
}

impl<T> CachedAt<T> {
    pub fn new(value: T) -> Self {
        Self {
            fetched_at: Instant::now(),
            value,
        }
    }

    pub fn is_fresh(&self, window_secs: u64) -> bool {
        self.fetched_at.elapsed() < Duration::from_secs(window_secs)
    }
}

// exists so repeat requests inside the revalidation window skip the network entirely
pub struct FetchCache {
    pub post_list: Option<CachedAt<Vec<RemotePost>>>,
    pub media_urls: HashMap<i64, CachedAt<String>>,
}

impl FetchCache {
    pub fn new() -> Self {
        Self {
            post_list: None,
            media_urls: HashMap::new(),
        }
    }

    pub fn fresh_post_list(&self, window_secs: u64) -> Option<Vec<RemotePost>> {
        self.post_list
            .as_ref()
            .filter(|entry| entry.is_fresh(window_secs))
            .map(|entry| entry.value.clone())
    }

    pub fn fresh_media_url(&self, media_id: i64, window_secs: u64) -> Option<String> {
        self.media_urls
            .get(&media_id)
            .filter(|entry| entry.is_fresh(window_secs))
            .map(|entry| entry.value.clone())
    }

    pub fn store_post_list(&mut self, posts: Vec<RemotePost>) {
        self.post_list = Some(CachedAt::new(posts));
    }

    pub fn store_media_url(&mut self, media_id: i64, url: String) {
        self.media_urls.insert(media_id, CachedAt::new(url));
    }
}
