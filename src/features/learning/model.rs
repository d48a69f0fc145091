use crate::domain::{CategoryMap, Post};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct JsonPost {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub categories: Vec<i64>,
    pub image: String,
}

impl From<&Post> for JsonPost {
    fn from(post: &Post) -> Self {
        JsonPost {
            id: post.id,
            title: post.title.to_owned(),
            content: post.content.to_owned(),
            categories: post.categories.to_owned(),
            image: post.image.to_owned(),
        }
    }
}

// what the frontend receives: the single-entry label -> posts mapping,
// plus the footer line the category page prints
#[derive(Serialize, Deserialize, Debug)]
pub struct CategorizedPosts {
    pub posts: HashMap<String, Vec<JsonPost>>,
    pub summary: String,
}

impl CategorizedPosts {
    pub fn new(slug: &str, categorized: CategoryMap) -> Self {
        let count: usize = categorized.values().map(|posts| posts.len()).sum();

        let posts: HashMap<String, Vec<JsonPost>> = categorized
            .into_iter()
            .map(|(label, posts)| (label, posts.iter().map(JsonPost::from).collect()))
            .collect();

        CategorizedPosts {
            posts,
            summary: format!("Showing {} posts in {}.", count, slug),
        }
    }
}
