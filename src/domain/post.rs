use derive_more::derive::Display;
use std::collections::HashMap;

/// A learning post as the rest of the app sees it: rendered markup from the
/// remote CMS plus a resolved (or fallback) image URL.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{}", title)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub categories: Vec<i64>,
    pub image: String,
}

// label -> ordered posts, built fresh for every request
pub type CategoryMap = HashMap<String, Vec<Post>>;

// the two category routes the site serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    JavaScript,
    Database,
}

impl Category {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "javascript" => Some(Category::JavaScript),
            "database" => Some(Category::Database),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::JavaScript => "JavaScript",
            Category::Database => "Database",
        }
    }
}
