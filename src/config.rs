use crate::domain::Category;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct FolioConfig {
    pub content_api_url: String,
    pub frontend_path: PathBuf,
    pub per_page: u32,
    pub revalidate_secs: u64,
    pub placeholder_image: String,
    pub javascript_category_ids: Vec<i64>,
    pub database_category_ids: Vec<i64>,
}

impl FolioConfig {
    pub fn from_env() -> Self {
        let content_api_url = std::env::var("CONTENT_API_URL")
            .unwrap_or_else(|_| "https://development-admin.rajondey.com/wp-json/wp/v2".to_string());

        let frontend_path = PathBuf::from(
            std::env::var("FRONTEND_DIST_PATH").unwrap_or_else(|_| "./public".to_string()),
        );

        let per_page = std::env::var("CONTENT_PER_PAGE")
            .ok()
            .and_then(|val| val.parse::<u32>().ok())
            .unwrap_or(100);

        let revalidate_secs = std::env::var("CONTENT_REVALIDATE_SECS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(3600);

        let placeholder_image =
            std::env::var("PLACEHOLDER_IMAGE").unwrap_or_else(|_| "/placeholder.svg".to_string());

        let javascript_category_ids =
            parse_id_list(std::env::var("JAVASCRIPT_CATEGORY_IDS").ok(), &[13, 50]);

        let database_category_ids =
            parse_id_list(std::env::var("DATABASE_CATEGORY_IDS").ok(), &[52]);

        Self {
            content_api_url,
            frontend_path,
            per_page,
            revalidate_secs,
            placeholder_image,
            javascript_category_ids,
            database_category_ids,
        }
    }

    // which remote category ids count as a match for a given route
    pub fn category_ids(&self, category: Category) -> &[i64] {
        match category {
            Category::JavaScript => &self.javascript_category_ids,
            Category::Database => &self.database_category_ids,
        }
    }
}

fn parse_id_list(raw: Option<String>, default: &[i64]) -> Vec<i64> {
    match raw {
        Some(val) => val
            .split(',')
            .filter_map(|part| part.trim().parse::<i64>().ok())
            .collect(),
        None => default.to_vec(),
    }
}
