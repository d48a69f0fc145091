pub mod model;

use crate::AppState;
use crate::domain::Category;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use model::CategorizedPosts;

pub fn learning_router() -> Router<AppState> {
    Router::new().route("/{category}", get(get_category_handler))
}

async fn get_category_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<CategorizedPosts>, StatusCode> {
    // only the two known category routes exist, everything else is a 404
    let category = match Category::from_slug(&slug) {
        Some(val) => val,
        None => return Err(StatusCode::NOT_FOUND),
    };

    match state.catalog.fetch_posts(category).await {
        Ok(categorized) => Ok(Json(CategorizedPosts::new(&slug, categorized))),

        Err(e) => {
            eprintln!("Error fetching posts for {}: {}", slug, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
