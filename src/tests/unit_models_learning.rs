use crate::content::{RemoteMedia, RemotePost};
use crate::domain::{Category, CategoryMap, Post};
use crate::features::learning::model::{CategorizedPosts, JsonPost};

// create a post for the purposes of testing
fn create_test_post() -> Post {
    Post {
        id: 42,
        title: "Closures in depth".to_string(),
        content: "<p>Lexical scope.</p>".to_string(),
        categories: vec![13, 50],
        image: "https://cdn.example.com/closures.jpg".to_string(),
    }
}

// test the route slug -> selector mapping, including the values we refuse
#[test]
fn test_category_from_slug() {
    assert_eq!(Category::from_slug("javascript"), Some(Category::JavaScript));
    assert_eq!(Category::from_slug("database"), Some(Category::Database));

    // route matching is exact, no casing or alias tolerance
    assert_eq!(Category::from_slug("JavaScript"), None);
    assert_eq!(Category::from_slug("databases"), None);
    assert_eq!(Category::from_slug(""), None);
}

#[test]
fn test_category_labels() {
    assert_eq!(Category::JavaScript.label(), "JavaScript");
    assert_eq!(Category::Database.label(), "Database");
}

// test the system's ability to convert Post -> JsonPost for the API
#[test]
fn test_post_to_json_post_conversion() {
    let post = create_test_post();
    let json_post: JsonPost = (&post).into();

    assert_eq!(json_post.id, 42);
    assert_eq!(json_post.title, "Closures in depth");
    assert_eq!(json_post.categories, vec![13, 50]);
    assert_eq!(json_post.image, "https://cdn.example.com/closures.jpg");
}

// posts display as their title
#[test]
fn test_post_display() {
    let post = create_test_post();
    assert_eq!(format!("{}", post), "Closures in depth");
}

// the response wrapper carries the single-entry mapping plus the footer line
#[test]
fn test_categorized_posts_summary() {
    let mut categorized = CategoryMap::new();
    categorized.insert(
        "JavaScript".to_string(),
        vec![create_test_post(), create_test_post()],
    );

    let response = CategorizedPosts::new("javascript", categorized);

    assert_eq!(response.posts.get("JavaScript").unwrap().len(), 2);
    assert_eq!(response.summary, "Showing 2 posts in javascript.");
}

// a realistic CMS payload deserializes with the rendered fields narrowed out
#[test]
fn test_remote_post_wire_shape() {
    let json = r#"{
        "id": 101,
        "date": "2024-05-01T10:00:00",
        "slug": "intro-to-closures",
        "title": { "rendered": "Intro to Closures" },
        "content": { "rendered": "<p>Lexical scope.</p>", "protected": false },
        "categories": [13, 50],
        "featured_media": 9
    }"#;

    let post: RemotePost = serde_json::from_str(json).expect("Should deserialize");

    assert_eq!(post.id, 101);
    assert_eq!(post.title.rendered, "Intro to Closures");
    assert_eq!(post.content.rendered, "<p>Lexical scope.</p>");
    assert_eq!(post.categories, vec![13, 50]);
    assert_eq!(post.featured_media, 9);
}

// absent categories/featured_media degrade to empty/zero like the remote's falsy values
#[test]
fn test_remote_post_wire_defaults() {
    let json = r#"{
        "id": 7,
        "title": { "rendered": "Bare post" },
        "content": { "rendered": "" }
    }"#;

    let post: RemotePost = serde_json::from_str(json).expect("Should deserialize");

    assert!(post.categories.is_empty());
    assert_eq!(post.featured_media, 0);
}

// a payload without the fields we depend on must fail fast, not limp along
#[test]
fn test_remote_post_shape_mismatch_fails() {
    // no title at all
    let missing_title = r#"{ "id": 7, "content": { "rendered": "" } }"#;
    assert!(serde_json::from_str::<RemotePost>(missing_title).is_err());

    // title present but not the rendered-object shape
    let flat_title = r#"{ "id": 7, "title": "plain string", "content": { "rendered": "" } }"#;
    assert!(serde_json::from_str::<RemotePost>(flat_title).is_err());
}

#[test]
fn test_remote_media_wire_shape() {
    let media: RemoteMedia =
        serde_json::from_str(r#"{ "source_url": "https://cdn.example.com/a.jpg" }"#).unwrap();
    assert_eq!(media.source_url, "https://cdn.example.com/a.jpg");

    // a media record without a url is valid wire data, the fallback handles it later
    let empty: RemoteMedia = serde_json::from_str("{}").unwrap();
    assert!(empty.source_url.is_empty());
}
