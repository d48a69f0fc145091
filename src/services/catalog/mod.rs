pub mod catalog;
pub mod fetch_cache;

pub use self::catalog::CatalogService;
pub use self::fetch_cache::FetchCache;
