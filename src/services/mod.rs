// Service exports
pub mod cache;
pub mod catalog;

pub use cache::{CacheKey, CacheStats, CachedRecommendations, RecommendationCache};
pub use catalog::{validate_institution, Catalog, CatalogError, InvalidEntry};
