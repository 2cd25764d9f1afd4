//! College Match - rank, budget and location aware college recommendations
//!
//! This library provides the recommendation pipeline used by the College Match service.
//! It filters a catalog by exam eligibility, scores each institution against the
//! student's preferences and returns a short, explainable, ranked list.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, filter_eligible, rank_recommendations, Recommender};
pub use models::{Institution, RankingPolicy, RecommendedInstitution, StudentPreferences};
pub use services::Catalog;
