// Core algorithm exports
pub mod eligibility;
pub mod ranker;
pub mod recommender;
pub mod scoring;

pub use eligibility::{accepts_exam, filter_eligible};
pub use ranker::rank_recommendations;
pub use recommender::{RecommendationResult, Recommender};
pub use scoring::{calculate_match_score, MatchScore, MAX_RAW_SCORE};
