// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BudgetFit, Choice, Exam, Institution, InstitutionType, RankFit, RankingPolicy,
    RecommendedInstitution, Region, StudentPreferences,
};
pub use requests::RecommendRequest;
pub use responses::{ErrorResponse, HealthResponse, RecommendResponse};
