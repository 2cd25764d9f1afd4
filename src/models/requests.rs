use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};
use crate::models::domain::{Choice, Exam, Region, StudentPreferences};

/// Request to compute recommendations
///
/// Optional location and branch fields that are missing, null or empty
/// resolve to `Any`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(required)]
    pub exam: Option<Exam>,
    #[validate(required, range(min = 1, max = 200000))]
    pub rank: Option<u32>,
    #[validate(required, range(min = 1.0))]
    #[serde(alias = "max_budget", rename = "maxBudget")]
    pub max_budget: Option<f64>,
    #[serde(default)]
    pub region: Option<Choice<Region>>,
    #[serde(default)]
    #[serde(alias = "preferred_state", rename = "preferredState")]
    pub preferred_state: Option<Choice<String>>,
    #[serde(default)]
    pub branch: Option<Choice<String>>,
}

impl RecommendRequest {
    /// Validate, then resolve defaults into the preferences the recommender consumes.
    pub fn into_preferences(self) -> Result<StudentPreferences, ValidationErrors> {
        self.validate()?;

        let (Some(exam), Some(rank), Some(max_budget)) = (self.exam, self.rank, self.max_budget)
        else {
            return Err(ValidationErrors::new());
        };

        Ok(StudentPreferences {
            exam,
            rank,
            max_budget,
            region: self.region.unwrap_or_default(),
            preferred_state: self.preferred_state.unwrap_or_default(),
            branch: self.branch.unwrap_or_default(),
        })
    }
}
