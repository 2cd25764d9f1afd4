use crate::models::{Institution, RankingPolicy, RecommendedInstitution, StudentPreferences};
use crate::core::{
    eligibility::filter_eligible,
    ranker::rank_recommendations,
    scoring::calculate_match_score,
};

/// Result of the recommendation process
#[derive(Debug, Clone)]
pub struct RecommendationResult {
    pub recommendations: Vec<RecommendedInstitution>,
    pub eligible_count: usize,
}

/// Main recommendation orchestrator
///
/// # Pipeline Stages
/// 1. Eligibility filtering by exam
/// 2. Per-institution scoring
/// 3. Score floor, ordering and truncation
///
/// Holds no catalog of its own: callers pass the shared read-only catalog in,
/// so one `Recommender` can serve any number of concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    policy: RankingPolicy,
}

impl Recommender {
    pub fn new(policy: RankingPolicy) -> Self {
        Self { policy }
    }

    pub fn with_default_policy() -> Self {
        Self {
            policy: RankingPolicy::default(),
        }
    }

    pub fn policy(&self) -> &RankingPolicy {
        &self.policy
    }

    /// Build a ranked shortlist for one student
    ///
    /// # Arguments
    /// * `catalog` - All institutions known to the service
    /// * `preferences` - The student's resolved preferences
    ///
    /// # Returns
    /// RecommendationResult holding at most `max_results` institutions,
    /// ordered by descending match score
    pub fn recommend(
        &self,
        catalog: &[Institution],
        preferences: &StudentPreferences,
    ) -> RecommendationResult {
        let eligible = filter_eligible(catalog, preferences.exam);
        let eligible_count = eligible.len();

        let scored: Vec<RecommendedInstitution> = eligible
            .into_iter()
            .map(|institution| {
                let result = calculate_match_score(institution, preferences);
                RecommendedInstitution {
                    institution: institution.clone(),
                    match_score: result.score,
                    match_reasons: result.reasons,
                    rank_fit: result.rank_fit,
                    budget_fit: result.budget_fit,
                }
            })
            .collect();

        let recommendations = rank_recommendations(scored, &self.policy);

        tracing::debug!(
            "{} rank {}: {} eligible of {}, {} recommended",
            preferences.exam,
            preferences.rank,
            eligible_count,
            catalog.len(),
            recommendations.len()
        );

        RecommendationResult {
            recommendations,
            eligible_count,
        }
    }
}
