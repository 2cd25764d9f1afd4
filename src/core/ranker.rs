use crate::models::{RankingPolicy, RecommendedInstitution};

/// Apply the score floor, order by score and cap the result size
///
/// This is Stage 3 of the recommendation pipeline. The sort is stable, so
/// institutions with equal scores keep their catalog order.
pub fn rank_recommendations(
    mut scored: Vec<RecommendedInstitution>,
    policy: &RankingPolicy,
) -> Vec<RecommendedInstitution> {
    scored.retain(|r| r.match_score >= policy.min_score);
    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    scored.truncate(policy.max_results);
    scored
}
