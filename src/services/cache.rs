use crate::models::{Choice, Exam, RecommendedInstitution, Region, StudentPreferences};
use std::sync::Arc;
use std::time::Duration;

/// Shared, immutable recommendation list
pub type CachedRecommendations = Arc<Vec<RecommendedInstitution>>;

/// In-memory memo of recommendation lists
///
/// The catalog never changes while the process runs, so the list computed
/// for one set of preferences stays valid until it ages out. Nothing here
/// outlives the process.
pub struct RecommendationCache {
    l1_cache: moka::future::Cache<CacheKey, CachedRecommendations>,
}

impl RecommendationCache {
    /// Create a new cache holding at most `capacity` lists for `ttl_secs`
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let l1_cache = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { l1_cache }
    }

    /// Return the cached list, computing and storing it on a miss
    ///
    /// Concurrent misses for the same key run `compute` once.
    pub async fn get_or_compute<F>(
        &self,
        preferences: &StudentPreferences,
        compute: F,
    ) -> CachedRecommendations
    where
        F: FnOnce() -> Vec<RecommendedInstitution>,
    {
        let key = CacheKey::from(preferences);
        tracing::trace!("Cache lookup: {:?}", key);
        self.l1_cache
            .get_with(key, async move { Arc::new(compute()) })
            .await
    }

    /// Approximate entry count; moka applies writes lazily
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.l1_cache.entry_count(),
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: u64,
}

/// Cache key for a resolved preference set
///
/// Every field is kept typed, so free-text state and branch values cannot
/// run into each other the way joined strings would.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    exam: Exam,
    rank: u32,
    max_budget_bits: u64,
    region: Choice<Region>,
    preferred_state: Choice<String>,
    branch: Choice<String>,
}

impl From<&StudentPreferences> for CacheKey {
    fn from(preferences: &StudentPreferences) -> Self {
        Self {
            exam: preferences.exam,
            rank: preferences.rank,
            max_budget_bits: preferences.max_budget.to_bits(),
            region: preferences.region.clone(),
            preferred_state: preferences.preferred_state.clone(),
            branch: preferences.branch.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetFit, Institution, InstitutionType, RankFit};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn create_preferences(rank: u32) -> StudentPreferences {
        StudentPreferences {
            exam: Exam::JeeMain,
            rank,
            max_budget: 1500000.0,
            region: Choice::Only(Region::West),
            preferred_state: Choice::Any,
            branch: Choice::Only("Computer Science".to_string()),
        }
    }

    fn create_recommendation(id: &str) -> RecommendedInstitution {
        RecommendedInstitution {
            institution: Institution {
                id: id.to_string(),
                name: format!("College {}", id),
                short_name: id.to_uppercase(),
                kind: InstitutionType::Private,
                city: "Panaji".to_string(),
                state: "Goa".to_string(),
                region: Region::West,
                exams: vec![Exam::JeeMain],
                max_rank: 10000,
                total_fee: 500000.0,
                avg_package: 7.0,
                highest_package: 20.0,
                placement_rate: 80.0,
                nirf_ranking: 90,
                branches: vec!["Civil Engineering".to_string()],
                scholarships: false,
                website: String::new(),
            },
            match_score: 60,
            match_reasons: Vec::new(),
            rank_fit: RankFit::Excellent,
            budget_fit: BudgetFit::WithinBudget,
        }
    }

    #[test]
    fn test_cache_key_separates_free_text_fields() {
        let mut first = create_preferences(100);
        first.preferred_state = Choice::Only("Goa:Kerala".to_string());
        first.branch = Choice::Only("Civil".to_string());

        let mut second = create_preferences(100);
        second.preferred_state = Choice::Only("Goa".to_string());
        second.branch = Choice::Only("Kerala:Civil".to_string());

        assert_ne!(CacheKey::from(&first), CacheKey::from(&second));
        assert_eq!(CacheKey::from(&first), CacheKey::from(&first.clone()));
    }

    #[tokio::test]
    async fn test_get_or_compute_memoizes() {
        let cache = RecommendationCache::new(100, 60);
        let calls = AtomicUsize::new(0);
        let preferences = create_preferences(100);

        for _ in 0..3 {
            let list = cache
                .get_or_compute(&preferences, || {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Vec::new()
                })
                .await;
            assert!(list.is_empty());
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_distinct_preferences_compute_separately() {
        let cache = RecommendationCache::new(100, 60);
        let calls = AtomicUsize::new(0);

        for rank in [1, 2] {
            cache
                .get_or_compute(&create_preferences(rank), || {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Vec::new()
                })
                .await;
        }

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_colliding_text_preferences_get_their_own_lists() {
        let cache = RecommendationCache::new(100, 60);

        let mut first = create_preferences(100);
        first.preferred_state = Choice::Only("Goa:Kerala".to_string());
        first.branch = Choice::Only("Civil".to_string());

        let mut second = create_preferences(100);
        second.preferred_state = Choice::Only("Goa".to_string());
        second.branch = Choice::Only("Kerala:Civil".to_string());

        let stored = cache
            .get_or_compute(&first, || vec![create_recommendation("first")])
            .await;
        let served = cache
            .get_or_compute(&second, || vec![create_recommendation("second")])
            .await;

        assert_eq!(stored[0].institution.id, "first");
        assert_eq!(served[0].institution.id, "second");
    }

    #[tokio::test]
    async fn test_stats_count_entries() {
        let cache = RecommendationCache::new(100, 60);
        assert_eq!(cache.stats().entries, 0);

        cache.get_or_compute(&create_preferences(7), Vec::new).await;
        cache.get_or_compute(&create_preferences(8), Vec::new).await;
        cache.l1_cache.run_pending_tasks().await;

        assert_eq!(cache.stats(), CacheStats { entries: 2 });
    }
}
