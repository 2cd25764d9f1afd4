use crate::models::{BudgetFit, Choice, Institution, RankFit, Region, StudentPreferences};

/// Sum of the per-criterion maxima: 35 + 25 + 15 + 15 + 10 + 5
pub const MAX_RAW_SCORE: u32 = 105;

/// Fees up to this multiple of the budget count as "slightly over"
const BUDGET_TOLERANCE: f64 = 1.15;

/// Outcome of scoring one institution against one student
#[derive(Debug, Clone, PartialEq)]
pub struct MatchScore {
    /// Normalized score, 0-100
    pub score: u8,
    /// Unnormalized criterion sum, 0-105
    pub raw_total: u32,
    /// Reasons in criterion order
    pub reasons: Vec<String>,
    pub rank_fit: RankFit,
    pub budget_fit: BudgetFit,
}

/// Calculate a match score (0-100) for an institution based on student preferences
///
/// Raw points per criterion:
/// rank eligibility   35
/// budget match       25
/// location           15
/// placement quality  15
/// NIRF reputation    10
/// branch offered      5
///
/// The raw total is scaled by 100/105 and rounded half away from zero.
pub fn calculate_match_score(
    institution: &Institution,
    preferences: &StudentPreferences,
) -> MatchScore {
    let mut raw_total = 0;
    let mut reasons = Vec::new();

    // Stage 2a: Rank eligibility
    let percentile = rank_percentile(preferences.rank, institution.max_rank);
    let (rank_points, rank_reason) = score_rank(percentile);
    raw_total += rank_points;
    reasons.extend(rank_reason.map(str::to_string));
    let rank_fit = classify_rank_fit(percentile);

    // Stage 2b: Budget match
    let (budget_points, budget_reason, budget_fit) =
        score_budget(institution.total_fee, preferences.max_budget);
    raw_total += budget_points;
    reasons.extend(budget_reason.map(str::to_string));

    // Stage 2c: Location preference
    let (location_points, location_reason) = score_location(
        institution,
        &preferences.region,
        &preferences.preferred_state,
    );
    raw_total += location_points;
    reasons.extend(location_reason);

    // Stage 2d: Placement quality
    let (placement_points, placement_reason) = score_placement(institution.placement_rate);
    raw_total += placement_points;
    reasons.extend(placement_reason);

    // Stage 2e: Reputation
    let (reputation_points, reputation_reason) = score_reputation(institution.nirf_ranking);
    raw_total += reputation_points;
    reasons.extend(reputation_reason);

    // Stage 2f: Branch availability
    let (branch_points, branch_reason) = score_branch(&institution.branches, &preferences.branch);
    raw_total += branch_points;
    reasons.extend(branch_reason);

    MatchScore {
        score: normalize_score(raw_total),
        raw_total,
        reasons,
        rank_fit,
        budget_fit,
    }
}

/// Ratio of the student's rank to the institution's admitting rank
///
/// A zero admitting rank marks a broken catalog entry; it yields an infinite
/// percentile so the entry scores no rank points and classifies as a stretch.
#[inline]
pub fn rank_percentile(student_rank: u32, max_rank: u32) -> f64 {
    if max_rank == 0 {
        return f64::INFINITY;
    }
    student_rank as f64 / max_rank as f64
}

/// Rank points and reason (max 35)
#[inline]
pub fn score_rank(percentile: f64) -> (u32, Option<&'static str>) {
    if percentile <= 0.30 {
        (35, Some("Your rank places you among the top applicants for this college"))
    } else if percentile <= 0.60 {
        (28, Some("Your rank gives you a strong chance of admission"))
    } else if percentile <= 0.85 {
        (20, Some("Your rank is within the acceptance range"))
    } else if percentile <= 1.00 {
        (12, Some("Your rank is near the cutoff - competitive but possible"))
    } else if percentile <= 1.15 {
        (5, Some("Slightly above the typical cutoff - consider as a stretch option"))
    } else {
        (0, None)
    }
}

/// Rank fit label, on breakpoints independent of the points table
#[inline]
pub fn classify_rank_fit(percentile: f64) -> RankFit {
    if percentile <= 0.40 {
        RankFit::Excellent
    } else if percentile <= 0.70 {
        RankFit::Good
    } else if percentile <= 1.00 {
        RankFit::Moderate
    } else {
        RankFit::Stretch
    }
}

/// Budget points, reason and fit label (max 25)
#[inline]
pub fn score_budget(total_fee: f64, max_budget: f64) -> (u32, Option<&'static str>, BudgetFit) {
    if total_fee <= max_budget {
        let ratio = if max_budget > 0.0 { total_fee / max_budget } else { 0.0 };
        if ratio <= 0.70 {
            (
                25,
                Some("Well within your budget with significant savings potential"),
                BudgetFit::WithinBudget,
            )
        } else {
            (20, Some("Fits within your budget"), BudgetFit::WithinBudget)
        }
    } else if total_fee <= max_budget * BUDGET_TOLERANCE {
        (
            10,
            Some("Slightly over budget - scholarships may help"),
            BudgetFit::SlightlyOver,
        )
    } else {
        (2, None, BudgetFit::OverBudget)
    }
}

/// Location points and reason (max 15)
///
/// A matching state wins over a matching region. Leaving the region open
/// earns neutral credit even without a state match.
#[inline]
pub fn score_location(
    institution: &Institution,
    region: &Choice<Region>,
    preferred_state: &Choice<String>,
) -> (u32, Option<String>) {
    if let Choice::Only(state) = preferred_state {
        if institution.state == *state {
            return (
                15,
                Some(format!("Located in your preferred state: {}", institution.state)),
            );
        }
    }

    match region {
        Choice::Only(region) if institution.region == *region => (
            10,
            Some(format!("Located in your preferred region: {} India", institution.region)),
        ),
        Choice::Only(_) => (0, None),
        Choice::Any => (8, None),
    }
}

/// Placement points and reason (max 15)
#[inline]
pub fn score_placement(placement_rate: f64) -> (u32, Option<String>) {
    if placement_rate >= 90.0 {
        (15, Some(format!("Excellent placement rate: {}%", placement_rate)))
    } else if placement_rate >= 80.0 {
        (10, Some(format!("Good placement rate: {}%", placement_rate)))
    } else {
        (5, None)
    }
}

/// NIRF reputation points and reason (max 10)
#[inline]
pub fn score_reputation(nirf_ranking: u32) -> (u32, Option<String>) {
    if nirf_ranking <= 10 {
        (10, Some(format!("NIRF Rank {} - among India's best", nirf_ranking)))
    } else if nirf_ranking <= 25 {
        (7, Some(format!("NIRF Rank {} - highly reputed", nirf_ranking)))
    } else if nirf_ranking <= 50 {
        (4, None)
    } else {
        (0, None)
    }
}

/// Branch bonus and reason (5)
///
/// Matches case-insensitively on substrings, so "Electronics" finds
/// "Electronics & Communication".
#[inline]
pub fn score_branch(branches: &[String], preferred: &Choice<String>) -> (u32, Option<String>) {
    let Choice::Only(wanted) = preferred else {
        return (0, None);
    };

    let needle = wanted.to_lowercase();
    if branches.iter().any(|b| b.to_lowercase().contains(&needle)) {
        (5, Some(format!("Offers your preferred branch: {}", wanted)))
    } else {
        (0, None)
    }
}

/// Scale a raw total onto 0-100
#[inline]
pub fn normalize_score(raw_total: u32) -> u8 {
    let scaled = (raw_total as f64 / MAX_RAW_SCORE as f64 * 100.0).round();
    scaled.clamp(0.0, 100.0) as u8
}
