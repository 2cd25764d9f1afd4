use crate::models::StudentPreferences;

/// Budgets at or above this are described as generous
const GENEROUS_BUDGET: f64 = 2_000_000.0;
/// Budgets at or above this are described as moderate
const MODERATE_BUDGET: f64 = 1_000_000.0;

/// One-paragraph description of a recommendation outcome
pub fn generate_summary(preferences: &StudentPreferences, match_count: usize) -> String {
    if match_count == 0 {
        return format!(
            "We could not find matching colleges for {} rank {} within your criteria. \
             Try adjusting your budget or location preferences.",
            preferences.exam, preferences.rank
        );
    }

    let budget_label = if preferences.max_budget >= GENEROUS_BUDGET {
        "generous"
    } else if preferences.max_budget >= MODERATE_BUDGET {
        "moderate"
    } else {
        "budget-conscious"
    };

    format!(
        "Based on your {} rank of {} and a {} total budget of Rs {}, we found {} college{} \
         that match your preferences. The recommendations are ranked by overall fit including \
         rank eligibility, affordability, placement record, and location match.",
        preferences.exam,
        format_indian_number(preferences.rank as u64),
        budget_label,
        format_indian_number(preferences.max_budget.round().max(0.0) as u64),
        match_count,
        if match_count > 1 { "s" } else { "" }
    )
}

/// Group digits the Indian way: last three, then pairs (12,34,567)
pub fn format_indian_number(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Choice, Exam};

    fn create_preferences(rank: u32, max_budget: f64) -> StudentPreferences {
        StudentPreferences {
            exam: Exam::JeeMain,
            rank,
            max_budget,
            region: Choice::Any,
            preferred_state: Choice::Any,
            branch: Choice::Any,
        }
    }

    #[test]
    fn test_format_indian_number() {
        assert_eq!(format_indian_number(0), "0");
        assert_eq!(format_indian_number(999), "999");
        assert_eq!(format_indian_number(1000), "1,000");
        assert_eq!(format_indian_number(100000), "1,00,000");
        assert_eq!(format_indian_number(1234567), "12,34,567");
        assert_eq!(format_indian_number(50000000), "5,00,00,000");
    }

    #[test]
    fn test_summary_no_matches_uses_raw_rank() {
        let summary = generate_summary(&create_preferences(15000, 500000.0), 0);
        assert_eq!(
            summary,
            "We could not find matching colleges for JEE Main rank 15000 within your criteria. \
             Try adjusting your budget or location preferences."
        );
    }

    #[test]
    fn test_summary_budget_labels_and_plural() {
        let summary = generate_summary(&create_preferences(15000, 2000000.0), 3);
        assert!(summary.starts_with(
            "Based on your JEE Main rank of 15,000 and a generous total budget of Rs 20,00,000, \
             we found 3 colleges that match"
        ));

        let summary = generate_summary(&create_preferences(15000, 1000000.0), 1);
        assert!(summary.contains("a moderate total budget"));
        assert!(summary.contains("we found 1 college that match"));

        let summary = generate_summary(&create_preferences(15000, 999999.0), 2);
        assert!(summary.contains("a budget-conscious total budget of Rs 9,99,999"));
    }
}
