use crate::models::{Exam, Institution};

/// Exams whose admission pools overlap enough with JEE Main that a JEE Main
/// rank is treated as qualifying for all of them.
const JEE_MAIN_POOL: [Exam; 3] = [Exam::JeeMain, Exam::Wbjee, Exam::MhtCet];

/// Check whether a student who sat `exam` may apply to `institution`
///
/// This is Stage 1 of the recommendation pipeline.
#[inline]
pub fn accepts_exam(institution: &Institution, exam: Exam) -> bool {
    match exam {
        // No cutoff data exists for unlisted exams, so nothing is excluded
        Exam::Other => true,
        Exam::JeeMain => institution
            .exams
            .iter()
            .any(|accepted| JEE_MAIN_POOL.contains(accepted)),
        exam => institution.exams.contains(&exam),
    }
}

/// Reduce the catalog to the institutions the student's exam qualifies them for
///
/// Catalog order is preserved. An empty result is valid.
pub fn filter_eligible(catalog: &[Institution], exam: Exam) -> Vec<&Institution> {
    catalog
        .iter()
        .filter(|institution| accepts_exam(institution, exam))
        .collect()
}
