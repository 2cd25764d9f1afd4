use crate::models::{Exam, Institution};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading the institution catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog contains no valid institutions")]
    Empty,
}

/// Reasons a single catalog entry is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidEntry {
    #[error("maxRank must be positive")]
    ZeroMaxRank,

    #[error("placementRate must be within 0-100")]
    PlacementRateOutOfRange,

    #[error("nirfRanking must be at least 1")]
    ZeroNirfRanking,

    #[error("totalFee must be a non-negative number")]
    InvalidFee,

    #[error("branches must not be empty")]
    NoBranches,

    #[error("exam list must name at least one concrete exam")]
    NoExams,

    #[error("duplicate id")]
    DuplicateId,
}

/// Check one institution against the catalog invariants
pub fn validate_institution(institution: &Institution) -> Result<(), InvalidEntry> {
    if institution.max_rank == 0 {
        return Err(InvalidEntry::ZeroMaxRank);
    }
    if !(0.0..=100.0).contains(&institution.placement_rate) {
        return Err(InvalidEntry::PlacementRateOutOfRange);
    }
    if institution.nirf_ranking == 0 {
        return Err(InvalidEntry::ZeroNirfRanking);
    }
    if !institution.total_fee.is_finite() || institution.total_fee < 0.0 {
        return Err(InvalidEntry::InvalidFee);
    }
    if institution.branches.is_empty() {
        return Err(InvalidEntry::NoBranches);
    }
    if institution.exams.is_empty() || institution.exams.contains(&Exam::Other) {
        return Err(InvalidEntry::NoExams);
    }
    Ok(())
}

/// Immutable set of institutions, loaded once at startup
///
/// Shared behind an `Arc` and never mutated, so any number of requests can
/// read it concurrently.
#[derive(Debug, Clone)]
pub struct Catalog {
    institutions: Vec<Institution>,
}

impl Catalog {
    /// Load a catalog from a JSON array on disk
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.display().to_string(),
                source,
            })?;

        let catalog = Self::from_json(&json)?;
        tracing::info!("Loaded {} institutions from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Parse a catalog from a JSON array of institution records
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let institutions: Vec<Institution> = serde_json::from_str(json)?;
        Self::from_institutions(institutions)
    }

    /// Build a catalog, skipping entries that violate the catalog invariants
    pub fn from_institutions(institutions: Vec<Institution>) -> Result<Self, CatalogError> {
        let mut seen_ids = HashSet::new();
        let total = institutions.len();

        let institutions: Vec<Institution> = institutions
            .into_iter()
            .filter(|institution| {
                let verdict = validate_institution(institution).and_then(|_| {
                    if seen_ids.insert(institution.id.clone()) {
                        Ok(())
                    } else {
                        Err(InvalidEntry::DuplicateId)
                    }
                });

                match verdict {
                    Ok(()) => true,
                    Err(reason) => {
                        tracing::warn!("Skipping catalog entry {}: {}", institution.id, reason);
                        false
                    }
                }
            })
            .collect();

        if institutions.is_empty() {
            return Err(CatalogError::Empty);
        }

        if institutions.len() < total {
            tracing::warn!(
                "Catalog kept {} of {} entries",
                institutions.len(),
                total
            );
        }

        Ok(Self { institutions })
    }

    pub fn institutions(&self) -> &[Institution] {
        &self.institutions
    }

    pub fn len(&self) -> usize {
        self.institutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.institutions.is_empty()
    }
}
