use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Literal used on the wire for "no constraint"
pub const ANY: &str = "Any";

/// Entrance exams a student can report a rank for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exam {
    #[serde(rename = "JEE Main")]
    JeeMain,
    #[serde(rename = "JEE Advanced")]
    JeeAdvanced,
    #[serde(rename = "BITSAT")]
    Bitsat,
    #[serde(rename = "VITEEE")]
    Viteee,
    #[serde(rename = "WBJEE")]
    Wbjee,
    #[serde(rename = "MHT-CET")]
    MhtCet,
    #[serde(rename = "COMEDK")]
    Comedk,
    #[serde(rename = "KCET")]
    Kcet,
    Other,
}

impl Exam {
    pub fn as_str(&self) -> &'static str {
        match self {
            Exam::JeeMain => "JEE Main",
            Exam::JeeAdvanced => "JEE Advanced",
            Exam::Bitsat => "BITSAT",
            Exam::Viteee => "VITEEE",
            Exam::Wbjee => "WBJEE",
            Exam::MhtCet => "MHT-CET",
            Exam::Comedk => "COMEDK",
            Exam::Kcet => "KCET",
            Exam::Other => "Other",
        }
    }
}

impl fmt::Display for Exam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic region of India
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    North,
    South,
    East,
    West,
    Central,
    Northeast,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
            Region::Central => "Central",
            Region::Northeast => "Northeast",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Institution category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstitutionType {
    #[serde(rename = "IIT")]
    Iit,
    #[serde(rename = "NIT")]
    Nit,
    #[serde(rename = "IIIT")]
    Iiit,
    #[serde(rename = "BITS")]
    Bits,
    Private,
    #[serde(rename = "State Government")]
    StateGovernment,
    Deemed,
    #[serde(rename = "Central University")]
    CentralUniversity,
}

/// A preference that is either unconstrained ("Any") or pinned to a value.
///
/// On the wire this is the bare string `"Any"` or the value itself. An empty
/// string is read as `Any`, mirroring how the form submits unset selects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Choice<T> {
    Any,
    Only(T),
}

impl<T> Choice<T> {
    pub fn is_any(&self) -> bool {
        matches!(self, Choice::Any)
    }
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::Any
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Any => f.write_str(ANY),
            Choice::Only(value) => value.fmt(f),
        }
    }
}

impl<T: Serialize> Serialize for Choice<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Choice::Any => serializer.serialize_str(ANY),
            Choice::Only(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Choice<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() || raw == ANY {
            return Ok(Choice::Any);
        }
        T::deserialize(raw.into_deserializer()).map(Choice::Only)
    }
}

/// Catalog entry for one institution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Institution {
    pub id: String,
    pub name: String,
    #[serde(rename = "shortName")]
    pub short_name: String,
    #[serde(rename = "type")]
    pub kind: InstitutionType,
    pub city: String,
    pub state: String,
    pub region: Region,
    #[serde(rename = "exam")]
    pub exams: Vec<Exam>,
    #[serde(rename = "maxRank")]
    pub max_rank: u32,
    #[serde(rename = "totalFee")]
    pub total_fee: f64,
    #[serde(rename = "avgPackage")]
    pub avg_package: f64,
    #[serde(rename = "highestPackage")]
    pub highest_package: f64,
    #[serde(rename = "placementRate")]
    pub placement_rate: f64,
    #[serde(rename = "nirfRanking")]
    pub nirf_ranking: u32,
    pub branches: Vec<String>,
    #[serde(default)]
    pub scholarships: bool,
    #[serde(default)]
    pub website: String,
}

/// Fully resolved student preferences for one recommendation pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentPreferences {
    pub exam: Exam,
    pub rank: u32,
    #[serde(rename = "maxBudget")]
    pub max_budget: f64,
    pub region: Choice<Region>,
    #[serde(rename = "preferredState")]
    pub preferred_state: Choice<String>,
    pub branch: Choice<String>,
}

/// How comfortably the student's rank clears the institution's cutoff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankFit {
    Excellent,
    Good,
    Moderate,
    Stretch,
}

/// How the institution's fee compares with the student's budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetFit {
    #[serde(rename = "Within Budget")]
    WithinBudget,
    #[serde(rename = "Slightly Over")]
    SlightlyOver,
    #[serde(rename = "Over Budget")]
    OverBudget,
}

/// Institution annotated with its fit for a particular student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedInstitution {
    #[serde(flatten)]
    pub institution: Institution,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
    #[serde(rename = "rankFit")]
    pub rank_fit: RankFit,
    #[serde(rename = "budgetFit")]
    pub budget_fit: BudgetFit,
}

/// Score floor and result cap applied by the ranker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingPolicy {
    pub min_score: u8,
    pub max_results: usize,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            min_score: 20,
            max_results: 12,
        }
    }
}
