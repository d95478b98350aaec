use serde::{Deserialize, Serialize};

/// Highest completed education as reported in the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EducationLevel {
    HighSchool,
    Certificate,
    Bachelor,
    Masters,
    Phd,
    #[serde(other)]
    Other,
}

impl EducationLevel {
    /// Maps a raw survey value onto a level. Unknown or blank values become `Other`.
    pub fn from_form(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high-school" => Self::HighSchool,
            "certificate" => Self::Certificate,
            "bachelor" => Self::Bachelor,
            "masters" => Self::Masters,
            "phd" => Self::Phd,
            _ => Self::Other,
        }
    }

    pub const fn is_advanced(self) -> bool {
        matches!(self, Self::Masters | Self::Phd)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HighSchool => "High School",
            Self::Certificate => "Certificate/Diploma",
            Self::Bachelor => "Bachelor's Degree",
            Self::Masters => "Master's Degree",
            Self::Phd => "PhD/Doctorate",
            Self::Other => "Other",
        }
    }
}

/// Normalized survey response consumed by the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyRecord {
    pub age: i32,
    #[serde(default)]
    pub gender: String,
    #[serde(alias = "education")]
    pub education_level: EducationLevel,
    #[serde(alias = "experience")]
    pub years_of_experience: u32,
    pub years_in_country: f64,
    #[serde(alias = "languageLevel")]
    pub language_proficiency: u8,
    pub emotional_wellbeing: u8,
    pub networking_level: u8,
    #[serde(default)]
    pub current_situation: String,
    #[serde(default)]
    pub goals: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationCategory {
    Language,
    Networking,
    Wellbeing,
    Experience,
}

impl RecommendationCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Language => "Language",
            Self::Networking => "Networking",
            Self::Wellbeing => "Wellbeing",
            Self::Experience => "Experience",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationPriority {
    High,
    Medium,
}

impl RecommendationPriority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
        }
    }
}

/// Suggested next step with supporting resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub priority: RecommendationPriority,
    pub action: String,
    pub resources: Vec<String>,
}

/// Coarse career-stage archetype. Serialized as its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileType {
    #[serde(rename = "early-career professional in development")]
    EarlyCareer,
    #[serde(rename = "experienced professional with advantage")]
    ExperiencedWithAdvantage,
    #[serde(rename = "professional needing emotional support")]
    NeedsEmotionalSupport,
    #[serde(rename = "professional in transition")]
    InTransition,
}

impl ProfileType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::EarlyCareer => "early-career professional in development",
            Self::ExperiencedWithAdvantage => "experienced professional with advantage",
            Self::NeedsEmotionalSupport => "professional needing emotional support",
            Self::InTransition => "professional in transition",
        }
    }
}

/// Result of scoring one survey record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomePrediction {
    pub success_probability: u8,
    pub timeline_months: u32,
    pub profile_type: ProfileType,
    pub recommendations: Vec<Recommendation>,
}
