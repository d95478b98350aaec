use super::super::domain::SurveyRecord;
use super::config::ScorecardConfig;

const SENIOR_EXPERIENCE_YEARS: u32 = 5;
const SETTLED_YEARS_IN_COUNTRY: f64 = 2.0;
const FLUENT_LANGUAGE_LEVEL: u8 = 4;
const HIGH_WELLBEING_LEVEL: u8 = 4;
const ESTABLISHED_NETWORK_LEVEL: u8 = 3;

const WORKING_LANGUAGE_LEVEL: u8 = 3;
const SETTLING_YEARS_IN_COUNTRY: f64 = 1.0;
const MINIMUM_EXPERIENCE_YEARS: u32 = 2;

/// Positive factor that raises the success probability when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreFactor {
    AdvancedDegree,
    Seniority,
    TimeInCountry,
    LanguageFluency,
    Wellbeing,
    ProfessionalNetwork,
}

impl ScoreFactor {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::AdvancedDegree,
            Self::Seniority,
            Self::TimeInCountry,
            Self::LanguageFluency,
            Self::Wellbeing,
            Self::ProfessionalNetwork,
        ]
    }

    pub fn applies(self, record: &SurveyRecord) -> bool {
        match self {
            Self::AdvancedDegree => record.education_level.is_advanced(),
            Self::Seniority => record.years_of_experience >= SENIOR_EXPERIENCE_YEARS,
            Self::TimeInCountry => record.years_in_country >= SETTLED_YEARS_IN_COUNTRY,
            Self::LanguageFluency => record.language_proficiency >= FLUENT_LANGUAGE_LEVEL,
            Self::Wellbeing => record.emotional_wellbeing >= HIGH_WELLBEING_LEVEL,
            Self::ProfessionalNetwork => record.networking_level >= ESTABLISHED_NETWORK_LEVEL,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AdvancedDegree => "advanced degree",
            Self::Seniority => "5+ years of experience",
            Self::TimeInCountry => "2+ years in country",
            Self::LanguageFluency => "advanced language level",
            Self::Wellbeing => "high wellbeing",
            Self::ProfessionalNetwork => "established professional network",
        }
    }
}

/// Condition that pushes the estimated timeline out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimelineFactor {
    LanguageGap,
    RecentArrival,
    LimitedExperience,
}

impl TimelineFactor {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::LanguageGap,
            Self::RecentArrival,
            Self::LimitedExperience,
        ]
    }

    pub fn applies(self, record: &SurveyRecord) -> bool {
        match self {
            Self::LanguageGap => record.language_proficiency < WORKING_LANGUAGE_LEVEL,
            Self::RecentArrival => record.years_in_country < SETTLING_YEARS_IN_COUNTRY,
            Self::LimitedExperience => record.years_of_experience < MINIMUM_EXPERIENCE_YEARS,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::LanguageGap => "language level below intermediate",
            Self::RecentArrival => "less than a year in country",
            Self::LimitedExperience => "less than 2 years of experience",
        }
    }
}

/// Discrete contribution to the success probability.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub adjustment: f64,
}

/// Discrete delay added to the timeline estimate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineComponent {
    pub factor: TimelineFactor,
    pub months: i32,
}

pub(crate) fn score_components(
    record: &SurveyRecord,
    config: &ScorecardConfig,
) -> Vec<ScoreComponent> {
    ScoreFactor::ordered()
        .into_iter()
        .filter(|factor| factor.applies(record))
        .map(|factor| ScoreComponent {
            factor,
            adjustment: config.bonus(factor),
        })
        .collect()
}

pub(crate) fn timeline_components(
    record: &SurveyRecord,
    config: &ScorecardConfig,
) -> Vec<TimelineComponent> {
    TimelineFactor::ordered()
        .into_iter()
        .filter(|factor| factor.applies(record))
        .map(|factor| TimelineComponent {
            factor,
            months: config.delay(factor),
        })
        .collect()
}

pub(crate) fn success_probability(components: &[ScoreComponent], config: &ScorecardConfig) -> u8 {
    let raw = components
        .iter()
        .fold(config.base_probability, |total, component| {
            total + component.adjustment
        });
    let clamped = raw.clamp(config.probability_floor, config.probability_ceiling);
    (clamped * 100.0).round() as u8
}

pub(crate) fn timeline_months(components: &[TimelineComponent], config: &ScorecardConfig) -> u32 {
    let raw = components
        .iter()
        .fold(config.base_timeline_months, |total, component| {
            total + component.months
        });
    raw.clamp(config.min_timeline_months, config.max_timeline_months)
        .max(0) as u32
}
