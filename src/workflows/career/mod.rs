//! Career outcome scoring: survey intake, the success scorecard, timeline estimate,
//! profile classification and prioritized recommendations.

pub mod batch;
pub mod domain;
pub mod intake;
mod profile;
mod recommendations;
pub mod scorecard;

#[cfg(test)]
mod tests;

pub use batch::{read_survey_forms, read_survey_forms_from_path, BatchError};
pub use domain::{
    EducationLevel, OutcomePrediction, ProfileType, Recommendation, RecommendationCategory,
    RecommendationPriority, SurveyRecord,
};
pub use intake::SurveyForm;
pub use scorecard::{
    predict, PredictionEngine, ScoreBreakdown, ScoreComponent, ScoreFactor, ScorecardConfig,
    TimelineComponent, TimelineFactor,
};
