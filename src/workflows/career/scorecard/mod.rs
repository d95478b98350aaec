mod config;
mod rules;

pub use config::ScorecardConfig;
pub use rules::{ScoreComponent, ScoreFactor, TimelineComponent, TimelineFactor};

use super::domain::{OutcomePrediction, SurveyRecord};
use super::{profile, recommendations};

/// Stateless engine that applies the scorecard to a survey record.
#[derive(Debug, Clone, Default)]
pub struct PredictionEngine {
    config: ScorecardConfig,
}

impl PredictionEngine {
    pub fn new(config: ScorecardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScorecardConfig {
        &self.config
    }

    pub fn predict(&self, record: &SurveyRecord) -> OutcomePrediction {
        self.breakdown(record).prediction
    }

    /// Scores a record and keeps the individual contributions for audit output.
    pub fn breakdown(&self, record: &SurveyRecord) -> ScoreBreakdown {
        let score_components = rules::score_components(record, &self.config);
        let timeline_components = rules::timeline_components(record, &self.config);

        let prediction = OutcomePrediction {
            success_probability: rules::success_probability(&score_components, &self.config),
            timeline_months: rules::timeline_months(&timeline_components, &self.config),
            profile_type: profile::classify(record),
            recommendations: recommendations::recommend(record),
        };

        ScoreBreakdown {
            prediction,
            score_components,
            timeline_components,
        }
    }
}

/// Prediction together with the factors that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub prediction: OutcomePrediction,
    pub score_components: Vec<ScoreComponent>,
    pub timeline_components: Vec<TimelineComponent>,
}

/// Scores a record with the default scorecard.
pub fn predict(record: &SurveyRecord) -> OutcomePrediction {
    PredictionEngine::default().predict(record)
}
