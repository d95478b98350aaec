use super::rules::{ScoreFactor, TimelineFactor};

/// Weights and bounds for the success scorecard and timeline estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct ScorecardConfig {
    pub base_probability: f64,
    pub probability_floor: f64,
    pub probability_ceiling: f64,
    pub advanced_degree_bonus: f64,
    pub seniority_bonus: f64,
    pub time_in_country_bonus: f64,
    pub language_fluency_bonus: f64,
    pub wellbeing_bonus: f64,
    pub professional_network_bonus: f64,
    pub base_timeline_months: i32,
    pub min_timeline_months: i32,
    pub max_timeline_months: i32,
    pub language_gap_months: i32,
    pub recent_arrival_months: i32,
    pub limited_experience_months: i32,
}

impl ScorecardConfig {
    pub fn bonus(&self, factor: ScoreFactor) -> f64 {
        match factor {
            ScoreFactor::AdvancedDegree => self.advanced_degree_bonus,
            ScoreFactor::Seniority => self.seniority_bonus,
            ScoreFactor::TimeInCountry => self.time_in_country_bonus,
            ScoreFactor::LanguageFluency => self.language_fluency_bonus,
            ScoreFactor::Wellbeing => self.wellbeing_bonus,
            ScoreFactor::ProfessionalNetwork => self.professional_network_bonus,
        }
    }

    pub fn delay(&self, factor: TimelineFactor) -> i32 {
        match factor {
            TimelineFactor::LanguageGap => self.language_gap_months,
            TimelineFactor::RecentArrival => self.recent_arrival_months,
            TimelineFactor::LimitedExperience => self.limited_experience_months,
        }
    }
}

impl Default for ScorecardConfig {
    fn default() -> Self {
        Self {
            base_probability: 0.50,
            probability_floor: 0.10,
            probability_ceiling: 0.95,
            advanced_degree_bonus: 0.15,
            seniority_bonus: 0.20,
            time_in_country_bonus: 0.10,
            language_fluency_bonus: 0.15,
            wellbeing_bonus: 0.10,
            professional_network_bonus: 0.10,
            base_timeline_months: 12,
            min_timeline_months: 3,
            max_timeline_months: 36,
            language_gap_months: 6,
            recent_arrival_months: 4,
            limited_experience_months: 3,
        }
    }
}
