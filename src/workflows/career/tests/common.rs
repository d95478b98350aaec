use crate::workflows::career::domain::{EducationLevel, SurveyRecord};
use crate::workflows::career::intake::SurveyForm;
use crate::workflows::career::PredictionEngine;

/// Recent arrival with every weakness flagged.
pub(super) fn newcomer_record() -> SurveyRecord {
    SurveyRecord {
        age: 26,
        gender: "female".to_string(),
        education_level: EducationLevel::Bachelor,
        years_of_experience: 1,
        years_in_country: 0.5,
        language_proficiency: 2,
        emotional_wellbeing: 2,
        networking_level: 1,
        current_situation: "Credentials not recognized yet".to_string(),
        goals: vec!["Work in my field".to_string()],
    }
}

/// Settled senior professional hitting every bonus.
pub(super) fn established_record() -> SurveyRecord {
    SurveyRecord {
        age: 45,
        gender: "male".to_string(),
        education_level: EducationLevel::Masters,
        years_of_experience: 8,
        years_in_country: 5.0,
        language_proficiency: 5,
        emotional_wellbeing: 5,
        networking_level: 4,
        current_situation: String::new(),
        goals: vec!["Lead a team".to_string(), "Mentor newcomers".to_string()],
    }
}

/// Mid-range record that triggers no bonus and no timeline delay.
pub(super) fn neutral_record() -> SurveyRecord {
    SurveyRecord {
        age: 35,
        gender: String::new(),
        education_level: EducationLevel::Bachelor,
        years_of_experience: 3,
        years_in_country: 1.0,
        language_proficiency: 3,
        emotional_wellbeing: 3,
        networking_level: 2,
        current_situation: String::new(),
        goals: Vec::new(),
    }
}

pub(super) fn survey_form() -> SurveyForm {
    SurveyForm {
        age: "26-30".to_string(),
        gender: "non-binary".to_string(),
        education: "master".to_string(),
        field: "stem".to_string(),
        experience: "6-10".to_string(),
        years_in_country: "3-5".to_string(),
        language_level: "4".to_string(),
        currently_satisfaction: "2".to_string(),
        barriers: "  Limited local references ".to_string(),
        goals: "Find a role in data science, Build a network".to_string(),
        timeline: "1-year".to_string(),
    }
}

pub(super) fn engine() -> PredictionEngine {
    PredictionEngine::default()
}
