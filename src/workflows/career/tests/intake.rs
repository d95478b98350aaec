use super::common::*;
use crate::workflows::career::domain::{
    EducationLevel, ProfileType, RecommendationCategory, SurveyRecord,
};
use crate::workflows::career::intake::{
    SurveyForm, DEFAULT_AGE, DEFAULT_EMOTIONAL_WELLBEING, DEFAULT_LANGUAGE_PROFICIENCY,
    DEFAULT_NETWORKING_LEVEL,
};
use serde_json::json;

#[test]
fn form_answers_normalize_to_record() {
    let record = survey_form().normalize();

    assert_eq!(record.age, 26);
    assert_eq!(record.gender, "non-binary");
    assert_eq!(record.education_level, EducationLevel::Other);
    assert_eq!(record.years_of_experience, 6);
    assert_eq!(record.years_in_country, 3.0);
    assert_eq!(record.language_proficiency, 4);
    assert_eq!(record.emotional_wellbeing, 2);
    assert_eq!(record.networking_level, DEFAULT_NETWORKING_LEVEL);
    assert_eq!(record.current_situation, "Limited local references");
    assert_eq!(
        record.goals,
        vec!["Find a role in data science", "Build a network"]
    );
}

#[test]
fn blank_form_takes_every_default() {
    let record = SurveyForm::default().normalize();

    assert_eq!(record.age, DEFAULT_AGE);
    assert_eq!(record.years_of_experience, 0);
    assert_eq!(record.years_in_country, 0.0);
    assert_eq!(record.language_proficiency, DEFAULT_LANGUAGE_PROFICIENCY);
    assert_eq!(record.emotional_wellbeing, DEFAULT_EMOTIONAL_WELLBEING);
    assert_eq!(record.networking_level, 3);
    assert_eq!(record.education_level, EducationLevel::Other);
    assert_eq!(record.goals, vec![String::new()]);
}

#[test]
fn unparseable_and_zero_answers_fall_back() {
    let form = SurveyForm {
        age: "Over 50".to_string(),
        years_in_country: "<1".to_string(),
        language_level: "0".to_string(),
        currently_satisfaction: "n/a".to_string(),
        ..survey_form()
    };

    let record = form.normalize();
    assert_eq!(record.age, DEFAULT_AGE);
    assert_eq!(record.years_in_country, 0.0);
    assert_eq!(record.language_proficiency, DEFAULT_LANGUAGE_PROFICIENCY);
    assert_eq!(record.emotional_wellbeing, DEFAULT_EMOTIONAL_WELLBEING);
}

#[test]
fn normalized_form_scores_like_equivalent_record() {
    let prediction = engine().predict(&SurveyRecord::from(survey_form()));

    assert_eq!(prediction.success_probability, 95);
    assert_eq!(prediction.timeline_months, 12);
    assert_eq!(prediction.profile_type, ProfileType::ExperiencedWithAdvantage);
    assert_eq!(prediction.recommendations.len(), 1);
    assert_eq!(
        prediction.recommendations[0].category,
        RecommendationCategory::Wellbeing
    );
}

#[test]
fn form_deserializes_from_camel_case_payload() {
    let form: SurveyForm = serde_json::from_value(json!({
        "age": "31-35",
        "education": "phd",
        "yearsInCountry": "1-2",
        "languageLevel": "5",
        "currentlySatisfaction": "4",
        "field": "stem",
        "timeline": "6-months"
    }))
    .expect("form parses");

    assert_eq!(form.years_in_country, "1-2");
    assert_eq!(form.field, "stem");
    assert_eq!(form.timeline, "6-months");
    assert!(form.experience.is_empty());

    let record = form.normalize();
    assert_eq!(record.age, 31);
    assert_eq!(record.years_in_country, 1.0);
    assert_eq!(record.education_level, EducationLevel::Phd);
}

#[test]
fn record_accepts_survey_client_field_names() {
    let record: SurveyRecord = serde_json::from_value(json!({
        "age": 26,
        "gender": "female",
        "education": "master",
        "experience": 1,
        "yearsInCountry": 0.5,
        "languageLevel": 2,
        "emotionalWellbeing": 2,
        "networkingLevel": 3,
        "currentSituation": "",
        "goals": ["work"]
    }))
    .expect("record parses");

    assert_eq!(record.education_level, EducationLevel::Other);
    assert_eq!(record.years_of_experience, 1);
    assert_eq!(record.language_proficiency, 2);
}

#[test]
fn unknown_education_never_earns_bonus() {
    let record: SurveyRecord = serde_json::from_value(json!({
        "age": 40,
        "educationLevel": "bootcamp",
        "yearsOfExperience": 3,
        "yearsInCountry": 1,
        "languageProficiency": 3,
        "emotionalWellbeing": 3,
        "networkingLevel": 2
    }))
    .expect("record parses");

    assert_eq!(record.education_level, EducationLevel::Other);
    assert!(record.goals.is_empty());
    assert_eq!(engine().predict(&record).success_probability, 50);
}

#[test]
fn singular_master_answer_earns_no_degree_bonus() {
    let form = SurveyForm {
        education: "master".to_string(),
        experience: "0-2".to_string(),
        years_in_country: "<1".to_string(),
        language_level: "3".to_string(),
        currently_satisfaction: "3".to_string(),
        ..survey_form()
    };

    let record = form.normalize();
    assert_eq!(record.education_level, EducationLevel::Other);
    assert_eq!(engine().predict(&record).success_probability, 60);
}
