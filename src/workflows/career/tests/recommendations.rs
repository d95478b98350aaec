use super::common::*;
use crate::workflows::career::domain::{RecommendationCategory, RecommendationPriority};

#[test]
fn all_triggers_produce_fixed_category_order() {
    let prediction = engine().predict(&newcomer_record());

    let categories: Vec<RecommendationCategory> = prediction
        .recommendations
        .iter()
        .map(|recommendation| recommendation.category)
        .collect();
    assert_eq!(
        categories,
        vec![
            RecommendationCategory::Language,
            RecommendationCategory::Networking,
            RecommendationCategory::Wellbeing,
            RecommendationCategory::Experience,
        ]
    );

    let priorities: Vec<RecommendationPriority> = prediction
        .recommendations
        .iter()
        .map(|recommendation| recommendation.priority)
        .collect();
    assert_eq!(
        priorities,
        vec![
            RecommendationPriority::High,
            RecommendationPriority::High,
            RecommendationPriority::Medium,
            RecommendationPriority::Medium,
        ]
    );
}

#[test]
fn order_holds_when_only_some_rules_trigger() {
    let mut record = established_record();
    record.networking_level = 2;
    record.years_of_experience = 1;

    let categories: Vec<RecommendationCategory> = engine()
        .predict(&record)
        .recommendations
        .into_iter()
        .map(|recommendation| recommendation.category)
        .collect();

    assert_eq!(
        categories,
        vec![
            RecommendationCategory::Networking,
            RecommendationCategory::Experience,
        ]
    );
}

#[test]
fn language_recommendation_lists_its_resources() {
    let prediction = engine().predict(&newcomer_record());
    let language = &prediction.recommendations[0];

    assert_eq!(language.action, "improve local-language level");
    assert_eq!(
        language.resources,
        vec![
            "language courses",
            "conversation practice",
            "official certification",
        ]
    );
}

#[test]
fn thresholds_are_exclusive_upper_bounds() {
    let mut record = newcomer_record();
    record.language_proficiency = 4;
    record.networking_level = 3;
    record.emotional_wellbeing = 3;
    record.years_of_experience = 3;

    assert!(engine().predict(&record).recommendations.is_empty());

    record.years_of_experience = 2;
    let recommendations = engine().predict(&record).recommendations;
    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0].category, RecommendationCategory::Experience);
    assert_eq!(recommendations[0].action, "gain local experience");
}
