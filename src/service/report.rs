use crate::error::AppError;
use crate::service::cli::{BatchArgs, PredictArgs};
use crate::service::infra::load_survey_record;
use crate::workflows::career::{
    read_survey_forms_from_path, EducationLevel, OutcomePrediction, PredictionEngine,
    ScoreBreakdown, SurveyRecord,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct BatchLine {
    row: usize,
    prediction: OutcomePrediction,
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let record = match &args.input {
        Some(path) => load_survey_record(path)?,
        None => record_from_args(&args),
    };

    let engine = PredictionEngine::default();
    let breakdown = engine.breakdown(&record);

    if args.json {
        println!("{}", to_json(&breakdown.prediction)?);
    } else {
        render_prediction(&record, &breakdown);
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let forms = read_survey_forms_from_path(&args.input)?;
    let engine = PredictionEngine::default();

    for (index, form) in forms.iter().enumerate() {
        let line = BatchLine {
            row: index + 1,
            prediction: engine.predict(&form.normalize()),
        };
        println!("{}", to_json(&line)?);
    }

    Ok(())
}

fn record_from_args(args: &PredictArgs) -> SurveyRecord {
    SurveyRecord {
        age: args.age,
        gender: args.gender.clone(),
        education_level: args.education.unwrap_or(EducationLevel::Other),
        years_of_experience: args.experience,
        years_in_country: args.years_in_country,
        language_proficiency: args.language_level,
        emotional_wellbeing: args.wellbeing,
        networking_level: args.networking,
        current_situation: args.situation.clone(),
        goals: args.goals.clone(),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string(value).map_err(AppError::Serialization)
}

fn render_prediction(record: &SurveyRecord, breakdown: &ScoreBreakdown) {
    let prediction = &breakdown.prediction;

    println!("Career outcome prediction");
    println!(
        "Profile: {} (age {}, {}, {} years experience, {} years in country)",
        prediction.profile_type.label(),
        record.age,
        record.education_level.label(),
        record.years_of_experience,
        record.years_in_country
    );
    println!("Success probability: {}%", prediction.success_probability);
    println!("Estimated timeline: {} months", prediction.timeline_months);

    if breakdown.score_components.is_empty() {
        println!("\nContributing factors: none");
    } else {
        println!("\nContributing factors");
        for component in &breakdown.score_components {
            println!(
                "- {}: +{:.0} pts",
                component.factor.label(),
                component.adjustment * 100.0
            );
        }
    }

    if !breakdown.timeline_components.is_empty() {
        println!("\nTimeline delays");
        for component in &breakdown.timeline_components {
            println!("- {}: +{} months", component.factor.label(), component.months);
        }
    }

    if prediction.recommendations.is_empty() {
        println!("\nRecommendations: none");
    } else {
        println!("\nRecommendations");
        for recommendation in &prediction.recommendations {
            println!(
                "- [{}] {}: {}",
                recommendation.priority.label(),
                recommendation.category.label(),
                recommendation.action
            );
            println!("  resources: {}", recommendation.resources.join(", "));
        }
    }

    if record.goals.iter().any(|goal| !goal.is_empty()) {
        println!("\nGoals: {}", record.goals.join("; "));
    }
    if !record.current_situation.is_empty() {
        println!("Current situation: {}", record.current_situation);
    }
}
