use super::domain::{ProfileType, SurveyRecord};

/// First matching archetype wins.
pub(crate) fn classify(record: &SurveyRecord) -> ProfileType {
    if record.age < 30 && record.years_of_experience < 3 {
        return ProfileType::EarlyCareer;
    }

    if record.years_of_experience >= 5 && record.language_proficiency >= 4 {
        return ProfileType::ExperiencedWithAdvantage;
    }

    if record.emotional_wellbeing < 3 {
        return ProfileType::NeedsEmotionalSupport;
    }

    ProfileType::InTransition
}
