use super::domain::{
    Recommendation, RecommendationCategory, RecommendationPriority, SurveyRecord,
};

struct RecommendationRule {
    category: RecommendationCategory,
    priority: RecommendationPriority,
    action: &'static str,
    resources: &'static [&'static str],
    applies: fn(&SurveyRecord) -> bool,
}

// Evaluated in order; output order follows this table.
const RULES: [RecommendationRule; 4] = [
    RecommendationRule {
        category: RecommendationCategory::Language,
        priority: RecommendationPriority::High,
        action: "improve local-language level",
        resources: &[
            "language courses",
            "conversation practice",
            "official certification",
        ],
        applies: below_advanced_language,
    },
    RecommendationRule {
        category: RecommendationCategory::Networking,
        priority: RecommendationPriority::High,
        action: "expand professional network",
        resources: &[
            "professional-profile optimization",
            "networking events",
            "professional associations",
        ],
        applies: thin_network,
    },
    RecommendationRule {
        category: RecommendationCategory::Wellbeing,
        priority: RecommendationPriority::Medium,
        action: "seek emotional/mental support",
        resources: &["counseling", "support groups", "mindfulness practice"],
        applies: low_wellbeing,
    },
    RecommendationRule {
        category: RecommendationCategory::Experience,
        priority: RecommendationPriority::Medium,
        action: "gain local experience",
        resources: &["volunteering", "freelance projects", "mentorship programs"],
        applies: limited_experience,
    },
];

fn below_advanced_language(record: &SurveyRecord) -> bool {
    record.language_proficiency < 4
}

fn thin_network(record: &SurveyRecord) -> bool {
    record.networking_level < 3
}

fn low_wellbeing(record: &SurveyRecord) -> bool {
    record.emotional_wellbeing < 3
}

fn limited_experience(record: &SurveyRecord) -> bool {
    record.years_of_experience < 3
}

pub(crate) fn recommend(record: &SurveyRecord) -> Vec<Recommendation> {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(record))
        .map(|rule| Recommendation {
            category: rule.category,
            priority: rule.priority,
            action: rule.action.to_string(),
            resources: rule
                .resources
                .iter()
                .map(|resource| resource.to_string())
                .collect(),
        })
        .collect()
}
