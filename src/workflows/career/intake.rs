//! Normalization of raw survey form answers into a [`SurveyRecord`].
//!
//! The survey collects every answer as a string (`"26-30"`, `"10+"`, `"<1"`). Numeric answers
//! keep their leading integer; anything blank, unparseable, zero or out of range falls back to
//! the defaults below so scoring never sees a missing value.

use serde::{Deserialize, Serialize};

use super::domain::{EducationLevel, SurveyRecord};

pub const DEFAULT_AGE: i32 = 30;
pub const DEFAULT_YEARS_OF_EXPERIENCE: u32 = 0;
pub const DEFAULT_YEARS_IN_COUNTRY: f64 = 0.0;
pub const DEFAULT_LANGUAGE_PROFICIENCY: u8 = 3;
pub const DEFAULT_EMOTIONAL_WELLBEING: u8 = 3;
/// The survey never asks about networking, so every record carries this value.
pub const DEFAULT_NETWORKING_LEVEL: u8 = 3;

/// Raw answers as submitted by the survey form.
///
/// `field` and `timeline` are collected by the form but never reach scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurveyForm {
    pub age: String,
    pub gender: String,
    pub education: String,
    pub field: String,
    pub experience: String,
    pub years_in_country: String,
    pub language_level: String,
    pub currently_satisfaction: String,
    pub barriers: String,
    pub goals: String,
    pub timeline: String,
}

impl SurveyForm {
    pub fn normalize(&self) -> SurveyRecord {
        SurveyRecord {
            age: form_number(&self.age).unwrap_or(DEFAULT_AGE),
            gender: self.gender.trim().to_string(),
            education_level: EducationLevel::from_form(&self.education),
            years_of_experience: form_number(&self.experience)
                .unwrap_or(DEFAULT_YEARS_OF_EXPERIENCE),
            years_in_country: form_number::<u32>(&self.years_in_country)
                .map(f64::from)
                .unwrap_or(DEFAULT_YEARS_IN_COUNTRY),
            language_proficiency: form_number(&self.language_level)
                .unwrap_or(DEFAULT_LANGUAGE_PROFICIENCY),
            emotional_wellbeing: form_number(&self.currently_satisfaction)
                .unwrap_or(DEFAULT_EMOTIONAL_WELLBEING),
            networking_level: DEFAULT_NETWORKING_LEVEL,
            current_situation: self.barriers.trim().to_string(),
            goals: split_goals(&self.goals),
        }
    }
}

impl From<SurveyForm> for SurveyRecord {
    fn from(form: SurveyForm) -> Self {
        form.normalize()
    }
}

/// Leading integer of a form answer, if any.
pub fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if end == 0 {
        return None;
    }

    let magnitude = unsigned[..end].parse::<i64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn form_number<T: TryFrom<i64>>(raw: &str) -> Option<T> {
    leading_integer(raw)
        .filter(|value| *value != 0)
        .and_then(|value| T::try_from(value).ok())
}

/// Every comma-separated entry is kept, blank ones included, so a blank answer yields `[""]`.
fn split_goals(raw: &str) -> Vec<String> {
    raw.split(',').map(|goal| goal.trim().to_string()).collect()
}
