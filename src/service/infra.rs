use crate::error::AppError;
use crate::workflows::career::{EducationLevel, PredictionEngine, SurveyRecord};
use metrics_exporter_prometheus::PrometheusHandle;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared handles for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) engine: Arc<PredictionEngine>,
}

impl AppState {
    pub fn new(engine: PredictionEngine, metrics: PrometheusHandle) -> Self {
        Self {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(metrics),
            engine: Arc::new(engine),
        }
    }

    pub fn mark_ready(&self) {
        self.readiness.store(true, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.readiness.load(Ordering::Acquire)
    }
}

pub(crate) fn parse_education(raw: &str) -> Result<EducationLevel, String> {
    match EducationLevel::from_form(raw) {
        EducationLevel::Other => Err(format!(
            "unknown education level '{raw}' (expected high-school, certificate, bachelor, masters or phd)"
        )),
        level => Ok(level),
    }
}

pub(crate) fn load_survey_record(path: &Path) -> Result<SurveyRecord, AppError> {
    let file = File::open(path)?;
    serde_json::from_reader(BufReader::new(file)).map_err(AppError::SurveyFile)
}
