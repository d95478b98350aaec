use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::intake::SurveyForm;

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("unable to open survey batch: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to read survey batch: {0}")]
    Csv(#[from] csv::Error),
}

/// Reads survey form rows from a CSV export whose headers match the form field names.
pub fn read_survey_forms<R: Read>(reader: R) -> Result<Vec<SurveyForm>, BatchError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut forms = Vec::new();
    for row in csv_reader.deserialize::<SurveyForm>() {
        forms.push(row?);
    }

    Ok(forms)
}

pub fn read_survey_forms_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<SurveyForm>, BatchError> {
    let file = File::open(path)?;
    read_survey_forms(file)
}
