use crate::error::AppError;
use crate::service::report::{run_batch, run_predict};
use crate::service::server;
use crate::workflows::career::intake::{
    DEFAULT_AGE, DEFAULT_EMOTIONAL_WELLBEING, DEFAULT_LANGUAGE_PROFICIENCY,
    DEFAULT_NETWORKING_LEVEL, DEFAULT_YEARS_IN_COUNTRY, DEFAULT_YEARS_OF_EXPERIENCE,
};
use crate::workflows::career::EducationLevel;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Career Insight",
    about = "Score career survey responses over HTTP or from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single survey response and print the prediction
    Predict(PredictArgs),
    /// Score every row of a survey CSV export, one JSON line per row
    Batch(BatchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// JSON file holding a survey record; replaces the individual answer flags
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    #[arg(long, default_value_t = DEFAULT_AGE)]
    pub(crate) age: i32,
    #[arg(long, default_value = "")]
    pub(crate) gender: String,
    /// high-school, certificate, bachelor, masters or phd
    #[arg(long, value_parser = crate::service::infra::parse_education)]
    pub(crate) education: Option<EducationLevel>,
    #[arg(long, default_value_t = DEFAULT_YEARS_OF_EXPERIENCE)]
    pub(crate) experience: u32,
    #[arg(long, default_value_t = DEFAULT_YEARS_IN_COUNTRY)]
    pub(crate) years_in_country: f64,
    /// Self-rated local-language level (1-5)
    #[arg(long, default_value_t = DEFAULT_LANGUAGE_PROFICIENCY)]
    pub(crate) language_level: u8,
    /// Self-rated wellbeing (1-5)
    #[arg(long, default_value_t = DEFAULT_EMOTIONAL_WELLBEING)]
    pub(crate) wellbeing: u8,
    /// Self-rated professional network strength (1-5)
    #[arg(long, default_value_t = DEFAULT_NETWORKING_LEVEL)]
    pub(crate) networking: u8,
    /// Free-text description of current barriers
    #[arg(long, default_value = "")]
    pub(crate) situation: String,
    /// Career goal; repeat for several
    #[arg(long = "goal")]
    pub(crate) goals: Vec<String>,
    /// Print the prediction as JSON instead of a report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export whose headers match the survey form fields
    #[arg(long)]
    pub(crate) input: PathBuf,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Predict(args) => run_predict(args),
        Command::Batch(args) => run_batch(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_flags_default_like_the_survey_form() {
        let cli = Cli::try_parse_from(["career-insight", "predict", "--education", "masters"])
            .expect("arguments parse");

        match cli.command {
            Some(Command::Predict(args)) => {
                assert_eq!(args.age, DEFAULT_AGE);
                assert_eq!(args.education, Some(EducationLevel::Masters));
                assert_eq!(args.language_level, 3);
                assert_eq!(args.networking, 3);
                assert!(args.goals.is_empty());
                assert!(!args.json);
            }
            other => panic!("expected predict command, got {other:?}"),
        }
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["career-insight"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn batch_requires_input() {
        assert!(Cli::try_parse_from(["career-insight", "batch"]).is_err());
    }
}
