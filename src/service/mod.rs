mod cli;
mod infra;
mod report;
pub mod routes;
mod server;

pub use infra::AppState;
pub use routes::{router, PredictionRequest};

use crate::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
