pub mod config;
pub mod error;
pub mod service;
pub mod telemetry;
pub mod workflows;

pub use service::run;
