pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod output;
pub mod reports;
pub mod scoring;

pub use error::ReportError;
