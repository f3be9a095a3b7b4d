//! Presentation layer for jobseeker
//!
//! This crate contains the CLI definitions, the command dispatcher that gates
//! commands on the mounted navigation group, console output, the loading
//! indicator, and the stderr alert sink.

pub mod alert;
pub mod app;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use alert::ConsoleAlert;
pub use app::{App, AppError};
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::{ConsoleFormatter, Output};
pub use progress::LoadingIndicator;
