//! Output rendering

pub mod console;

pub use console::{ConsoleFormatter, Output};
