//! Command dispatch gated by the navigation root

mod dispatcher;
mod forms;

pub use dispatcher::{App, AppError, Target, is_allowed, target};
