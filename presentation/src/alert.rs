//! Console implementation of the alert port

use colored::Colorize;
use jobseeker_application::{Alert, AlertNotifier, AlertSeverity};

/// Prints alerts to stderr, one titled block per alert
pub struct ConsoleAlert;

impl ConsoleAlert {
    pub fn render(alert: &Alert) -> String {
        let title = match alert.severity {
            AlertSeverity::Error => alert.title.red().bold(),
            AlertSeverity::Success => alert.title.green().bold(),
            AlertSeverity::Info => alert.title.cyan().bold(),
        };
        format!("{}: {}", title, alert.message)
    }
}

impl AlertNotifier for ConsoleAlert {
    fn alert(&self, alert: Alert) {
        eprintln!("{}", Self::render(&alert));
    }
}
