//! Spinner around portal requests

use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;

/// Shows a spinner on stderr for the duration of a future.
///
/// Disabled by `--quiet`; indicatif also hides it when stderr is not a terminal.
#[derive(Debug, Clone, Copy)]
pub struct LoadingIndicator {
    enabled: bool,
}

impl LoadingIndicator {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn hidden() -> Self {
        Self::new(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start(&self, message: &str) -> Option<ProgressBar> {
        if !self.enabled {
            return None;
        }
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Some(bar)
    }

    /// Await `future` with the spinner running, then clear it.
    pub async fn run<F: Future>(&self, message: &str, future: F) -> F::Output {
        let bar = self.start(message);
        let output = future.await;
        if let Some(bar) = bar {
            bar.finish_and_clear();
        }
        output
    }
}
