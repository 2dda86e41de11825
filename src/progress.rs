//! Progress indicators for long-running recordings.
//!
//! Respects verbosity settings - no progress in quiet mode.

use crate::Verbosity;
use indicatif::{ProgressBar, ProgressStyle};

/// A progress bar that respects verbosity settings.
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    /// Byte-counting bar for input of known length. A zero total is a hidden bar.
    pub fn new(total_bytes: u64, verbosity: Verbosity) -> Self {
        let bar = (verbosity.show_status() && total_bytes > 0).then(|| {
            let pb = ProgressBar::new(total_bytes);
            if let Ok(style) = ProgressStyle::with_template(
                "{spinner:.green} [{bar:30.cyan/blue}] {bytes}/{total_bytes} {msg}",
            ) {
                pb.set_style(style.progress_chars("#>-"));
            }
            pb
        });
        Self { bar }
    }

    /// Spinner for streams of unknown length, such as stdin.
    pub fn spinner(msg: &str, verbosity: Verbosity) -> Self {
        let bar = verbosity.show_status().then(|| {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg} {bytes}") {
                pb.set_style(style.tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "));
            }
            pb.set_message(msg.to_string());
            pb.enable_steady_tick(std::time::Duration::from_millis(100));
            pb
        });
        Self { bar }
    }

    pub fn inc(&self, delta: u64) {
        if let Some(ref bar) = self.bar {
            bar.inc(delta);
        }
    }

    /// Finish and clear the progress bar.
    pub fn finish_and_clear(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
