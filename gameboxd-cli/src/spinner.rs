//! Spinner shown while waiting on the remote catalog.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Start a ticking spinner with `msg`. Hidden when `quiet` is set.
///
/// Call `finish_and_clear` on the result before printing anything else.
pub(crate) fn fetch_spinner(quiet: bool, msg: impl Into<String>) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let style = ProgressStyle::with_template("  {spinner:.cyan} {msg}")
        .map(|s| s.tick_chars("/-\\|"))
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    let pb = ProgressBar::new_spinner();
    pb.set_style(style);
    pb.set_message(msg.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
