//! Terminal spinners for the calls that wait on the edge function.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

// ── Spinner presets ──────────────────────────────────

const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Animated spinner on stderr. Hidden when `quiet` is set so `--json`
/// output stays machine readable.
pub fn spinner(message: &str, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars(TICK_CHARS)
        .template("{spinner:.cyan} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// The chat reply wait, labelled with the provider's model.
pub fn thinking_spinner(model_badge: &str, quiet: bool) -> ProgressBar {
    spinner(&format!("Waiting for {}...", model_badge), quiet)
}

// ── Finish helpers ───────────────────────────────────

pub fn finish_success(pb: &ProgressBar, msg: &str) {
    finish(pb, format!("✓ {}", msg));
}

pub fn finish_error(pb: &ProgressBar, msg: &str) {
    finish(pb, format!("✗ {}", msg));
}

fn finish(pb: &ProgressBar, msg: String) {
    if let Ok(style) = ProgressStyle::default_spinner().template("  {msg}") {
        pb.set_style(style);
    }
    pb.finish_with_message(msg);
}

// ── Status icons ─────────────────────────────────────

/// Marker for an idea status, used by the board listing.
pub fn status_icon(status: crate::models::IdeaStatus) -> &'static str {
    use crate::models::IdeaStatus;
    match status {
        IdeaStatus::Brainstorm => "○",
        IdeaStatus::Planning => "◷",
        IdeaStatus::InProgress => "⟳",
        IdeaStatus::Completed => "✓",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IdeaStatus;

    #[test]
    fn test_status_icon_mapping() {
        assert_eq!(status_icon(IdeaStatus::Brainstorm), "○");
        assert_eq!(status_icon(IdeaStatus::InProgress), "⟳");
        assert_eq!(status_icon(IdeaStatus::Completed), "✓");
    }

    #[test]
    fn quiet_spinner_is_hidden() {
        let pb = spinner("working", true);
        assert!(pb.is_hidden());
        finish_success(&pb, "done");
        assert!(pb.is_finished());
    }
}
