//! Desktop notifications
//!
//! Sends a notification via notify-rust after a successful switch, using
//! `FreeDesktop` standard icon names.

use color_eyre::eyre::{Context, Result};
use notify_rust::Notification;
use tracing::warn;

use crate::toggle::ToggleOutcome;

/// Send a desktop notification
///
/// # Errors
/// Returns an error if the notification cannot be sent (e.g., no notification daemon running).
pub fn send_notification(summary: &str, body: &str, icon: &str) -> Result<()> {
    Notification::new()
        .summary(summary)
        .body(body)
        .appname("sinkflip")
        .icon(icon)
        .timeout(3000)
        .show()
        .context("Failed to show notification")?;

    Ok(())
}

/// Summary, body and icon for an outcome, if it warrants a notification
#[must_use]
pub fn notification_for(outcome: &ToggleOutcome) -> Option<(&'static str, String, &'static str)> {
    match outcome {
        ToggleOutcome::Switched { device, role } => Some((
            "Audio Output",
            format!("{} ({})", role.label(), device.description),
            role.icon(),
        )),
        ToggleOutcome::Unavailable(_) => None,
    }
}

/// Notify about a switch; failures are logged and otherwise ignored
pub fn notify_outcome(outcome: &ToggleOutcome) {
    let Some((summary, body, icon)) = notification_for(outcome) else {
        return;
    };

    if let Err(e) = send_notification(summary, &body, icon) {
        warn!("Notification failed: {:#}", e);
    }
}
