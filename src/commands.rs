//! CLI commands
//!
//! `toggle` switches the default sink and always ends with a single stdout line.
//! `status` and `list-sinks` are read-only views over the same query and
//! classification steps.

use color_eyre::eyre::Result;
use crossterm::style::Stylize;
use serde::Serialize;

use crate::classify::{self, Classification, Role};
use crate::notification;
use crate::pactl::{self, Device, SoundServer};
use crate::style::SinkflipStyle;
use crate::toggle::{self, ToggleOutcome};

// ============================================================================
// JSON Output Structures
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SinkJson<'a> {
    pub id: &'a str,
    pub description: &'a str,
    pub role: Option<Role>,
    pub is_default: bool,
}

#[derive(Debug, Serialize)]
pub struct ListSinksJson<'a> {
    pub sinks: Vec<SinkJson<'a>>,
    pub current_default: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct CurrentSinkJson<'a> {
    pub id: &'a str,
    pub description: &'a str,
    pub role: Option<Role>,
}

#[derive(Debug, Serialize)]
pub struct StatusJson<'a> {
    pub current_sink: Option<CurrentSinkJson<'a>>,
    pub headphones: Option<&'a Device>,
    pub speakers: Option<&'a Device>,
}

/// Build the `list-sinks --json` document
#[must_use]
pub fn list_sinks_json<'a>(
    devices: &'a [Device],
    found: &Classification<'_>,
    current: &'a str,
) -> ListSinksJson<'a> {
    ListSinksJson {
        sinks: devices
            .iter()
            .map(|d| SinkJson {
                id: &d.id,
                description: &d.description,
                role: found.role_of(&d.id),
                is_default: d.id == current,
            })
            .collect(),
        current_default: (!current.is_empty()).then_some(current),
    }
}

/// Build the `status --json` document
#[must_use]
pub fn status_json<'a>(
    devices: &'a [Device],
    found: &Classification<'a>,
    current: &'a str,
) -> StatusJson<'a> {
    let current_sink = (!current.is_empty()).then(|| CurrentSinkJson {
        id: current,
        description: devices
            .iter()
            .find(|d| d.id == current)
            .map_or(current, |d| d.description.as_str()),
        role: found.role_of(current),
    });

    StatusJson {
        current_sink,
        headphones: found.headphones,
        speakers: found.speakers,
    }
}

// ============================================================================
// Commands
// ============================================================================

/// Toggle the default sink and print the outcome
///
/// Every outcome, including query and switch failures, is reported as one line on
/// stdout; the command itself never fails.
pub fn toggle(server: &impl SoundServer, notify: bool) {
    match toggle::toggle(server) {
        Ok(outcome @ ToggleOutcome::Switched { .. }) => {
            println!("{}", outcome.to_string().success());
            if notify {
                notification::notify_outcome(&outcome);
            }
        }
        Ok(outcome @ ToggleOutcome::Unavailable(_)) => {
            println!("{}", outcome.to_string().warning());
        }
        Err(e) => {
            tracing::debug!("Toggle failed: {:?}", e);
            println!("{}", e.to_string().error());
        }
    }
}

/// Show the current default sink and role availability
///
/// # Errors
/// Returns an error if the sound server query fails or JSON serialization fails.
pub fn status(server: &impl SoundServer, json_output: bool) -> Result<()> {
    let current = pactl::get_current_default(server)?;
    let devices = pactl::list_devices(server)?;
    let found = classify::classify(&devices);

    if json_output {
        let output = status_json(&devices, &found, &current);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Audio Output".header());
    println!("{}", "-".repeat(12));
    if current.is_empty() {
        println!("{} {}", "Current:".dim(), "(no default sink)".dim());
    } else {
        let description = devices
            .iter()
            .find(|d| d.id == current)
            .map_or(current.as_str(), |d| d.description.as_str());
        println!("{} {}", "Current:".dim(), description.bold());
        println!("{} {}", "Sink:".dim(), current.as_str().technical());
        if let Some(role) = found.role_of(&current) {
            println!("{} {}", "Role:".dim(), role.to_string().technical());
        }
    }

    println!();
    println!("{}", "Devices".header());
    println!("{}", "-".repeat(7));
    for role in [Role::Headphones, Role::Speakers] {
        match found.get(role) {
            Some(device) => println!(
                "{} {} ({})",
                format!("{}:", role.label()).dim(),
                device.description.as_str().bold(),
                "available".success()
            ),
            None => println!(
                "{} {}",
                format!("{}:", role.label()).dim(),
                "not found".error()
            ),
        }
    }

    Ok(())
}

/// List all sinks with their detected roles
///
/// # Errors
/// Returns an error if the sound server query fails or JSON serialization fails.
pub fn list_sinks(server: &impl SoundServer, json_output: bool) -> Result<()> {
    let current = pactl::get_current_default(server)?;
    let devices = pactl::list_devices(server)?;
    let found = classify::classify(&devices);

    if json_output {
        let output = list_sinks_json(&devices, &found, &current);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "SINKS:".header());
    println!("{}", "-".repeat(6));
    if devices.is_empty() {
        println!("  {}", "(none)".dim());
        return Ok(());
    }

    for device in &devices {
        let marker = if device.id == current { "* " } else { "  " };
        let role = found
            .role_of(&device.id)
            .map(|r| format!(" [{}]", r.label()))
            .unwrap_or_default();
        println!("{}{}{}", marker, device.id.as_str().bold(), role.technical());
        println!("    {}", device.description.as_str().dim());
    }
    println!("\n  {} = current default", "*".dim());

    Ok(())
}
