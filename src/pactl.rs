//! `pactl` integration
//!
//! Provides sink discovery and control via the `PulseAudio` control utility
//! (also served by `pipewire-pulse`):
//! - `pactl get-default-sink`: current default sink name
//! - `pactl list short sinks`: bulk sink discovery
//! - `pactl list sinks`: verbose records, used for description lookup
//! - `pactl set-default-sink`: switching the default sink
//!
//! Every child runs with `LC_ALL=C` so record headers are never localized.

use regex::Regex;
use serde::Serialize;
use std::io;
use std::process::{Command, ExitStatus};
use std::sync::LazyLock;
use tracing::{debug, trace, warn};

// ============================================================================
// Constants
// ============================================================================

/// Program name used when no `--pactl` override is given
pub const DEFAULT_PROGRAM: &str = "pactl";

/// Header that opens each record in `pactl list sinks`
const SINK_RECORD_HEADER: &str = "Sink #";

/// Extracts the value of a `Description:` line in a verbose sink record
static DESCRIPTION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*Description:\s*(.+)$").expect("description pattern is a valid regex")
});

// ============================================================================
// Types
// ============================================================================

/// An output sink known to the sound server
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Device {
    /// Sink name used to address the device (e.g. `alsa_output.pci-0000_18_00.6.analog-stereo`)
    pub id: String,
    /// Human-readable label, falls back to `id`
    pub description: String,
}

impl Device {
    /// Create a device whose description has not been resolved yet
    #[must_use]
    pub fn unresolved(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            description: id.clone(),
            id,
        }
    }
}

/// A failed `pactl` invocation
#[derive(Debug, thiserror::Error)]
pub enum PactlError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("`{command}` failed ({status}){}", format_stderr(.stderr))]
    Status {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}

fn format_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

// ============================================================================
// Sound Server Interface
// ============================================================================

/// The four sound-server queries and mutations the toggle depends on
///
/// Implemented by [`Pactl`] for real use; tests substitute an in-memory server.
pub trait SoundServer {
    /// Raw output of the "current default sink" query
    ///
    /// # Errors
    /// Returns an error if the query cannot be run or exits non-zero.
    fn default_sink(&self) -> Result<String, PactlError>;

    /// Raw output of the short sink listing
    ///
    /// # Errors
    /// Returns an error if the listing cannot be run or exits non-zero.
    fn list_sinks_short(&self) -> Result<String, PactlError>;

    /// Raw output of the detailed sink listing
    ///
    /// # Errors
    /// Returns an error if the listing cannot be run or exits non-zero.
    fn list_sinks_detailed(&self) -> Result<String, PactlError>;

    /// Make `id` the default sink
    ///
    /// # Errors
    /// Returns an error if the mutation cannot be run or exits non-zero.
    fn set_default_sink(&self, id: &str) -> Result<(), PactlError>;
}

/// `pactl` command runner
#[derive(Debug, Clone)]
pub struct Pactl {
    program: String,
}

impl Default for Pactl {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl Pactl {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run `pactl` with `args` and return its stdout
    fn run(&self, args: &[&str]) -> Result<String, PactlError> {
        let command = format!("{} {}", self.program, args.join(" "));
        debug!("Running: {}", command);

        let output = Command::new(&self.program)
            .args(args)
            .env("LC_ALL", "C")
            .output()
            .map_err(|source| PactlError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(PactlError::Status {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl SoundServer for Pactl {
    fn default_sink(&self) -> Result<String, PactlError> {
        self.run(&["get-default-sink"])
    }

    fn list_sinks_short(&self) -> Result<String, PactlError> {
        self.run(&["list", "short", "sinks"])
    }

    fn list_sinks_detailed(&self) -> Result<String, PactlError> {
        self.run(&["list", "sinks"])
    }

    fn set_default_sink(&self, id: &str) -> Result<(), PactlError> {
        self.run(&["set-default-sink", id])?;
        debug!("Set default sink: {}", id);
        Ok(())
    }
}

// ============================================================================
// Enumeration
// ============================================================================

/// Get the current default sink id
///
/// # Errors
/// Returns an error if the query fails.
pub fn get_current_default(server: &impl SoundServer) -> Result<String, PactlError> {
    let raw = server.default_sink()?;
    let id = raw.trim().to_string();
    trace!("Current default sink: {:?}", id);
    Ok(id)
}

/// List every sink in listing order, with descriptions resolved
///
/// # Errors
/// Returns an error if the short listing fails. Description lookups never fail.
pub fn list_devices(server: &impl SoundServer) -> Result<Vec<Device>, PactlError> {
    let mut devices = parse_short_listing(&server.list_sinks_short()?);
    trace!("Short listing returned {} sinks", devices.len());

    for device in &mut devices {
        device.description = resolve_description(server, &device.id);
    }

    Ok(devices)
}

/// Look up a sink's description, falling back to `id` when it can't be found
pub fn resolve_description(server: &impl SoundServer, id: &str) -> String {
    match server.list_sinks_detailed() {
        Ok(detailed) => find_description(&detailed, id).unwrap_or_else(|| {
            debug!("No description found for '{}', using its id", id);
            id.to_string()
        }),
        Err(e) => {
            warn!("Description lookup for '{}' failed: {}", id, e);
            id.to_string()
        }
    }
}

/// Parse `pactl list short sinks`
///
/// Each line is `INDEX NAME DRIVER SAMPLE_SPEC STATE`; the name is the second field.
/// Lines with fewer than two fields are skipped.
#[must_use]
pub fn parse_short_listing(listing: &str) -> Vec<Device> {
    listing
        .lines()
        .filter_map(|line| line.split_whitespace().nth(1))
        .map(Device::unresolved)
        .collect()
}

/// Find the `Description:` of the record named `id` in `pactl list sinks` output
///
/// Scanning stops at the next `Sink #` header, so a description belonging to a
/// later record is never returned.
#[must_use]
pub fn find_description(detailed: &str, id: &str) -> Option<String> {
    let mut lines = detailed.lines();

    lines
        .by_ref()
        .find(|line| line.trim().strip_prefix("Name:").map(str::trim) == Some(id))?;

    for line in lines {
        if line.starts_with(SINK_RECORD_HEADER) {
            return None;
        }
        if let Some(caps) = DESCRIPTION_LINE.captures(line) {
            return Some(caps[1].trim().to_string());
        }
    }

    None
}
