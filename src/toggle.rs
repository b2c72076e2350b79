//! Headphones/speakers toggle
//!
//! Query → classify → switch. The only state is the sound server's default sink:
//! if it is the headphones we move to the speakers, anything else moves to the
//! headphones.

use std::fmt;
use tracing::info;

use crate::classify::{self, Classification, Role};
use crate::pactl::{self, Device, PactlError, SoundServer};

/// Which query failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    CurrentSink,
    AvailableSinks,
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurrentSink => f.write_str("current sink"),
            Self::AvailableSinks => f.write_str("available sinks"),
        }
    }
}

/// A toggle run that could not complete
#[derive(Debug, thiserror::Error)]
pub enum ToggleError {
    #[error("Error getting {query}: {source}")]
    QueryFailed {
        query: Query,
        #[source]
        source: PactlError,
    },
    #[error("Error switching to {label}: {source}")]
    SwitchFailed {
        label: &'static str,
        #[source]
        source: PactlError,
    },
}

/// Where the default sink currently points, relative to the headphones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    OnHeadphones,
    /// Speakers, an unrelated sink, or no default at all
    OnOther,
}

impl ToggleState {
    #[must_use]
    pub fn detect(current: &str, headphones: &Device) -> Self {
        if current == headphones.id {
            Self::OnHeadphones
        } else {
            Self::OnOther
        }
    }

    /// Role to switch to from this state
    #[must_use]
    pub fn target(self) -> Role {
        match self {
            Self::OnHeadphones => Role::Speakers,
            Self::OnOther => Role::Headphones,
        }
    }
}

/// The sink a toggle will switch to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan<'a> {
    pub role: Role,
    pub device: &'a Device,
}

/// Decide the switch target, or report the first missing role (headphones first)
///
/// # Errors
/// Returns the missing [`Role`] if either device was not found.
pub fn plan<'a>(current: &str, found: &Classification<'a>) -> Result<Plan<'a>, Role> {
    let headphones = found.headphones.ok_or(Role::Headphones)?;
    let speakers = found.speakers.ok_or(Role::Speakers)?;

    let role = ToggleState::detect(current, headphones).target();
    let device = match role {
        Role::Headphones => headphones,
        Role::Speakers => speakers,
    };

    Ok(Plan { role, device })
}

/// Outcome of a toggle run that did not hit an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    Switched { device: Device, role: Role },
    /// Informational: a role had no matching sink, nothing was changed
    Unavailable(Role),
}

impl fmt::Display for ToggleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Switched { device, role } => write!(
                f,
                "Switched audio to: {} ({})",
                device.description,
                role.label()
            ),
            Self::Unavailable(role) => f.write_str(role.unavailable_message()),
        }
    }
}

/// Run one toggle against `server`
///
/// # Errors
/// Returns [`ToggleError::QueryFailed`] if the default sink or the sink listing
/// can't be read, and [`ToggleError::SwitchFailed`] if setting the new default fails.
pub fn toggle(server: &impl SoundServer) -> Result<ToggleOutcome, ToggleError> {
    let current =
        pactl::get_current_default(server).map_err(|source| ToggleError::QueryFailed {
            query: Query::CurrentSink,
            source,
        })?;

    let devices = pactl::list_devices(server).map_err(|source| ToggleError::QueryFailed {
        query: Query::AvailableSinks,
        source,
    })?;

    let found = classify::classify(&devices);
    let target = match plan(&current, &found) {
        Ok(target) => target,
        Err(missing) => return Ok(ToggleOutcome::Unavailable(missing)),
    };

    info!(
        "Switching: {} → {} ({})",
        current,
        target.device.id,
        target.role.label()
    );

    server
        .set_default_sink(&target.device.id)
        .map_err(|source| ToggleError::SwitchFailed {
            label: target.role.label(),
            source,
        })?;

    Ok(ToggleOutcome::Switched {
        device: target.device.clone(),
        role: target.role,
    })
}
