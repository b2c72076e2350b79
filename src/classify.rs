//! Sink classification
//!
//! Decides which enumerated sink is the headset and which is the desktop speakers.
//! Sink names are derived from bus topology, which survives reboots better than
//! numeric indices but still shifts with firmware and driver versions, so each role
//! carries several redundant rules. Description rules are a fallback because
//! descriptions can be renamed by the user.

use serde::Serialize;
use std::fmt;

use crate::pactl::Device;

// ============================================================================
// Roles
// ============================================================================

/// One of the two known output devices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Headphones,
    Speakers,
}

impl Role {
    /// Label used when switching to this role
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Headphones => "Logitech Headphones",
            Self::Speakers => "Desktop Speakers",
        }
    }

    /// Message printed when no sink matched this role
    #[must_use]
    pub fn unavailable_message(self) -> &'static str {
        match self {
            Self::Headphones => "Logitech headphones not available",
            Self::Speakers => "Desktop speakers not available",
        }
    }

    /// `FreeDesktop` icon name for notifications
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Headphones => "audio-headphones",
            Self::Speakers => "audio-speakers",
        }
    }

    /// The other role
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Headphones => Self::Speakers,
            Self::Speakers => Self::Headphones,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Headphones => f.write_str("headphones"),
            Self::Speakers => f.write_str("speakers"),
        }
    }
}

// ============================================================================
// Rule Table
// ============================================================================

/// Which text of a device a rule inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Description,
}

/// A single match rule: `field` contains every `all_of` substring and none of `none_of`
///
/// Substrings are lowercase; matching lowercases the field first.
#[derive(Debug, Clone, Copy)]
pub struct MatchRule {
    pub field: Field,
    pub all_of: &'static [&'static str],
    pub none_of: &'static [&'static str],
}

impl MatchRule {
    const fn contains_all(field: Field, all_of: &'static [&'static str]) -> Self {
        Self {
            field,
            all_of,
            none_of: &[],
        }
    }

    fn matches(&self, id: &str, description: &str) -> bool {
        let text = match self.field {
            Field::Id => id,
            Field::Description => description,
        };
        self.all_of.iter().all(|s| text.contains(s)) && !self.none_of.iter().any(|s| text.contains(s))
    }
}

/// Rules for one role; any matching rule claims the device
#[derive(Debug, Clone, Copy)]
pub struct RoleRules {
    pub role: Role,
    pub rules: &'static [MatchRule],
}

/// Classification table, in priority order
///
/// A device is checked against headphones first; the speakers rules only see devices
/// the headphones rules rejected. The `hdmi`/`usb` exclusion guards only the generic
/// PCI analog rule, the explicit rows are taken as-is.
pub const ROLE_TABLE: [RoleRules; 2] = [
    RoleRules {
        role: Role::Headphones,
        rules: &[
            MatchRule::contains_all(Field::Id, &["logitech", "pro_x"]),
            MatchRule::contains_all(Field::Description, &["logitech", "pro x"]),
            MatchRule::contains_all(Field::Id, &["usb-logitech_pro_x"]),
        ],
    },
    RoleRules {
        role: Role::Speakers,
        rules: &[
            MatchRule::contains_all(Field::Id, &["pci-0000_18_00.6"]),
            MatchRule::contains_all(Field::Description, &["desktop speakers"]),
            MatchRule {
                field: Field::Id,
                all_of: &["pci-", "analog-stereo"],
                none_of: &["hdmi", "usb"],
            },
        ],
    },
];

// ============================================================================
// Classification
// ============================================================================

/// Role of a single device, or `None` if no rule matches
#[must_use]
pub fn classify_device(device: &Device) -> Option<Role> {
    let id = device.id.to_lowercase();
    let description = device.description.to_lowercase();

    ROLE_TABLE
        .iter()
        .find(|entry| entry.rules.iter().any(|rule| rule.matches(&id, &description)))
        .map(|entry| entry.role)
}

/// Result of classifying a sink listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification<'a> {
    pub headphones: Option<&'a Device>,
    pub speakers: Option<&'a Device>,
}

impl<'a> Classification<'a> {
    #[must_use]
    pub fn get(&self, role: Role) -> Option<&'a Device> {
        match role {
            Role::Headphones => self.headphones,
            Role::Speakers => self.speakers,
        }
    }

    fn slot(&mut self, role: Role) -> &mut Option<&'a Device> {
        match role {
            Role::Headphones => &mut self.headphones,
            Role::Speakers => &mut self.speakers,
        }
    }

    /// Role of the device named `id`, if it was selected for one
    #[must_use]
    pub fn role_of(&self, id: &str) -> Option<Role> {
        [Role::Headphones, Role::Speakers]
            .into_iter()
            .find(|&role| self.get(role).is_some_and(|d| d.id == id))
    }
}

/// Pick the headphones and speakers out of `devices`
///
/// First match wins: once a role is filled, later devices matching it are ignored.
/// This follows listing order and is not a stability guarantee when more than one
/// sink matches a role.
#[must_use]
pub fn classify(devices: &[Device]) -> Classification<'_> {
    let mut result = Classification::default();

    for device in devices {
        let Some(role) = classify_device(device) else {
            continue;
        };

        let slot = result.slot(role);
        if slot.is_none() {
            *slot = Some(device);
        } else {
            tracing::debug!("Ignoring additional {} match: {}", role, device.id);
        }
    }

    result
}
