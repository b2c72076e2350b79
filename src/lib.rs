//! `sinkflip` - headset/speakers sink toggle
//!
//! Flips the default audio output between a Logitech PRO X USB headset and a
//! PCI-attached speaker set by driving `pactl` (`PulseAudio` or `pipewire-pulse`).
//!
//! # Pipeline
//! - [`pactl`]: read the default sink and enumerate sinks with descriptions
//! - [`classify`]: pick the headphones and speakers out of the listing via a rule table
//! - [`toggle`]: choose the other device and make it the default
//!
//! # Example
//!
//! ```no_run
//! use sinkflip::{pactl::Pactl, toggle};
//!
//! match toggle::toggle(&Pactl::default()) {
//!     Ok(outcome) => println!("{outcome}"),
//!     Err(e) => println!("{e}"),
//! }
//! ```

pub mod cli;
pub mod classify;
pub mod commands;
pub mod notification;
pub mod pactl;
pub mod style;
pub mod toggle;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types for convenience
pub use cli::Args;
pub use classify::{Classification, Role};
pub use pactl::{Device, Pactl, SoundServer};
pub use toggle::{ToggleError, ToggleOutcome};
