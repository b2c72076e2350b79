//! Command-line interface definitions
//!
//! Uses clap for argument parsing with derive macros.

use clap::{Parser, Subcommand};

use crate::pactl::{DEFAULT_PROGRAM, Pactl};

/// sinkflip - toggle between headset and desktop speakers
#[derive(Parser, Debug)]
#[command(name = "sinkflip")]
#[command(version)]
#[command(about = "Toggle the default audio sink between a Logitech PRO X headset and desktop speakers")]
#[command(after_help = "\
BEHAVIOR:
  - Running with no subcommand toggles the default sink
  - If the headset is the current default, switches to the desktop speakers
  - Otherwise (speakers, another sink, or no default) switches to the headset
  - Prints one line describing the outcome

DEVICE MATCHING:
  Headset:  sink name contains logitech + pro_x, or usb-logitech_pro_x,
            or description contains logitech + pro x
  Speakers: sink name contains pci-0000_18_00.6, or description contains
            desktop speakers, or sink name is a pci- analog-stereo output
            that is neither hdmi nor usb
  Matching is case-insensitive; the first matching sink wins.

LOGGING:
  Set RUST_LOG (e.g. RUST_LOG=debug) for diagnostics on stderr.")]
pub struct Args {
    /// Sound server control utility to run
    #[arg(long, global = true, value_name = "PROGRAM", default_value = DEFAULT_PROGRAM)]
    pub pactl: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    /// Build the `pactl` runner these arguments describe
    #[must_use]
    pub fn server(&self) -> Pactl {
        Pactl::new(&self.pactl)
    }
}

/// Available subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Toggle between headset and speakers (default)
    Toggle {
        /// Send a desktop notification after switching
        #[arg(short, long)]
        notify: bool,
    },

    /// Show the current default sink and which devices were found
    Status {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// List available sinks and their detected roles
    ListSinks {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}
