//! Validated console commands.
//!
//! A [`ConsoleCommand`] is built through a fallible constructor that checks the
//! channel number and name length.  Once built it always encodes: the address
//! pattern, type tag and arguments are derived from already-validated fields.
//!
//! ```rust
//! use x32_core::ConsoleCommand;
//!
//! let cmd = ConsoleCommand::mute_channel(1).unwrap();
//! assert_eq!(cmd.address(), "/ch/01/mix/on");
//! assert!(ConsoleCommand::mute_channel(33).is_err());
//! ```

pub mod mixer;

use crate::domain::channel::{Channel, ChannelName, ValidationError};
use crate::domain::level::FaderLevel;
use crate::protocol::argument::Argument;
use crate::protocol::codec::{EncodeError, Message};
use crate::tables::{Color, Icon};

/// Address of the main stereo bus on/off switch.
pub const MAIN_ON_ADDRESS: &str = "/main/st/mix/on";

/// Address of the main stereo bus fader.
pub const MAIN_FADER_ADDRESS: &str = "/main/st/mix/fader";

/// A console action ready to be encoded.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    /// `/ch/NN/mix/on`: 0 mutes, 1 unmutes.
    ChannelOn { channel: Channel, on: bool },
    /// `/main/st/mix/on`.
    MainOn { on: bool },
    ChannelName { channel: Channel, name: ChannelName },
    ChannelColor { channel: Channel, color: Color },
    ChannelIcon { channel: Channel, icon: Icon },
    ChannelFader { channel: Channel, level: FaderLevel },
    MainFader { level: FaderLevel },
}

impl ConsoleCommand {
    // ── Constructors ──────────────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns [`ValidationError::ChannelOutOfRange`] if `channel` is not in `1..=32`.
    pub fn mute_channel(channel: u8) -> Result<Self, ValidationError> {
        Ok(ConsoleCommand::ChannelOn {
            channel: Channel::new(channel)?,
            on: false,
        })
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::ChannelOutOfRange`] if `channel` is not in `1..=32`.
    pub fn unmute_channel(channel: u8) -> Result<Self, ValidationError> {
        Ok(ConsoleCommand::ChannelOn {
            channel: Channel::new(channel)?,
            on: true,
        })
    }

    pub fn mute_main() -> Self {
        ConsoleCommand::MainOn { on: false }
    }

    pub fn unmute_main() -> Self {
        ConsoleCommand::MainOn { on: true }
    }

    /// # Errors
    ///
    /// Returns [`ValidationError`] if the channel is out of range or the name
    /// is longer than 12 bytes.  The channel is checked first.
    pub fn name_channel(channel: u8, name: impl Into<String>) -> Result<Self, ValidationError> {
        let channel = Channel::new(channel)?;
        let name = ChannelName::new(name)?;
        Ok(ConsoleCommand::ChannelName { channel, name })
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::ChannelOutOfRange`] if `channel` is not in `1..=32`.
    pub fn channel_color(channel: u8, color: Color) -> Result<Self, ValidationError> {
        Ok(ConsoleCommand::ChannelColor {
            channel: Channel::new(channel)?,
            color,
        })
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::ChannelOutOfRange`] if `channel` is not in `1..=32`.
    pub fn channel_icon(channel: u8, icon: Icon) -> Result<Self, ValidationError> {
        Ok(ConsoleCommand::ChannelIcon {
            channel: Channel::new(channel)?,
            icon,
        })
    }

    /// Sets a channel fader to `db` decibels, clamped to -90..=+10 dB.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ChannelOutOfRange`] if `channel` is not in `1..=32`.
    pub fn channel_fader_db(channel: u8, db: f64) -> Result<Self, ValidationError> {
        Ok(ConsoleCommand::ChannelFader {
            channel: Channel::new(channel)?,
            level: FaderLevel::from_db(db),
        })
    }

    /// Sets the main stereo fader to `db` decibels, clamped to -90..=+10 dB.
    pub fn main_fader_db(db: f64) -> Self {
        ConsoleCommand::MainFader {
            level: FaderLevel::from_db(db),
        }
    }

    // ── Wire representation ───────────────────────────────────────────────────

    /// Returns the OSC address pattern this command targets.
    pub fn address(&self) -> String {
        match self {
            ConsoleCommand::ChannelOn { channel, .. } => format!("/ch/{channel}/mix/on"),
            ConsoleCommand::MainOn { .. } => MAIN_ON_ADDRESS.to_string(),
            ConsoleCommand::ChannelName { channel, .. } => format!("/ch/{channel}/config/name"),
            ConsoleCommand::ChannelColor { channel, .. } => format!("/ch/{channel}/config/color"),
            ConsoleCommand::ChannelIcon { channel, .. } => format!("/ch/{channel}/config/icon"),
            ConsoleCommand::ChannelFader { channel, .. } => format!("/ch/{channel}/mix/fader"),
            ConsoleCommand::MainFader { .. } => MAIN_FADER_ADDRESS.to_string(),
        }
    }

    /// Returns the single argument carried by this command.
    pub fn argument(&self) -> Argument {
        match self {
            ConsoleCommand::ChannelOn { on, .. } | ConsoleCommand::MainOn { on } => {
                Argument::Int32(i32::from(*on))
            }
            ConsoleCommand::ChannelName { name, .. } => Argument::String(name.to_string()),
            ConsoleCommand::ChannelColor { color, .. } => Argument::Int32(color.code()),
            ConsoleCommand::ChannelIcon { icon, .. } => Argument::Int32(icon.code()),
            ConsoleCommand::ChannelFader { level, .. } | ConsoleCommand::MainFader { level } => {
                Argument::Float32(level.value())
            }
        }
    }

    /// Builds the OSC message for this command.
    pub fn to_message(&self) -> Message {
        Message::from_args(self.address(), vec![self.argument()])
    }

    /// Encodes this command into its wire representation.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] only if a channel name contains a NUL byte;
    /// every other field is already valid by construction.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        self.to_message().encode()
    }
}
