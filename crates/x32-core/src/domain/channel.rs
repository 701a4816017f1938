//! Input channel numbers and scribble-strip names.
//!
//! Both types can only be obtained through their fallible constructors, so a
//! value that exists is a value the console will accept.

use std::fmt;

use thiserror::Error;

/// First input channel on the console.
pub const MIN_CHANNEL: u8 = 1;

/// Last input channel on the console.
pub const MAX_CHANNEL: u8 = 32;

/// Longest name the scribble strip can hold, in bytes.
pub const MAX_NAME_LEN: usize = 12;

/// Errors raised when a console command is rejected before encoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The channel number is outside `1..=32`.
    #[error("channel {channel} out of range 1-32")]
    ChannelOutOfRange { channel: u8 },

    /// The channel name exceeds the scribble-strip limit.
    #[error("channel name {name:?} too long ({len} bytes, 12 max)")]
    NameTooLong { name: String, len: usize },
}

/// An input channel number in `1..=32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Channel(u8);

impl Channel {
    /// Validates `channel` against the console's input range.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ChannelOutOfRange`] outside `1..=32`.
    pub fn new(channel: u8) -> Result<Self, ValidationError> {
        if (MIN_CHANNEL..=MAX_CHANNEL).contains(&channel) {
            Ok(Self(channel))
        } else {
            Err(ValidationError::ChannelOutOfRange { channel })
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Iterates over every input channel in order.
    pub fn all() -> impl Iterator<Item = Channel> {
        (MIN_CHANNEL..=MAX_CHANNEL).map(Channel)
    }
}

impl TryFrom<u8> for Channel {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Channel::new(value)
    }
}

/// Renders as the two-digit form used in address patterns (`01`..`32`).
impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// A scribble-strip name of at most 12 bytes.  The empty name clears the strip.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelName(String);

impl ChannelName {
    /// # Errors
    ///
    /// Returns [`ValidationError::NameTooLong`] if `name` is longer than 12 bytes.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.len() > MAX_NAME_LEN {
            let len = name.len();
            return Err(ValidationError::NameTooLong { name, len });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
