//! RunActionUseCase: turns one user request into console messages.
//!
//! The entry point is [`run_action`].  Every action except
//! [`RemoteAction::ApplyPresets`] maps to exactly one message.  Applying
//! presets sends the name, color and icon of each preset in file order and
//! stops at the first failure; messages already sent stay sent.

use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use x32_core::{Color, Icon, Mixer, MixerError};

/// Stored scribble-strip settings for one input channel.
///
/// Fields left as `None` are not sent, so a preset can change only the color
/// of a channel and keep whatever name the console already shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelPreset {
    pub channel: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

/// A single request from the user.
///
/// `channel: None` targets the main stereo bus.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteAction {
    Mute { channel: Option<u8> },
    Unmute { channel: Option<u8> },
    Name { channel: u8, name: String },
    Color { channel: u8, color: Color },
    Icon { channel: u8, icon: Icon },
    /// Fader move in decibels, clamped to the console's -90..=+10 dB range.
    Fader { channel: Option<u8>, db: f64 },
    /// Sends every configured [`ChannelPreset`].
    ApplyPresets,
}

/// Executes `action` against `mixer` and returns the total bytes written.
///
/// `presets` is only read by [`RemoteAction::ApplyPresets`].
///
/// # Errors
///
/// Returns the first [`MixerError`] raised by the mixer.
pub fn run_action<W: Write>(
    mixer: &mut Mixer<W>,
    action: &RemoteAction,
    presets: &[ChannelPreset],
) -> Result<usize, MixerError> {
    debug!(?action, "running action");
    match action {
        RemoteAction::Mute { channel: Some(ch) } => mixer.mute_channel(*ch),
        RemoteAction::Mute { channel: None } => mixer.mute_main(),
        RemoteAction::Unmute { channel: Some(ch) } => mixer.unmute_channel(*ch),
        RemoteAction::Unmute { channel: None } => mixer.unmute_main(),
        RemoteAction::Name { channel, name } => mixer.name_channel(*channel, name),
        RemoteAction::Color { channel, color } => mixer.set_channel_color(*channel, *color),
        RemoteAction::Icon { channel, icon } => mixer.set_channel_icon(*channel, *icon),
        RemoteAction::Fader { channel: Some(ch), db } => mixer.set_channel_fader(*ch, *db),
        RemoteAction::Fader { channel: None, db } => mixer.set_main_fader(*db),
        RemoteAction::ApplyPresets => apply_presets(mixer, presets),
    }
}

fn apply_presets<W: Write>(
    mixer: &mut Mixer<W>,
    presets: &[ChannelPreset],
) -> Result<usize, MixerError> {
    let mut total = 0;
    for preset in presets {
        if let Some(name) = &preset.name {
            total += mixer.name_channel(preset.channel, name)?;
        }
        if let Some(color) = preset.color {
            total += mixer.set_channel_color(preset.channel, color)?;
        }
        if let Some(icon) = preset.icon {
            total += mixer.set_channel_icon(preset.channel, icon)?;
        }
    }
    info!(presets = presets.len(), bytes = total, "applied channel presets");
    Ok(total)
}
