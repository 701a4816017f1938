//! X32 Remote — entry point.
//!
//! Sends one command to a Behringer X32 console over OSC/UDP and exits.
//!
//! # Usage
//!
//! ```text
//! x32-remote [OPTIONS] <COMMAND>
//!
//! Commands:
//!   mute         Mute a channel, or the main bus when no channel is given
//!   unmute       Unmute a channel, or the main bus when no channel is given
//!   name         Set a channel's scribble-strip name (12 bytes max)
//!   color        Set a channel's scribble-strip color
//!   icon         Set a channel's scribble-strip icon by console code
//!   fader        Move a channel fader, or the main fader, to a dB value
//!   apply        Send every [[channels]] preset from the config file
//!   init-config  Write the effective configuration to the config file
//!
//! Options:
//!   --config <PATH>  Config file [default: platform config dir]
//!   --host <HOST>    Console hostname or IP (overrides the config file)
//!   --port <PORT>    Console OSC port (overrides the config file)
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable     | Description                         |
//! |--------------|-------------------------------------|
//! | `X32_CONFIG` | Config file path                    |
//! | `X32_HOST`   | Console hostname or IP              |
//! | `X32_PORT`   | Console OSC port                    |
//! | `RUST_LOG`   | Log filter, wins over the config    |

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use x32_core::{Color, Icon, Mixer};
use x32_remote::application::{run_action, RemoteAction};
use x32_remote::infrastructure::network::UdpSink;
use x32_remote::infrastructure::storage::config::{
    config_file_path, load_config_from, save_config_to, RemoteConfig,
};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Remote control for Behringer X32 consoles.
#[derive(Debug, Parser)]
#[command(name = "x32-remote", about = "Remote control for Behringer X32 consoles", version)]
struct Cli {
    /// Path of the TOML config file.
    #[arg(long, env = "X32_CONFIG")]
    config: Option<PathBuf>,

    /// Hostname or IP address of the console.
    #[arg(long, env = "X32_HOST")]
    host: Option<String>,

    /// OSC port of the console.
    #[arg(long, env = "X32_PORT")]
    port: Option<u16>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Mute a channel (1-32), or the main stereo bus when omitted.
    Mute { channel: Option<u8> },
    /// Unmute a channel (1-32), or the main stereo bus when omitted.
    Unmute { channel: Option<u8> },
    /// Set a channel's scribble-strip name.
    Name { channel: u8, name: String },
    /// Set a channel's color, e.g. `red` or `blue-inverted`.
    Color { channel: u8, color: Color },
    /// Set a channel's icon by console code (1-46, 53, 62, 74).
    Icon { channel: u8, code: i32 },
    /// Move a fader to `db` decibels (-90 to +10).
    Fader {
        /// Channel 1-32; the main stereo fader when omitted.
        #[arg(long, short)]
        channel: Option<u8>,
        #[arg(allow_negative_numbers = true)]
        db: f64,
    },
    /// Send every channel preset from the config file.
    Apply,
    /// Write the effective configuration to the config file.
    InitConfig,
}

impl Command {
    /// Converts the subcommand into a [`RemoteAction`].
    ///
    /// Returns `Ok(None)` for commands that do not talk to the console.
    ///
    /// # Errors
    ///
    /// Returns an error if an icon code is not in the console's table.
    fn into_action(self) -> anyhow::Result<Option<RemoteAction>> {
        let action = match self {
            Command::Mute { channel } => RemoteAction::Mute { channel },
            Command::Unmute { channel } => RemoteAction::Unmute { channel },
            Command::Name { channel, name } => RemoteAction::Name { channel, name },
            Command::Color { channel, color } => RemoteAction::Color { channel, color },
            Command::Icon { channel, code } => {
                let icon =
                    Icon::try_from(code).map_err(|()| anyhow!("unknown icon code {code}"))?;
                RemoteAction::Icon { channel, icon }
            }
            Command::Fader { channel, db } => RemoteAction::Fader { channel, db },
            Command::Apply => RemoteAction::ApplyPresets,
            Command::InitConfig => return Ok(None),
        };
        Ok(Some(action))
    }
}

impl Cli {
    /// Resolves the config file path: `--config` first, then the platform default.
    fn config_path(&self) -> anyhow::Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => config_file_path().context("no --config given"),
        }
    }

    /// Applies `--host` / `--port` on top of the values read from disk.
    fn apply_overrides(&self, config: &mut RemoteConfig) {
        if let Some(host) = &self.host {
            config.console.host = host.clone();
        }
        if let Some(port) = self.port {
            config.console.port = port;
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config_path()?;
    let mut config = load_config_from(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;
    cli.apply_overrides(&mut config);

    // ── Logging setup ─────────────────────────────────────────────────────────
    //
    // `RUST_LOG` wins; otherwise the config's `[logging] level` applies.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&config.logging.level))
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let Some(action) = cli.command.into_action()? else {
        save_config_to(&config_path, &config)
            .with_context(|| format!("writing config to {}", config_path.display()))?;
        info!("wrote config to {}", config_path.display());
        return Ok(());
    };

    let console = (config.console.host.as_str(), config.console.port);
    let sink = UdpSink::connect(&config.console.bind_address, console).with_context(|| {
        format!(
            "connecting to console at {}:{}",
            config.console.host, config.console.port
        )
    })?;
    info!("sending to console at {}", sink.peer_addr());

    let mut mixer = Mixer::new(sink);
    let written = run_action(&mut mixer, &action, &config.channels)
        .with_context(|| format!("{action:?} failed"))?;

    info!(bytes = written, "done");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
