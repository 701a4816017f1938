//! Application layer use cases for the remote.
//!
//! Use cases here drive an [`x32_core::Mixer`] over whatever sink they are
//! handed.  They never open sockets or touch the file system, so tests run
//! them against a `Vec<u8>`.
//!
//! # Sub-modules
//!
//! - **`run_action`** – Dispatches one [`RemoteAction`] (mute, name, fader,
//!   apply presets, ...) to the mixer and reports how many bytes were sent.

pub mod run_action;

pub use run_action::{run_action, ChannelPreset, RemoteAction};
