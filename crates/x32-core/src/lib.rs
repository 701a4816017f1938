//! # x32-core
//!
//! Shared library for remote control of the Behringer X32 digital mixer over
//! Open Sound Control (OSC).
//!
//! This crate has zero dependencies on sockets, OS APIs, or a runtime. It
//! produces bytes; where those bytes go is decided by whoever owns the sink.
//!
//! # Architecture overview
//!
//! The X32 listens for OSC messages on UDP port 10023.  Every message names a
//! console parameter with an *address pattern* (for example `/ch/01/mix/on`),
//! describes its arguments with a *type tag* (`,i`), and carries the argument
//! values in big-endian binary.  Every block is zero-padded to 4 bytes.
//!
//! - **`protocol`** – The OSC encoder: [`Argument`], [`Message`] and
//!   [`encode_message`].
//!
//! - **`domain`** – Console rules with no I/O: the valid channel range, the
//!   scribble-strip name limit, and the fader law that converts decibels to
//!   the console's normalized `0.0..=1.0` scale.
//!
//! - **`tables`** – Closed enumerations of the console's channel icons and
//!   colors together with their integer codes.
//!
//! - **`command`** – Validated [`ConsoleCommand`] values and the [`Mixer`],
//!   which encodes them and writes each message to an injected
//!   [`std::io::Write`] sink in a single call.

pub mod command;
pub mod domain;
pub mod protocol;
pub mod tables;

pub use command::mixer::{Mixer, MixerError};
pub use command::ConsoleCommand;
pub use domain::channel::{Channel, ChannelName, ValidationError};
pub use domain::level::{db_to_normalized, normalized_to_db, FaderLevel};
pub use protocol::argument::{Argument, TypeCode};
pub use protocol::codec::{encode_message, EncodeError, Message};
pub use tables::{color::Color, icon::Icon};
