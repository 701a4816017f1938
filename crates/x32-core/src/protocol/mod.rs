//! OSC protocol module containing argument types and the binary encoder.

pub mod argument;
pub mod codec;

pub use argument::{Argument, TypeCode};
pub use codec::{encode_message, pad_len, EncodeError, Message};

/// UDP port the X32 listens on for OSC messages.
pub const X32_OSC_PORT: u16 = 10023;
