//! Network infrastructure for the remote.
//!
//! - **`udp_sink`** – A [`std::io::Write`] adapter over a connected UDP
//!   socket.  The mixer writes each OSC message in one call, so each message
//!   leaves as exactly one datagram.

pub mod udp_sink;

pub use udp_sink::UdpSink;
