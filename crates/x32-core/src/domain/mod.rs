//! Console rules with no I/O dependencies.
//!
//! Everything here can be compiled and tested on any platform without a
//! console on the network: the valid channel range, the scribble-strip name
//! limit, and the fader law.

/// Channel numbers and scribble-strip names, validated at construction.
pub mod channel;

/// Conversion between decibels and the console's normalized fader scale.
pub mod level;
