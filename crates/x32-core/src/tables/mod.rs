//! Static tables of console codes for channel icons and colors.
//!
//! The X32 identifies scribble-strip icons and colors by small integers.  The
//! enums here are closed: every variant maps to exactly one console code and
//! no code outside the tables can be constructed.

pub mod color;
pub mod icon;

pub use color::Color;
pub use icon::Icon;
