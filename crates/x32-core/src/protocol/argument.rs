//! OSC argument values and their type-tag codes.
//!
//! The X32 understands three argument types on the wire:
//!
//! | Code | Meaning                                   | Size            |
//! |------|-------------------------------------------|-----------------|
//! | `i`  | 32-bit big-endian two's-complement integer | 4 bytes         |
//! | `f`  | 32-bit big-endian IEEE-754 float           | 4 bytes         |
//! | `s`  | NUL-terminated string, zero-padded         | multiple of 4   |
//!
//! [`Argument::Float64`] exists so callers can pass `f64` values directly, but
//! it has no wire type of its own: it is narrowed to `f32` and tagged `f`.

use std::fmt;

/// Type-tag code of a single OSC argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCode {
    Int32,
    Float32,
    String,
}

impl TypeCode {
    /// Returns the character written into the type-tag block.
    pub fn as_char(self) -> char {
        match self {
            TypeCode::Int32 => 'i',
            TypeCode::Float32 => 'f',
            TypeCode::String => 's',
        }
    }

    /// Looks up the code for a type-tag character.
    ///
    /// Returns `None` for every character the encoder cannot produce,
    /// including `d` (double), which the X32 does not accept.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'i' => Some(TypeCode::Int32),
            'f' => Some(TypeCode::Float32),
            's' => Some(TypeCode::String),
            _ => None,
        }
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single OSC argument.
///
/// The set of variants is closed: anything the type system accepts here can
/// be encoded.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Int32(i32),
    Float32(f32),
    /// Narrowed to `f32` on the wire.
    Float64(f64),
    String(String),
}

impl Argument {
    /// Returns the wire type code for this argument.
    pub fn type_code(&self) -> TypeCode {
        match self {
            Argument::Int32(_) => TypeCode::Int32,
            Argument::Float32(_) | Argument::Float64(_) => TypeCode::Float32,
            Argument::String(_) => TypeCode::String,
        }
    }
}

impl From<i32> for Argument {
    fn from(value: i32) -> Self {
        Argument::Int32(value)
    }
}

impl From<f32> for Argument {
    fn from(value: f32) -> Self {
        Argument::Float32(value)
    }
}

impl From<f64> for Argument {
    fn from(value: f64) -> Self {
        Argument::Float64(value)
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Argument::String(value.to_string())
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Argument::String(value)
    }
}

/// Builds the type-tag string (without the leading comma) for `args`.
pub fn type_tag_for(args: &[Argument]) -> String {
    args.iter().map(|a| a.type_code().as_char()).collect()
}
