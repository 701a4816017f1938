//! Binary encoder for OSC messages sent to the X32.
//!
//! Wire format:
//! ```text
//! [address][NUL][pad] [','][type tags][NUL][pad] [arg 0][arg 1]...
//! ```
//! The address block, the type-tag block, every string argument, and therefore
//! the whole message are multiples of 4 bytes.  Padding is NUL bytes.
//! Integers and floats are 4 bytes big-endian and need no padding.
//!
//! Encoding is all-or-nothing: every input is checked before the first byte is
//! written, so an error never leaves a partial message behind.

use thiserror::Error;

use crate::protocol::argument::{type_tag_for, Argument, TypeCode};

/// OSC block alignment in bytes.
const ALIGNMENT: usize = 4;

/// Errors that can occur while encoding a message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// The type tag names an argument type the encoder cannot produce.
    #[error("unsupported argument type code {code:?}")]
    UnsupportedArgumentType { code: char },

    /// The type tag and the argument list disagree in length or in type.
    #[error("type tag {type_tag:?} does not match the {arg_count} supplied argument(s)")]
    TypeTagMismatch { type_tag: String, arg_count: usize },

    /// The address pattern is empty, not ASCII, or does not start with `/`.
    #[error("invalid address pattern {0:?}: must be non-empty ASCII starting with '/'")]
    InvalidAddress(String),

    /// A NUL byte inside a string would terminate the field early on the console.
    #[error("{field} contains an interior NUL byte")]
    InteriorNul { field: &'static str },
}

/// An owned OSC message: address pattern, type tag and arguments.
///
/// The type tag is stored without its leading comma.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    address: String,
    type_tag: String,
    args: Vec<Argument>,
}

impl Message {
    /// Creates a message with an explicit type tag.
    pub fn new(
        address: impl Into<String>,
        type_tag: impl Into<String>,
        args: Vec<Argument>,
    ) -> Self {
        Self {
            address: address.into(),
            type_tag: type_tag.into(),
            args,
        }
    }

    /// Creates a message whose type tag is derived from `args`.
    pub fn from_args(address: impl Into<String>, args: Vec<Argument>) -> Self {
        let type_tag = type_tag_for(&args);
        Self::new(address, type_tag, args)
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    pub fn args(&self) -> &[Argument] {
        &self.args
    }

    /// Encodes this message into its wire representation.
    ///
    /// # Errors
    ///
    /// See [`encode_message`].
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        encode_message(&self.address, &self.type_tag, &self.args)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Encodes an OSC message into a byte vector whose length is a multiple of 4.
///
/// `type_tag` is given without the leading comma and may be empty.  When both
/// `type_tag` and `args` are non-empty they must agree one-to-one.  A type tag
/// with no arguments is accepted; the console uses that form for queries.
///
/// # Errors
///
/// Returns [`EncodeError`] if the address is malformed, the type tag contains
/// a code other than `i`, `f` or `s`, the tag and arguments disagree, or a
/// string contains a NUL byte.
///
/// # Examples
///
/// ```rust
/// use x32_core::encode_message;
///
/// let bytes = encode_message("/info", "", &[]).unwrap();
/// assert_eq!(bytes, b"/info\0\0\0,\0\0\0");
/// ```
pub fn encode_message(
    address: &str,
    type_tag: &str,
    args: &[Argument],
) -> Result<Vec<u8>, EncodeError> {
    validate_address(address)?;
    let codes = parse_type_tag(type_tag)?;
    check_arguments(type_tag, &codes, args)?;

    let mut buf = Vec::with_capacity(encoded_len(address, type_tag, args));

    write_padded(&mut buf, address.as_bytes());

    buf.push(b',');
    write_padded(&mut buf, type_tag.as_bytes());

    for arg in args {
        encode_argument(&mut buf, arg);
    }

    debug_assert_eq!(buf.len() % ALIGNMENT, 0);
    Ok(buf)
}

/// Number of NUL bytes needed to bring `len` up to a multiple of 4.
///
/// Returns 0 when `len` is already aligned.
pub fn pad_len(len: usize) -> usize {
    (ALIGNMENT - len % ALIGNMENT) % ALIGNMENT
}

// ── Validation ────────────────────────────────────────────────────────────────

fn validate_address(address: &str) -> Result<(), EncodeError> {
    if address.contains('\0') {
        return Err(EncodeError::InteriorNul { field: "address" });
    }
    if address.is_empty() || !address.is_ascii() || !address.starts_with('/') {
        return Err(EncodeError::InvalidAddress(address.to_string()));
    }
    Ok(())
}

fn parse_type_tag(type_tag: &str) -> Result<Vec<TypeCode>, EncodeError> {
    type_tag
        .chars()
        .map(|c| TypeCode::from_char(c).ok_or(EncodeError::UnsupportedArgumentType { code: c }))
        .collect()
}

fn check_arguments(
    type_tag: &str,
    codes: &[TypeCode],
    args: &[Argument],
) -> Result<(), EncodeError> {
    if !codes.is_empty() && !args.is_empty() {
        let matches = codes.len() == args.len()
            && codes.iter().zip(args).all(|(code, arg)| *code == arg.type_code());
        if !matches {
            return Err(EncodeError::TypeTagMismatch {
                type_tag: type_tag.to_string(),
                arg_count: args.len(),
            });
        }
    }

    for arg in args {
        if let Argument::String(s) = arg {
            if s.as_bytes().contains(&0) {
                return Err(EncodeError::InteriorNul {
                    field: "string argument",
                });
            }
        }
    }
    Ok(())
}

// ── Encoding helpers ──────────────────────────────────────────────────────────

/// Appends `bytes`, a NUL terminator, and padding up to the next 4-byte boundary.
///
/// `buf` must already be aligned when this is called.
fn write_padded(buf: &mut Vec<u8>, bytes: &[u8]) {
    buf.extend_from_slice(bytes);
    buf.push(0);
    let pad = pad_len(buf.len());
    buf.resize(buf.len() + pad, 0);
}

fn encode_argument(buf: &mut Vec<u8>, arg: &Argument) {
    match arg {
        Argument::Int32(i) => buf.extend_from_slice(&i.to_be_bytes()),
        Argument::Float32(f) => buf.extend_from_slice(&f.to_be_bytes()),
        // The X32 only understands single precision.
        Argument::Float64(d) => buf.extend_from_slice(&(*d as f32).to_be_bytes()),
        Argument::String(s) => write_padded(buf, s.as_bytes()),
    }
}

/// Length of a NUL-terminated, padded block holding `len` content bytes.
fn padded_block_len(len: usize) -> usize {
    let terminated = len + 1;
    terminated + pad_len(terminated)
}

fn encoded_len(address: &str, type_tag: &str, args: &[Argument]) -> usize {
    let args_len: usize = args
        .iter()
        .map(|arg| match arg {
            Argument::String(s) => padded_block_len(s.len()),
            _ => 4,
        })
        .sum();
    padded_block_len(address.len()) + padded_block_len(1 + type_tag.len()) + args_len
}

// ── Tests ─────────────────────────────────────────────────────────────────────
