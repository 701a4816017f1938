//! The `Mixer`: validated console operations written to an injected sink.
//!
//! The mixer owns any [`std::io::Write`] implementation: a UDP socket adapter
//! in production, a `Vec<u8>` or a mock in tests.  Every operation follows the
//! same three steps:
//!
//! 1. Validate the inputs into a [`ConsoleCommand`].  On failure the sink is
//!    never touched.
//! 2. Encode the command.  On failure nothing is written.
//! 3. Hand the complete message to the sink in exactly one `write` call and
//!    return the sink's result unchanged.
//!
//! The mixer performs no retries and no partial-write recovery.  A short write
//! is reported as the byte count the sink returned.
//!
//! # Sharing across threads
//!
//! All operations take `&mut self`.  To share one console connection between
//! threads wrap the mixer in a `Mutex`; one lock acquisition covers one whole
//! message.

use std::io::{self, Write};

use thiserror::Error;
use tracing::{debug, warn};

use crate::command::ConsoleCommand;
use crate::domain::channel::ValidationError;
use crate::protocol::argument::Argument;
use crate::protocol::codec::{encode_message, EncodeError};
use crate::tables::{Color, Icon};

/// Errors returned by [`Mixer`] operations.
#[derive(Debug, Error)]
pub enum MixerError {
    /// The inputs were rejected before encoding; nothing was written.
    #[error("invalid command: {0}")]
    Validation(#[from] ValidationError),

    /// The message could not be encoded; nothing was written.
    #[error("encoding failed: {0}")]
    Encode(#[from] EncodeError),

    /// The sink's own write error, passed through untouched.
    #[error("sink write failed: {0}")]
    Sink(#[from] io::Error),
}

/// Remote control for one X32 console, writing OSC messages to `W`.
#[derive(Debug)]
pub struct Mixer<W> {
    sink: W,
}

impl<W: Write> Mixer<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    // ── Console operations ────────────────────────────────────────────────────

    /// Mutes input channel `channel` (`1..=32`).
    ///
    /// Returns the byte count reported by the sink.
    ///
    /// # Errors
    ///
    /// [`MixerError::Validation`] if the channel is out of range (nothing is
    /// written), or [`MixerError::Sink`] if the write fails.
    pub fn mute_channel(&mut self, channel: u8) -> Result<usize, MixerError> {
        self.send_validated(ConsoleCommand::mute_channel(channel))
    }

    /// Unmutes input channel `channel` (`1..=32`).
    ///
    /// # Errors
    ///
    /// See [`Mixer::mute_channel`].
    pub fn unmute_channel(&mut self, channel: u8) -> Result<usize, MixerError> {
        self.send_validated(ConsoleCommand::unmute_channel(channel))
    }

    /// Mutes the main stereo bus.
    pub fn mute_main(&mut self) -> Result<usize, MixerError> {
        self.send(&ConsoleCommand::mute_main())
    }

    /// Unmutes the main stereo bus.
    pub fn unmute_main(&mut self) -> Result<usize, MixerError> {
        self.send(&ConsoleCommand::unmute_main())
    }

    /// Sets the scribble-strip name of `channel`.  Names are limited to 12 bytes.
    ///
    /// # Errors
    ///
    /// [`MixerError::Validation`] for a bad channel or an over-long name.
    pub fn name_channel(&mut self, channel: u8, name: &str) -> Result<usize, MixerError> {
        self.send_validated(ConsoleCommand::name_channel(channel, name))
    }

    pub fn set_channel_color(&mut self, channel: u8, color: Color) -> Result<usize, MixerError> {
        self.send_validated(ConsoleCommand::channel_color(channel, color))
    }

    pub fn set_channel_icon(&mut self, channel: u8, icon: Icon) -> Result<usize, MixerError> {
        self.send_validated(ConsoleCommand::channel_icon(channel, icon))
    }

    /// Moves the fader of `channel` to `db` decibels (clamped to -90..=+10).
    pub fn set_channel_fader(&mut self, channel: u8, db: f64) -> Result<usize, MixerError> {
        self.send_validated(ConsoleCommand::channel_fader_db(channel, db))
    }

    /// Moves the main stereo fader to `db` decibels (clamped to -90..=+10).
    pub fn set_main_fader(&mut self, db: f64) -> Result<usize, MixerError> {
        self.send(&ConsoleCommand::main_fader_db(db))
    }

    // ── Lower-level sends ─────────────────────────────────────────────────────

    /// Encodes and writes an already-validated command.
    ///
    /// # Errors
    ///
    /// [`MixerError::Encode`] or [`MixerError::Sink`].
    pub fn send(&mut self, command: &ConsoleCommand) -> Result<usize, MixerError> {
        let address = command.address();
        let bytes = command.encode()?;
        self.write_message(&address, &bytes)
    }

    /// Encodes and writes an arbitrary OSC message.
    ///
    /// Only the encoder's rules apply; no console-specific validation is done.
    ///
    /// # Errors
    ///
    /// [`MixerError::Encode`] or [`MixerError::Sink`].
    pub fn send_message(
        &mut self,
        address: &str,
        type_tag: &str,
        args: &[Argument],
    ) -> Result<usize, MixerError> {
        let bytes = encode_message(address, type_tag, args)?;
        self.write_message(address, &bytes)
    }

    fn send_validated(
        &mut self,
        command: Result<ConsoleCommand, ValidationError>,
    ) -> Result<usize, MixerError> {
        let command = command.map_err(|e| {
            warn!(error = %e, "console command rejected");
            e
        })?;
        self.send(&command)
    }

    fn write_message(&mut self, address: &str, bytes: &[u8]) -> Result<usize, MixerError> {
        match self.sink.write(bytes) {
            Ok(written) => {
                debug!(address, len = bytes.len(), written, "sent OSC message");
                Ok(written)
            }
            Err(e) => {
                warn!(address, error = %e, "sink write failed");
                Err(MixerError::Sink(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;
    use std::sync::{Arc, Mutex};
    use std::thread;

    mockall::mock! {
        pub Sink {}

        impl std::io::Write for Sink {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
            fn flush(&mut self) -> io::Result<()>;
        }
    }

    // ── Validation never touches the sink ─────────────────────────────────────

    #[test]
    fn test_out_of_range_channel_never_writes() {
        // Arrange
        let mut sink = MockSink::new();
        sink.expect_write().times(0);
        let mut mixer = Mixer::new(sink);

        // Act
        let low = mixer.mute_channel(0);
        let high = mixer.unmute_channel(33);

        // Assert
        assert!(matches!(
            low,
            Err(MixerError::Validation(ValidationError::ChannelOutOfRange { channel: 0 }))
        ));
        assert!(matches!(
            high,
            Err(MixerError::Validation(ValidationError::ChannelOutOfRange { channel: 33 }))
        ));
    }

    #[test]
    fn test_long_name_never_writes() {
        let mut sink = MockSink::new();
        sink.expect_write().times(0);
        let mut mixer = Mixer::new(sink);

        let result = mixer.name_channel(1, "badTooLongName");

        assert!(matches!(
            result,
            Err(MixerError::Validation(ValidationError::NameTooLong { .. }))
        ));
    }

    #[test]
    fn test_color_icon_and_fader_with_bad_channel_never_write() {
        // Arrange
        let mut sink = MockSink::new();
        sink.expect_write().times(0);
        let mut mixer = Mixer::new(sink);

        // Act
        let results = [
            (0, mixer.set_channel_color(0, Color::Red)),
            (33, mixer.set_channel_icon(33, Icon::Laptop)),
            (0, mixer.set_channel_fader(0, -10.0)),
            (33, mixer.set_channel_fader(33, 0.0)),
        ];

        // Assert
        for (channel, result) in results {
            match result {
                Err(MixerError::Validation(ValidationError::ChannelOutOfRange { channel: c })) => {
                    assert_eq!(c, channel)
                }
                other => panic!("expected channel {channel} to be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_encode_error_never_writes() {
        let mut sink = MockSink::new();
        sink.expect_write().times(0);
        let mut mixer = Mixer::new(sink);

        let result = mixer.send_message("/ch/01/mix/on", "d", &[Argument::Float64(1.0)]);

        assert!(matches!(
            result,
            Err(MixerError::Encode(EncodeError::UnsupportedArgumentType { code: 'd' }))
        ));
    }

    #[test]
    fn test_name_with_nul_byte_never_writes() {
        let mut sink = MockSink::new();
        sink.expect_write().times(0);
        let mut mixer = Mixer::new(sink);

        let result = mixer.name_channel(1, "a\0b");

        assert!(matches!(result, Err(MixerError::Encode(EncodeError::InteriorNul { .. }))));
    }

    // ── Sink results are passed through ───────────────────────────────────────

    #[test]
    fn test_whole_message_is_written_in_one_call() {
        // Arrange
        let mut sink = MockSink::new();
        sink.expect_write().times(1).returning(|buf| Ok(buf.len()));
        let mut mixer = Mixer::new(sink);

        // Act
        let written = mixer.mute_channel(1).unwrap();

        // Assert – "/ch/01/mix/on" (16) + ",i" (4) + int (4)
        assert_eq!(written, 24);
    }

    #[test]
    fn test_short_write_count_is_returned_verbatim() {
        let mut sink = MockSink::new();
        sink.expect_write().times(1).returning(|_| Ok(3));
        let mut mixer = Mixer::new(sink);

        assert_eq!(mixer.mute_main().unwrap(), 3);
    }

    #[test]
    fn test_sink_error_is_propagated_untranslated() {
        // Arrange
        let mut sink = MockSink::new();
        sink.expect_write()
            .times(1)
            .returning(|_| Err(io::Error::new(ErrorKind::ConnectionRefused, "console offline")));
        let mut mixer = Mixer::new(sink);

        // Act
        let result = mixer.unmute_main();

        // Assert
        match result {
            Err(MixerError::Sink(e)) => {
                assert_eq!(e.kind(), ErrorKind::ConnectionRefused);
                assert_eq!(e.to_string(), "console offline");
            }
            other => panic!("expected sink error, got {other:?}"),
        }
    }

    // ── Bytes on the wire ─────────────────────────────────────────────────────

    #[test]
    fn test_mute_channel_bytes_match_console_format() {
        let mut mixer = Mixer::new(Vec::new());

        mixer.mute_channel(2).unwrap();

        assert_eq!(
            mixer.get_ref().as_slice(),
            b"/ch/02/mix/on\0\0\0,i\0\0\0\0\0\0"
        );
    }

    #[test]
    fn test_unmute_main_bytes_match_console_format() {
        let mut mixer = Mixer::new(Vec::new());

        mixer.unmute_main().unwrap();

        assert_eq!(
            mixer.into_inner(),
            b"/main/st/mix/on\0,i\0\0\0\0\0\x01".to_vec()
        );
    }

    #[test]
    fn test_set_channel_color_writes_code() {
        let mut mixer = Mixer::new(Vec::new());

        mixer.set_channel_color(1, Color::Yellow).unwrap();

        let bytes = mixer.into_inner();
        assert!(bytes.starts_with(b"/ch/01/config/color\0,i\0\0"));
        assert_eq!(&bytes[bytes.len() - 4..], &3i32.to_be_bytes());
    }

    #[test]
    fn test_set_main_fader_writes_normalized_float() {
        let mut mixer = Mixer::new(Vec::new());

        mixer.set_main_fader(-10.0).unwrap();

        let bytes = mixer.into_inner();
        assert!(bytes.starts_with(b"/main/st/mix/fader\0\0,f\0\0"));
        assert_eq!(&bytes[bytes.len() - 4..], &0.5f32.to_be_bytes());
    }

    #[test]
    fn test_get_mut_allows_clearing_the_sink() {
        let mut mixer = Mixer::new(Vec::new());
        mixer.mute_main().unwrap();

        mixer.get_mut().clear();

        assert!(mixer.get_ref().is_empty());
    }

    // ── Concurrency ───────────────────────────────────────────────────────────

    #[test]
    fn test_mutex_guarded_mixer_keeps_messages_whole() {
        // Arrange
        let mixer = Arc::new(Mutex::new(Mixer::new(Vec::new())));

        // Act – each thread mutes a different channel
        let handles: Vec<_> = (1..=8u8)
            .map(|ch| {
                let m = Arc::clone(&mixer);
                thread::spawn(move || m.lock().unwrap().mute_channel(ch).unwrap())
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().expect("thread panicked"), 24);
        }

        // Assert – eight whole 24-byte messages, each starting with "/ch/"
        let bytes = Arc::try_unwrap(mixer).unwrap().into_inner().unwrap().into_inner();
        assert_eq!(bytes.len(), 8 * 24);
        for chunk in bytes.chunks(24) {
            assert!(chunk.starts_with(b"/ch/"));
        }
    }
}
