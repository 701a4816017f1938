//! Integration tests for the x32-core public API.
//!
//! These tests drive the `Mixer` with an in-memory sink and compare the bytes
//! written against the console's OSC wire format.

use x32_core::{
    db_to_normalized, encode_message, normalized_to_db, Argument, Color, ConsoleCommand, Icon,
    Mixer, MixerError, ValidationError,
};

/// Runs `op` against a fresh mixer and returns the result plus the bytes written.
fn capture<F>(op: F) -> (Result<usize, MixerError>, Vec<u8>)
where
    F: FnOnce(&mut Mixer<Vec<u8>>) -> Result<usize, MixerError>,
{
    let mut mixer = Mixer::new(Vec::new());
    let result = op(&mut mixer);
    (result, mixer.into_inner())
}

#[test]
fn test_mute_channel_table() {
    let cases: [(u8, Option<&[u8]>); 5] = [
        (0, None),
        (1, Some(b"/ch/01/mix/on\0\0\0,i\0\0\0\0\0\0")),
        (2, Some(b"/ch/02/mix/on\0\0\0,i\0\0\0\0\0\0")),
        (32, Some(b"/ch/32/mix/on\0\0\0,i\0\0\0\0\0\0")),
        (33, None),
    ];

    for (channel, want) in cases {
        let (result, bytes) = capture(|m| m.mute_channel(channel));
        match want {
            Some(want) => {
                assert_eq!(result.unwrap(), want.len(), "ch{channel:02}");
                assert_eq!(bytes, want, "ch{channel:02}");
            }
            None => {
                assert!(
                    matches!(
                        result,
                        Err(MixerError::Validation(ValidationError::ChannelOutOfRange { .. }))
                    ),
                    "ch{channel:02} must be rejected"
                );
                assert!(bytes.is_empty(), "ch{channel:02} must not write");
            }
        }
    }
}

#[test]
fn test_unmute_channel_table() {
    let cases: [(u8, Option<&[u8]>); 5] = [
        (0, None),
        (1, Some(b"/ch/01/mix/on\0\0\0,i\0\0\0\0\0\x01")),
        (2, Some(b"/ch/02/mix/on\0\0\0,i\0\0\0\0\0\x01")),
        (32, Some(b"/ch/32/mix/on\0\0\0,i\0\0\0\0\0\x01")),
        (33, None),
    ];

    for (channel, want) in cases {
        let (result, bytes) = capture(|m| m.unmute_channel(channel));
        match want {
            Some(want) => assert_eq!(bytes, want, "ch{channel:02}"),
            None => {
                assert!(result.is_err());
                assert!(bytes.is_empty());
            }
        }
    }
}

#[test]
fn test_mute_and_unmute_main() {
    let (_, muted) = capture(|m| m.mute_main());
    assert_eq!(muted, b"/main/st/mix/on\0,i\0\0\0\0\0\0");

    let (_, unmuted) = capture(|m| m.unmute_main());
    assert_eq!(unmuted, b"/main/st/mix/on\0,i\0\0\0\0\0\x01");
}

#[test]
fn test_name_channel_writes_padded_string() {
    let (result, bytes) = capture(|m| m.name_channel(1, "foo"));

    assert!(result.is_ok());
    assert_eq!(bytes, b"/ch/01/config/name\0\0,s\0\0foo\0");
}

#[test]
fn test_name_channel_too_long_writes_nothing() {
    let (result, bytes) = capture(|m| m.name_channel(1, "badTooLongName"));

    assert!(matches!(
        result,
        Err(MixerError::Validation(ValidationError::NameTooLong { len: 14, .. }))
    ));
    assert!(bytes.is_empty());
}

#[test]
fn test_icon_and_color_codes_on_the_wire() {
    let (_, bytes) = capture(|m| m.set_channel_icon(5, Icon::SmileyFace));
    assert_eq!(bytes, b"/ch/05/config/icon\0\0,i\0\0\0\0\0\x4a");

    let (_, bytes) = capture(|m| m.set_channel_color(5, Color::Off));
    assert_eq!(bytes, b"/ch/05/config/color\0,i\0\0\0\0\0\0");
}

#[test]
fn test_channel_setters_reject_out_of_range_channels() {
    type Op = fn(&mut Mixer<Vec<u8>>, u8) -> Result<usize, MixerError>;
    let ops: [(&str, Op); 3] = [
        ("color", |m, ch| m.set_channel_color(ch, Color::Cyan)),
        ("icon", |m, ch| m.set_channel_icon(ch, Icon::SmileyFace)),
        ("fader", |m, ch| m.set_channel_fader(ch, -20.0)),
    ];

    for (name, op) in ops {
        for channel in [0u8, 33] {
            let (result, bytes) = capture(|m| op(m, channel));
            assert!(
                matches!(
                    result,
                    Err(MixerError::Validation(ValidationError::ChannelOutOfRange { channel: c }))
                        if c == channel
                ),
                "{name} on ch{channel:02} must be rejected"
            );
            assert!(bytes.is_empty(), "{name} on ch{channel:02} must not write");
        }
    }
}

#[test]
fn test_channel_fader_at_unity_gain() {
    let (_, bytes) = capture(|m| m.set_channel_fader(10, 0.0));

    let mut want = b"/ch/10/mix/fader\0\0\0\0,f\0\0".to_vec();
    want.extend_from_slice(&0.75f32.to_be_bytes());
    assert_eq!(bytes, want);
}

#[test]
fn test_send_raw_info_query() {
    let (result, bytes) = capture(|m| m.send_message("/info", "", &[]));

    assert_eq!(result.unwrap(), 12);
    assert_eq!(
        bytes,
        [0x2f, 0x69, 0x6e, 0x66, 0x6f, 0x00, 0x00, 0x00, 0x2c, 0x00, 0x00, 0x00]
    );
}

#[test]
fn test_consecutive_sends_append_whole_messages() {
    let mut mixer = Mixer::new(Vec::new());
    let commands = [
        ConsoleCommand::name_channel(1, "Kick").unwrap(),
        ConsoleCommand::channel_color(1, Color::Red).unwrap(),
        ConsoleCommand::channel_icon(1, Icon::BassKickDrum).unwrap(),
        ConsoleCommand::unmute_channel(1).unwrap(),
    ];

    let total: usize = commands.iter().map(|c| mixer.send(c).unwrap()).sum();

    let bytes = mixer.into_inner();
    assert_eq!(bytes.len(), total);
    assert_eq!(bytes.len() % 4, 0);
}

#[test]
fn test_encoding_same_message_twice_is_identical() {
    let args = [Argument::Int32(-7), Argument::from("vox"), Argument::Float64(0.3)];
    let first = encode_message("/ch/03/config/name", "isf", &args).unwrap();
    let second = encode_message("/ch/03/config/name", "isf", &args).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_fader_law_breakpoints_through_public_api() {
    for (db, level) in [(-60.0, 0.0625), (-30.0, 0.25), (-10.0, 0.5), (0.0, 0.75), (10.0, 1.0)] {
        assert_eq!(db_to_normalized(db), level);
        assert_eq!(normalized_to_db(level), db);
    }
    assert_eq!(db_to_normalized(-200.0), 0.0);
    assert_eq!(db_to_normalized(200.0), 1.0);
}
