//! Scribble-strip colors.
//!
//! The console has eight base colors (0–7).  Adding 8 selects the inverted
//! form, where the text is drawn in the color on a dark background.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A channel color on the console's scribble strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(i32)]
pub enum Color {
    Off = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    OffInverted = 8,
    RedInverted = 9,
    GreenInverted = 10,
    YellowInverted = 11,
    BlueInverted = 12,
    MagentaInverted = 13,
    CyanInverted = 14,
    WhiteInverted = 15,
}

impl Color {
    /// Every color in ascending code order.
    pub const ALL: [Color; 16] = [
        Color::Off,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::OffInverted,
        Color::RedInverted,
        Color::GreenInverted,
        Color::YellowInverted,
        Color::BlueInverted,
        Color::MagentaInverted,
        Color::CyanInverted,
        Color::WhiteInverted,
    ];

    /// Returns the console code sent in `/ch/NN/config/color`.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Kebab-case name, identical to the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            Color::Off => "off",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::OffInverted => "off-inverted",
            Color::RedInverted => "red-inverted",
            Color::GreenInverted => "green-inverted",
            Color::YellowInverted => "yellow-inverted",
            Color::BlueInverted => "blue-inverted",
            Color::MagentaInverted => "magenta-inverted",
            Color::CyanInverted => "cyan-inverted",
            Color::WhiteInverted => "white-inverted",
        }
    }
}

impl TryFrom<i32> for Color {
    type Error = ();

    fn try_from(value: i32) -> Result<Self, ()> {
        usize::try_from(value)
            .ok()
            .and_then(|i| Color::ALL.get(i).copied())
            .ok_or(())
    }
}

/// Error returned when a color name is not in the table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color {0:?}")]
pub struct UnknownColor(pub String);

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Color::ALL
            .iter()
            .copied()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_indexed_by_code() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.code(), i as i32);
        }
    }

    #[test]
    fn test_inverted_colors_are_base_plus_eight() {
        assert_eq!(Color::RedInverted.code(), Color::Red.code() + 8);
        assert_eq!(Color::WhiteInverted.code(), Color::White.code() + 8);
    }

    #[test]
    fn test_try_from_rejects_out_of_table_codes() {
        assert_eq!(Color::try_from(16), Err(()));
        assert_eq!(Color::try_from(-1), Err(()));
        assert_eq!(Color::try_from(4), Ok(Color::Blue));
    }

    #[test]
    fn test_from_str_accepts_names_case_insensitively() {
        assert_eq!("cyan".parse::<Color>(), Ok(Color::Cyan));
        assert_eq!("Red-Inverted".parse::<Color>(), Ok(Color::RedInverted));
    }

    #[test]
    fn test_from_str_rejects_unknown_names() {
        assert_eq!(
            "purple".parse::<Color>(),
            Err(UnknownColor("purple".to_string()))
        );
    }

    #[test]
    fn test_display_matches_from_str() {
        for color in Color::ALL {
            assert_eq!(color.to_string().parse::<Color>(), Ok(color));
        }
    }
}
