//! The X32 fader law.
//!
//! The console stores every fader position as a normalized value in
//! `0.0..=1.0`.  Its display shows decibels from -90 dB (bottom, effectively
//! -∞) to +10 dB.  The mapping between the two is piecewise linear with four
//! segments, each steeper towards the bottom of the fader travel:
//!
//! | dB range       | normalized range  | dB per unit |
//! |----------------|-------------------|-------------|
//! | -90 .. -60     | 0.0    .. 0.0625  | 480         |
//! | -60 .. -30     | 0.0625 .. 0.25    | 160         |
//! | -30 .. -10     | 0.25   .. 0.5     | 80          |
//! | -10 .. +10     | 0.5    .. 1.0     | 40          |
//!
//! Both conversions clamp out-of-range input to the nearest end of the scale.
//! They are exact inverses inside a segment; a value sitting on a segment
//! boundary may not round-trip bit-for-bit.

/// Lowest level shown by the console.
pub const MIN_DB: f64 = -90.0;

/// Highest level shown by the console.
pub const MAX_DB: f64 = 10.0;

/// Converts a level in decibels to the console's normalized fader value.
///
/// Input below -90 dB (and NaN) returns 0.0; input above +10 dB returns 1.0.
///
/// # Examples
///
/// ```rust
/// use x32_core::db_to_normalized;
///
/// assert_eq!(db_to_normalized(0.0), 0.75);
/// assert_eq!(db_to_normalized(-120.0), 0.0);
/// ```
pub fn db_to_normalized(db: f64) -> f64 {
    if db.is_nan() || db < MIN_DB {
        0.0
    } else if db < -60.0 {
        (db + 90.0) / 480.0
    } else if db < -30.0 {
        (db + 70.0) / 160.0
    } else if db < -10.0 {
        (db + 50.0) / 80.0
    } else if db <= MAX_DB {
        (db + 30.0) / 40.0
    } else {
        1.0
    }
}

/// Converts a normalized fader value to decibels.
///
/// Input above 1.0 returns +10 dB; input below 0.0 (and NaN) returns -90 dB.
pub fn normalized_to_db(level: f64) -> f64 {
    if level.is_nan() || level < 0.0 {
        MIN_DB
    } else if level > 1.0 {
        MAX_DB
    } else if level >= 0.5 {
        level * 40.0 - 30.0
    } else if level >= 0.25 {
        level * 80.0 - 50.0
    } else if level >= 0.0625 {
        level * 160.0 - 70.0
    } else {
        level * 480.0 - 90.0
    }
}

/// A fader position on the console's normalized `0.0..=1.0` scale.
///
/// Construction clamps, so a `FaderLevel` always holds a value the console
/// accepts.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FaderLevel(f32);

impl FaderLevel {
    /// Clamps `level` into `0.0..=1.0`.  NaN becomes 0.0.
    pub fn new(level: f64) -> Self {
        if level.is_nan() {
            Self(0.0)
        } else {
            Self(level.clamp(0.0, 1.0) as f32)
        }
    }

    /// Converts `db` through the fader law.
    pub fn from_db(db: f64) -> Self {
        Self::new(db_to_normalized(db))
    }

    pub fn value(self) -> f32 {
        self.0
    }
}
