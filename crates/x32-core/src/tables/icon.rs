//! Scribble-strip icons.
//!
//! Codes follow the console's icon list.  Only the icons with a known code are
//! listed; the gaps (47–52, 54–61, 63–73) are left out rather than guessed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A channel icon shown on the console's scribble strip.
///
/// The numeric value of each variant is the console's icon code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(i32)]
pub enum Icon {
    EmptyIcon = 1,
    BassKickDrum = 2,
    BassDrum = 3,
    SticksAboveSnareDrum = 4,
    SnareDrumAboveSticks = 5,
    HighTomDrum = 6,
    MediumTomDrum = 7,
    FloorTomDrum = 8,
    HighHatCymbal = 9,
    Cymbal = 10,
    DrumSet = 11,
    Lights = 12,
    Bongos = 13,
    Bongos2 = 14,
    Tambourine = 15,
    Xylophone = 16,
    Guitar1 = 17,
    Guitar2 = 18,
    Guitar3 = 19,
    Guitar4 = 20,
    Guitar5 = 21,
    Guitar6 = 22,
    Guitar7 = 23,
    Speaker1 = 24,
    Speaker2 = 25,
    Speaker3 = 26,
    GrandPiano = 27,
    UprightPiano = 28,
    Keyboard1 = 29,
    Keyboard2 = 30,
    Keyboard3 = 31,
    Keyboard4 = 32,
    Keyboard5 = 33,
    Keyboard6 = 34,
    Trumpet = 35,
    Trombone = 36,
    Saxophone = 37,
    Clarinet = 38,
    Violin = 39,
    Cello = 40,
    MaleSinger = 41,
    FemaleSinger = 42,
    Singers = 43,
    RockOn = 44,
    TalkerA = 45,
    TalkerB = 46,
    InEarMic = 53,
    Laptop = 62,
    SmileyFace = 74,
}

impl Icon {
    /// Every icon in ascending code order.
    pub const ALL: [Icon; 49] = [
        Icon::EmptyIcon,
        Icon::BassKickDrum,
        Icon::BassDrum,
        Icon::SticksAboveSnareDrum,
        Icon::SnareDrumAboveSticks,
        Icon::HighTomDrum,
        Icon::MediumTomDrum,
        Icon::FloorTomDrum,
        Icon::HighHatCymbal,
        Icon::Cymbal,
        Icon::DrumSet,
        Icon::Lights,
        Icon::Bongos,
        Icon::Bongos2,
        Icon::Tambourine,
        Icon::Xylophone,
        Icon::Guitar1,
        Icon::Guitar2,
        Icon::Guitar3,
        Icon::Guitar4,
        Icon::Guitar5,
        Icon::Guitar6,
        Icon::Guitar7,
        Icon::Speaker1,
        Icon::Speaker2,
        Icon::Speaker3,
        Icon::GrandPiano,
        Icon::UprightPiano,
        Icon::Keyboard1,
        Icon::Keyboard2,
        Icon::Keyboard3,
        Icon::Keyboard4,
        Icon::Keyboard5,
        Icon::Keyboard6,
        Icon::Trumpet,
        Icon::Trombone,
        Icon::Saxophone,
        Icon::Clarinet,
        Icon::Violin,
        Icon::Cello,
        Icon::MaleSinger,
        Icon::FemaleSinger,
        Icon::Singers,
        Icon::RockOn,
        Icon::TalkerA,
        Icon::TalkerB,
        Icon::InEarMic,
        Icon::Laptop,
        Icon::SmileyFace,
    ];

    /// Returns the console code sent in `/ch/NN/config/icon`.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Returns a short human-readable description of the icon.
    pub fn description(self) -> &'static str {
        match self {
            Icon::EmptyIcon => "empty",
            Icon::BassKickDrum => "bass kick drum",
            Icon::BassDrum => "bass drum",
            Icon::SticksAboveSnareDrum => "sticks above snare drum",
            Icon::SnareDrumAboveSticks => "snare drum above sticks",
            Icon::HighTomDrum => "high tom drum",
            Icon::MediumTomDrum => "medium tom drum",
            Icon::FloorTomDrum => "floor tom drum",
            Icon::HighHatCymbal => "high hat cymbals",
            Icon::Cymbal => "cymbals",
            Icon::DrumSet => "full drum set",
            Icon::Lights => "lights",
            Icon::Bongos => "bongos",
            Icon::Bongos2 => "bongos 2",
            Icon::Tambourine => "tambourine",
            Icon::Xylophone => "xylophone",
            Icon::Guitar1 => "guitar 1",
            Icon::Guitar2 => "guitar 2",
            Icon::Guitar3 => "guitar 3",
            Icon::Guitar4 => "guitar 4",
            Icon::Guitar5 => "guitar 5",
            Icon::Guitar6 => "guitar 6",
            Icon::Guitar7 => "guitar 7",
            Icon::Speaker1 => "speakers 1",
            Icon::Speaker2 => "speakers 2",
            Icon::Speaker3 => "speakers 3",
            Icon::GrandPiano => "grand piano",
            Icon::UprightPiano => "upright piano",
            Icon::Keyboard1 => "keyboard 1",
            Icon::Keyboard2 => "keyboard 2",
            Icon::Keyboard3 => "keyboard 3",
            Icon::Keyboard4 => "keyboard 4",
            Icon::Keyboard5 => "keyboard 5",
            Icon::Keyboard6 => "keyboard 6",
            Icon::Trumpet => "trumpet",
            Icon::Trombone => "trombone",
            Icon::Saxophone => "saxophone",
            Icon::Clarinet => "clarinet",
            Icon::Violin => "violin",
            Icon::Cello => "cello",
            Icon::MaleSinger => "male singer",
            Icon::FemaleSinger => "female singer",
            Icon::Singers => "trio of singers",
            Icon::RockOn => "rock on hand gesture",
            Icon::TalkerA => "A talker",
            Icon::TalkerB => "B talker",
            Icon::InEarMic => "in-ear microphone",
            Icon::Laptop => "laptop",
            Icon::SmileyFace => "smiley face",
        }
    }
}

impl TryFrom<i32> for Icon {
    type Error = ();

    fn try_from(value: i32) -> Result<Self, ()> {
        Icon::ALL
            .iter()
            .copied()
            .find(|icon| icon.code() == value)
            .ok_or(())
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
