//! # Pitches and Intervals
//!
//! Letter names, accidentals, pitches with an implicit octave, and the
//! interval arithmetic used to spell chord tones.
//!
//! ## Spelling
//! Transposition always moves the letter name first and then picks whatever
//! alteration makes the result land on the requested number of semitones.
//! That is why a minor third above C♭ is spelled `E--` (E double-flat) rather
//! than `D`: a third is always three letters up.
//!
//! ## Two kinds of transposition
//! - [`Pitch::transpose_semitones`] takes a signed semitone count and spells it
//!   with the default interval for that size (6 semitones is a diminished 5th,
//!   8 is a minor 6th, ...).
//! - [`Pitch::transpose_generic`] takes a generic (letter-counting) interval and
//!   lands on the major-scale degree of the starting pitch, so the 9th above D
//!   is E and the 7th above D is C#.

use serde::{Serialize, Serializer};
use std::fmt;

/// Semitones above the tonic for each degree of the major scale
const MAJOR_SCALE: [i8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Letter steps used to spell each semitone count inside one octave
/// 0=P1, 1=m2, 2=M2, 3=m3, 4=M3, 5=P4, 6=d5, 7=P5, 8=m6, 9=M6, 10=m7, 11=M7
const DEFAULT_STEPS: [i8; 12] = [0, 1, 1, 2, 2, 3, 4, 4, 5, 5, 6, 6];

/// Octave given to pitches built from a bare letter name (middle C = C4)
pub const DEFAULT_OCTAVE: i8 = 4;

/// Note names A through G
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Letter {
    #[default]
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Position in the C-based letter cycle (C = 0, B = 6)
    pub fn index(self) -> i8 {
        match self {
            Letter::C => 0,
            Letter::D => 1,
            Letter::E => 2,
            Letter::F => 3,
            Letter::G => 4,
            Letter::A => 5,
            Letter::B => 6,
        }
    }

    /// Semitones above C of the natural note
    pub fn natural_semitone(self) -> i8 {
        MAJOR_SCALE[self.index() as usize]
    }

    fn from_index(index: i8) -> Self {
        Self::ALL[index.rem_euclid(7) as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
            Letter::F => "F",
            Letter::G => "G",
            Letter::A => "A",
            Letter::B => "B",
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accidentals a user can pick for a root or an alteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accidental {
    #[default]
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    /// Form used inside pitch names: `""`, `"#"`, `"-"`
    pub fn compact_form(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "-",
        }
    }

    /// Form used for the root in a printed chord name: `""`, `"#"`, `"♭"`
    pub fn display_form(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "♭",
        }
    }

    /// Glyph shown inside an alteration suffix, e.g. the `♭` in `(♭5)`
    pub fn symbol(self) -> char {
        match self {
            Accidental::Natural => '♮',
            Accidental::Sharp => '#',
            Accidental::Flat => '♭',
        }
    }

    pub fn semitones(self) -> i8 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }

    fn from_semitones(alter: i8) -> Option<Self> {
        match alter {
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            -1 => Some(Accidental::Flat),
            _ => None,
        }
    }
}

/// An interval: how many letters to move and how many semitones to cover
///
/// `steps` is zero-based (a third is 2 steps); the conventional interval
/// number is `steps + 1` for ascending intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub steps: i8,
    pub semitones: i8,
}

impl Interval {
    /// Ascending interval from its number (1 = unison, 3 = third, ...)
    pub const fn new(number: u8, semitones: i8) -> Self {
        let steps = if number == 0 { 0 } else { number as i8 - 1 };
        Self { steps, semitones }
    }

    /// Generic interval as found in the major scale of the lower note
    ///
    /// Numbers above 7 wrap into higher octaves: a 9th is a major 2nd plus
    /// an octave, a 13th a major 6th plus an octave.
    pub fn generic(number: u8) -> Self {
        let steps = number.saturating_sub(1) as i8;
        let semitones = MAJOR_SCALE[(steps % 7) as usize] + 12 * (steps / 7);
        Self { steps, semitones }
    }

    /// Default spelling for a signed semitone count
    pub fn from_semitones(semitones: i8) -> Self {
        let octaves = semitones.div_euclid(12);
        let within = semitones.rem_euclid(12);
        Self {
            steps: DEFAULT_STEPS[within as usize] + 7 * octaves,
            semitones,
        }
    }

    /// Conventional interval number (ascending intervals only)
    pub fn number(&self) -> i8 {
        self.steps + 1
    }
}

/// A spelled pitch: letter, signed alteration and octave
///
/// The alteration is a semitone count so double sharps and double flats can
/// be spelled; pitches made from user input only ever carry -1, 0 or +1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pitch {
    pub letter: Letter,
    pub alter: i8,
    pub octave: i8,
}

impl Default for Pitch {
    fn default() -> Self {
        Self::new(Letter::C, Accidental::Natural)
    }
}

impl Pitch {
    /// Pitch in the default octave
    pub fn new(letter: Letter, accidental: Accidental) -> Self {
        Self {
            letter,
            alter: accidental.semitones(),
            octave: DEFAULT_OCTAVE,
        }
    }

    /// Semitones above C-1 (the same numbering as MIDI, without clamping)
    pub fn absolute_semitone(&self) -> i16 {
        (self.octave as i16 + 1) * 12 + self.letter.natural_semitone() as i16 + self.alter as i16
    }

    /// Returns MIDI note number (C4 = 60, middle C), clamped to 0-127
    pub fn midi_number(&self) -> u8 {
        self.absolute_semitone().clamp(0, 127) as u8
    }

    /// Accidental of this pitch, if it is a single sharp, flat or natural
    pub fn accidental(&self) -> Option<Accidental> {
        Accidental::from_semitones(self.alter)
    }

    /// Copy of this pitch with its accidental replaced (not added to)
    pub fn with_accidental(&self, accidental: Accidental) -> Self {
        Self {
            alter: accidental.semitones(),
            ..*self
        }
    }

    /// Transpose by an interval, moving the letter first and then fixing the
    /// alteration so the result is exactly `interval.semitones` away.
    pub fn transpose(&self, interval: Interval) -> Self {
        let position = self.octave as i16 * 7 + self.letter.index() as i16 + interval.steps as i16;
        let octave = position.div_euclid(7) as i8;
        let letter = Letter::from_index(position.rem_euclid(7) as i8);

        let target = self.absolute_semitone() + interval.semitones as i16;
        let natural = (octave as i16 + 1) * 12 + letter.natural_semitone() as i16;

        Self {
            letter,
            alter: (target - natural) as i8,
            octave,
        }
    }

    /// Transpose by a signed number of semitones using the default spelling
    pub fn transpose_semitones(&self, semitones: i8) -> Self {
        self.transpose(Interval::from_semitones(semitones))
    }

    /// Transpose by a generic interval within this pitch's major scale
    pub fn transpose_generic(&self, number: u8) -> Self {
        self.transpose(Interval::generic(number))
    }

    /// Letter plus compact accidental, no octave (`"B-"`, `"F#"`, `"E--"`)
    pub fn name(&self) -> String {
        let mark = match self.accidental() {
            Some(accidental) => accidental.compact_form().to_string(),
            None if self.alter > 0 => "#".repeat(self.alter as usize),
            None => "-".repeat(self.alter.unsigned_abs() as usize),
        };
        format!("{}{}", self.letter, mark)
    }

    pub fn name_with_octave(&self) -> String {
        format!("{}{}", self.name(), self.octave)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl Serialize for Pitch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
