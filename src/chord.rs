//! # Chord Builder
//!
//! Turns a [`ChordSpec`] into a [`Chord`]: an ordered list of spelled tones.
//!
//! ## Construction Order
//! ```text
//! root → 3rd (or sus2/sus4) → 5th → 7th → 9th → 11th → 13th → added tone
//! ```
//! Tones are kept in this order, not sorted by pitch. Each tone remembers the
//! chord degree whose slot it fills, and alterations look tones up by that
//! degree. Stacked extensions and the added tone are always appended, so a
//! dominant chord sized 7th or above carries both its flat 7th and the
//! stacked major 7th; an alteration of the 7th targets the first of them.
//!
//! ## Example
//! ```rust
//! use chord_maker::{build, ChordSpec, Extension, Letter, Accidental, Pitch, Quality};
//!
//! let spec = ChordSpec {
//!     extension: Extension::Ninth,
//!     ..ChordSpec::new(Pitch::new(Letter::C, Accidental::Natural), Quality::Dominant)
//! };
//! let chord = build(spec)?;
//! assert_eq!(chord.pitch_names(), "C, E, G, B-, B, D");
//! # Ok::<(), chord_maker::ChordError>(())
//! ```

use log::debug;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::ChordError;
use crate::pitch::{Accidental, Pitch};

/// Chord quality: decides the third, the fifth and (for dominant) the seventh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Quality {
    #[default]
    Major,
    Minor,
    Dominant,
    Diminished,
    Augmented,
}

/// (quality, third, fifth, seventh) in semitones above the root,
/// in the order of `Quality`'s variants
const QUALITY_SEMITONES: [(Quality, i8, i8, Option<i8>); 5] = [
    (Quality::Major, 4, 7, None),
    (Quality::Minor, 3, 7, None),
    (Quality::Dominant, 4, 7, Some(10)),
    (Quality::Diminished, 3, 6, None),
    (Quality::Augmented, 4, 8, None),
];

impl Quality {
    pub const ALL: [Quality; 5] = [
        Quality::Major,
        Quality::Minor,
        Quality::Dominant,
        Quality::Diminished,
        Quality::Augmented,
    ];

    /// Third, fifth and optional seventh above the root, in semitones
    pub fn semitones(self) -> (i8, i8, Option<i8>) {
        let (_, third, fifth, seventh) = QUALITY_SEMITONES[self as usize];
        (third, fifth, seventh)
    }
}

/// Replacement for the third
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Suspension {
    #[default]
    None,
    Sus2,
    Sus4,
}

impl Suspension {
    /// Semitones above the root of the tone that replaces the third, if any
    pub fn semitones(self) -> Option<i8> {
        match self {
            Suspension::None => None,
            Suspension::Sus2 => Some(2),
            Suspension::Sus4 => Some(5),
        }
    }

    /// 0 for no suspension, otherwise the suspended degree
    pub fn value(self) -> u8 {
        match self {
            Suspension::None => 0,
            Suspension::Sus2 => 2,
            Suspension::Sus4 => 4,
        }
    }
}

/// Odd chord degrees, the slots a chord tone can fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Degree {
    Root,
    Third,
    Fifth,
    Seventh,
    Ninth,
    Eleventh,
    Thirteenth,
}

impl Degree {
    pub const ALL: [Degree; 7] = [
        Degree::Root,
        Degree::Third,
        Degree::Fifth,
        Degree::Seventh,
        Degree::Ninth,
        Degree::Eleventh,
        Degree::Thirteenth,
    ];

    pub fn number(self) -> u8 {
        match self {
            Degree::Root => 1,
            Degree::Third => 3,
            Degree::Fifth => 5,
            Degree::Seventh => 7,
            Degree::Ninth => 9,
            Degree::Eleventh => 11,
            Degree::Thirteenth => 13,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|degree| degree.number() == number)
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degree::Root => write!(f, "root"),
            Degree::Third => write!(f, "3rd"),
            other => write!(f, "{}th", other.number()),
        }
    }
}

/// Highest degree stacked on top of the triad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Extension {
    #[default]
    Triad,
    Seventh,
    Ninth,
    Eleventh,
    Thirteenth,
}

impl Extension {
    pub const ALL: [Extension; 5] = [
        Extension::Triad,
        Extension::Seventh,
        Extension::Ninth,
        Extension::Eleventh,
        Extension::Thirteenth,
    ];

    /// Extension ceiling: 5 for a triad, otherwise the top degree number
    pub fn ceiling(self) -> u8 {
        match self {
            Extension::Triad => 5,
            Extension::Seventh => 7,
            Extension::Ninth => 9,
            Extension::Eleventh => 11,
            Extension::Thirteenth => 13,
        }
    }

    /// Degrees above the fifth up to and including the ceiling
    pub fn stacked_degrees(self) -> &'static [Degree] {
        match self {
            Extension::Triad => &[],
            Extension::Seventh => &[Degree::Seventh],
            Extension::Ninth => &[Degree::Seventh, Degree::Ninth],
            Extension::Eleventh => &[Degree::Seventh, Degree::Ninth, Degree::Eleventh],
            Extension::Thirteenth => &[
                Degree::Seventh,
                Degree::Ninth,
                Degree::Eleventh,
                Degree::Thirteenth,
            ],
        }
    }
}

/// Degrees that can be added without stacking the ones below them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddedDegree {
    Ninth,
    Eleventh,
    Thirteenth,
}

impl AddedDegree {
    pub const ALL: [AddedDegree; 3] = [
        AddedDegree::Ninth,
        AddedDegree::Eleventh,
        AddedDegree::Thirteenth,
    ];

    pub fn degree(self) -> Degree {
        match self {
            AddedDegree::Ninth => Degree::Ninth,
            AddedDegree::Eleventh => Degree::Eleventh,
            AddedDegree::Thirteenth => Degree::Thirteenth,
        }
    }
}

/// Overwrite the accidental of one chord tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alteration {
    pub degree: Degree,
    pub accidental: Accidental,
}

/// Everything the builder needs, decided once per request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChordSpec {
    pub root: Pitch,
    pub quality: Quality,
    pub suspension: Suspension,
    pub extension: Extension,
    pub alteration: Option<Alteration>,
    pub add: Option<AddedDegree>,
}

impl ChordSpec {
    /// Plain triad (or dominant seventh) on `root`
    pub fn new(root: Pitch, quality: Quality) -> Self {
        Self {
            root,
            quality,
            ..Self::default()
        }
    }
}

/// One chord tone and the degree slot it fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    pub degree: Degree,
    pub pitch: Pitch,
}

/// Chord tones in construction order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Chord {
    tones: Vec<Tone>,
}

impl Chord {
    fn push(&mut self, degree: Degree, pitch: Pitch) {
        self.tones.push(Tone { degree, pitch });
    }

    pub fn tones(&self) -> &[Tone] {
        &self.tones
    }

    pub fn pitches(&self) -> impl Iterator<Item = Pitch> + '_ {
        self.tones.iter().map(|tone| tone.pitch)
    }

    pub fn len(&self) -> usize {
        self.tones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tones.is_empty()
    }

    /// Construction-order index of the first tone filling `degree`
    pub fn index_of(&self, degree: Degree) -> Option<usize> {
        self.tones.iter().position(|tone| tone.degree == degree)
    }

    pub fn tone(&self, degree: Degree) -> Option<&Tone> {
        self.index_of(degree).map(|index| &self.tones[index])
    }

    /// Pitch names joined with ", " (`"C, E, G, B-"`)
    pub fn pitch_names(&self) -> String {
        self.pitches()
            .map(|pitch| pitch.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// MIDI note numbers in construction order
    pub fn midi_notes(&self) -> Vec<u8> {
        self.pitches().map(|pitch| pitch.midi_number()).collect()
    }
}

impl Serialize for Chord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.pitches())
    }
}

/// Build the chord described by `spec`.
///
/// # Errors
/// Returns [`ChordError::InvalidChordSpec`] when the alteration targets a
/// degree the chord does not contain (e.g. the 9th of a triad).
pub fn build(spec: ChordSpec) -> Result<Chord, ChordError> {
    let root = spec.root;
    let mut chord = Chord::default();
    chord.push(Degree::Root, root);

    // Quality tones are plain semitone transpositions of the root
    let (third, fifth, seventh) = spec.quality.semitones();
    chord.push(Degree::Third, root.transpose_semitones(third));
    chord.push(Degree::Fifth, root.transpose_semitones(fifth));
    if let Some(seventh) = seventh {
        chord.push(Degree::Seventh, root.transpose_semitones(seventh));
    }

    // Suspensions take over the third's slot
    if let Some(semitones) = spec.suspension.semitones() {
        chord.tones[1].pitch = root.transpose_semitones(semitones);
    }

    for &degree in spec.extension.stacked_degrees() {
        chord.push(degree, root.transpose_generic(degree.number()));
    }

    if let Some(add) = spec.add {
        let degree = add.degree();
        chord.push(degree, root.transpose_generic(degree.number()));
    }

    if let Some(alteration) = spec.alteration {
        let index = chord.index_of(alteration.degree).ok_or_else(|| {
            ChordError::InvalidChordSpec {
                degree: alteration.degree.number(),
                message: format!(
                    "chord has no {} (tones: {})",
                    alteration.degree,
                    chord.pitch_names()
                ),
            }
        })?;
        let tone = &mut chord.tones[index];
        tone.pitch = tone.pitch.with_accidental(alteration.accidental);
    }

    debug!("built {:?} on {}: {}", spec.quality, root, chord.pitch_names());
    Ok(chord)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::Letter;
    use pretty_assertions::assert_eq;

    fn c() -> Pitch {
        Pitch::new(Letter::C, Accidental::Natural)
    }

    fn offsets(chord: &Chord, root: Pitch) -> Vec<i16> {
        chord
            .pitches()
            .map(|pitch| pitch.absolute_semitone() - root.absolute_semitone())
            .collect()
    }

    fn alter(degree: Degree, accidental: Accidental) -> Option<Alteration> {
        Some(Alteration { degree, accidental })
    }

    #[test]
    fn test_triad_offsets_for_every_root_and_quality() {
        for letter in Letter::ALL {
            for accidental in [Accidental::Natural, Accidental::Sharp, Accidental::Flat] {
                let root = Pitch::new(letter, accidental);
                for quality in Quality::ALL {
                    let chord = build(ChordSpec::new(root, quality)).unwrap();
                    let expected = match quality {
                        Quality::Dominant => vec![0, 4, 7, 10],
                        Quality::Major => vec![0, 4, 7],
                        Quality::Minor => vec![0, 3, 7],
                        Quality::Diminished => vec![0, 3, 6],
                        Quality::Augmented => vec![0, 4, 8],
                    };
                    assert_eq!(offsets(&chord, root), expected, "{:?} on {}", quality, root);
                }
            }
        }
    }

    #[test]
    fn test_quality_tones_use_semitone_spelling() {
        let aug = build(ChordSpec::new(c(), Quality::Augmented)).unwrap();
        assert_eq!(aug.pitch_names(), "C, E, A-");
        assert_eq!(aug.tones()[2].pitch, c().transpose_semitones(8));

        let dim = build(ChordSpec::new(c(), Quality::Diminished)).unwrap();
        assert_eq!(dim.pitch_names(), "C, E-, G-");

        let b = Pitch::new(Letter::B, Accidental::Natural);
        let b_minor = build(ChordSpec::new(b, Quality::Minor)).unwrap();
        assert_eq!(b_minor.pitch_names(), "B, D, F#");
    }

    #[test]
    fn test_dominant_always_has_flat_seventh() {
        let chord = build(ChordSpec::new(c(), Quality::Dominant)).unwrap();
        assert_eq!(chord.len(), 4);
        assert_eq!(chord.pitch_names(), "C, E, G, B-");
        let seventh = chord.tone(Degree::Seventh).map(|t| t.pitch.name());
        assert_eq!(seventh, Some("B-".to_string()));
    }

    #[test]
    fn test_dominant_extensions_stack_their_own_seventh() {
        let seventh = build(ChordSpec {
            extension: Extension::Seventh,
            ..ChordSpec::new(c(), Quality::Dominant)
        })
        .unwrap();
        assert_eq!(seventh.pitch_names(), "C, E, G, B-, B");

        let ninth = build(ChordSpec {
            extension: Extension::Ninth,
            ..ChordSpec::new(c(), Quality::Dominant)
        })
        .unwrap();
        assert_eq!(ninth.len(), 6);
        assert_eq!(ninth.pitch_names(), "C, E, G, B-, B, D");

        let thirteenth = build(ChordSpec {
            extension: Extension::Thirteenth,
            ..ChordSpec::new(c(), Quality::Dominant)
        })
        .unwrap();
        assert_eq!(thirteenth.pitch_names(), "C, E, G, B-, B, D, F, A");
    }

    #[test]
    fn test_altering_seventh_targets_first_seventh() {
        let chord = build(ChordSpec {
            extension: Extension::Seventh,
            alteration: alter(Degree::Seventh, Accidental::Natural),
            ..ChordSpec::new(c(), Quality::Dominant)
        })
        .unwrap();
        assert_eq!(chord.index_of(Degree::Seventh), Some(3));
        assert_eq!(chord.pitch_names(), "C, E, G, B, B");
    }

    #[test]
    fn test_suspensions_replace_only_the_second_tone() {
        let sus2 = build(ChordSpec {
            suspension: Suspension::Sus2,
            ..ChordSpec::new(c(), Quality::Dominant)
        })
        .unwrap();
        assert_eq!(offsets(&sus2, c()), vec![0, 2, 7, 10]);
        assert_eq!(sus2.pitch_names(), "C, D, G, B-");

        let sus4 = build(ChordSpec {
            suspension: Suspension::Sus4,
            ..ChordSpec::new(c(), Quality::Minor)
        })
        .unwrap();
        assert_eq!(offsets(&sus4, c()), vec![0, 5, 7]);
        assert_eq!(sus4.pitch_names(), "C, F, G");
    }

    #[test]
    fn test_extension_monotonicity() {
        for quality in Quality::ALL {
            let mut previous: Option<Chord> = None;
            for extension in Extension::ALL {
                let chord = build(ChordSpec {
                    extension,
                    ..ChordSpec::new(c(), quality)
                })
                .unwrap();
                if let Some(previous) = previous {
                    assert_eq!(chord.len(), previous.len() + 1);
                    assert_eq!(&chord.tones()[..previous.len()], previous.tones());
                }
                previous = Some(chord);
            }
        }
    }

    #[test]
    fn test_extensions_follow_major_scale_of_root() {
        let d = Pitch::new(Letter::D, Accidental::Natural);
        let d_major_13 = build(ChordSpec {
            extension: Extension::Thirteenth,
            ..ChordSpec::new(d, Quality::Major)
        })
        .unwrap();
        assert_eq!(d_major_13.pitch_names(), "D, F#, A, C#, E, G, B");
        assert_eq!(offsets(&d_major_13, d), vec![0, 4, 7, 11, 14, 17, 21]);
    }

    #[test]
    fn test_add_is_independent_of_extension() {
        let add9 = build(ChordSpec {
            add: Some(AddedDegree::Ninth),
            ..ChordSpec::new(c(), Quality::Major)
        })
        .unwrap();
        assert_eq!(add9.pitch_names(), "C, E, G, D");
        assert_eq!(add9.index_of(Degree::Seventh), None);
    }

    #[test]
    fn test_add_is_appended_even_when_degree_is_stacked() {
        let chord = build(ChordSpec {
            extension: Extension::Ninth,
            add: Some(AddedDegree::Ninth),
            ..ChordSpec::new(c(), Quality::Major)
        })
        .unwrap();
        assert_eq!(chord.len(), 6);
        assert_eq!(chord.pitch_names(), "C, E, G, B, D, D");
    }

    #[test]
    fn test_alteration_overwrites_accidental() {
        let flat_five = build(ChordSpec {
            alteration: alter(Degree::Fifth, Accidental::Flat),
            ..ChordSpec::new(c(), Quality::Major)
        })
        .unwrap();
        assert_eq!(flat_five.pitch_names(), "C, E, G-");

        let sharp_nine = build(ChordSpec {
            extension: Extension::Ninth,
            alteration: alter(Degree::Ninth, Accidental::Sharp),
            ..ChordSpec::new(c(), Quality::Dominant)
        })
        .unwrap();
        assert_eq!(sharp_nine.pitch_names(), "C, E, G, B-, B, D#");
    }

    #[test]
    fn test_alteration_of_added_tone() {
        let chord = build(ChordSpec {
            add: Some(AddedDegree::Eleventh),
            alteration: alter(Degree::Eleventh, Accidental::Sharp),
            ..ChordSpec::new(c(), Quality::Major)
        })
        .unwrap();
        assert_eq!(chord.pitch_names(), "C, E, G, F#");
    }

    #[test]
    fn test_alteration_of_missing_degree_is_rejected() {
        let result = build(ChordSpec {
            alteration: alter(Degree::Ninth, Accidental::Flat),
            ..ChordSpec::new(c(), Quality::Major)
        });
        match result {
            Err(ChordError::InvalidChordSpec { degree, message }) => {
                assert_eq!(degree, 9);
                assert!(message.contains("9th"));
                assert!(message.contains("C, E, G"));
            }
            other => panic!("expected InvalidChordSpec, got {:?}", other),
        }
    }

    #[test]
    fn test_root_is_not_modified() {
        let root = c();
        let spec = ChordSpec {
            alteration: alter(Degree::Root, Accidental::Sharp),
            ..ChordSpec::new(root, Quality::Major)
        };
        let chord = build(spec).unwrap();
        assert_eq!(chord.pitch_names(), "C#, E, G");
        assert_eq!(spec.root, root);
        assert_eq!(root.name(), "C");
    }

    #[test]
    fn test_quality_table_matches_variant_order() {
        for (index, (quality, ..)) in QUALITY_SEMITONES.iter().enumerate() {
            assert_eq!(*quality as usize, index);
        }
    }

    #[test]
    fn test_midi_notes() {
        let chord = build(ChordSpec::new(c(), Quality::Dominant)).unwrap();
        assert_eq!(chord.midi_notes(), vec![60, 64, 67, 70]);
    }

    #[test]
    fn test_degree_numbers() {
        assert_eq!(Degree::from_number(11), Some(Degree::Eleventh));
        assert_eq!(Degree::from_number(2), None);
        assert_eq!(Degree::Ninth.to_string(), "9th");
        assert_eq!(Degree::Third.to_string(), "3rd");
        assert_eq!(
            Extension::Eleventh.stacked_degrees(),
            &[Degree::Seventh, Degree::Ninth, Degree::Eleventh]
        );
    }
}
