//! # Chord Namer
//!
//! Formats the chord symbol for a set of form selections and hands the
//! pitch work to the builder.
//!
//! ## Symbol Layout
//! ```text
//! C♭ m 7 sus2 add13 (♭5)
//! │  │ │ │    │     └── alteration: (<accidental glyph><degree>)
//! │  │ │ │    └──────── added degree
//! │  │ │ └───────────── suspension
//! │  │ └─────────────── size (nothing for a triad)
//! │  └───────────────── quality (maj, m, "", +, dim)
//! └──────────────────── root letter + display accidental
//! ```

use log::debug;
use serde::Serialize;

use crate::chord::{
    build, AddedDegree, Alteration, Chord, ChordSpec, Degree, Extension, Quality, Suspension,
};
use crate::error::ChordError;
use crate::pitch::{Accidental, Letter, Pitch};

/// The form selections for one chord, as a user picks them
///
/// `Default` is the form's initial state: a C major triad with nothing added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChordForm {
    pub root: Letter,
    pub root_accidental: Accidental,
    pub quality: Quality,
    pub sus: Suspension,
    pub size: Extension,
    pub alter: Option<Degree>,
    pub alter_accidental: Accidental,
    pub add: Option<AddedDegree>,
}

impl ChordForm {
    /// Normalize the selections into the builder's parameters
    pub fn to_spec(&self) -> ChordSpec {
        ChordSpec {
            root: Pitch::new(self.root, self.root_accidental),
            quality: self.quality,
            suspension: self.sus,
            extension: self.size,
            alteration: self.alter.map(|degree| Alteration {
                degree,
                accidental: self.alter_accidental,
            }),
            add: self.add,
        }
    }
}

/// A chord symbol together with its tones
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedChord {
    pub symbol: String,
    #[serde(rename = "notes")]
    pub chord: Chord,
}

impl NamedChord {
    /// Pitch names joined with ", "
    pub fn pitch_names(&self) -> String {
        self.chord.pitch_names()
    }
}

fn quality_suffix(quality: Quality) -> &'static str {
    match quality {
        Quality::Major => "maj",
        Quality::Minor => "m",
        Quality::Dominant => "",
        Quality::Augmented => "+",
        Quality::Diminished => "dim",
    }
}

/// Chord symbol only; the chord itself is not built, so this never fails.
///
/// # Example
/// ```rust
/// use chord_maker::{
///     chord_symbol, Accidental, ChordForm, Degree, Extension, Letter, Quality, Suspension,
/// };
///
/// let form = ChordForm {
///     root: Letter::B,
///     root_accidental: Accidental::Flat,
///     quality: Quality::Major,
///     sus: Suspension::Sus2,
///     size: Extension::Seventh,
///     alter: Some(Degree::Fifth),
///     alter_accidental: Accidental::Sharp,
///     ..ChordForm::default()
/// };
/// assert_eq!(chord_symbol(&form), "B♭maj7sus2(#5)");
/// ```
pub fn chord_symbol(form: &ChordForm) -> String {
    let mut symbol = format!("{}{}", form.root, form.root_accidental.display_form());
    symbol.push_str(quality_suffix(form.quality));

    if form.size != Extension::Triad {
        symbol.push_str(&form.size.ceiling().to_string());
    }

    if form.sus != Suspension::None {
        symbol.push_str(&format!("sus{}", form.sus.value()));
    }

    if let Some(add) = form.add {
        symbol.push_str(&format!("add{}", add.degree().number()));
    }

    if let Some(degree) = form.alter {
        symbol.push_str(&format!("({}{})", form.alter_accidental.symbol(), degree.number()));
    }

    symbol
}

/// Name and build the chord for a set of form selections.
///
/// # Example
/// ```rust
/// use chord_maker::{name_chord, ChordForm, Quality};
///
/// let named = name_chord(&ChordForm { quality: Quality::Dominant, ..ChordForm::default() })?;
/// assert_eq!(named.symbol, "C");
/// assert_eq!(named.pitch_names(), "C, E, G, B-");
/// # Ok::<(), chord_maker::ChordError>(())
/// ```
///
/// # Errors
/// Returns [`ChordError::InvalidChordSpec`] if the selected alteration
/// targets a degree the chord does not contain.
pub fn name_chord(form: &ChordForm) -> Result<NamedChord, ChordError> {
    let symbol = chord_symbol(form);
    let chord = build(form.to_spec())?;
    debug!("{} -> {}", symbol, chord.pitch_names());
    Ok(NamedChord { symbol, chord })
}
