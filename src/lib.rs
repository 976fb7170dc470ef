pub mod chord;
pub mod error;
pub mod namer;
pub mod pitch;
pub mod selection;

pub use chord::{
    build, AddedDegree, Alteration, Chord, ChordSpec, Degree, Extension, Quality, Suspension, Tone,
};
pub use error::*;
pub use namer::{chord_symbol, name_chord, ChordForm, NamedChord};
pub use pitch::{Accidental, Interval, Letter, Pitch};
pub use selection::{load_selections, parse_optional, RawSelections};

/// Name and build a chord straight from the form's labels
/// (`"C"`, `"Flat(♭)"`, `"Minor"`, `"sus2"`, `"7th"`, `"None"`, ...).
///
/// # Example
/// ```rust
/// let named = chord_maker::name_chord_from_labels(
///     "C", "Natural(♮)", "Dominant", "No sus", "Triad", "None", "Natural(♮)", "None",
/// )?;
/// assert_eq!(named.symbol, "C");
/// assert_eq!(named.pitch_names(), "C, E, G, B-");
/// # Ok::<(), chord_maker::ChordError>(())
/// ```
#[allow(clippy::too_many_arguments)]
pub fn name_chord_from_labels(
    root: &str,
    root_accidental: &str,
    quality: &str,
    sus: &str,
    size: &str,
    alter: &str,
    alter_accidental: &str,
    add: &str,
) -> Result<NamedChord, ChordError> {
    let form = form_from_labels(
        root,
        root_accidental,
        quality,
        sus,
        size,
        alter,
        alter_accidental,
        add,
    )?;
    name_chord(&form)
}

/// Parse the form's labels into a [`ChordForm`]
#[allow(clippy::too_many_arguments)]
pub fn form_from_labels(
    root: &str,
    root_accidental: &str,
    quality: &str,
    sus: &str,
    size: &str,
    alter: &str,
    alter_accidental: &str,
    add: &str,
) -> Result<ChordForm, ChordError> {
    Ok(ChordForm {
        root: root.parse()?,
        root_accidental: root_accidental.parse()?,
        quality: quality.parse()?,
        sus: sus.parse()?,
        size: size.parse()?,
        alter: parse_optional(alter)?,
        alter_accidental: alter_accidental.parse()?,
        add: parse_optional(add)?,
    })
}
