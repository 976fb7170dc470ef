//! # Form Selections
//!
//! The chord form offers every choice as a label: `"Natural(♮)"`, `"No sus"`,
//! `"7th"`, `"None"`, `9`. This module maps those labels onto the closed
//! enums the builder works with, and reads whole sets of selections from YAML.
//!
//! ## YAML Selections
//! One mapping per chord; a list of mappings renders a history of chords in
//! order. Every field is optional and falls back to the form's initial value.
//!
//! ```yaml
//! - root: B
//!   root-accidental: Flat(♭)
//!   quality: Dominant
//!   size: 9th
//!   alter: 9
//!   alter-accidental: Sharp(#)
//! - root: D
//!   sus: sus4
//!   add: 9
//! ```

use serde::Deserialize;
use std::str::FromStr;

use crate::chord::{AddedDegree, Degree, Extension, Quality, Suspension};
use crate::error::ChordError;
use crate::namer::ChordForm;
use crate::pitch::{Accidental, Letter};

/// Label shown for an unset alteration or added degree
pub const NONE_LABEL: &str = "None";

fn unknown(field: &'static str, value: &str) -> ChordError {
    ChordError::UnknownSelection {
        field,
        value: value.to_string(),
    }
}

impl FromStr for Letter {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "C" => Ok(Letter::C),
            "D" => Ok(Letter::D),
            "E" => Ok(Letter::E),
            "F" => Ok(Letter::F),
            "G" => Ok(Letter::G),
            "A" => Ok(Letter::A),
            "B" => Ok(Letter::B),
            _ => Err(unknown("root", s)),
        }
    }
}

impl Accidental {
    pub fn label(self) -> &'static str {
        match self {
            Accidental::Natural => "Natural(♮)",
            Accidental::Sharp => "Sharp(#)",
            Accidental::Flat => "Flat(♭)",
        }
    }
}

impl FromStr for Accidental {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Natural(♮)" | "natural" | "Natural" | "♮" | "" => Ok(Accidental::Natural),
            "Sharp(#)" | "sharp" | "Sharp" | "#" => Ok(Accidental::Sharp),
            "Flat(♭)" | "flat" | "Flat" | "♭" | "b" | "-" => Ok(Accidental::Flat),
            _ => Err(unknown("accidental", s)),
        }
    }
}

impl Quality {
    pub fn label(self) -> &'static str {
        match self {
            Quality::Major => "Major",
            Quality::Minor => "Minor",
            Quality::Dominant => "Dominant",
            Quality::Diminished => "Diminished",
            Quality::Augmented => "Augmented",
        }
    }
}

impl FromStr for Quality {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" | "maj" => Ok(Quality::Major),
            "minor" | "min" | "m" => Ok(Quality::Minor),
            "dominant" | "dom" => Ok(Quality::Dominant),
            "diminished" | "dim" => Ok(Quality::Diminished),
            "augmented" | "aug" | "+" => Ok(Quality::Augmented),
            _ => Err(unknown("quality", s)),
        }
    }
}

impl Suspension {
    pub fn label(self) -> &'static str {
        match self {
            Suspension::None => "No sus",
            Suspension::Sus2 => "sus2",
            Suspension::Sus4 => "sus4",
        }
    }
}

impl FromStr for Suspension {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "no sus" | "none" | "" => Ok(Suspension::None),
            "sus2" | "2" => Ok(Suspension::Sus2),
            "sus4" | "4" => Ok(Suspension::Sus4),
            _ => Err(unknown("sus", s)),
        }
    }
}

impl Extension {
    pub fn label(self) -> &'static str {
        match self {
            Extension::Triad => "Triad",
            Extension::Seventh => "7th",
            Extension::Ninth => "9th",
            Extension::Eleventh => "11th",
            Extension::Thirteenth => "13th",
        }
    }
}

impl FromStr for Extension {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_ascii_lowercase();
        // "7th", "7" and "5" (a triad's ceiling) all name a size
        let digits = trimmed.strip_suffix("th").unwrap_or(&trimmed);
        match digits {
            "triad" | "5" => Ok(Extension::Triad),
            "7" => Ok(Extension::Seventh),
            "9" => Ok(Extension::Ninth),
            "11" => Ok(Extension::Eleventh),
            "13" => Ok(Extension::Thirteenth),
            _ => Err(unknown("size", s)),
        }
    }
}

impl FromStr for Degree {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Degree::from_number)
            .ok_or_else(|| unknown("alter", s))
    }
}

impl FromStr for AddedDegree {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "9" => Ok(AddedDegree::Ninth),
            "11" => Ok(AddedDegree::Eleventh),
            "13" => Ok(AddedDegree::Thirteenth),
            _ => Err(unknown("add", s)),
        }
    }
}

/// Parse an optional degree label where `"None"` means unset
pub fn parse_optional<T: FromStr<Err = ChordError>>(s: &str) -> Result<Option<T>, ChordError> {
    if s.trim().eq_ignore_ascii_case(NONE_LABEL) {
        Ok(None)
    } else {
        s.parse().map(Some)
    }
}

/// A field YAML may write as a bare number (`9`) or as a label (`9th`, `None`)
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RawLabel {
    Number(u8),
    Text(String),
}

impl RawLabel {
    fn text(&self) -> String {
        match self {
            RawLabel::Number(number) => number.to_string(),
            RawLabel::Text(label) => label.clone(),
        }
    }

    fn parse<T: FromStr<Err = ChordError>>(&self) -> Result<T, ChordError> {
        self.text().parse()
    }

    fn parse_optional<T: FromStr<Err = ChordError>>(&self) -> Result<Option<T>, ChordError> {
        parse_optional(&self.text())
    }
}

/// Raw selections for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawSelections {
    pub root: Option<String>,
    pub root_accidental: Option<String>,
    pub quality: Option<String>,
    pub sus: Option<String>,
    pub size: Option<RawLabel>,
    pub alter: Option<RawLabel>,
    pub alter_accidental: Option<String>,
    pub add: Option<RawLabel>,
}

impl RawSelections {
    /// Parse every label, keeping the form's initial value for missing ones
    pub fn into_form(self) -> Result<ChordForm, ChordError> {
        let defaults = ChordForm::default();
        Ok(ChordForm {
            root: parse_or(self.root.as_deref(), defaults.root)?,
            root_accidental: parse_or(self.root_accidental.as_deref(), defaults.root_accidental)?,
            quality: parse_or(self.quality.as_deref(), defaults.quality)?,
            sus: parse_or(self.sus.as_deref(), defaults.sus)?,
            size: match &self.size {
                Some(raw) => raw.parse()?,
                None => defaults.size,
            },
            alter: match &self.alter {
                Some(raw) => raw.parse_optional()?,
                None => defaults.alter,
            },
            alter_accidental: parse_or(
                self.alter_accidental.as_deref(),
                defaults.alter_accidental,
            )?,
            add: match &self.add {
                Some(raw) => raw.parse_optional()?,
                None => defaults.add,
            },
        })
    }
}

fn parse_or<T: FromStr<Err = ChordError>>(
    value: Option<&str>,
    default: T,
) -> Result<T, ChordError> {
    value.map_or(Ok(default), |label| label.parse())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDocument {
    History(Vec<RawSelections>),
    Single(RawSelections),
}

/// Read one or more chord forms from a YAML document.
///
/// An empty document yields no forms.
///
/// # Example
/// ```rust
/// use chord_maker::{load_selections, name_chord};
///
/// let forms = load_selections("quality: Minor\nsize: 7th\n")?;
/// let named = name_chord(&forms[0])?;
/// assert_eq!(named.symbol, "Cm7");
/// # Ok::<(), chord_maker::ChordError>(())
/// ```
pub fn load_selections(source: &str) -> Result<Vec<ChordForm>, ChordError> {
    if source.trim().is_empty() {
        return Ok(Vec::new());
    }

    let document: RawDocument =
        serde_yaml::from_str(source).map_err(|e| ChordError::SelectionsError(e.to_string()))?;

    match document {
        RawDocument::History(entries) => {
            entries.into_iter().map(RawSelections::into_form).collect()
        }
        RawDocument::Single(entry) => Ok(vec![entry.into_form()?]),
    }
}
