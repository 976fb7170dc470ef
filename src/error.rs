//! # Error Types
//!
//! This module defines all error types for the chord builder and namer.
//!
//! ## Error Types
//! - `InvalidChordSpec` - An alteration targets a chord degree that was never built
//! - `UnknownSelection` - A raw form label outside its field's choices
//! - `SelectionsError` - A YAML selections document that cannot be read
//!
//! ## Usage
//! ```rust
//! use chord_maker::{name_chord, ChordError, ChordForm, Degree};
//!
//! let form = ChordForm {
//!     alter: Some(Degree::Ninth),
//!     ..ChordForm::default()
//! };
//!
//! match name_chord(&form) {
//!     Ok(named) => println!("{}: {}", named.symbol, named.pitch_names()),
//!     Err(ChordError::InvalidChordSpec { degree, message }) => {
//!         eprintln!("Cannot alter the {}: {}", degree, message);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChordError {
    /// An alteration refers to a chord tone that was not constructed.
    ///
    /// Occurs when e.g. the 9th of a plain triad is altered. No tone is
    /// modified when this is returned.
    ///
    /// # Example
    /// ```
    /// # use chord_maker::ChordError;
    /// let err = ChordError::InvalidChordSpec {
    ///     degree: 9,
    ///     message: "chord has no 9th (tones: C, E, G)".to_string(),
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Invalid chord spec for degree 9: chord has no 9th (tones: C, E, G)"
    /// );
    /// ```
    #[error("Invalid chord spec for degree {degree}: {message}")]
    InvalidChordSpec { degree: u8, message: String },

    /// A raw selection label that is not one of the field's options.
    ///
    /// # Example
    /// ```
    /// # use chord_maker::ChordError;
    /// let err = ChordError::UnknownSelection {
    ///     field: "quality",
    ///     value: "Lydian".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Unknown quality selection: 'Lydian'");
    /// ```
    #[error("Unknown {field} selection: '{value}'")]
    UnknownSelection { field: &'static str, value: String },

    /// Malformed YAML selections document.
    #[error("Invalid selections: {0}")]
    SelectionsError(String),
}
