use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct NameError {
    message: String,
    kind: &'static str,
    degree: Option<u8>,
}

fn error_to_name_error(e: chord_maker::ChordError) -> NameError {
    let message = e.to_string();
    match e {
        chord_maker::ChordError::InvalidChordSpec { degree, .. } => NameError {
            message,
            kind: "invalid-chord-spec",
            degree: Some(degree),
        },
        chord_maker::ChordError::UnknownSelection { .. } => NameError {
            message,
            kind: "unknown-selection",
            degree: None,
        },
        chord_maker::ChordError::SelectionsError(_) => NameError {
            message,
            kind: "selections",
            degree: None,
        },
    }
}

fn to_js_error(e: chord_maker::ChordError) -> JsValue {
    let error = error_to_name_error(e);
    let json = serde_json::to_string(&error)
        .unwrap_or_else(|_| format!("{{\"message\":{:?}}}", error.message));
    JsValue::from_str(&json)
}

/// Name and build a chord from the form's labels; returns `{"symbol", "notes"}` JSON
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn name_chord(
    root: &str,
    root_accidental: &str,
    quality: &str,
    sus: &str,
    size: &str,
    alter: &str,
    alter_accidental: &str,
    add: &str,
) -> Result<String, JsValue> {
    let named = chord_maker::name_chord_from_labels(
        root,
        root_accidental,
        quality,
        sus,
        size,
        alter,
        alter_accidental,
        add,
    )
    .map_err(to_js_error)?;
    serde_json::to_string(&named).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Chord name only, without building the chord
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn chord_symbol(
    root: &str,
    root_accidental: &str,
    quality: &str,
    sus: &str,
    size: &str,
    alter: &str,
    alter_accidental: &str,
    add: &str,
) -> Result<String, JsValue> {
    chord_maker::form_from_labels(
        root,
        root_accidental,
        quality,
        sus,
        size,
        alter,
        alter_accidental,
        add,
    )
    .map(|form| chord_maker::chord_symbol(&form))
    .map_err(to_js_error)
}

/// Names and notes for every chord in a YAML selections document, as a JSON array
#[wasm_bindgen]
pub fn name_history(source: &str) -> Result<String, JsValue> {
    let forms = chord_maker::load_selections(source).map_err(to_js_error)?;
    let named = forms
        .iter()
        .map(chord_maker::name_chord)
        .collect::<Result<Vec<_>, _>>()
        .map_err(to_js_error)?;
    serde_json::to_string(&named).map_err(|e| JsValue::from_str(&e.to_string()))
}
