//! Raw pen-stroke drawings to normalized compositions.
//!
//! Simplified drawings arrive as `[[[x...], [y...]], ...]` with integer
//! coordinates on a 0..=255 canvas.

use anyhow::Context;

use crate::{
    composition::model::{Composition, Fragment, Stroke},
    foundation::core::{CANVAS_SIZE, snap_coordinate},
    foundation::error::{DoodleError, DoodleResult},
};

/// Provenance tag of compositions mapped from simplified drawings.
pub const SIMPLE_SOURCE_TAG: &str = "quickdraw-simple";

const MAX_SOURCE_COORDINATE: f64 = 255.0;

/// Map a simplified drawing (JSON) into a single-fragment 255x255 composition.
pub fn normalize_simple_drawing(drawing_json: &str, word: &str) -> DoodleResult<Composition> {
    let raw: Vec<Vec<Vec<i64>>> = serde_json::from_str(drawing_json)
        .with_context(|| format!("decoding simplified drawing of '{word}'"))?;
    normalize_simple_strokes(&raw, word)
}

/// Map already-decoded simplified strokes.
pub fn normalize_simple_strokes(raw: &[Vec<Vec<i64>>], word: &str) -> DoodleResult<Composition> {
    if word.trim().is_empty() {
        return Err(DoodleError::validation("subject word must be non-empty"));
    }

    let strokes = raw
        .iter()
        .enumerate()
        .map(|(idx, channels)| {
            let [xs, ys, ..] = channels.as_slice() else {
                return Err(DoodleError::validation(format!(
                    "raw stroke {idx} needs x and y channels"
                )));
            };
            Ok(Stroke::fresh(normalize_channel(xs), normalize_channel(ys)))
        })
        .collect::<DoodleResult<Vec<_>>>()?;

    let comp = Composition::new(
        CANVAS_SIZE,
        CANVAS_SIZE,
        vec![Fragment::new(strokes)],
        vec![SIMPLE_SOURCE_TAG.to_string(), word.to_string()],
    );
    comp.validate()?;
    Ok(comp)
}

fn normalize_channel(values: &[i64]) -> Vec<f64> {
    values
        .iter()
        .map(|&v| snap_coordinate(v as f64 / MAX_SOURCE_COORDINATE))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/composition/normalize.rs"]
mod tests;
