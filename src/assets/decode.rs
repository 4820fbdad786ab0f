use serde_json::Value;

use crate::{
    foundation::core::Point,
    foundation::error::{DoodleError, DoodleResult},
    sketch::model::{Sketch, Stroke},
};

/// Decode one asset file into its sketches.
///
/// Layout: a non-empty JSON list of records, each `{"drawing": [[xs, ys], ...]}`. Structural
/// problems and non-numeric coordinates fail the whole file with `AssetCorrupt`. A stroke whose
/// `xs`/`ys` lengths differ (or that has no points) is dropped on its own, and a record left
/// without strokes is dropped from the result. Extra per-stroke lists after `ys` (e.g. timing
/// data in raw exports) are ignored.
pub fn decode_sketches(key: &str, bytes: &[u8]) -> DoodleResult<Vec<Sketch>> {
    let json: Value = serde_json::from_slice(bytes)
        .map_err(|e| DoodleError::asset_corrupt(key, format!("invalid json: {e}")))?;

    let records = match json {
        Value::Array(records) if !records.is_empty() => records,
        Value::Array(_) => return Err(DoodleError::asset_corrupt(key, "empty record list")),
        _ => return Err(DoodleError::asset_corrupt(key, "top level is not a list")),
    };

    let mut sketches = Vec::with_capacity(records.len());
    let mut dropped_strokes = 0usize;
    let mut dropped_records = 0usize;

    for (ri, record) in records.iter().enumerate() {
        let drawing = record
            .get("drawing")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                DoodleError::asset_corrupt(key, format!("record {ri}: missing 'drawing' list"))
            })?;

        let mut strokes = Vec::with_capacity(drawing.len());
        for (si, raw) in drawing.iter().enumerate() {
            match decode_stroke(raw).map_err(|reason| {
                DoodleError::asset_corrupt(key, format!("record {ri} stroke {si}: {reason}"))
            })? {
                Some(stroke) => strokes.push(stroke),
                None => dropped_strokes += 1,
            }
        }

        match Sketch::new(strokes) {
            Ok(sketch) => sketches.push(sketch),
            Err(_) => dropped_records += 1,
        }
    }

    if dropped_strokes > 0 || dropped_records > 0 {
        tracing::debug!(
            key,
            dropped_strokes,
            dropped_records,
            kept = sketches.len(),
            "dropped malformed strokes while decoding asset"
        );
    }

    Ok(sketches)
}

/// `Ok(None)` means "malformed but skippable".
fn decode_stroke(raw: &Value) -> Result<Option<Stroke>, String> {
    let parts = raw
        .as_array()
        .filter(|parts| parts.len() >= 2)
        .ok_or_else(|| "stroke must be a [xs, ys] pair".to_string())?;

    let xs = decode_coords(&parts[0], "xs")?;
    let ys = decode_coords(&parts[1], "ys")?;
    if xs.len() != ys.len() {
        return Ok(None);
    }

    let points = xs
        .into_iter()
        .zip(ys)
        .map(|(x, y)| Point::new(x, y))
        .collect();
    Ok(Stroke::new(points).ok())
}

fn decode_coords(raw: &Value, axis: &str) -> Result<Vec<f64>, String> {
    let list = raw
        .as_array()
        .ok_or_else(|| format!("{axis} is not a list"))?;
    list.iter()
        .map(|v| {
            v.as_f64()
                .filter(|f| f.is_finite())
                .ok_or_else(|| format!("{axis} holds a non-numeric value: {v}"))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
