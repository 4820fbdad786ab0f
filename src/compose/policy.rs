//! Per-feature placement rules.
//!
//! Each function turns landmark points into [`TransformParams`]; none of them touch assets.

use crate::{
    compose::params::TransformParams,
    face::customize::Emotion,
    foundation::core::{Point, Rect},
    foundation::error::{DoodleError, DoodleResult},
    geometry::bbox::bounding_box_of,
    geometry::tilt::{contour_ends, contour_tilt},
    sketch::model::Sketch,
};

/// Native extent of a sketch.
pub fn sketch_bounds(sketch: &Sketch) -> DoodleResult<Rect> {
    bounding_box_of(sketch.points(), "sketch")
}

/// Nose and other single-instance features: fit into the landmark bounding box.
pub fn simple(source_box: Rect, landmarks: &[Point], what: &str) -> DoodleResult<TransformParams> {
    let dest = bounding_box_of(landmarks.iter().copied(), what)?;
    Ok(TransformParams::fit(source_box, dest))
}

/// Mouth: a frowning emotion draws the sketch upside down.
pub fn mouth(source_box: Rect, outer_lips: &[Point], emotion: Emotion) -> DoodleResult<TransformParams> {
    Ok(simple(source_box, outer_lips, "outer lips")?.with_flip_y(emotion.frowns()))
}

/// Eyes: the right eye mirrors the left eye's sketch.
pub fn eye(source_box: Rect, eye: &[Point], is_right: bool) -> DoodleResult<TransformParams> {
    let what = if is_right { "right eye" } else { "left eye" };
    Ok(simple(source_box, eye, what)?.with_flip_x(is_right))
}

/// Ears: `(left, right)` boxes derived from the face contour, tilted with the face.
///
/// Each ear is a fifth of the contour width and half its height, sitting above the outermost
/// contour points.
pub fn ears(source_box: Rect, contour: &[Point]) -> DoodleResult<(TransformParams, TransformParams)> {
    let contour_box = bounding_box_of(contour.iter().copied(), "face contour")?;
    let (first, near_last) = contour_ends(contour)?;
    let rotation = contour_tilt(contour, contour_box)?;

    let size = (contour_box.width() / 5.0, contour_box.height() / 2.0);
    let left_box = Rect::from_origin_size((near_last.x, near_last.y - size.1), size);
    let right_box = Rect::from_origin_size((first.x - size.0, first.y - size.1), size);

    let left = TransformParams::fit(source_box, left_box).with_rotation(rotation);
    let right = TransformParams::fit(source_box, right_box)
        .with_rotation(rotation)
        .with_flip_x(true);
    Ok((left, right))
}

/// Eyeglasses: one sketch spanning both eyes out to the contour edges.
///
/// The detector's last point of each eye list is not used. The height is twice the left eye's
/// height so the frames extend above and below the eyes.
pub fn eyeglasses(
    source_box: Rect,
    left_eye: &[Point],
    right_eye: &[Point],
    contour: &[Point],
) -> DoodleResult<TransformParams> {
    let left = usable(left_eye, "left eye")?;
    let right = usable(right_eye, "right eye")?;
    let (first, near_last) = contour_ends(contour)?;

    let corners = [
        Point::new(first.x, right[0].y),
        Point::new(near_last.x, left[0].y),
    ];
    let dest = bounding_box_of(
        corners
            .into_iter()
            .chain(left.iter().copied())
            .chain(right.iter().copied()),
        "eyeglasses",
    )?;
    let left_box = bounding_box_of(left.iter().copied(), "left eye")?;

    let contour_box = bounding_box_of(contour.iter().copied(), "face contour")?;
    let rotation = contour_tilt(contour, contour_box)?;

    Ok(TransformParams {
        dest_width: dest.width(),
        dest_height: 2.0 * left_box.height(),
        ..TransformParams::fit(source_box, dest)
    }
    .with_rotation(rotation))
}

/// Drop the trailing detector point; fails when nothing usable is left.
fn usable<'a>(points: &'a [Point], what: &str) -> DoodleResult<&'a [Point]> {
    match points.split_last() {
        Some((_, rest)) if !rest.is_empty() => Ok(rest),
        _ => Err(DoodleError::empty_point_set(format!(
            "{what} needs at least two landmark points"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/policy.rs"]
mod tests;
