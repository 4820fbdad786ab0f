use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{DoodleError, DoodleResult};

/// Axis-aligned bounding box of a point set.
///
/// Scans every point; input order does not matter. `what` names the point set in the error.
pub fn bounding_box_of(
    points: impl IntoIterator<Item = Point>,
    what: &str,
) -> DoodleResult<Rect> {
    let mut it = points.into_iter();
    let first = it
        .next()
        .ok_or_else(|| DoodleError::empty_point_set(what))?;

    let (mut x0, mut y0, mut x1, mut y1) = (first.x, first.y, first.x, first.y);
    for p in it {
        x0 = x0.min(p.x);
        y0 = y0.min(p.y);
        x1 = x1.max(p.x);
        y1 = y1.max(p.y);
    }
    Ok(Rect::new(x0, y0, x1, y1))
}

/// [`bounding_box_of`] over a slice.
pub fn bounding_box(points: &[Point]) -> DoodleResult<Rect> {
    bounding_box_of(points.iter().copied(), "points")
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/bbox.rs"]
mod tests;
