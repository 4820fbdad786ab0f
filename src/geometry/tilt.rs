use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{DoodleError, DoodleResult};

/// Face tilt in radians, estimated from the face contour.
///
/// `atan((contour[n-2].y - contour[0].y) / contour_box.width)`: the slope between the two
/// outermost usable contour points. The detector's last contour point is not used. A contour
/// box with zero width gives zero tilt.
pub fn contour_tilt(contour: &[Point], contour_box: Rect) -> DoodleResult<f64> {
    let (first, near_last) = contour_ends(contour)?;
    let width = contour_box.width();
    if width == 0.0 {
        return Ok(0.0);
    }
    Ok(((near_last.y - first.y) / width).atan())
}

/// First and second-to-last contour points.
pub fn contour_ends(contour: &[Point]) -> DoodleResult<(Point, Point)> {
    if contour.len() < 2 {
        return Err(DoodleError::empty_point_set(
            "face contour needs at least two points",
        ));
    }
    Ok((contour[0], contour[contour.len() - 2]))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/tilt.rs"]
mod tests;
