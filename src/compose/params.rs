use crate::{
    foundation::core::{Affine, BezPath, Point, Rect},
    foundation::error::{DoodleError, DoodleResult},
    sketch::model::Sketch,
};

/// Everything needed to place one sketch onto one facial region.
///
/// Per-feature policies build one of these and hand it to [`map_strokes`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TransformParams {
    /// Sketch extent in its own (bottom-up) coordinate space.
    pub source_box: Rect,
    /// Destination region; its origin anchors the output and its center is the rotation pivot.
    pub dest_box: Rect,
    pub dest_width: f64,
    pub dest_height: f64,
    /// Radians, about the center of `dest_box`.
    pub rotation: f64,
    pub flip_x: bool,
    /// Keep the source's vertical direction instead of the default bottom-up to top-down flip.
    pub flip_y: bool,
}

impl TransformParams {
    /// Map `source_box` onto `dest_box` at the box's own size, no flip, no rotation.
    pub fn fit(source_box: Rect, dest_box: Rect) -> Self {
        Self {
            source_box,
            dest_box,
            dest_width: dest_box.width(),
            dest_height: dest_box.height(),
            rotation: 0.0,
            flip_x: false,
            flip_y: false,
        }
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_flip_x(mut self, flip_x: bool) -> Self {
        self.flip_x = flip_x;
        self
    }

    pub fn with_flip_y(mut self, flip_y: bool) -> Self {
        self.flip_y = flip_y;
        self
    }

    /// The full source-to-destination map as a single affine transform.
    pub fn to_affine(&self) -> DoodleResult<Affine> {
        let (sw, sh) = (self.source_box.width(), self.source_box.height());
        if sw == 0.0 || sh == 0.0 {
            return Err(DoodleError::DegenerateSourceBox {
                width: sw,
                height: sh,
            });
        }

        // Canonical order:
        // R(about dest center) * Place(dest) * Flip * Normalize(source)
        let normalize = Affine::scale_non_uniform(1.0 / sw, 1.0 / sh)
            * Affine::translate((-self.source_box.x0, -self.source_box.y0));
        let (ax, bx) = if self.flip_x { (-1.0, 1.0) } else { (1.0, 0.0) };
        let (ay, by) = if self.flip_y { (1.0, 0.0) } else { (-1.0, 1.0) };
        let flip = Affine::new([ax, 0.0, 0.0, ay, bx, by]);
        let place = Affine::new([
            self.dest_width,
            0.0,
            0.0,
            self.dest_height,
            self.dest_box.x0,
            self.dest_box.y0,
        ]);

        let mut out = place * flip * normalize;
        if self.rotation != 0.0 {
            out = Affine::rotate_about(self.rotation, self.dest_box.center()) * out;
        }
        Ok(out)
    }
}

/// One output pen path in destination pixel space.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TransformedStroke {
    pub points: Vec<Point>,
}

impl TransformedStroke {
    /// Polyline through the points; `closed` appends a close segment.
    pub fn to_bez_path(&self, closed: bool) -> BezPath {
        let mut path = BezPath::new();
        let mut it = self.points.iter();
        if let Some(first) = it.next() {
            path.move_to(*first);
            for p in it {
                path.line_to(*p);
            }
            if closed {
                path.close_path();
            }
        }
        path
    }
}

/// Map every stroke of `sketch` into destination space.
pub fn map_strokes(sketch: &Sketch, params: &TransformParams) -> DoodleResult<Vec<TransformedStroke>> {
    let affine = params.to_affine()?;
    Ok(sketch
        .strokes()
        .iter()
        .map(|stroke| TransformedStroke {
            points: stroke.points().iter().map(|p| affine * *p).collect(),
        })
        .collect())
}

/// Polyline straight through landmark points, no asset involved.
///
/// `closed` repeats the first point at the end.
pub fn outline(points: &[Point], closed: bool) -> DoodleResult<TransformedStroke> {
    let Some(first) = points.first() else {
        return Err(DoodleError::empty_point_set("outline landmarks"));
    };
    let mut out = points.to_vec();
    if closed && points.len() > 1 {
        out.push(*first);
    }
    Ok(TransformedStroke { points: out })
}

#[cfg(test)]
#[path = "../../tests/unit/compose/params.rs"]
mod tests;
