use std::sync::Arc;

use crate::foundation::core::{BezPath, Point};
use crate::foundation::error::{DoodleError, DoodleResult};

/// One continuous pen path. Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    /// Build a stroke; rejects an empty point list.
    pub fn new(points: Vec<Point>) -> DoodleResult<Self> {
        if points.is_empty() {
            return Err(DoodleError::empty_point_set("stroke"));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; kept for the `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One complete hand-drawn rendering of a facial feature.
///
/// Strokes are shared behind an `Arc`, so cloning a sketch is cheap and two clones of the same
/// pick compare equal under [`Sketch::ptr_eq`].
#[derive(Clone, Debug, PartialEq)]
pub struct Sketch {
    strokes: Arc<[Stroke]>,
}

impl Sketch {
    /// Build a sketch; rejects an empty stroke list.
    pub fn new(strokes: Vec<Stroke>) -> DoodleResult<Self> {
        if strokes.is_empty() {
            return Err(DoodleError::empty_point_set("sketch has no strokes"));
        }
        Ok(Self {
            strokes: strokes.into(),
        })
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Iterate every point of every stroke in order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.strokes.iter().flat_map(|s| s.points.iter().copied())
    }

    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Stroke::len).sum()
    }

    /// Whether both values share the same underlying stroke storage.
    pub fn ptr_eq(&self, other: &Sketch) -> bool {
        Arc::ptr_eq(&self.strokes, &other.strokes)
    }

    /// Polyline path through each stroke, in native asset coordinates.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for stroke in self.strokes.iter() {
            let mut it = stroke.points.iter();
            if let Some(first) = it.next() {
                path.move_to(*first);
                for p in it {
                    path.line_to(*p);
                }
            }
        }
        path
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/model.rs"]
mod tests;
