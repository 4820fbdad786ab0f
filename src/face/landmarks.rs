use crate::foundation::core::{Point, Rect};

/// Landmark point sequences for one detected face.
///
/// Empty groups mean "not detected this frame". Points are normally already in destination
/// pixel space; see [`FaceLandmarks::project`] for detector-normalized input.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FaceLandmarks {
    pub face_contour: Vec<Point>,
    pub left_eyebrow: Vec<Point>,
    pub right_eyebrow: Vec<Point>,
    pub left_eye: Vec<Point>,
    pub right_eye: Vec<Point>,
    pub nose: Vec<Point>,
    pub outer_lips: Vec<Point>,
}

impl FaceLandmarks {
    /// Map points normalized to the face box (`[0, 1]` on each axis) into pixel space.
    pub fn project(&self, face_box: Rect) -> Self {
        let map = |pts: &[Point]| -> Vec<Point> {
            pts.iter()
                .map(|p| {
                    Point::new(
                        p.x * face_box.width() + face_box.x0,
                        p.y * face_box.height() + face_box.y0,
                    )
                })
                .collect()
        };

        Self {
            face_contour: map(&self.face_contour),
            left_eyebrow: map(&self.left_eyebrow),
            right_eyebrow: map(&self.right_eyebrow),
            left_eye: map(&self.left_eye),
            right_eye: map(&self.right_eye),
            nose: map(&self.nose),
            outer_lips: map(&self.outer_lips),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/face/landmarks.rs"]
mod tests;
