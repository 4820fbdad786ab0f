use crate::face::customize::{Customization, Emotion};

/// Facial region a sketch or landmark outline is rendered onto.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FeatureType {
    LeftEye,
    RightEye,
    Nose,
    Mouth,
    LeftEar,
    RightEar,
    FaceContour,
    Eyebrow,
    Eyeglasses,
}

impl FeatureType {
    pub const ALL: [FeatureType; 9] = [
        Self::LeftEye,
        Self::RightEye,
        Self::Nose,
        Self::Mouth,
        Self::LeftEar,
        Self::RightEar,
        Self::FaceContour,
        Self::Eyebrow,
        Self::Eyeglasses,
    ];

    /// Drawn straight from landmark points, without a sketch asset.
    pub fn is_outline(self) -> bool {
        matches!(self, Self::FaceContour | Self::Eyebrow)
    }

    /// Asset key before any state-dependent variant suffix.
    pub fn base_key(self) -> Option<&'static str> {
        match self {
            Self::LeftEye | Self::RightEye => Some("eye"),
            Self::LeftEar | Self::RightEar => Some("ear"),
            Self::Mouth => Some("mouth"),
            Self::Nose => Some("nose"),
            Self::Eyeglasses => Some("eyeglasses"),
            Self::FaceContour | Self::Eyebrow => None,
        }
    }
}

/// Asset key for `feature` under the current customization.
///
/// Evaluated on every call so it always reflects `state`. Outline-only features have no key.
pub fn resolve_asset_key(feature: FeatureType, state: &Customization) -> Option<String> {
    let base = feature.base_key()?;
    let suffix = match feature {
        FeatureType::LeftEye if state.left_eye_closed => "-closed",
        FeatureType::RightEye if state.right_eye_closed => "-closed",
        FeatureType::Mouth if state.emotion != Emotion::Neutral => "-happy-sad-angry",
        _ => "",
    };
    Some(format!("{base}{suffix}"))
}

#[cfg(test)]
#[path = "../../tests/unit/face/feature.rs"]
mod tests;
