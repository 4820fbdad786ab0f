use std::collections::BTreeMap;

use crate::{
    face::feature::FeatureType,
    foundation::core::Rgba8,
    foundation::error::{DoodleError, DoodleResult},
};

/// Coarse facial expression reported by the classifier.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    #[default]
    Neutral,
    Happy,
    Sad,
    Angry,
    Surprised,
}

impl Emotion {
    /// Map a classifier label onto an emotion.
    ///
    /// Case-insensitive. "Disgust" reads as surprised; unknown labels fall back to neutral.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "happy" => Self::Happy,
            "sad" => Self::Sad,
            "angry" => Self::Angry,
            "surprised" | "disgust" => Self::Surprised,
            _ => Self::Neutral,
        }
    }

    /// Whether the mouth sketch is drawn upside down (a frown).
    pub fn frowns(self) -> bool {
        matches!(self, Self::Angry | Self::Sad)
    }
}

/// One classifier result, applied once per frame.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Classification {
    pub emotion: Emotion,
    pub has_eyeglasses: bool,
    /// `None` leaves the current flag unchanged.
    #[serde(default)]
    pub left_eye_closed: Option<bool>,
    #[serde(default)]
    pub right_eye_closed: Option<bool>,
}

/// Per-session doodle customization.
///
/// Written once per frame (see [`Customization::apply`]) and read by key resolution and
/// composition for that frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Customization {
    pub emotion: Emotion,
    pub left_eye_closed: bool,
    pub right_eye_closed: bool,
    pub has_eyeglasses: bool,
    pub colors: BTreeMap<FeatureType, Rgba8>,
}

impl Default for Customization {
    fn default() -> Self {
        Self {
            emotion: Emotion::Neutral,
            left_eye_closed: false,
            right_eye_closed: false,
            has_eyeglasses: false,
            colors: FeatureType::ALL
                .into_iter()
                .map(|f| (f, Rgba8::BLACK))
                .collect(),
        }
    }
}

impl Customization {
    /// Load from a JSON file; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> DoodleResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| DoodleError::validation(format!("customization json: {e}")))
    }

    pub fn apply(&mut self, update: &Classification) {
        self.emotion = update.emotion;
        self.has_eyeglasses = update.has_eyeglasses;
        if let Some(closed) = update.left_eye_closed {
            self.left_eye_closed = closed;
        }
        if let Some(closed) = update.right_eye_closed {
            self.right_eye_closed = closed;
        }
    }

    pub fn color_for(&self, feature: FeatureType) -> Rgba8 {
        self.colors.get(&feature).copied().unwrap_or_default()
    }

    pub fn set_color(&mut self, feature: FeatureType, color: Rgba8) {
        self.colors.insert(feature, color);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/face/customize.rs"]
mod tests;
