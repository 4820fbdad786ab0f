use super::*;

fn key(feature: FeatureType, state: &Customization) -> Option<String> {
    resolve_asset_key(feature, state)
}

#[test]
fn default_state_keys() {
    let s = Customization::default();
    assert_eq!(key(FeatureType::LeftEye, &s).as_deref(), Some("eye"));
    assert_eq!(key(FeatureType::RightEye, &s).as_deref(), Some("eye"));
    assert_eq!(key(FeatureType::LeftEar, &s).as_deref(), Some("ear"));
    assert_eq!(key(FeatureType::RightEar, &s).as_deref(), Some("ear"));
    assert_eq!(key(FeatureType::Mouth, &s).as_deref(), Some("mouth"));
    assert_eq!(key(FeatureType::Nose, &s).as_deref(), Some("nose"));
    assert_eq!(
        key(FeatureType::Eyeglasses, &s).as_deref(),
        Some("eyeglasses")
    );
}

#[test]
fn outline_features_have_no_key() {
    let s = Customization::default();
    assert_eq!(key(FeatureType::FaceContour, &s), None);
    assert_eq!(key(FeatureType::Eyebrow, &s), None);
    for f in FeatureType::ALL {
        assert_eq!(f.is_outline(), f.base_key().is_none());
    }
}

#[test]
fn eye_closed_suffix_is_per_eye() {
    let s = Customization {
        left_eye_closed: true,
        right_eye_closed: false,
        ..Customization::default()
    };
    assert_eq!(key(FeatureType::LeftEye, &s).as_deref(), Some("eye-closed"));
    assert_eq!(key(FeatureType::RightEye, &s).as_deref(), Some("eye"));
}

#[test]
fn mouth_variant_follows_emotion() {
    let mut s = Customization::default();
    for (emotion, expected) in [
        (Emotion::Neutral, "mouth"),
        (Emotion::Happy, "mouth-happy-sad-angry"),
        (Emotion::Sad, "mouth-happy-sad-angry"),
        (Emotion::Angry, "mouth-happy-sad-angry"),
        (Emotion::Surprised, "mouth-happy-sad-angry"),
    ] {
        s.emotion = emotion;
        assert_eq!(key(FeatureType::Mouth, &s).as_deref(), Some(expected));
    }
}
