use std::{collections::HashMap, path::PathBuf};

use crate::{
    assets::store::{AssetStore, DirAssetSource},
    compose::params::{TransformParams, TransformedStroke, map_strokes, outline},
    compose::policy,
    compose::svg::frame_to_svg,
    face::customize::{Classification, Customization},
    face::feature::{FeatureType, resolve_asset_key},
    face::landmarks::FaceLandmarks,
    foundation::core::{Point, Rgba8},
    foundation::error::{DoodleError, DoodleResult, ErrorKind},
    foundation::math::Rng64,
    sketch::model::Sketch,
};

/// Engine options.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineOpts {
    /// Seed for sketch selection.
    pub seed: u64,
    /// Keep the first pick per asset key until [`DoodleEngine::reshuffle`].
    pub sticky_picks: bool,
    /// File extension used by directory-backed asset sources.
    pub asset_extension: String,
}

impl Default for EngineOpts {
    fn default() -> Self {
        Self {
            seed: 0x5EED_D00D_1E5F_ACE5,
            sticky_picks: true,
            asset_extension: "json".to_string(),
        }
    }
}

/// Rendered strokes for one facial feature, in destination pixel space.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FeatureDoodle {
    pub feature: FeatureType,
    /// Asset key the sketch came from; `None` for landmark outlines.
    pub asset_key: Option<String>,
    pub color: Rgba8,
    pub strokes: Vec<TransformedStroke>,
}

/// A feature left out of this frame, and why.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SkippedFeature {
    pub feature: FeatureType,
    pub kind: ErrorKind,
    pub message: String,
}

/// Everything composed for one video frame.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct FrameDoodle {
    /// Features in painter's order.
    pub features: Vec<FeatureDoodle>,
    pub skipped: Vec<SkippedFeature>,
}

impl FrameDoodle {
    pub fn feature(&self, feature: FeatureType) -> impl Iterator<Item = &FeatureDoodle> + '_ {
        self.features.iter().filter(move |f| f.feature == feature)
    }

    /// SVG document at the default 2px line width.
    pub fn to_svg(&self, width: u32, height: u32) -> String {
        frame_to_svg(self, width, height, 2.0)
    }

    pub fn is_skipped(&self, feature: FeatureType) -> bool {
        self.skipped.iter().any(|s| s.feature == feature)
    }

    fn record(&mut self, features: &[FeatureType], result: DoodleResult<Vec<FeatureDoodle>>) {
        match result {
            Ok(done) => self.features.extend(done),
            Err(err) => {
                let kind = err.kind();
                let message = err.to_string();
                for &feature in features {
                    tracing::warn!(?feature, ?kind, %message, "skipping feature this frame");
                    self.skipped.push(SkippedFeature {
                        feature,
                        kind,
                        message: message.clone(),
                    });
                }
            }
        }
    }
}

/// Composes doodle sketches onto face landmarks, one frame at a time.
///
/// Owns the asset cache and the sketch picks. Not meant to be shared across threads: drive it
/// from the single frame-processing step.
#[derive(Debug)]
pub struct DoodleEngine {
    store: AssetStore,
    rng: Rng64,
    opts: EngineOpts,
    picks: HashMap<String, Sketch>,
}

impl DoodleEngine {
    pub fn new(store: AssetStore, opts: EngineOpts) -> Self {
        Self {
            store,
            rng: Rng64::new(opts.seed),
            opts,
            picks: HashMap::new(),
        }
    }

    /// Engine reading `<root>/<key>.<asset_extension>` files.
    pub fn from_dir(root: impl Into<PathBuf>, opts: EngineOpts) -> Self {
        let source = DirAssetSource::new(root, opts.asset_extension.clone());
        Self::new(AssetStore::new(source), opts)
    }

    pub fn opts(&self) -> &EngineOpts {
        &self.opts
    }

    pub fn store(&self) -> &AssetStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut AssetStore {
        &mut self.store
    }

    /// Forget every sticky pick; the next frame draws fresh variants.
    pub fn reshuffle(&mut self) {
        self.picks.clear();
    }

    /// Sketch for `key`, honoring sticky picks.
    pub fn sketch_for(&mut self, key: &str) -> DoodleResult<Sketch> {
        if self.opts.sticky_picks
            && let Some(sketch) = self.picks.get(key)
        {
            return Ok(sketch.clone());
        }

        let sketch = self.store.pick_random(key, &mut self.rng)?;
        tracing::debug!(key, strokes = sketch.strokes().len(), "picked sketch");
        if self.opts.sticky_picks {
            self.picks.insert(key.to_string(), sketch.clone());
        }
        Ok(sketch)
    }

    /// Apply this frame's classification, then compose.
    ///
    /// Taking `state` mutably here orders the write before every read of this frame.
    pub fn process_frame(
        &mut self,
        state: &mut Customization,
        classification: Option<&Classification>,
        landmarks: &FaceLandmarks,
    ) -> FrameDoodle {
        if let Some(update) = classification {
            state.apply(update);
        }
        self.compose_frame(landmarks, state)
    }

    /// Compose every feature with landmarks present. Never fails as a whole: a feature that
    /// errors is recorded in [`FrameDoodle::skipped`] and the rest still render.
    #[tracing::instrument(skip_all)]
    pub fn compose_frame(&mut self, lm: &FaceLandmarks, state: &Customization) -> FrameDoodle {
        let mut frame = FrameDoodle::default();

        if !lm.face_contour.is_empty() {
            frame.record(
                &[FeatureType::FaceContour],
                self.compose_outline(FeatureType::FaceContour, &lm.face_contour, false, state)
                    .map(|f| vec![f]),
            );
            frame.record(
                &[FeatureType::LeftEar, FeatureType::RightEar],
                self.compose_ears(&lm.face_contour, state)
                    .map(|(l, r)| vec![l, r]),
            );
        }

        for brow in [&lm.left_eyebrow, &lm.right_eyebrow] {
            if !brow.is_empty() {
                frame.record(
                    &[FeatureType::Eyebrow],
                    self.compose_outline(FeatureType::Eyebrow, brow, false, state)
                        .map(|f| vec![f]),
                );
            }
        }

        if !lm.left_eye.is_empty() && !lm.right_eye.is_empty() {
            frame.record(
                &[FeatureType::LeftEye, FeatureType::RightEye],
                self.compose_eyes(&lm.left_eye, &lm.right_eye, state)
                    .map(|(l, r)| vec![l, r]),
            );
            if state.has_eyeglasses && !lm.face_contour.is_empty() {
                frame.record(
                    &[FeatureType::Eyeglasses],
                    self.compose_eyeglasses(&lm.left_eye, &lm.right_eye, &lm.face_contour, state)
                        .map(|f| vec![f]),
                );
            }
        }

        if !lm.nose.is_empty() {
            frame.record(
                &[FeatureType::Nose],
                self.compose_simple(FeatureType::Nose, &lm.nose, state)
                    .map(|f| vec![f]),
            );
        }
        if !lm.outer_lips.is_empty() {
            frame.record(
                &[FeatureType::Mouth],
                self.compose_simple(FeatureType::Mouth, &lm.outer_lips, state)
                    .map(|f| vec![f]),
            );
        }

        tracing::debug!(
            drawn = frame.features.len(),
            skipped = frame.skipped.len(),
            "composed frame"
        );
        frame
    }

    /// Landmark-only polyline (face contour, eyebrows).
    pub fn compose_outline(
        &self,
        feature: FeatureType,
        points: &[Point],
        closed: bool,
        state: &Customization,
    ) -> DoodleResult<FeatureDoodle> {
        Ok(FeatureDoodle {
            feature,
            asset_key: None,
            color: state.color_for(feature),
            strokes: vec![outline(points, closed)?],
        })
    }

    /// Nose or mouth: one sketch fitted to the landmark box.
    pub fn compose_simple(
        &mut self,
        feature: FeatureType,
        points: &[Point],
        state: &Customization,
    ) -> DoodleResult<FeatureDoodle> {
        let key = asset_key(feature, state)?;
        let sketch = self.sketch_for(&key)?;
        let source = policy::sketch_bounds(&sketch)?;
        let params = match feature {
            FeatureType::Mouth => policy::mouth(source, points, state.emotion)?,
            _ => policy::simple(source, points, &format!("{feature:?} landmarks"))?,
        };
        self.place(feature, key, &sketch, &params, state)
    }

    /// Both eyes. Matching open/closed states share one sketch so the face stays symmetric.
    pub fn compose_eyes(
        &mut self,
        left: &[Point],
        right: &[Point],
        state: &Customization,
    ) -> DoodleResult<(FeatureDoodle, FeatureDoodle)> {
        let left_key = asset_key(FeatureType::LeftEye, state)?;
        let right_key = asset_key(FeatureType::RightEye, state)?;

        let left_sketch = self.sketch_for(&left_key)?;
        let right_sketch = if left_key == right_key {
            left_sketch.clone()
        } else {
            self.sketch_for(&right_key)?
        };

        let left_params = policy::eye(policy::sketch_bounds(&left_sketch)?, left, false)?;
        let right_params = policy::eye(policy::sketch_bounds(&right_sketch)?, right, true)?;
        Ok((
            self.place(FeatureType::LeftEye, left_key, &left_sketch, &left_params, state)?,
            self.place(FeatureType::RightEye, right_key, &right_sketch, &right_params, state)?,
        ))
    }

    /// Both ears from one sketch, placed off the face contour.
    pub fn compose_ears(
        &mut self,
        contour: &[Point],
        state: &Customization,
    ) -> DoodleResult<(FeatureDoodle, FeatureDoodle)> {
        let key = asset_key(FeatureType::LeftEar, state)?;
        let sketch = self.sketch_for(&key)?;
        let (left, right) = policy::ears(policy::sketch_bounds(&sketch)?, contour)?;
        Ok((
            self.place(FeatureType::LeftEar, key.clone(), &sketch, &left, state)?,
            self.place(FeatureType::RightEar, key, &sketch, &right, state)?,
        ))
    }

    pub fn compose_eyeglasses(
        &mut self,
        left_eye: &[Point],
        right_eye: &[Point],
        contour: &[Point],
        state: &Customization,
    ) -> DoodleResult<FeatureDoodle> {
        let key = asset_key(FeatureType::Eyeglasses, state)?;
        let sketch = self.sketch_for(&key)?;
        let params = policy::eyeglasses(
            policy::sketch_bounds(&sketch)?,
            left_eye,
            right_eye,
            contour,
        )?;
        self.place(FeatureType::Eyeglasses, key, &sketch, &params, state)
    }

    fn place(
        &self,
        feature: FeatureType,
        key: String,
        sketch: &Sketch,
        params: &TransformParams,
        state: &Customization,
    ) -> DoodleResult<FeatureDoodle> {
        Ok(FeatureDoodle {
            feature,
            asset_key: Some(key),
            color: state.color_for(feature),
            strokes: map_strokes(sketch, params)?,
        })
    }
}

fn asset_key(feature: FeatureType, state: &Customization) -> DoodleResult<String> {
    resolve_asset_key(feature, state).ok_or_else(|| {
        DoodleError::validation(format!("{feature:?} is drawn from landmarks, not an asset"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/compose/engine.rs"]
mod tests;
