//! Doodle-face compositing engine.
//!
//! Overlays hand-drawn stroke sketches (eyes, nose, mouth, ears, eyeglasses) onto the face
//! landmarks produced by an external detector. Per frame:
//!
//! 1. **Resolve**: feature + [`Customization`] -> asset key ([`resolve_asset_key`])
//! 2. **Load**: asset key -> cached [`Sketch`] list ([`AssetStore`])
//! 3. **Place**: landmarks -> [`TransformParams`] per feature, then [`map_strokes`]
//! 4. **Emit**: [`FrameDoodle`] of stroke paths in destination pixels (JSON or SVG)
//!
//! Capture, detection, classification and on-screen drawing belong to the caller.
#![forbid(unsafe_code)]

mod assets;
mod compose;
mod face;
mod foundation;
mod geometry;
mod sketch;

pub use assets::decode::decode_sketches;
pub use assets::store::{
    AssetSource, AssetStore, CacheState, DirAssetSource, MemoryAssetSource, validate_asset_key,
};
pub use compose::engine::{DoodleEngine, EngineOpts, FeatureDoodle, FrameDoodle, SkippedFeature};
pub use compose::params::{TransformParams, TransformedStroke, map_strokes, outline};
pub use compose::policy;
pub use compose::svg::frame_to_svg;
pub use face::customize::{Classification, Customization, Emotion};
pub use face::feature::{FeatureType, resolve_asset_key};
pub use face::landmarks::FaceLandmarks;
pub use foundation::core::{Affine, BezPath, Point, Rect, Rgba8};
pub use foundation::error::{DoodleError, DoodleResult, ErrorKind};
pub use foundation::math::Rng64;
pub use geometry::bbox::{bounding_box, bounding_box_of};
pub use geometry::tilt::{contour_ends, contour_tilt};
pub use sketch::model::{Sketch, Stroke};
