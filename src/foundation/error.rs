/// Convenience result type used across the doodle engine.
pub type DoodleResult<T> = Result<T, DoodleError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Asset and geometry errors are scoped to a single feature in a single frame: the frame
/// compositor records them and keeps going.
#[derive(thiserror::Error, Debug)]
pub enum DoodleError {
    /// No data source exists for the asset key.
    #[error("asset not found: '{key}'")]
    AssetNotFound {
        /// Asset key that was requested.
        key: String,
    },

    /// The data source exists but does not parse into sketches.
    #[error("asset corrupt: '{key}': {reason}")]
    AssetCorrupt {
        /// Asset key that was requested.
        key: String,
        /// Human-readable parse failure.
        reason: String,
    },

    /// The asset key loaded fine but holds no sketches to pick from.
    #[error("asset set is empty: '{key}'")]
    EmptyAssetSet {
        /// Asset key that was requested.
        key: String,
    },

    /// A landmark group or point list had no usable points.
    #[error("empty point set: {what}")]
    EmptyPointSet {
        /// Which point set was empty.
        what: String,
    },

    /// Source bounding box has zero width or height.
    #[error("degenerate source box: {width}x{height}")]
    DegenerateSourceBox {
        /// Source box width.
        width: f64,
        /// Source box height.
        height: f64,
    },

    /// Invalid caller-provided data (options, colors, keys).
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Copyable classification of a [`DoodleError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// See [`DoodleError::AssetNotFound`].
    AssetNotFound,
    /// See [`DoodleError::AssetCorrupt`].
    AssetCorrupt,
    /// See [`DoodleError::EmptyAssetSet`].
    EmptyAssetSet,
    /// See [`DoodleError::EmptyPointSet`].
    EmptyPointSet,
    /// See [`DoodleError::DegenerateSourceBox`].
    DegenerateSourceBox,
    /// See [`DoodleError::Validation`].
    Validation,
    /// See [`DoodleError::Other`].
    Other,
}

impl DoodleError {
    /// Build a [`DoodleError::AssetNotFound`] value.
    pub fn asset_not_found(key: impl Into<String>) -> Self {
        Self::AssetNotFound { key: key.into() }
    }

    /// Build a [`DoodleError::AssetCorrupt`] value.
    pub fn asset_corrupt(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::AssetCorrupt {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Build a [`DoodleError::EmptyAssetSet`] value.
    pub fn empty_asset_set(key: impl Into<String>) -> Self {
        Self::EmptyAssetSet { key: key.into() }
    }

    /// Build a [`DoodleError::EmptyPointSet`] value.
    pub fn empty_point_set(what: impl Into<String>) -> Self {
        Self::EmptyPointSet { what: what.into() }
    }

    /// Build a [`DoodleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AssetNotFound { .. } => ErrorKind::AssetNotFound,
            Self::AssetCorrupt { .. } => ErrorKind::AssetCorrupt,
            Self::EmptyAssetSet { .. } => ErrorKind::EmptyAssetSet,
            Self::EmptyPointSet { .. } => ErrorKind::EmptyPointSet,
            Self::DegenerateSourceBox { .. } => ErrorKind::DegenerateSourceBox,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Other(_) => ErrorKind::Other,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
