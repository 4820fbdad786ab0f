use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    assets::decode::decode_sketches,
    foundation::error::{DoodleError, DoodleResult, ErrorKind},
    foundation::math::Rng64,
    sketch::model::Sketch,
};

/// Where raw asset bytes come from.
///
/// Implementations are `Send`: the owning engine may move to another thread.
pub trait AssetSource: std::fmt::Debug + Send {
    /// Raw bytes for `key`. `Ok(None)` means no data source exists for the key.
    fn load(&self, key: &str) -> DoodleResult<Option<Vec<u8>>>;
}

/// Validate an asset key as a single relative file-name stem.
///
/// Keys become file names, so separators, parent traversal and hidden names are rejected.
pub fn validate_asset_key(key: &str) -> DoodleResult<()> {
    if key.is_empty() {
        return Err(DoodleError::validation("asset key must be non-empty"));
    }
    if key.contains(['/', '\\']) {
        return Err(DoodleError::validation(format!(
            "asset key '{key}' must not contain path separators"
        )));
    }
    if key.starts_with('.') {
        return Err(DoodleError::validation(format!(
            "asset key '{key}' must not start with '.'"
        )));
    }
    Ok(())
}

/// Asset files on disk: `<root>/<key>.<extension>`.
#[derive(Clone, Debug)]
pub struct DirAssetSource {
    root: PathBuf,
    extension: String,
}

impl DirAssetSource {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &str) -> DoodleResult<PathBuf> {
        validate_asset_key(key)?;
        Ok(self.root.join(format!("{key}.{}", self.extension)))
    }
}

impl AssetSource for DirAssetSource {
    fn load(&self, key: &str) -> DoodleResult<Option<Vec<u8>>> {
        let path = self.path_for(key)?;
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("read asset bytes from '{}'", path.display()))
                .into()),
        }
    }
}

/// In-memory asset files keyed by asset key.
#[derive(Clone, Debug, Default)]
pub struct MemoryAssetSource {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(key, bytes);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.files.insert(key.into(), bytes.into());
    }
}

impl AssetSource for MemoryAssetSource {
    fn load(&self, key: &str) -> DoodleResult<Option<Vec<u8>>> {
        Ok(self.files.get(key).cloned())
    }
}

#[derive(Clone, Debug)]
enum CacheEntry {
    Loaded(Arc<[Sketch]>),
    Failed { kind: ErrorKind, message: String },
}

/// Observable cache state for one key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheState {
    /// Never requested (or evicted).
    NotLoaded,
    /// Parsed successfully; `sketches` may be zero.
    Loaded { sketches: usize },
    /// Load failed; the same error kind is replayed until evicted.
    Failed { kind: ErrorKind },
}

/// Load-once, read-many store of sketches keyed by asset key.
///
/// Only "not found" and "corrupt" outcomes are cached as failures; IO or validation errors
/// leave the key unloaded so a later call retries.
#[derive(Debug)]
pub struct AssetStore {
    source: Box<dyn AssetSource>,
    entries: HashMap<String, CacheEntry>,
    load_counts: HashMap<String, u32>,
}

impl AssetStore {
    pub fn new(source: impl AssetSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            entries: HashMap::new(),
            load_counts: HashMap::new(),
        }
    }

    /// Sketches for `key`, loading and caching them on first request.
    pub fn get_sketches(&mut self, key: &str) -> DoodleResult<Arc<[Sketch]>> {
        if let Some(entry) = self.entries.get(key) {
            return match entry {
                CacheEntry::Loaded(sketches) => Ok(Arc::clone(sketches)),
                CacheEntry::Failed { kind, message } => Err(replay(key, *kind, message)),
            };
        }

        *self.load_counts.entry(key.to_string()).or_default() += 1;
        let loaded = self.load_uncached(key);
        match loaded {
            Ok(sketches) => {
                tracing::debug!(key, sketches = sketches.len(), "loaded asset");
                self.entries
                    .insert(key.to_string(), CacheEntry::Loaded(Arc::clone(&sketches)));
                Ok(sketches)
            }
            Err(err) => {
                let kind = err.kind();
                if matches!(kind, ErrorKind::AssetNotFound | ErrorKind::AssetCorrupt) {
                    let message = match &err {
                        DoodleError::AssetCorrupt { reason, .. } => reason.clone(),
                        other => other.to_string(),
                    };
                    self.entries
                        .insert(key.to_string(), CacheEntry::Failed { kind, message });
                }
                Err(err)
            }
        }
    }

    /// Uniformly pick one sketch for `key`.
    pub fn pick_random(&mut self, key: &str, rng: &mut Rng64) -> DoodleResult<Sketch> {
        let sketches = self.get_sketches(key)?;
        if sketches.is_empty() {
            return Err(DoodleError::empty_asset_set(key));
        }
        Ok(sketches[rng.next_index(sketches.len())].clone())
    }

    pub fn cache_state(&self, key: &str) -> CacheState {
        match self.entries.get(key) {
            None => CacheState::NotLoaded,
            Some(CacheEntry::Loaded(sketches)) => CacheState::Loaded {
                sketches: sketches.len(),
            },
            Some(CacheEntry::Failed { kind, .. }) => CacheState::Failed { kind: *kind },
        }
    }

    /// Forget `key` so the next request reloads it. Returns whether anything was cached.
    pub fn evict(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// How many times `key` was read from the source.
    pub fn load_count(&self, key: &str) -> u32 {
        self.load_counts.get(key).copied().unwrap_or(0)
    }

    fn load_uncached(&self, key: &str) -> DoodleResult<Arc<[Sketch]>> {
        let bytes = self
            .source
            .load(key)?
            .ok_or_else(|| DoodleError::asset_not_found(key))?;
        Ok(decode_sketches(key, &bytes)?.into())
    }
}

fn replay(key: &str, kind: ErrorKind, message: &str) -> DoodleError {
    match kind {
        ErrorKind::AssetNotFound => DoodleError::asset_not_found(key),
        _ => DoodleError::asset_corrupt(key, message),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
