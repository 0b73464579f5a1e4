//! Model resolution: the async boundary between assembly and the host
//! renderer's asset pipeline.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::engine::graphics::{MaterialHandle, MeshHandle, ModelAsset, ModelRenderable};

/// Failure to resolve a model path to an asset.
#[derive(Debug, Error)]
#[error("model '{path}': {reason}")]
pub struct ModelError {
    pub path: String,
    pub reason: String,
}

impl ModelError {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { path: path.into(), reason: reason.into() }
    }
}

/// Source of model assets, resolved by path.
///
/// Resolution is the single suspension point during vehicle assembly; the
/// future completes on the same logical task that awaits it.
pub trait ModelSource {
    fn load_model(
        &self,
        path: &str,
    ) -> impl Future<Output = Result<Arc<ModelAsset>, ModelError>>;
}

/// In-memory model registry.
///
/// Callers register resolved assets up front and look them up by path; the
/// demo binary and tests use this instead of a real asset pipeline.
#[derive(Debug, Default)]
pub struct ModelLibrary {
    models: HashMap<String, Arc<ModelAsset>>,
}

impl ModelLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_model(&mut self, path: impl Into<String>, asset: ModelAsset) {
        self.models.insert(path.into(), Arc::new(asset));
    }

    pub fn get(&self, path: &str) -> Option<Arc<ModelAsset>> {
        self.models.get(path).cloned()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl ModelSource for ModelLibrary {
    async fn load_model(&self, path: &str) -> Result<Arc<ModelAsset>, ModelError> {
        self.get(path)
            .ok_or_else(|| ModelError::new(path, "not registered in model library"))
    }
}

/// Serialized form of a model manifest on disk.
#[derive(Debug, Deserialize)]
struct ModelManifest {
    #[serde(default)]
    renderables: Vec<ManifestRenderable>,
}

#[derive(Debug, Deserialize)]
struct ManifestRenderable {
    mesh_name: String,
    mesh: u32,
    #[serde(default)]
    materials: Vec<u32>,
}

/// Model source backed by JSON manifests under a root directory.
///
/// A manifest describes the renderables of one model file by name, with the
/// host renderer's mesh/material handles already baked in.
#[derive(Debug)]
pub struct FsModelSource {
    root: PathBuf,
}

impl FsModelSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read_manifest(&self, path: &str) -> Result<ModelAsset, ModelError> {
        let file = self.root.join(path);
        let text = std::fs::read_to_string(&file)
            .map_err(|e| ModelError::new(path, format!("read '{}': {e}", file.display())))?;
        let manifest: ModelManifest = serde_json::from_str(&text)
            .map_err(|e| ModelError::new(path, format!("parse: {e}")))?;

        let renderables = manifest
            .renderables
            .into_iter()
            .map(|r| ModelRenderable {
                mesh_name: r.mesh_name,
                mesh: MeshHandle(r.mesh),
                materials: r.materials.into_iter().map(MaterialHandle).collect(),
            })
            .collect();
        Ok(ModelAsset { renderables })
    }
}

impl ModelSource for FsModelSource {
    async fn load_model(&self, path: &str) -> Result<Arc<ModelAsset>, ModelError> {
        tracing::debug!(path, "loading model manifest");
        self.read_manifest(path).map(Arc::new)
    }
}
