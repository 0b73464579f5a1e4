//! Part catalog: id -> definition metadata -> prefab content.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::engine::parts::prefab::PartPrefabData;

/// Catalog-resident part metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartDefinition {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("read part file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse part file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate part id {id} in '{path}'")]
    DuplicateId { id: Uuid, path: String },
}

/// On-disk shape of one part file: definition metadata plus prefab content.
#[derive(Debug, Deserialize)]
struct PartFile {
    id: Uuid,
    name: String,
    #[serde(flatten)]
    prefab: PartPrefabData,
}

/// Lookup from part-definition id to its metadata and prefab data.
#[derive(Debug, Default)]
pub struct PartCatalog {
    definitions: HashMap<Uuid, PartDefinition>,
    prefabs: HashMap<Uuid, PartPrefabData>,
}

impl PartCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a part programmatically (tests, generated content).
    pub fn register(&mut self, definition: PartDefinition, prefab: PartPrefabData) {
        self.prefabs.insert(definition.id, prefab);
        self.definitions.insert(definition.id, definition);
    }

    /// Load every `*.json` part file under `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let mut catalog = Self::new();

        let entries = std::fs::read_dir(dir).map_err(|e| CatalogError::Io {
            path: dir.display().to_string(),
            source: e,
        })?;

        // Sorted so load order (and first-duplicate reporting) is stable.
        let mut paths: Vec<_> = entries
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        for path in paths {
            let display = path.display().to_string();
            let text = std::fs::read_to_string(&path)
                .map_err(|e| CatalogError::Io { path: display.clone(), source: e })?;
            let part: PartFile = serde_json::from_str(&text)
                .map_err(|e| CatalogError::Parse { path: display.clone(), source: e })?;

            if catalog.definitions.contains_key(&part.id) {
                return Err(CatalogError::DuplicateId { id: part.id, path: display });
            }
            tracing::debug!(part = %part.name, id = %part.id, "registered part");
            catalog.register(PartDefinition { id: part.id, name: part.name }, part.prefab);
        }

        Ok(catalog)
    }

    pub fn get_part(&self, id: Uuid) -> Option<&PartDefinition> {
        self.definitions.get(&id)
    }

    pub fn prefab_data(&self, definition: &PartDefinition) -> Option<&PartPrefabData> {
        self.prefabs.get(&definition.id)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_lookup() {
        let id = Uuid::new_v4();
        let mut catalog = PartCatalog::new();
        catalog.register(
            PartDefinition { id, name: "strut".to_string() },
            PartPrefabData::default(),
        );

        let def = catalog.get_part(id).unwrap();
        assert_eq!(def.name, "strut");
        assert!(catalog.prefab_data(def).is_some());
        assert!(catalog.get_part(Uuid::new_v4()).is_none());
    }

    #[test]
    fn part_file_decodes_with_defaults() {
        let json = r#"{
            "id": "9cdd1a9e-1a3a-4b9d-9e84-7a0c2c6d3a01",
            "name": "nose-cone",
            "transforms": [{ "local_position": [0.0, 1.0, 0.0] }]
        }"#;
        let part: PartFile = serde_json::from_str(json).unwrap();

        assert_eq!(part.name, "nose-cone");
        assert_eq!(part.prefab.transforms.len(), 1);
        assert_eq!(part.prefab.transforms[0].parent, crate::engine::parts::PART_ROOT);
        assert_eq!(part.prefab.transforms[0].local_scale, [1.0; 3]);
        assert!(part.prefab.models.is_empty());
        assert!(part.prefab.traits.is_empty());
    }
}
