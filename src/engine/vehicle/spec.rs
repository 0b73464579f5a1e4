//! The declarative craft specification: which parts, where, and how they
//! group into activation stages. Produced by an upstream editor/serializer;
//! immutable during assembly.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::engine::parts::Tweakables;

fn identity_quat() -> [f32; 4] {
    [0.0, 0.0, 0.0, 1.0]
}

/// One placed part: which definition, and its offset from the vehicle root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartInstance {
    pub part: Uuid,
    #[serde(default)]
    pub local_position: [f32; 3],
    #[serde(default = "identity_quat")]
    pub local_rotation: [f32; 4],
    /// Per-instance parameter overrides handed to trait factories.
    #[serde(default)]
    pub tweakables: Tweakables,
}

/// Indices into the craft's part list, in activation order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StagingGroup {
    pub parts: Vec<usize>,
}

/// A whole craft: ordered part instances plus staging groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VehicleSpec {
    #[serde(default)]
    pub parts: Vec<PartInstance>,
    #[serde(default)]
    pub staging_groups: Vec<StagingGroup>,
}

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("read craft file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse craft file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl VehicleSpec {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SpecError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let text = std::fs::read_to_string(path)
            .map_err(|e| SpecError::Io { path: display.clone(), source: e })?;
        serde_json::from_str(&text).map_err(|e| SpecError::Parse { path: display, source: e })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_with_defaults() {
        let json = r#"{
            "parts": [{ "part": "9cdd1a9e-1a3a-4b9d-9e84-7a0c2c6d3a01" }],
            "staging_groups": [{ "parts": [0] }]
        }"#;
        let spec: VehicleSpec = serde_json::from_str(json).unwrap();

        assert_eq!(spec.parts.len(), 1);
        assert_eq!(spec.parts[0].local_position, [0.0; 3]);
        assert_eq!(spec.parts[0].local_rotation, [0.0, 0.0, 0.0, 1.0]);
        assert!(spec.parts[0].tweakables.is_empty());
        assert_eq!(spec.staging_groups[0].parts, vec![0]);
    }

    #[test]
    fn empty_spec_is_valid() {
        let spec: VehicleSpec = serde_json::from_str("{}").unwrap();
        assert!(spec.parts.is_empty());
        assert!(spec.staging_groups.is_empty());
    }
}
