//! Immutable per-part content: the sub-transform tree, model references and
//! trait declarations a part definition carries.

use serde::{Deserialize, Serialize};

/// Parent index meaning "the part's own root entity" rather than another
/// sub-transform.
pub const PART_ROOT: i32 = -1;

fn identity_quat() -> [f32; 4] {
    [0.0, 0.0, 0.0, 1.0]
}

fn unit_scale() -> [f32; 3] {
    [1.0; 3]
}

fn part_root() -> i32 {
    PART_ROOT
}

/// A named pivot/attachment point inside a part's local space.
///
/// `parent` is an index into the same list (or `PART_ROOT`); entries are
/// stored parents-first, so a child always references an earlier index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubTransform {
    #[serde(default)]
    pub local_position: [f32; 3],
    #[serde(default = "identity_quat")]
    pub local_rotation: [f32; 4],
    #[serde(default = "unit_scale")]
    pub local_scale: [f32; 3],
    #[serde(default = "part_root")]
    pub parent: i32,
}

/// Placement of one named mesh from a model onto a sub-transform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshInstance {
    #[serde(default = "part_root")]
    pub transform_index: i32,
    pub mesh_name: String,
}

/// Reference to a model asset plus where its meshes land in the part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub model_path: String,
    #[serde(default)]
    pub instances: Vec<MeshInstance>,
}

/// One gameplay trait declaration: which factory to invoke and the
/// serialized configuration it deserializes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitDescriptor {
    pub trait_type: String,
    #[serde(default)]
    pub config: serde_json::Value,
}

/// Everything a part contributes to an assembled vehicle, catalog-resident
/// and immutable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartPrefabData {
    #[serde(default)]
    pub transforms: Vec<SubTransform>,
    #[serde(default)]
    pub models: Vec<ModelDescriptor>,
    #[serde(default)]
    pub traits: Vec<TraitDescriptor>,
}
