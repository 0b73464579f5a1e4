use thiserror::Error;
use uuid::Uuid;

use crate::engine::ecs::WorldError;

/// Structural failures while assembling a vehicle.
///
/// All of these mean the specification or catalog data is inconsistent;
/// none are transient. Any of them aborts the current assembly.
#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("unknown part definition {0}")]
    UnknownPartDefinition(Uuid),

    #[error("no trait factory registered for trait type '{0}'")]
    UnknownTraitType(String),

    #[error("part {part}: sub-transform {index} references parent {parent}, which is not created yet")]
    DanglingParentReference { part: usize, index: usize, parent: i32 },

    #[error("model instance targets transform index {index}, which is not in the hierarchy")]
    MissingTransformIndex { index: i32 },

    #[error("model '{path}' has no renderable with mesh name '{mesh}'")]
    MeshNotFound { path: String, mesh: String },

    #[error("model '{path}' has more than one renderable with mesh name '{mesh}'")]
    AmbiguousMesh { path: String, mesh: String },

    #[error("staging group {stage} references part index {index}, but the vehicle has {len} parts")]
    StageIndexOutOfRange { stage: usize, index: usize, len: usize },

    #[error("failed to resolve model '{path}': {reason}")]
    AssetResolutionFailed { path: String, reason: String },

    #[error("trait '{trait_type}': invalid config: {source}")]
    TraitConfig {
        trait_type: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    World(#[from] WorldError),
}
