//! Renderable attachment: resolve each model a part references and bind its
//! meshes/materials onto the right transform entities.

use crate::engine::ecs::World;
use crate::engine::ecs::component::RenderBinding;
use crate::engine::graphics::{ModelAsset, ModelRenderable, ModelSource};
use crate::engine::parts::PartPrefabData;
use crate::engine::vehicle::error::AssemblyError;
use crate::engine::vehicle::hierarchy::HierarchyMap;

/// How to pick a renderable when a model holds several meshes with the same
/// name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MeshMatchPolicy {
    /// Take the first match in model order.
    #[default]
    FirstMatch,
    /// Duplicates are an error (`AmbiguousMesh`).
    RequireUnique,
}

fn find_renderable<'a>(
    asset: &'a ModelAsset,
    path: &str,
    mesh_name: &'a str,
    policy: MeshMatchPolicy,
) -> Result<&'a ModelRenderable, AssemblyError> {
    let mut matches = asset.renderables_named(mesh_name);
    let first = matches.next().ok_or_else(|| AssemblyError::MeshNotFound {
        path: path.to_string(),
        mesh: mesh_name.to_string(),
    })?;
    if policy == MeshMatchPolicy::RequireUnique && matches.next().is_some() {
        return Err(AssemblyError::AmbiguousMesh {
            path: path.to_string(),
            mesh: mesh_name.to_string(),
        });
    }
    Ok(first)
}

/// Resolve every model the part references and attach a `RenderBinding` per
/// mesh instance. Suspends while each model resolves; bindings attached
/// before a failure stay attached.
pub async fn attach_renderables<S: ModelSource>(
    world: &mut World,
    models: &S,
    prefab: &PartPrefabData,
    hierarchy: &HierarchyMap,
    policy: MeshMatchPolicy,
) -> Result<(), AssemblyError> {
    for descriptor in &prefab.models {
        let asset = models.load_model(&descriptor.model_path).await.map_err(|e| {
            AssemblyError::AssetResolutionFailed { path: e.path, reason: e.reason }
        })?;

        for instance in &descriptor.instances {
            let target = hierarchy
                .resolve(instance.transform_index)
                .ok_or(AssemblyError::MissingTransformIndex { index: instance.transform_index })?;

            let renderable =
                find_renderable(&asset, &descriptor.model_path, &instance.mesh_name, policy)?;

            tracing::trace!(
                mesh = %instance.mesh_name,
                materials = renderable.materials.len(),
                "binding renderable"
            );
            world.add_component(target, RenderBinding::from_renderable(renderable));
        }
    }
    Ok(())
}
