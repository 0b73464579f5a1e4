use crate::engine::ecs::component::Component;
use crate::engine::graphics::{MaterialHandle, MeshHandle, ModelRenderable};

/// One material slot of a render binding: which material goes with which
/// mesh in the binding's arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialSlot {
    pub material_index: u32,
    pub mesh_index: u32,
}

/// Mesh/material binding attached to a transform entity.
///
/// The binding carries one mesh, one material per slot on the source
/// renderable, and a slot table so multi-material meshes keep their slot
/// order. Drawing itself is the host renderer's job.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderBinding {
    pub mesh: MeshHandle,
    pub materials: Vec<MaterialHandle>,
    pub slots: Vec<MaterialSlot>,
}

impl RenderBinding {
    /// Build a binding from a resolved model renderable: every material slot
    /// gets an entry, all pointing at the single mesh.
    pub fn from_renderable(renderable: &ModelRenderable) -> Self {
        let slots = (0..renderable.materials.len() as u32)
            .map(|i| MaterialSlot { material_index: i, mesh_index: 0 })
            .collect();
        Self {
            mesh: renderable.mesh,
            materials: renderable.materials.clone(),
            slots,
        }
    }
}

impl Component for RenderBinding {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn name(&self) -> &'static str {
        "render_binding"
    }
}
