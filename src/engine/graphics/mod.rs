pub mod model_library;

pub use model_library::{FsModelSource, ModelError, ModelLibrary, ModelSource};

/// Renderer-owned mesh resource handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u32);

/// Renderer-owned material handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialHandle(pub u32);

/// One named renderable inside a resolved model: a mesh plus its material
/// slots, in slot order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRenderable {
    pub mesh_name: String,
    pub mesh: MeshHandle,
    pub materials: Vec<MaterialHandle>,
}

/// A resolved model asset as the host renderer exposes it: the renderables
/// it contains, addressable by mesh name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelAsset {
    pub renderables: Vec<ModelRenderable>,
}

impl ModelAsset {
    /// All renderables whose mesh name matches, in model order.
    pub fn renderables_named<'a>(
        &'a self,
        mesh_name: &'a str,
    ) -> impl Iterator<Item = &'a ModelRenderable> {
        self.renderables.iter().filter(move |r| r.mesh_name == mesh_name)
    }
}
