use crate::engine::ecs::component::Component;

/// Local transform relative to the parent entity.
///
/// Scale is uniform; non-uniform scale is not supported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalTransform {
    pub translation: [f32; 3],
    pub rotation: [f32; 4], // quat xyzw
    pub scale: f32,
}

impl LocalTransform {
    pub const IDENTITY: Self = Self {
        translation: [0.0; 3],
        rotation: [0.0, 0.0, 0.0, 1.0],
        scale: 1.0,
    };

    pub fn new(translation: [f32; 3], rotation: [f32; 4], scale: f32) -> Self {
        Self { translation, rotation, scale }
    }
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Component for LocalTransform {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn name(&self) -> &'static str {
        "local_transform"
    }
}
