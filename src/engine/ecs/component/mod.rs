pub mod render_binding;
pub mod staging;
pub mod transform;

pub use render_binding::{MaterialSlot, RenderBinding};
pub use staging::{Stage, StageBuffer};
pub use transform::LocalTransform;

/// Component interface.
///
/// Components are plain data attached to an entity; the `as_any` pair exists
/// so `World` can hand back typed references from its boxed storage.
pub trait Component: std::any::Any {
    fn as_any(&self) -> &dyn std::any::Any;
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;

    /// Short debug/type name for this component kind (e.g. "local_transform").
    fn name(&self) -> &'static str;
}
