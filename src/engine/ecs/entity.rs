use slotmap::new_key_type;

use crate::engine::ecs::component::Component;

new_key_type! {
    /// Opaque handle to an entity stored in a `World`.
    ///
    /// An entity has no identity beyond this key; everything interesting
    /// lives in its components and its parent/children links.
    pub struct Entity;
}

/// World-owned record for one entity: its component payloads plus topology.
pub struct EntityRecord {
    pub components: Vec<Box<dyn Component>>,
    pub parent: Option<Entity>,
    pub children: Vec<Entity>,
}

impl EntityRecord {
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
            parent: None,
            children: Vec::new(),
        }
    }
}

impl Default for EntityRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for EntityRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EntityRecord")
            .field("components", &self.components.len())
            .field("parent", &self.parent)
            .field("children", &self.children)
            .finish()
    }
}
