pub mod component;
pub mod entity;

mod world_tests;

use slotmap::SlotMap;
use thiserror::Error;

use crate::engine::ecs::component::Component;
pub use crate::engine::ecs::entity::{Entity, EntityRecord};

/// Errors from entity-graph surgery.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("no such entity: {0:?}")]
    NoSuchEntity(Entity),
    #[error("parenting {child:?} under {parent:?} would create a cycle")]
    WouldCycle { child: Entity, parent: Entity },
}

/// Entity store: a flat slotmap of entity records, each carrying its own
/// boxed components and parent/children links.
///
/// Parent relations form a forest; `set_parent` refuses to create cycles.
#[derive(Default)]
pub struct World {
    entities: SlotMap<Entity, EntityRecord>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh, empty entity.
    pub fn spawn(&mut self) -> Entity {
        self.entities.insert(EntityRecord::new())
    }

    /// Remove one entity. Its children are left alive and detached.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        let Some(record) = self.entities.remove(entity) else {
            return false;
        };
        if let Some(parent) = record.parent {
            if let Some(rec) = self.entities.get_mut(parent) {
                rec.children.retain(|&c| c != entity);
            }
        }
        for child in record.children {
            if let Some(rec) = self.entities.get_mut(child) {
                rec.parent = None;
            }
        }
        true
    }

    /// Remove an entity and every descendant.
    pub fn despawn_subtree(&mut self, entity: Entity) -> bool {
        let Some(record) = self.entities.get(entity) else {
            return false;
        };
        let children = record.children.clone();
        for child in children {
            self.despawn_subtree(child);
        }
        self.despawn(entity)
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains_key(entity)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Attach a component to an entity. No-op if the entity is gone.
    pub fn add_component(&mut self, entity: Entity, component: impl Component + 'static) {
        self.add_component_boxed(entity, Box::new(component));
    }

    pub fn add_component_boxed(&mut self, entity: Entity, component: Box<dyn Component>) {
        if let Some(record) = self.entities.get_mut(entity) {
            record.components.push(component);
        }
    }

    /// First component of type `T` on the entity, if any.
    pub fn get_component<T: 'static>(&self, entity: Entity) -> Option<&T> {
        self.entities.get(entity)?.components.iter().find_map(|c| c.as_any().downcast_ref::<T>())
    }

    pub fn get_component_mut<T: 'static>(&mut self, entity: Entity) -> Option<&mut T> {
        self.entities
            .get_mut(entity)?
            .components
            .iter_mut()
            .find_map(|c| c.as_any_mut().downcast_mut::<T>())
    }

    pub fn has_component<T: 'static>(&self, entity: Entity) -> bool {
        self.get_component::<T>(entity).is_some()
    }

    /// Component kind names on an entity, in attach order.
    pub fn component_names(&self, entity: Entity) -> Vec<&'static str> {
        self.entities
            .get(entity)
            .map(|r| r.components.iter().map(|c| c.name()).collect())
            .unwrap_or_default()
    }

    /// Re-parent `child` under `parent` (or detach with `None`).
    pub fn set_parent(&mut self, child: Entity, parent: Option<Entity>) -> Result<(), WorldError> {
        if !self.entities.contains_key(child) {
            return Err(WorldError::NoSuchEntity(child));
        }
        if let Some(p) = parent {
            if !self.entities.contains_key(p) {
                return Err(WorldError::NoSuchEntity(p));
            }
            // Walk up from the new parent; hitting `child` means a cycle.
            let mut cursor = Some(p);
            while let Some(cur) = cursor {
                if cur == child {
                    return Err(WorldError::WouldCycle { child, parent: p });
                }
                cursor = self.entities.get(cur).and_then(|r| r.parent);
            }
        }

        if let Some(old) = self.entities[child].parent {
            if let Some(rec) = self.entities.get_mut(old) {
                rec.children.retain(|&c| c != child);
            }
        }
        self.entities[child].parent = parent;
        if let Some(p) = parent {
            if let Some(rec) = self.entities.get_mut(p) {
                rec.children.push(child);
            }
        }
        Ok(())
    }

    /// All live entities, in no particular order.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.keys()
    }

    pub fn parent_of(&self, entity: Entity) -> Option<Entity> {
        self.entities.get(entity).and_then(|r| r.parent)
    }

    /// Children in attach order.
    pub fn children_of(&self, entity: Entity) -> &[Entity] {
        static EMPTY: [Entity; 0] = [];
        self.entities.get(entity).map(|r| r.children.as_slice()).unwrap_or(&EMPTY)
    }
}
