//! Per-part transform hierarchy: one entity per sub-transform, wired
//! parent-to-child through an index map seeded with the part root.

use crate::engine::ecs::component::LocalTransform;
use crate::engine::ecs::{Entity, World};
use crate::engine::parts::{PART_ROOT, PartPrefabData};
use crate::engine::vehicle::assembler::AssemblySession;
use crate::engine::vehicle::error::AssemblyError;

/// Transient map from sub-transform index to the entity created for it.
///
/// Indices are dense and bounded by the part's sub-transform count, so the
/// slots are a plain array; `PART_ROOT` resolves to the part's root entity.
/// One map lives per part instance and is discarded once attachment ends.
#[derive(Debug)]
pub struct HierarchyMap {
    root: Entity,
    slots: Vec<Entity>,
}

impl HierarchyMap {
    pub fn new(root: Entity) -> Self {
        Self { root, slots: Vec::new() }
    }

    pub fn with_capacity(root: Entity, capacity: usize) -> Self {
        Self { root, slots: Vec::with_capacity(capacity) }
    }

    /// The part's own root entity (the `PART_ROOT` slot).
    pub fn root(&self) -> Entity {
        self.root
    }

    /// Record the entity for the next sub-transform index.
    pub fn push(&mut self, entity: Entity) {
        self.slots.push(entity);
    }

    /// Resolve an index to its entity. `PART_ROOT` is the part root; other
    /// indices must already have been pushed.
    pub fn resolve(&self, index: i32) -> Option<Entity> {
        if index == PART_ROOT {
            return Some(self.root);
        }
        usize::try_from(index).ok().and_then(|i| self.slots.get(i).copied())
    }

    /// Number of sub-transform entities recorded so far.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Create one entity per sub-transform, in list order, each parented to an
/// already-created entity.
///
/// Entries are stored parents-first; a parent reference that is neither the
/// sentinel nor an already-created index is a `DanglingParentReference`.
/// Entity scale comes from the first axis of the entry's local scale
/// (non-uniform scale is not supported).
pub fn build_hierarchy(
    world: &mut World,
    session: &mut AssemblySession,
    part_index: usize,
    part_root: Entity,
    prefab: &PartPrefabData,
) -> Result<HierarchyMap, AssemblyError> {
    let mut hierarchy = HierarchyMap::with_capacity(part_root, prefab.transforms.len());

    for (index, sub) in prefab.transforms.iter().enumerate() {
        let parent = hierarchy.resolve(sub.parent).ok_or(AssemblyError::DanglingParentReference {
            part: part_index,
            index,
            parent: sub.parent,
        })?;

        let entity = session.spawn(world);
        world.add_component(
            entity,
            LocalTransform::new(sub.local_position, sub.local_rotation, sub.local_scale[0]),
        );
        world.set_parent(entity, Some(parent))?;
        hierarchy.push(entity);
    }

    Ok(hierarchy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::parts::SubTransform;

    fn sub(parent: i32, scale: [f32; 3]) -> SubTransform {
        SubTransform {
            local_position: [0.0; 3],
            local_rotation: [0.0, 0.0, 0.0, 1.0],
            local_scale: scale,
            parent,
        }
    }

    #[test]
    fn creates_one_entity_per_sub_transform() {
        let mut world = World::new();
        let mut session = AssemblySession::default();
        let root = session.spawn(&mut world);

        let prefab = PartPrefabData {
            transforms: vec![sub(PART_ROOT, [1.0; 3]), sub(0, [1.0; 3]), sub(1, [1.0; 3])],
            ..Default::default()
        };

        let hierarchy = build_hierarchy(&mut world, &mut session, 0, root, &prefab).unwrap();

        assert_eq!(hierarchy.len(), 3);
        assert_eq!(world.len(), 4);

        let a = hierarchy.resolve(0).unwrap();
        let b = hierarchy.resolve(1).unwrap();
        let c = hierarchy.resolve(2).unwrap();
        assert_eq!(world.parent_of(a), Some(root));
        assert_eq!(world.parent_of(b), Some(a));
        assert_eq!(world.parent_of(c), Some(b));
    }

    #[test]
    fn scale_comes_from_first_axis() {
        let mut world = World::new();
        let mut session = AssemblySession::default();
        let root = session.spawn(&mut world);

        let prefab = PartPrefabData {
            transforms: vec![sub(PART_ROOT, [2.0, 5.0, 9.0])],
            ..Default::default()
        };

        let hierarchy = build_hierarchy(&mut world, &mut session, 0, root, &prefab).unwrap();
        let t = world
            .get_component::<LocalTransform>(hierarchy.resolve(0).unwrap())
            .unwrap();
        assert_eq!(t.scale, 2.0);
    }

    #[test]
    fn forward_reference_is_dangling() {
        let mut world = World::new();
        let mut session = AssemblySession::default();
        let root = session.spawn(&mut world);

        // Entry 0 references entry 1, which does not exist yet.
        let prefab = PartPrefabData {
            transforms: vec![sub(1, [1.0; 3]), sub(PART_ROOT, [1.0; 3])],
            ..Default::default()
        };

        let err = build_hierarchy(&mut world, &mut session, 7, root, &prefab).unwrap_err();
        assert!(matches!(
            err,
            AssemblyError::DanglingParentReference { part: 7, index: 0, parent: 1 }
        ));
    }

    #[test]
    fn self_reference_is_dangling() {
        let mut world = World::new();
        let mut session = AssemblySession::default();
        let root = session.spawn(&mut world);

        let prefab = PartPrefabData {
            transforms: vec![sub(0, [1.0; 3])],
            ..Default::default()
        };

        assert!(matches!(
            build_hierarchy(&mut world, &mut session, 0, root, &prefab).unwrap_err(),
            AssemblyError::DanglingParentReference { .. }
        ));
    }

    #[test]
    fn resolve_out_of_range_is_none() {
        let mut world = World::new();
        let root = world.spawn();
        let mut hierarchy = HierarchyMap::new(root);
        hierarchy.push(world.spawn());

        assert_eq!(hierarchy.resolve(PART_ROOT), Some(root));
        assert!(hierarchy.resolve(1).is_none());
        assert!(hierarchy.resolve(-2).is_none());
    }
}
