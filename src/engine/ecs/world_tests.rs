#[cfg(test)]
mod tests {
    use crate::engine::ecs::component::{LocalTransform, StageBuffer};
    use crate::engine::ecs::{World, WorldError};

    #[test]
    fn set_parent_links_both_sides() {
        let mut w = World::new();

        let p = w.spawn();
        let c = w.spawn();

        w.set_parent(c, Some(p)).unwrap();

        assert_eq!(w.parent_of(c), Some(p));
        assert!(w.children_of(p).contains(&c));
    }

    #[test]
    fn set_parent_none_detaches() {
        let mut w = World::new();

        let p = w.spawn();
        let c = w.spawn();

        w.set_parent(c, Some(p)).unwrap();
        w.set_parent(c, None).unwrap();

        assert_eq!(w.parent_of(c), None);
        assert!(!w.children_of(p).contains(&c));
    }

    #[test]
    fn prevent_cycles() {
        let mut w = World::new();

        let a = w.spawn();
        let b = w.spawn();

        w.set_parent(b, Some(a)).unwrap();

        // Can't make an ancestor a child of its descendant.
        assert_eq!(
            w.set_parent(a, Some(b)),
            Err(WorldError::WouldCycle { child: a, parent: b })
        );
    }

    #[test]
    fn reparent_moves_between_children_lists() {
        let mut w = World::new();

        let p1 = w.spawn();
        let p2 = w.spawn();
        let c = w.spawn();

        w.set_parent(c, Some(p1)).unwrap();
        w.set_parent(c, Some(p2)).unwrap();

        assert!(!w.children_of(p1).contains(&c));
        assert!(w.children_of(p2).contains(&c));
    }

    #[test]
    fn despawn_detaches_children() {
        let mut w = World::new();

        let p = w.spawn();
        let c = w.spawn();
        w.set_parent(c, Some(p)).unwrap();

        assert!(w.despawn(p));
        assert!(w.contains(c));
        assert_eq!(w.parent_of(c), None);
    }

    #[test]
    fn despawn_subtree_deletes_descendants() {
        let mut w = World::new();

        let root = w.spawn();
        let child = w.spawn();
        let grandchild = w.spawn();

        w.set_parent(child, Some(root)).unwrap();
        w.set_parent(grandchild, Some(child)).unwrap();

        assert!(w.despawn_subtree(root));

        assert!(!w.contains(root));
        assert!(!w.contains(child));
        assert!(!w.contains(grandchild));
        assert!(w.is_empty());
    }

    #[test]
    fn component_downcast_roundtrip() {
        let mut w = World::new();

        let e = w.spawn();
        w.add_component(e, LocalTransform::new([1.0, 2.0, 3.0], [0.0, 0.0, 0.0, 1.0], 2.0));

        let t = w.get_component::<LocalTransform>(e).unwrap();
        assert_eq!(t.translation, [1.0, 2.0, 3.0]);
        assert_eq!(t.scale, 2.0);

        assert!(!w.has_component::<StageBuffer>(e));

        w.get_component_mut::<LocalTransform>(e).unwrap().scale = 3.0;
        assert_eq!(w.get_component::<LocalTransform>(e).unwrap().scale, 3.0);
    }

    #[test]
    fn component_names_in_attach_order() {
        let mut w = World::new();

        let e = w.spawn();
        w.add_component(e, LocalTransform::default());
        w.add_component(e, StageBuffer::default());

        assert_eq!(w.component_names(e), vec!["local_transform", "stage_buffer"]);
    }
}
