//! Staging: convert staging groups (part indices) into stages (part
//! entities) once all parts exist.

use crate::engine::ecs::Entity;
use crate::engine::ecs::component::{Stage, StageBuffer};
use crate::engine::vehicle::error::AssemblyError;
use crate::engine::vehicle::spec::StagingGroup;

/// Build the ordered stage list from staging groups and the assembled part
/// entities. Group order is activation order; within a group, entity order
/// follows the group's index list. No deduplication across stages.
pub fn build_stages(groups: &[StagingGroup], parts: &[Entity]) -> Result<StageBuffer, AssemblyError> {
    let mut buffer = StageBuffer::default();
    for (stage_index, group) in groups.iter().enumerate() {
        let mut stage = Stage { parts: Vec::with_capacity(group.parts.len()) };
        for &part_index in &group.parts {
            let entity = parts.get(part_index).copied().ok_or(AssemblyError::StageIndexOutOfRange {
                stage: stage_index,
                index: part_index,
                len: parts.len(),
            })?;
            stage.parts.push(entity);
        }
        buffer.push(stage);
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ecs::World;

    fn group(parts: &[usize]) -> StagingGroup {
        StagingGroup { parts: parts.to_vec() }
    }

    #[test]
    fn stages_mirror_groups_in_order() {
        let mut world = World::new();
        let parts: Vec<_> = (0..3).map(|_| world.spawn()).collect();

        let buffer = build_stages(&[group(&[2, 0]), group(&[1]), group(&[])], &parts).unwrap();

        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.get(0).unwrap().parts, vec![parts[2], parts[0]]);
        assert_eq!(buffer.get(1).unwrap().parts, vec![parts[1]]);
        assert!(buffer.get(2).unwrap().parts.is_empty());
    }

    #[test]
    fn part_may_appear_in_several_stages() {
        let mut world = World::new();
        let parts = vec![world.spawn()];

        let buffer = build_stages(&[group(&[0]), group(&[0, 0])], &parts).unwrap();
        assert_eq!(buffer.get(1).unwrap().parts, vec![parts[0], parts[0]]);
    }

    #[test]
    fn index_one_past_the_end_is_out_of_range() {
        let mut world = World::new();
        let parts: Vec<_> = (0..2).map(|_| world.spawn()).collect();

        let err = build_stages(&[group(&[2])], &parts).unwrap_err();
        assert!(matches!(
            err,
            AssemblyError::StageIndexOutOfRange { stage: 0, index: 2, len: 2 }
        ));
    }
}
