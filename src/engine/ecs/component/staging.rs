use crate::engine::ecs::Entity;
use crate::engine::ecs::component::Component;

/// One activation stage: the part entities it fires, in listed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stage {
    pub parts: Vec<Entity>,
}

/// Ordered stage list attached to the vehicle root entity.
///
/// Stage 0 is the first to activate. A part may appear in several stages,
/// or in none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageBuffer {
    pub stages: Vec<Stage>,
}

impl StageBuffer {
    pub fn push(&mut self, stage: Stage) {
        self.stages.push(stage);
    }

    pub fn get(&self, index: usize) -> Option<&Stage> {
        self.stages.get(index)
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Component for StageBuffer {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn name(&self) -> &'static str {
        "stage_buffer"
    }
}
