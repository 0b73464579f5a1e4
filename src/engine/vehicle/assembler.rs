//! Top-level vehicle assembly: root entity, per-part construction loop,
//! staging, and the failure/rollback policy around all of it.

use tracing::{debug, info, warn};

use crate::engine::ecs::component::LocalTransform;
use crate::engine::ecs::{Entity, World};
use crate::engine::graphics::ModelSource;
use crate::engine::parts::{PartCatalog, PartPrefabData, TraitRegistry};
use crate::engine::vehicle::error::AssemblyError;
use crate::engine::vehicle::hierarchy::build_hierarchy;
use crate::engine::vehicle::renderable::{MeshMatchPolicy, attach_renderables};
use crate::engine::vehicle::spec::{PartInstance, VehicleSpec};
use crate::engine::vehicle::staging::build_stages;

/// Handle to an assembled vehicle: its root entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleHandle(pub Entity);

/// What to do with the partial entity graph when assembly fails mid-way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Despawn everything the failed assembly created.
    #[default]
    Rollback,
    /// Leave the partial graph in the world; the caller owns the cleanup
    /// (see `dismantle`).
    KeepPartial,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssemblyOptions {
    pub mesh_match: MeshMatchPolicy,
    pub on_failure: FailurePolicy,
}

/// Tracks every entity one assembly creates, so a failed run can be undone.
#[derive(Debug, Default)]
pub struct AssemblySession {
    created: Vec<Entity>,
}

impl AssemblySession {
    /// Spawn an entity and remember it.
    pub fn spawn(&mut self, world: &mut World) -> Entity {
        let entity = world.spawn();
        self.created.push(entity);
        entity
    }

    pub fn created(&self) -> usize {
        self.created.len()
    }

    /// Despawn everything this session created.
    pub fn rollback(self, world: &mut World) {
        for entity in self.created.into_iter().rev() {
            world.despawn(entity);
        }
    }
}

/// Builds playable vehicles from craft specifications.
///
/// Assembly is one logical transaction on a single task: the only suspension
/// point is model resolution, and parts are processed strictly in spec
/// order. Callers must not read the vehicle's entities until `assemble`
/// returns. Dropping the returned future at a suspension point leaves a
/// partial graph behind; `dismantle` tears such a graph down.
pub struct VehicleAssembler<'a, S: ModelSource> {
    catalog: &'a PartCatalog,
    traits: &'a TraitRegistry,
    models: &'a S,
    options: AssemblyOptions,
}

impl<'a, S: ModelSource> VehicleAssembler<'a, S> {
    pub fn new(catalog: &'a PartCatalog, traits: &'a TraitRegistry, models: &'a S) -> Self {
        Self { catalog, traits, models, options: AssemblyOptions::default() }
    }

    pub fn with_options(mut self, options: AssemblyOptions) -> Self {
        self.options = options;
        self
    }

    /// Assemble the whole craft into `world` and return the root entity.
    ///
    /// Any structural error aborts the vehicle; what happens to the
    /// already-created entities follows `AssemblyOptions::on_failure`.
    pub async fn assemble(
        &self,
        world: &mut World,
        spec: &VehicleSpec,
    ) -> Result<VehicleHandle, AssemblyError> {
        let mut session = AssemblySession::default();
        match self.assemble_inner(world, spec, &mut session).await {
            Ok(handle) => Ok(handle),
            Err(error) => {
                match self.options.on_failure {
                    FailurePolicy::Rollback => {
                        warn!(%error, entities = session.created(), "assembly failed, rolling back");
                        session.rollback(world);
                    }
                    FailurePolicy::KeepPartial => {
                        warn!(%error, entities = session.created(), "assembly failed, keeping partial graph");
                    }
                }
                Err(error)
            }
        }
    }

    async fn assemble_inner(
        &self,
        world: &mut World,
        spec: &VehicleSpec,
        session: &mut AssemblySession,
    ) -> Result<VehicleHandle, AssemblyError> {
        let root = session.spawn(world);
        world.add_component(root, LocalTransform::IDENTITY);

        let mut parts: Vec<Entity> = Vec::with_capacity(spec.parts.len());
        for (part_index, instance) in spec.parts.iter().enumerate() {
            let part_entity = session.spawn(world);
            parts.push(part_entity);

            let definition = self
                .catalog
                .get_part(instance.part)
                .ok_or(AssemblyError::UnknownPartDefinition(instance.part))?;
            let prefab = self
                .catalog
                .prefab_data(definition)
                .ok_or(AssemblyError::UnknownPartDefinition(instance.part))?;
            debug!(part = %definition.name, index = part_index, "assembling part");

            let hierarchy = build_hierarchy(world, session, part_index, part_entity, prefab)?;

            world.add_component(
                part_entity,
                LocalTransform::new(instance.local_position, instance.local_rotation, 1.0),
            );
            world.set_parent(part_entity, Some(root))?;

            self.attach_traits(world, instance, prefab, part_entity)?;

            attach_renderables(world, self.models, prefab, &hierarchy, self.options.mesh_match)
                .await?;
        }

        let stages = build_stages(&spec.staging_groups, &parts)?;
        info!(parts = parts.len(), stages = stages.len(), "vehicle assembled");
        world.add_component(root, stages);

        Ok(VehicleHandle(root))
    }

    fn attach_traits(
        &self,
        world: &mut World,
        instance: &PartInstance,
        prefab: &PartPrefabData,
        target: Entity,
    ) -> Result<(), AssemblyError> {
        for descriptor in &prefab.traits {
            let factory = self
                .traits
                .factory_for(&descriptor.trait_type)
                .ok_or_else(|| AssemblyError::UnknownTraitType(descriptor.trait_type.clone()))?;
            factory.attach(&descriptor.config, &instance.tweakables, target, world)?;
        }
        Ok(())
    }
}

/// Tear down an assembled (or abandoned) vehicle: the root entity and every
/// descendant part and sub-transform.
pub fn dismantle(world: &mut World, handle: VehicleHandle) -> bool {
    world.despawn_subtree(handle.0)
}
