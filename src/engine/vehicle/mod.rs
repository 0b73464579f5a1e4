//! Vehicle assembly: turns a declarative craft specification into an entity
//! hierarchy (one root, one entity per part, one per sub-transform) with
//! traits, render bindings and staging attached.

pub mod assembler;
pub mod error;
pub mod hierarchy;
pub mod renderable;
pub mod spec;
pub mod staging;


pub use assembler::{AssemblyOptions, FailurePolicy, VehicleAssembler, VehicleHandle, dismantle};
pub use error::AssemblyError;
pub use hierarchy::HierarchyMap;
pub use renderable::MeshMatchPolicy;
pub use spec::{PartInstance, SpecError, StagingGroup, VehicleSpec};
