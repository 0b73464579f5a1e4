pub mod catalog;
pub mod prefab;
pub mod traits;

pub use catalog::{CatalogError, PartCatalog, PartDefinition};
pub use prefab::{MeshInstance, ModelDescriptor, PART_ROOT, PartPrefabData, SubTransform, TraitDescriptor};
pub use traits::{TraitFactory, TraitRegistry, Tweakables};
