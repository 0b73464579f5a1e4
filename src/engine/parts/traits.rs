//! Trait factory registry: maps a trait-type id to a factory that can
//! deserialize that trait's config and attach its runtime state to an
//! entity. New trait kinds register a factory; nothing else changes.

use std::collections::HashMap;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::engine::ecs::component::Component;
use crate::engine::ecs::{Entity, World};
use crate::engine::vehicle::error::AssemblyError;

/// Per-part-instance parameter overrides, keyed by field name.
pub type Tweakables = HashMap<String, serde_json::Value>;

/// Factory for one trait type.
pub trait TraitFactory {
    /// Deserialize `config` (with `tweakables` applied on top) and attach
    /// whatever components this trait needs to `target`.
    fn attach(
        &self,
        config: &serde_json::Value,
        tweakables: &Tweakables,
        target: Entity,
        world: &mut World,
    ) -> Result<(), AssemblyError>;
}

/// Factory that deserializes the config blob straight into a component `T`.
///
/// Tweakables are overlaid onto the config object field-by-field before
/// deserialization, so a per-instance value wins over the catalog default.
struct SerdeTraitFactory<T> {
    trait_type: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> SerdeTraitFactory<T> {
    fn new(trait_type: &'static str) -> Self {
        Self { trait_type, _marker: PhantomData }
    }
}

impl<T> TraitFactory for SerdeTraitFactory<T>
where
    T: Component + DeserializeOwned + 'static,
{
    fn attach(
        &self,
        config: &serde_json::Value,
        tweakables: &Tweakables,
        target: Entity,
        world: &mut World,
    ) -> Result<(), AssemblyError> {
        let mut config = config.clone();
        if !tweakables.is_empty() {
            if let serde_json::Value::Object(map) = &mut config {
                for (key, value) in tweakables {
                    map.insert(key.clone(), value.clone());
                }
            }
        }

        let component: T = serde_json::from_value(config).map_err(|e| {
            AssemblyError::TraitConfig { trait_type: self.trait_type.to_string(), source: e }
        })?;
        world.add_component(target, component);
        Ok(())
    }
}

/// Registry of trait factories keyed by trait-type id.
#[derive(Default)]
pub struct TraitRegistry {
    factories: HashMap<String, Box<dyn TraitFactory>>,
}

impl TraitRegistry {
    /// Empty registry; nothing attaches until factories are registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the built-in trait factories.
    pub fn with_builtin_traits() -> Self {
        let mut registry = Self::new();
        registry.register("engine", SerdeTraitFactory::<EngineTrait>::new("engine"));
        registry.register("fuel_tank", SerdeTraitFactory::<FuelTankTrait>::new("fuel_tank"));
        registry.register("decoupler", SerdeTraitFactory::<DecouplerTrait>::new("decoupler"));
        registry
    }

    /// Register (or replace) the factory for a trait type.
    pub fn register(&mut self, trait_type: impl Into<String>, factory: impl TraitFactory + 'static) {
        self.factories.insert(trait_type.into(), Box::new(factory));
    }

    pub fn factory_for(&self, trait_type: &str) -> Option<&dyn TraitFactory> {
        self.factories.get(trait_type).map(|f| f.as_ref())
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

/// Rocket engine trait state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineTrait {
    pub max_thrust: f32,
    pub specific_impulse: f32,
    #[serde(default)]
    pub gimbal_range: f32,
}

impl Component for EngineTrait {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn name(&self) -> &'static str {
        "engine"
    }
}

fn default_fuel_type() -> String {
    "kerosene".to_string()
}

/// Fuel tank trait state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelTankTrait {
    pub capacity: f32,
    #[serde(default = "default_fuel_type")]
    pub fuel_type: String,
}

impl Component for FuelTankTrait {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn name(&self) -> &'static str {
        "fuel_tank"
    }
}

/// Stage-separation decoupler trait state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecouplerTrait {
    pub ejection_impulse: f32,
}

impl Component for DecouplerTrait {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn name(&self) -> &'static str {
        "decoupler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builtin_factory_attaches_component() {
        let registry = TraitRegistry::with_builtin_traits();
        let mut world = World::new();
        let e = world.spawn();

        let config = json!({ "max_thrust": 205.0, "specific_impulse": 290.0 });
        registry
            .factory_for("engine")
            .unwrap()
            .attach(&config, &Tweakables::new(), e, &mut world)
            .unwrap();

        let engine = world.get_component::<EngineTrait>(e).unwrap();
        assert_eq!(engine.max_thrust, 205.0);
        assert_eq!(engine.gimbal_range, 0.0);
    }

    #[test]
    fn tweakables_override_config() {
        let registry = TraitRegistry::with_builtin_traits();
        let mut world = World::new();
        let e = world.spawn();

        let config = json!({ "capacity": 400.0, "fuel_type": "kerosene" });
        let mut tweakables = Tweakables::new();
        tweakables.insert("capacity".to_string(), json!(150.0));

        registry
            .factory_for("fuel_tank")
            .unwrap()
            .attach(&config, &tweakables, e, &mut world)
            .unwrap();

        let tank = world.get_component::<FuelTankTrait>(e).unwrap();
        assert_eq!(tank.capacity, 150.0);
        assert_eq!(tank.fuel_type, "kerosene");
    }

    #[test]
    fn bad_config_is_a_trait_config_error() {
        let registry = TraitRegistry::with_builtin_traits();
        let mut world = World::new();
        let e = world.spawn();

        let config = json!({ "max_thrust": "lots" });
        let err = registry
            .factory_for("engine")
            .unwrap()
            .attach(&config, &Tweakables::new(), e, &mut world)
            .unwrap_err();

        assert!(matches!(err, AssemblyError::TraitConfig { ref trait_type, .. } if trait_type == "engine"));
    }

    #[test]
    fn unknown_type_has_no_factory() {
        let registry = TraitRegistry::with_builtin_traits();
        assert!(registry.factory_for("warp_drive").is_none());
    }
}
