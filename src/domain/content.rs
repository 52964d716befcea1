//! Content registry - runtime view of the particle catalog
//!
//! The registry is built once at startup, either from the compiled-in tables
//! or from a JSON content bundle, and is read-only afterwards. Lookups go
//! through a dense `Vec` indexed by particle id; bundles are validated so an
//! id that passes `is_valid_particle_id` always has an entry.

use std::collections::HashMap;

use serde::Deserialize;

use crate::particles::{
    pack_abgr, BehaviorKind, ParticleId, ParticleProps, BEHAVIOR_BY_ID, PARTICLE_COUNT,
    PARTICLE_DATA, PARTICLE_KEYS, PT_EMPTY,
};

#[derive(Clone, Debug)]
pub struct ContentRegistry {
    props: Vec<ParticleProps>,
    behaviors: Vec<BehaviorKind>,
    key_to_id: HashMap<String, ParticleId>,
}

impl ContentRegistry {
    /// Registry backed by the compiled-in tables.
    pub fn from_builtin() -> Self {
        let mut key_to_id = HashMap::new();
        for (id, key) in PARTICLE_KEYS.iter().enumerate() {
            key_to_id.insert((*key).to_string(), id as ParticleId);
        }

        let registry = Self {
            props: PARTICLE_DATA.to_vec(),
            behaviors: BEHAVIOR_BY_ID.to_vec(),
            key_to_id,
        };
        debug_assert!(registry.validate().is_ok());
        registry
    }

    /// Parse and validate a JSON content bundle.
    ///
    /// Bundles may extend the catalog with new kinds but must keep the
    /// builtin ids in place: ids have to form an unbroken 0..len range and
    /// cover at least the builtin set.
    pub fn from_bundle_json(json: &str) -> Result<Self, String> {
        let bundle: BundleRoot = serde_json::from_str(json).map_err(|e| e.to_string())?;

        let count = bundle.particles.len();
        if count < PARTICLE_COUNT {
            return Err(format!(
                "bundle defines {count} kinds, at least {PARTICLE_COUNT} required"
            ));
        }
        if count > ParticleId::MAX as usize + 1 {
            return Err(format!("bundle defines {count} kinds, ids must fit in a byte"));
        }

        let mut props = vec![PARTICLE_DATA[PT_EMPTY as usize]; count];
        let mut behaviors = vec![BehaviorKind::None; count];
        let mut seen = vec![false; count];
        let mut key_to_id = HashMap::new();

        for entry in &bundle.particles {
            let idx = entry.id as usize;
            if idx >= count {
                return Err(format!(
                    "particle '{}' has id {} outside 0..{count}",
                    entry.key, entry.id
                ));
            }
            if seen[idx] {
                return Err(format!("duplicate particle id {}", entry.id));
            }
            seen[idx] = true;

            let [r, g, b, a] = entry.color;
            props[idx] = ParticleProps {
                color: pack_abgr(r, g, b, a),
                movable: entry.movable,
                flammable: entry.flammable,
                mass: entry.mass,
                default_temp: entry.temperature,
                conductivity: entry.conductivity,
                viscosity: entry.viscosity,
                lifetime: entry.lifetime,
            };
            behaviors[idx] = entry.behavior;
            if key_to_id.insert(entry.key.clone(), entry.id).is_some() {
                return Err(format!("duplicate particle key '{}'", entry.key));
            }
        }

        if let Some(missing) = seen.iter().position(|s| !s) {
            return Err(format!("bundle is missing an entry for id {missing}"));
        }

        let registry = Self { props, behaviors, key_to_id };
        registry.validate()?;
        Ok(registry)
    }

    /// Cross-table consistency checks, run once at construction.
    fn validate(&self) -> Result<(), String> {
        if self.props.len() != self.behaviors.len() {
            return Err("property and behavior tables disagree in length".to_string());
        }
        for (id, props) in self.props.iter().enumerate() {
            let behavior = self.behaviors[id];
            if props.movable != (behavior != BehaviorKind::None) {
                return Err(format!(
                    "kind {id}: movable={} contradicts behavior {behavior:?}",
                    props.movable
                ));
            }
        }
        let empty = &self.props[PT_EMPTY as usize];
        if empty.movable || empty.flammable {
            return Err("the empty kind must be inert".to_string());
        }
        Ok(())
    }

    pub fn particle_count(&self) -> usize {
        self.props.len()
    }

    #[inline]
    pub fn is_valid_particle_id(&self, id: ParticleId) -> bool {
        (id as usize) < self.props.len()
    }

    #[inline]
    pub fn props(&self, id: ParticleId) -> Option<&ParticleProps> {
        self.props.get(id as usize)
    }

    #[inline]
    pub fn behavior_kind(&self, id: ParticleId) -> BehaviorKind {
        self.behaviors.get(id as usize).copied().unwrap_or(BehaviorKind::None)
    }

    pub fn id_by_key(&self, key: &str) -> Option<ParticleId> {
        self.key_to_id.get(key).copied()
    }
}

#[derive(Deserialize)]
struct BundleRoot {
    particles: Vec<BundleParticle>,
}

#[derive(Deserialize)]
struct BundleParticle {
    id: ParticleId,
    key: String,
    color: [u8; 4],
    #[serde(default)]
    movable: bool,
    #[serde(default)]
    flammable: bool,
    #[serde(default)]
    mass: f32,
    #[serde(default = "ambient_default")]
    temperature: f32,
    #[serde(default)]
    conductivity: f32,
    #[serde(default)]
    viscosity: f32,
    #[serde(default = "lifetime_default")]
    lifetime: i32,
    #[serde(default)]
    behavior: BehaviorKind,
}

fn ambient_default() -> f32 {
    20.0
}

fn lifetime_default() -> i32 {
    -1
}
