//! Particle definitions - the static material table
//!
//! Every cell in the grid stores a `ParticleId`; the dense tables below map
//! that id to display color, physical properties, and movement behavior.
//! The tables are sized by `PARTICLE_COUNT`, so a missing entry is a compile
//! error rather than a runtime default.

use serde::Deserialize;

/// Particle ids are plain bytes so the grid can store them in a flat array
/// and hand them to the JS host without conversion.
pub type ParticleId = u8;

pub const PT_EMPTY: ParticleId = 0;
pub const PT_SAND: ParticleId = 1;
pub const PT_WATER: ParticleId = 2;
pub const PT_WALL: ParticleId = 3;
pub const PT_FIRE: ParticleId = 4;
pub const PT_SMOKE: ParticleId = 5;
pub const PT_STEAM: ParticleId = 6;
pub const PT_LAVA: ParticleId = 7;
pub const PT_ICE: ParticleId = 8;
pub const PT_OIL: ParticleId = 9;
pub const PT_ACID: ParticleId = 10;
pub const PT_WOOD: ParticleId = 11;
pub const PT_PLANT: ParticleId = 12;
pub const PT_SALT: ParticleId = 13;
pub const PT_GLASS: ParticleId = 14;
pub const PT_METAL: ParticleId = 15;

pub const PARTICLE_COUNT: usize = 16;

/// Pack RGBA channels into the ABGR u32 layout the canvas expects
/// (little-endian bytes come out as [R, G, B, A]).
#[inline]
pub const fn pack_abgr(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32)
}

/// Movement class dispatched by the behavior registry.
///
/// `movable` in [`ParticleProps`] and this table must agree: a kind is
/// movable exactly when its behavior is not `None`. `validate()` on the
/// content registry checks that.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BehaviorKind {
    /// Never enters the movement resolver (walls, ice, wood, ...).
    #[default]
    None,
    /// Straight gravity drop only (fire, smoke, steam, lava, acid, salt).
    Fall,
    /// Drop, else spread one cell sideways (water, oil).
    Liquid,
    /// Drop, else roll one cell diagonally down (sand).
    Powder,
}

/// Static per-kind properties.
///
/// `conductivity` and `viscosity` are carried for every kind but not read by
/// any current rule; they define material identity for future rules and for
/// content bundles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleProps {
    pub color: u32,
    pub movable: bool,
    pub flammable: bool,
    pub mass: f32,
    pub default_temp: f32,
    pub conductivity: f32,
    pub viscosity: f32,
    /// Ticks until the particle retires; -1 means it never expires.
    pub lifetime: i32,
}

/// Display color of empty space. Matches the grid background.
pub const COLOR_EMPTY: u32 = pack_abgr(10, 10, 10, 255);

pub const PARTICLE_DATA: [ParticleProps; PARTICLE_COUNT] = [
    // EMPTY - the neutral entry; lookups on cleared cells land here
    ParticleProps { color: COLOR_EMPTY, movable: false, flammable: false, mass: 0.0, default_temp: 20.0, conductivity: 0.0, viscosity: 0.0, lifetime: -1 },
    // SAND
    ParticleProps { color: pack_abgr(255, 203, 0, 255), movable: true, flammable: false, mass: 1.5, default_temp: 20.0, conductivity: 0.2, viscosity: 0.0, lifetime: -1 },
    // WATER
    ParticleProps { color: pack_abgr(0, 121, 241, 255), movable: true, flammable: false, mass: 1.0, default_temp: 20.0, conductivity: 0.5, viscosity: 0.8, lifetime: -1 },
    // WALL
    ParticleProps { color: pack_abgr(80, 80, 80, 255), movable: false, flammable: false, mass: 999.0, default_temp: 20.0, conductivity: 0.1, viscosity: 0.0, lifetime: -1 },
    // FIRE
    ParticleProps { color: pack_abgr(230, 41, 55, 255), movable: true, flammable: false, mass: 0.1, default_temp: 800.0, conductivity: 1.0, viscosity: 0.0, lifetime: 100 },
    // SMOKE
    ParticleProps { color: pack_abgr(80, 80, 80, 255), movable: true, flammable: false, mass: 0.2, default_temp: 100.0, conductivity: 0.1, viscosity: 0.3, lifetime: 200 },
    // STEAM
    ParticleProps { color: pack_abgr(200, 200, 200, 255), movable: true, flammable: false, mass: 0.3, default_temp: 100.0, conductivity: 0.3, viscosity: 0.2, lifetime: 150 },
    // LAVA
    ParticleProps { color: pack_abgr(255, 161, 0, 255), movable: true, flammable: false, mass: 2.0, default_temp: 1000.0, conductivity: 0.8, viscosity: 0.9, lifetime: -1 },
    // ICE
    ParticleProps { color: pack_abgr(102, 191, 255, 255), movable: false, flammable: false, mass: 0.9, default_temp: -10.0, conductivity: 0.9, viscosity: 0.0, lifetime: -1 },
    // OIL
    ParticleProps { color: pack_abgr(127, 106, 79, 255), movable: true, flammable: true, mass: 0.8, default_temp: 20.0, conductivity: 0.1, viscosity: 0.4, lifetime: -1 },
    // ACID
    ParticleProps { color: pack_abgr(0, 228, 48, 255), movable: true, flammable: false, mass: 1.2, default_temp: 20.0, conductivity: 0.3, viscosity: 0.5, lifetime: -1 },
    // WOOD
    ParticleProps { color: pack_abgr(211, 176, 131, 255), movable: false, flammable: true, mass: 0.7, default_temp: 20.0, conductivity: 0.2, viscosity: 0.0, lifetime: -1 },
    // PLANT
    ParticleProps { color: pack_abgr(0, 117, 44, 255), movable: false, flammable: true, mass: 0.6, default_temp: 20.0, conductivity: 0.3, viscosity: 0.0, lifetime: -1 },
    // SALT
    ParticleProps { color: pack_abgr(255, 255, 255, 255), movable: true, flammable: false, mass: 1.1, default_temp: 20.0, conductivity: 0.2, viscosity: 0.0, lifetime: -1 },
    // GLASS - translucent
    ParticleProps { color: pack_abgr(255, 255, 255, 128), movable: false, flammable: false, mass: 1.5, default_temp: 20.0, conductivity: 0.4, viscosity: 0.0, lifetime: -1 },
    // METAL
    ParticleProps { color: pack_abgr(200, 200, 200, 255), movable: false, flammable: false, mass: 2.0, default_temp: 20.0, conductivity: 0.9, viscosity: 0.0, lifetime: -1 },
];

pub const BEHAVIOR_BY_ID: [BehaviorKind; PARTICLE_COUNT] = [
    BehaviorKind::None,   // EMPTY
    BehaviorKind::Powder, // SAND
    BehaviorKind::Liquid, // WATER
    BehaviorKind::None,   // WALL
    BehaviorKind::Fall,   // FIRE
    BehaviorKind::Fall,   // SMOKE
    BehaviorKind::Fall,   // STEAM
    BehaviorKind::Fall,   // LAVA
    BehaviorKind::None,   // ICE
    BehaviorKind::Liquid, // OIL
    BehaviorKind::Fall,   // ACID
    BehaviorKind::None,   // WOOD
    BehaviorKind::None,   // PLANT
    BehaviorKind::Fall,   // SALT
    BehaviorKind::None,   // GLASS
    BehaviorKind::None,   // METAL
];

/// Stable lookup keys, used by content bundles and host UIs.
pub const PARTICLE_KEYS: [&str; PARTICLE_COUNT] = [
    "empty", "sand", "water", "wall", "fire", "smoke", "steam", "lava",
    "ice", "oil", "acid", "wood", "plant", "salt", "glass", "metal",
];

#[inline]
pub fn is_valid_particle_id(id: ParticleId) -> bool {
    (id as usize) < PARTICLE_COUNT
}

#[inline]
pub fn is_particle(id: ParticleId) -> bool {
    id != PT_EMPTY && is_valid_particle_id(id)
}

/// Human-readable name for UI overlays; unknown ids read as empty space.
#[inline]
pub fn name_of(id: ParticleId) -> &'static str {
    if is_valid_particle_id(id) {
        PARTICLE_KEYS[id as usize]
    } else {
        PARTICLE_KEYS[PT_EMPTY as usize]
    }
}
