//! Behaviors - the movement resolver
//!
//! Each movement class implements [`Behavior`]; the registry dispatches on
//! the kind's [`BehaviorKind`] from the catalog. Every class tries straight
//! down first and gets a single attempt set per tick - this is a one-step
//! resolver, not velocity integration.

use std::cell::Cell as StdCell;

use crate::domain::content::ContentRegistry;
use crate::grid::Grid;
use crate::particles::{BehaviorKind, ParticleId, PT_EMPTY};

mod fall;
mod liquid;
mod powder;

pub use fall::FallBehavior;
pub use liquid::LiquidBehavior;
pub use powder::PowderBehavior;

thread_local! {
    static MOVES_THIS_TICK: StdCell<u64> = const { StdCell::new(0) };
}

pub fn reset_move_counter() {
    MOVES_THIS_TICK.with(|c| c.set(0));
}

pub fn take_move_counter() -> u64 {
    MOVES_THIS_TICK.with(|c| {
        let v = c.get();
        c.set(0);
        v
    })
}

/// Per-cell context handed to behaviors, interactions, and reactions.
pub struct UpdateContext<'a> {
    pub grid: &'a mut Grid,
    pub content: &'a ContentRegistry,
    pub particle_count: &'a mut u32,
    pub x: u32,
    pub y: u32,
    pub frame: u64,
    pub rng: &'a mut u32,
}

impl UpdateContext<'_> {
    /// Overwrite an empty cell with a fresh particle at catalog defaults.
    pub fn spawn_particle(&mut self, x: u32, y: u32, kind: ParticleId) {
        let Some(props) = self.content.props(kind) else {
            return;
        };
        if kind == PT_EMPTY || !self.grid.is_empty(x as i32, y as i32) {
            return;
        }
        self.grid
            .set_particle(x, y, kind, props.color, props.lifetime, props.default_temp);
        *self.particle_count += 1;
    }

    /// Convert a cell to another kind in place.
    ///
    /// Temperature is preserved (metal cooled from lava stays hot); color and
    /// lifetime come from the new kind's catalog entry. The claim marker is
    /// left as-is: a converted neighbor that has not been visited yet runs
    /// later this same tick as its new kind.
    pub fn replace_particle(&mut self, x: u32, y: u32, kind: ParticleId) {
        if kind == PT_EMPTY {
            self.dissolve_particle(x, y);
            return;
        }
        let Some(props) = self.content.props(kind) else {
            return;
        };
        let idx = self.grid.index(x, y);
        let was_empty = self.grid.types[idx] == PT_EMPTY;
        self.grid.types[idx] = kind;
        self.grid.colors[idx] = props.color;
        self.grid.life[idx] = props.lifetime;
        if was_empty {
            *self.particle_count += 1;
        }
    }

    /// Delete a particle, leaving empty space.
    pub fn dissolve_particle(&mut self, x: u32, y: u32) {
        if self.grid.is_empty(x as i32, y as i32) {
            return;
        }
        self.grid.clear_cell(x, y);
        *self.particle_count = self.particle_count.saturating_sub(1);
    }
}

/// A movement class for one category of particle.
pub trait Behavior {
    fn update(&self, ctx: &mut UpdateContext);
}

/// Xorshift32 random number generator; state lives on the simulation
/// context so tests can seed it.
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform pick of a horizontal direction, -1 or +1.
#[inline]
pub fn rand_dir(rng: &mut u32) -> i32 {
    if xorshift32(rng) & 1 == 0 {
        1
    } else {
        -1
    }
}

/// Uniform roll in 0..100 for percent-chance rules.
#[inline]
pub fn rand_percent(rng: &mut u32) -> u32 {
    xorshift32(rng) % 100
}

/// Attempt one move: target must be in bounds and empty. On success the two
/// cells swap completely (marker included) and the mover's velocity is
/// zeroed at its new position.
#[inline]
pub(crate) fn try_move(ctx: &mut UpdateContext, to_x: i32, to_y: i32) -> bool {
    if !ctx.grid.is_empty(to_x, to_y) {
        return false;
    }
    let (tx, ty) = (to_x as u32, to_y as u32);
    ctx.grid.swap(ctx.x, ctx.y, tx, ty);
    ctx.grid.set_vx(tx, ty, 0.0);
    ctx.grid.set_vy(tx, ty, 0.0);
    MOVES_THIS_TICK.with(|c| c.set(c.get().saturating_add(1)));
    true
}

/// Behavior registry - dispatch by movement class.
pub struct BehaviorRegistry {
    fall: FallBehavior,
    liquid: LiquidBehavior,
    powder: PowderBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            fall: FallBehavior::new(),
            liquid: LiquidBehavior::new(),
            powder: PowderBehavior::new(),
        }
    }

    pub fn update(&self, kind: BehaviorKind, ctx: &mut UpdateContext) {
        match kind {
            BehaviorKind::Fall => self.fall.update(ctx),
            BehaviorKind::Liquid => self.liquid.update(ctx),
            BehaviorKind::Powder => self.powder.update(ctx),
            BehaviorKind::None => {}
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
