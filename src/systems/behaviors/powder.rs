//! PowderBehavior - drop, else roll diagonally down
//!
//! Sand (and any future granular kind). When the cell below is taken, pick a
//! random side and try the two down-diagonals in that order, which is what
//! builds the characteristic heaps.

use super::{rand_dir, try_move, Behavior, UpdateContext};

pub struct PowderBehavior;

impl PowderBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for PowderBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let xi = ctx.x as i32;
        let yi = ctx.y as i32;

        if try_move(ctx, xi, yi + 1) {
            return;
        }

        let d = rand_dir(ctx.rng);
        if try_move(ctx, xi + d, yi + 1) {
            return;
        }
        try_move(ctx, xi - d, yi + 1);
    }
}
