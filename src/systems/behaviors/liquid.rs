//! LiquidBehavior - drop, else spread one cell sideways
//!
//! Water and oil. When the cell below is taken, pick a random side and try
//! both directions in that order. No scan-ahead, no pressure - one cell per
//! tick keeps the update order-stable.

use super::{rand_dir, try_move, Behavior, UpdateContext};

pub struct LiquidBehavior;

impl LiquidBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for LiquidBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let xi = ctx.x as i32;
        let yi = ctx.y as i32;

        if try_move(ctx, xi, yi + 1) {
            return;
        }

        let d = rand_dir(ctx.rng);
        if try_move(ctx, xi + d, yi) {
            return;
        }
        try_move(ctx, xi - d, yi);
    }
}
