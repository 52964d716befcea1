//! FallBehavior - straight gravity drop
//!
//! Covers everything movable that neither spreads nor rolls: fire, smoke,
//! steam, lava, acid, salt. One attempt straight down, nothing else.

use super::{try_move, Behavior, UpdateContext};

pub struct FallBehavior;

impl FallBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for FallBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let xi = ctx.x as i32;
        let yi = ctx.y as i32;
        try_move(ctx, xi, yi + 1);
    }
}
