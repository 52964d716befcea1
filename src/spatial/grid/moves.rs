use super::*;

impl Grid {
    // === Swap two cells (all attributes) ===
    // The claim marker travels with the particle, which is what keeps
    // "one update per physical particle per tick" true after a move.
    pub fn swap(&mut self, x1: u32, y1: u32, x2: u32, y2: u32) {
        let idx1 = self.index(x1, y1);
        let idx2 = self.index(x2, y2);
        self.swap_idx(idx1, idx2);
    }

    #[inline]
    pub fn swap_idx(&mut self, idx1: usize, idx2: usize) {
        self.types.swap(idx1, idx2);
        self.colors.swap(idx1, idx2);
        self.life.swap(idx1, idx2);
        self.updated.swap(idx1, idx2);
        self.temperature.swap(idx1, idx2);
        self.vx.swap(idx1, idx2);
        self.vy.swap(idx1, idx2);
    }
}
