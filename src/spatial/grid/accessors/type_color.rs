use super::super::*;

impl Grid {
    #[inline]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        self.types[self.index(x as u32, y as u32)] == PT_EMPTY
    }

    // === Kind access ===
    #[inline]
    pub fn get_type(&self, x: i32, y: i32) -> ParticleId {
        if !self.in_bounds(x, y) {
            return PT_EMPTY;
        }
        self.types[self.index(x as u32, y as u32)]
    }

    #[inline]
    pub fn set_type(&mut self, x: u32, y: u32, t: ParticleId) {
        let idx = self.index(x, y);
        self.types[idx] = t;
    }

    // === Color access ===
    #[inline]
    pub fn get_color(&self, x: u32, y: u32) -> u32 {
        self.colors[self.index(x, y)]
    }

    #[inline]
    pub fn set_color(&mut self, x: u32, y: u32, c: u32) {
        let idx = self.index(x, y);
        self.colors[idx] = c;
    }
}
