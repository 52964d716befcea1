use super::super::*;

impl Grid {
    // === Write a particle with all attributes ===
    // Fresh particles are NOT marked updated, so one placed mid-tick can
    // still move within the same tick.
    pub fn set_particle(
        &mut self,
        x: u32,
        y: u32,
        kind: ParticleId,
        color: u32,
        life: i32,
        temp: f32,
    ) {
        let idx = self.index(x, y);
        self.types[idx] = kind;
        self.colors[idx] = color;
        self.life[idx] = life;
        self.updated[idx] = 0;
        self.temperature[idx] = temp;
        self.vx[idx] = 0.0;
        self.vy[idx] = 0.0;
    }

    // === Clear a single cell back to empty space ===
    pub fn clear_cell(&mut self, x: u32, y: u32) {
        let idx = self.index(x, y);
        self.types[idx] = PT_EMPTY;
        self.colors[idx] = BG_COLOR;
        self.life[idx] = -1;
        self.temperature[idx] = DEFAULT_TEMPERATURE;
        self.vx[idx] = 0.0;
        self.vy[idx] = 0.0;
    }

    // === Clear the whole grid ===
    pub fn clear(&mut self) {
        self.types.fill(PT_EMPTY);
        self.colors.fill(BG_COLOR);
        self.life.fill(-1);
        self.updated.fill(0);
        self.temperature.fill(DEFAULT_TEMPERATURE);
        self.vx.fill(0.0);
        self.vy.fill(0.0);
    }

    // === Cell snapshots for the boundaries ===
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let idx = self.index(x as u32, y as u32);
        Some(Cell {
            kind: self.types[idx],
            color: self.colors[idx],
            temperature: self.temperature[idx],
            vx: self.vx[idx],
            vy: self.vy[idx],
            lifetime: self.life[idx],
        })
    }

    pub fn set_cell(&mut self, x: u32, y: u32, cell: Cell) {
        let idx = self.index(x, y);
        self.types[idx] = cell.kind;
        self.colors[idx] = cell.color;
        self.temperature[idx] = cell.temperature;
        self.vx[idx] = cell.vx;
        self.vy[idx] = cell.vy;
        self.life[idx] = cell.lifetime;
    }
}
