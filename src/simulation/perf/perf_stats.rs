use wasm_bindgen::prelude::*;

/// Running tick counters, cheap enough to keep always on. No wall-clock
/// timers - the host measures frame time itself.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default)]
pub struct PerfStats {
    /// Ticks executed (pauses excluded).
    pub ticks: u64,
    /// Cells that passed the claim check and ran their update.
    pub cells_processed: u64,
    /// Successful particle moves.
    pub moves: u64,
}
