//! Thermal diffuser - neighborhood averaging plus ambient relaxation
//!
//! Runs once per cell per tick, after movement, on live grid state. The new
//! temperature is a blend of the cell's own value and the mean over itself
//! and its valid 8-neighbors; edge cells just average over fewer neighbors.
//! The relaxation step then nudges the result toward ambient by a fixed
//! amount. It is deliberately unclamped, so a cell within COOLING_RATE of
//! ambient oscillates slightly instead of settling - matching the reference
//! behavior, which later rules depend on only loosely.

use crate::fast;
use crate::grid::Grid;

/// Weight of the neighborhood mean in the blend.
pub const TEMPERATURE_SPREAD: f32 = 0.2;

/// Per-tick step toward ambient, °C.
pub const COOLING_RATE: f32 = 0.05;

/// Default ambient temperature, °C.
pub const AMBIENT_TEMPERATURE: f32 = 20.0;

pub fn update_temperature(grid: &mut Grid, x: u32, y: u32, ambient: f32) {
    let xi = x as i32;
    let yi = y as i32;

    let own = grid.temperature[grid.index(x, y)];
    let mut sum = own;
    let mut count = 1.0f32;

    for dx in -1..=1i32 {
        for dy in -1..=1i32 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let nx = xi + dx;
            let ny = yi + dy;
            if !grid.in_bounds(nx, ny) {
                continue;
            }
            let idx = grid.index_unchecked(nx as u32, ny as u32);
            sum += *fast!(grid.temperature, [idx]);
            count += 1.0;
        }
    }

    let mean = sum / count;
    let mut temp = mean * TEMPERATURE_SPREAD + own * (1.0 - TEMPERATURE_SPREAD);

    // Relax toward ambient. Unclamped on purpose - see module docs.
    if temp > ambient {
        temp -= COOLING_RATE;
    } else if temp < ambient {
        temp += COOLING_RATE;
    }

    grid.set_temp(x, y, temp);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_ambient_grid_is_a_fixed_point() {
        let mut grid = Grid::new(8, 8);
        for y in 0..8 {
            for x in 0..8 {
                update_temperature(&mut grid, x, y, AMBIENT_TEMPERATURE);
            }
        }
        assert!(grid.temperature.iter().all(|&t| t == AMBIENT_TEMPERATURE));
    }

    #[test]
    fn hot_cell_cools_and_warms_its_neighbors() {
        let mut grid = Grid::new(8, 8);
        grid.set_temp(4, 4, 500.0);

        update_temperature(&mut grid, 4, 4, AMBIENT_TEMPERATURE);
        let after = grid.get_temp(4, 4);
        assert!(after < 500.0 && after > AMBIENT_TEMPERATURE);

        update_temperature(&mut grid, 5, 4, AMBIENT_TEMPERATURE);
        assert!(grid.get_temp(5, 4) > AMBIENT_TEMPERATURE);
    }

    #[test]
    fn corner_cell_averages_over_valid_neighbors_only() {
        // 2x2 grid: the corner has exactly 3 valid neighbors, divisor 4.
        let mut grid = Grid::new(2, 2);
        grid.set_temp(0, 0, 100.0);

        update_temperature(&mut grid, 0, 0, AMBIENT_TEMPERATURE);
        let mean = (100.0 + 20.0 + 20.0 + 20.0) / 4.0;
        let expected = mean * TEMPERATURE_SPREAD + 100.0 * (1.0 - TEMPERATURE_SPREAD)
            - COOLING_RATE;
        assert!((grid.get_temp(0, 0) - expected).abs() < 1e-4);
    }
}
