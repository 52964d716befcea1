//! Grid snapshots - flat little-endian cell records
//!
//! One record per cell, column-major (all rows of column 0, then column 1,
//! ...), no header. The only validity signal is the byte length, so `load`
//! rejects anything that is not exactly `width * height * CELL_RECORD_SIZE`
//! and refuses unknown kind bytes before writing a single cell.

use crate::grid::Cell;

use super::SimulationCore;

/// kind u8 + color u32 + temperature f32 + vx f32 + vy f32 + lifetime i32.
pub const CELL_RECORD_SIZE: usize = 1 + 4 + 4 + 4 + 4 + 4;

pub(super) fn save_grid(world: &SimulationCore) -> Vec<u8> {
    let grid = &world.grid;
    let w = grid.width();
    let h = grid.height();
    let mut out = Vec::with_capacity(grid.size() * CELL_RECORD_SIZE);

    for x in 0..w {
        for y in 0..h {
            let idx = grid.index(x, y);
            out.push(grid.types[idx]);
            out.extend_from_slice(&grid.colors[idx].to_le_bytes());
            out.extend_from_slice(&grid.temperature[idx].to_le_bytes());
            out.extend_from_slice(&grid.vx[idx].to_le_bytes());
            out.extend_from_slice(&grid.vy[idx].to_le_bytes());
            out.extend_from_slice(&grid.life[idx].to_le_bytes());
        }
    }
    out
}

pub(super) fn load_grid(world: &mut SimulationCore, bytes: &[u8]) -> Result<(), String> {
    let expected = world.grid.size() * CELL_RECORD_SIZE;
    if bytes.len() != expected {
        return Err(format!(
            "snapshot size mismatch: expected {expected} bytes, got {}",
            bytes.len()
        ));
    }

    // Validate every kind byte before the first write, so a bad snapshot
    // leaves the running grid untouched.
    for record in bytes.chunks_exact(CELL_RECORD_SIZE) {
        if !world.content.is_valid_particle_id(record[0]) {
            return Err(format!("snapshot contains unknown kind id {}", record[0]));
        }
    }

    let w = world.grid.width();
    let h = world.grid.height();
    let mut particle_count = 0u32;
    let mut records = bytes.chunks_exact(CELL_RECORD_SIZE);

    for x in 0..w {
        for y in 0..h {
            // chunks_exact yields exactly width*height records for a
            // length-validated input.
            let Some(record) = records.next() else {
                return Err("snapshot truncated".to_string());
            };
            let cell = decode_record(record);
            if cell.kind != crate::particles::PT_EMPTY {
                particle_count += 1;
            }
            world.grid.set_cell(x, y, cell);
        }
    }

    world.grid.reset_updated();
    world.particle_count = particle_count;
    Ok(())
}

fn decode_record(record: &[u8]) -> Cell {
    Cell {
        kind: record[0],
        color: read_u32(&record[1..5]),
        temperature: read_f32(&record[5..9]),
        vx: read_f32(&record[9..13]),
        vy: read_f32(&record[13..17]),
        lifetime: read_i32(&record[17..21]),
    }
}

#[inline]
fn read_u32(b: &[u8]) -> u32 {
    u32::from_le_bytes([b[0], b[1], b[2], b[3]])
}

#[inline]
fn read_f32(b: &[u8]) -> f32 {
    f32::from_le_bytes([b[0], b[1], b[2], b[3]])
}

#[inline]
fn read_i32(b: &[u8]) -> i32 {
    i32::from_le_bytes([b[0], b[1], b[2], b[3]])
}
