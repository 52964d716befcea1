use super::*;
use crate::particles::{
    pack_abgr, PT_FIRE, PT_GLASS, PT_ICE, PT_LAVA, PT_METAL, PT_SALT, PT_SAND, PT_SMOKE,
    PT_STEAM, PT_WALL, PT_WATER, PT_WOOD,
};
use crate::reactions::SALTY_WATER_COLOR;
use crate::temperature::AMBIENT_TEMPERATURE;

fn world16() -> SimulationCore {
    SimulationCore::new(16, 16)
}

// Bottom interior row of a 16x16 world (row 15 is the floor wall).
const FLOOR: i32 = 14;

#[test]
fn reset_walls_the_border_and_empties_the_interior() {
    let mut world = world16();
    world.place(8, 8, PT_SAND, 2);
    world.reset();

    let (w, h) = (world.width() as i32, world.height() as i32);
    for y in 0..h {
        for x in 0..w {
            let border = x == 0 || y == 0 || x == w - 1 || y == h - 1;
            let kind = world.kind_at(x, y);
            if border {
                assert_eq!(kind, PT_WALL, "border cell ({x},{y})");
            } else {
                assert_eq!(kind, crate::particles::PT_EMPTY, "interior cell ({x},{y})");
                assert_eq!(world.temperature_at(x, y), AMBIENT_TEMPERATURE);
            }
        }
    }
    // Exactly the wall ring remains.
    assert_eq!(world.particle_count(), (2 * (16 + 16) - 4) as u32);
}

#[test]
fn lone_sand_falls_exactly_one_row_per_tick_then_rests() {
    let mut world = world16();
    world.place(8, 3, PT_SAND, 0);

    for i in 0..(FLOOR - 3) {
        world.step();
        let y = 3 + i + 1;
        assert_eq!(world.kind_at(8, y), PT_SAND, "tick {} position", i + 1);
        assert_eq!(world.kind_at(8, y - 1), crate::particles::PT_EMPTY);
    }

    // On the floor now; further ticks change nothing.
    for _ in 0..5 {
        world.step();
        assert_eq!(world.kind_at(8, FLOOR), PT_SAND);
    }
}

#[test]
fn water_turns_adjacent_fire_to_steam_in_one_tick() {
    let mut world = world16();
    // Corner pocket: the water cannot move, so it is still adjacent when its
    // interaction phase runs.
    world.place(1, FLOOR, PT_WATER, 0);
    world.place(2, FLOOR, PT_FIRE, 0);

    world.step();

    assert_eq!(world.kind_at(1, FLOOR), PT_WATER);
    assert_eq!(world.kind_at(2, FLOOR), PT_STEAM);
    // Conversion keeps the fire's heat but takes the steam catalog color.
    assert!(world.temperature_at(2, FLOOR) > 500.0);
    let steam_color = world.content().props(PT_STEAM).unwrap().color;
    assert_eq!(world.cell(2, FLOOR).unwrap().color, steam_color);
}

#[test]
fn lava_boils_adjacent_water_in_one_tick() {
    let mut world = world16();
    world.place(1, FLOOR, PT_LAVA, 0);
    world.place(2, FLOOR, PT_WATER, 0);

    world.step();

    assert_eq!(world.kind_at(2, FLOOR), PT_STEAM);
    // Fresh lava is still far above the solidification point.
    assert_eq!(world.kind_at(1, FLOOR), PT_LAVA);
}

#[test]
fn cooled_lava_solidifies_to_metal() {
    let mut world = world16();
    world.place(1, FLOOR, PT_LAVA, 0);
    world.grid.set_temp(1, FLOOR as u32, 500.0);

    world.step();

    assert_eq!(world.kind_at(1, FLOOR), PT_METAL);
    assert!(world.temperature_at(1, FLOOR) > 300.0);
}

#[test]
fn blocked_sand_rolls_one_diagonal_down() {
    let mut world = world16();
    world.place(8, FLOOR, PT_SAND, 0);
    world.place(8, FLOOR - 1, PT_SAND, 0);

    world.step();

    assert_eq!(world.kind_at(8, FLOOR), PT_SAND);
    assert_eq!(world.kind_at(8, FLOOR - 1), crate::particles::PT_EMPTY);
    let left = world.kind_at(7, FLOOR);
    let right = world.kind_at(9, FLOOR);
    assert!(
        (left == PT_SAND) != (right == PT_SAND),
        "the upper grain should land on exactly one diagonal"
    );
}

#[test]
fn blocked_water_spreads_one_cell_sideways_per_tick() {
    let mut world = world16();
    world.place(8, FLOOR, PT_WATER, 0);

    world.step();

    let left = world.kind_at(7, FLOOR);
    let right = world.kind_at(9, FLOOR);
    assert_eq!(world.kind_at(8, FLOOR), crate::particles::PT_EMPTY);
    assert!(
        (left == PT_WATER) != (right == PT_WATER),
        "water should take exactly one lateral step per tick"
    );
}

#[test]
fn water_freezes_once_below_zero() {
    let mut world = world16();
    world.place(2, FLOOR, PT_WALL, 0);
    world.place(1, FLOOR, PT_WATER, 0);
    world.grid.set_temp(1, FLOOR as u32, -40.0);

    world.step();

    assert_eq!(world.kind_at(1, FLOOR), PT_ICE);
}

#[test]
fn hot_enough_sand_fuses_to_glass_within_the_same_tick() {
    let mut world = world16();
    world.place(8, FLOOR, PT_SAND, 0);
    // Heat the whole 3x3 pocket so diffusion cannot pull the grain back
    // under the threshold before its reaction check runs.
    for dx in -1..=1i32 {
        for dy in -1..=1i32 {
            world
                .grid
                .set_temp((8 + dx) as u32, (FLOOR + dy) as u32, 2200.0);
        }
    }

    world.step();

    assert_eq!(world.kind_at(8, FLOOR), PT_GLASS);
    assert!(world.temperature_at(8, FLOOR) > crate::reactions::SAND_VITRIFY_TEMP);
}

#[test]
fn ambient_sand_never_vitrifies() {
    let mut world = world16();
    world.place(8, FLOOR, PT_SAND, 0);
    for _ in 0..50 {
        world.step();
    }
    assert_eq!(world.kind_at(8, FLOOR), PT_SAND);
}

#[test]
fn water_dissolves_salt_and_takes_the_salty_tint() {
    let mut world = world16();
    world.place(1, FLOOR, PT_WATER, 0);
    world.place(2, FLOOR, PT_SALT, 0);

    world.step();

    assert_eq!(world.kind_at(2, FLOOR), crate::particles::PT_EMPTY);
    assert_eq!(world.kind_at(1, FLOOR), PT_WATER);
    assert_eq!(world.cell(1, FLOOR).unwrap().color, SALTY_WATER_COLOR);
}

#[test]
fn fire_ignites_neighboring_wood_within_its_lifetime() {
    let mut world = world16();
    world.set_rng_seed(7);
    world.place(7, FLOOR, PT_WOOD, 0);
    world.place(8, FLOOR, PT_FIRE, 0);
    world.place(9, FLOOR, PT_WOOD, 0);

    let mut ignited = false;
    for _ in 0..300 {
        world.step();
        if world.kind_at(7, FLOOR) == PT_FIRE || world.kind_at(9, FLOOR) == PT_FIRE {
            ignited = true;
            break;
        }
    }
    assert!(ignited, "wood next to fire should catch within the fire's lifetime");
}

#[test]
fn fire_sheds_smoke_above_itself() {
    let mut world = world16();
    world.set_rng_seed(9);
    for x in 6..=10 {
        world.place(x, FLOOR, PT_FIRE, 0);
    }

    let mut smoked = false;
    'outer: for _ in 0..150 {
        world.step();
        for x in 6..=10 {
            if world.kind_at(x, FLOOR - 1) == PT_SMOKE {
                smoked = true;
                break 'outer;
            }
        }
    }
    assert!(smoked, "a row of fires should shed smoke within their lifetime");
}

#[test]
fn acid_dissolves_everything_but_glass() {
    let mut world = world16();
    world.set_rng_seed(11);
    // Acid sealed in a glass pocket: nothing may dissolve.
    for dx in -1..=1i32 {
        for dy in -1..=1i32 {
            if dx != 0 || dy != 0 {
                world.place(8 + dx, 8 + dy, PT_GLASS, 0);
            }
        }
    }
    world.place(8, 8, crate::particles::PT_ACID, 0);

    for _ in 0..120 {
        world.step();
    }
    for dx in -1..=1i32 {
        for dy in -1..=1i32 {
            if dx != 0 || dy != 0 {
                assert_eq!(world.kind_at(8 + dx, 8 + dy), PT_GLASS);
            }
        }
    }
    assert_eq!(world.kind_at(8, 8), crate::particles::PT_ACID);
}

#[test]
fn acid_eats_through_walls() {
    let mut world = world16();
    world.set_rng_seed(13);
    world.place(8, FLOOR, crate::particles::PT_ACID, 0);

    let mut breached = false;
    for _ in 0..100 {
        world.step();
        for x in 7..=9 {
            if world.kind_at(x, FLOOR + 1) != PT_WALL {
                breached = true;
            }
        }
        if breached {
            break;
        }
    }
    assert!(breached, "the floor is not acid-proof");
}

#[test]
fn uniform_ambient_temperatures_are_stable_and_hot_cells_relax() {
    let mut world = world16();
    for _ in 0..5 {
        world.step();
    }
    for y in 0..16 {
        for x in 0..16 {
            assert_eq!(world.temperature_at(x, y), AMBIENT_TEMPERATURE);
        }
    }

    // A single warm air cell cools monotonically in the early ticks.
    world.grid.set_temp(8, 8, 100.0);
    let mut prev = 100.0;
    for _ in 0..3 {
        world.step();
        let t = world.temperature_at(8, 8);
        assert!(t < prev && t > AMBIENT_TEMPERATURE);
        prev = t;
    }
}

#[test]
fn expired_particles_retire_to_empty_space() {
    let mut world = world16();
    world.place(1, FLOOR, PT_STEAM, 0);
    let lifetime = world.content().props(PT_STEAM).unwrap().lifetime;

    for _ in 0..(lifetime - 1) {
        world.step();
    }
    assert_eq!(world.kind_at(1, FLOOR), PT_STEAM);

    world.step();
    assert_eq!(world.kind_at(1, FLOOR), crate::particles::PT_EMPTY);
}

#[test]
fn place_radius_zero_stamps_a_single_cell() {
    let mut world = world16();
    world.place(8, 8, PT_SAND, 0);

    let cell = world.cell(8, 8).unwrap();
    assert_eq!(cell.kind, PT_SAND);
    assert_eq!(cell.temperature, AMBIENT_TEMPERATURE);
    assert_eq!(cell.lifetime, -1);
    assert_eq!(cell.color, world.content().props(PT_SAND).unwrap().color);
    for (nx, ny) in [(7, 8), (9, 8), (8, 7), (8, 9)] {
        assert_eq!(world.kind_at(nx, ny), crate::particles::PT_EMPTY);
    }
}

#[test]
fn place_radius_two_stamps_the_euclidean_disc() {
    let mut world = world16();
    world.set_paused(true);
    world.place(8, 8, PT_WALL, 2);

    let mut stamped = 0;
    for y in 0..16 {
        for x in 0..16 {
            let border = x == 0 || y == 0 || x == 15 || y == 15;
            if !border && world.kind_at(x, y) == PT_WALL {
                stamped += 1;
                let (dx, dy) = (x - 8, y - 8);
                assert!(dx * dx + dy * dy <= 4);
            }
        }
    }
    // dx*dx + dy*dy <= 4 has exactly 13 integer solutions.
    assert_eq!(stamped, 13);
}

#[test]
fn erase_is_placement_of_empty_space() {
    let mut world = world16();
    let walls_only = world.particle_count();
    world.place(8, 8, PT_SAND, 2);
    assert!(world.particle_count() > walls_only);

    world.erase(8, 8, 2);
    assert_eq!(world.particle_count(), walls_only);
    assert_eq!(world.kind_at(8, 8), crate::particles::PT_EMPTY);
}

#[test]
fn brush_size_is_clamped() {
    let mut world = world16();
    world.set_brush_size(99);
    assert_eq!(world.brush_size(), MAX_BRUSH_SIZE);
    world.set_brush_size(-5);
    assert_eq!(world.brush_size(), MIN_BRUSH_SIZE);
}

#[test]
fn symmetry_mirrors_placement_across_the_center_line() {
    let mut world = world16();
    world.set_symmetry(true);
    world.place(5, 8, PT_WALL, 0);

    assert_eq!(world.kind_at(5, 8), PT_WALL);
    assert_eq!(world.kind_at(16 - 1 - 5, 8), PT_WALL);
}

#[test]
fn snapshot_round_trip_restores_every_cell() {
    let mut world = world16();
    world.place(4, 4, PT_SAND, 0);
    world.place(5, 4, PT_WATER, 0);
    world.place(6, 4, PT_LAVA, 0);
    world.place(7, 4, PT_ICE, 0);
    world.place(8, 4, PT_WOOD, 0);
    world.place(9, 4, PT_FIRE, 0);
    world.grid.set_temp(4, 4, 321.5);
    world.grid.set_vx(5, 4, 1.25);

    let bytes = world.save();
    assert_eq!(bytes.len(), world.grid.size() * CELL_RECORD_SIZE);

    let count_before = world.particle_count();
    world.reset();
    assert_eq!(world.kind_at(4, 4), crate::particles::PT_EMPTY);

    world.load(&bytes).expect("snapshot should load");
    assert_eq!(world.particle_count(), count_before);
    assert_eq!(world.kind_at(4, 4), PT_SAND);
    assert_eq!(world.temperature_at(4, 4), 321.5);
    assert_eq!(world.cell(5, 4).unwrap().vx, 1.25);
    assert_eq!(world.kind_at(9, 4), PT_FIRE);
    assert_eq!(world.cell(9, 4).unwrap().lifetime, 100);

    // A fresh dump of the restored grid is byte-identical.
    assert_eq!(world.save(), bytes);
}

#[test]
fn snapshot_with_wrong_length_is_rejected_untouched() {
    let mut world = world16();
    world.place(8, 8, PT_SAND, 0);
    let mut bytes = world.save();
    bytes.pop();

    assert!(world.load(&bytes).is_err());
    assert_eq!(world.kind_at(8, 8), PT_SAND);
}

#[test]
fn snapshot_with_unknown_kind_is_rejected_untouched() {
    let mut world = world16();
    world.place(8, 8, PT_SAND, 0);
    let mut bytes = world.save();
    bytes[0] = 200;

    let err = world.load(&bytes).unwrap_err();
    assert!(err.contains("unknown kind"), "unexpected error: {err}");
    assert_eq!(world.kind_at(8, 8), PT_SAND);
}

#[test]
fn paused_simulation_does_not_tick() {
    let mut world = world16();
    world.place(8, 3, PT_SAND, 0);
    world.set_paused(true);

    for _ in 0..3 {
        world.step();
    }
    assert_eq!(world.kind_at(8, 3), PT_SAND);
    assert_eq!(world.frame(), 0);
    assert_eq!(world.perf_stats().ticks, 0);

    world.set_paused(false);
    world.step();
    assert_eq!(world.frame(), 1);
    assert_eq!(world.kind_at(8, 4), PT_SAND);
}

#[test]
fn every_cell_is_visited_exactly_once_per_tick() {
    let mut world = world16();
    world.step();
    let stats = world.perf_stats();
    assert_eq!(stats.ticks, 1);
    assert_eq!(stats.cells_processed, world.grid.size() as u64);
    assert_eq!(stats.moves, 0);
}

#[test]
fn seeded_runs_are_reproducible() {
    let run = || {
        let mut world = world16();
        world.set_rng_seed(42);
        world.place(8, 5, PT_WATER, 2);
        for _ in 0..50 {
            world.step();
        }
        world.save()
    };
    assert_eq!(run(), run());
}

#[test]
fn wind_is_stored_but_does_not_push_particles() {
    let mut world = world16();
    world.set_wind(0.5, 0.0);
    assert_eq!(world.wind(), (0.5, 0.0));

    world.place(8, 3, PT_SAND, 0);
    for _ in 0..5 {
        world.step();
    }
    // Still a straight vertical drop.
    assert_eq!(world.kind_at(8, 8), PT_SAND);
}

#[test]
fn display_colors_are_temperature_tinted() {
    let mut world = world16();
    world.place(8, 8, PT_LAVA, 0);
    world.place(9, 8, PT_ICE, 0);

    // Lava: orange shifted toward red at 1000 °C.
    assert_eq!(world.display_color_at(8, 8), pack_abgr(255, 49, 0, 255));
    // Ice: sky blue shifted toward blue at -10 °C.
    assert_eq!(world.display_color_at(9, 8), pack_abgr(101, 190, 255, 255));
    // Out of bounds reads as background.
    assert_eq!(world.display_color_at(-1, -1), crate::grid::BG_COLOR);
}

#[test]
fn view_extraction_clamps_to_the_grid() {
    let mut world = world16();
    world.extract_view_pixels(-4, -4, 8, 8);
    assert_eq!(world.view_width(), 4);
    assert_eq!(world.view_height(), 4);
    assert_eq!(world.view_len(), 16);

    world.extract_view_pixels(0, 0, 16, 16);
    assert_eq!(world.view_len(), 256);
    // Top-left is border wall, tint-free at ambient.
    let wall_color = world.content().props(PT_WALL).unwrap().color;
    assert_eq!(world.view_buffer[0], wall_color);
}

#[test]
fn velocity_reads_are_neutral_out_of_bounds() {
    let world = world16();
    assert_eq!(world.velocity_at(-3, 2), (0.0, 0.0));
    assert_eq!(world.velocity_at(2, 2), (0.0, 0.0));
}
