//! Procedural map generation.
//!
//! Builds the walkability grid the movement engine and encounter trigger
//! consume: a grass base with lakes, stone formations, sand shorelines, and
//! dirt paths carved through the middle. All randomness flows through the
//! core's seeded RNG oracle, so a given seed always yields the same map.

use std::collections::HashMap;

use game_core::{
    MapDimensions, PcgRng, Position, RngOracle, SeedSequence, TerrainKind, Tile, TileGrid,
};

/// Inputs to map generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorParams {
    pub width: u32,
    pub height: u32,
    pub seed: u64,
}

impl GeneratorParams {
    /// Seed used when none is supplied, for a stable default world.
    pub const DEFAULT_SEED: u64 = 42;

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            seed: Self::DEFAULT_SEED,
        }
    }

    pub fn with_seed(width: u32, height: u32, seed: u64) -> Self {
        Self {
            width,
            height,
            seed,
        }
    }
}

/// Generates a complete tile grid with varied terrain.
pub fn generate_map(params: GeneratorParams) -> TileGrid {
    let rng = PcgRng;
    let mut seeds = SeedSequence::new(params.seed);
    let width = params.width as i32;
    let height = params.height as i32;

    let mut terrain: HashMap<Position, TerrainKind> = HashMap::new();
    for x in 0..width {
        for y in 0..height {
            terrain.insert(Position::new(x, y), TerrainKind::Grass);
        }
    }

    add_lakes(&mut terrain, width, height, &rng, &mut seeds);
    add_stone_formations(&mut terrain, width, height, &rng, &mut seeds);
    add_sand_near_water(&mut terrain, width, height);
    carve_paths(&mut terrain, width, height);

    let dimensions = MapDimensions::new(params.width, params.height);
    TileGrid::from_tiles(
        dimensions,
        terrain
            .into_iter()
            .map(|(position, kind)| (position, Tile::from_terrain(kind))),
    )
}

/// Uniform value in `[min, max)`.
fn roll_range(rng: &PcgRng, seeds: &mut SeedSequence, min: i32, max: i32) -> i32 {
    min + rng.index(seeds.next(), (max - min).max(1) as usize) as i32
}

fn add_lakes(
    terrain: &mut HashMap<Position, TerrainKind>,
    width: i32,
    height: i32,
    rng: &PcgRng,
    seeds: &mut SeedSequence,
) {
    let lakes = roll_range(rng, seeds, 2, 5);

    for _ in 0..lakes {
        let center_x = roll_range(rng, seeds, width / 4, 3 * width / 4);
        let center_y = roll_range(rng, seeds, height / 4, 3 * height / 4);
        let radius = roll_range(rng, seeds, 3, 8);

        for x in (center_x - radius).max(0)..(center_x + radius).min(width) {
            for y in (center_y - radius).max(0)..(center_y + radius).min(height) {
                let dx = (x - center_x) as f32;
                let dy = (y - center_y) as f32;
                if (dx * dx + dy * dy).sqrt() <= radius as f32 {
                    terrain.insert(Position::new(x, y), TerrainKind::Water);
                }
            }
        }
    }
}

fn add_stone_formations(
    terrain: &mut HashMap<Position, TerrainKind>,
    width: i32,
    height: i32,
    rng: &PcgRng,
    seeds: &mut SeedSequence,
) {
    let formations = roll_range(rng, seeds, 3, 7);

    for _ in 0..formations {
        let center_x = roll_range(rng, seeds, 0, width);
        let center_y = roll_range(rng, seeds, 0, height);
        let size = roll_range(rng, seeds, 2, 5);

        for x in (center_x - size).max(0)..(center_x + size).min(width) {
            for y in (center_y - size).max(0)..(center_y + size).min(height) {
                let position = Position::new(x, y);
                // Rocks never overwrite water, and the scatter keeps
                // formations ragged rather than square
                if terrain.get(&position) != Some(&TerrainKind::Water)
                    && rng.unit_f32(seeds.next()) < 0.6
                {
                    terrain.insert(position, TerrainKind::Stone);
                }
            }
        }
    }
}

/// Converts grass bordering water (8-neighborhood) into sand shorelines.
fn add_sand_near_water(terrain: &mut HashMap<Position, TerrainKind>, width: i32, height: i32) {
    let mut shoreline = Vec::new();

    for x in 0..width {
        for y in 0..height {
            if terrain.get(&Position::new(x, y)) != Some(&TerrainKind::Water) {
                continue;
            }
            for dx in -1..=1 {
                for dy in -1..=1 {
                    let neighbor = Position::new(x + dx, y + dy);
                    if terrain.get(&neighbor) == Some(&TerrainKind::Grass) {
                        shoreline.push(neighbor);
                    }
                }
            }
        }
    }

    for position in shoreline {
        terrain.insert(position, TerrainKind::Sand);
    }
}

/// Carves dirt paths along the middle row and column, skipping water and
/// stone so paths never bridge obstacles.
fn carve_paths(terrain: &mut HashMap<Position, TerrainKind>, width: i32, height: i32) {
    let mid_y = height / 2;
    for x in 0..width {
        repaint_walkable(terrain, Position::new(x, mid_y));
    }

    let mid_x = width / 2;
    for y in 0..height {
        repaint_walkable(terrain, Position::new(mid_x, y));
    }
}

fn repaint_walkable(terrain: &mut HashMap<Position, TerrainKind>, position: Position) {
    match terrain.get(&position) {
        Some(TerrainKind::Water) | Some(TerrainKind::Stone) | None => {}
        Some(_) => {
            terrain.insert(position, TerrainKind::Dirt);
        }
    }
}
