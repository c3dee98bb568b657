use std::collections::HashMap;

use crate::state::Position;

/// Static map oracle exposing immutable tile layout information.
///
/// A `None` tile is treated as impassable and never a wild zone; lookup
/// misses are not errors.
pub trait MapOracle: Send + Sync {
    fn dimensions(&self) -> MapDimensions;
    fn tile(&self, position: Position) -> Option<Tile>;

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }
}

/// Canonical terrain classes for map tiles.
///
/// Each kind carries the walkability, transition-speed, and wild-zone
/// semantics a tile of that kind starts with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    Grass,
    Dirt,
    Sand,
    Stone,
    Water,
}

impl TerrainKind {
    pub fn is_walkable(self) -> bool {
        matches!(self, TerrainKind::Grass | TerrainKind::Dirt | TerrainKind::Sand)
    }

    /// Movement speed multiplier for actors departing a tile of this kind.
    /// Paths are slightly faster, sand is slower.
    pub fn speed_factor(self) -> f32 {
        match self {
            TerrainKind::Dirt => 1.2,
            TerrainKind::Sand => 0.7,
            TerrainKind::Grass | TerrainKind::Stone | TerrainKind::Water => 1.0,
        }
    }

    pub fn is_wild(self) -> bool {
        matches!(self, TerrainKind::Grass | TerrainKind::Sand)
    }
}

/// Immutable descriptor for one cell of the walkability grid.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    terrain: TerrainKind,
    walkable: bool,
    speed_factor: f32,
    wild_zone: bool,
}

impl Tile {
    /// Creates a tile with explicit fields. The wild flag is clamped to
    /// walkable tiles: wild zones are a strict subset of walkable terrain.
    pub fn new(terrain: TerrainKind, walkable: bool, speed_factor: f32, wild_zone: bool) -> Self {
        Self {
            terrain,
            walkable,
            speed_factor,
            wild_zone: wild_zone && walkable,
        }
    }

    /// Creates a tile with the semantics its terrain kind implies.
    pub fn from_terrain(terrain: TerrainKind) -> Self {
        Self::new(
            terrain,
            terrain.is_walkable(),
            terrain.speed_factor(),
            terrain.is_wild(),
        )
    }

    pub fn terrain(self) -> TerrainKind {
        self.terrain
    }

    pub fn is_walkable(self) -> bool {
        self.walkable
    }

    pub fn speed_factor(self) -> f32 {
        self.speed_factor
    }

    pub fn is_wild_zone(self) -> bool {
        self.wild_zone
    }
}

/// Concrete tile grid built once by map generation and queried by exact
/// coordinate match thereafter.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGrid {
    dimensions: MapDimensions,
    tiles: HashMap<Position, Tile>,
}

impl TileGrid {
    pub fn new(dimensions: MapDimensions) -> Self {
        Self {
            dimensions,
            tiles: HashMap::new(),
        }
    }

    pub fn from_tiles(
        dimensions: MapDimensions,
        tiles: impl IntoIterator<Item = (Position, Tile)>,
    ) -> Self {
        Self {
            dimensions,
            tiles: tiles.into_iter().collect(),
        }
    }

    /// Inserts or replaces the tile at `position`. Terrain-painting overlays
    /// (path carving, shorelines) use this before gameplay starts; the grid
    /// is not mutated afterwards.
    pub fn set(&mut self, position: Position, tile: Tile) {
        self.tiles.insert(position, tile);
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl MapOracle for TileGrid {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile(&self, position: Position) -> Option<Tile> {
        self.tiles.get(&position).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wild_flag_is_clamped_to_walkable_tiles() {
        let tile = Tile::new(TerrainKind::Water, false, 1.0, true);
        assert!(!tile.is_wild_zone());

        let tile = Tile::new(TerrainKind::Grass, true, 1.0, true);
        assert!(tile.is_wild_zone());
    }

    #[test]
    fn terrain_palette_matches_tile_semantics() {
        assert!(TerrainKind::Grass.is_walkable());
        assert!(TerrainKind::Grass.is_wild());
        assert!(TerrainKind::Dirt.is_walkable());
        assert!(!TerrainKind::Dirt.is_wild());
        assert!(TerrainKind::Sand.is_wild());
        assert!(!TerrainKind::Stone.is_walkable());
        assert!(!TerrainKind::Water.is_walkable());

        assert!(TerrainKind::Dirt.speed_factor() > 1.0);
        assert!(TerrainKind::Sand.speed_factor() < 1.0);
    }

    #[test]
    fn grid_lookup_is_exact_match() {
        let mut grid = TileGrid::new(MapDimensions::new(4, 4));
        grid.set(Position::new(1, 2), Tile::from_terrain(TerrainKind::Grass));

        assert!(grid.tile(Position::new(1, 2)).is_some());
        assert!(grid.tile(Position::new(2, 1)).is_none());
        assert!(grid.tile(Position::new(0, 0)).is_none());
    }

    #[test]
    fn dimensions_bound_contains() {
        let dims = MapDimensions::new(3, 2);
        assert!(dims.contains(Position::new(0, 0)));
        assert!(dims.contains(Position::new(2, 1)));
        assert!(!dims.contains(Position::new(3, 0)));
        assert!(!dims.contains(Position::new(0, 2)));
        assert!(!dims.contains(Position::new(-1, 0)));
    }
}
