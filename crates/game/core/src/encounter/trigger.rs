//! Random-encounter trigger.

use crate::env::{MapOracle, RngOracle, SeedSequence};
use crate::state::Position;

/// Decides, once per tick while roaming, whether entering a tile starts an
/// encounter.
///
/// The trigger keys off grid-cell *changes*: it remembers the cell seen on
/// the previous evaluation and does nothing while it is unchanged, which
/// bounds it to one probability draw per physical tile entered no matter
/// how many ticks the avatar spends there.
#[derive(Clone, Copy, Debug)]
pub struct EncounterTrigger {
    previous_cell: Position,
}

impl EncounterTrigger {
    pub fn new(start: Position) -> Self {
        Self {
            previous_cell: start,
        }
    }

    /// Evaluates the trigger for the avatar's current cell. Callers only
    /// invoke this while no encounter session is active.
    ///
    /// Returns whether an encounter starts. A missing tile or a tile
    /// outside a wild zone never triggers.
    pub fn evaluate(
        &mut self,
        current_cell: Position,
        map: &(impl MapOracle + ?Sized),
        rng: &(impl RngOracle + ?Sized),
        seeds: &mut SeedSequence,
        encounter_rate: f32,
    ) -> bool {
        if current_cell == self.previous_cell {
            return false;
        }
        self.previous_cell = current_cell;

        let Some(tile) = map.tile(current_cell) else {
            return false;
        };
        if !tile.is_wild_zone() {
            return false;
        }

        rng.unit_f32(seeds.next()) < encounter_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{MapDimensions, PcgRng, TerrainKind, Tile, TileGrid};

    fn wild_grid() -> TileGrid {
        let mut grid = TileGrid::new(MapDimensions::new(4, 1));
        grid.set(Position::new(0, 0), Tile::from_terrain(TerrainKind::Dirt));
        grid.set(Position::new(1, 0), Tile::from_terrain(TerrainKind::Grass));
        grid.set(Position::new(2, 0), Tile::from_terrain(TerrainKind::Grass));
        grid
    }

    #[test]
    fn never_fires_while_stationary() {
        let grid = wild_grid();
        let rng = PcgRng;
        let mut seeds = SeedSequence::new(0);
        let mut trigger = EncounterTrigger::new(Position::new(1, 0));

        // Standing on a wild tile for many ticks draws nothing
        for _ in 0..100 {
            assert!(!trigger.evaluate(Position::new(1, 0), &grid, &rng, &mut seeds, 1.0));
        }
        assert_eq!(seeds.nonce(), 0);
    }

    #[test]
    fn fires_at_most_once_per_cell_entry() {
        let grid = wild_grid();
        let rng = PcgRng;
        let mut seeds = SeedSequence::new(0);
        let mut trigger = EncounterTrigger::new(Position::new(0, 0));

        // Rate 1.0 guarantees the draw succeeds on the entry tick
        assert!(trigger.evaluate(Position::new(1, 0), &grid, &rng, &mut seeds, 1.0));
        // Subsequent ticks on the same cell do not re-draw
        assert!(!trigger.evaluate(Position::new(1, 0), &grid, &rng, &mut seeds, 1.0));
        assert_eq!(seeds.nonce(), 1);
    }

    #[test]
    fn non_wild_and_missing_tiles_never_trigger() {
        let grid = wild_grid();
        let rng = PcgRng;
        let mut seeds = SeedSequence::new(0);
        let mut trigger = EncounterTrigger::new(Position::new(1, 0));

        // Dirt path: walkable but not wild
        assert!(!trigger.evaluate(Position::new(0, 0), &grid, &rng, &mut seeds, 1.0));
        // No tile at all
        assert!(!trigger.evaluate(Position::new(3, 0), &grid, &rng, &mut seeds, 1.0));
        // Neither consumed a draw
        assert_eq!(seeds.nonce(), 0);
    }

    #[test]
    fn zero_rate_never_triggers() {
        let grid = wild_grid();
        let rng = PcgRng;
        let mut seeds = SeedSequence::new(0);
        let mut trigger = EncounterTrigger::new(Position::new(0, 0));

        assert!(!trigger.evaluate(Position::new(1, 0), &grid, &rng, &mut seeds, 0.0));
        // The draw happened, it just failed
        assert_eq!(seeds.nonce(), 1);
    }
}
