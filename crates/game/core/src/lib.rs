//! Deterministic simulation core for the exploration game.
//!
//! `game-core` defines the canonical rules: the walkability grid, the
//! continuous-motion movement engine, the encounter trigger, the encounter
//! phase state machine, and the turn-based battle resolver. Everything here
//! is pure and deterministic: all randomness flows through the injectable
//! [`env::RngOracle`], and supporting crates depend on the types re-exported
//! here.
pub mod battle;
pub mod config;
pub mod encounter;
pub mod env;
pub mod movement;
pub mod state;

pub use battle::{
    BattleEvent, CatchOutcome, MoveKind, attack_damage, first_mover, heal_amount, resolve_catch,
    resolve_turn,
};
pub use config::GameConfig;
pub use encounter::{EncounterDriver, EncounterTrigger, SessionTick};
pub use env::{
    Env, GameEnv, MapDimensions, MapOracle, OracleError, PcgRng, RngOracle, Roster, SeedSequence,
    SpeciesDef, SpeciesOracle, TerrainKind, Tile, TileGrid, compute_seed,
};
pub use movement::MovementEngine;
pub use state::{
    AvatarState, BattleState, Combatant, Direction, EncounterPhase, EncounterSession, HpMeter,
    OwnedCreature, PhaseTag, Position, Side, StatBlock, Vec2,
};
