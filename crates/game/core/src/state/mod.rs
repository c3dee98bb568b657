//! Simulation state representation.
//!
//! This module owns the data structures for the avatar, combatants, and the
//! encounter session. Other layers query this state but mutate it only
//! through the movement engine, the phase machine, and the battle resolver.
mod avatar;
mod combatant;
mod common;
mod session;

pub use avatar::{ActiveTransition, AvatarState, HeldDirections};
pub use combatant::{Combatant, OwnedCreature, StatBlock};
pub use common::{Direction, HpMeter, Position, Side, Vec2};
pub use session::{BattleState, EncounterPhase, EncounterSession, PhaseTag};
