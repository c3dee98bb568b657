//! Turn-based battle resolver.
//!
//! A turn starts when the player commits a move: the opponent's move is
//! drawn from the oracle, order falls out of speed (with the guard
//! override), both actions apply sequentially, and knockouts are checked.
//! The resolver runs to completion synchronously within one tick; only
//! announcement acknowledgement waits on the outside world.
mod catch;
mod event;
mod moves;
mod resolver;

pub use catch::{CatchOutcome, resolve_catch};
pub use event::BattleEvent;
pub use moves::{DAMAGE_DIVISOR, HEAL_FRACTION, MoveKind, attack_damage, heal_amount};
pub use resolver::{LEVEL_UP_CHANCE, first_mover, resolve_turn};
