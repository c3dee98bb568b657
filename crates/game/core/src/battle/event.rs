use std::fmt;

use super::MoveKind;
use crate::state::{OwnedCreature, Side};

/// Events emitted while a battle turn resolves.
///
/// The ordered sequence doubles as the announcement queue: `Display`
/// renders the text the presentation layer shows, while the structured
/// fields keep outcomes testable and let the runtime react to the
/// persistence-relevant ones (level-ups, catches).
#[derive(Clone, Debug, PartialEq)]
pub enum BattleEvent {
    /// A wild combatant stepped out of the capture ball.
    WildAppeared { name: String },
    /// A combatant used a move.
    MoveUsed {
        side: Side,
        name: String,
        kind: MoveKind,
    },
    /// An attack landed.
    DamageDealt {
        side: Side,
        name: String,
        amount: u32,
    },
    /// A guard fully negated an incoming attack.
    AttackBlocked { side: Side, name: String },
    /// A combatant raised its guard.
    GuardRaised { side: Side, name: String },
    /// A combatant restored hit points.
    Healed {
        side: Side,
        name: String,
        amount: u32,
    },
    /// A combatant's HP reached zero.
    Fainted { side: Side, name: String },
    /// The player's combatant gained a level after the wild side fainted.
    LevelGained { name: String, new_level: u32 },
    /// A capture ball was thrown; resolution waits on acknowledgement.
    CatchAttempted { name: String },
    /// The wild combatant was caught and joins the collection.
    CatchSucceeded { creature: OwnedCreature },
    /// The wild combatant broke free; the turn resumes unconsumed.
    CatchEscaped { name: String },
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleEvent::WildAppeared { name } => write!(f, "A wild {name} appeared!"),
            BattleEvent::MoveUsed { name, kind, .. } => write!(f, "{name} used {kind}!"),
            BattleEvent::DamageDealt { name, amount, .. } => {
                write!(f, "{name} took {amount} damage!")
            }
            BattleEvent::AttackBlocked { name, .. } => write!(f, "{name} blocked the attack!"),
            BattleEvent::GuardRaised { name, .. } => write!(f, "{name} braced for impact!"),
            BattleEvent::Healed { name, amount, .. } => {
                write!(f, "{name} recovered {amount} HP!")
            }
            BattleEvent::Fainted { name, .. } => write!(f, "{name} fainted!"),
            BattleEvent::LevelGained { name, new_level } => {
                write!(f, "{name} grew to level {new_level}!")
            }
            BattleEvent::CatchAttempted { .. } => write!(f, "You hurled a capture ball!"),
            BattleEvent::CatchSucceeded { creature } => {
                write!(f, "Gotcha! {} was caught!", creature.name)
            }
            BattleEvent::CatchEscaped { name } => write!(f, "The wild {name} broke free!"),
        }
    }
}
