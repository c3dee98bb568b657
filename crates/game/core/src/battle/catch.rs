//! The catch sub-flow.
//!
//! A catch is a dedicated action, not a move: throwing the ball only
//! announces the attempt, and the next acknowledgement input resolves it
//! against the wild side's HP at that moment. A failed attempt consumes
//! nothing (no side acted, no HP changed) and the turn resumes.

use crate::state::{BattleState, OwnedCreature};

/// Resolution of a pending catch attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum CatchOutcome {
    /// The wild combatant was weak enough; the session ends and the
    /// creature joins the collection.
    Caught(OwnedCreature),
    /// The wild combatant broke free.
    Escaped,
}

/// Resolves a catch attempt: success iff the wild side's current HP is at
/// or below `threshold` of its maximum.
pub fn resolve_catch(battle: &BattleState, threshold: f32) -> CatchOutcome {
    let wild = &battle.wild;
    let cutoff = threshold * wild.hp.maximum() as f32;

    if wild.hp.current() as f32 <= cutoff {
        CatchOutcome::Caught(OwnedCreature {
            name: wild.name.clone(),
            primary_type: wild.primary_type.clone(),
            secondary_type: wild.secondary_type.clone(),
            level: wild.level,
            stats: wild.stats,
        })
    } else {
        CatchOutcome::Escaped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::SpeciesDef;
    use crate::state::{Combatant, StatBlock};

    fn battle_with_wild_hp(current: u32) -> BattleState {
        let stats = StatBlock::new(100, 50, 50, 50, 50, 50);
        let species = SpeciesDef::new(0, "Wildling", "Normal", None, stats);
        let player = Combatant::wild(&SpeciesDef::new(1, "Hero", "Normal", None, stats), 1);
        let mut wild = Combatant::wild(&species, 1);
        wild.hp.damage(wild.hp.maximum() - current);
        BattleState::new(player, wild)
    }

    #[test]
    fn catch_succeeds_at_or_below_threshold() {
        // 30% of 100 = 30: exactly at the cutoff succeeds
        let battle = battle_with_wild_hp(30);
        assert!(matches!(
            resolve_catch(&battle, 0.30),
            CatchOutcome::Caught(_)
        ));

        let battle = battle_with_wild_hp(12);
        assert!(matches!(
            resolve_catch(&battle, 0.30),
            CatchOutcome::Caught(_)
        ));
    }

    #[test]
    fn catch_fails_above_threshold() {
        let battle = battle_with_wild_hp(31);
        assert_eq!(resolve_catch(&battle, 0.30), CatchOutcome::Escaped);

        let battle = battle_with_wild_hp(100);
        assert_eq!(resolve_catch(&battle, 0.30), CatchOutcome::Escaped);
    }

    #[test]
    fn caught_creature_keeps_the_wild_snapshot_identity() {
        let battle = battle_with_wild_hp(10);
        let CatchOutcome::Caught(creature) = resolve_catch(&battle, 0.30) else {
            panic!("expected a catch");
        };
        assert_eq!(creature.name, "Wildling");
        assert_eq!(creature.level, 1);
        assert_eq!(creature.stats, battle.wild.stats);
    }
}
