//! Turn resolution: move order, effect application, knockout detection.

use super::event::BattleEvent;
use super::moves::{MoveKind, attack_damage, heal_amount};
use crate::env::{RngOracle, SeedSequence};
use crate::state::{BattleState, Side};

/// Chance that the player's combatant gains a level when the wild side
/// faints.
pub const LEVEL_UP_CHANCE: f32 = 0.2;

/// Resolves one full battle turn from the player's committed move choice.
///
/// Draws the opponent's move, determines order, executes both actions
/// sequentially against live HP/guard state, then checks knockouts. The
/// returned events are ordered announcements; guard flags stay set until
/// the presentation layer dismisses them via the session driver.
pub fn resolve_turn(
    battle: &mut BattleState,
    player_move: MoveKind,
    rng: &(impl RngOracle + ?Sized),
    seeds: &mut SeedSequence,
) -> Vec<BattleEvent> {
    let wild_move = MoveKind::ALL[rng.index(seeds.next(), MoveKind::ALL.len())];

    let first = first_mover(battle, player_move, wild_move);
    let second = first.opponent();
    let chosen = |side: Side| match side {
        Side::Player => player_move,
        Side::Wild => wild_move,
    };

    let mut events = Vec::new();
    execute_move(battle, first, chosen(first), &mut events);

    // A side knocked out by the first action takes no action of its own.
    if !battle.combatant(second).hp.is_depleted() {
        execute_move(battle, second, chosen(second), &mut events);
    }

    check_knockouts(battle, rng, seeds, &mut events);
    events
}

/// Which side acts first this turn.
///
/// Default order: the side with speed greater than or equal to its
/// opponent's acts first, ties favoring the player. Override: a slower side
/// that chose Guard is forced to act first so the guard is up before the
/// opponent swings. The override only ever consults the slower side; when
/// both sides guard, the faster side's choice does not re-enter the
/// decision. That asymmetry is the documented rule, not an accident here.
pub fn first_mover(battle: &BattleState, player_move: MoveKind, wild_move: MoveKind) -> Side {
    let default_first = if battle.player.stats.speed >= battle.wild.stats.speed {
        Side::Player
    } else {
        Side::Wild
    };
    let slower = default_first.opponent();
    let slower_move = match slower {
        Side::Player => player_move,
        Side::Wild => wild_move,
    };

    if slower_move == MoveKind::Guard {
        slower
    } else {
        default_first
    }
}

fn execute_move(battle: &mut BattleState, side: Side, kind: MoveKind, events: &mut Vec<BattleEvent>) {
    events.push(BattleEvent::MoveUsed {
        side,
        name: battle.combatant(side).name.clone(),
        kind,
    });

    match kind {
        MoveKind::Tackle => apply_attack(battle, side, false, events),
        MoveKind::Projectile => apply_attack(battle, side, true, events),
        MoveKind::Guard => {
            let actor = battle.combatant_mut(side);
            actor.guarded = true;
            events.push(BattleEvent::GuardRaised {
                side,
                name: actor.name.clone(),
            });
        }
        MoveKind::Heal => {
            let actor = battle.combatant_mut(side);
            let restored = actor.hp.heal(heal_amount(actor.hp.maximum()));
            events.push(BattleEvent::Healed {
                side,
                name: actor.name.clone(),
                amount: restored,
            });
        }
    }
}

fn apply_attack(
    battle: &mut BattleState,
    attacker: Side,
    special: bool,
    events: &mut Vec<BattleEvent>,
) {
    let defender = attacker.opponent();

    // Guard negates the whole attack and is spent doing so.
    if battle.combatant(defender).guarded {
        let target = battle.combatant_mut(defender);
        target.guarded = false;
        events.push(BattleEvent::AttackBlocked {
            side: defender,
            name: target.name.clone(),
        });
        return;
    }

    let (attack, defense) = if special {
        (
            battle.combatant(attacker).stats.sp_attack,
            battle.combatant(defender).stats.sp_defense,
        )
    } else {
        (
            battle.combatant(attacker).stats.attack,
            battle.combatant(defender).stats.defense,
        )
    };

    let damage = attack_damage(attack, defense);
    let target = battle.combatant_mut(defender);
    target.hp.damage(damage);
    events.push(BattleEvent::DamageDealt {
        side: defender,
        name: target.name.clone(),
        amount: damage,
    });
}

/// Marks freshly depleted sides as fainted and rolls the level-up when the
/// wild side goes down.
fn check_knockouts(
    battle: &mut BattleState,
    rng: &(impl RngOracle + ?Sized),
    seeds: &mut SeedSequence,
    events: &mut Vec<BattleEvent>,
) {
    for side in [Side::Player, Side::Wild] {
        let combatant = battle.combatant_mut(side);
        if !combatant.hp.is_depleted() || combatant.fainted {
            continue;
        }
        combatant.fainted = true;
        events.push(BattleEvent::Fainted {
            side,
            name: combatant.name.clone(),
        });

        if side == Side::Wild && rng.unit_f32(seeds.next()) < LEVEL_UP_CHANCE {
            battle.player.level += 1;
            events.push(BattleEvent::LevelGained {
                name: battle.player.name.clone(),
                new_level: battle.player.level,
            });
        }
    }
}
