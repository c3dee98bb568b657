//! Encounter phase state machine.
//!
//! Drives a session through the forced order
//! `FadingToWhite → BallGrowing → BallHolding → BallShrinking → BattleSetup
//! → {CreatureSelection | BattleReady}` and hosts the battle while the
//! session sits in `BattleReady`. Animation phases advance on the fixed
//! tick; selection and battle input arrive as discrete calls between ticks.

use std::mem;

use crate::battle::{self, BattleEvent, CatchOutcome, MoveKind};
use crate::config::GameConfig;
use crate::env::{Env, MapOracle, OracleError, RngOracle, SeedSequence, SpeciesOracle};
use crate::state::{BattleState, Combatant, EncounterPhase, EncounterSession, OwnedCreature};

/// Outcome of advancing or prodding a session: the announcements produced,
/// and whether the session ended.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionTick {
    pub events: Vec<BattleEvent>,
    pub ended: bool,
}

impl SessionTick {
    fn idle() -> Self {
        Self::default()
    }
}

/// Advances [`EncounterSession`]s and routes battle-facing input into them.
pub struct EncounterDriver<'a> {
    config: &'a GameConfig,
}

impl<'a> EncounterDriver<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Self { config }
    }

    /// Advances the session by one fixed time step of `dt` seconds.
    pub fn tick<M, S, R>(
        &self,
        session: &mut EncounterSession,
        party: &[OwnedCreature],
        env: &Env<'_, M, S, R>,
        seeds: &mut SeedSequence,
        dt: f32,
    ) -> Result<SessionTick, OracleError>
    where
        M: MapOracle + ?Sized,
        S: SpeciesOracle + ?Sized,
        R: RngOracle + ?Sized,
    {
        let species = env.species()?;
        let rng = env.rng()?;

        let mut events = Vec::new();
        let mut ended = false;
        let config = self.config;

        let phase = take_phase(session);
        session.phase = match phase {
            EncounterPhase::FadingToWhite { mut timer } => {
                timer += dt;
                if timer >= config.fade_duration {
                    // Opacity clamps at 1; the timer carries over because
                    // ball growth reads total time since the fade began.
                    EncounterPhase::BallGrowing { timer }
                } else {
                    EncounterPhase::FadingToWhite { timer }
                }
            }
            EncounterPhase::BallGrowing { mut timer } => {
                timer += dt;
                let growth_end = config.ball_start_fraction * config.fade_duration
                    + config.ball_grow_duration;
                if timer >= growth_end {
                    EncounterPhase::BallHolding { timer: 0.0 }
                } else {
                    EncounterPhase::BallGrowing { timer }
                }
            }
            EncounterPhase::BallHolding { mut timer } => {
                timer += dt;
                if timer >= config.ball_hold_duration {
                    EncounterPhase::BallShrinking { timer: 0.0 }
                } else {
                    EncounterPhase::BallHolding { timer }
                }
            }
            EncounterPhase::BallShrinking { mut timer } => {
                timer += dt;
                if timer >= config.ball_shrink_duration {
                    let wild = draw_wild(species, rng, seeds)?;
                    events.push(BattleEvent::WildAppeared {
                        name: wild.name.clone(),
                    });
                    EncounterPhase::BattleSetup { wild }
                } else {
                    EncounterPhase::BallShrinking { timer }
                }
            }
            EncounterPhase::BattleSetup { wild } => {
                // Synchronous branch: selection only when there is
                // something to select; the guest path borrows a loaner.
                if party.is_empty() {
                    let loaner = loaner_combatant(species)?;
                    EncounterPhase::BattleReady {
                        battle: BattleState::new(loaner, wild),
                    }
                } else {
                    EncounterPhase::CreatureSelection { wild, cursor: 0 }
                }
            }
            EncounterPhase::CreatureSelection { wild, cursor } => {
                // Waits on selection input
                EncounterPhase::CreatureSelection { wild, cursor }
            }
            EncounterPhase::BattleReady { mut battle } => {
                ended = advance_faint_fades(&mut battle, config, dt);
                EncounterPhase::BattleReady { battle }
            }
        };

        Ok(SessionTick { events, ended })
    }

    /// Moves the selection cursor by `offset`, wrapping around the party.
    /// Ignored outside `CreatureSelection`.
    pub fn navigate(&self, session: &mut EncounterSession, offset: i32, party_len: usize) {
        if let EncounterPhase::CreatureSelection { cursor, .. } = &mut session.phase {
            let len = party_len.max(1) as i32;
            *cursor = (*cursor as i32 + offset).rem_euclid(len) as usize;
        }
    }

    /// Confirms the highlighted creature and enters `BattleReady`.
    /// An out-of-range cursor is ignored.
    pub fn confirm_selection(&self, session: &mut EncounterSession, party: &[OwnedCreature]) {
        let phase = take_phase(session);
        session.phase = match phase {
            EncounterPhase::CreatureSelection { wild, cursor } => match party.get(cursor) {
                Some(owned) => EncounterPhase::BattleReady {
                    battle: BattleState::new(Combatant::from_owned(owned), wild),
                },
                None => EncounterPhase::CreatureSelection { wild, cursor },
            },
            other => other,
        };
    }

    /// Cancelling selection falls back to the first party member.
    pub fn cancel_selection(&self, session: &mut EncounterSession, party: &[OwnedCreature]) {
        let phase = take_phase(session);
        session.phase = match phase {
            EncounterPhase::CreatureSelection { wild, cursor } => match party.first() {
                Some(owned) => EncounterPhase::BattleReady {
                    battle: BattleState::new(Combatant::from_owned(owned), wild),
                },
                None => EncounterPhase::CreatureSelection { wild, cursor },
            },
            other => other,
        };
    }

    /// Commits the player's move choice and resolves the whole turn.
    /// Ignored unless the battle is accepting moves.
    pub fn choose_move<M, S, R>(
        &self,
        session: &mut EncounterSession,
        player_move: MoveKind,
        env: &Env<'_, M, S, R>,
        seeds: &mut SeedSequence,
    ) -> Result<SessionTick, OracleError>
    where
        M: MapOracle + ?Sized,
        S: SpeciesOracle + ?Sized,
        R: RngOracle + ?Sized,
    {
        let rng = env.rng()?;
        let Some(battle) = session.battle_mut() else {
            return Ok(SessionTick::idle());
        };
        if !battle.accepting_moves() {
            return Ok(SessionTick::idle());
        }

        let events = battle::resolve_turn(battle, player_move, rng, seeds);
        battle.awaiting_ack = true;
        Ok(SessionTick {
            events,
            ended: false,
        })
    }

    /// Throws a capture ball: announces the attempt and waits for the next
    /// acknowledgement to resolve it. Ignored unless the battle is
    /// accepting moves.
    pub fn request_catch(&self, session: &mut EncounterSession) -> SessionTick {
        let Some(battle) = session.battle_mut() else {
            return SessionTick::idle();
        };
        if !battle.accepting_moves() {
            return SessionTick::idle();
        }

        battle.pending_catch = true;
        battle.awaiting_ack = true;
        SessionTick {
            events: vec![BattleEvent::CatchAttempted {
                name: battle.wild.name.clone(),
            }],
            ended: false,
        }
    }

    /// Dismisses the current announcements. Resolves a pending catch if
    /// one is waiting; otherwise closes the turn by clearing guard flags.
    pub fn acknowledge(&self, session: &mut EncounterSession) -> SessionTick {
        let Some(battle) = session.battle_mut() else {
            return SessionTick::idle();
        };
        if !battle.awaiting_ack {
            return SessionTick::idle();
        }

        if battle.pending_catch {
            battle.pending_catch = false;
            return match battle::resolve_catch(battle, self.config.catch_threshold) {
                CatchOutcome::Caught(creature) => SessionTick {
                    events: vec![BattleEvent::CatchSucceeded { creature }],
                    ended: true,
                },
                CatchOutcome::Escaped => {
                    // Nothing was consumed; the break-free announcement
                    // still needs its own dismissal.
                    SessionTick {
                        events: vec![BattleEvent::CatchEscaped {
                            name: battle.wild.name.clone(),
                        }],
                        ended: false,
                    }
                }
            };
        }

        battle.awaiting_ack = false;
        battle.clear_turn_flags();
        SessionTick::idle()
    }
}

/// Swaps the phase out for by-value transition matching. Every caller
/// reassigns `session.phase` before returning.
fn take_phase(session: &mut EncounterSession) -> EncounterPhase {
    mem::replace(
        &mut session.phase,
        EncounterPhase::FadingToWhite { timer: 0.0 },
    )
}

fn draw_wild(
    species: &(impl SpeciesOracle + ?Sized),
    rng: &(impl RngOracle + ?Sized),
    seeds: &mut SeedSequence,
) -> Result<Combatant, OracleError> {
    let count = species.species_count();
    let index = rng.index(seeds.next(), count);
    let def = species.species_at(index).ok_or(OracleError::EmptyRoster)?;
    Ok(Combatant::wild(def, GameConfig::STARTING_LEVEL))
}

/// The guest-path player combatant: a level-1 loaner from the first
/// roster entry.
fn loaner_combatant(
    species: &(impl SpeciesOracle + ?Sized),
) -> Result<Combatant, OracleError> {
    let def = species.species_at(0).ok_or(OracleError::EmptyRoster)?;
    Ok(Combatant::wild(def, GameConfig::STARTING_LEVEL))
}

/// Advances the post-knockout fades and reports whether any side finished
/// fading, which ends the session. Both timers may run at once; the session
/// still ends exactly once because the caller drops it on the first report.
fn advance_faint_fades(battle: &mut BattleState, config: &GameConfig, dt: f32) -> bool {
    if battle.player.hp.is_depleted() {
        *battle.player_faint_timer.get_or_insert(0.0) += dt;
    }
    if battle.wild.hp.is_depleted() {
        *battle.wild_faint_timer.get_or_insert(0.0) += dt;
    }

    let faded = |timer: Option<f32>| timer.is_some_and(|t| t >= config.faint_fade_duration);
    faded(battle.player_faint_timer) || faded(battle.wild_faint_timer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{MapDimensions, PcgRng, Roster, SpeciesDef, TileGrid};
    use crate::state::{PhaseTag, Side, StatBlock};

    const DT: f32 = 1.0 / 60.0;

    fn roster() -> Roster {
        Roster::new(vec![
            SpeciesDef::new(1, "Flarepup", "Fire", None, StatBlock::new(40, 50, 40, 55, 40, 60)),
            SpeciesDef::new(2, "Pebblit", "Rock", None, StatBlock::new(44, 48, 65, 50, 64, 43)),
        ])
    }

    fn party() -> Vec<OwnedCreature> {
        vec![
            OwnedCreature::from_species(&roster().species_at(0).unwrap().clone(), 5),
            OwnedCreature::from_species(&roster().species_at(1).unwrap().clone(), 3),
        ]
    }

    struct Fixture {
        config: GameConfig,
        grid: TileGrid,
        roster: Roster,
        rng: PcgRng,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                config: GameConfig::default(),
                grid: TileGrid::new(MapDimensions::new(1, 1)),
                roster: roster(),
                rng: PcgRng,
            }
        }

        fn env(&self) -> Env<'_, TileGrid, Roster, PcgRng> {
            Env::with_all(&self.grid, &self.roster, &self.rng)
        }
    }

    /// Ticks until the session reaches `target`, recording every distinct
    /// phase seen along the way. Panics after a generous budget.
    fn run_until(
        driver: &EncounterDriver<'_>,
        session: &mut EncounterSession,
        party: &[OwnedCreature],
        fixture: &Fixture,
        seeds: &mut SeedSequence,
        target: PhaseTag,
    ) -> Vec<PhaseTag> {
        let mut trace = vec![session.phase_tag()];
        for _ in 0..10_000 {
            driver
                .tick(session, party, &fixture.env(), seeds, DT)
                .unwrap();
            if *trace.last().unwrap() != session.phase_tag() {
                trace.push(session.phase_tag());
            }
            if session.phase_tag() == target {
                return trace;
            }
        }
        panic!("session never reached {target:?}; trace: {trace:?}");
    }

    #[test]
    fn phase_sequence_with_party_visits_every_phase_in_order() {
        let fixture = Fixture::new();
        let driver = EncounterDriver::new(&fixture.config);
        let mut seeds = SeedSequence::new(11);
        let mut session = EncounterSession::begin();
        let party = party();

        let trace = run_until(
            &driver,
            &mut session,
            &party,
            &fixture,
            &mut seeds,
            PhaseTag::CreatureSelection,
        );
        assert_eq!(
            trace,
            vec![
                PhaseTag::FadingToWhite,
                PhaseTag::BallGrowing,
                PhaseTag::BallHolding,
                PhaseTag::BallShrinking,
                PhaseTag::BattleSetup,
                PhaseTag::CreatureSelection,
            ]
        );
    }

    #[test]
    fn guest_path_skips_selection_only() {
        let fixture = Fixture::new();
        let driver = EncounterDriver::new(&fixture.config);
        let mut seeds = SeedSequence::new(11);
        let mut session = EncounterSession::begin();

        let trace = run_until(
            &driver,
            &mut session,
            &[],
            &fixture,
            &mut seeds,
            PhaseTag::BattleReady,
        );
        assert_eq!(
            trace,
            vec![
                PhaseTag::FadingToWhite,
                PhaseTag::BallGrowing,
                PhaseTag::BallHolding,
                PhaseTag::BallShrinking,
                PhaseTag::BattleSetup,
                PhaseTag::BattleReady,
            ]
        );

        // The loaner is a real combatant at full HP
        let battle = session.battle().unwrap();
        assert_eq!(battle.player.hp.current(), battle.player.hp.maximum());
        assert_eq!(battle.player.level, GameConfig::STARTING_LEVEL);
    }

    #[test]
    fn wild_combatant_starts_at_full_hp() {
        let fixture = Fixture::new();
        let driver = EncounterDriver::new(&fixture.config);
        let mut seeds = SeedSequence::new(4);
        let mut session = EncounterSession::begin();
        let party = party();

        run_until(
            &driver,
            &mut session,
            &party,
            &fixture,
            &mut seeds,
            PhaseTag::CreatureSelection,
        );
        let EncounterPhase::CreatureSelection { wild, .. } = &session.phase else {
            unreachable!();
        };
        assert_eq!(wild.hp.current(), wild.hp.maximum());
        assert!(!wild.fainted);
    }

    #[test]
    fn navigation_wraps_and_confirm_snapshots_choice() {
        let fixture = Fixture::new();
        let driver = EncounterDriver::new(&fixture.config);
        let mut seeds = SeedSequence::new(4);
        let mut session = EncounterSession::begin();
        let party = party();

        run_until(
            &driver,
            &mut session,
            &party,
            &fixture,
            &mut seeds,
            PhaseTag::CreatureSelection,
        );

        driver.navigate(&mut session, 1, party.len());
        assert_eq!(session.selection_cursor(), Some(1));
        driver.navigate(&mut session, 1, party.len());
        assert_eq!(session.selection_cursor(), Some(0));
        driver.navigate(&mut session, -1, party.len());
        assert_eq!(session.selection_cursor(), Some(1));

        driver.confirm_selection(&mut session, &party);
        let battle = session.battle().unwrap();
        assert_eq!(battle.player.name, party[1].name);
        assert_eq!(battle.player.level, party[1].level);
        assert_eq!(battle.player.hp.maximum(), party[1].stats.hp);
    }

    #[test]
    fn cancel_selects_the_first_party_member() {
        let fixture = Fixture::new();
        let driver = EncounterDriver::new(&fixture.config);
        let mut seeds = SeedSequence::new(4);
        let mut session = EncounterSession::begin();
        let party = party();

        run_until(
            &driver,
            &mut session,
            &party,
            &fixture,
            &mut seeds,
            PhaseTag::CreatureSelection,
        );
        driver.navigate(&mut session, 1, party.len());
        driver.cancel_selection(&mut session, &party);

        let battle = session.battle().unwrap();
        assert_eq!(battle.player.name, party[0].name);
    }

    fn battle_ready_session(player: Combatant, wild: Combatant) -> EncounterSession {
        EncounterSession {
            phase: EncounterPhase::BattleReady {
                battle: BattleState::new(player, wild),
            },
        }
    }

    fn sturdy(name: &str, speed: u32) -> Combatant {
        let species = SpeciesDef::new(
            0,
            name,
            "Normal",
            None,
            StatBlock::new(100, 50, 50, 50, 50, speed),
        );
        Combatant::wild(&species, 1)
    }

    #[test]
    fn knockout_fade_ends_session_exactly_once() {
        let fixture = Fixture::new();
        let driver = EncounterDriver::new(&fixture.config);
        let mut seeds = SeedSequence::new(0);
        let mut session = battle_ready_session(sturdy("Hero", 60), sturdy("Wildling", 40));

        if let Some(battle) = session.battle_mut() {
            battle.wild.hp.damage(999);
            battle.wild.fainted = true;
        }

        let ticks_needed =
            (fixture.config.faint_fade_duration / DT).ceil() as usize + 1;
        let mut end_reports = 0;
        for _ in 0..ticks_needed {
            let step = driver
                .tick(&mut session, &[], &fixture.env(), &mut seeds, DT)
                .unwrap();
            if step.ended {
                end_reports += 1;
                break; // the embedding layer drops the session here
            }
        }
        assert_eq!(end_reports, 1);

        // Opacity bottoms out at exactly zero
        let battle = session.battle().unwrap();
        assert_eq!(battle.faint_opacity(Side::Wild, &fixture.config), 0.0);
    }

    #[test]
    fn double_knockout_still_ends_once() {
        let fixture = Fixture::new();
        let driver = EncounterDriver::new(&fixture.config);
        let mut seeds = SeedSequence::new(0);
        let mut session = battle_ready_session(sturdy("Hero", 60), sturdy("Wildling", 40));

        if let Some(battle) = session.battle_mut() {
            battle.player.hp.damage(999);
            battle.wild.hp.damage(999);
        }

        let ticks_needed =
            (fixture.config.faint_fade_duration / DT).ceil() as usize + 1;
        let mut ended = false;
        for _ in 0..ticks_needed {
            let step = driver
                .tick(&mut session, &[], &fixture.env(), &mut seeds, DT)
                .unwrap();
            if step.ended {
                ended = true;
                break;
            }
        }
        assert!(ended);
    }

    #[test]
    fn moves_are_rejected_while_awaiting_acknowledgement() {
        let fixture = Fixture::new();
        let driver = EncounterDriver::new(&fixture.config);
        let mut seeds = SeedSequence::new(9);
        let mut session = battle_ready_session(sturdy("Hero", 60), sturdy("Wildling", 40));

        let first = driver
            .choose_move(&mut session, MoveKind::Tackle, &fixture.env(), &mut seeds)
            .unwrap();
        assert!(!first.events.is_empty());

        // Second choice before acknowledgement is ignored
        let second = driver
            .choose_move(&mut session, MoveKind::Tackle, &fixture.env(), &mut seeds)
            .unwrap();
        assert!(second.events.is_empty());

        // After acknowledgement the next turn is accepted and guard flags
        // are cleared
        driver.acknowledge(&mut session);
        let battle = session.battle().unwrap();
        assert!(!battle.player.guarded && !battle.wild.guarded);
        let third = driver
            .choose_move(&mut session, MoveKind::Heal, &fixture.env(), &mut seeds)
            .unwrap();
        assert!(!third.events.is_empty());
    }

    #[test]
    fn catch_succeeds_only_at_low_hp_and_ends_session() {
        let fixture = Fixture::new();
        let driver = EncounterDriver::new(&fixture.config);
        let mut session = battle_ready_session(sturdy("Hero", 60), sturdy("Wildling", 40));

        // Healthy wild: attempt announces, resolution fails, turn resumes
        let attempt = driver.request_catch(&mut session);
        assert!(matches!(
            attempt.events.as_slice(),
            [BattleEvent::CatchAttempted { .. }]
        ));
        let resolution = driver.acknowledge(&mut session);
        assert!(matches!(
            resolution.events.as_slice(),
            [BattleEvent::CatchEscaped { .. }]
        ));
        assert!(!resolution.ended);

        // HP unchanged, nothing consumed; dismiss the break-free text and
        // the battle accepts a move again
        driver.acknowledge(&mut session);
        let battle = session.battle().unwrap();
        assert_eq!(battle.wild.hp.current(), battle.wild.hp.maximum());
        assert!(battle.accepting_moves());

        // Weak wild: catch resolves successfully and ends the session
        if let Some(battle) = session.battle_mut() {
            let max = battle.wild.hp.maximum();
            battle.wild.hp.damage(max - max * 3 / 10);
        }
        driver.request_catch(&mut session);
        let resolution = driver.acknowledge(&mut session);
        assert!(resolution.ended);
        let [BattleEvent::CatchSucceeded { creature }] = resolution.events.as_slice() else {
            panic!("expected a successful catch, got {:?}", resolution.events);
        };
        assert_eq!(creature.name, "Wildling");
    }
}
