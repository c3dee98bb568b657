//! Session orchestration.
//!
//! [`GameSession`] owns the simulation for one sitting: the avatar, the
//! encounter trigger, the optional encounter session, the player's party,
//! and the announcement queue. Each fixed tick drives the movement engine,
//! the encounter trigger, and the phase state machine in that order;
//! discrete input events are routed between ticks. The battle resolver runs
//! synchronously inside the input call that commits a move.

use std::collections::VecDeque;

use game_core::{
    AvatarState, BattleEvent, Combatant, EncounterDriver, EncounterSession, EncounterTrigger, Env,
    GameConfig, MapOracle, MoveKind, MovementEngine, OwnedCreature, PcgRng, PhaseTag, Position,
    Roster, SeedSequence, SessionTick, Side, SpeciesOracle, TileGrid,
};
use game_content::{GeneratorParams, default_roster, generate_map};
use tracing::{debug, info, warn};

use crate::error::{Result, RuntimeError};
use crate::frame::{FrameSnapshot, HpView};
use crate::input::InputEvent;
use crate::store::{CollectionStore, InMemoryStore, UserId};

/// Fixed simulation rate.
pub const TICK_HZ: u32 = 60;
pub const TICK_SECONDS: f32 = 1.0 / TICK_HZ as f32;

/// One player's running game: world, avatar, party, and (at most one)
/// active encounter session.
pub struct GameSession {
    config: GameConfig,
    grid: TileGrid,
    roster: Roster,
    rng: PcgRng,
    seeds: SeedSequence,
    user: UserId,
    store: Box<dyn CollectionStore>,

    avatar: AvatarState,
    trigger: EncounterTrigger,
    encounter: Option<EncounterSession>,
    party: Vec<OwnedCreature>,
    announcements: VecDeque<String>,
}

impl GameSession {
    pub fn builder() -> GameSessionBuilder {
        GameSessionBuilder::new()
    }

    /// Advances the simulation by one fixed tick.
    ///
    /// While roaming this runs the movement engine and then the encounter
    /// trigger; while an encounter is active it advances the phase state
    /// machine instead and movement input stays buffered.
    pub fn tick(&mut self) {
        match self.encounter.take() {
            None => {
                let engine = MovementEngine::new(&self.config);
                engine.tick(&mut self.avatar, &self.grid, TICK_SECONDS);

                if self.trigger.evaluate(
                    self.avatar.position,
                    &self.grid,
                    &self.rng,
                    &mut self.seeds,
                    self.config.encounter_rate,
                ) {
                    info!(cell = %self.avatar.position, "encounter triggered");
                    self.encounter = Some(EncounterSession::begin());
                }
            }
            Some(mut session) => {
                let step = {
                    let driver = EncounterDriver::new(&self.config);
                    let env = Env::with_all(&self.grid, &self.roster, &self.rng);
                    driver.tick(
                        &mut session,
                        &self.party,
                        &env,
                        &mut self.seeds,
                        TICK_SECONDS,
                    )
                };
                match step {
                    Ok(step) => {
                        let ended = self.absorb(step);
                        if !ended {
                            self.encounter = Some(session);
                        } else {
                            info!("encounter session ended");
                        }
                    }
                    Err(error) => {
                        // A missing oracle is a wiring bug; keep the
                        // session rather than losing the battle state.
                        warn!(%error, "encounter tick failed");
                        self.encounter = Some(session);
                    }
                }
            }
        }
    }

    /// Routes one discrete input event. Events that make no sense in the
    /// current state are silently ignored.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            // Key state is tracked even during encounters so the held set
            // matches the physical keyboard when control returns.
            InputEvent::PressDirection(direction) => self.avatar.press(direction),
            InputEvent::ReleaseDirection(direction) => self.avatar.release(direction),

            InputEvent::Navigate(offset) => {
                if let Some(session) = self.encounter.as_mut() {
                    let driver = EncounterDriver::new(&self.config);
                    driver.navigate(session, offset, self.party.len());
                }
            }
            InputEvent::Confirm => {
                if let Some(session) = self.encounter.as_mut() {
                    let driver = EncounterDriver::new(&self.config);
                    driver.confirm_selection(session, &self.party);
                }
            }
            InputEvent::Cancel => {
                if let Some(session) = self.encounter.as_mut() {
                    let driver = EncounterDriver::new(&self.config);
                    driver.cancel_selection(session, &self.party);
                }
            }

            InputEvent::SelectMove(index) => {
                let Some(kind) = MoveKind::ALL.get(index).copied() else {
                    debug!(index, "ignoring out-of-range move selection");
                    return;
                };
                self.drive_battle(|driver, session, env, seeds| {
                    driver
                        .choose_move(session, kind, env, seeds)
                        .unwrap_or_else(|error| {
                            warn!(%error, "move resolution failed");
                            SessionTick::default()
                        })
                });
            }
            InputEvent::Catch => {
                self.drive_battle(|driver, session, _env, _seeds| driver.request_catch(session));
            }
            InputEvent::Acknowledge => {
                self.announcements.clear();
                self.drive_battle(|driver, session, _env, _seeds| driver.acknowledge(session));
            }
        }
    }

    /// Builds the per-tick view for the presentation layer.
    pub fn frame(&self) -> FrameSnapshot {
        let battle = self.encounter.as_ref().and_then(|session| session.battle());
        let hp_view = |side: &Combatant| HpView {
            current: side.hp.current(),
            maximum: side.hp.maximum(),
        };

        FrameSnapshot {
            avatar_position: self.avatar.visual,
            facing: self.avatar.facing,
            mirrored: self.avatar.mirrored(),

            phase: self
                .encounter
                .as_ref()
                .map(|session| session.phase_tag())
                .unwrap_or(PhaseTag::None),
            fade_opacity: self
                .encounter
                .as_ref()
                .map(|session| session.fade_opacity(&self.config))
                .unwrap_or(0.0),
            ball_scale: self
                .encounter
                .as_ref()
                .map(|session| session.ball_scale(&self.config))
                .unwrap_or(0.0),

            player_hp: battle.map(|b| hp_view(&b.player)),
            wild_hp: battle.map(|b| hp_view(&b.wild)),
            player_opacity: battle
                .map(|b| b.faint_opacity(Side::Player, &self.config))
                .unwrap_or(1.0),
            wild_opacity: battle
                .map(|b| b.faint_opacity(Side::Wild, &self.config))
                .unwrap_or(1.0),

            selection_cursor: self
                .encounter
                .as_ref()
                .and_then(|session| session.selection_cursor()),
            announcements: self.announcements.iter().cloned().collect(),
            awaiting_ack: battle.map(|b| b.awaiting_ack).unwrap_or(false),
        }
    }

    pub fn party(&self) -> &[OwnedCreature] {
        &self.party
    }

    pub fn in_encounter(&self) -> bool {
        self.encounter.is_some()
    }

    /// Runs a battle-facing driver call against the active session and
    /// absorbs its outcome. No-op while roaming.
    fn drive_battle<F>(&mut self, operation: F)
    where
        F: FnOnce(
            &EncounterDriver<'_>,
            &mut EncounterSession,
            &Env<'_, TileGrid, Roster, PcgRng>,
            &mut SeedSequence,
        ) -> SessionTick,
    {
        let Some(mut session) = self.encounter.take() else {
            return;
        };
        let step = {
            let driver = EncounterDriver::new(&self.config);
            let env = Env::with_all(&self.grid, &self.roster, &self.rng);
            operation(&driver, &mut session, &env, &mut self.seeds)
        };
        let ended = self.absorb(step);
        if !ended {
            self.encounter = Some(session);
        } else {
            info!("encounter session ended");
        }
    }

    /// Queues announcements and applies persistence side effects. Returns
    /// whether the session ended.
    fn absorb(&mut self, step: SessionTick) -> bool {
        for event in &step.events {
            match event {
                BattleEvent::LevelGained { name, new_level } => {
                    // In-memory party first; the store write is best-effort
                    if let Some(creature) =
                        self.party.iter_mut().find(|creature| &creature.name == name)
                    {
                        creature.level = *new_level;
                    }
                    match self.store.save_level(self.user, name, *new_level) {
                        Ok(true) => debug!(%name, new_level, "level saved"),
                        Ok(false) => debug!(%name, "level-up had no stored creature to update"),
                        Err(error) => warn!(%error, "failed to persist level-up"),
                    }
                }
                BattleEvent::CatchSucceeded { creature } => {
                    self.party.push(creature.clone());
                    match self.store.add_to_collection(self.user, creature.clone()) {
                        Ok(_) => debug!(name = %creature.name, "catch persisted"),
                        Err(error) => warn!(%error, "failed to persist catch"),
                    }
                }
                _ => {}
            }
            self.announcements.push_back(event.to_string());
        }
        step.ended
    }
}

/// Builder assembling a [`GameSession`] from parts, with sensible defaults
/// for anything not supplied: a generated default map, the built-in
/// roster, an in-memory store, and an entropy-derived seed.
pub struct GameSessionBuilder {
    config: GameConfig,
    grid: Option<TileGrid>,
    roster: Option<Roster>,
    store: Option<Box<dyn CollectionStore>>,
    user: UserId,
    seed: Option<u64>,
    start: Option<Position>,
}

impl GameSessionBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            grid: None,
            roster: None,
            store: None,
            user: UserId(1),
            seed: None,
            start: None,
        }
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn grid(mut self, grid: TileGrid) -> Self {
        self.grid = Some(grid);
        self
    }

    pub fn roster(mut self, roster: Roster) -> Self {
        self.roster = Some(roster);
        self
    }

    pub fn store(mut self, store: Box<dyn CollectionStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn user(mut self, user: UserId) -> Self {
        self.user = user;
        self
    }

    /// Fixes the session seed for deterministic replay. Without this the
    /// seed comes from process entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn start_position(mut self, start: Position) -> Self {
        self.start = Some(start);
        self
    }

    pub fn build(self) -> Result<GameSession> {
        let config = self.config;
        let grid = self
            .grid
            .unwrap_or_else(|| generate_map(GeneratorParams::new(30, 20)));
        let roster = self.roster.unwrap_or_else(default_roster);
        if roster.species_count() == 0 {
            return Err(RuntimeError::EmptyRoster);
        }
        let store = self.store.unwrap_or_else(|| Box::new(InMemoryStore::new()));
        let seed = self.seed.unwrap_or_else(rand::random);
        let start = match self.start {
            Some(start) => start,
            None => spawn_point(&grid).ok_or(RuntimeError::NoSpawnPoint)?,
        };

        let party = match store.load_owned_creatures(self.user) {
            Ok(creatures) => creatures,
            Err(error) => {
                // Best-effort: the guest path (and its loaner combatant)
                // covers an empty party
                warn!(%error, user = %self.user, "failed to load collection; starting empty");
                Vec::new()
            }
        };
        info!(user = %self.user, party = party.len(), seed, "session ready");

        Ok(GameSession {
            config,
            trigger: EncounterTrigger::new(start),
            avatar: AvatarState::at(start),
            grid,
            roster,
            rng: PcgRng,
            seeds: SeedSequence::new(seed),
            user: self.user,
            store,
            encounter: None,
            party,
            announcements: VecDeque::new(),
        })
    }
}

impl Default for GameSessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// First walkable tile in row-major order.
fn spawn_point(grid: &TileGrid) -> Option<Position> {
    let dims = grid.dimensions();
    for y in 0..dims.height as i32 {
        for x in 0..dims.width as i32 {
            let position = Position::new(x, y);
            if grid.tile(position).is_some_and(|tile| tile.is_walkable()) {
                return Some(position);
            }
        }
    }
    None
}
