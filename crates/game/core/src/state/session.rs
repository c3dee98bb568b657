use super::{Combatant, Side};
use crate::config::GameConfig;

/// Flat label for the current phase, for presentation and logging.
/// `None` means no encounter session is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhaseTag {
    None,
    FadingToWhite,
    BallGrowing,
    BallHolding,
    BallShrinking,
    BattleSetup,
    CreatureSelection,
    BattleReady,
}

/// One phase of the encounter transition, with exactly the state that phase
/// needs. Modeling this as a tagged union keeps impossible combinations
/// (a ball scale without a session, a cursor outside selection)
/// unrepresentable.
///
/// `FadingToWhite` and `BallGrowing` share one timer: ball growth is a
/// function of total time since the fade began, not a second clock. The
/// timer is therefore carried across that transition and reset on every
/// other one.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncounterPhase {
    FadingToWhite { timer: f32 },
    BallGrowing { timer: f32 },
    BallHolding { timer: f32 },
    BallShrinking { timer: f32 },
    BattleSetup { wild: Combatant },
    CreatureSelection { wild: Combatant, cursor: usize },
    BattleReady { battle: BattleState },
}

impl EncounterPhase {
    pub fn tag(&self) -> PhaseTag {
        match self {
            EncounterPhase::FadingToWhite { .. } => PhaseTag::FadingToWhite,
            EncounterPhase::BallGrowing { .. } => PhaseTag::BallGrowing,
            EncounterPhase::BallHolding { .. } => PhaseTag::BallHolding,
            EncounterPhase::BallShrinking { .. } => PhaseTag::BallShrinking,
            EncounterPhase::BattleSetup { .. } => PhaseTag::BattleSetup,
            EncounterPhase::CreatureSelection { .. } => PhaseTag::CreatureSelection,
            EncounterPhase::BattleReady { .. } => PhaseTag::BattleReady,
        }
    }
}

/// Battle bookkeeping while the session sits in `BattleReady`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    pub player: Combatant,
    pub wild: Combatant,

    /// A catch attempt has been announced and awaits its resolving
    /// acknowledgement.
    pub pending_catch: bool,

    /// Announcements are on screen; move input stays closed until the
    /// presentation layer acknowledges them.
    pub awaiting_ack: bool,

    /// Post-knockout fade timers, started when a side faints.
    pub player_faint_timer: Option<f32>,
    pub wild_faint_timer: Option<f32>,
}

impl BattleState {
    pub fn new(player: Combatant, wild: Combatant) -> Self {
        Self {
            player,
            wild,
            pending_catch: false,
            awaiting_ack: false,
            player_faint_timer: None,
            wild_faint_timer: None,
        }
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Wild => &self.wild,
        }
    }

    pub fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::Player => &mut self.player,
            Side::Wild => &mut self.wild,
        }
    }

    /// Whether a move choice is currently accepted: announcements dismissed,
    /// no catch pending, and no knockout fade running.
    pub fn accepting_moves(&self) -> bool {
        !self.awaiting_ack
            && !self.pending_catch
            && self.player_faint_timer.is_none()
            && self.wild_faint_timer.is_none()
    }

    /// Clears the per-turn guard flags. Called when the turn's
    /// announcements are dismissed.
    pub fn clear_turn_flags(&mut self) {
        self.player.guarded = false;
        self.wild.guarded = false;
    }

    /// Sprite opacity of `side` during its knockout fade; 1.0 while the
    /// side is still standing.
    pub fn faint_opacity(&self, side: Side, config: &GameConfig) -> f32 {
        let timer = match side {
            Side::Player => self.player_faint_timer,
            Side::Wild => self.wild_faint_timer,
        };
        match timer {
            Some(elapsed) => (1.0 - elapsed / config.faint_fade_duration).clamp(0.0, 1.0),
            None => 1.0,
        }
    }
}

/// The lifetime of one encounter, from trigger to hand-back.
///
/// Owns the phase machine and, from battle setup onward, both combatant
/// snapshots. Dropped whole when the session ends.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterSession {
    pub phase: EncounterPhase,
}

impl EncounterSession {
    /// A new session at the start of the fade.
    pub fn begin() -> Self {
        Self {
            phase: EncounterPhase::FadingToWhite { timer: 0.0 },
        }
    }

    pub fn phase_tag(&self) -> PhaseTag {
        self.phase.tag()
    }

    pub fn battle(&self) -> Option<&BattleState> {
        match &self.phase {
            EncounterPhase::BattleReady { battle } => Some(battle),
            _ => None,
        }
    }

    pub fn battle_mut(&mut self) -> Option<&mut BattleState> {
        match &mut self.phase {
            EncounterPhase::BattleReady { battle } => Some(battle),
            _ => None,
        }
    }

    pub fn selection_cursor(&self) -> Option<usize> {
        match &self.phase {
            EncounterPhase::CreatureSelection { cursor, .. } => Some(*cursor),
            _ => None,
        }
    }

    /// White-fade opacity for the current phase.
    ///
    /// Ramps up during the fade, clamps at full white through the ball
    /// animation and setup, and is gone once the battle scene is up.
    pub fn fade_opacity(&self, config: &GameConfig) -> f32 {
        match &self.phase {
            EncounterPhase::FadingToWhite { timer } => (timer / config.fade_duration).clamp(0.0, 1.0),
            EncounterPhase::BallGrowing { .. }
            | EncounterPhase::BallHolding { .. }
            | EncounterPhase::BallShrinking { .. }
            | EncounterPhase::BattleSetup { .. }
            | EncounterPhase::CreatureSelection { .. } => 1.0,
            EncounterPhase::BattleReady { .. } => 0.0,
        }
    }

    /// Capture-ball scale for the current phase.
    ///
    /// Growth starts once the shared fade timer passes
    /// `ball_start_fraction * fade_duration` and keeps reading that same
    /// timer through `BallGrowing`.
    pub fn ball_scale(&self, config: &GameConfig) -> f32 {
        match &self.phase {
            EncounterPhase::FadingToWhite { timer } | EncounterPhase::BallGrowing { timer } => {
                let growth_start = config.ball_start_fraction * config.fade_duration;
                let progress = ((timer - growth_start) / config.ball_grow_duration).clamp(0.0, 1.0);
                progress * config.ball_target_scale
            }
            EncounterPhase::BallHolding { .. } => config.ball_target_scale,
            EncounterPhase::BallShrinking { timer } => {
                let progress = (1.0 - timer / config.ball_shrink_duration).clamp(0.0, 1.0);
                progress * config.ball_target_scale
            }
            EncounterPhase::BattleSetup { .. }
            | EncounterPhase::CreatureSelection { .. }
            | EncounterPhase::BattleReady { .. } => 0.0,
        }
    }
}
