/// Simulation configuration constants and tunable parameters.
///
/// Encounter probability and the catch threshold are tuning knobs rather than
/// rules, so they live here alongside the animation timings instead of being
/// hard-coded at their use sites.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Baseline walking speed in tiles per second, before the per-tile
    /// multiplier is applied.
    pub base_speed: f32,

    /// Probability that entering a wild-zone tile starts an encounter.
    pub encounter_rate: f32,

    /// Fraction of the wild combatant's max HP at or below which a catch
    /// attempt succeeds.
    pub catch_threshold: f32,

    /// Duration of the fade-to-white ramp in seconds.
    pub fade_duration: f32,

    /// Fraction of `fade_duration` after which the capture ball starts
    /// growing. Fade and growth share one timer.
    pub ball_start_fraction: f32,

    /// Seconds from growth start until the ball reaches full scale.
    pub ball_grow_duration: f32,

    /// Scale the capture ball grows to and holds at.
    pub ball_target_scale: f32,

    /// Seconds the ball holds at full scale.
    pub ball_hold_duration: f32,

    /// Seconds for the ball to shrink back to zero.
    pub ball_shrink_duration: f32,

    /// Seconds for a fainted side's sprite to fade out and end the session.
    pub faint_fade_duration: f32,
}

impl GameConfig {
    // ===== fixed balance values =====
    /// Level every freshly caught or loaner combatant starts at.
    pub const STARTING_LEVEL: u32 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BASE_SPEED: f32 = 4.0;
    pub const DEFAULT_ENCOUNTER_RATE: f32 = 0.10;
    pub const DEFAULT_CATCH_THRESHOLD: f32 = 0.30;
    pub const DEFAULT_FADE_DURATION: f32 = 1.0;
    pub const DEFAULT_BALL_START_FRACTION: f32 = 0.5;
    pub const DEFAULT_BALL_GROW_DURATION: f32 = 0.6;
    pub const DEFAULT_BALL_TARGET_SCALE: f32 = 1.0;
    pub const DEFAULT_BALL_HOLD_DURATION: f32 = 0.4;
    pub const DEFAULT_BALL_SHRINK_DURATION: f32 = 0.5;
    pub const DEFAULT_FAINT_FADE_DURATION: f32 = 1.0;

    pub fn new() -> Self {
        Self {
            base_speed: Self::DEFAULT_BASE_SPEED,
            encounter_rate: Self::DEFAULT_ENCOUNTER_RATE,
            catch_threshold: Self::DEFAULT_CATCH_THRESHOLD,
            fade_duration: Self::DEFAULT_FADE_DURATION,
            ball_start_fraction: Self::DEFAULT_BALL_START_FRACTION,
            ball_grow_duration: Self::DEFAULT_BALL_GROW_DURATION,
            ball_target_scale: Self::DEFAULT_BALL_TARGET_SCALE,
            ball_hold_duration: Self::DEFAULT_BALL_HOLD_DURATION,
            ball_shrink_duration: Self::DEFAULT_BALL_SHRINK_DURATION,
            faint_fade_duration: Self::DEFAULT_FAINT_FADE_DURATION,
        }
    }

    pub fn with_encounter_rate(encounter_rate: f32) -> Self {
        Self {
            encounter_rate,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
