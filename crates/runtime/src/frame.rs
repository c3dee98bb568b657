use game_core::{Direction, PhaseTag, Vec2};

/// One combatant's HP meter as the presentation layer sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HpView {
    pub current: u32,
    pub maximum: u32,
}

/// Everything the presentation layer needs to draw one tick.
///
/// Produced fresh each tick; the renderer never reaches into simulation
/// state directly.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSnapshot {
    /// Interpolated avatar position in tile units.
    pub avatar_position: Vec2,
    pub facing: Direction,
    /// Draw the mirrored eastward frame instead of a dedicated west sprite.
    pub mirrored: bool,

    /// Current encounter phase; `PhaseTag::None` while roaming.
    pub phase: PhaseTag,
    /// White-fade opacity in `[0, 1]`.
    pub fade_opacity: f32,
    /// Capture-ball scale in `[0, target]`.
    pub ball_scale: f32,

    /// HP meters, present from battle setup until the session ends.
    pub player_hp: Option<HpView>,
    pub wild_hp: Option<HpView>,
    /// Knockout-fade sprite opacities, 1.0 while a side stands.
    pub player_opacity: f32,
    pub wild_opacity: f32,

    /// Cursor index while creature selection is open.
    pub selection_cursor: Option<usize>,
    /// Announcements awaiting dismissal, oldest first.
    pub announcements: Vec<String>,
    /// Whether the simulation is blocked on an acknowledgement.
    pub awaiting_ack: bool,
}
