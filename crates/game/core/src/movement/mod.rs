//! Continuous-motion movement engine.
//!
//! The avatar walks the grid one committed tile at a time: a transition
//! picks its target from the first-held direction key, snapshots the
//! departure tile's speed multiplier, and then interpolates the visual
//! position to the target over the following ticks. A committed transition
//! cannot be interrupted, retargeted, or reversed; key events only shape
//! the next one.

use crate::config::GameConfig;
use crate::env::MapOracle;
use crate::state::{ActiveTransition, AvatarState, Vec2};

/// Drives [`AvatarState`] across ticks against a walkability grid.
pub struct MovementEngine<'a> {
    config: &'a GameConfig,
}

impl<'a> MovementEngine<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Self { config }
    }

    /// Advances the avatar by one fixed time step of `dt` seconds.
    ///
    /// Returns whether the avatar moved this tick, so callers can skip
    /// redundant repaint/trigger work on idle ticks.
    ///
    /// When a transition finishes, the avatar snaps to the target and
    /// immediately attempts the next transition from the held keys; there
    /// is no one-tick idle gap between consecutive steps while a key is
    /// held.
    pub fn tick(
        &self,
        avatar: &mut AvatarState,
        map: &(impl MapOracle + ?Sized),
        dt: f32,
    ) -> bool {
        if avatar.transition.is_none() && !try_begin_transition(avatar, map) {
            return false;
        }

        let Some(transition) = avatar.transition else {
            return false;
        };

        let step = self.config.base_speed * transition.speed_factor * dt;
        let target = Vec2::from(transition.target);
        let remaining = avatar.visual.distance_to(target);

        if remaining <= step {
            avatar.visual = target;
            avatar.transition = None;
            try_begin_transition(avatar, map);
        } else {
            avatar.visual.x += (target.x - avatar.visual.x) / remaining * step;
            avatar.visual.y += (target.y - avatar.visual.y) / remaining * step;
        }

        true
    }
}

/// Attempts to commit a transition from the held-key set.
///
/// The first-held direction wins. The speed multiplier is snapshotted from
/// the tile being departed, not the one being entered; a missing departure
/// tile falls back to the baseline multiplier. Returns whether a transition
/// was initiated.
fn try_begin_transition(avatar: &mut AvatarState, map: &(impl MapOracle + ?Sized)) -> bool {
    let Some(direction) = avatar.held.first() else {
        return false;
    };

    let target = avatar.position.step(direction);
    if !map.tile(target).is_some_and(|tile| tile.is_walkable()) {
        return false;
    }

    let speed_factor = map
        .tile(avatar.position)
        .map(|tile| tile.speed_factor())
        .unwrap_or(1.0);

    // The logical cell is committed here; the visual position catches up.
    avatar.facing = direction;
    avatar.position = target;
    avatar.transition = Some(ActiveTransition {
        target,
        speed_factor,
    });

    true
}
