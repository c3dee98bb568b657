use arrayvec::ArrayVec;

use super::{Direction, Position, Vec2};

/// Insertion-ordered set of held direction keys.
///
/// A direction appears at most once; the earliest-held entry decides which
/// way the next transition goes when several keys are down at once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeldDirections {
    keys: ArrayVec<Direction, 4>,
}

impl HeldDirections {
    /// Records `direction` as held. No effect if it is already down.
    pub fn press(&mut self, direction: Direction) {
        if !self.keys.contains(&direction) {
            self.keys.push(direction);
        }
    }

    pub fn release(&mut self, direction: Direction) {
        if let Some(index) = self.keys.iter().position(|&held| held == direction) {
            self.keys.remove(index);
        }
    }

    /// The first-pressed direction still held, if any.
    pub fn first(&self) -> Option<Direction> {
        self.keys.first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// A committed one-tile move. The target and the departure-tile speed
/// factor are fixed for the whole transition; later key events only affect
/// the next transition.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveTransition {
    pub target: Position,
    pub speed_factor: f32,
}

/// Movement-engine state for the player avatar.
///
/// `position` is the logical grid cell (committed at transition start);
/// `visual` converges to it over the following ticks.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AvatarState {
    pub position: Position,
    pub visual: Vec2,
    pub facing: Direction,
    pub held: HeldDirections,
    pub transition: Option<ActiveTransition>,
}

impl AvatarState {
    pub fn at(position: Position) -> Self {
        Self {
            position,
            visual: position.into(),
            facing: Direction::Down,
            held: HeldDirections::default(),
            transition: None,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.transition.is_some()
    }

    /// Rendering hint: westward sprites are the mirrored eastward frame.
    pub fn mirrored(&self) -> bool {
        self.facing == Direction::Left
    }

    pub fn press(&mut self, direction: Direction) {
        self.held.press(direction);
    }

    pub fn release(&mut self, direction: Direction) {
        self.held.release(direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_is_idempotent_and_ordered() {
        let mut held = HeldDirections::default();
        held.press(Direction::Left);
        held.press(Direction::Up);
        held.press(Direction::Left);

        assert_eq!(held.first(), Some(Direction::Left));
        held.release(Direction::Left);
        assert_eq!(held.first(), Some(Direction::Up));
        held.release(Direction::Up);
        assert!(held.is_empty());
    }

    #[test]
    fn releasing_unheld_key_is_a_no_op() {
        let mut held = HeldDirections::default();
        held.press(Direction::Right);
        held.release(Direction::Down);
        assert_eq!(held.first(), Some(Direction::Right));
    }

    #[test]
    fn fresh_avatar_is_idle_at_its_cell() {
        let avatar = AvatarState::at(Position::new(3, 4));
        assert!(!avatar.is_moving());
        assert_eq!(avatar.visual, Vec2::new(3.0, 4.0));
        assert!(!avatar.mirrored());
    }
}
