use game_core::Direction;

/// Discrete events the presentation layer sends into the simulation.
///
/// Unrecognized or out-of-context events are silently ignored; input is
/// never an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// A direction key went down.
    PressDirection(Direction),
    /// A direction key came up.
    ReleaseDirection(Direction),
    /// The player committed a battle move by menu index.
    SelectMove(usize),
    /// The player threw a capture ball.
    Catch,
    /// Selection-menu navigation by offset (negative moves up).
    Navigate(i32),
    /// Confirm the current selection.
    Confirm,
    /// Cancel selection (falls back to the first entry).
    Cancel,
    /// Generic "any key": dismisses announcements and resolves pending
    /// catches.
    Acknowledge,
}
