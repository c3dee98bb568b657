//! Encounter lifecycle: the trigger that starts a session and the phase
//! machine that carries it from fade-in to battle and back out.
mod phase;
mod trigger;

pub use phase::{EncounterDriver, SessionTick};
pub use trigger::EncounterTrigger;
