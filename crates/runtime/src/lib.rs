//! Runtime orchestration for the exploration-game simulation.
//!
//! This crate wires the deterministic core into a driveable session: a
//! fixed-rate tick advances the movement engine, the encounter trigger,
//! and the phase state machine in that order; discrete input events arrive
//! from the presentation layer between ticks; and a per-tick frame
//! snapshot carries everything a renderer needs back out.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the orchestrator and its builder
//! - [`input`] and [`frame`] define the presentation boundary
//! - [`store`] provides the persistence collaborator and its adapters
pub mod frame;
pub mod input;
pub mod session;
pub mod store;

mod error;

pub use error::{Result, RuntimeError};
pub use frame::{FrameSnapshot, HpView};
pub use input::InputEvent;
pub use session::{GameSession, GameSessionBuilder, TICK_HZ, TICK_SECONDS};
pub use store::{CollectionStore, InMemoryStore, JsonFileStore, StoreError, UserId, UserRecord};
