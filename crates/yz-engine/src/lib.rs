//! Game engine for Yahtzee.
//!
//! Provides the control registry (dice, the action button, and the sixteen
//! scoring slots), the scoring engine, and the turn state machine that
//! sequences rolls, rerolls, and commitments. Presentation back ends plug in
//! through the [`IoAdapter`] trait and drive every game identically.

pub mod adapter;
pub mod category;
pub mod config;
pub mod control;
pub mod dice;
pub mod error;
pub mod game;
pub mod help;
pub mod scoring;
pub mod session;

pub use adapter::{Action, InputEvent, IoAdapter, IoMode};
pub use category::Category;
pub use config::GameConfig;
pub use control::{ButtonMode, Control, ControlId, ControlKind, Registry};
pub use dice::{LoadedDice, Roller};
pub use error::{EngineError, EngineResult};
pub use game::{Game, SessionEnd, Transition, TurnState};
pub use scoring::{Histogram, Scorecard};
pub use session::Session;
