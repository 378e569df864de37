//! The boundary between the engine and a presentation back end.
//!
//! The state machine asks the adapter to render and then blocks on
//! [`IoAdapter::next_event`]. Adapters see the session only by shared
//! reference and never mutate it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::control::ControlId;
use crate::error::EngineResult;
use crate::session::Session;

/// What happened to a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// The pointer moved onto the control.
    HoverEnter,
    /// The pointer left the control.
    HoverExit,
    /// A pointer button went down on the control.
    PressDown,
    /// A pointer button was released on the control.
    PressUp,
    /// The control was activated in one step (a hotkey or a full click).
    Clicked,
}

/// One input event addressed to a control.
///
/// The target is a raw registry index so adapters may report events on
/// positions that hold no control; the engine ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputEvent {
    /// Registry index of the target control.
    pub control: usize,
    /// The action performed.
    pub action: Action,
}

impl InputEvent {
    /// Create an event for a control.
    pub fn new(control: ControlId, action: Action) -> Self {
        Self {
            control: control.index(),
            action,
        }
    }

    /// A one-step activation of a control.
    pub fn clicked(control: ControlId) -> Self {
        Self::new(control, Action::Clicked)
    }

    /// The target control, if the index names one.
    pub fn target(&self) -> Option<ControlId> {
        ControlId::from_index(self.control)
    }
}

/// A presentation back end.
pub trait IoAdapter {
    /// One-time setup before the first render.
    fn initialize(&mut self) -> EngineResult<()> {
        Ok(())
    }

    /// Redraw the display from the current session state.
    fn render(&mut self, session: &Session) -> EngineResult<()>;

    /// Block until the next input event.
    ///
    /// Returns `Ok(None)` when the user asked to quit or input ran out.
    fn next_event(&mut self, session: &Session) -> EngineResult<Option<InputEvent>>;

    /// How long a keyboard-activated button stays visibly pressed.
    ///
    /// `None` skips the flash entirely.
    fn flash_duration(&self) -> Option<Duration> {
        None
    }
}

impl<A: IoAdapter + ?Sized> IoAdapter for &mut A {
    fn initialize(&mut self) -> EngineResult<()> {
        (**self).initialize()
    }

    fn render(&mut self, session: &Session) -> EngineResult<()> {
        (**self).render(session)
    }

    fn next_event(&mut self, session: &Session) -> EngineResult<Option<InputEvent>> {
        (**self).next_event(session)
    }

    fn flash_duration(&self) -> Option<Duration> {
        (**self).flash_duration()
    }
}

/// The family of back end to drive a game with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IoMode {
    /// Line-oriented plain text.
    Text,
    /// Full-screen character terminal.
    Terminal,
    /// Graphical window.
    Graphical,
}

impl IoMode {
    /// Choose a mode from the environment: a graphical display wins,
    /// then a terminal, then plain text.
    pub fn detect(display: Option<&str>, term: Option<&str>) -> Self {
        let present = |v: Option<&str>| v.is_some_and(|s| !s.is_empty());
        if present(display) {
            Self::Graphical
        } else if present(term) && term != Some("dumb") {
            Self::Terminal
        } else {
            Self::Text
        }
    }

    /// Choose a mode from the `DISPLAY` and `TERM` variables.
    pub fn from_env() -> Self {
        let display = std::env::var("DISPLAY").ok();
        let term = std::env::var("TERM").ok();
        Self::detect(display.as_deref(), term.as_deref())
    }
}
