//! Terminal setup, teardown, and input translation.

use std::collections::VecDeque;
use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind, MouseButton,
    MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use tracing::debug;
use yz_engine::{Action, ControlId, EngineResult, InputEvent, IoAdapter, Session};

use crate::keys::{KeyCommand, map_key};
use crate::layout::Board;
use crate::view::{self, Overlay};

/// How long a keyboard-pushed button stays drawn as pressed.
pub const FLASH: Duration = Duration::from_millis(100);

/// Puts the terminal back the way it was found.
struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        disable_raw_mode().ok();
        execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            crossterm::cursor::Show
        )
        .ok();
    }
}

/// Whether to keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Full-screen adapter drawing with ratatui.
///
/// One terminal event can expand into several engine events (a click is a
/// hover change plus a press), so translated events wait in a queue.
pub struct TerminalAdapter<B: Backend> {
    terminal: Terminal<B>,
    board: Board,
    overlay: Overlay,
    queue: VecDeque<InputEvent>,
    hovered: Option<ControlId>,
    pressed: Option<ControlId>,
    _guard: Option<RawModeGuard>,
}

impl TerminalAdapter<CrosstermBackend<Stdout>> {
    /// Take over the process terminal: raw mode, alternate screen, and
    /// mouse capture. All three are undone when the adapter is dropped.
    pub fn open() -> EngineResult<Self> {
        let guard = RawModeGuard::enter()?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self::from_terminal(terminal, Some(guard)))
    }
}

impl<B: Backend> TerminalAdapter<B> {
    /// Draw to an arbitrary backend without touching the process terminal.
    pub fn with_backend(backend: B) -> EngineResult<Self> {
        Ok(Self::from_terminal(Terminal::new(backend)?, None))
    }

    fn from_terminal(terminal: Terminal<B>, guard: Option<RawModeGuard>) -> Self {
        let board = Board::new(Rect::default());
        Self {
            terminal,
            board,
            overlay: Overlay::None,
            queue: VecDeque::new(),
            hovered: None,
            pressed: None,
            _guard: guard,
        }
    }

    /// The backend being drawn to.
    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    /// The overlay currently shown.
    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    /// Take the next translated event, if one is waiting.
    pub fn pop_event(&mut self) -> Option<InputEvent> {
        self.queue.pop_front()
    }

    fn draw(&mut self, session: &Session) -> EngineResult<()> {
        let overlay = self.overlay;
        let mut board = self.board;
        self.terminal.draw(|frame| {
            board = Board::new(frame.area());
            view::draw(frame, session, &board, overlay);
        })?;
        self.board = board;
        Ok(())
    }

    /// Translate one terminal event, queueing any engine events it yields.
    ///
    /// Returns `false` once the player asked to quit.
    pub fn handle_event(&mut self, event: Event, session: &Session) -> EngineResult<bool> {
        let flow = match event {
            Event::Key(key) => self.handle_key(key, session)?,
            Event::Mouse(mouse) => self.handle_mouse(mouse, session)?,
            Event::Resize(..) => {
                self.terminal.autoresize()?;
                self.draw(session)?;
                Flow::Continue
            }
            _ => Flow::Continue,
        };
        Ok(flow == Flow::Continue)
    }

    fn handle_key(&mut self, key: KeyEvent, session: &Session) -> EngineResult<Flow> {
        let command = map_key(key, session.registry());

        if self.overlay != Overlay::None {
            if key.kind != KeyEventKind::Press {
                return Ok(Flow::Continue);
            }
            // any key leaves an overlay; help can hop to the rules
            match command {
                Some(KeyCommand::Quit) => return Ok(Flow::Quit),
                Some(KeyCommand::Rules) => self.overlay = Overlay::Rules,
                _ => self.overlay = Overlay::None,
            }
            self.draw(session)?;
            return Ok(Flow::Continue);
        }

        match command {
            Some(KeyCommand::Press(id)) => self.queue.push_back(InputEvent::clicked(id)),
            Some(KeyCommand::Help) => self.show(Overlay::Help, session)?,
            Some(KeyCommand::Rules) => self.show(Overlay::Rules, session)?,
            Some(KeyCommand::Redraw) => {
                self.terminal.clear()?;
                self.draw(session)?;
            }
            Some(KeyCommand::Quit) => return Ok(Flow::Quit),
            None => {}
        }
        Ok(Flow::Continue)
    }

    fn show(&mut self, overlay: Overlay, session: &Session) -> EngineResult<()> {
        debug!(?overlay, "showing overlay");
        self.overlay = overlay;
        self.draw(session)
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, session: &Session) -> EngineResult<Flow> {
        if self.overlay != Overlay::None {
            if matches!(mouse.kind, MouseEventKind::Down(_)) {
                self.overlay = Overlay::None;
                self.draw(session)?;
            }
            return Ok(Flow::Continue);
        }

        let target = self.board.hit_test(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                self.track_hover(target);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.track_hover(target);
                if let Some(id) = target {
                    self.pressed = Some(id);
                    self.queue.push_back(InputEvent::new(id, Action::PressDown));
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.track_hover(target);
                if let Some(id) = self.pressed.take() {
                    self.queue.push_back(InputEvent::new(id, Action::PressUp));
                }
            }
            _ => {}
        }
        Ok(Flow::Continue)
    }

    fn track_hover(&mut self, target: Option<ControlId>) {
        if target == self.hovered {
            return;
        }
        if let Some(old) = self.hovered {
            self.queue.push_back(InputEvent::new(old, Action::HoverExit));
        }
        if let Some(new) = target {
            self.queue.push_back(InputEvent::new(new, Action::HoverEnter));
        }
        self.hovered = target;
    }
}

impl<B: Backend> IoAdapter for TerminalAdapter<B> {
    fn initialize(&mut self) -> EngineResult<()> {
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    fn render(&mut self, session: &Session) -> EngineResult<()> {
        self.draw(session)
    }

    fn next_event(&mut self, session: &Session) -> EngineResult<Option<InputEvent>> {
        loop {
            if let Some(event) = self.queue.pop_front() {
                return Ok(Some(event));
            }
            let event = event::read()?;
            if !self.handle_event(event, session)? {
                return Ok(None);
            }
        }
    }

    fn flash_duration(&self) -> Option<Duration> {
        Some(FLASH)
    }
}
