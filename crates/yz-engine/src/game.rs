//! The turn state machine.
//!
//! Each pass of the main loop recomputes the button state from the
//! registry, renders, and then waits in the "awaiting a valid event"
//! sub-state until an event actually changes something. Events on disabled
//! or nonexistent controls are consumed without effect.
//!
//! On the final roll with a single open slot the machine feeds itself the
//! obvious inputs (select that slot, then press the button) instead of
//! waiting on the adapter.

use std::thread;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

use crate::adapter::{Action, InputEvent, IoAdapter};
use crate::category::Category;
use crate::config::GameConfig;
use crate::control::{ButtonMode, ControlId};
use crate::dice::Roller;
use crate::error::EngineResult;
use crate::session::Session;

/// Where the current turn stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnState {
    /// Rolls remain and nothing is marked or selected.
    Rolling,
    /// Dice are marked for reroll; the button rolls them.
    AwaitingReroll,
    /// A slot is selected or the rolls are used up; the button scores.
    ReadyToScore,
    /// Every slot is committed.
    GameOver,
    /// Waiting for the player to start another game.
    NewGamePrompt,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionEnd {
    /// All slots were filled.
    Completed {
        /// The final score.
        total: u32,
    },
    /// The adapter reported end of input.
    Quit,
}

/// The effect of one dispatched event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Nothing changed.
    Ignored,
    /// Only pointer hover state changed.
    Hover,
    /// The button is being held down.
    ButtonPressed,
    /// The button was released away from the pointer, cancelling the press.
    ButtonReleased,
    /// A die was marked or unmarked for reroll.
    DieToggled {
        /// Position of the die.
        die: usize,
        /// Whether the die is now marked.
        marked: bool,
    },
    /// A slot became the scoring choice.
    SlotSelected(Category),
    /// The scoring choice was withdrawn.
    SlotDeselected(Category),
    /// A slot's score was committed.
    Committed {
        /// The slot committed.
        category: Category,
        /// The points recorded.
        score: u32,
    },
    /// The marked dice were rerolled.
    Rerolled {
        /// The roll count after rerolling.
        roll_count: u8,
    },
}

/// Drives sessions from start to finish against an adapter.
#[derive(Debug)]
pub struct Game {
    session: Session,
    needs_reset: bool,
    prompting: bool,
}

impl Game {
    /// Create a game with dice seeded from the configuration.
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_roller(Box::new(rng))
    }

    /// Create a game with a specific dice source.
    pub fn with_roller(roller: Box<dyn Roller>) -> Self {
        Self {
            session: Session::new(roller),
            needs_reset: false,
            prompting: false,
        }
    }

    /// The current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Where the current turn stands.
    pub fn state(&self) -> TurnState {
        let s = &self.session;
        if self.prompting {
            TurnState::NewGamePrompt
        } else if s.open_slot_count() == 0 {
            TurnState::GameOver
        } else if s.selected_slot().is_some() || s.is_final_roll() {
            TurnState::ReadyToScore
        } else if s.marked_dice_count() > 0 {
            TurnState::AwaitingReroll
        } else {
            TurnState::Rolling
        }
    }

    /// Bring the session to a fresh game if the previous one was played.
    pub fn begin(&mut self) {
        if self.needs_reset {
            self.session.restart();
        }
        self.needs_reset = true;
        self.prompting = false;
    }

    /// Update the button and dice for the current turn.
    ///
    /// Finalizes the derived scores and reports [`TurnState::GameOver`]
    /// once no slot is open.
    pub fn prepare_turn(&mut self) -> TurnState {
        let s = &mut self.session;
        if s.open_slot_count() == 0 {
            s.update_scores();
            return TurnState::GameOver;
        }
        let selected = s.selected_slot().is_some();
        if s.is_final_roll() || selected {
            s.set_button(ButtonMode::Score, selected);
            if s.is_final_roll() {
                s.fix_dice();
            }
        } else {
            let marked = s.marked_dice_count() > 0;
            s.set_button(ButtonMode::Roll, marked);
        }
        self.state()
    }

    /// The event the machine supplies itself, if the next step is forced.
    ///
    /// On the final roll with one open slot, that slot is selected and then
    /// scored without consulting the adapter.
    pub fn synthesized_event(&self) -> Option<InputEvent> {
        let s = &self.session;
        if !s.is_final_roll() || s.open_slot_count() != 1 {
            return None;
        }
        if s.selected_slot().is_some() {
            Some(InputEvent::clicked(ControlId::Button))
        } else {
            s.open_slots()
                .next()
                .map(|cat| InputEvent::clicked(ControlId::Slot(cat)))
        }
    }

    /// Apply one input event to the session.
    pub fn dispatch(&mut self, event: InputEvent) -> Transition {
        let Some(id) = event.target() else {
            trace!(index = event.control, "event for nonexistent control");
            return Transition::Ignored;
        };
        if self.session.registry().get(id).is_disabled() {
            trace!(?id, "event for disabled control");
            return Transition::Ignored;
        }

        let registry = self.session.registry_mut();
        match event.action {
            Action::HoverEnter => {
                registry.clear_hovering();
                registry.get_mut(id).set_hovering(true);
            }
            Action::HoverExit => registry.get_mut(id).set_hovering(false),
            _ => {}
        }

        match id {
            ControlId::Die(die) => self.on_die(die, event.action),
            ControlId::Slot(category) => self.on_slot(category, event.action),
            ControlId::Button => self.on_button(event.action),
        }
    }

    fn on_die(&mut self, die: usize, action: Action) -> Transition {
        if self.session.is_final_roll() {
            return Transition::Ignored;
        }
        match action {
            Action::PressDown | Action::Clicked => {
                let s = &mut self.session;
                let marked = s.registry_mut().get_mut(ControlId::Die(die)).toggle_selected();
                if let Some(cat) = s.selected_slot() {
                    s.registry_mut().slot_mut(cat).clear_selected();
                    s.update_open_slots();
                    s.update_scores();
                }
                Transition::DieToggled { die, marked }
            }
            Action::HoverEnter | Action::HoverExit => Transition::Hover,
            Action::PressUp => Transition::Ignored,
        }
    }

    fn on_slot(&mut self, category: Category, action: Action) -> Transition {
        match action {
            Action::PressDown | Action::Clicked => {
                let s = &mut self.session;
                let previous = s.selected_slot();
                let registry = s.registry_mut();
                let transition = if previous == Some(category) {
                    registry.slot_mut(category).clear_selected();
                    Transition::SlotDeselected(category)
                } else {
                    if let Some(prev) = previous {
                        registry.slot_mut(prev).clear_selected();
                    }
                    for die in registry.dice_mut() {
                        die.clear_selected();
                    }
                    registry.slot_mut(category).set_selected(true);
                    Transition::SlotSelected(category)
                };
                s.update_scores();
                transition
            }
            Action::HoverEnter | Action::HoverExit => Transition::Hover,
            Action::PressUp => Transition::Ignored,
        }
    }

    fn on_button(&mut self, action: Action) -> Transition {
        let button = self.session.registry_mut().button_mut();
        match action {
            Action::PressDown => {
                button.set_pressed(true);
                return Transition::ButtonPressed;
            }
            Action::PressUp => {
                button.set_pressed(false);
                if !button.is_hovering() {
                    return Transition::ButtonReleased;
                }
            }
            Action::HoverEnter | Action::HoverExit => return Transition::Hover,
            Action::Clicked => {}
        }

        match self.session.button_mode() {
            ButtonMode::Score => self.commit_selected(),
            ButtonMode::Roll => self.reroll(),
            ButtonMode::NewGame => Transition::Ignored,
        }
    }

    fn commit_selected(&mut self) -> Transition {
        let s = &mut self.session;
        let Some(category) = s.selected_slot() else {
            s.registry_mut().button_mut().set_disabled(true);
            return Transition::Ignored;
        };
        let open_before = s.open_slot_count();

        let slot = s.registry_mut().slot_mut(category);
        let score = slot.score().unwrap_or(0);
        slot.set_value(score as i32);
        slot.clear_selected();
        slot.set_disabled(true);

        if open_before > 1 {
            s.roll_all_dice();
            s.set_roll_count(1);
            s.update_open_slots();
        }
        s.update_scores();
        Transition::Committed { category, score }
    }

    fn reroll(&mut self) -> Transition {
        let s = &mut self.session;
        if s.is_final_roll() {
            s.registry_mut().button_mut().set_disabled(true);
            return Transition::Ignored;
        }
        if let Some(cat) = s.selected_slot() {
            s.registry_mut().slot_mut(cat).clear_selected();
        }
        s.reroll_marked_dice();
        s.set_roll_count(s.roll_count() + 1);
        s.update_open_slots();
        s.update_scores();
        Transition::Rerolled {
            roll_count: s.roll_count(),
        }
    }

    fn is_button_click(&self, event: &InputEvent) -> bool {
        event.action == Action::Clicked
            && event.target() == Some(ControlId::Button)
            && !self.session.registry().button().is_disabled()
    }

    fn render<A: IoAdapter + ?Sized>(&mut self, io: &mut A) -> EngineResult<()> {
        io.render(&self.session)?;
        self.session.registry_mut().clear_modified();
        Ok(())
    }

    /// Show the button held down briefly, then restore it.
    fn flash_button<A: IoAdapter + ?Sized>(&mut self, io: &mut A) -> EngineResult<()> {
        let Some(duration) = io.flash_duration() else {
            return Ok(());
        };
        let saved = *self.session.registry().button();
        let button = self.session.registry_mut().button_mut();
        button.set_hovering(true);
        button.set_pressed(true);
        self.render(io)?;
        thread::sleep(duration);
        let button = self.session.registry_mut().button_mut();
        button.set_hovering(saved.is_hovering());
        button.set_pressed(saved.is_pressed());
        self.render(io)
    }

    /// Play one session to completion or until the adapter quits.
    pub fn play<A: IoAdapter + ?Sized>(&mut self, io: &mut A) -> EngineResult<SessionEnd> {
        self.begin();
        info!(dice = ?self.session.dice_faces(), "game started");

        loop {
            if self.prepare_turn() == TurnState::GameOver {
                let total = self.session.total().unwrap_or(0);
                info!(total, "game finished");
                return Ok(SessionEnd::Completed { total });
            }
            self.render(io)?;

            loop {
                let event = match self.synthesized_event() {
                    Some(event) => event,
                    None => match io.next_event(&self.session)? {
                        Some(event) => event,
                        None => {
                            info!("input ended, leaving game");
                            return Ok(SessionEnd::Quit);
                        }
                    },
                };
                if self.is_button_click(&event) {
                    self.flash_button(io)?;
                }
                match self.dispatch(event) {
                    Transition::Ignored => continue,
                    transition => {
                        debug!(?transition, roll = self.session.roll_count(), "applied");
                        break;
                    }
                }
            }
        }
    }

    /// Offer another game. Returns `false` if the adapter quit instead.
    ///
    /// Only the button responds while the prompt is up.
    pub fn new_game_prompt<A: IoAdapter + ?Sized>(&mut self, io: &mut A) -> EngineResult<bool> {
        self.prompting = true;
        self.session.set_button(ButtonMode::NewGame, true);

        loop {
            self.render(io)?;
            let Some(event) = io.next_event(&self.session)? else {
                return Ok(false);
            };
            if event.target() != Some(ControlId::Button) {
                continue;
            }
            let button = self.session.registry_mut().button_mut();
            match event.action {
                Action::HoverEnter => button.set_hovering(true),
                Action::HoverExit => button.set_hovering(false),
                Action::PressDown => button.set_pressed(true),
                Action::PressUp => {
                    button.set_pressed(false);
                    if button.is_hovering() {
                        return Ok(true);
                    }
                }
                Action::Clicked => {
                    self.flash_button(io)?;
                    return Ok(true);
                }
            }
        }
    }

    /// Initialize the adapter and play games until it quits.
    pub fn run<A: IoAdapter + ?Sized>(&mut self, io: &mut A) -> EngineResult<()> {
        io.initialize()?;
        loop {
            match self.play(io)? {
                SessionEnd::Quit => return Ok(()),
                SessionEnd::Completed { .. } => {
                    if !self.new_game_prompt(io)? {
                        return Ok(());
                    }
                }
            }
        }
    }
}
