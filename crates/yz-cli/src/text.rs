//! Line-oriented front end for dumb terminals and pipes.
//!
//! Nothing is drawn on render. Before each read the adapter prints whatever
//! changed (the dice after any event, the score sheet after a slot was
//! selected or committed) followed by a prompt for the current button mode.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use yz_engine::control::{DICE_COUNT, SLOT_COUNT};
use yz_engine::help::VERSION;
use yz_engine::{
    ButtonMode, Category, ControlId, EngineResult, InputEvent, IoAdapter, Registry, Session,
};

const BANNER: &str = "\nY a h t z e e\n";

const HELP: &str = "   Each turn begins with a roll of the dice. Select which dice
to re-roll by entering the corresponding letters (a), (b), (c),
(d), and/or (e). Two re-rolls are permitted per turn. After
re-rolling, choose where to score the dice by entering the
letter or number for that line on the score sheet.
   A full house is worth 25 points, a small straight (four
dice) scores 30 points, a large straight (five dice) scores 40
points, and yahtzee scores 50 points. Three of a kind, four of
a kind, and chance score the total of all five dice.
   If the left side scores 63 or more points, a bonus of 35
points is awarded.
   At any time you can type (q) to exit the program, (.) to
re-display the game state, (v) to see the version information,
or (?) to view this help text again.";

const RETURN_PROMPT: &str = "Press (RET) to return to the game.";

/// Rows in each column of the score sheet.
const SHEET_ROWS: usize = SLOT_COUNT / 2;

/// Plain-text adapter over any line reader and writer.
pub struct TextAdapter<R, W> {
    input: R,
    out: W,
    queue: VecDeque<InputEvent>,
    shown: [bool; SLOT_COUNT],
    show_sheet: bool,
    show_dice: bool,
}

impl<R: BufRead, W: Write> TextAdapter<R, W> {
    /// Create an adapter reading commands from `input`.
    pub fn new(input: R, out: W) -> Self {
        Self {
            input,
            out,
            queue: VecDeque::new(),
            shown: [false; SLOT_COUNT],
            show_sheet: false,
            show_dice: true,
        }
    }

    fn read_line(&mut self) -> EngineResult<Option<String>> {
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Show a page of text and wait for return. `false` means quit.
    fn page(&mut self, text: &str) -> EngineResult<bool> {
        writeln!(self.out, "{text}")?;
        writeln!(self.out, "{RETURN_PROMPT}")?;
        Ok(self
            .read_line()?
            .is_some_and(|line| !line.contains(['q', 'Q'])))
    }

    fn note_sheet_changes(&mut self, registry: &Registry) {
        for (seen, slot) in self.shown.iter_mut().zip(registry.slots()) {
            let now = slot.is_disabled() || slot.is_selected();
            if *seen != now {
                *seen = now;
                self.show_sheet = true;
            }
        }
    }

    fn write_dice(&mut self, session: &Session) -> EngineResult<()> {
        let groups: Vec<String> = session
            .dice_faces()
            .iter()
            .map(|face| format!("({face})"))
            .collect();
        writeln!(self.out, "{}", groups.join("  "))?;
        self.show_dice = false;
        Ok(())
    }

    fn write_sheet(&mut self, registry: &Registry) -> EngineResult<()> {
        for row in 0..SHEET_ROWS {
            let left = Category::ALL[row];
            let right = Category::ALL[row + SHEET_ROWS];
            write!(self.out, "{}{:<9}", key_prefix(left), left.label())?;
            match shown_score(registry, left) {
                Some(v) => write!(self.out, "{v:4}  .  ")?,
                None => write!(self.out, "      .  ")?,
            }
            write!(self.out, "{}{:<16}", key_prefix(right), right.label())?;
            if let Some(v) = shown_score(registry, right) {
                write!(self.out, "{v:4}")?;
            }
            writeln!(self.out)?;
        }
        self.show_sheet = false;
        Ok(())
    }

    fn write_prompt(&mut self, session: &Session) -> EngineResult<()> {
        let registry = session.registry();
        let mode = session.button_mode();

        if mode == ButtonMode::NewGame {
            if self.show_dice {
                self.write_dice(session)?;
            }
            if self.show_sheet {
                self.write_sheet(registry)?;
            }
            writeln!(self.out, "Another game (RET) or Quit (q):")?;
            return Ok(());
        }

        if self.show_sheet {
            self.write_sheet(registry)?;
        }
        if self.show_dice {
            self.write_dice(session)?;
        }
        if mode == ButtonMode::Score && !registry.button().is_disabled() {
            writeln!(self.out, "Confirm (RET):")?;
            return Ok(());
        }
        if mode == ButtonMode::Roll {
            write!(self.out, "Roll (abcde) or ")?;
        }
        let keys: String = registry
            .slots()
            .iter()
            .filter(|slot| !slot.is_disabled())
            .filter_map(|slot| slot.hotkey())
            .collect();
        writeln!(self.out, "Score ({keys}):")?;
        Ok(())
    }

    /// Turn one line into queued events. Returns `false` for bad input
    /// after explaining what was wrong.
    fn process(&mut self, line: &str, session: &Session) -> EngineResult<bool> {
        let registry = session.registry();

        if line.is_empty() {
            if registry.button().is_disabled() {
                writeln!(self.out, "Enter (?) for help.")?;
                return Ok(false);
            }
            self.queue.push_back(InputEvent::clicked(ControlId::Button));
            return Ok(true);
        }
        if session.button_mode() == ButtonMode::NewGame {
            return Ok(false);
        }

        let mut marked = [false; DICE_COUNT];
        let mut dice = 0;
        for c in line.chars() {
            let hit = registry
                .dice()
                .iter()
                .position(|die| die.hotkey() == Some(c.to_ascii_lowercase()));
            if let Some(i) = hit {
                if registry.die(i).is_disabled() {
                    writeln!(self.out, "Cannot roll dice.")?;
                    return Ok(false);
                }
                marked[i] = true;
                dice += 1;
            }
        }
        if dice > 0 {
            if dice != line.chars().count() {
                writeln!(
                    self.out,
                    "Please specify either dice or a single scoring slot."
                )?;
                return Ok(false);
            }
            for (i, _) in marked.iter().enumerate().filter(|(_, m)| **m) {
                self.queue.push_back(InputEvent::clicked(ControlId::Die(i)));
            }
            self.queue.push_back(InputEvent::clicked(ControlId::Button));
            return Ok(true);
        }

        let mut chars = line.chars();
        let first = chars.next().map(|c| c.to_ascii_lowercase());
        let slot = Category::ALL
            .into_iter()
            .find(|cat| cat.hotkey().is_some() && cat.hotkey() == first);
        if let Some(category) = slot {
            if registry.slot(category).is_disabled() {
                writeln!(self.out, "Slot not available.")?;
                return Ok(false);
            }
            let rest = chars.as_str();
            if !rest.is_empty() {
                writeln!(self.out, "Extra characters after input: \"{rest}\".")?;
                return Ok(false);
            }
            self.queue
                .push_back(InputEvent::clicked(ControlId::Slot(category)));
            return Ok(true);
        }

        writeln!(self.out, "Invalid input. Enter (?) for help.")?;
        Ok(false)
    }
}

fn key_prefix(category: Category) -> String {
    match category.hotkey() {
        Some(key) => format!("{key}: "),
        None => "   ".to_string(),
    }
}

/// The score to print for a slot: committed, selected, or derived values.
fn shown_score(registry: &Registry, category: Category) -> Option<u32> {
    let slot = registry.slot(category);
    if slot.is_disabled() || slot.is_selected() {
        slot.score()
    } else {
        None
    }
}

impl<R: BufRead, W: Write> IoAdapter for TextAdapter<R, W> {
    fn initialize(&mut self) -> EngineResult<()> {
        writeln!(self.out, "{BANNER}")?;
        self.show_dice = true;
        self.show_sheet = false;
        Ok(())
    }

    fn render(&mut self, _session: &Session) -> EngineResult<()> {
        Ok(())
    }

    fn next_event(&mut self, session: &Session) -> EngineResult<Option<InputEvent>> {
        loop {
            if let Some(event) = self.queue.pop_front() {
                self.show_dice = true;
                return Ok(Some(event));
            }
            self.note_sheet_changes(session.registry());
            self.write_prompt(session)?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if line.starts_with(['q', 'Q']) {
                return Ok(None);
            }
            if line.starts_with('.') {
                self.show_sheet = true;
                self.show_dice = true;
                continue;
            }
            if line.starts_with('?') {
                if !self.page(HELP)? {
                    return Ok(None);
                }
                continue;
            }
            if line.starts_with(['v', 'V']) {
                if !self.page(&format!("   {VERSION}"))? {
                    return Ok(None);
                }
                continue;
            }
            if !self.process(&line, session)? {
                write!(self.out, "\x07")?;
            }
        }
    }
}
