//! Controls: the addressable game elements and their state flags.
//!
//! Every die, the action button, and each scoring slot is a [`Control`]
//! holding a signed value, an optional hotkey, and a handful of named
//! flags. The [`Registry`] keeps all of them in the fixed order adapters
//! address them by.

pub mod registry;

pub use registry::Registry;

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Number of dice.
pub const DICE_COUNT: usize = 5;
/// Number of scoring slots.
pub const SLOT_COUNT: usize = Category::COUNT;
/// Total number of controls.
pub const CONTROL_COUNT: usize = DICE_COUNT + 1 + SLOT_COUNT;

/// Index range of the dice.
pub const DICE: Range<usize> = 0..DICE_COUNT;
/// Index of the action button.
pub const BUTTON: usize = DICE_COUNT;
/// Index range of the scoring slots.
pub const SLOTS: Range<usize> = BUTTON + 1..CONTROL_COUNT;
/// Index range of the six upper-section slots.
pub const UPPER_SLOTS: Range<usize> = SLOTS.start..SLOTS.start + 6;
/// Index range of the seven lower-section slots plus the grand total.
pub const LOWER_SLOTS: Range<usize> = SLOTS.start + 8..CONTROL_COUNT;

/// Value stored in a slot that has no score.
pub const UNSCORED: i32 = -1;

/// The broad kind of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlKind {
    /// One of the five dice.
    Die,
    /// The action button.
    Button,
    /// A scoring slot.
    Slot,
}

/// The stable identity of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlId {
    /// A die, by position 0-4.
    Die(usize),
    /// The action button.
    Button,
    /// A scoring slot.
    Slot(Category),
}

impl ControlId {
    /// Position of this control in the registry index space.
    pub fn index(self) -> usize {
        match self {
            Self::Die(i) => DICE.start + i,
            Self::Button => BUTTON,
            Self::Slot(cat) => SLOTS.start + cat.index(),
        }
    }

    /// Resolve a registry index, returning `None` outside the index space.
    pub fn from_index(index: usize) -> Option<Self> {
        if DICE.contains(&index) {
            Some(Self::Die(index - DICE.start))
        } else if index == BUTTON {
            Some(Self::Button)
        } else if SLOTS.contains(&index) {
            Category::from_index(index - SLOTS.start).map(Self::Slot)
        } else {
            None
        }
    }

    /// The kind of control this identifies.
    pub fn kind(self) -> ControlKind {
        match self {
            Self::Die(_) => ControlKind::Die,
            Self::Button => ControlKind::Button,
            Self::Slot(_) => ControlKind::Slot,
        }
    }
}

/// The labels the action button can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonMode {
    /// Reroll the marked dice.
    Roll = 0,
    /// Commit the selected slot.
    Score = 1,
    /// Start another game.
    NewGame = 2,
}

impl ButtonMode {
    /// The button value that encodes this mode.
    pub fn value(self) -> i32 {
        self as i32
    }

    /// Decode a button value.
    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Roll),
            1 => Some(Self::Score),
            2 => Some(Self::NewGame),
            _ => None,
        }
    }
}

/// Per-control state flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct Flags {
    selected: bool,
    disabled: bool,
    modified: bool,
    hovering: bool,
    pressed: bool,
}

/// One addressable game element.
///
/// Mutators only touch the flag they name, except that any mutation which
/// actually changes state also raises `modified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    id: ControlId,
    value: i32,
    hotkey: Option<char>,
    flags: Flags,
}

impl Control {
    /// Create a control with no value and all flags cleared.
    pub fn new(id: ControlId, hotkey: Option<char>) -> Self {
        Self {
            id,
            value: UNSCORED,
            hotkey,
            flags: Flags::default(),
        }
    }

    /// The identity of this control.
    pub fn id(&self) -> ControlId {
        self.id
    }

    /// The stored value: a die face 0-5, a button mode, or a slot score.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The value as a score, or `None` if none is stored.
    pub fn score(&self) -> Option<u32> {
        u32::try_from(self.value).ok()
    }

    /// The hotkey, if any.
    pub fn hotkey(&self) -> Option<char> {
        self.hotkey
    }

    /// Whether the user has marked this control.
    pub fn is_selected(&self) -> bool {
        self.flags.selected
    }

    /// Whether this control currently ignores input.
    pub fn is_disabled(&self) -> bool {
        self.flags.disabled
    }

    /// Whether this control changed since it was last rendered.
    pub fn is_modified(&self) -> bool {
        self.flags.modified
    }

    /// Whether the pointer is over this control.
    pub fn is_hovering(&self) -> bool {
        self.flags.hovering
    }

    /// Whether a press is being held on this control.
    pub fn is_pressed(&self) -> bool {
        self.flags.pressed
    }

    /// Store a new value.
    pub fn set_value(&mut self, value: i32) {
        if self.value != value {
            self.value = value;
            self.flags.modified = true;
        }
    }

    /// Set or clear the selected flag.
    pub fn set_selected(&mut self, selected: bool) {
        if self.flags.selected != selected {
            self.flags.selected = selected;
            self.flags.modified = true;
        }
    }

    /// Flip the selected flag and return the new state.
    pub fn toggle_selected(&mut self) -> bool {
        self.set_selected(!self.flags.selected);
        self.flags.selected
    }

    /// Clear the selected flag.
    pub fn clear_selected(&mut self) {
        self.set_selected(false);
    }

    /// Set or clear the disabled flag.
    pub fn set_disabled(&mut self, disabled: bool) {
        if self.flags.disabled != disabled {
            self.flags.disabled = disabled;
            self.flags.modified = true;
        }
    }

    /// Set or clear the hovering flag.
    pub fn set_hovering(&mut self, hovering: bool) {
        if self.flags.hovering != hovering {
            self.flags.hovering = hovering;
            self.flags.modified = true;
        }
    }

    /// Set or clear the pressed flag.
    pub fn set_pressed(&mut self, pressed: bool) {
        if self.flags.pressed != pressed {
            self.flags.pressed = pressed;
            self.flags.modified = true;
        }
    }

    /// Mark this control as rendered.
    pub fn clear_modified(&mut self) {
        self.flags.modified = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_space_layout() {
        assert_eq!(CONTROL_COUNT, 22);
        assert_eq!(ControlId::Die(0).index(), 0);
        assert_eq!(ControlId::Die(4).index(), 4);
        assert_eq!(ControlId::Button.index(), 5);
        assert_eq!(ControlId::Slot(Category::Ones).index(), 6);
        assert_eq!(ControlId::Slot(Category::Total).index(), 21);
        assert_eq!(UPPER_SLOTS, 6..12);
        assert_eq!(LOWER_SLOTS, 14..22);
    }

    #[test]
    fn from_index_round_trips() {
        for i in 0..CONTROL_COUNT {
            let id = ControlId::from_index(i).unwrap();
            assert_eq!(id.index(), i);
        }
        assert_eq!(ControlId::from_index(CONTROL_COUNT), None);
        assert_eq!(ControlId::from_index(usize::MAX), None);
    }

    #[test]
    fn kinds() {
        assert_eq!(ControlId::Die(2).kind(), ControlKind::Die);
        assert_eq!(ControlId::Button.kind(), ControlKind::Button);
        assert_eq!(ControlId::Slot(Category::Chance).kind(), ControlKind::Slot);
    }

    #[test]
    fn button_mode_values() {
        for mode in [ButtonMode::Roll, ButtonMode::Score, ButtonMode::NewGame] {
            assert_eq!(ButtonMode::from_value(mode.value()), Some(mode));
        }
        assert_eq!(ButtonMode::from_value(-1), None);
        assert_eq!(ButtonMode::from_value(3), None);
    }

    #[test]
    fn new_control_is_unscored() {
        let c = Control::new(ControlId::Slot(Category::Yahtzee), Some('y'));
        assert_eq!(c.value(), UNSCORED);
        assert_eq!(c.score(), None);
        assert!(!c.is_selected());
        assert!(!c.is_disabled());
        assert!(!c.is_modified());
    }

    #[test]
    fn mutations_raise_modified() {
        let mut c = Control::new(ControlId::Die(0), Some('a'));
        c.set_value(3);
        assert!(c.is_modified());
        c.clear_modified();

        c.set_value(3);
        assert!(!c.is_modified(), "unchanged value must not mark");

        assert!(c.toggle_selected());
        assert!(c.is_modified());
        c.clear_modified();

        c.set_disabled(true);
        assert!(c.is_disabled());
        assert!(c.is_modified());
    }

    #[test]
    fn toggle_and_clear_selected() {
        let mut c = Control::new(ControlId::Die(1), Some('b'));
        assert!(c.toggle_selected());
        assert!(!c.toggle_selected());
        c.set_selected(true);
        c.clear_selected();
        assert!(!c.is_selected());
    }

    #[test]
    fn score_rejects_negative() {
        let mut c = Control::new(ControlId::Slot(Category::Chance), Some('x'));
        c.set_value(17);
        assert_eq!(c.score(), Some(17));
        c.set_value(UNSCORED);
        assert_eq!(c.score(), None);
    }
}
