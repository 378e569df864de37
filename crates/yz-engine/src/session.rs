//! The mutable state of one game.
//!
//! A [`Session`] owns the control registry, the roll count for the current
//! turn, and the dice roller. Adapters read it through shared references;
//! only the state machine in [`crate::game`] mutates it.

use crate::category::Category;
use crate::control::{ButtonMode, ControlId, Registry, UNSCORED};
use crate::dice::Roller;
use crate::scoring::{self, Histogram, Scorecard};

/// Rolls allowed per turn.
pub const MAX_ROLLS: u8 = 3;

/// The complete state of one game.
pub struct Session {
    registry: Registry,
    roll_count: u8,
    roller: Box<dyn Roller>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("registry", &self.registry)
            .field("roll_count", &self.roll_count)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Start a fresh game: clear the sheet and roll all dice.
    pub fn new(roller: Box<dyn Roller>) -> Self {
        let mut session = Self {
            registry: Registry::new(),
            roll_count: 0,
            roller,
        };
        session.restart();
        session
    }

    /// The control registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Rolls taken this turn, 1 through 3.
    pub fn roll_count(&self) -> u8 {
        self.roll_count
    }

    /// Whether the turn has used all of its rolls.
    pub fn is_final_roll(&self) -> bool {
        self.roll_count >= MAX_ROLLS
    }

    /// The slot currently selected for scoring, if any.
    pub fn selected_slot(&self) -> Option<Category> {
        Category::ALL
            .into_iter()
            .filter(|cat| cat.is_selectable())
            .find(|&cat| self.registry.slot(cat).is_selected())
    }

    /// Selectable slots that have not been committed, in catalogue order.
    pub fn open_slots(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .into_iter()
            .filter(|cat| cat.is_selectable())
            .filter(|&cat| !self.registry.slot(cat).is_disabled())
    }

    /// Number of slots still open.
    pub fn open_slot_count(&self) -> usize {
        self.open_slots().count()
    }

    /// Whether a slot has been committed.
    pub fn is_committed(&self, category: Category) -> bool {
        category.is_selectable() && self.registry.slot(category).is_disabled()
    }

    /// Number of dice marked for reroll.
    pub fn marked_dice_count(&self) -> usize {
        self.registry.dice().iter().filter(|d| d.is_selected()).count()
    }

    /// The five die faces, 1-6.
    pub fn dice_faces(&self) -> [u8; 5] {
        let mut faces = [0u8; 5];
        for (face, die) in faces.iter_mut().zip(self.registry.dice()) {
            *face = u8::try_from(die.value() + 1).unwrap_or(0);
        }
        faces
    }

    /// Histogram of the current dice.
    pub fn histogram(&self) -> Histogram {
        Histogram::from_registry(&self.registry)
    }

    /// The label currently on the action button.
    pub fn button_mode(&self) -> ButtonMode {
        ButtonMode::from_value(self.registry.button().value()).unwrap_or(ButtonMode::Roll)
    }

    /// Snapshot of the score sheet.
    pub fn scorecard(&self) -> Scorecard {
        Scorecard::from_registry(&self.registry)
    }

    /// The grand total, if anything has been scored.
    pub fn total(&self) -> Option<u32> {
        self.registry.slot(Category::Total).score()
    }

    pub(crate) fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Reset for a new game.
    pub(crate) fn restart(&mut self) {
        self.clear_all_slots();
        self.roll_all_dice();
        self.roll_count = 1;
        self.set_button(ButtonMode::Roll, false);
        self.update_open_slots();
        self.update_scores();
    }

    /// Erase every slot. Derived slots stay permanently disabled.
    pub(crate) fn clear_all_slots(&mut self) {
        for slot in self.registry.slots_mut() {
            slot.set_value(UNSCORED);
            slot.clear_selected();
            let derived = matches!(slot.id(), ControlId::Slot(cat) if cat.is_derived());
            slot.set_disabled(derived);
        }
    }

    /// Unmark, enable, and roll all dice.
    pub(crate) fn roll_all_dice(&mut self) {
        let Self {
            registry, roller, ..
        } = self;
        for die in registry.dice_mut() {
            die.set_disabled(false);
            die.clear_selected();
            die.set_value(i32::from(roller.roll_face()) - 1);
        }
    }

    /// Reroll the marked dice and unmark them. Returns how many were rolled.
    pub(crate) fn reroll_marked_dice(&mut self) -> usize {
        let Self {
            registry, roller, ..
        } = self;
        let mut rolled = 0;
        for die in registry.dice_mut().iter_mut().filter(|d| d.is_selected()) {
            die.set_value(i32::from(roller.roll_face()) - 1);
            die.clear_selected();
            rolled += 1;
        }
        rolled
    }

    /// Disable every die against further marking.
    pub(crate) fn fix_dice(&mut self) {
        for die in self.registry.dice_mut() {
            die.set_disabled(true);
        }
    }

    pub(crate) fn set_roll_count(&mut self, count: u8) {
        self.roll_count = count.clamp(1, MAX_ROLLS);
    }

    pub(crate) fn set_button(&mut self, mode: ButtonMode, enabled: bool) {
        let button = self.registry.button_mut();
        button.set_value(mode.value());
        button.set_disabled(!enabled);
    }

    /// Preview every open slot against the current dice.
    pub(crate) fn update_open_slots(&mut self) {
        scoring::update_open_slots(&mut self.registry);
    }

    /// Recompute the derived slots.
    pub(crate) fn update_scores(&mut self) {
        scoring::update_scores(&mut self.registry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::LoadedDice;

    fn session(faces: &[u8]) -> Session {
        Session::new(Box::new(LoadedDice::new(faces.iter().copied())))
    }

    #[test]
    fn new_session_is_rolled_and_clear() {
        let s = session(&[2, 2, 2, 5, 6]);
        assert_eq!(s.roll_count(), 1);
        assert_eq!(s.dice_faces(), [2, 2, 2, 5, 6]);
        assert_eq!(s.open_slot_count(), 13);
        assert_eq!(s.selected_slot(), None);
        assert_eq!(s.button_mode(), ButtonMode::Roll);
        assert!(s.registry().button().is_disabled());
        assert_eq!(s.total(), None);
    }

    #[test]
    fn derived_slots_permanently_disabled() {
        let s = session(&[1]);
        for cat in [Category::Subtotal, Category::Bonus, Category::Total] {
            assert!(s.registry().slot(cat).is_disabled());
            assert!(!s.is_committed(cat));
        }
    }

    #[test]
    fn open_slots_previewed_on_start() {
        let s = session(&[2, 2, 2, 5, 6]);
        assert_eq!(s.registry().slot(Category::ThreeOfAKind).value(), 17);
        assert_eq!(s.registry().slot(Category::Subtotal).value(), UNSCORED);
    }

    #[test]
    fn reroll_only_marked_dice() {
        let mut s = session(&[1, 1, 1, 1, 1, 6, 6]);
        s.registry_mut().get_mut(ControlId::Die(1)).set_selected(true);
        s.registry_mut().get_mut(ControlId::Die(3)).set_selected(true);
        assert_eq!(s.marked_dice_count(), 2);
        assert_eq!(s.reroll_marked_dice(), 2);
        assert_eq!(s.dice_faces(), [1, 6, 1, 6, 1]);
        assert_eq!(s.marked_dice_count(), 0);
    }

    #[test]
    fn fix_dice_disables_all() {
        let mut s = session(&[3]);
        s.fix_dice();
        assert!(s.registry().dice().iter().all(|d| d.is_disabled()));
        s.roll_all_dice();
        assert!(s.registry().dice().iter().all(|d| !d.is_disabled()));
    }

    #[test]
    fn roll_count_clamped() {
        let mut s = session(&[3]);
        s.set_roll_count(7);
        assert_eq!(s.roll_count(), 3);
        assert!(s.is_final_roll());
        s.set_roll_count(0);
        assert_eq!(s.roll_count(), 1);
    }

    #[test]
    fn restart_clears_commitments() {
        let mut s = session(&[4]);
        let slot = s.registry_mut().slot_mut(Category::Fours);
        slot.set_value(20);
        slot.set_disabled(true);
        assert_eq!(s.open_slot_count(), 12);
        s.restart();
        assert_eq!(s.open_slot_count(), 13);
        assert!(!s.registry().slot(Category::Fours).is_disabled());
        assert_eq!(s.registry().slot(Category::Fours).value(), 20);
    }
}
