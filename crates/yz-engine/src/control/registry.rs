//! The control registry: every control in index order.

use serde::{Deserialize, Serialize};

use super::{BUTTON, CONTROL_COUNT, Control, ControlId, DICE, DICE_COUNT, SLOTS};
use crate::category::Category;

/// Hotkeys for the five dice.
const DIE_KEYS: [char; DICE_COUNT] = ['a', 'b', 'c', 'd', 'e'];

/// Hotkey for the action button.
const BUTTON_KEY: char = ' ';

/// A typed container holding all 22 controls.
///
/// No game rules live here. The registry only stores controls and hands
/// out references by identity, index, or hotkey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    controls: Vec<Control>,
}

impl Registry {
    /// Create a registry with every control unset and hotkeys assigned.
    pub fn new() -> Self {
        let mut controls = vec![Control::new(ControlId::Button, Some(BUTTON_KEY)); CONTROL_COUNT];
        for (i, key) in DIE_KEYS.iter().enumerate() {
            controls[DICE.start + i] = Control::new(ControlId::Die(i), Some(*key));
        }
        for cat in Category::ALL {
            let id = ControlId::Slot(cat);
            controls[id.index()] = Control::new(id, cat.hotkey());
        }
        Self { controls }
    }

    /// Get a control by identity.
    pub fn get(&self, id: ControlId) -> &Control {
        &self.controls[id.index()]
    }

    /// Get a mutable control by identity.
    pub fn get_mut(&mut self, id: ControlId) -> &mut Control {
        &mut self.controls[id.index()]
    }

    /// Get a control by raw index, if the index is in range.
    pub fn by_index(&self, index: usize) -> Option<&Control> {
        self.controls.get(index)
    }

    /// Get a die by position.
    pub fn die(&self, index: usize) -> &Control {
        self.get(ControlId::Die(index))
    }

    /// All dice in order.
    pub fn dice(&self) -> &[Control] {
        &self.controls[DICE]
    }

    /// All dice in order, mutably.
    pub fn dice_mut(&mut self) -> &mut [Control] {
        &mut self.controls[DICE]
    }

    /// The action button.
    pub fn button(&self) -> &Control {
        &self.controls[BUTTON]
    }

    /// The action button, mutably.
    pub fn button_mut(&mut self) -> &mut Control {
        &mut self.controls[BUTTON]
    }

    /// A scoring slot.
    pub fn slot(&self, category: Category) -> &Control {
        self.get(ControlId::Slot(category))
    }

    /// A scoring slot, mutably.
    pub fn slot_mut(&mut self, category: Category) -> &mut Control {
        self.get_mut(ControlId::Slot(category))
    }

    /// All scoring slots in catalogue order.
    pub fn slots(&self) -> &[Control] {
        &self.controls[SLOTS]
    }

    /// All scoring slots in catalogue order, mutably.
    pub fn slots_mut(&mut self) -> &mut [Control] {
        &mut self.controls[SLOTS]
    }

    /// Iterate over every control in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Control> {
        self.controls.iter()
    }

    /// Iterate mutably over every control in index order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Control> {
        self.controls.iter_mut()
    }

    /// Find the control bound to a hotkey, ignoring case.
    pub fn find_by_hotkey(&self, key: char) -> Option<ControlId> {
        let key = key.to_ascii_lowercase();
        self.controls
            .iter()
            .find(|c| c.hotkey() == Some(key))
            .map(Control::id)
    }

    /// Whether any control changed since the last render.
    pub fn any_modified(&self) -> bool {
        self.controls.iter().any(Control::is_modified)
    }

    /// Mark every control as rendered.
    pub fn clear_modified(&mut self) {
        self.controls.iter_mut().for_each(Control::clear_modified);
    }

    /// Clear the hovering flag on every control.
    pub fn clear_hovering(&mut self) {
        for c in &mut self.controls {
            c.set_hovering(false);
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::UNSCORED;

    #[test]
    fn new_registry_is_unset() {
        let reg = Registry::new();
        assert_eq!(reg.iter().count(), CONTROL_COUNT);
        for (i, c) in reg.iter().enumerate() {
            assert_eq!(c.id().index(), i);
            assert_eq!(c.value(), UNSCORED);
            assert!(!c.is_selected());
            assert!(!c.is_disabled());
        }
    }

    #[test]
    fn hotkeys_assigned() {
        let reg = Registry::new();
        assert_eq!(reg.die(0).hotkey(), Some('a'));
        assert_eq!(reg.die(4).hotkey(), Some('e'));
        assert_eq!(reg.button().hotkey(), Some(' '));
        assert_eq!(reg.slot(Category::Chance).hotkey(), Some('x'));
        assert_eq!(reg.slot(Category::Bonus).hotkey(), None);
    }

    #[test]
    fn find_by_hotkey_is_case_insensitive() {
        let reg = Registry::new();
        assert_eq!(reg.find_by_hotkey('c'), Some(ControlId::Die(2)));
        assert_eq!(reg.find_by_hotkey('C'), Some(ControlId::Die(2)));
        assert_eq!(reg.find_by_hotkey(' '), Some(ControlId::Button));
        assert_eq!(
            reg.find_by_hotkey('Y'),
            Some(ControlId::Slot(Category::Yahtzee))
        );
        assert_eq!(reg.find_by_hotkey('z'), None);
    }

    #[test]
    fn by_index_bounds() {
        let reg = Registry::new();
        assert!(reg.by_index(21).is_some());
        assert!(reg.by_index(22).is_none());
    }

    #[test]
    fn section_slices() {
        let reg = Registry::new();
        assert_eq!(reg.dice().len(), 5);
        assert_eq!(reg.slots().len(), 16);
        assert_eq!(reg.slots()[0].id(), ControlId::Slot(Category::Ones));
    }

    #[test]
    fn modified_tracking() {
        let mut reg = Registry::new();
        assert!(!reg.any_modified());
        reg.slot_mut(Category::Twos).set_value(4);
        assert!(reg.any_modified());
        reg.clear_modified();
        assert!(!reg.any_modified());
    }

    #[test]
    fn clear_hovering_resets_all() {
        let mut reg = Registry::new();
        reg.get_mut(ControlId::Die(1)).set_hovering(true);
        reg.button_mut().set_hovering(true);
        reg.clear_hovering();
        assert!(reg.iter().all(|c| !c.is_hovering()));
    }
}
