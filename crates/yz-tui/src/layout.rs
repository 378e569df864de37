//! Board geometry and pointer hit-testing.
//!
//! The dice sit in one row at the top, the button is centred under them,
//! and the sixteen slots fill two columns of eight below the button.

use ratatui::layout::{Position, Rect};
use yz_engine::control::DICE_COUNT;
use yz_engine::{Category, ControlId};

/// Width of one die drawing.
pub const DIE_WIDTH: u16 = 9;
/// Height of one die drawing.
pub const DIE_HEIGHT: u16 = 5;
/// Gap between adjacent dice.
pub const DIE_SPACING: u16 = 2;
/// Width of the whole row of dice.
pub const DICE_WIDTH: u16 = DIE_WIDTH * DICE_COUNT as u16 + DIE_SPACING * (DICE_COUNT as u16 - 1);
/// Width of the action button.
pub const BUTTON_WIDTH: u16 = 13;
/// Width of one score sheet column.
pub const SLOT_WIDTH: u16 = 20;
/// Rows in each score sheet column.
pub const SLOT_ROWS: u16 = 8;
/// Gap between the two score sheet columns.
pub const SLOT_SPACING: u16 = 7;
/// Width of the whole score sheet.
pub const SLOTS_WIDTH: u16 = SLOT_WIDTH * 2 + SLOT_SPACING;

/// Where each control sits within a drawing area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    dice_x: u16,
    dice_y: u16,
    button_x: u16,
    button_y: u16,
    slots_x: u16,
    slots_y: u16,
}

impl Board {
    /// Lay the board out horizontally centred in `area`.
    pub fn new(area: Rect) -> Self {
        let dice_x = area.x + (area.width.saturating_sub(DICE_WIDTH) / 2).max(1);
        let dice_y = area.y;
        let button_y = dice_y + DIE_HEIGHT + 1;
        Self {
            dice_x,
            dice_y,
            button_x: dice_x + (DICE_WIDTH - BUTTON_WIDTH) / 2,
            button_y,
            slots_x: dice_x + (DICE_WIDTH - SLOTS_WIDTH) / 2,
            slots_y: button_y + 2,
        }
    }

    /// Left edge of the row of dice.
    pub fn left(&self) -> u16 {
        self.dice_x
    }

    /// First row below the score sheet.
    pub fn bottom(&self) -> u16 {
        self.slots_y + SLOT_ROWS
    }

    /// Cells covered by a die.
    pub fn die(&self, index: usize) -> Rect {
        let offset = index as u16 * (DIE_WIDTH + DIE_SPACING);
        Rect::new(self.dice_x + offset, self.dice_y, DIE_WIDTH, DIE_HEIGHT)
    }

    /// Cells covered by the button.
    pub fn button(&self) -> Rect {
        Rect::new(self.button_x, self.button_y, BUTTON_WIDTH, 1)
    }

    /// Cells covered by a score sheet line.
    pub fn slot(&self, category: Category) -> Rect {
        let i = category.index() as u16;
        let (column, row) = (i / SLOT_ROWS, i % SLOT_ROWS);
        let x = self.slots_x + column * (SLOT_WIDTH + SLOT_SPACING);
        Rect::new(x, self.slots_y + row, SLOT_WIDTH, 1)
    }

    /// Cells covered by any control.
    pub fn rect(&self, id: ControlId) -> Rect {
        match id {
            ControlId::Die(i) => self.die(i),
            ControlId::Button => self.button(),
            ControlId::Slot(cat) => self.slot(cat),
        }
    }

    /// The control under a screen cell, if any.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<ControlId> {
        let pos = Position::new(column, row);
        (0..DICE_COUNT)
            .map(ControlId::Die)
            .chain([ControlId::Button])
            .chain(Category::ALL.map(ControlId::Slot))
            .find(|&id| self.rect(id).contains(pos))
    }
}
