//! Scoring: face histograms, per-category rules, and score aggregation.
//!
//! [`update_open_slots`] previews every uncommitted slot against the current
//! dice; [`update_scores`] recomputes the subtotal, bonus, and total from
//! the slots that are committed or currently selected.

pub mod rules;

pub use rules::{ScoringRule, rule_for, score};

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::control::{Control, Registry, UNSCORED};

/// Upper-section total needed to earn the bonus.
pub const BONUS_THRESHOLD: u32 = 63;
/// Points awarded for reaching the bonus threshold.
pub const BONUS_POINTS: u32 = 35;

/// Count of dice showing each face, faces 1 through 6.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Histogram([u8; 6]);

impl Histogram {
    /// Build a histogram from counts for faces 1 through 6.
    pub fn new(counts: [u8; 6]) -> Self {
        Self(counts)
    }

    /// Build a histogram from die faces 1-6. Out-of-range faces are skipped.
    pub fn from_faces(faces: &[u8]) -> Self {
        let mut counts = [0u8; 6];
        for &face in faces {
            if (1..=6).contains(&face) {
                counts[usize::from(face - 1)] += 1;
            }
        }
        Self(counts)
    }

    /// Build a histogram from the dice in a registry.
    ///
    /// Die values are stored as 0-5; unrolled dice are skipped.
    pub fn from_registry(registry: &Registry) -> Self {
        let mut counts = [0u8; 6];
        for die in registry.dice() {
            if let Ok(i) = usize::try_from(die.value())
                && i < 6
            {
                counts[i] += 1;
            }
        }
        Self(counts)
    }

    /// How many dice show the given face (1-6). Other faces count zero.
    pub fn count(&self, face: u8) -> u8 {
        match face {
            1..=6 => self.0[usize::from(face - 1)],
            _ => 0,
        }
    }

    /// The raw counts for faces 1 through 6.
    pub fn counts(&self) -> &[u8; 6] {
        &self.0
    }

    /// The largest count of any single face.
    pub fn max_count(&self) -> u8 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Total pips showing.
    pub fn pips(&self) -> u32 {
        self.0
            .iter()
            .zip(1u32..)
            .map(|(&n, face)| face * u32::from(n))
            .sum()
    }

    /// Number of dice counted.
    pub fn dice(&self) -> u32 {
        self.0.iter().map(|&n| u32::from(n)).sum()
    }
}

/// Whether a slot's value counts toward the derived totals.
fn contributes(slot: &Control) -> bool {
    slot.is_disabled() || slot.is_selected()
}

/// Recompute the preview score of every open slot from the current dice.
///
/// Committed slots and the derived slots are left untouched.
pub fn update_open_slots(registry: &mut Registry) {
    let hist = Histogram::from_registry(registry);
    for cat in Category::ALL {
        let Some(rule) = rule_for(cat) else {
            continue;
        };
        let slot = registry.slot_mut(cat);
        if !slot.is_disabled() {
            slot.set_value(rule(&hist) as i32);
        }
    }
}

/// Recompute subtotal, bonus, and total.
///
/// A slot contributes when it is committed or currently selected. The
/// subtotal stays unset until an upper slot contributes; the bonus is
/// pending (unset) below the threshold until all six upper slots are
/// committed; the total stays unset until any slot contributes.
pub fn update_scores(registry: &mut Registry) {
    let mut total = 0i32;
    let mut set_count = 0usize;

    for cat in Category::UPPER {
        let slot = registry.slot(cat);
        if contributes(slot) {
            set_count += 1;
            total += slot.value().max(0);
        }
    }

    if set_count > 0 {
        registry.slot_mut(Category::Subtotal).set_value(total);
        let bonus = if total >= BONUS_THRESHOLD as i32 {
            total += BONUS_POINTS as i32;
            BONUS_POINTS as i32
        } else if set_count == Category::UPPER.len() {
            0
        } else {
            UNSCORED
        };
        registry.slot_mut(Category::Bonus).set_value(bonus);
    } else {
        registry.slot_mut(Category::Subtotal).set_value(UNSCORED);
        registry.slot_mut(Category::Bonus).set_value(UNSCORED);
    }

    for cat in Category::LOWER {
        let slot = registry.slot(cat);
        if contributes(slot) {
            set_count += 1;
            total += slot.value().max(0);
        }
    }

    let grand = if set_count > 0 { total } else { UNSCORED };
    registry.slot_mut(Category::Total).set_value(grand);
}

/// A snapshot of every slot's value; `None` marks an unset slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    entries: Vec<(Category, Option<u32>)>,
}

impl Scorecard {
    /// Capture the slot values of a registry.
    ///
    /// Open slots report their score only while they are selected, so the
    /// card shows what the player has committed or is about to commit.
    pub fn from_registry(registry: &Registry) -> Self {
        let entries = Category::ALL
            .iter()
            .map(|&cat| {
                let slot = registry.slot(cat);
                let shown = cat.is_derived() || contributes(slot);
                (cat, if shown { slot.score() } else { None })
            })
            .collect();
        Self { entries }
    }

    /// The recorded value of a slot.
    pub fn get(&self, category: Category) -> Option<u32> {
        self.entries
            .get(category.index())
            .and_then(|(_, value)| *value)
    }

    /// All entries in catalogue order.
    pub fn entries(&self) -> &[(Category, Option<u32>)] {
        &self.entries
    }

    /// The grand total, or zero if nothing has been scored.
    pub fn total(&self) -> u32 {
        self.get(Category::Total).unwrap_or(0)
    }
}
