//! The scoring slot catalogue.
//!
//! Sixteen slots in a fixed order: the six upper-section faces, the two
//! upper derived slots (subtotal and bonus), the seven lower-section
//! combinations, and the grand total. Only the thirteen rule-bearing slots
//! can be chosen by the player.

use serde::{Deserialize, Serialize};

/// A scoring slot on the score sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Sum of all dice showing one.
    Ones,
    /// Sum of all dice showing two.
    Twos,
    /// Sum of all dice showing three.
    Threes,
    /// Sum of all dice showing four.
    Fours,
    /// Sum of all dice showing five.
    Fives,
    /// Sum of all dice showing six.
    Sixes,
    /// Derived: total of the upper section.
    Subtotal,
    /// Derived: upper-section bonus.
    Bonus,
    /// Sum of all dice if at least three match.
    ThreeOfAKind,
    /// Sum of all dice if at least four match.
    FourOfAKind,
    /// A pair plus a triple.
    FullHouse,
    /// Four consecutive faces.
    SmallStraight,
    /// Five consecutive faces.
    LargeStraight,
    /// All five dice match.
    Yahtzee,
    /// Sum of all dice.
    Chance,
    /// Derived: grand total.
    Total,
}

impl Category {
    /// Number of slots in the catalogue.
    pub const COUNT: usize = 16;

    /// All slots in catalogue order.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::Subtotal,
        Category::Bonus,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yahtzee,
        Category::Chance,
        Category::Total,
    ];

    /// The six face-counting slots.
    pub const UPPER: [Category; 6] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
    ];

    /// The seven combination slots.
    pub const LOWER: [Category; 7] = [
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yahtzee,
        Category::Chance,
    ];

    /// Position of this slot in the catalogue.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a slot by catalogue position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The label shown on the score sheet.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ones => "Ones",
            Self::Twos => "Twos",
            Self::Threes => "Threes",
            Self::Fours => "Fours",
            Self::Fives => "Fives",
            Self::Sixes => "Sixes",
            Self::Subtotal => "Subtotal",
            Self::Bonus => "Bonus",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::FourOfAKind => "Four of a Kind",
            Self::FullHouse => "Full House",
            Self::SmallStraight => "Small Straight",
            Self::LargeStraight => "Large Straight",
            Self::Yahtzee => "Yahtzee",
            Self::Chance => "Chance",
            Self::Total => "Total Score",
        }
    }

    /// The key that selects this slot, if it can be selected.
    pub fn hotkey(self) -> Option<char> {
        match self {
            Self::Ones => Some('1'),
            Self::Twos => Some('2'),
            Self::Threes => Some('3'),
            Self::Fours => Some('4'),
            Self::Fives => Some('5'),
            Self::Sixes => Some('6'),
            Self::ThreeOfAKind => Some('t'),
            Self::FourOfAKind => Some('f'),
            Self::FullHouse => Some('h'),
            Self::SmallStraight => Some('s'),
            Self::LargeStraight => Some('l'),
            Self::Yahtzee => Some('y'),
            Self::Chance => Some('x'),
            Self::Subtotal | Self::Bonus | Self::Total => None,
        }
    }

    /// Whether the player can commit a score to this slot.
    pub fn is_selectable(self) -> bool {
        !self.is_derived()
    }

    /// Whether this slot is computed from the others.
    pub fn is_derived(self) -> bool {
        matches!(self, Self::Subtotal | Self::Bonus | Self::Total)
    }

    /// Whether this is one of the six face-counting slots.
    pub fn is_upper(self) -> bool {
        self.index() <= Self::Sixes.index()
    }

    /// Whether this is one of the seven combination slots.
    pub fn is_lower(self) -> bool {
        (Self::ThreeOfAKind.index()..=Self::Chance.index()).contains(&self.index())
    }

    /// For an upper-section slot, the die face it counts.
    pub fn face(self) -> Option<u8> {
        if self.is_upper() {
            Some(self.index() as u8 + 1)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
