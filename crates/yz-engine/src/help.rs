//! Player-facing rules and version text shared by the front ends.

/// Program name and version.
pub const VERSION: &str = concat!("yahtzee ", env!("CARGO_PKG_VERSION"));

/// The rules of the game, one display line per entry.
pub const RULES: &[&str] = &[
    "Each turn begins with a roll of the dice. Select which dice to",
    "re-roll and push the Roll Dice button. Two re-rolls are",
    "permitted per turn. After re-rolling, choose where to score",
    "the dice and push the Score button.",
    "",
    "A full house is worth 25 points, a small straight (four dice)",
    "scores 30 points, a large straight (five dice) scores 40",
    "points, and yahtzee scores 50 points. Three of a kind, four of",
    "a kind, and chance score the total of all five dice.",
    "",
    "If the left side scores 63 or more points, a bonus of 35",
    "points is awarded.",
];
