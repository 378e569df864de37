//! Per-category scoring rules.
//!
//! Each rule takes the face histogram of the current dice and returns the
//! points the dice would earn in that category, whether or not the
//! category has already been used.

use super::Histogram;
use crate::category::Category;

/// Points for a full house.
pub const FULL_HOUSE_POINTS: u32 = 25;
/// Points for a small straight.
pub const SMALL_STRAIGHT_POINTS: u32 = 30;
/// Points for a large straight.
pub const LARGE_STRAIGHT_POINTS: u32 = 40;
/// Points for a yahtzee.
pub const YAHTZEE_POINTS: u32 = 50;

/// A pure function scoring one category.
pub type ScoringRule = fn(&Histogram) -> u32;

/// Rules indexed by catalogue position. Derived slots have none.
const RULES: [Option<ScoringRule>; Category::COUNT] = [
    Some(ones),
    Some(twos),
    Some(threes),
    Some(fours),
    Some(fives),
    Some(sixes),
    None,
    None,
    Some(three_of_a_kind),
    Some(four_of_a_kind),
    Some(full_house),
    Some(small_straight),
    Some(large_straight),
    Some(yahtzee),
    Some(chance),
    None,
];

/// The rule for a category, or `None` for the derived slots.
pub fn rule_for(category: Category) -> Option<ScoringRule> {
    RULES[category.index()]
}

/// Score a category against a histogram, or `None` for the derived slots.
pub fn score(category: Category, hist: &Histogram) -> Option<u32> {
    rule_for(category).map(|rule| rule(hist))
}

fn upper(hist: &Histogram, face: u8) -> u32 {
    u32::from(face) * u32::from(hist.count(face))
}

/// Sum of the ones.
pub fn ones(hist: &Histogram) -> u32 {
    upper(hist, 1)
}

/// Sum of the twos.
pub fn twos(hist: &Histogram) -> u32 {
    upper(hist, 2)
}

/// Sum of the threes.
pub fn threes(hist: &Histogram) -> u32 {
    upper(hist, 3)
}

/// Sum of the fours.
pub fn fours(hist: &Histogram) -> u32 {
    upper(hist, 4)
}

/// Sum of the fives.
pub fn fives(hist: &Histogram) -> u32 {
    upper(hist, 5)
}

/// Sum of the sixes.
pub fn sixes(hist: &Histogram) -> u32 {
    upper(hist, 6)
}

/// Sum of all pips.
pub fn chance(hist: &Histogram) -> u32 {
    hist.pips()
}

/// All pips if some face shows at least three times.
pub fn three_of_a_kind(hist: &Histogram) -> u32 {
    if hist.max_count() >= 3 { hist.pips() } else { 0 }
}

/// All pips if some face shows at least four times.
pub fn four_of_a_kind(hist: &Histogram) -> u32 {
    if hist.max_count() >= 4 { hist.pips() } else { 0 }
}

/// Fifty if all five dice match.
pub fn yahtzee(hist: &Histogram) -> u32 {
    if hist.max_count() == 5 {
        YAHTZEE_POINTS
    } else {
        0
    }
}

/// Twenty-five for a triple plus a pair.
///
/// Five of a kind also counts as a full house here.
pub fn full_house(hist: &Histogram) -> u32 {
    let mut total = 0;
    for &n in hist.counts() {
        match n {
            0 => continue,
            1 | 4 => return 0,
            5 => return FULL_HOUSE_POINTS,
            n => total += n,
        }
    }
    if total == 5 { FULL_HOUSE_POINTS } else { 0 }
}

/// Thirty for four consecutive faces.
///
/// Every four-run over 1-6 contains both 3 and 4.
pub fn small_straight(hist: &Histogram) -> u32 {
    let has = |face| hist.count(face) > 0;
    let run = has(3)
        && has(4)
        && ((has(1) && has(2)) || (has(2) && has(5)) || (has(5) && has(6)));
    if run { SMALL_STRAIGHT_POINTS } else { 0 }
}

/// Forty for the run 2-3-4-5-6.
///
/// Only the high run qualifies; 1-2-3-4-5 scores nothing.
pub fn large_straight(hist: &Histogram) -> u32 {
    if (2..=6).all(|face| hist.count(face) == 1) {
        LARGE_STRAIGHT_POINTS
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(faces: [u8; 5]) -> Histogram {
        Histogram::from_faces(&faces)
    }

    #[test]
    fn table_follows_catalogue() {
        for cat in Category::ALL {
            assert_eq!(rule_for(cat).is_some(), cat.is_selectable(), "{cat}");
        }
        let dice = h([1, 2, 3, 4, 6]);
        assert_eq!(score(Category::Ones, &dice), Some(1));
        assert_eq!(score(Category::Sixes, &dice), Some(6));
        assert_eq!(score(Category::Chance, &dice), Some(16));
        assert_eq!(score(Category::Subtotal, &dice), None);
        assert_eq!(score(Category::Total, &dice), None);
    }

    #[test]
    fn upper_section() {
        let dice = h([3, 3, 5, 3, 1]);
        assert_eq!(ones(&dice), 1);
        assert_eq!(twos(&dice), 0);
        assert_eq!(threes(&dice), 9);
        assert_eq!(fives(&dice), 5);
    }

    #[test]
    fn kinds() {
        assert_eq!(three_of_a_kind(&h([2, 2, 2, 5, 6])), 17);
        assert_eq!(four_of_a_kind(&h([2, 2, 2, 5, 6])), 0);
        assert_eq!(four_of_a_kind(&h([4, 4, 4, 4, 1])), 17);
        assert_eq!(three_of_a_kind(&h([4, 4, 4, 4, 1])), 17);
        assert_eq!(three_of_a_kind(&h([1, 2, 3, 4, 5])), 0);
    }

    #[test]
    fn yahtzee_needs_five() {
        assert_eq!(yahtzee(&h([6, 6, 6, 6, 6])), 50);
        assert_eq!(yahtzee(&h([6, 6, 6, 6, 5])), 0);
    }

    #[test]
    fn full_house_profiles() {
        assert_eq!(full_house(&h([3, 3, 3, 2, 2])), 25);
        assert_eq!(full_house(&h([5, 5, 5, 5, 5])), 25);
        assert_eq!(full_house(&h([6, 6, 6, 6, 6])), 25);
        assert_eq!(full_house(&h([4, 4, 4, 4, 1])), 0);
        assert_eq!(full_house(&h([1, 1, 2, 2, 3])), 0);
        assert_eq!(full_house(&h([1, 2, 3, 4, 5])), 0);
    }

    #[test]
    fn small_straight_windows() {
        assert_eq!(small_straight(&h([1, 2, 3, 4, 6])), 30);
        assert_eq!(small_straight(&h([2, 3, 4, 5, 5])), 30);
        assert_eq!(small_straight(&h([3, 4, 5, 6, 1])), 30);
        assert_eq!(small_straight(&h([1, 2, 3, 4, 5])), 30);
        assert_eq!(small_straight(&h([1, 1, 2, 3, 5])), 0);
        assert_eq!(small_straight(&h([1, 2, 4, 5, 6])), 0);
    }

    #[test]
    fn large_straight_profiles() {
        assert_eq!(large_straight(&h([2, 3, 4, 5, 6])), 40);
        assert_eq!(large_straight(&h([6, 5, 4, 3, 2])), 40);
        assert_eq!(large_straight(&h([1, 2, 3, 4, 5])), 0);
        assert_eq!(large_straight(&h([2, 3, 4, 5, 5])), 0);
    }
}
