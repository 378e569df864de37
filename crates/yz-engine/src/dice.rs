//! Die rolling.
//!
//! The session draws faces through the [`Roller`] trait so a seeded
//! [`StdRng`] drives real games while [`LoadedDice`] replays a fixed
//! sequence for tests and demonstrations.

use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::StdRng;

/// Number of faces on each die.
pub const FACES: u8 = 6;

/// A source of die faces.
pub trait Roller {
    /// Roll one die, returning a face from 1 to 6.
    fn roll_face(&mut self) -> u8;
}

impl Roller for StdRng {
    fn roll_face(&mut self) -> u8 {
        self.random_range(1..=FACES)
    }
}

/// Dice that replay a fixed sequence of faces, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct LoadedDice {
    faces: VecDeque<u8>,
}

impl LoadedDice {
    /// Create loaded dice from a face sequence.
    ///
    /// Faces outside 1-6 are clamped into range. An empty sequence always
    /// rolls a one.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        Self {
            faces: faces.into_iter().map(|f| f.clamp(1, FACES)).collect(),
        }
    }

    /// Number of faces left before the sequence repeats.
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl Roller for LoadedDice {
    fn roll_face(&mut self) -> u8 {
        match self.faces.pop_front() {
            Some(face) => {
                self.faces.push_back(face);
                face
            }
            None => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn std_rng_rolls_valid_faces() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            assert!((1..=6).contains(&rng.roll_face()));
        }
    }

    #[test]
    fn std_rng_deterministic_with_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let ra: Vec<u8> = (0..20).map(|_| a.roll_face()).collect();
        let rb: Vec<u8> = (0..20).map(|_| b.roll_face()).collect();
        assert_eq!(ra, rb);
    }

    #[test]
    fn loaded_dice_cycle() {
        let mut dice = LoadedDice::new([2, 5]);
        assert_eq!(dice.remaining(), 2);
        assert_eq!(dice.roll_face(), 2);
        assert_eq!(dice.roll_face(), 5);
        assert_eq!(dice.roll_face(), 2);
    }

    #[test]
    fn loaded_dice_clamp_and_default() {
        let mut dice = LoadedDice::new([0, 9]);
        assert_eq!(dice.roll_face(), 1);
        assert_eq!(dice.roll_face(), 6);

        let mut empty = LoadedDice::new([]);
        assert_eq!(empty.roll_face(), 1);
    }
}
