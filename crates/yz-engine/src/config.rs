//! Configuration for a game.

/// Environment variable holding a fixed RNG seed.
pub const SEED_ENV: &str = "YAHTZEE_SEED";

/// Configuration for a game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// RNG seed for reproducible dice. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Read configuration from the environment.
    ///
    /// An unparsable seed is ignored.
    pub fn from_env() -> Self {
        Self::from_seed_var(std::env::var(SEED_ENV).ok().as_deref())
    }

    fn from_seed_var(value: Option<&str>) -> Self {
        Self {
            seed: value.and_then(|v| v.trim().parse().ok()),
        }
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
