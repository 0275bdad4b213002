//! Offline random fact pool.
//!
//! The companion tells one of these when poked. Lookups always succeed;
//! there is no network involved.

use rand::seq::SliceRandom;

/// Source of short random facts.
pub trait FactProvider: Send + Sync {
    /// Return one short fact. Never fails.
    fn random_fact(&self) -> String;
}

/// Fact pool bundled into the binary.
pub struct BuiltinFacts {
    pool: Vec<&'static str>,
}

const FACTS: &str = include_str!("facts.txt");

impl BuiltinFacts {
    pub fn new() -> Self {
        Self {
            pool: FACTS
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}

impl Default for BuiltinFacts {
    fn default() -> Self {
        Self::new()
    }
}

impl FactProvider for BuiltinFacts {
    fn random_fact(&self) -> String {
        self.pool
            .choose(&mut rand::thread_rng())
            .expect("bundled fact pool is not empty")
            .to_string()
    }
}
