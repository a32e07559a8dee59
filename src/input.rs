// Input generation
// Explicit entry points for producing the sequences fed to the tracers

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Settings for random input generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Number of values to generate
    pub size: usize,

    /// Smallest value (inclusive)
    pub min_value: i64,

    /// Largest value (inclusive)
    pub max_value: i64,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            size: 10,
            min_value: 0,
            max_value: 99,
        }
    }
}

/// Generate a random input sequence using the process RNG
pub fn generate_values(config: &InputConfig) -> Vec<i64> {
    generate_values_with(config, &mut rand::thread_rng())
}

/// Generate a random input sequence from a caller-supplied RNG
///
/// Reversed bounds are treated as their ordered equivalent.
pub fn generate_values_with<R: Rng>(config: &InputConfig, rng: &mut R) -> Vec<i64> {
    let (lo, hi) = if config.min_value <= config.max_value {
        (config.min_value, config.max_value)
    } else {
        (config.max_value, config.min_value)
    };

    (0..config.size).map(|_| rng.gen_range(lo..=hi)).collect()
}
