//! The configuration surface exposed to the controlling layer.

use std::time::Duration;

use gridpath_core::Heuristic;

use crate::engine::TraversalType;

/// Upper bound on the per-edge relaxation delay, in milliseconds.
pub const MAX_DELAY_MS: u64 = 100;

/// Options for one search run: algorithm, throttle, heuristic.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub algorithm: TraversalType,
    /// Per-edge relaxation delay in milliseconds, clamped to
    /// `[0, MAX_DELAY_MS]`.
    pub delay_ms: u64,
    /// Consulted only when `algorithm` is [`TraversalType::Astar`].
    pub heuristic: Heuristic,
}

impl SearchConfig {
    /// The effective throttle duration.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms.min(MAX_DELAY_MS))
    }
}

/// Grid sizes the controlling layer offers for a given display width:
/// every divisor of `display_width` in ascending order, excluding the
/// width itself (a one-pixel-per-cell grid is not useful).
pub fn display_sizes(display_width: i32) -> Vec<i32> {
    let mut sizes = Vec::new();
    for n in 2..display_width {
        if display_width % n == 0 {
            sizes.push(n);
        }
    }
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_is_clamped() {
        let mut config = SearchConfig::default();
        assert_eq!(config.delay(), Duration::ZERO);
        config.delay_ms = 40;
        assert_eq!(config.delay(), Duration::from_millis(40));
        config.delay_ms = 10_000;
        assert_eq!(config.delay(), Duration::from_millis(MAX_DELAY_MS));
    }

    #[test]
    fn display_sizes_are_proper_divisors() {
        let sizes = display_sizes(560);
        assert!(sizes.contains(&20));
        assert!(!sizes.contains(&1));
        assert!(!sizes.contains(&560));
        assert!(sizes.windows(2).all(|w| w[0] < w[1]));
        assert!(sizes.iter().all(|n| 560 % n == 0));
    }

    #[test]
    fn display_sizes_of_prime_width_is_empty() {
        assert!(display_sizes(7).is_empty());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let config = SearchConfig {
            algorithm: TraversalType::Astar,
            delay_ms: 25,
            heuristic: Heuristic::HalfEuclidean,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
