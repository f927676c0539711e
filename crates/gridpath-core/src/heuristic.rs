//! Remaining-cost estimate strategies for A*.

use rand::{Rng, RngExt};

use crate::geom::Point;

/// A pluggable estimate of the remaining cost between two vertices.
///
/// The first three variants are admissible under the cardinal-neighbor,
/// unit-cost connectivity model (they never overestimate), so A* stays
/// optimal with them. The last two are deliberately inadmissible and
/// exist to demonstrate non-optimal behaviour and to stress-test
/// frontier ordering.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// True Euclidean distance. Admissible.
    #[default]
    Euclidean,
    /// Half the Euclidean distance. Admissible but weaker.
    HalfEuclidean,
    /// Always zero: reduces A* to Dijkstra.
    Zero,
    /// Euclidean distance scaled by a fresh random factor in `[0, 1)`.
    /// Inadmissible.
    JitteredEuclidean,
    /// A pure random value in `[0, 5000)`, unrelated to the geometry.
    /// Inadmissible.
    Random,
}

impl Heuristic {
    /// Estimate the remaining cost from `from` to `to`. Always ≥ 0.
    ///
    /// `rng` is only consulted by the random variants.
    pub fn estimate(self, from: Point, to: Point, rng: &mut impl Rng) -> f64 {
        match self {
            Self::Euclidean => from.distance_to(to),
            Self::HalfEuclidean => from.distance_to(to) / 2.0,
            Self::Zero => 0.0,
            Self::JitteredEuclidean => from.distance_to(to) * rng.random::<f64>(),
            Self::Random => rng.random_range(0.0..5000.0),
        }
    }

    /// Whether this strategy never overestimates the true remaining cost.
    #[inline]
    pub fn is_admissible(self) -> bool {
        matches!(self, Self::Euclidean | Self::HalfEuclidean | Self::Zero)
    }
}
