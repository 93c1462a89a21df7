use clap::ValueEnum;

use crate::tessera::prelude::*;

/// The distance metric used by the agent's closest-to-foundation tie-break.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum DistanceMetric {
    #[default]
    Manhattan,
    Euclidean,
    Chebyshev,
}

impl DistanceMetric {
    /// The distance between two board coordinates under this metric.
    /// Euclidean distances stay squared; only the ordering matters.
    pub fn distance(&self, a: Coord, b: Coord) -> usize {
        let (a, b) = (OffsetCoord::from(a), OffsetCoord::from(b));
        match self {
            DistanceMetric::Manhattan => a.manhattan(b),
            DistanceMetric::Euclidean => a.squared(b),
            DistanceMetric::Chebyshev => a.chebyshev(b),
        }
    }
}

/// Table rules, fixed for the lifetime of a game and read-only during any
/// search.
#[derive(Clone, Debug)]
pub struct RulesConfig {
    /// Grid width in spots.
    pub width: usize,
    /// Grid height in spots.
    pub height: usize,
    /// Whether a placement may seal free spots off the board boundary.
    pub allow_enclaves: bool,
    /// Whether a player may add a token to a pattern they already dominate.
    pub allow_reinforce: bool,
    /// Whether tied dominant players split the score (rounded up) or each
    /// take it in full.
    pub split_score: bool,
    /// Which pattern kinds permit token placement, indexed by kind.
    pub token_kinds: [bool; 4],
    /// Metric for the agent's closest-to-foundation tie-break.
    pub metric: DistanceMetric,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            width: 15,
            height: 15,
            allow_enclaves: true,
            allow_reinforce: false,
            split_score: true,
            token_kinds: [true; 4],
            metric: DistanceMetric::default(),
        }
    }
}

impl RulesConfig {
    /// Whether tokens may be placed on patterns of the given kind.
    pub fn tokens_allowed(&self, kind: PatternKind) -> bool {
        self.token_kinds[kind as usize]
    }

    /// The foundation coordinate for this grid.
    pub fn foundation(&self) -> Coord {
        Coord::new(self.height / 2, self.width / 2)
    }
}
