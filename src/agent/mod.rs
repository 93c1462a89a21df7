pub(crate) mod ranking;
pub(crate) mod search;

use std::cmp::Ordering;

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::tessera::prelude::*;

pub use search::{possible_moves, Move, SearchContext};

/// Picks moves by exhaustive one-ply evaluation: enumerate every legal
/// placement of the drawn tile, value each candidate on a cloned board, and
/// take the best ranked survivor. Exact ties resolve uniformly at random.
pub struct Agent {
    rng: SmallRng,
}

impl Agent {
    /// Constructs an agent with entropy-seeded tie resolution.
    pub fn new() -> Agent {
        Agent { rng: SmallRng::from_entropy() }
    }

    /// Constructs an agent with deterministic tie resolution.
    pub fn seeded(seed: u64) -> Agent {
        Agent { rng: SmallRng::seed_from_u64(seed) }
    }

    /// The agent's move for the drawn tile type, or none when no candidate
    /// survives the filters; the caller discards the tile in that case.
    pub fn choose(
        &mut self,
        board: &Board<'_>,
        def: usize,
        player: &Player,
        ctx: &SearchContext,
    ) -> Option<Move> {
        let moves = possible_moves(board, def, player, ctx);
        let best = *moves.first()?;
        let ties = moves
            .iter()
            .take_while(|m| ranking::order(m, &best) == Ordering::Equal)
            .count();
        Some(moves[self.rng.gen_range(0..ties)])
    }
}

impl Default for Agent {
    fn default() -> Self {
        Agent::new()
    }
}
