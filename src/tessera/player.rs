use crate::tessera::prelude::*;

/// A participant: identity, free tokens, and per-kind score totals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub free_tokens: u32,
    scores: [u32; 4],
}

impl Player {
    /// Constructs a fresh player with the starting token supply.
    pub fn new(id: PlayerId) -> Player {
        Player { id, free_tokens: STARTING_TOKENS, scores: [0; 4] }
    }

    /// Builds a roster of the given size.
    pub fn roster(count: usize) -> Vec<Player> {
        (0..count).map(Player::new).collect()
    }

    /// Takes a free token for placement. Spending a token the player does not
    /// have is a caller bug.
    pub fn take_token(&mut self) {
        if self.free_tokens == 0 {
            panic!("player {} has no free token to spend", self.id);
        }
        self.free_tokens -= 1;
    }

    /// Returns a token freed by a disbursed pattern.
    pub fn return_token(&mut self) {
        self.free_tokens += 1;
    }

    /// Credits points for one pattern kind.
    pub fn award(&mut self, kind: PatternKind, points: u32) {
        self.scores[kind as usize] += points;
    }

    /// The points earned for one pattern kind.
    pub fn score_for(&self, kind: PatternKind) -> u32 {
        self.scores[kind as usize]
    }

    /// The player's overall score.
    pub fn total_score(&self) -> u32 {
        self.scores.iter().sum()
    }
}
