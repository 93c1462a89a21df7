mod options;

use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

pub use options::MatchOptions;

use crate::prelude::*;

/// Final standings of one self-play game.
#[derive(Clone, Debug)]
pub struct MatchReport {
    pub placed: usize,
    pub discarded: usize,
    pub totals: Vec<u32>,
    pub free_tokens: Vec<u32>,
}

/// Drives a full self-play game: shuffle the bag, then draw, search, place,
/// stand tokens, and pay out closed patterns until the bag runs dry.
pub struct MatchRunner {
    options: MatchOptions,
}

impl MatchRunner {
    /// Produces a runner for the given command-line options.
    pub fn new(options: MatchOptions) -> MatchRunner {
        MatchRunner { options }
    }

    /// Plays one game to the end and produces the final standings.
    pub fn run(&self) -> Result<MatchReport> {
        let catalog = Catalog::new()?;
        let rules = self.options.rules_config();
        let mut board = Board::new(&catalog, &rules);
        let mut players = Player::roster(self.options.players);

        let mut rng = match self.options.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let mut agent = match self.options.seed {
            Some(seed) => Agent::seeded(seed),
            None => Agent::new(),
        };

        let mut bag = catalog.bag();
        bag.shuffle(&mut rng);
        let stack_size = bag.len();
        log::info!(
            "match start: {} players on {}x{}, {} tiles in the bag",
            players.len(), rules.width, rules.height, stack_size
        );

        let (mut placed, mut discarded) = (0, 0);
        for (turn, def) in bag.into_iter().enumerate() {
            let current = turn % players.len();
            let ctx = SearchContext {
                rules: rules.clone(),
                tiles_remaining: stack_size - turn,
            };

            let Some(mv) = agent.choose(&board, def, &players[current], &ctx) else {
                log::debug!("player {current} discards {}", catalog.get(def).id);
                discarded += 1;
                continue;
            };

            if !board.place(mv.coord, Tile::rotated(def, mv.rotation)) {
                return Err(anyhow!("search produced an illegal move {}", mv.notate()));
            }
            placed += 1;
            if let Some((_, pos)) = mv.token {
                players[current].take_token();
                board.place_token(mv.coord, pos, current);
            }
            log::debug!("player {current} plays {} as {}", catalog.get(def).id, mv.notate());

            // pay out whatever the placement closed
            for mut pattern in board.modified_patterns(mv.coord) {
                if pattern.is_complete() {
                    pattern.disburse(&mut board, &mut players, rules.split_score);
                }
            }
        }

        // end-of-game sweep: everything still standing pays out as it is
        for mut pattern in board.all_patterns() {
            pattern.disburse(&mut board, &mut players, rules.split_score);
        }

        for player in &players {
            log::info!(
                "player {}: {} points ({} keep, {} trail, {} shrine, {} meadow)",
                player.id,
                player.total_score(),
                player.score_for(PatternKind::Keep),
                player.score_for(PatternKind::Trail),
                player.score_for(PatternKind::Shrine),
                player.score_for(PatternKind::Meadow),
            );
        }

        Ok(MatchReport {
            placed,
            discarded,
            totals: players.iter().map(Player::total_score).collect(),
            free_tokens: players.iter().map(|p| p.free_tokens).collect(),
        })
    }
}
