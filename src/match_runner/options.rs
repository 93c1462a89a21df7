use clap::Parser;

use crate::prelude::*;

#[derive(Clone, Debug, Parser)]
pub struct MatchOptions {
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Number of players in the self-play match.
    #[arg(short, long, default_value_t = 2)]
    pub players: usize,

    #[arg(long, default_value_t = 15)]
    pub width: usize,

    #[arg(long, default_value_t = 15)]
    pub height: usize,

    /// Reject placements that seal free spots off the board boundary.
    #[arg(long, default_value_t = false)]
    pub forbid_enclaves: bool,

    /// Let a player add tokens to a pattern they already dominate.
    #[arg(long, default_value_t = false)]
    pub allow_reinforce: bool,

    /// Pay every tied dominant player the full score instead of a split.
    #[arg(long, default_value_t = false)]
    pub no_split: bool,

    /// Seed for the bag shuffle and the agent's tie resolution.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Metric for the agent's closest-to-foundation tie-break.
    #[arg(short, long, value_enum, default_value = "manhattan")]
    pub metric: DistanceMetric,
}

impl MatchOptions {
    /// Maps the command line onto the table rules.
    pub fn rules_config(&self) -> RulesConfig {
        RulesConfig {
            width: self.width,
            height: self.height,
            allow_enclaves: !self.forbid_enclaves,
            allow_reinforce: self.allow_reinforce,
            split_score: !self.no_split,
            token_kinds: [true; 4],
            metric: self.metric,
        }
    }
}
