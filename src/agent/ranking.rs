use std::cmp::Ordering;

use crate::tessera::prelude::*;

use super::search::{Move, SearchContext};

/// Tiles left in the stack at which a meadow becomes fair game for the
/// player's last free token.
const LAST_TOKEN_MEADOW_CUTOFF: usize = 6;
/// Divisor turning the remaining stack into the meadow-value floor.
const MEADOW_FLOOR_DIVISOR: usize = 6;
/// Divisor turning the remaining stack into the token-economy charge.
const ECONOMY_DIVISOR: usize = 10;

/// Determines whether a candidate survives the filters: never a losing
/// trade, and meadow tokens only when they pay for their long lock-up.
pub(crate) fn worthwhile(mv: &Move, player: &Player, ctx: &SearchContext) -> bool {
    if mv.value < 0 {
        return false;
    }
    if let Some((PatternKind::Meadow, _)) = mv.token {
        if player.free_tokens == 1 && ctx.tiles_remaining > LAST_TOKEN_MEADOW_CUTOFF {
            return false;
        }
        if mv.meadow_value < (ctx.tiles_remaining / MEADOW_FLOOR_DIVISOR) as i32 {
            return false;
        }
    }
    true
}

/// The primary sort key: the move's value, charged when it would leave the
/// player without a free token while much of the stack remains.
pub(crate) fn combined(value: i32, gained: i32, player: &Player, ctx: &SearchContext) -> i32 {
    if player.free_tokens as i32 + gained <= 0 {
        value - (ctx.tiles_remaining / ECONOMY_DIVISOR) as i32
    } else {
        value
    }
}

/// Orders candidates best-first: combined value, then net tokens gained,
/// then token-less over token moves, then the token kind's priority, then
/// proximity to the foundation.
pub(crate) fn order(a: &Move, b: &Move) -> Ordering {
    b.combined
        .cmp(&a.combined)
        .then(b.gained_tokens.cmp(&a.gained_tokens))
        .then(a.token.is_some().cmp(&b.token.is_some()))
        .then(kind_priority(a).cmp(&kind_priority(b)))
        .then(a.distance.cmp(&b.distance))
}

fn kind_priority(mv: &Move) -> u8 {
    mv.token.map_or(u8::MAX, |(kind, _)| kind.priority())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(value: i32, combined: i32, gained: i32, token: Option<(PatternKind, Position)>) -> Move {
        Move {
            rotation: Rotation::R0,
            coord: Coord::new(0, 0),
            token,
            value,
            combined,
            meadow_value: 0,
            gained_tokens: gained,
            distance: 0,
        }
    }

    #[test]
    fn losing_trades_are_dropped() {
        let ctx = SearchContext { rules: RulesConfig::default(), tiles_remaining: 40 };
        let player = Player::new(0);
        assert!(!worthwhile(&mv(-1, -1, 0, None), &player, &ctx));
        assert!(worthwhile(&mv(0, 0, 0, None), &player, &ctx));
    }

    #[test]
    fn the_last_token_avoids_meadows_until_the_stack_runs_low() {
        let meadow = Some((PatternKind::Meadow, Position::South));
        let mut player = Player::new(0);
        player.free_tokens = 1;

        let early = SearchContext { rules: RulesConfig::default(), tiles_remaining: 30 };
        let late = SearchContext { rules: RulesConfig::default(), tiles_remaining: 4 };
        assert!(!worthwhile(&mv(9, 9, -1, meadow), &player, &early));
        assert!(worthwhile(&mv(9, 9, -1, meadow), &player, &late));
    }

    #[test]
    fn the_meadow_floor_decays_with_the_stack() {
        let meadow = Some((PatternKind::Meadow, Position::South));
        let player = Player::new(0);
        let probe = |tiles_remaining, meadow_value| {
            let ctx = SearchContext { rules: RulesConfig::default(), tiles_remaining };
            let mut candidate = mv(meadow_value, meadow_value, -1, meadow);
            candidate.meadow_value = meadow_value;
            worthwhile(&candidate, &player, &ctx)
        };
        assert!(!probe(36, 3));
        assert!(probe(36, 6));
        assert!(probe(5, 0));
    }

    #[test]
    fn spending_down_to_zero_is_charged_early() {
        let mut player = Player::new(0);
        player.free_tokens = 1;
        let ctx = SearchContext { rules: RulesConfig::default(), tiles_remaining: 40 };
        assert_eq!(combined(5, -1, &player, &ctx), 1);
        assert_eq!(combined(5, 0, &player, &ctx), 5);

        let endgame = SearchContext { rules: RulesConfig::default(), tiles_remaining: 3 };
        assert_eq!(combined(5, -1, &player, &endgame), 5);
    }

    #[test]
    fn ordering_prefers_value_then_tokens_then_simplicity() {
        let keep = Some((PatternKind::Keep, Position::North));
        let trail = Some((PatternKind::Trail, Position::South));

        assert_eq!(order(&mv(3, 3, 0, None), &mv(2, 2, 5, keep)), Ordering::Less);
        assert_eq!(order(&mv(2, 2, 1, keep), &mv(2, 2, 0, None)), Ordering::Less);
        assert_eq!(order(&mv(2, 2, 0, None), &mv(2, 2, 0, keep)), Ordering::Less);
        assert_eq!(order(&mv(2, 2, 0, keep), &mv(2, 2, 0, trail)), Ordering::Less);
    }
}
