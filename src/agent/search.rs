use itertools::Itertools;

use crate::tessera::prelude::*;

use super::ranking;

/// Read-only inputs of one search: the table rules and how deep into the
/// stack the game is, which drives the token-economy thresholds.
#[derive(Clone, Debug)]
pub struct SearchContext {
    pub rules: RulesConfig,
    pub tiles_remaining: usize,
}

/// A fully evaluated candidate: where the tile lands, the optional token,
/// and the figures the ranking orders by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub rotation: Rotation,
    pub coord: Coord,
    pub token: Option<(PatternKind, Position)>,
    /// Zero-sum score delta of the placement for the searching player.
    pub value: i32,
    /// Value with the token-economy charge applied; the primary sort key.
    pub combined: i32,
    /// The meadow component of the delta.
    pub meadow_value: i32,
    /// Tokens returned by patterns completed now, minus the token spent.
    pub gained_tokens: i32,
    /// Distance from the landing spot to the foundation.
    pub distance: usize,
}

impl Move {
    /// Notates the move.
    pub fn notate(&self) -> String {
        MoveString { rotation: self.rotation, coord: self.coord, token: self.token }.notate()
    }
}

/// Produces every worthwhile move for the drawn tile type, best first:
/// rotation x frontier spot, legality-checked, each survivor valued on its
/// own cloned board, then filtered and ranked.
pub fn possible_moves(
    board: &Board<'_>,
    def: usize,
    player: &Player,
    ctx: &SearchContext,
) -> Vec<Move> {
    let mut moves: Vec<Move> = Rotation::all()
        .into_iter()
        .cartesian_product(board.frontier())
        .filter_map(|(rotation, coord)| {
            let tile = Tile::rotated(def, rotation);
            board.is_placeable(coord, tile).then(|| evaluate(board, tile, coord, player, ctx))
        })
        .flatten()
        .filter(|mv| ranking::worthwhile(mv, player, ctx))
        .collect();

    moves.sort_by(ranking::order);
    moves
}

/// Values one legal placement, with and without each permissible token.
fn evaluate(
    board: &Board<'_>,
    tile: Tile,
    coord: Coord,
    player: &Player,
    ctx: &SearchContext,
) -> Vec<Move> {
    let catalog = board.catalog();
    let sheet = tile.sheet(catalog);
    let split = ctx.rules.split_score;

    let signed = |patterns: &[Pattern]| -> i32 {
        patterns.iter().map(|p| p.value_for(player.id, split)).sum()
    };
    let meadows = |patterns: &[Pattern]| -> i32 {
        patterns
            .iter()
            .filter(|p| p.kind() == PatternKind::Meadow)
            .map(|p| p.value_for(player.id, split))
            .sum()
    };

    let before = board.patterns_before_placement(coord, &sheet);
    let (before_value, before_meadow) = (signed(&before), meadows(&before));

    // hypothetical placement on a snapshot; legality is already settled
    let mut snapshot = board.clone();
    snapshot.force_place(coord, tile);
    let after = snapshot.modified_patterns(coord);
    let (after_value, after_meadow) = (signed(&after), meadows(&after));

    // tokens the player gets back from patterns this placement completes
    let returned: i32 = after
        .iter()
        .filter(|p| p.is_complete())
        .map(|p| p.tokens_of(player.id) as i32)
        .sum();

    let mv = |token, value, meadow_value, gained| Move {
        rotation: tile.rotation,
        coord,
        token,
        value,
        combined: ranking::combined(value, gained, player, ctx),
        meadow_value,
        gained_tokens: gained,
        distance: ctx.rules.metric.distance(coord, board.foundation()),
    };

    let mut out = vec![mv(None, after_value - before_value, after_meadow - before_meadow, returned)];
    if player.free_tokens == 0 {
        return out;
    }

    for anchor in sheet.anchors() {
        let terrain = sheet.at(anchor);
        if terrain == Terrain::Blank {
            continue;
        }
        let kind = PatternKind::from(terrain);
        if !ctx.rules.tokens_allowed(kind) {
            continue;
        }
        let Some(pattern) = after.iter().find(|p| p.members().contains(&(coord, anchor))) else {
            continue;
        };
        let claimable = pattern.token_count() == 0
            || (ctx.rules.allow_reinforce && pattern.dominant().contains(&player.id));
        if !claimable {
            continue;
        }

        // retally only the affected pattern
        let plain = pattern.value_for(player.id, split);
        let held = pattern.value_with_token_for(player.id, split);
        let value = after_value - plain + held - before_value;
        let meadow_value = if kind == PatternKind::Meadow {
            after_meadow - plain + held - before_meadow
        } else {
            after_meadow - before_meadow
        };
        let gained = returned - 1 + i32::from(pattern.is_complete());
        out.push(mv(Some((kind, anchor)), value, meadow_value, gained));
    }
    out
}
