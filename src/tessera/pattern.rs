use crate::tessera::prelude::*;

/// A connected terrain region discovered by one query. Patterns are built on
/// demand, scored, possibly disbursed, and dropped; they are never retained
/// across queries.
#[derive(Clone, Debug)]
pub struct Pattern {
    kind: PatternKind,
    /// Every (spot, position) the building walk visited.
    members: BTreeSet<(Coord, Position)>,
    /// The spots the region spans; scoring counts these.
    spots: BTreeSet<Coord>,
    /// Crossings that ran off the board or into a free spot.
    open_edges: u32,
    complete: bool,
    /// Banner tiles contained; keep patterns only.
    banners: u32,
    /// Closed keeps bordering the region; meadow patterns only.
    adjacent_closed_keeps: u32,
    /// Token tally per occupying player.
    tallies: BTreeMap<PlayerId, u32>,
    /// Where those tokens stand, for freeing on disbursement.
    tokens: Vec<(Coord, Position, PlayerId)>,
    disbursed: bool,
}

impl Pattern {
    /// Starts an area pattern. Only the two area terrains form one; anything
    /// else is a caller bug.
    pub fn area(terrain: Terrain) -> Pattern {
        let kind = match terrain {
            Terrain::Keep => PatternKind::Keep,
            Terrain::Trail => PatternKind::Trail,
            _ => panic!("cannot build an area pattern from {terrain:?}"),
        };
        Pattern::empty(kind)
    }

    /// Starts a meadow pattern.
    pub fn meadow() -> Pattern {
        Pattern::empty(PatternKind::Meadow)
    }

    /// Starts a shrine pattern.
    pub fn shrine() -> Pattern {
        Pattern::empty(PatternKind::Shrine)
    }

    fn empty(kind: PatternKind) -> Pattern {
        Pattern {
            kind,
            members: BTreeSet::new(),
            spots: BTreeSet::new(),
            open_edges: 0,
            complete: false,
            banners: 0,
            adjacent_closed_keeps: 0,
            tallies: BTreeMap::new(),
            tokens: vec![],
            disbursed: false,
        }
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    pub fn members(&self) -> &BTreeSet<(Coord, Position)> {
        &self.members
    }

    pub fn spots(&self) -> &BTreeSet<Coord> {
        &self.spots
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn banners(&self) -> u32 {
        self.banners
    }

    /// Total tokens standing on the region.
    pub fn token_count(&self) -> u32 {
        self.tallies.values().sum()
    }

    /// Tokens a given player has on the region.
    pub fn tokens_of(&self, player: PlayerId) -> u32 {
        self.tallies.get(&player).copied().unwrap_or(0)
    }

    // Builder surface used by the board walks.

    pub(crate) fn absorb(&mut self, coord: Coord, pos: Position, banner_tile: bool) {
        self.members.insert((coord, pos));
        if self.spots.insert(coord) && self.kind == PatternKind::Keep && banner_tile {
            self.banners += 1;
        }
    }

    /// Counts a spot toward the score without treating any of its positions
    /// as members; shrine patterns annex their occupied surroundings.
    pub(crate) fn annex(&mut self, coord: Coord) {
        self.spots.insert(coord);
    }

    pub(crate) fn record_token(&mut self, coord: Coord, pos: Position, player: PlayerId) {
        *self.tallies.entry(player).or_insert(0) += 1;
        self.tokens.push((coord, pos, player));
    }

    pub(crate) fn mark_open(&mut self) {
        self.open_edges += 1;
    }

    pub(crate) fn note_adjacent_closed_keep(&mut self) {
        self.adjacent_closed_keeps += 1;
    }

    /// Seals the build. Meadows never close during play; every other kind is
    /// complete when no crossing is open.
    pub(crate) fn finalize(&mut self) {
        self.complete = self.kind != PatternKind::Meadow && self.open_edges == 0;
    }

    pub(crate) fn force_complete(&mut self, complete: bool) {
        self.complete = complete;
    }

    /// The region's score under the current completeness.
    pub fn score(&self) -> u32 {
        let spots = self.spots.len() as u32;
        match self.kind {
            PatternKind::Keep => {
                if self.complete {
                    spots * KEEP_MULT_CLOSED + self.banners * BANNER_BONUS_CLOSED
                } else {
                    spots * KEEP_MULT_OPEN + self.banners * BANNER_BONUS_OPEN
                }
            }
            PatternKind::Trail => spots * TRAIL_MULT,
            PatternKind::Shrine => spots * SHRINE_MULT,
            PatternKind::Meadow => self.adjacent_closed_keeps * MEADOW_PER_KEEP,
        }
    }

    /// The players holding the maximal token tally; empty when the region is
    /// unoccupied.
    pub fn dominant(&self) -> Vec<PlayerId> {
        let Some(&max) = self.tallies.values().max() else {
            return vec![];
        };
        self.tallies
            .iter()
            .filter(|(_, &count)| count == max)
            .map(|(&player, _)| player)
            .collect()
    }

    /// Each dominant player's share of the score.
    pub fn share(&self, split: bool) -> u32 {
        let dominant = self.dominant().len() as u32;
        if dominant == 0 {
            return 0;
        }
        if split {
            self.score().div_ceil(dominant)
        } else {
            self.score()
        }
    }

    /// The zero-sum worth of this region for one player: their share minus
    /// every other dominant player's share.
    pub fn value_for(&self, player: PlayerId, split: bool) -> i32 {
        let dominant = self.dominant();
        if dominant.is_empty() {
            return 0;
        }
        let share = self.share(split) as i32;
        let others = dominant.iter().filter(|&&p| p != player).count() as i32;
        if dominant.contains(&player) {
            share - share * others
        } else {
            -share * others
        }
    }

    /// The zero-sum worth for the player if they stood one more token here.
    pub fn value_with_token_for(&self, player: PlayerId, split: bool) -> i32 {
        let mut trial = self.clone();
        *trial.tallies.entry(player).or_insert(0) += 1;
        trial.value_for(player, split)
    }

    /// Pays the dominant players and frees every token on the region, at most
    /// once per pattern instance. Returns whether anything was paid out.
    pub fn disburse(&mut self, board: &mut Board<'_>, players: &mut [Player], split: bool) -> bool {
        if self.disbursed {
            return false;
        }
        self.disbursed = true;

        let share = self.share(split);
        for player in self.dominant() {
            players[player].award(self.kind, share);
        }
        for &(coord, _, player) in &self.tokens {
            if board.lift_token(coord).is_some() {
                players[player].return_token();
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied_pattern(kind: PatternKind, spots: usize) -> Pattern {
        let mut pattern = Pattern::empty(kind);
        for i in 0..spots {
            pattern.absorb(Coord::new(0, i), Position::Center, false);
        }
        pattern.finalize();
        pattern
    }

    #[test]
    fn keep_scoring_doubles_when_closed() {
        let mut pattern = occupied_pattern(PatternKind::Keep, 3);
        pattern.banners = 1;
        assert!(pattern.is_complete());
        assert_eq!(pattern.score(), 3 * KEEP_MULT_CLOSED + BANNER_BONUS_CLOSED);
        pattern.force_complete(false);
        assert_eq!(pattern.score(), 3 * KEEP_MULT_OPEN + BANNER_BONUS_OPEN);
    }

    #[test]
    fn meadow_scores_by_adjacent_closed_keeps_only() {
        let mut pattern = occupied_pattern(PatternKind::Meadow, 11);
        assert_eq!(pattern.score(), 0);
        pattern.note_adjacent_closed_keep();
        pattern.note_adjacent_closed_keep();
        assert_eq!(pattern.score(), 2 * MEADOW_PER_KEEP);
    }

    #[test]
    fn tied_dominants_split_rounding_up() {
        let mut pattern = occupied_pattern(PatternKind::Trail, 5);
        pattern.record_token(Coord::new(0, 0), Position::Center, 0);
        pattern.record_token(Coord::new(0, 1), Position::Center, 1);
        assert_eq!(pattern.dominant(), vec![0, 1]);
        assert_eq!(pattern.share(true), 3); // ceil(5 / 2)
        assert_eq!(pattern.share(false), 5);
    }

    #[test]
    fn zero_sum_value_flips_sign_for_the_loser() {
        let mut pattern = occupied_pattern(PatternKind::Trail, 4);
        pattern.record_token(Coord::new(0, 0), Position::Center, 0);
        pattern.record_token(Coord::new(0, 1), Position::Center, 0);
        pattern.record_token(Coord::new(0, 2), Position::Center, 1);
        assert_eq!(pattern.value_for(0, true), 4);
        assert_eq!(pattern.value_for(1, true), -4);
        // one more token for player 1 ties the tally
        assert_eq!(pattern.value_with_token_for(1, true), 0);
    }

    #[test]
    fn unoccupied_patterns_are_worthless_to_everyone() {
        let pattern = occupied_pattern(PatternKind::Keep, 6);
        assert_eq!(pattern.value_for(0, true), 0);
        assert_eq!(pattern.dominant(), vec![]);
    }
}
