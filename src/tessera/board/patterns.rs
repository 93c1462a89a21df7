use super::*;

/// Whether two positions of one tile physically touch: consecutive ring
/// positions, or the center against any ring position.
fn locally_adjacent(a: Position, b: Position) -> bool {
    match (a, b) {
        (Position::Center, Position::Center) => false,
        (Position::Center, _) | (_, Position::Center) => true,
        _ => (a as u8).abs_diff(b as u8) == 1 || (a as u8).abs_diff(b as u8) == 7,
    }
}

impl<'a> Board<'a> {
    /// The pattern containing one position of an occupied spot, or none when
    /// the position is blank, the spot is free, or the shared visited set
    /// already covers the position. All bookkeeping lives in `visited`;
    /// repeated queries over an unchanged board always rebuild the same
    /// patterns.
    pub(crate) fn walk_pattern(
        &self,
        coord: Coord,
        pos: Position,
        visited: &mut HashSet<(Coord, Position)>,
    ) -> Option<Pattern> {
        let tile = self.tile_at(coord)?;
        if visited.contains(&(coord, pos)) {
            return None;
        }
        match tile.terrain_at(self.catalog, pos) {
            terrain @ (Terrain::Keep | Terrain::Trail) => {
                Some(self.walk_area(coord, pos, terrain, visited))
            }
            Terrain::Meadow => Some(self.walk_meadow(coord, pos, visited)),
            Terrain::Shrine => Some(self.shrine_pattern(coord, pos, visited)),
            Terrain::Blank => None,
        }
    }

    /// The pattern containing one position, walked with a fresh visited set.
    pub fn pattern_containing(&self, coord: Coord, pos: Position) -> Option<Pattern> {
        self.walk_pattern(coord, pos, &mut HashSet::new())
    }

    /// Every pattern touching a just-placed spot: each distinct pattern
    /// through the spot's own nine positions, plus the shrine patterns of
    /// the surrounding tiles, whose completeness the placement may have
    /// changed.
    pub fn modified_patterns(&self, coord: Coord) -> Vec<Pattern> {
        let mut visited = HashSet::new();
        let mut found = vec![];
        for pos in Position::all() {
            found.extend(self.walk_pattern(coord, pos, &mut visited));
        }
        self.surrounding_shrines(coord, &mut visited, &mut found);
        found
    }

    /// The full pattern inventory of the board, each pattern exactly once.
    pub fn all_patterns(&self) -> Vec<Pattern> {
        let mut visited = HashSet::new();
        let mut found = vec![];
        let occupied: Vec<Coord> = self.occupied().collect();
        for coord in occupied {
            for pos in Position::all() {
                found.extend(self.walk_pattern(coord, pos, &mut visited));
            }
        }
        found
    }

    /// The patterns a candidate placement would extend, walked on the board
    /// as it stands. Seeds are the neighbouring positions the candidate
    /// sheet would actually join: mirrored cardinal faces with equal
    /// terrain, corner faces for meadow only, plus the surrounding shrines.
    pub fn patterns_before_placement(&self, coord: Coord, sheet: &TerrainSheet) -> Vec<Pattern> {
        let mut visited = HashSet::new();
        let mut found = vec![];

        for dir in Direction::all() {
            let Some((neighbor, tile)) = self.occupied_neighbor(coord, dir) else {
                continue;
            };
            let facing = tile.sheet(self.catalog);
            for pos in Position::facing_triplet(dir) {
                let terrain = sheet.at(pos);
                let crosses = pos.is_cardinal() || terrain == Terrain::Meadow;
                if crosses && terrain != Terrain::Blank && terrain == facing.at(pos.mirror(dir)) {
                    found.extend(self.walk_pattern(neighbor, pos.mirror(dir), &mut visited));
                }
            }
        }

        self.surrounding_shrines(coord, &mut visited, &mut found);
        found
    }

    fn surrounding_shrines(
        &self,
        coord: Coord,
        visited: &mut HashSet<(Coord, Position)>,
        found: &mut Vec<Pattern>,
    ) {
        for offset in coords::RING_OFFSETS {
            let Some(c) = (coord + offset).checked().filter(|&c| self.in_bounds(c)) else {
                continue;
            };
            let Some(tile) = self.tile_at(c) else {
                continue;
            };
            let sheet = tile.sheet(self.catalog);
            for pos in Position::all().into_iter().filter(|&p| sheet.at(p) == Terrain::Shrine) {
                found.extend(self.walk_pattern(c, pos, visited));
            }
        }
    }

    /// Flood walk over a keep or trail region. Crossings happen at cardinal
    /// positions only; a cardinal with no occupied neighbour leaves the
    /// pattern open there.
    fn walk_area(
        &self,
        coord: Coord,
        pos: Position,
        terrain: Terrain,
        visited: &mut HashSet<(Coord, Position)>,
    ) -> Pattern {
        let mut pattern = Pattern::area(terrain);
        let mut stack = vec![(coord, pos)];

        while let Some((c, p)) = stack.pop() {
            if !visited.insert((c, p)) {
                continue;
            }
            let tile = self.tile_at(c).expect("area walk crossed onto a free spot");
            let sheet = tile.sheet(self.catalog);

            pattern.absorb(c, p, sheet.is_banner());
            if let Some((held, owner)) = tile.token() {
                if held == p {
                    pattern.record_token(c, p, owner);
                }
            }

            for q in Position::all() {
                if q != p && sheet.connected(p, q) && !visited.contains(&(c, q)) {
                    stack.push((c, q));
                }
            }
            if p.is_cardinal() {
                let dir = p.facings()[0];
                match self.occupied_neighbor(c, dir) {
                    Some((nc, _)) => {
                        let np = p.mirror(dir);
                        if !visited.contains(&(nc, np)) {
                            stack.push((nc, np));
                        }
                    }
                    None => pattern.mark_open(),
                }
            }
        }

        pattern.finalize();
        pattern
    }

    /// Flood walk over a meadow region. Crossings happen at cardinal and
    /// corner positions; each keep region touching the meadow is probed with
    /// a scratch walk, and the completed ones raise the meadow's score.
    fn walk_meadow(
        &self,
        coord: Coord,
        pos: Position,
        visited: &mut HashSet<(Coord, Position)>,
    ) -> Pattern {
        let mut pattern = Pattern::meadow();
        let mut keeps_seen: HashSet<(Coord, Position)> = HashSet::new();
        let mut stack = vec![(coord, pos)];

        while let Some((c, p)) = stack.pop() {
            if !visited.insert((c, p)) {
                continue;
            }
            let tile = self.tile_at(c).expect("meadow walk crossed onto a free spot");
            let sheet = tile.sheet(self.catalog);

            pattern.absorb(c, p, false);
            if let Some((held, owner)) = tile.token() {
                if held == p {
                    pattern.record_token(c, p, owner);
                }
            }

            for q in Position::all() {
                if q != p && sheet.connected(p, q) && !visited.contains(&(c, q)) {
                    stack.push((c, q));
                }
            }
            for &dir in p.facings() {
                if let Some((nc, ntile)) = self.occupied_neighbor(c, dir) {
                    let np = p.mirror(dir);
                    if ntile.terrain_at(self.catalog, np) == Terrain::Meadow
                        && !visited.contains(&(nc, np))
                    {
                        stack.push((nc, np));
                    }
                }
            }

            // probe the bordering keeps; scratch state, never the shared set
            for q in Position::all() {
                if sheet.at(q) == Terrain::Keep
                    && locally_adjacent(p, q)
                    && !keeps_seen.contains(&(c, q))
                {
                    let keep = self.walk_area(c, q, Terrain::Keep, &mut HashSet::new());
                    if keep.is_complete() {
                        pattern.note_adjacent_closed_keep();
                    }
                    keeps_seen.extend(keep.members().iter().copied());
                }
            }
        }

        pattern.finalize();
        pattern
    }

    /// A shrine pattern: the shrine's own spot plus every occupied spot of
    /// the surrounding ring. Complete exactly when all eight ring spots
    /// exist and carry tiles.
    fn shrine_pattern(
        &self,
        coord: Coord,
        pos: Position,
        visited: &mut HashSet<(Coord, Position)>,
    ) -> Pattern {
        visited.insert((coord, pos));
        let tile = self.tile_at(coord).expect("shrine query on a free spot");

        let mut pattern = Pattern::shrine();
        pattern.absorb(coord, pos, false);
        if let Some((held, owner)) = tile.token() {
            if held == pos {
                pattern.record_token(coord, pos, owner);
            }
        }

        for offset in coords::RING_OFFSETS {
            match (coord + offset).checked().filter(|&c| self.in_bounds(c)) {
                Some(c) if self.spot(c).occupied() => pattern.annex(c),
                _ => pattern.mark_open(),
            }
        }

        pattern.finalize();
        pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_board(catalog: &Catalog, side: usize) -> Board<'_> {
        let config = RulesConfig { width: side, height: side, ..RulesConfig::default() };
        Board::new(catalog, &config)
    }

    /// Four D2 tiles whose trails close into a loop across a 2x2 block.
    fn trail_loop(board: &mut Board<'_>) {
        let d2 = board.catalog().find("D2").unwrap();
        board.force_place(Coord::new(0, 0), Tile::rotated(d2, Rotation::R270));
        board.force_place(Coord::new(0, 1), Tile::rotated(d2, Rotation::R0));
        board.force_place(Coord::new(1, 0), Tile::rotated(d2, Rotation::R180));
        board.force_place(Coord::new(1, 1), Tile::rotated(d2, Rotation::R90));
    }

    #[test]
    fn a_closed_trail_loop_scores_its_four_spots() {
        let catalog = Catalog::new().unwrap();
        let mut board = open_board(&catalog, 4);
        trail_loop(&mut board);
        board.place_token(Coord::new(0, 0), Position::Center, 0);

        let pattern = board.pattern_containing(Coord::new(0, 0), Position::Center).unwrap();
        assert_eq!(pattern.kind(), PatternKind::Trail);
        assert!(pattern.is_complete());
        assert_eq!(pattern.spots().len(), 4);
        assert_eq!(pattern.score(), 4 * TRAIL_MULT);
        assert_eq!(pattern.tokens_of(0), 1);
    }

    #[test]
    fn disbursement_frees_the_token_and_pays_once() {
        let catalog = Catalog::new().unwrap();
        let mut board = open_board(&catalog, 4);
        trail_loop(&mut board);
        board.place_token(Coord::new(0, 0), Position::Center, 0);

        let mut players = Player::roster(2);
        players[0].free_tokens -= 1;
        let mut pattern = board.pattern_containing(Coord::new(0, 0), Position::Center).unwrap();

        assert!(pattern.disburse(&mut board, &mut players, true));
        assert_eq!(players[0].score_for(PatternKind::Trail), 4);
        assert_eq!(players[0].free_tokens, STARTING_TOKENS);
        assert!(board.tile_at(Coord::new(0, 0)).unwrap().token().is_none());

        // a second call on the same instance is inert
        assert!(!pattern.disburse(&mut board, &mut players, true));
        assert_eq!(players[0].score_for(PatternKind::Trail), 4);
    }

    #[test]
    fn an_open_trail_is_incomplete() {
        let catalog = Catalog::new().unwrap();
        let mut board = open_board(&catalog, 4);
        let d2 = catalog.find("D2").unwrap();
        board.force_place(Coord::new(0, 0), Tile::rotated(d2, Rotation::R270));
        board.force_place(Coord::new(0, 1), Tile::rotated(d2, Rotation::R0));

        let pattern = board.pattern_containing(Coord::new(0, 0), Position::East).unwrap();
        assert!(!pattern.is_complete());
        assert_eq!(pattern.spots().len(), 2);
        assert_eq!(pattern.score(), 2 * TRAIL_MULT);
    }

    #[test]
    fn a_meadow_counts_its_completed_keeps() {
        let catalog = Catalog::new().unwrap();
        let mut board = open_board(&catalog, 4);
        let b2 = catalog.find("B2").unwrap();
        board.force_place(Coord::new(1, 0), Tile::rotated(b2, Rotation::R0));
        board.force_place(Coord::new(0, 0), Tile::rotated(b2, Rotation::R180));

        let keep = board.pattern_containing(Coord::new(1, 0), Position::North).unwrap();
        assert_eq!(keep.kind(), PatternKind::Keep);
        assert!(keep.is_complete());
        assert_eq!(keep.score(), 2 * KEEP_MULT_CLOSED);

        let meadow = board.pattern_containing(Coord::new(1, 0), Position::South).unwrap();
        assert_eq!(meadow.kind(), PatternKind::Meadow);
        assert!(!meadow.is_complete());
        assert_eq!(meadow.score(), MEADOW_PER_KEEP);
    }

    #[test]
    fn a_shrine_scores_itself_plus_occupied_surroundings() {
        let catalog = Catalog::new().unwrap();
        let mut board = open_board(&catalog, 5);
        let shrine = catalog.find("A1").unwrap();
        let center = Coord::new(2, 2);
        board.force_place(center, Tile::new(shrine));

        let partial = board.pattern_containing(center, Position::Center).unwrap();
        assert_eq!(partial.kind(), PatternKind::Shrine);
        assert_eq!(partial.score(), 1);
        assert!(!partial.is_complete());

        for offset in coords::RING_OFFSETS {
            board.force_place((center + offset).coerce(), Tile::new(shrine));
        }
        let full = board.pattern_containing(center, Position::Center).unwrap();
        assert!(full.is_complete());
        assert_eq!(full.score(), 9);
    }

    #[test]
    fn the_inventory_is_stable_across_repeated_queries() {
        let catalog = Catalog::new().unwrap();
        let mut board = open_board(&catalog, 4);
        trail_loop(&mut board);

        let digest = |patterns: &[Pattern]| -> Vec<(PatternKind, usize, bool)> {
            patterns.iter().map(|p| (p.kind(), p.spots().len(), p.is_complete())).collect()
        };
        let first = board.all_patterns();
        let second = board.all_patterns();
        assert_eq!(digest(&first), digest(&second));
        assert!(first.iter().any(|p| p.kind() == PatternKind::Trail && p.is_complete()));
    }

    #[test]
    fn before_placement_seeds_only_the_joined_patterns() {
        let catalog = Catalog::new().unwrap();
        let mut board = open_board(&catalog, 4);
        let d2 = catalog.find("D2").unwrap();
        board.force_place(Coord::new(0, 0), Tile::rotated(d2, Rotation::R270));
        board.force_place(Coord::new(0, 1), Tile::rotated(d2, Rotation::R0));

        // closing tile at (1,0): trail N and E joins the open trail once.
        let closing = Tile::rotated(d2, Rotation::R180);
        let sheet = closing.sheet(&catalog);
        let before = board.patterns_before_placement(Coord::new(1, 0), &sheet);
        let trails: Vec<&Pattern> =
            before.iter().filter(|p| p.kind() == PatternKind::Trail).collect();
        assert_eq!(trails.len(), 1);
        assert_eq!(trails[0].spots().len(), 2);
    }
}
