use super::*;

impl<'a> Board<'a> {
    /// Determines whether a tile may land on a spot: the spot is free and on
    /// the grid, every occupied cardinal neighbour matches the facing edge,
    /// at least one such neighbour exists, and the placement does not wall a
    /// free region off the boundary when enclaves are disallowed.
    pub fn is_placeable(&self, coord: Coord, tile: Tile) -> bool {
        if !self.in_bounds(coord) || self.spot(coord).occupied() {
            return false;
        }

        let sheet = tile.sheet(self.catalog);
        let mut anchored = false;
        for dir in Direction::all() {
            if let Some((_, neighbor)) = self.occupied_neighbor(coord, dir) {
                anchored = true;
                if sheet.edge(dir) != neighbor.sheet(self.catalog).edge(dir.opposite()) {
                    return false;
                }
            }
        }

        anchored && (self.allow_enclaves || !self.creates_enclave(coord))
    }

    /// Attempts a placement. Either the tile lands and every derived query
    /// reflects it, or the board is untouched; there is no partial outcome.
    pub fn place(&mut self, coord: Coord, tile: Tile) -> bool {
        if !self.is_placeable(coord, tile) {
            return false;
        }
        self.force_place(coord, tile);
        true
    }

    /// Places without legality checks. Reserved for the foundation tile and
    /// for rebuilding known-good states.
    pub fn force_place(&mut self, coord: Coord, tile: Tile) {
        self.spot_mut(coord).tile = Some(tile);
    }

    /// Whether occupying the spot would seal some free region away from the
    /// board boundary. Floods free spots from each free cardinal neighbour
    /// of the candidate; the visited mask persists across the fills, so a
    /// region shared by two neighbours is walked once.
    fn creates_enclave(&self, coord: Coord) -> bool {
        let mut visited = HashSet::from([coord]);

        for dir in Direction::all() {
            let Some(seed) = self.neighbor(coord, dir) else {
                continue;
            };
            if self.spot(seed).occupied() || visited.contains(&seed) {
                continue;
            }

            let mut escaped = false;
            let mut stack = vec![seed];
            while let Some(c) = stack.pop() {
                if !visited.insert(c) {
                    continue;
                }
                if c.row == 0 || c.col == 0 || c.row == self.height - 1 || c.col == self.width - 1 {
                    escaped = true;
                }
                for d in Direction::all() {
                    if let Some(next) = self.neighbor(c, d) {
                        if !self.spot(next).occupied() && !visited.contains(&next) {
                            stack.push(next);
                        }
                    }
                }
            }
            if !escaped {
                return true;
            }
        }
        false
    }
}
