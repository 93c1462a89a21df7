use crate::tessera::prelude::*;

/// An immutable tile type: nine terrain labels plus the number of copies the
/// deck carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileDefinition {
    pub id: String,
    pub labels: [Terrain; 9],
    pub count: u32,
}

impl TileDefinition {
    /// The labels as seen under a rotation: terrain-at-position is always the
    /// definition's terrain at the position rotated backward.
    pub fn sheet(&self, rotation: Rotation) -> TerrainSheet {
        let inverse = rotation.inverse();
        let mut labels = [Terrain::Blank; 9];
        for pos in Position::all() {
            labels[pos as usize] = self.labels[inverse.apply(pos) as usize];
        }
        TerrainSheet(labels)
    }
}

/// The nine labels of a tile as currently oriented, together with the
/// connectivity they induce. Rebuilt on demand after every rotation; nothing
/// here is cached across orientations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TerrainSheet(pub [Terrain; 9]);

impl TerrainSheet {
    /// The terrain label at a position.
    pub fn at(&self, pos: Position) -> Terrain {
        self.0[pos as usize]
    }

    /// The terrain label at a cardinal edge.
    pub fn edge(&self, dir: Direction) -> Terrain {
        self.at(dir.edge())
    }

    /// Whether two positions belong to the same terrain region of this tile.
    /// Reflexive on non-blank labels, symmetric by construction.
    pub fn connected(&self, a: Position, b: Position) -> bool {
        let components = self.components();
        match (components[a as usize], components[b as usize]) {
            (Some(ca), Some(cb)) => ca == cb,
            _ => false,
        }
    }

    /// Whether the tile counts as a banner tile for keep scoring.
    pub fn is_banner(&self) -> bool {
        self.0.iter().filter(|&&t| t == Terrain::Keep).count() >= BANNER_MIN_KEEP
    }

    /// Labels per-position component ids; blank positions carry none.
    ///
    /// The region graph has three kinds of edges:
    /// 1. consecutive ring positions with equal labels,
    /// 2. the center against any ring position sharing its label,
    /// 3. meadow bridges over capped keep segments (see below).
    pub fn components(&self) -> [Option<u8>; 9] {
        let adjacency = self.adjacency();
        let mut components: [Option<u8>; 9] = [None; 9];
        let mut next = 0u8;

        for start in 0..9usize {
            if self.0[start] == Terrain::Blank || components[start].is_some() {
                continue;
            }
            let id = next;
            next += 1;
            let mut stack = vec![start];
            while let Some(i) = stack.pop() {
                if components[i].is_some() {
                    continue;
                }
                components[i] = Some(id);
                for j in 0..9usize {
                    if adjacency[i] & (1 << j) != 0 && components[j].is_none() {
                        stack.push(j);
                    }
                }
            }
        }
        components
    }

    /// The token-eligible positions: one canonical anchor per terrain region,
    /// the member geometrically closest to the region's centroid (lowest ring
    /// index on ties).
    pub fn anchors(&self) -> Vec<Position> {
        let components = self.components();
        let count = components.iter().flatten().copied().max().map_or(0, |m| m as usize + 1);
        let mut anchors = vec![];

        for id in 0..count {
            let members: Vec<Position> = Position::all()
                .into_iter()
                .filter(|&p| components[p as usize] == Some(id as u8))
                .collect();

            // Centroid in 8ths so the comparison stays integral.
            let n = members.len() as i32;
            let (sx, sy) = members.iter().fold((0, 0), |(sx, sy), p| {
                let (dx, dy) = p.offset();
                (sx + dx, sy + dy)
            });

            let anchor = members
                .iter()
                .copied()
                .min_by_key(|p| {
                    let (dx, dy) = p.offset();
                    let (ex, ey) = (dx * n - sx, dy * n - sy);
                    (ex * ex + ey * ey, *p as u8)
                })
                .unwrap();
            anchors.push(anchor);
        }
        anchors
    }

    /// Per-position adjacency bitmasks over the nine positions.
    fn adjacency(&self) -> [u16; 9] {
        let ring = Position::ring();
        let center = Position::Center as usize;
        let mut adjacency = [0u16; 9];
        let mut link = |a: usize, b: usize, adjacency: &mut [u16; 9]| {
            adjacency[a] |= 1 << b;
            adjacency[b] |= 1 << a;
        };

        for i in 0..8usize {
            let (a, b) = (ring[i] as usize, ring[(i + 1) % 8] as usize);
            if self.0[a] != Terrain::Blank && self.0[a] == self.0[b] {
                link(a, b, &mut adjacency);
            }
            if self.0[center] != Terrain::Blank && self.0[a] == self.0[center] {
                link(a, center, &mut adjacency);
            }
        }

        for (a, b) in self.meadow_bridges() {
            link(a as usize, b as usize, &mut adjacency);
        }
        adjacency
    }

    /// The implicit meadow connections: a maximal ring segment of keep blocks
    /// the meadows flanking it only when the keep has an entry into the tile —
    /// the center is keep as well, or the segment spans two or more cardinal
    /// edges (a corridor passing through). A capped keep with no entry gets
    /// bridged over instead.
    pub(crate) fn meadow_bridges(&self) -> Vec<(Position, Position)> {
        let ring = Position::ring();
        let keep_at = |i: usize| self.0[ring[i % 8] as usize] == Terrain::Keep;
        let center_keep = self.at(Position::Center) == Terrain::Keep;
        let mut bridges = vec![];

        if (0..8).all(keep_at) {
            return bridges; // no flanks to bridge
        }

        for start in 0..8usize {
            // maximal segments only: the previous ring slot must not be keep
            if !keep_at(start) || keep_at(start + 7) {
                continue;
            }
            let mut len = 1;
            while keep_at(start + len) {
                len += 1;
            }

            let cardinals = (start..start + len).filter(|i| ring[i % 8].is_cardinal()).count();
            if center_keep || cardinals >= 2 {
                continue; // the keep has an entry; it blocks
            }

            let before = ring[(start + 7) % 8];
            let after = ring[(start + len) % 8];
            if self.at(before) == Terrain::Meadow && self.at(after) == Terrain::Meadow {
                bridges.push((before, after));
            }
        }
        bridges
    }
}
