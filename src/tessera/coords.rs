use crate::tessera::prelude::*;

/// Simple board coordinate; bounds are owned by the board, not the coord.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl std::str::FromStr for Coord {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let Some((row, col)) = s.split_once(',') else {
            return Err(anyhow!("expected row,col for Coord; received {s}"));
        };
        Ok(Coord { row: row.trim().parse()?, col: col.trim().parse()? })
    }
}

impl Coord {
    /// Constructs a new coord.
    pub fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// The canonical notation of the coord.
    pub fn notate(&self) -> String {
        format!("{:02},{:02}", self.row, self.col)
    }

    /// The neighbouring coordinate in a cardinal direction, unbounded above.
    /// Returns none when the step would leave the grid at zero.
    pub fn step(&self, dir: Direction) -> Option<Coord> {
        let offset = direction_offset(dir);
        (self + offset).checked()
    }
}

// Simple offset pair that can be used to calculate neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OffsetCoord {
    pub rows: isize,
    pub cols: isize,
}

/// Offsets that turn a coordinate into one of its orthogonal neighbours,
/// in N, E, S, W order.
pub static ORTHOGONAL_OFFSETS: [OffsetCoord; 4] = [
    OffsetCoord { rows: -1, cols: 0 },
    OffsetCoord { rows: 0, cols: 1 },
    OffsetCoord { rows: 1, cols: 0 },
    OffsetCoord { rows: 0, cols: -1 },
];

/// Offsets to the eight surrounding coordinates, clockwise from north.
pub static RING_OFFSETS: [OffsetCoord; 8] = [
    OffsetCoord { rows: -1, cols: 0 },
    OffsetCoord { rows: -1, cols: 1 },
    OffsetCoord { rows: 0, cols: 1 },
    OffsetCoord { rows: 1, cols: 1 },
    OffsetCoord { rows: 1, cols: 0 },
    OffsetCoord { rows: 1, cols: -1 },
    OffsetCoord { rows: 0, cols: -1 },
    OffsetCoord { rows: -1, cols: -1 },
];

/// The orthogonal offset matching a cardinal direction.
pub fn direction_offset(dir: Direction) -> OffsetCoord {
    ORTHOGONAL_OFFSETS[dir as usize]
}

impl OffsetCoord {
    /// Coerces the offset into a coordinate unchecked.
    pub fn coerce(&self) -> Coord {
        Coord {
            row: self.rows as usize,
            col: self.cols as usize,
        }
    }

    /// Coerces the offset into a coordinate when both components are
    /// non-negative.
    pub fn checked(&self) -> Option<Coord> {
        if self.rows >= 0 && self.cols >= 0 {
            Some(self.coerce())
        } else {
            None
        }
    }

    /// The taxicab distance between two points.
    pub fn manhattan(&self, other: OffsetCoord) -> usize {
        self.rows.abs_diff(other.rows) + self.cols.abs_diff(other.cols)
    }

    /// The chessboard distance between two points.
    pub fn chebyshev(&self, other: OffsetCoord) -> usize {
        self.rows.abs_diff(other.rows).max(self.cols.abs_diff(other.cols))
    }

    /// The squared euclidean distance between two points.
    pub fn squared(&self, other: OffsetCoord) -> usize {
        let dr = self.rows.abs_diff(other.rows);
        let dc = self.cols.abs_diff(other.cols);
        dr * dr + dc * dc
    }

    /// Constructs a new offset coord.
    pub fn new(rows: isize, cols: isize) -> OffsetCoord {
        OffsetCoord { rows, cols }
    }
}

// C -> OC

impl From<Coord> for OffsetCoord {
    fn from(value: Coord) -> Self {
        OffsetCoord {
            rows: value.row as isize,
            cols: value.col as isize,
        }
    }
}

impl From<&Coord> for OffsetCoord {
    fn from(value: &Coord) -> Self {
        OffsetCoord {
            rows: value.row as isize,
            cols: value.col as isize,
        }
    }
}

// OC + OC

impl Add<&OffsetCoord> for &OffsetCoord {
    type Output = OffsetCoord;
    fn add(self, rhs: &OffsetCoord) -> Self::Output {
        OffsetCoord {
            rows: self.rows + rhs.rows,
            cols: self.cols + rhs.cols,
        }
    }
}

impl Add<OffsetCoord> for OffsetCoord {
    type Output = OffsetCoord;
    fn add(self, rhs: OffsetCoord) -> Self::Output {
        &self + &rhs
    }
}

// C + OC

impl Add<&OffsetCoord> for &Coord {
    type Output = OffsetCoord;
    fn add(self, rhs: &OffsetCoord) -> Self::Output {
        &OffsetCoord::from(self) + rhs
    }
}

impl Add<OffsetCoord> for &Coord {
    type Output = OffsetCoord;
    fn add(self, rhs: OffsetCoord) -> Self::Output {
        self + &rhs
    }
}

impl Add<OffsetCoord> for Coord {
    type Output = OffsetCoord;
    fn add(self, rhs: OffsetCoord) -> Self::Output {
        &self + &rhs
    }
}
