use crate::utils::prelude::*;

/// Tokens each player starts the game with.
pub const STARTING_TOKENS: u32 = 7;

/// Per-spot multiplier on a closed keep pattern.
pub const KEEP_MULT_CLOSED: u32 = 2;
/// Per-spot multiplier on an open keep pattern (end-of-game sweep).
pub const KEEP_MULT_OPEN: u32 = 1;
/// Bonus per banner tile contained in a closed keep pattern.
pub const BANNER_BONUS_CLOSED: u32 = 2;
/// Bonus per banner tile contained in an open keep pattern.
pub const BANNER_BONUS_OPEN: u32 = 1;
/// Per-spot multiplier on a trail pattern, open or closed.
pub const TRAIL_MULT: u32 = 1;
/// Per-spot multiplier on a shrine pattern.
pub const SHRINE_MULT: u32 = 1;
/// Flat award per closed keep bordering a meadow pattern.
pub const MEADOW_PER_KEEP: u32 = 3;
/// A tile is a banner tile when at least this many of its nine positions are keep.
pub const BANNER_MIN_KEEP: usize = 6;

/// Index of a player in the roster.
pub type PlayerId = usize;

// A terrain typing for one position on a tile.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Terrain {
    Keep = 0,
    Trail = 1,
    Shrine = 2,
    Meadow = 3,
    Blank = 4,
}

impl Terrain {
    /// The single-letter catalog code for this terrain.
    pub fn code(&self) -> char {
        match self {
            Terrain::Keep => 'K',
            Terrain::Trail => 'T',
            Terrain::Shrine => 'S',
            Terrain::Meadow => 'M',
            Terrain::Blank => '.',
        }
    }

    /// Parses a catalog code letter into a terrain.
    pub fn parse(c: char) -> Result<Terrain> {
        match c {
            'K' => Ok(Terrain::Keep),
            'T' => Ok(Terrain::Trail),
            'S' => Ok(Terrain::Shrine),
            'M' => Ok(Terrain::Meadow),
            '.' => Ok(Terrain::Blank),
            _   => Err(anyhow!("invalid terrain code {c}"))
        }
    }
}

// A pattern typing; one discriminant per scorable terrain kind.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PatternKind {
    Keep = 0,
    Trail = 1,
    Shrine = 2,
    Meadow = 3,
}

impl PatternKind {
    /// Gets the pattern kinds in canonical order.
    pub fn all() -> [PatternKind; 4] {
        [PatternKind::Keep, PatternKind::Trail, PatternKind::Shrine, PatternKind::Meadow]
    }

    /// The single-letter notation code for this kind; shared with the
    /// terrain alphabet.
    pub fn code(&self) -> char {
        match self {
            PatternKind::Keep => 'K',
            PatternKind::Trail => 'T',
            PatternKind::Shrine => 'S',
            PatternKind::Meadow => 'M',
        }
    }

    /// Parses a notation code letter into a pattern kind.
    pub fn parse(c: char) -> Result<PatternKind> {
        match Terrain::parse(c)? {
            Terrain::Blank => Err(anyhow!("blank is not a pattern kind")),
            terrain => Ok(PatternKind::from(terrain)),
        }
    }

    /// Ranking priority for token tie-breaks; lower is preferred.
    pub fn priority(&self) -> u8 {
        match self {
            PatternKind::Keep => 0,
            PatternKind::Shrine => 1,
            PatternKind::Trail => 2,
            PatternKind::Meadow => 3,
        }
    }
}

impl From<Terrain> for PatternKind {
    fn from(value: Terrain) -> Self {
        match value {
            Terrain::Keep => PatternKind::Keep,
            Terrain::Trail => PatternKind::Trail,
            Terrain::Shrine => PatternKind::Shrine,
            Terrain::Meadow => PatternKind::Meadow,
            Terrain::Blank => panic!("blank terrain has no pattern kind"),
        }
    }
}

/// One of the nine terrain positions on a tile. The first eight form the
/// clockwise ring around the circumference; cardinals sit at even ring
/// indices.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Position {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
    Center = 8,
}

impl From<u8> for Position {
    fn from(value: u8) -> Self {
        match value {
            0 => Position::North,
            1 => Position::NorthEast,
            2 => Position::East,
            3 => Position::SouthEast,
            4 => Position::South,
            5 => Position::SouthWest,
            6 => Position::West,
            7 => Position::NorthWest,
            8 => Position::Center,
            _ => panic!("expected position index of 0-8, received {value}"),
        }
    }
}

impl Position {
    /// Gets all nine positions in canonical order.
    pub fn all() -> [Position; 9] {
        [
            Position::North, Position::NorthEast, Position::East,
            Position::SouthEast, Position::South, Position::SouthWest,
            Position::West, Position::NorthWest, Position::Center,
        ]
    }

    /// Gets the eight ring positions in clockwise order.
    pub fn ring() -> [Position; 8] {
        [
            Position::North, Position::NorthEast, Position::East,
            Position::SouthEast, Position::South, Position::SouthWest,
            Position::West, Position::NorthWest,
        ]
    }

    /// Whether the position is one of the four cardinal edges.
    pub fn is_cardinal(&self) -> bool {
        matches!(self, Position::North | Position::East | Position::South | Position::West)
    }

    /// Whether the position is one of the four corners.
    pub fn is_corner(&self) -> bool {
        !self.is_cardinal() && *self != Position::Center
    }

    /// The board directions a region at this position can cross toward:
    /// one for an edge, two for a corner, none for the center.
    pub fn facings(&self) -> &'static [Direction] {
        match self {
            Position::North => &[Direction::North],
            Position::East => &[Direction::East],
            Position::South => &[Direction::South],
            Position::West => &[Direction::West],
            Position::NorthEast => &[Direction::North, Direction::East],
            Position::SouthEast => &[Direction::South, Direction::East],
            Position::SouthWest => &[Direction::South, Direction::West],
            Position::NorthWest => &[Direction::North, Direction::West],
            Position::Center => &[],
        }
    }

    /// The matching position on the neighbor across the given boundary.
    /// Crossing north or south flips the vertical component; crossing east
    /// or west flips the horizontal one.
    pub fn mirror(&self, dir: Direction) -> Position {
        match dir {
            Direction::North | Direction::South => match self {
                Position::North => Position::South,
                Position::South => Position::North,
                Position::NorthEast => Position::SouthEast,
                Position::SouthEast => Position::NorthEast,
                Position::NorthWest => Position::SouthWest,
                Position::SouthWest => Position::NorthWest,
                p => *p,
            },
            Direction::East | Direction::West => match self {
                Position::East => Position::West,
                Position::West => Position::East,
                Position::NorthEast => Position::NorthWest,
                Position::NorthWest => Position::NorthEast,
                Position::SouthEast => Position::SouthWest,
                Position::SouthWest => Position::SouthEast,
                p => *p,
            },
        }
    }

    /// The unit offset of this position from the tile center, as (cols, rows).
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Position::North => (0, -1),
            Position::NorthEast => (1, -1),
            Position::East => (1, 0),
            Position::SouthEast => (1, 1),
            Position::South => (0, 1),
            Position::SouthWest => (-1, 1),
            Position::West => (-1, 0),
            Position::NorthWest => (-1, -1),
            Position::Center => (0, 0),
        }
    }

    /// The three positions on this tile that face the given direction.
    pub fn facing_triplet(dir: Direction) -> [Position; 3] {
        match dir {
            Direction::North => [Position::NorthWest, Position::North, Position::NorthEast],
            Direction::East => [Position::NorthEast, Position::East, Position::SouthEast],
            Direction::South => [Position::SouthEast, Position::South, Position::SouthWest],
            Direction::West => [Position::SouthWest, Position::West, Position::NorthWest],
        }
    }

    /// Notates the position.
    pub fn notate(&self) -> &'static str {
        match self {
            Position::North => "N",
            Position::NorthEast => "NE",
            Position::East => "E",
            Position::SouthEast => "SE",
            Position::South => "S",
            Position::SouthWest => "SW",
            Position::West => "W",
            Position::NorthWest => "NW",
            Position::Center => "C",
        }
    }

    /// Parses a notated position.
    pub fn parse(s: &str) -> Result<Position> {
        match s {
            "N" => Ok(Position::North),
            "NE" => Ok(Position::NorthEast),
            "E" => Ok(Position::East),
            "SE" => Ok(Position::SouthEast),
            "S" => Ok(Position::South),
            "SW" => Ok(Position::SouthWest),
            "W" => Ok(Position::West),
            "NW" => Ok(Position::NorthWest),
            "C" => Ok(Position::Center),
            _ => Err(anyhow!("invalid notation {s} for position")),
        }
    }
}

// A cardinal board direction.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    /// Gets the four directions in clockwise order.
    pub fn all() -> [Direction; 4] {
        [Direction::North, Direction::East, Direction::South, Direction::West]
    }

    /// The opposing direction.
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// The edge position on a tile that faces this direction.
    pub fn edge(&self) -> Position {
        match self {
            Direction::North => Position::North,
            Direction::East => Position::East,
            Direction::South => Position::South,
            Direction::West => Position::West,
        }
    }
}

/// A quarter-turn rotation applied clockwise to a tile; a group of order 4.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rotation {
    #[default]
    R0 = 0,
    R90 = 1,
    R180 = 2,
    R270 = 3,
}

impl Rotation {
    /// Gets all rotations in order.
    pub fn all() -> [Rotation; 4] {
        [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270]
    }

    /// Builds a rotation from whole degrees. Anything that is not a
    /// registered quarter-turn is a caller bug.
    pub fn from_degrees(deg: u32) -> Rotation {
        match deg {
            0 => Rotation::R0,
            90 => Rotation::R90,
            180 => Rotation::R180,
            270 => Rotation::R270,
            _ => panic!("unregistered rotation {deg}"),
        }
    }

    /// This rotation in degrees.
    pub fn degrees(&self) -> u32 {
        *self as u32 * 90
    }

    /// The rotation that undoes this one.
    pub fn inverse(&self) -> Rotation {
        match self {
            Rotation::R0 => Rotation::R0,
            Rotation::R90 => Rotation::R270,
            Rotation::R180 => Rotation::R180,
            Rotation::R270 => Rotation::R90,
        }
    }

    /// The rotation one further quarter-turn clockwise.
    pub fn next(&self) -> Rotation {
        match self {
            Rotation::R0 => Rotation::R90,
            Rotation::R90 => Rotation::R180,
            Rotation::R180 => Rotation::R270,
            Rotation::R270 => Rotation::R0,
        }
    }

    /// Applies this rotation to a position. Ring positions advance two ring
    /// steps per quarter-turn; the center is fixed.
    pub fn apply(&self, pos: Position) -> Position {
        if pos == Position::Center {
            return Position::Center;
        }
        Position::from(((pos as u8) + 2 * (*self as u8)) % 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_is_a_group_of_order_four() {
        for pos in Position::all() {
            let mut p = pos;
            for _ in 0..4 {
                p = Rotation::R90.apply(p);
            }
            assert_eq!(p, pos);
        }
        assert_eq!(Rotation::R0, Rotation::R270.next());
    }

    #[test]
    fn rotation_inverse_undoes() {
        for rot in Rotation::all() {
            for pos in Position::all() {
                assert_eq!(rot.inverse().apply(rot.apply(pos)), pos);
            }
        }
    }

    #[test]
    fn mirror_is_an_involution_across_each_boundary() {
        for dir in Direction::all() {
            for pos in Position::all() {
                assert_eq!(pos.mirror(dir).mirror(dir), pos);
            }
        }
        assert_eq!(Position::NorthEast.mirror(Direction::East), Position::NorthWest);
        assert_eq!(Position::NorthEast.mirror(Direction::North), Position::SouthEast);
    }

    #[test]
    fn facing_triplets_mirror_onto_the_opposing_triplet() {
        for dir in Direction::all() {
            let ours = Position::facing_triplet(dir);
            let theirs = Position::facing_triplet(dir.opposite());
            for p in ours {
                assert!(theirs.contains(&p.mirror(dir)));
            }
        }
    }

    #[test]
    #[should_panic]
    fn unregistered_rotation_is_fatal() {
        let _ = Rotation::from_degrees(45);
    }
}
