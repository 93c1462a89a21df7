pub(crate) mod patterns;
pub(crate) mod placement;

use super::prelude::*;

/// One square of the grid; free until a tile lands on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Spot {
    tile: Option<Tile>,
}

impl Spot {
    /// Whether a tile has been placed here.
    pub fn occupied(&self) -> bool {
        self.tile.is_some()
    }

    /// The tile placed here, if any.
    pub fn tile(&self) -> Option<&Tile> {
        self.tile.as_ref()
    }

    pub(crate) fn tile_mut(&mut self) -> Option<&mut Tile> {
        self.tile.as_mut()
    }
}

/// A runtime-sized grid of spots. The catalog is shared by reference so a
/// board clones cheaply; hypothetical placements during a search each run on
/// their own clone.
#[derive(Clone, Debug)]
pub struct Board<'a> {
    spots: Vec<Spot>,
    width: usize,
    height: usize,
    foundation: Coord,
    allow_enclaves: bool,
    catalog: &'a Catalog,
}

impl<'a> Board<'a> {
    /// Constructs a board with the foundation tile already standing on the
    /// central spot.
    pub fn new(catalog: &'a Catalog, config: &RulesConfig) -> Board<'a> {
        let mut board = Board {
            spots: vec![Spot::default(); config.width * config.height],
            width: config.width,
            height: config.height,
            foundation: config.foundation(),
            allow_enclaves: config.allow_enclaves,
            catalog,
        };
        board.force_place(board.foundation, Tile::new(catalog.foundation()));
        board
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn foundation(&self) -> Coord {
        self.foundation
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Whether the coordinate lies on the grid.
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.width + coord.col
    }

    /// Gets the spot at a coordinate, which must be on the grid.
    pub fn spot(&self, coord: Coord) -> &Spot {
        &self.spots[self.index(coord)]
    }

    fn spot_mut(&mut self, coord: Coord) -> &mut Spot {
        let idx = self.index(coord);
        &mut self.spots[idx]
    }

    /// The tile at a coordinate, if the spot is on the grid and occupied.
    pub fn tile_at(&self, coord: Coord) -> Option<&Tile> {
        if self.in_bounds(coord) {
            self.spot(coord).tile()
        } else {
            None
        }
    }

    /// The adjacent coordinate in a cardinal direction, when it stays on the
    /// grid.
    pub fn neighbor(&self, coord: Coord, dir: Direction) -> Option<Coord> {
        coord.step(dir).filter(|&c| self.in_bounds(c))
    }

    /// The adjacent coordinate in a direction, when that spot carries a tile.
    pub fn occupied_neighbor(&self, coord: Coord, dir: Direction) -> Option<(Coord, &Tile)> {
        let neighbor = self.neighbor(coord, dir)?;
        self.spot(neighbor).tile().map(|t| (neighbor, t))
    }

    /// Every occupied coordinate, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height)
            .flat_map(move |row| (0..self.width).map(move |col| Coord::new(row, col)))
            .filter(|&c| self.spot(c).occupied())
    }

    /// The free spots bordering at least one occupied spot; the only spots a
    /// tile can legally land on.
    pub fn frontier(&self) -> Vec<Coord> {
        let mut frontier = vec![];
        for row in 0..self.height {
            for col in 0..self.width {
                let coord = Coord::new(row, col);
                if self.spot(coord).occupied() {
                    continue;
                }
                if Direction::all().iter().any(|&d| self.occupied_neighbor(coord, d).is_some()) {
                    frontier.push(coord);
                }
            }
        }
        frontier
    }

    /// Stands a token on the tile at a coordinate.
    pub fn place_token(&mut self, coord: Coord, pos: Position, player: PlayerId) {
        self.spot_mut(coord)
            .tile_mut()
            .expect("token placed on a free spot")
            .place_token(pos, player);
    }

    /// Lifts the token off the tile at a coordinate, if any.
    pub fn lift_token(&mut self, coord: Coord) -> Option<(Position, PlayerId)> {
        self.spot_mut(coord).tile_mut().and_then(Tile::lift_token)
    }
}
