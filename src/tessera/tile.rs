use crate::tessera::prelude::*;

/// A drawn tile: a definition index into the catalog, its current rotation,
/// and the token standing on it, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub def: usize,
    pub rotation: Rotation,
    token: Option<(Position, PlayerId)>,
}

impl Tile {
    /// Constructs an unrotated tile of the given type.
    pub fn new(def: usize) -> Tile {
        Tile { def, rotation: Rotation::R0, token: None }
    }

    /// Constructs a tile already turned to the given rotation.
    pub fn rotated(def: usize, rotation: Rotation) -> Tile {
        Tile { def, rotation, token: None }
    }

    /// Turns the tile one quarter-turn clockwise. Derived connectivity and
    /// anchors follow automatically since the sheet is computed on demand.
    pub fn rotate(&mut self) {
        self.rotation = self.rotation.next();
    }

    /// Sets an absolute rotation.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// The tile's labels as currently oriented.
    pub fn sheet(&self, catalog: &Catalog) -> TerrainSheet {
        catalog.get(self.def).sheet(self.rotation)
    }

    /// The terrain at a position as currently oriented.
    pub fn terrain_at(&self, catalog: &Catalog, pos: Position) -> Terrain {
        self.sheet(catalog).at(pos)
    }

    /// The token standing on this tile, if any.
    pub fn token(&self) -> Option<(Position, PlayerId)> {
        self.token
    }

    /// Stands a token on the tile. A tile carries at most one token; a second
    /// placement is a caller bug.
    pub fn place_token(&mut self, pos: Position, player: PlayerId) {
        if let Some((held, by)) = self.token {
            panic!("tile already carries a token at {} for player {by}", held.notate());
        }
        self.token = Some((pos, player));
    }

    /// Lifts the token off the tile, returning its owner.
    pub fn lift_token(&mut self) -> Option<(Position, PlayerId)> {
        self.token.take()
    }
}
