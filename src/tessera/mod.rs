/*
 *  An implementation of the Tessera territory game in Rust.
 */

pub(crate) mod board;
pub mod catalog;
pub mod config;
pub(crate) mod consts;
pub mod coords;
pub mod notation;
pub mod pattern;
pub mod player;
pub(crate) mod terrain;
pub(crate) mod tile;

pub mod prelude {
    pub(crate) use crate::utils::prelude::*;

    pub use super::{
        board::{Board, Spot},
        catalog::Catalog,
        config::{DistanceMetric, RulesConfig},
        consts::*,
        coords::{self, *},
        notation::*,
        pattern::Pattern,
        player::Player,
        terrain::{TerrainSheet, TileDefinition},
        tile::Tile
    };
}
