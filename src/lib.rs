#![allow(dead_code)]

pub mod agent;
pub mod match_runner;
pub mod tessera;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{anyhow, Context, Error};
        pub type Result<T> = anyhow::Result<T, Error>;

        pub use std::{
            collections::{BTreeMap, BTreeSet, HashMap, HashSet},
            ops::{Add, Sub}
        };
    }
}

pub mod prelude {
    pub use super::agent::*;
    pub use super::match_runner::*;
    pub use super::tessera::prelude::*;
    pub use super::utils::prelude::*;
}
