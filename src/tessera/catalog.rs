use regex::Regex;

use crate::tessera::prelude::*;

/// The deck, one line per tile type: an id, the nine terrain codes in ring
/// order (N NE E SE S SW W NW) followed by the center, and a copy count.
const CATALOG_SRC: &str = "
    A1: MMMMMMMMS x4
    A2: MMMMTMMMS x2
    B1: KKKKKKKKK x1
    B2: KMMMMMMMM x5
    B3: KMMMKMMMM x3
    B4: KMMMMMKMM x2
    B5: MMKMMMKMK x3
    B6: KMMMMMKKM x3
    B7: KKKMMMKKK x2
    B8: KKKMTMKKK x1
    C1: KMTMMMTMT x4
    C2: KMTMTMMMT x3
    C3: KMMMTMTMT x3
    C4: KMTMTMTM. x2
    C5: KMTMTMKKT x3
    D1: TMMMTMMMT x7
    D2: MMMMTMTMT x8
    D3: TMMMTMTM. x4
    D4: TMTMTMTM. x1
";

/// The tile type placed on the foundation spot at board construction.
pub const FOUNDATION_ID: &str = "C1";

/// The parsed tile deck. Built once at startup and shared by reference, so
/// boards can be cloned freely without copying definitions.
#[derive(Clone, Debug)]
pub struct Catalog {
    defs: Vec<TileDefinition>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Parses the baked-in catalog source.
    pub fn new() -> Result<Catalog> {
        Catalog::parse(CATALOG_SRC)
    }

    /// Parses a catalog from source text.
    pub fn parse(src: &str) -> Result<Catalog> {
        let pattern = Regex::new("^(?<id>[A-Z][0-9]):\\s*(?<code>[KTSM.]{9})\\s*x(?<count>[0-9]+)$")?;
        let mut defs = vec![];

        for line in src.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let Some(captures) = pattern.captures(line) else {
                return Err(anyhow!("could not parse catalog line {line}"));
            };
            let mut labels = [Terrain::Blank; 9];
            for (i, c) in captures.name("code").unwrap().as_str().chars().enumerate() {
                labels[i] = Terrain::parse(c)?;
            }
            defs.push(TileDefinition {
                id: captures.name("id").unwrap().as_str().to_owned(),
                labels,
                count: captures.name("count").unwrap().as_str().parse()?,
            });
        }

        let by_id = defs.iter().enumerate().map(|(i, d)| (d.id.clone(), i)).collect();
        Ok(Catalog { defs, by_id })
    }

    /// Gets a definition by index.
    pub fn get(&self, idx: usize) -> &TileDefinition {
        &self.defs[idx]
    }

    /// Finds a definition index by its id.
    pub fn find(&self, id: &str) -> Result<usize> {
        self.by_id.get(id).copied().ok_or(anyhow!("unknown tile type {id}"))
    }

    /// All definitions in catalog order.
    pub fn definitions(&self) -> &[TileDefinition] {
        &self.defs
    }

    /// The definition index of the foundation tile type.
    pub fn foundation(&self) -> usize {
        self.by_id[FOUNDATION_ID]
    }

    /// Builds the draw bag as definition indices, excluding the one copy of
    /// the foundation type that starts on the board.
    pub fn bag(&self) -> Vec<usize> {
        let foundation = self.foundation();
        let mut bag = vec![];
        for (idx, def) in self.defs.iter().enumerate() {
            let copies = if idx == foundation { def.count - 1 } else { def.count };
            bag.extend(std::iter::repeat(idx).take(copies as usize));
        }
        bag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_parses() {
        let catalog = Catalog::new().unwrap();
        assert_eq!(catalog.definitions().len(), 19);
        let total: u32 = catalog.definitions().iter().map(|d| d.count).sum();
        assert_eq!(total, 61);
    }

    #[test]
    fn bag_excludes_the_placed_foundation() {
        let catalog = Catalog::new().unwrap();
        assert_eq!(catalog.bag().len(), 60);
    }

    #[test]
    fn foundation_is_a_keep_over_a_trail() {
        let catalog = Catalog::new().unwrap();
        let sheet = catalog.get(catalog.foundation()).sheet(Rotation::R0);
        assert_eq!(sheet.edge(Direction::North), Terrain::Keep);
        assert_eq!(sheet.edge(Direction::East), Terrain::Trail);
        assert_eq!(sheet.edge(Direction::West), Terrain::Trail);
        assert_eq!(sheet.edge(Direction::South), Terrain::Meadow);
    }

    #[test]
    fn malformed_lines_are_rejected() {
        assert!(Catalog::parse("Z9: KKKK x1").is_err());
        assert!(Catalog::parse("Z9: KKKKKKKKQ x1").is_err());
    }

    #[test]
    fn banner_tiles_are_the_big_keeps() {
        let catalog = Catalog::new().unwrap();
        let banners: Vec<&str> = catalog
            .definitions()
            .iter()
            .filter(|d| d.sheet(Rotation::R0).is_banner())
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(banners, vec!["B1", "B7", "B8"]);
    }
}
