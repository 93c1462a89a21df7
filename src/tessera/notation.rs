use regex::Regex;

use crate::tessera::prelude::*;

/// A notated turn: `r{deg}@{row},{col}` with an optional `+{kind}@{pos}`
/// token suffix. `r90@03,04+K@N` reads: turn the drawn tile one quarter
/// clockwise, land it on row 3 column 4, and stand a token on the keep
/// anchored at the tile's north position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveString {
    pub rotation: Rotation,
    pub coord: Coord,
    pub token: Option<(PatternKind, Position)>,
}

impl MoveString {
    /// Notates the move.
    pub fn notate(&self) -> String {
        let base = format!("r{}@{}", self.rotation.degrees(), self.coord.notate());
        match self.token {
            Some((kind, pos)) => format!("{base}+{}@{}", kind.code(), pos.notate()),
            None => base,
        }
    }
}

impl std::str::FromStr for MoveString {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let pattern = Regex::new(
            "^r(?<deg>0|90|180|270)@(?<coord>[0-9]{1,2},[0-9]{1,2})(\\+(?<kind>[KTSM])@(?<pos>NE|NW|SE|SW|N|E|S|W|C))?$",
        )?;
        let Some(captures) = pattern.captures(s) else {
            return Err(anyhow!("could not parse movestring {s}"));
        };

        let rotation = Rotation::from_degrees(captures.name("deg").unwrap().as_str().parse()?);
        let coord = captures.name("coord").unwrap().as_str().parse::<Coord>()?;
        let token = match (captures.name("kind"), captures.name("pos")) {
            (Some(kind), Some(pos)) => Some((
                PatternKind::parse(kind.as_str().chars().next().unwrap())?,
                Position::parse(pos.as_str())?,
            )),
            _ => None,
        };

        Ok(MoveString { rotation, coord, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movestrings_roundtrip() {
        for repr in ["r0@07,07", "r270@00,12+M@SW", "r90@03,04+K@N"] {
            let parsed: MoveString = repr.parse().unwrap();
            assert_eq!(parsed.notate(), repr);
        }
    }

    #[test]
    fn malformed_movestrings_are_rejected() {
        for repr in ["r45@03,04", "r90@3", "r90@03,04+Q@N", "r90@03,04+K@NC"] {
            assert!(repr.parse::<MoveString>().is_err());
        }
    }
}
