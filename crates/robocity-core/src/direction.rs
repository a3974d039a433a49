use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Compass heading plus an `Unknown` sink value.
///
/// Every transform is total: `Unknown` maps to `Unknown`, so a bad heading degrades instead of
/// failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
    Unknown,
}

impl Direction {
    /// The four cardinal headings in clockwise order starting at north.
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::Unknown => Direction::Unknown,
        }
    }

    pub fn rotate_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
            Direction::Unknown => Direction::Unknown,
        }
    }

    pub fn rotate_left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
            Direction::Unknown => Direction::Unknown,
        }
    }

    /// Apply a [`Rotation`]; `Rotation::Unknown` leaves the heading unchanged.
    pub fn rotate(self, rotation: Rotation) -> Self {
        match rotation {
            Rotation::Left => self.rotate_left(),
            Rotation::Right => self.rotate_right(),
            Rotation::Unknown => self,
        }
    }

    /// Case-insensitive parse. Anything that is not a compass word becomes `Unknown`.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        Self::CARDINALS
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(text))
            .unwrap_or(Direction::Unknown)
    }

    pub fn is_known(self) -> bool {
        self != Direction::Unknown
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::East => "EAST",
            Direction::South => "SOUTH",
            Direction::West => "WEST",
            Direction::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turn applied to a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rotation {
    Left,
    Right,
    Unknown,
}

impl Rotation {
    pub fn opposite(self) -> Self {
        match self {
            Rotation::Left => Rotation::Right,
            Rotation::Right => Rotation::Left,
            Rotation::Unknown => Rotation::Unknown,
        }
    }

    /// Case-insensitive parse of `LEFT`/`RIGHT`; anything else is `Unknown`.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.eq_ignore_ascii_case("LEFT") {
            Rotation::Left
        } else if text.eq_ignore_ascii_case("RIGHT") {
            Rotation::Right
        } else {
            Rotation::Unknown
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Rotation::Left => "LEFT",
            Rotation::Right => "RIGHT",
            Rotation::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive_and_never_fails() {
        assert_eq!(Direction::parse("north"), Direction::North);
        assert_eq!(Direction::parse("WeSt"), Direction::West);
        assert_eq!(Direction::parse("up"), Direction::Unknown);
        assert_eq!(Direction::parse(""), Direction::Unknown);
        assert_eq!(Rotation::parse("left"), Rotation::Left);
        assert_eq!(Rotation::parse("around"), Rotation::Unknown);
    }

    #[test]
    fn rotate_with_unknown_rotation_keeps_heading() {
        for d in Direction::CARDINALS {
            assert_eq!(d.rotate(Rotation::Unknown), d);
        }
        assert_eq!(Direction::North.rotate(Rotation::Left), Direction::West);
        assert_eq!(Direction::North.rotate(Rotation::Right), Direction::East);
    }
}
