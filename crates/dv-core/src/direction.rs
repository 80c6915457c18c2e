use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction of travel out of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
    /// Northeast.
    Northeast,
    /// Northwest.
    Northwest,
    /// Southeast.
    Southeast,
    /// Southwest.
    Southwest,
    /// Up.
    Up,
    /// Down.
    Down,
    /// Into an enclosed space.
    In,
    /// Out of an enclosed space.
    Out,
}

impl Direction {
    /// Parse a direction word or abbreviation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            "ne" | "northeast" => Some(Self::Northeast),
            "nw" | "northwest" => Some(Self::Northwest),
            "se" | "southeast" => Some(Self::Southeast),
            "sw" | "southwest" => Some(Self::Southwest),
            "u" | "up" => Some(Self::Up),
            "d" | "down" => Some(Self::Down),
            "in" | "inside" | "enter" => Some(Self::In),
            "out" | "outside" | "exit" | "leave" => Some(Self::Out),
            _ => None,
        }
    }

    /// All words that [`Direction::parse`] accepts.
    pub fn words() -> &'static [&'static str] {
        &[
            "n", "north", "s", "south", "e", "east", "w", "west", "ne", "northeast", "nw",
            "northwest", "se", "southeast", "sw", "southwest", "u", "up", "d", "down", "in",
            "inside", "enter", "out", "outside", "exit", "leave",
        ]
    }

    /// Get the display name for this direction.
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Northeast => "northeast",
            Self::Northwest => "northwest",
            Self::Southeast => "southeast",
            Self::Southwest => "southwest",
            Self::Up => "up",
            Self::Down => "down",
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
