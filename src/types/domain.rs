/*!
Small shared value types --- grid position, heading, percept/action
vocabulary --- used across the knowledge base, planner, and simulator
boundary so they agree on a single representation.
*/

use std::fmt;

/// A 1-indexed cell in an N×N grid, row (`y`) then column (`x`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub y: u32,
    pub x: u32,
}

impl Position {
    pub fn new(y: u32, x: u32) -> Self {
        Position { y, x }
    }

    /// Manhattan distance to `other`.
    pub fn manhattan_distance(self, other: Position) -> u32 {
        self.y.abs_diff(other.y) + self.x.abs_diff(other.x)
    }

    /// The orthogonal neighbors of this cell that lie within a grid of
    /// size `n` (1-indexed, inclusive).
    pub fn neighbors(self, n: u32) -> Vec<Position> {
        let mut out = Vec::with_capacity(4);
        if self.y > 1 {
            out.push(Position::new(self.y - 1, self.x));
        }
        if self.y < n {
            out.push(Position::new(self.y + 1, self.x));
        }
        if self.x > 1 {
            out.push(Position::new(self.y, self.x - 1));
        }
        if self.x < n {
            out.push(Position::new(self.y, self.x + 1));
        }
        out
    }

    /// The cell reached by moving one step in `heading`, if it remains
    /// within a grid of size `n`.
    pub fn step(self, heading: Heading, n: u32) -> Option<Position> {
        let (dy, dx): (i64, i64) = match heading {
            Heading::Up => (-1, 0),
            Heading::Down => (1, 0),
            Heading::Left => (0, -1),
            Heading::Right => (0, 1),
        };
        let y = self.y as i64 + dy;
        let x = self.x as i64 + dx;
        if y < 1 || x < 1 || y > n as i64 || x > n as i64 {
            None
        } else {
            Some(Position::new(y as u32, x as u32))
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.y, self.x)
    }
}

/// The agent's compass orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Rotate 90° clockwise.
    pub fn turn_right(self) -> Self {
        match self {
            Heading::Up => Heading::Right,
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
        }
    }

    /// Rotate 90° counterclockwise.
    pub fn turn_left(self) -> Self {
        match self {
            Heading::Up => Heading::Left,
            Heading::Left => Heading::Down,
            Heading::Down => Heading::Right,
            Heading::Right => Heading::Up,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Heading::Up => "up",
            Heading::Down => "down",
            Heading::Left => "left",
            Heading::Right => "right",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The two objects whose presence a cell either has or lacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Wumpus,
    Pit,
}

impl ObjectKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectKind::Wumpus => "Wumpus",
            ObjectKind::Pit => "Pit",
        }
    }
}

/// A local sensation available to the agent at its current cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PerceptKind {
    Breeze,
    Stench,
    Glitter,
    Bump,
    Scream,
}

impl PerceptKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PerceptKind::Breeze => "Breeze",
            PerceptKind::Stench => "Stench",
            PerceptKind::Glitter => "Glitter",
            PerceptKind::Bump => "Bump",
            PerceptKind::Scream => "Scream",
        }
    }

    /// Whether this percept is retracted and re-asserted as a negation
    /// when absent, as opposed to being purely transient (only ever
    /// asserted positively).
    pub fn has_negative_form(self) -> bool {
        matches!(self, PerceptKind::Stench | PerceptKind::Breeze)
    }
}

/// An action the agent may execute, using the exact strings required
/// for cross-component compatibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    MoveForward,
    TurnLeft,
    TurnRight,
    Grab,
    Shoot,
    Climb,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::MoveForward => "MoveForward",
            Action::TurnLeft => "TurnLeft",
            Action::TurnRight => "TurnRight",
            Action::Grab => "Grab",
            Action::Shoot => "Shoot",
            Action::Climb => "Climb",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
