use glam::IVec2;
use strum_macros::AsRefStr;

/// The four cardinal directions on the maze lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The four cardinal directions, in the order the carver lists them before shuffling.
    pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Returns the unit step for this direction. Up is negative Y.
    pub fn as_ivec2(self) -> IVec2 {
        self.into()
    }

    /// Returns the step to the next lattice cell, two tiles away.
    pub fn lattice_step(self) -> IVec2 {
        self.as_ivec2() * 2
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => -IVec2::Y,
            Direction::Down => IVec2::Y,
            Direction::Left => -IVec2::X,
            Direction::Right => IVec2::X,
        }
    }
}
