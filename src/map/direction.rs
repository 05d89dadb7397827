use glam::IVec2;
use strum_macros::AsRefStr;

use crate::constants::STEP;

/// The four cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    /// The four cardinal directions.
    /// This is just a convenience constant for iterating over (or sampling from) the directions.
    pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Returns the unit vector of the direction, with `y` growing downwards.
    pub fn as_ivec2(self) -> IVec2 {
        self.into()
    }

    /// Returns the per-step velocity for this direction: axis-aligned, `STEP` pixels long.
    pub fn velocity(self) -> IVec2 {
        self.as_ivec2() * STEP
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
