#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down,
    Up,
}

impl Direction {
    pub fn as_string(self) -> String {
        match self {
            Direction::Down => String::from("down"),
            Direction::Up => String::from("up"),
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
        }
    }

    /// Orders a batch so the car serves it along this direction:
    /// ascending when going up, descending when going down.
    pub fn sort_batch(self, floors: &mut [u8]) {
        match self {
            Direction::Up => floors.sort_unstable(),
            Direction::Down => floors.sort_unstable_by(|a, b| b.cmp(a)),
        }
    }
}
