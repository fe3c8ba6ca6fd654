use crate::direction::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevatorState {
    pub floor: u8,
    pub direction: Direction,
}

impl Default for ElevatorState {
    fn default() -> Self {
        ElevatorState::new()
    }
}

impl ElevatorState {
    pub fn new() -> Self {
        ElevatorState {
            floor: 0,
            direction: Direction::Up,
        }
    }

    /// The floor one step closer to `target`. The step follows the target, not
    /// `direction`, so a target behind the car is still reached.
    pub fn next_floor_toward(&self, target: u8) -> u8 {
        if target > self.floor {
            self.floor + 1
        } else if target < self.floor {
            self.floor - 1
        } else {
            self.floor
        }
    }

    pub fn at_boundary(&self, top_floor: u8) -> bool {
        match self.direction {
            Direction::Up => self.floor == top_floor,
            Direction::Down => self.floor == 0,
        }
    }

    /// Flips the direction when the car sits at the end of the shaft it is
    /// heading for. Returns true if it flipped.
    pub fn reverse_at_boundary(&mut self, top_floor: u8) -> bool {
        if self.at_boundary(top_floor) {
            self.direction = self.direction.reversed();
            return true
        }
        false
    }
}
