use shared_resources::direction::Direction;
use shared_resources::elevator_state::ElevatorState;

use crate::utilities::elevator_event::ElevatorEvent;

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Behaviour {
    Idle,
    Moving,
}

impl Behaviour {
    pub fn as_string(&self) -> String {
        match self {
            Behaviour::Idle => String::from("idle"),
            Behaviour::Moving => String::from("moving"),
        }
    }
}

/// The main thread's picture of the car, rebuilt from engine events.
#[derive(Clone, Debug)]
pub struct ElevatorStatus {
    pub behaviour: Behaviour,
    pub floor: u8,
    pub direction: Direction,
    pub target: Option<u8>,
    pub pending: usize,
    pub last_event: Option<String>,
}

impl ElevatorStatus {
    pub fn new(state: ElevatorState) -> Self {
        ElevatorStatus {
            behaviour: Behaviour::Idle,
            floor: state.floor,
            direction: state.direction,
            target: None,
            pending: 0,
            last_event: None,
        }
    }

    pub fn start_batch(&mut self, batch: &[u8]) {
        self.pending = batch.len();
    }

    pub fn update(&mut self, event: &ElevatorEvent) {
        match *event {
            ElevatorEvent::Moving(target) => {
                self.behaviour = Behaviour::Moving;
                self.target = Some(target);
                self.pending = self.pending.saturating_sub(1);
            },
            ElevatorEvent::AtFloor(floor) => self.floor = floor,
            ElevatorEvent::Reached(floor) => {
                self.floor = floor;
                self.target = None;
            },
            ElevatorEvent::Reversed(direction) => self.direction = direction,
            ElevatorEvent::Idle => {
                self.behaviour = Behaviour::Idle;
                self.target = None;
                self.pending = 0;
            },
        }
        if let Some(line) = event.as_string() {
            self.last_event = Some(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_a_batch() {
        let mut status = ElevatorStatus::new(ElevatorState::new());
        status.start_batch(&[1, 9]);

        status.update(&ElevatorEvent::Moving(1));
        assert_eq!(status.behaviour, Behaviour::Moving);
        assert_eq!(status.target, Some(1));
        assert_eq!(status.pending, 1);

        status.update(&ElevatorEvent::AtFloor(1));
        status.update(&ElevatorEvent::Reached(1));
        assert_eq!(status.floor, 1);
        assert_eq!(status.target, None);
        assert_eq!(status.last_event.as_deref(), Some("Elevator reached floor 1"));

        status.update(&ElevatorEvent::Moving(9));
        status.update(&ElevatorEvent::Reversed(Direction::Down));
        status.update(&ElevatorEvent::Idle);
        assert_eq!(status.direction, Direction::Down);
        assert_eq!(status.behaviour, Behaviour::Idle);
        assert_eq!(status.pending, 0);
        assert_eq!(status.last_event.as_deref(), Some("Moving to floor 9..."));
    }
}
