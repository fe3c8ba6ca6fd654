use shared_resources::direction::Direction;

/// What the engine reports back while it works through a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevatorEvent {
    Moving(u8),
    AtFloor(u8),
    Reached(u8),
    Reversed(Direction),
    Idle,
}

impl ElevatorEvent {
    /// The operator facing line for this event, if it has one.
    pub fn as_string(&self) -> Option<String> {
        match self {
            ElevatorEvent::Moving(target) => Some(format!("Moving to floor {}...", target)),
            ElevatorEvent::AtFloor(floor) => Some(format!("Elevator at floor {}", floor)),
            ElevatorEvent::Reached(target) => Some(format!("Elevator reached floor {}", target)),
            ElevatorEvent::Reversed(_) | ElevatorEvent::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_travel_lines() {
        assert_eq!(ElevatorEvent::Moving(3).as_string().unwrap(), "Moving to floor 3...");
        assert_eq!(ElevatorEvent::AtFloor(2).as_string().unwrap(), "Elevator at floor 2");
        assert_eq!(ElevatorEvent::Reached(3).as_string().unwrap(), "Elevator reached floor 3");
    }

    #[test]
    fn silent_events() {
        assert_eq!(ElevatorEvent::Reversed(Direction::Down).as_string(), None);
        assert_eq!(ElevatorEvent::Idle.as_string(), None);
    }
}
