//! ----- REQUEST CHANNEL -----
//! The one place where intake and engine meet. Elevator state and the
//! pending floor queue sit behind a single lock; a condition variable
//! wakes the engine when the queue goes from empty to non-empty.

use std::collections::VecDeque;

use log::{debug, trace};
use parking_lot::{Condvar, Mutex};

use crate::direction::Direction;
use crate::elevator_state::ElevatorState;
use crate::request::{self, ErrorKind, IntakeError};

#[derive(Debug)]
struct Shared {
    elevator: ElevatorState,
    requests: VecDeque<u8>,
    closed: bool,
}

impl Shared {
    /// Appends in the given order. Returns true if the queue was empty before.
    fn push_batch(&mut self, floors: &[u8]) -> bool {
        let was_empty = self.requests.is_empty();
        self.requests.extend(floors.iter().copied());
        was_empty && !self.requests.is_empty()
    }
}

#[derive(Debug)]
pub struct RequestChannel {
    shared: Mutex<Shared>,
    batch_ready: Condvar,
    top_floor: u8,
}

impl RequestChannel {
    pub fn new(top_floor: u8) -> Self {
        RequestChannel::with_state(ElevatorState::new(), top_floor)
    }

    pub fn with_state(elevator: ElevatorState, top_floor: u8) -> Self {
        RequestChannel {
            shared: Mutex::new(Shared {
                elevator: elevator,
                requests: VecDeque::new(),
                closed: false,
            }),
            batch_ready: Condvar::new(),
            top_floor: top_floor,
        }
    }

    pub fn top_floor(&self) -> u8 {
        self.top_floor
    }

    /// Validates a parsed batch against the car's current floor, orders it by
    /// the current direction and queues it, all in one critical section.
    /// Nothing is queued if any floor is rejected.
    pub fn accept_batch(&self, mut floors: Vec<u8>) -> Result<Vec<u8>, IntakeError> {
        if floors.is_empty() {
            return Err(IntakeError::new(ErrorKind::Empty, ""))
        }

        let mut shared = self.shared.lock();
        for &floor in &floors {
            if request::check_range(i64::from(floor), self.top_floor).is_none() {
                return Err(IntakeError::new(ErrorKind::OutOfRange, floor.to_string()))
            }
            if floor == shared.elevator.floor {
                return Err(IntakeError::new(ErrorKind::CurrentFloor, floor.to_string()))
            }
        }

        shared.elevator.direction.sort_batch(&mut floors);
        if shared.push_batch(&floors) {
            self.batch_ready.notify_one();
        }
        debug!("queued batch {:?} going {}", floors, shared.elevator.direction.as_string());
        Ok(floors)
    }

    /// Appends `floors` as given and wakes the engine if the queue was empty.
    pub fn enqueue_batch(&self, floors: &[u8]) {
        let mut shared = self.shared.lock();
        if shared.push_batch(floors) {
            self.batch_ready.notify_one();
        }
    }

    pub fn dequeue_one(&self) -> Option<u8> {
        self.shared.lock().requests.pop_front()
    }

    /// Blocks until there is something to dequeue. Returns false once the
    /// channel is closed and the queue is empty.
    pub fn wait_for_batch(&self) -> bool {
        let mut shared = self.shared.lock();
        loop {
            if !shared.requests.is_empty() {
                return true
            }
            if shared.closed {
                return false
            }
            self.batch_ready.wait(&mut shared);
            if shared.requests.is_empty() && !shared.closed {
                trace!("woke up to an empty queue, waiting again");
            }
        }
    }

    pub fn pending(&self) -> usize {
        self.shared.lock().requests.len()
    }

    pub fn state(&self) -> ElevatorState {
        self.shared.lock().elevator
    }

    /// Moves the car one floor toward `target` and returns the new floor.
    pub fn step_toward(&self, target: u8) -> u8 {
        let mut shared = self.shared.lock();
        shared.elevator.floor = shared.elevator.next_floor_toward(target);
        shared.elevator.floor
    }

    /// Arrival handling. Returns the new direction if the car reversed.
    pub fn arrive(&self) -> Option<Direction> {
        let mut shared = self.shared.lock();
        if shared.elevator.reverse_at_boundary(self.top_floor) {
            Some(shared.elevator.direction)
        } else {
            None
        }
    }

    pub fn close(&self) {
        self.shared.lock().closed = true;
        self.batch_ready.notify_all();
    }
}
