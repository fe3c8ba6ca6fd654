//! ----- ENGINE MODULE -----
//! This module moves the elevator. It sleeps until the request channel
//! holds a batch, then takes one target at a time and travels there floor
//! by floor, reporting every step on the event channel. When the batch is
//! drained it reports `Idle` so intake can ask for the next one.

use std::sync::Arc;
use std::thread;

use crossbeam_channel::{SendError, Sender};
use log::{debug, info, trace};

use shared_resources::config::ElevatorConfig;
use shared_resources::request_channel::RequestChannel;

use crate::utilities::elevator_event::ElevatorEvent;

pub fn main(
    elevator_settings: ElevatorConfig,
    request_channel: Arc<RequestChannel>,
    elevator_event_tx: Sender<ElevatorEvent>,
) {
    info!("engine started at {:?}", request_channel.state());
    match serve(&elevator_settings, &request_channel, &elevator_event_tx) {
        Ok(()) => info!("request channel closed, engine stopping"),
        Err(_) => info!("nobody is listening for elevator events, engine stopping"),
    }
}

fn serve(
    elevator_settings: &ElevatorConfig,
    request_channel: &RequestChannel,
    elevator_event_tx: &Sender<ElevatorEvent>,
) -> Result<(), SendError<ElevatorEvent>> {
    // IDLE
    while request_channel.wait_for_batch() {
        // DRAINING
        while let Some(target) = request_channel.dequeue_one() {
            travel(elevator_settings, request_channel, elevator_event_tx, target)?;
        }
        debug!("batch drained at {:?}", request_channel.state());
        elevator_event_tx.send(ElevatorEvent::Idle)?;
    }
    Ok(())
}

fn travel(
    elevator_settings: &ElevatorConfig,
    request_channel: &RequestChannel,
    elevator_event_tx: &Sender<ElevatorEvent>,
    target: u8,
) -> Result<(), SendError<ElevatorEvent>> {
    elevator_event_tx.send(ElevatorEvent::Moving(target))?;

    let mut floor = request_channel.state().floor;
    while floor != target {
        // the lock is not held while the car is between floors
        thread::sleep(elevator_settings.step_duration);
        floor = request_channel.step_toward(target);
        trace!("passing floor {} on the way to {}", floor, target);
        elevator_event_tx.send(ElevatorEvent::AtFloor(floor))?;
    }
    elevator_event_tx.send(ElevatorEvent::Reached(target))?;

    if let Some(direction) = request_channel.arrive() {
        info!("reversing at floor {}, now going {}", floor, direction.as_string());
        elevator_event_tx.send(ElevatorEvent::Reversed(direction))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossbeam_channel::unbounded;
    use shared_resources::direction::Direction;
    use shared_resources::elevator_state::ElevatorState;

    use super::*;

    fn settings() -> ElevatorConfig {
        ElevatorConfig {
            num_floors: 9,
            step_duration: Duration::ZERO,
        }
    }

    fn spawn_engine(request_channel: &Arc<RequestChannel>) -> (thread::JoinHandle<()>, crossbeam_channel::Receiver<ElevatorEvent>) {
        let (elevator_event_tx, elevator_event_rx) = unbounded();
        let request_channel = Arc::clone(request_channel);
        let handle = thread::spawn(move || main(settings(), request_channel, elevator_event_tx));
        (handle, elevator_event_rx)
    }

    fn events_until_idle(elevator_event_rx: &crossbeam_channel::Receiver<ElevatorEvent>) -> Vec<ElevatorEvent> {
        let mut events = Vec::new();
        loop {
            let event = elevator_event_rx.recv_timeout(Duration::from_secs(5)).unwrap();
            events.push(event);
            if event == ElevatorEvent::Idle {
                return events
            }
        }
    }

    #[test]
    fn zero_length_leg_still_reports_arrival() {
        let request_channel = Arc::new(RequestChannel::new(9));
        request_channel.enqueue_batch(&[2, 2]);
        let (handle, elevator_event_rx) = spawn_engine(&request_channel);

        use ElevatorEvent::*;
        assert_eq!(
            events_until_idle(&elevator_event_rx),
            vec![Moving(2), AtFloor(1), AtFloor(2), Reached(2), Moving(2), Reached(2), Idle],
        );

        request_channel.close();
        handle.join().unwrap();
    }

    #[test]
    fn reverses_only_at_the_top() {
        let request_channel = Arc::new(RequestChannel::with_state(
            ElevatorState { floor: 7, direction: Direction::Up },
            9,
        ));
        request_channel.enqueue_batch(&[8, 9]);
        let (handle, elevator_event_rx) = spawn_engine(&request_channel);

        use ElevatorEvent::*;
        assert_eq!(
            events_until_idle(&elevator_event_rx),
            vec![Moving(8), AtFloor(8), Reached(8), Moving(9), AtFloor(9), Reached(9), Reversed(Direction::Down), Idle],
        );
        assert_eq!(request_channel.state().direction, Direction::Down);

        request_channel.close();
        handle.join().unwrap();
    }

    #[test]
    fn stops_when_events_are_no_longer_read() {
        let request_channel = Arc::new(RequestChannel::new(9));
        let (handle, elevator_event_rx) = spawn_engine(&request_channel);
        drop(elevator_event_rx);

        request_channel.enqueue_batch(&[3]);
        handle.join().unwrap();
        assert_eq!(request_channel.pending(), 0);
    }
}
