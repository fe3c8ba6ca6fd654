pub mod debug;
pub mod elevator_event;
pub mod elevator_status;
