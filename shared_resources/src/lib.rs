pub mod config;
pub mod direction;
pub mod elevator_state;
pub mod request;
pub mod request_channel;
