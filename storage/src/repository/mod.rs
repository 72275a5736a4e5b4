pub mod flight_state;
pub mod registration;
