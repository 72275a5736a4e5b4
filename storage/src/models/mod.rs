pub mod flight;
pub mod flight_assignment;
pub mod flight_configuration;
pub mod flight_state;
pub mod registration;
pub mod validation;

pub use flight::Flight;
pub use flight_assignment::{FlightAssignment, ORIGIN_AUTO, ORIGIN_MANUAL};
pub use flight_configuration::{FlightConfiguration, DEFAULT_ATHLETES_PER_FLIGHT};
pub use flight_state::MeetFlightState;
pub use registration::{Registration, GENDER_FEMALE, GENDER_MALE, STATUS_APPROVED};
pub use validation::{IssueKind, IssueSeverity, ValidationIssue};
