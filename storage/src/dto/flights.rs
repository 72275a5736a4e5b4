use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{
    Flight, FlightAssignment, FlightConfiguration, IssueKind, IssueSeverity, MeetFlightState,
    ValidationIssue,
};

/// Request payload for updating a meet's flight configuration. All fields
/// are optional; omitted fields keep their current value.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateFlightConfigurationRequest {
    #[validate(range(
        min = 1,
        max = 100,
        message = "athletes_per_flight must be between 1 and 100"
    ))]
    pub athletes_per_flight: Option<i32>,

    pub separate_by_gender: Option<bool>,

    pub locked: Option<bool>,
}

/// Request payload for moving one athlete between flights
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct MoveAthleteRequest {
    pub registration_id: Uuid,

    /// Omit when the athlete was previously unassigned.
    pub from_flight_id: Option<Uuid>,

    pub to_flight_id: Uuid,
}

/// Request payload for removing one athlete from its flight
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UnassignAthleteRequest {
    pub registration_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FlightConfigurationResponse {
    pub athletes_per_flight: i32,
    pub separate_by_gender: bool,
    pub locked: bool,
    pub auto_generated: bool,
    pub last_generated_at: Option<NaiveDateTime>,
}

impl From<FlightConfiguration> for FlightConfigurationResponse {
    fn from(config: FlightConfiguration) -> Self {
        Self {
            athletes_per_flight: config.athletes_per_flight,
            separate_by_gender: config.separate_by_gender,
            locked: config.locked,
            auto_generated: config.auto_generated,
            last_generated_at: config.last_generated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FlightResponse {
    pub flight_id: Uuid,
    pub name: String,
    pub gender: Option<String>,
    pub order: i32,
    pub athlete_count: usize,
    pub member_ids: Vec<Uuid>,
    pub updated_at: NaiveDateTime,
}

impl From<Flight> for FlightResponse {
    fn from(flight: Flight) -> Self {
        Self {
            flight_id: flight.flight_id,
            name: flight.name,
            gender: flight.gender,
            order: flight.order,
            athlete_count: flight.member_ids.len(),
            member_ids: flight.member_ids,
            updated_at: flight.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FlightAssignmentResponse {
    pub registration_id: Uuid,
    pub flight_id: Uuid,
    pub origin: String,
    pub assigned_at: NaiveDateTime,
}

impl From<FlightAssignment> for FlightAssignmentResponse {
    fn from(assignment: FlightAssignment) -> Self {
        Self {
            registration_id: assignment.registration_id,
            flight_id: assignment.flight_id,
            origin: assignment.origin,
            assigned_at: assignment.assigned_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidationIssueResponse {
    pub kind: IssueKind,
    pub severity: IssueSeverity,
    pub flight_id: Option<Uuid>,
    pub message: String,
}

impl From<ValidationIssue> for ValidationIssueResponse {
    fn from(issue: ValidationIssue) -> Self {
        Self {
            kind: issue.kind,
            severity: issue.severity,
            flight_id: issue.flight_id,
            message: issue.message,
        }
    }
}

/// The full flight picture of one meet: configuration, flights in display
/// order, the current assignments, and the validation findings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FlightStateResponse {
    pub configuration: FlightConfigurationResponse,
    pub flights: Vec<FlightResponse>,
    pub assignments: Vec<FlightAssignmentResponse>,
    pub issues: Vec<ValidationIssueResponse>,
}

impl FlightStateResponse {
    pub fn from_state(state: &MeetFlightState, issues: Vec<ValidationIssue>) -> Self {
        Self {
            configuration: state.config.clone().into(),
            flights: state
                .ordered_flights()
                .into_iter()
                .cloned()
                .map(FlightResponse::from)
                .collect(),
            assignments: state
                .assignments
                .values()
                .cloned()
                .map(FlightAssignmentResponse::from)
                .collect(),
            issues: issues.into_iter().map(ValidationIssueResponse::from).collect(),
        }
    }
}
