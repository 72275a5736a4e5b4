use sqlx::PgPool;
use storage::{
    dto::flights::{
        FlightConfigurationResponse, FlightStateResponse, MoveAthleteRequest,
        UnassignAthleteRequest, UpdateFlightConfigurationRequest, ValidationIssueResponse,
    },
    error::Result,
    models::{Flight, MeetFlightState},
    repository::registration::RegistrationRepository,
    services::flight_organizer,
};
use uuid::Uuid;

/// Current flight state for a meet, with validation findings
pub async fn get_flight_state(pool: &PgPool, meet_id: Uuid) -> Result<FlightStateResponse> {
    let (state, issues) = flight_organizer::get_state(pool, meet_id).await?;
    Ok(FlightStateResponse::from_state(&state, issues))
}

/// Auto-generate flights from the meet's approved registrations
pub async fn generate_flights(pool: &PgPool, meet_id: Uuid) -> Result<FlightStateResponse> {
    let (state, issues) = flight_organizer::generate_and_store(pool, meet_id).await?;
    Ok(FlightStateResponse::from_state(&state, issues))
}

/// Validation findings for the meet's current flights
pub async fn validate_flights(pool: &PgPool, meet_id: Uuid) -> Result<Vec<ValidationIssueResponse>> {
    let issues = flight_organizer::validate_stored(pool, meet_id).await?;
    Ok(issues.into_iter().map(ValidationIssueResponse::from).collect())
}

/// Update the meet's flight configuration
pub async fn update_configuration(
    pool: &PgPool,
    meet_id: Uuid,
    request: &UpdateFlightConfigurationRequest,
) -> Result<FlightConfigurationResponse> {
    let state = flight_organizer::update_configuration(pool, meet_id, request).await?;
    Ok(state.config.into())
}

/// Move one athlete between flights
pub async fn move_athlete(
    pool: &PgPool,
    meet_id: Uuid,
    request: &MoveAthleteRequest,
) -> Result<FlightStateResponse> {
    let state = flight_organizer::move_athlete(
        pool,
        meet_id,
        request.registration_id,
        request.from_flight_id,
        request.to_flight_id,
    )
    .await?;

    state_response(pool, meet_id, state).await
}

/// Remove one athlete from its flight
pub async fn unassign_athlete(
    pool: &PgPool,
    meet_id: Uuid,
    request: &UnassignAthleteRequest,
) -> Result<FlightStateResponse> {
    let state = flight_organizer::unassign_athlete(pool, meet_id, request.registration_id).await?;

    state_response(pool, meet_id, state).await
}

/// Delete every flight and assignment for the meet
pub async fn clear_flights(pool: &PgPool, meet_id: Uuid) -> Result<()> {
    flight_organizer::clear_flights(pool, meet_id).await?;
    Ok(())
}

async fn state_response(
    pool: &PgPool,
    meet_id: Uuid,
    state: MeetFlightState,
) -> Result<FlightStateResponse> {
    let registrations = RegistrationRepository::new(pool).list_approved(meet_id).await?;
    let flights: Vec<Flight> = state.ordered_flights().into_iter().cloned().collect();
    let issues = flight_organizer::validate_flights(&flights, &registrations);

    Ok(FlightStateResponse::from_state(&state, issues))
}
