use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::flights::{
        FlightConfigurationResponse, FlightStateResponse, MoveAthleteRequest,
        UnassignAthleteRequest, UpdateFlightConfigurationRequest, ValidationIssueResponse,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/meets/{meet_id}/flights",
    params(
        ("meet_id" = Uuid, Path, description = "Meet ID")
    ),
    responses(
        (status = 200, description = "Flight configuration, flights, assignments and validation findings for the meet", body = FlightStateResponse)
    ),
    tag = "flights"
)]
pub async fn get_flight_state(
    State(db): State<Database>,
    Path(meet_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let state = services::get_flight_state(db.pool(), meet_id).await?;

    Ok(Json(state).into_response())
}

#[utoipa::path(
    post,
    path = "/api/meets/{meet_id}/flights/generate",
    params(
        ("meet_id" = Uuid, Path, description = "Meet ID")
    ),
    responses(
        (status = 200, description = "Flights generated from the meet's approved registrations, replacing any prior flights; zero approved registrations yields zero flights", body = FlightStateResponse),
        (status = 409, description = "Flight configuration is locked, or another writer changed the flight state first")
    ),
    tag = "flights"
)]
pub async fn generate_flights(
    State(db): State<Database>,
    Path(meet_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let state = services::generate_flights(db.pool(), meet_id).await?;

    Ok(Json(state).into_response())
}

#[utoipa::path(
    get,
    path = "/api/meets/{meet_id}/flights/validation",
    params(
        ("meet_id" = Uuid, Path, description = "Meet ID")
    ),
    responses(
        (status = 200, description = "Validation findings for the meet's current flights", body = Vec<ValidationIssueResponse>)
    ),
    tag = "flights"
)]
pub async fn validate_flights(
    State(db): State<Database>,
    Path(meet_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let issues = services::validate_flights(db.pool(), meet_id).await?;

    Ok(Json(issues).into_response())
}

#[utoipa::path(
    put,
    path = "/api/meets/{meet_id}/flights/config",
    params(
        ("meet_id" = Uuid, Path, description = "Meet ID")
    ),
    request_body = UpdateFlightConfigurationRequest,
    responses(
        (status = 200, description = "Flight configuration updated", body = FlightConfigurationResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Another writer changed the flight state first")
    ),
    tag = "flights"
)]
pub async fn update_configuration(
    State(db): State<Database>,
    Path(meet_id): Path<Uuid>,
    Json(req): Json<UpdateFlightConfigurationRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let config = services::update_configuration(db.pool(), meet_id, &req).await?;

    Ok(Json(config).into_response())
}

#[utoipa::path(
    post,
    path = "/api/meets/{meet_id}/flights/move",
    params(
        ("meet_id" = Uuid, Path, description = "Meet ID")
    ),
    request_body = MoveAthleteRequest,
    responses(
        (status = 200, description = "Athlete moved; updated flight state returned", body = FlightStateResponse),
        (status = 404, description = "Meet has no flights, or the destination flight does not exist"),
        (status = 409, description = "Flight configuration is locked, or another writer changed the flight state first")
    ),
    tag = "flights"
)]
pub async fn move_athlete(
    State(db): State<Database>,
    Path(meet_id): Path<Uuid>,
    Json(req): Json<MoveAthleteRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let state = services::move_athlete(db.pool(), meet_id, &req).await?;

    Ok(Json(state).into_response())
}

#[utoipa::path(
    post,
    path = "/api/meets/{meet_id}/flights/unassign",
    params(
        ("meet_id" = Uuid, Path, description = "Meet ID")
    ),
    request_body = UnassignAthleteRequest,
    responses(
        (status = 200, description = "Athlete removed from its flight; updated flight state returned", body = FlightStateResponse),
        (status = 404, description = "Meet has no flights"),
        (status = 409, description = "Flight configuration is locked, or another writer changed the flight state first")
    ),
    tag = "flights"
)]
pub async fn unassign_athlete(
    State(db): State<Database>,
    Path(meet_id): Path<Uuid>,
    Json(req): Json<UnassignAthleteRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let state = services::unassign_athlete(db.pool(), meet_id, &req).await?;

    Ok(Json(state).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/meets/{meet_id}/flights",
    params(
        ("meet_id" = Uuid, Path, description = "Meet ID")
    ),
    responses(
        (status = 204, description = "All flights and assignments deleted, auto-generation and lock flags reset"),
        (status = 409, description = "Flight configuration is locked, or another writer changed the flight state first")
    ),
    tag = "flights"
)]
pub async fn clear_flights(
    State(db): State<Database>,
    Path(meet_id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::clear_flights(db.pool(), meet_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
