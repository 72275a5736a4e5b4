use axum::{
    Router,
    routing::{get, post, put},
};
use storage::Database;

use super::handlers::{
    clear_flights, generate_flights, get_flight_state, move_athlete, unassign_athlete,
    update_configuration, validate_flights,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(get_flight_state).delete(clear_flights))
        .route("/generate", post(generate_flights))
        .route("/validation", get(validate_flights))
        .route("/config", put(update_configuration))
        .route("/move", post(move_athlete))
        .route("/unassign", post(unassign_athlete))
}
