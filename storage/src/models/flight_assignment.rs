use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const ORIGIN_AUTO: &str = "auto";
pub const ORIGIN_MANUAL: &str = "manual";

/// Maps one registration to the flight it currently belongs to. A
/// registration id maps to at most one flight at any time.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FlightAssignment {
    pub registration_id: Uuid,
    pub flight_id: Uuid,
    /// `auto` when produced by a generation run, `manual` when an operator
    /// moved the athlete afterwards.
    pub origin: String,
    pub assigned_at: chrono::NaiveDateTime,
}
