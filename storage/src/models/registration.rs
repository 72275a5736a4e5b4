use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

pub const GENDER_MALE: &str = "male";
pub const GENDER_FEMALE: &str = "female";

pub const STATUS_APPROVED: &str = "approved";

/// One athlete's entry into a meet. Read-only input to the flight organizer;
/// registration lifecycle (creation, approval, payment) is owned elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Registration {
    pub registration_id: Uuid,
    pub meet_id: Uuid,
    pub gender: String,
    pub weight_class: String,
    pub division: String,
    pub equipment: String,
    pub status: String,
    pub created_at: chrono::NaiveDateTime,
}
