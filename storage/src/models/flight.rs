use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A named, ordered group of athletes lifting together on competition day.
/// `member_ids` holds registration ids in lifting order; `order` is the
/// 0-based position of the flight within the meet, contiguous across one
/// generation run.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Flight {
    pub flight_id: Uuid,
    pub name: String,
    /// Gender restriction. `None` when generation ran without gender
    /// separation.
    pub gender: Option<String>,
    pub member_ids: Vec<Uuid>,
    pub order: i32,
    pub updated_at: chrono::NaiveDateTime,
}
