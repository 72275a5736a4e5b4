use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_ATHLETES_PER_FLIGHT: i32 = 15;

/// Per-meet flight organizer settings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FlightConfiguration {
    /// Target number of athletes per flight. Always >= 1.
    pub athletes_per_flight: i32,
    pub separate_by_gender: bool,
    /// When set, flight assignments are frozen and mutation operations are
    /// rejected until the configuration is unlocked.
    pub locked: bool,
    /// Whether the current flights came from an auto-generation run.
    pub auto_generated: bool,
    pub last_generated_at: Option<chrono::NaiveDateTime>,
}

impl Default for FlightConfiguration {
    fn default() -> Self {
        Self {
            athletes_per_flight: DEFAULT_ATHLETES_PER_FLIGHT,
            separate_by_gender: true,
            locked: false,
            auto_generated: false,
            last_generated_at: None,
        }
    }
}
