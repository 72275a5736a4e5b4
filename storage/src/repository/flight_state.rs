use std::collections::BTreeMap;

use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Flight, FlightAssignment, FlightConfiguration, MeetFlightState};

/// One persisted per-meet flight document plus the revision it was read at.
#[derive(Debug, Clone)]
pub struct StoredFlightState {
    pub state: MeetFlightState,
    pub revision: i64,
}

#[derive(sqlx::FromRow)]
struct MeetFlightRow {
    flight_configuration: Json<FlightConfiguration>,
    flights: Json<BTreeMap<Uuid, Flight>>,
    flight_assignments: Json<BTreeMap<Uuid, FlightAssignment>>,
    revision: i64,
}

/// Repository for the per-meet flight document. Writes are guarded by an
/// optimistic-concurrency revision: callers pass back the revision they
/// read, and a write loses with [`StorageError::RevisionConflict`] when
/// another writer got there first.
pub struct FlightStateRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> FlightStateRepository<'a> {
    /// Create a new FlightStateRepository
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Load the flight document for a meet, if one has been written.
    pub async fn find(&self, meet_id: Uuid) -> Result<Option<StoredFlightState>> {
        let row = sqlx::query_as::<_, MeetFlightRow>(
            r#"
            SELECT flight_configuration, flights, flight_assignments, revision
            FROM meet_flight_states
            WHERE meet_id = $1
            "#,
        )
        .bind(meet_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|row| StoredFlightState {
            state: MeetFlightState {
                config: row.flight_configuration.0,
                flights: row.flights.0,
                assignments: row.flight_assignments.0,
            },
            revision: row.revision,
        }))
    }

    /// Write back a document: an insert on the first write for a meet, a
    /// revision-checked update afterwards.
    pub async fn save(
        &self,
        meet_id: Uuid,
        state: &MeetFlightState,
        expected_revision: Option<i64>,
    ) -> Result<()> {
        match expected_revision {
            Some(revision) => self.update(meet_id, state, revision).await,
            None => self.insert(meet_id, state).await,
        }
    }

    async fn insert(&self, meet_id: Uuid, state: &MeetFlightState) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO meet_flight_states
                (meet_id, flight_configuration, flights, flight_assignments, revision)
            VALUES ($1, $2, $3, $4, 1)
            ON CONFLICT (meet_id) DO NOTHING
            "#,
        )
        .bind(meet_id)
        .bind(Json(&state.config))
        .bind(Json(&state.flights))
        .bind(Json(&state.assignments))
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::RevisionConflict);
        }

        Ok(())
    }

    async fn update(
        &self,
        meet_id: Uuid,
        state: &MeetFlightState,
        expected_revision: i64,
    ) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE meet_flight_states
            SET flight_configuration = $2,
                flights = $3,
                flight_assignments = $4,
                revision = revision + 1,
                updated_at = NOW()
            WHERE meet_id = $1 AND revision = $5
            "#,
        )
        .bind(meet_id)
        .bind(Json(&state.config))
        .bind(Json(&state.flights))
        .bind(Json(&state.assignments))
        .bind(expected_revision)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::RevisionConflict);
        }

        Ok(())
    }
}
