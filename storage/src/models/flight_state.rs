use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{Result, StorageError};

use super::flight::Flight;
use super::flight_assignment::{FlightAssignment, ORIGIN_MANUAL};
use super::flight_configuration::FlightConfiguration;

/// The complete flight state of one meet: the organizer configuration, the
/// flights keyed by flight id, and the assignments keyed by registration id.
/// Persisted as a single per-meet document; a generation run replaces the
/// flights and assignments wholesale, manual operations mutate them in place.
///
/// All mutations are rejected with [`StorageError::Locked`] while
/// `config.locked` is set. Unlocking goes through a configuration update,
/// which is the one write the lock does not guard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct MeetFlightState {
    pub config: FlightConfiguration,
    pub flights: BTreeMap<Uuid, Flight>,
    pub assignments: BTreeMap<Uuid, FlightAssignment>,
}

impl MeetFlightState {
    /// Flights in display/processing order.
    pub fn ordered_flights(&self) -> Vec<&Flight> {
        let mut flights: Vec<&Flight> = self.flights.values().collect();
        flights.sort_by_key(|f| f.order);
        flights
    }

    /// Replace the flight set with the output of a generation run.
    pub fn replace_generated(
        &mut self,
        flights: Vec<Flight>,
        assignments: BTreeMap<Uuid, FlightAssignment>,
        now: NaiveDateTime,
    ) -> Result<()> {
        if self.config.locked {
            return Err(StorageError::Locked);
        }

        self.flights = flights.into_iter().map(|f| (f.flight_id, f)).collect();
        self.assignments = assignments;
        self.config.auto_generated = true;
        self.config.last_generated_at = Some(now);

        Ok(())
    }

    /// Move one athlete into `to_flight_id`. No-op when source and
    /// destination are the same flight. Tolerates the athlete already being
    /// absent from the source or present in the destination; a `None` source
    /// means the athlete was previously unassigned and removal is skipped.
    pub fn move_athlete(
        &mut self,
        registration_id: Uuid,
        from_flight_id: Option<Uuid>,
        to_flight_id: Uuid,
        now: NaiveDateTime,
    ) -> Result<()> {
        if self.config.locked {
            return Err(StorageError::Locked);
        }
        if from_flight_id == Some(to_flight_id) {
            return Ok(());
        }
        if !self.flights.contains_key(&to_flight_id) {
            return Err(StorageError::NotFound);
        }

        if let Some(from_id) = from_flight_id {
            if let Some(from) = self.flights.get_mut(&from_id) {
                from.member_ids.retain(|id| *id != registration_id);
                from.updated_at = now;
            }
        }

        let to = self
            .flights
            .get_mut(&to_flight_id)
            .ok_or(StorageError::NotFound)?;
        if !to.member_ids.contains(&registration_id) {
            to.member_ids.push(registration_id);
        }
        to.updated_at = now;

        self.assignments.insert(
            registration_id,
            FlightAssignment {
                registration_id,
                flight_id: to_flight_id,
                origin: ORIGIN_MANUAL.to_string(),
                assigned_at: now,
            },
        );

        Ok(())
    }

    /// Remove one athlete from every flight it appears in and delete its
    /// assignment. An athlete should be in at most one flight, but drift is
    /// tolerated and corrected. No error when the athlete was not assigned.
    pub fn unassign_athlete(&mut self, registration_id: Uuid, now: NaiveDateTime) -> Result<()> {
        if self.config.locked {
            return Err(StorageError::Locked);
        }

        for flight in self.flights.values_mut() {
            let before = flight.member_ids.len();
            flight.member_ids.retain(|id| *id != registration_id);
            if flight.member_ids.len() != before {
                flight.updated_at = now;
            }
        }
        self.assignments.remove(&registration_id);

        Ok(())
    }

    /// Delete every flight and assignment and reset the auto-generation and
    /// lock flags. Safe to call when no flights exist.
    pub fn clear(&mut self) -> Result<()> {
        if self.config.locked {
            return Err(StorageError::Locked);
        }

        self.flights.clear();
        self.assignments.clear();
        self.config.auto_generated = false;
        self.config.locked = false;

        Ok(())
    }
}
