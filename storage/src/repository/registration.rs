use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Registration, STATUS_APPROVED};

/// Repository for registration reads. Registrations are input data here;
/// their lifecycle is owned by other parts of the system.
pub struct RegistrationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RegistrationRepository<'a> {
    /// Create a new RegistrationRepository
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Approved registrations for a meet, in a stable order so repeated
    /// generation runs see the same tie-breaking input.
    pub async fn list_approved(&self, meet_id: Uuid) -> Result<Vec<Registration>> {
        let registrations = sqlx::query_as::<_, Registration>(
            r#"
            SELECT registration_id, meet_id, gender, weight_class, division,
                   equipment, status, created_at
            FROM registrations
            WHERE meet_id = $1 AND status = $2
            ORDER BY created_at, registration_id
            "#,
        )
        .bind(meet_id)
        .bind(STATUS_APPROVED)
        .fetch_all(self.pool)
        .await?;

        Ok(registrations)
    }
}
