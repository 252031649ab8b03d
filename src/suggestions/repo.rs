use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// One row of the suggestion catalog. `status` is the moderation state:
/// only `active` rows are served to the public fetch path.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: Uuid,
    pub submitter_name: String,
    pub activity: String,
    pub reason: Option<String>,
    pub duration: Option<String>,
    pub energy_level: String,
    pub time_of_day: String,
    pub category: String,
    pub indoor: bool,
    pub condition: String,
    pub temp_group: String,
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Field set for an insert, after defaulting and validation. Status is not
/// part of this: public submissions always start inactive.
#[derive(Debug, Clone)]
pub struct NewSuggestion {
    pub submitter_name: String,
    pub activity: String,
    pub reason: Option<String>,
    pub duration: Option<String>,
    pub energy_level: String,
    pub time_of_day: String,
    pub category: String,
    pub indoor: bool,
    pub condition: String,
    pub temp_group: String,
}

pub async fn create(db: &PgPool, new: NewSuggestion) -> sqlx::Result<Suggestion> {
    sqlx::query_as::<_, Suggestion>(
        r#"
        INSERT INTO suggestions
            (submitter_name, activity, reason, duration, energy_level,
             time_of_day, category, indoor, condition, temp_group, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, 'inactive')
        RETURNING id, submitter_name, activity, reason, duration, energy_level,
                  time_of_day, category, indoor, condition, temp_group, status, created_at
        "#,
    )
    .bind(new.submitter_name)
    .bind(new.activity)
    .bind(new.reason)
    .bind(new.duration)
    .bind(new.energy_level)
    .bind(new.time_of_day)
    .bind(new.category)
    .bind(new.indoor)
    .bind(new.condition)
    .bind(new.temp_group)
    .fetch_one(db)
    .await
}

pub async fn list_all(db: &PgPool) -> sqlx::Result<Vec<Suggestion>> {
    sqlx::query_as::<_, Suggestion>(
        r#"
        SELECT id, submitter_name, activity, reason, duration, energy_level,
               time_of_day, category, indoor, condition, temp_group, status, created_at
        FROM suggestions
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn list_active(db: &PgPool) -> sqlx::Result<Vec<Suggestion>> {
    sqlx::query_as::<_, Suggestion>(
        r#"
        SELECT id, submitter_name, activity, reason, duration, energy_level,
               time_of_day, category, indoor, condition, temp_group, status, created_at
        FROM suggestions
        WHERE status = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind("active")
    .fetch_all(db)
    .await
}

/// Update the moderation status. `None` means the id does not exist. Any
/// status string is accepted here; the two valid values are a caller
/// contract, not a store constraint.
pub async fn set_status(db: &PgPool, id: Uuid, status: &str) -> sqlx::Result<Option<Suggestion>> {
    sqlx::query_as::<_, Suggestion>(
        r#"
        UPDATE suggestions
        SET status = $2
        WHERE id = $1
        RETURNING id, submitter_name, activity, reason, duration, energy_level,
                  time_of_day, category, indoor, condition, temp_group, status, created_at
        "#,
    )
    .bind(id)
    .bind(status)
    .fetch_optional(db)
    .await
}
