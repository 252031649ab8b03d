use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Outfit-catalog image metadata. Rows are created and mutated by admins
/// only; the public may list them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: Uuid,
    pub filename: String,
    pub url: String,
    pub category: Option<String>,
    pub item_name: Option<String>,
    #[serde(rename = "type")]
    pub image_type: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct ImageFields {
    pub filename: String,
    pub url: String,
    pub category: Option<String>,
    pub item_name: Option<String>,
    pub image_type: Option<String>,
}

pub async fn list(db: &PgPool) -> sqlx::Result<Vec<Image>> {
    sqlx::query_as::<_, Image>(
        r#"
        SELECT id, filename, url, category, item_name, image_type, created_at, updated_at
        FROM images
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn create(db: &PgPool, fields: ImageFields) -> sqlx::Result<Image> {
    sqlx::query_as::<_, Image>(
        r#"
        INSERT INTO images (filename, url, category, item_name, image_type)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, filename, url, category, item_name, image_type, created_at, updated_at
        "#,
    )
    .bind(fields.filename)
    .bind(fields.url)
    .bind(fields.category)
    .bind(fields.item_name)
    .bind(fields.image_type)
    .fetch_one(db)
    .await
}

pub async fn update(db: &PgPool, id: Uuid, fields: ImageFields) -> sqlx::Result<Option<Image>> {
    sqlx::query_as::<_, Image>(
        r#"
        UPDATE images
        SET filename = $2, url = $3, category = $4, item_name = $5, image_type = $6,
            updated_at = now()
        WHERE id = $1
        RETURNING id, filename, url, category, item_name, image_type, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(fields.filename)
    .bind(fields.url)
    .bind(fields.category)
    .bind(fields.item_name)
    .bind(fields.image_type)
    .fetch_optional(db)
    .await
}

/// Returns false when the id did not exist.
pub async fn delete(db: &PgPool, id: Uuid) -> sqlx::Result<bool> {
    let result = sqlx::query("DELETE FROM images WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}
