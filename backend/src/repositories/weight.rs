//! Weight record repository for database operations

use sqlx::PgPool;
use uuid::Uuid;

/// Weight record from database
///
/// `user_id` is a soft reference: stored verbatim, no foreign-key
/// constraint, and the referenced user may not exist. `date` is a
/// caller-supplied string with no enforced format.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WeightRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: String,
    pub weight: f64,
}

/// Input for creating a weight record
#[derive(Debug, Clone)]
pub struct CreateWeightRecord {
    pub user_id: Uuid,
    pub date: String,
    pub weight: f64,
}

/// Weight record repository for database operations
pub struct WeightRepository;

impl WeightRepository {
    /// Create a new weight record with a store-assigned id
    pub async fn create(
        pool: &PgPool,
        input: CreateWeightRecord,
    ) -> Result<WeightRecord, sqlx::Error> {
        sqlx::query_as::<_, WeightRecord>(
            r#"
            INSERT INTO weight_records (user_id, date, weight)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, date, weight
            "#,
        )
        .bind(input.user_id)
        .bind(&input.date)
        .bind(input.weight)
        .fetch_one(pool)
        .await
    }

    /// Get weight record by id
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<WeightRecord>, sqlx::Error> {
        sqlx::query_as::<_, WeightRecord>(
            r#"
            SELECT id, user_id, date, weight
            FROM weight_records
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Get all weight records owned by a user; empty vec when none match
    pub async fn find_by_owner(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<WeightRecord>, sqlx::Error> {
        sqlx::query_as::<_, WeightRecord>(
            r#"
            SELECT id, user_id, date, weight
            FROM weight_records
            WHERE user_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Set the weight of a record, leaving every other field untouched
    ///
    /// Returns `None` if no record with that id exists. The update is a
    /// single statement, so there is no read-modify-write window.
    pub async fn update_weight(
        pool: &PgPool,
        id: Uuid,
        weight: f64,
    ) -> Result<Option<WeightRecord>, sqlx::Error> {
        sqlx::query_as::<_, WeightRecord>(
            r#"
            UPDATE weight_records
            SET weight = $2
            WHERE id = $1
            RETURNING id, user_id, date, weight
            "#,
        )
        .bind(id)
        .bind(weight)
        .fetch_optional(pool)
        .await
    }

    /// Remove a record and return it, or `None` if no such id exists
    ///
    /// A second delete of the same id is a clean `None`, never an error.
    pub async fn delete_by_id(
        pool: &PgPool,
        id: Uuid,
    ) -> Result<Option<WeightRecord>, sqlx::Error> {
        sqlx::query_as::<_, WeightRecord>(
            r#"
            DELETE FROM weight_records
            WHERE id = $1
            RETURNING id, user_id, date, weight
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
