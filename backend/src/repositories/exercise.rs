//! Exercise log repository for database operations

use sqlx::PgPool;
use uuid::Uuid;

/// Exercise log from database
///
/// Same lifecycle shape as a weight record: `user_id` is a soft
/// reference and `date` is an unvalidated caller-supplied string.
/// Only `duration` is mutable after creation.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExerciseLogRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub exercise_type: String,
    pub duration: f64,
    pub date: String,
}

/// Input for creating an exercise log
#[derive(Debug, Clone)]
pub struct CreateExerciseLog {
    pub user_id: Uuid,
    pub exercise_type: String,
    pub duration: f64,
    pub date: String,
}

/// Exercise log repository for database operations
pub struct ExerciseRepository;

impl ExerciseRepository {
    /// Create a new exercise log with a store-assigned id
    pub async fn create(
        pool: &PgPool,
        input: CreateExerciseLog,
    ) -> Result<ExerciseLogRecord, sqlx::Error> {
        sqlx::query_as::<_, ExerciseLogRecord>(
            r#"
            INSERT INTO exercise_logs (user_id, exercise_type, duration, date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, exercise_type, duration, date
            "#,
        )
        .bind(input.user_id)
        .bind(&input.exercise_type)
        .bind(input.duration)
        .bind(&input.date)
        .fetch_one(pool)
        .await
    }

    /// Get exercise log by id
    pub async fn find_by_id(
        pool: &PgPool,
        id: Uuid,
    ) -> Result<Option<ExerciseLogRecord>, sqlx::Error> {
        sqlx::query_as::<_, ExerciseLogRecord>(
            r#"
            SELECT id, user_id, exercise_type, duration, date
            FROM exercise_logs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Get all exercise logs owned by a user; empty vec when none match
    pub async fn find_by_owner(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<ExerciseLogRecord>, sqlx::Error> {
        sqlx::query_as::<_, ExerciseLogRecord>(
            r#"
            SELECT id, user_id, exercise_type, duration, date
            FROM exercise_logs
            WHERE user_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Set the duration of a log, leaving every other field untouched
    pub async fn update_duration(
        pool: &PgPool,
        id: Uuid,
        duration: f64,
    ) -> Result<Option<ExerciseLogRecord>, sqlx::Error> {
        sqlx::query_as::<_, ExerciseLogRecord>(
            r#"
            UPDATE exercise_logs
            SET duration = $2
            WHERE id = $1
            RETURNING id, user_id, exercise_type, duration, date
            "#,
        )
        .bind(id)
        .bind(duration)
        .fetch_optional(pool)
        .await
    }

    /// Remove a log and return it, or `None` if no such id exists
    pub async fn delete_by_id(
        pool: &PgPool,
        id: Uuid,
    ) -> Result<Option<ExerciseLogRecord>, sqlx::Error> {
        sqlx::query_as::<_, ExerciseLogRecord>(
            r#"
            DELETE FROM exercise_logs
            WHERE id = $1
            RETURNING id, user_id, exercise_type, duration, date
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
