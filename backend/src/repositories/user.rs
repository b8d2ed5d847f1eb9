//! User repository for database operations
//!
//! Users are created at registration and only ever read back; this
//! system exposes no update or delete for them.

use sqlx::PgPool;
use uuid::Uuid;

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub gender: String,
}

/// Input for creating a user
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub age: i32,
    pub gender: String,
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user with a store-assigned id
    pub async fn create(pool: &PgPool, input: CreateUser) -> Result<UserRecord, sqlx::Error> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (name, age, gender)
            VALUES ($1, $2, $3)
            RETURNING id, name, age, gender
            "#,
        )
        .bind(&input.name)
        .bind(input.age)
        .bind(&input.gender)
        .fetch_one(pool)
        .await
    }

    /// Get user by id; absence is `None`, never an error
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<UserRecord>, sqlx::Error> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, name, age, gender
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
