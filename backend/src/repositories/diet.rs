//! Diet repository for database operations
//!
//! A diet owns an embedded, ordered sequence of meals stored as one
//! JSONB value. Meals have no identity outside their parent diet:
//! they are written once at diet creation and only ever read back as
//! the full sequence.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

/// A meal embedded in a diet document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub calories: f64,
}

/// Diet record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DietRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub meals: Json<Vec<Meal>>,
}

/// Input for creating a diet
#[derive(Debug, Clone)]
pub struct CreateDiet {
    pub user_id: Uuid,
    pub meals: Vec<Meal>,
}

/// Diet repository for database operations
pub struct DietRepository;

impl DietRepository {
    /// Create a new diet with its embedded meal sequence, verbatim
    pub async fn create(pool: &PgPool, input: CreateDiet) -> Result<DietRecord, sqlx::Error> {
        sqlx::query_as::<_, DietRecord>(
            r#"
            INSERT INTO diets (user_id, meals)
            VALUES ($1, $2)
            RETURNING id, user_id, meals
            "#,
        )
        .bind(input.user_id)
        .bind(Json(&input.meals))
        .fetch_one(pool)
        .await
    }

    /// Get diet by id
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<DietRecord>, sqlx::Error> {
        sqlx::query_as::<_, DietRecord>(
            r#"
            SELECT id, user_id, meals
            FROM diets
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
