//! Database repositories
//!
//! The data access layer: one repository per record collection, each
//! exposing the applicable subset of the shared create / find-by-id /
//! find-by-owner / update-one-field / delete-by-id contract. Absence
//! is always `None` or an empty vec, never an error.

pub mod diet;
pub mod exercise;
pub mod user;
pub mod weight;

pub use diet::{CreateDiet, DietRecord, DietRepository, Meal};
pub use exercise::{CreateExerciseLog, ExerciseLogRecord, ExerciseRepository};
pub use user::{CreateUser, UserRecord, UserRepository};
pub use weight::{CreateWeightRecord, WeightRecord, WeightRepository};
