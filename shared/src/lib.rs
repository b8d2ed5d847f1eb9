//! Shared types for the FitTrack backend
//!
//! Wire-level request and response types used by the server and by
//! integration tests. All field names serialize as camelCase to match
//! the public API.

pub mod types;
