//! Shared types for the Ember dashboard core
//!
//! Domain models, the unified error type, money/metric primitives and the
//! API DTOs used by both the REST client and the screen-facing engines.

pub mod client;
pub mod error;
pub mod models;
pub mod money;

// Re-exports
pub use error::{AppError, AppResult};
pub use serde::{Deserialize, Serialize};
