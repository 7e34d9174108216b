//! Ember Client - authenticated REST client for the dashboard API
//!
//! Thin wrapper over reqwest: generic verbs with bearer auth plus typed
//! endpoint methods for auth, profile, user directory and overview.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared wire types for convenience
pub use shared::client::{LoginRequest, LoginResponse, MeResponse, Session, SessionUser};
