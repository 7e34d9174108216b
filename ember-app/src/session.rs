//! Session store
//!
//! The authenticated actor context, held in one explicitly injected object
//! with a defined lifecycle: initialize at startup (load the cached
//! session), update on sign-in/out, read-only everywhere else. Token and
//! user persist together as one JSON file.

use std::path::PathBuf;

use shared::client::{Session, SessionUser};
use shared::{AppError, AppResult};

/// Injected session holder
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    session: Option<Session>,
}

impl SessionStore {
    /// Load the cached session if one exists.
    ///
    /// An unreadable cache file starts the app signed out instead of
    /// blocking startup.
    pub fn initialize(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let session = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(session) => Some(session),
                Err(err) => {
                    tracing::warn!(error = %err, "session cache unreadable, starting signed out");
                    None
                }
            },
            Err(_) => None,
        };

        Self { path, session }
    }

    /// In-memory store for tests and the fixture variant
    pub fn in_memory() -> Self {
        Self {
            path: PathBuf::new(),
            session: None,
        }
    }

    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Store a fresh session (sign-in)
    pub fn sign_in(&mut self, session: Session) -> AppResult<()> {
        self.session = Some(session);
        self.save()
    }

    /// Clear the session (sign-out)
    pub fn sign_out(&mut self) -> AppResult<()> {
        self.session = None;
        if !self.path.as_os_str().is_empty() && self.path.exists() {
            std::fs::remove_file(&self.path)
                .map_err(|err| AppError::internal(err.to_string()))?;
        }
        Ok(())
    }

    /// Replace the stored identity, keeping the token (profile updates)
    pub fn set_user(&mut self, user: SessionUser) -> AppResult<()> {
        let Some(session) = self.session.as_mut() else {
            return Err(AppError::Unauthorized);
        };
        session.user = user;
        self.save()
    }

    fn save(&self) -> AppResult<()> {
        let Some(session) = &self.session else {
            return Ok(());
        };
        if self.path.as_os_str().is_empty() {
            return Ok(());
        }
        let content = serde_json::to_string_pretty(session)
            .map_err(|err| AppError::internal(err.to_string()))?;
        std::fs::write(&self.path, content).map_err(|err| AppError::internal(err.to_string()))
    }
}
