//! Typed endpoint methods
//!
//! The REST surface the screens consume: auth/session, profile, the user
//! directory and the dashboard overview.

use shared::client::{
    EntityPayload, ListPayload, LoginRequest, LoginResponse, MeResponse, PasswordChange,
    ProfileUpdate, Session, SessionUser,
};
use shared::models::{OverviewRange, OverviewResponse, UserAccount, UserCreate, UserUpdate};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    // ========== Auth API ==========

    /// Sign in and normalize to a `Session`.
    ///
    /// Two steps: `POST /auth/login` for tokens, then `GET /auth/me` with
    /// the fresh access token (no session exists yet, so the token rides
    /// as an override) to confirm the identity and role the server sees.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<Session> {
        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let login: LoginResponse = self.post("/auth/login", &request).await?;

        let me: MeResponse = self
            .get_with_token("/auth/me", &login.access_token)
            .await?;

        tracing::info!(user = %me.user.email, role = ?me.user.role, "signed in");
        Ok(Session {
            token: login.access_token,
            user: me.user,
        })
    }

    /// Get the current user's identity
    pub async fn me(&self) -> ClientResult<SessionUser> {
        let response: MeResponse = self.get("/auth/me").await?;
        Ok(response.user)
    }

    /// Update the current user's name/email
    pub async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<SessionUser> {
        let response: MeResponse = self.put("/auth/me", update).await?;
        Ok(response.user)
    }

    /// Change the current user's password (success/failure only)
    pub async fn change_password(&self, change: &PasswordChange) -> ClientResult<()> {
        let _: serde_json::Value = self.put("/auth/password", change).await?;
        Ok(())
    }

    // ========== User directory API ==========

    /// List all user accounts
    pub async fn list_users(&self) -> ClientResult<Vec<UserAccount>> {
        let payload: ListPayload<UserAccount> = self.get("/users").await?;
        Ok(payload.data)
    }

    /// Create a user; the server assigns the id and returns a one-time
    /// temp password
    pub async fn create_user(
        &self,
        create: &UserCreate,
    ) -> ClientResult<(UserAccount, Option<String>)> {
        let payload: EntityPayload<UserAccount> = self.post("/users", create).await?;
        Ok((payload.data, payload.temp_password))
    }

    /// Enable or disable a user account
    pub async fn set_user_active(&self, id: &str, active: bool) -> ClientResult<UserAccount> {
        let update = UserUpdate {
            active: Some(active),
        };
        let payload: EntityPayload<UserAccount> =
            self.put(&format!("/users/{}", id), &update).await?;
        Ok(payload.data)
    }

    /// Remove a user account
    pub async fn delete_user(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/users/{}", id)).await
    }

    // ========== Overview API ==========

    /// Fetch the dashboard overview for a reporting range
    pub async fn overview(&self, range: OverviewRange) -> ClientResult<OverviewResponse> {
        self.get(&format!("/overview?range={}", range.as_str()))
            .await
    }
}
