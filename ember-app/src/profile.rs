//! Profile editor core
//!
//! Draft validation, dirty tracking and the save/change-password flows
//! for the account modal. Bootstrap prefers the server's view of the
//! account and deliberately degrades to the cached session user when the
//! call fails, rather than blocking the whole screen.

use ember_client::HttpClient;
use shared::client::{PasswordChange, ProfileUpdate, SessionUser};
use shared::{AppError, AppResult};

use crate::directory::email_looks_valid;
use crate::session::SessionStore;

/// Minimum accepted password length
const MIN_PASSWORD_LEN: usize = 6;

/// Raw edit state for the name/email form
#[derive(Debug, Clone, Default)]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
}

impl ProfileDraft {
    pub fn from_user(user: &SessionUser) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }

    fn name_clean(&self) -> &str {
        self.name.trim()
    }

    fn email_clean(&self) -> String {
        self.email.trim().to_lowercase()
    }

    pub fn name_error(&self) -> Option<&'static str> {
        if self.name_clean().is_empty() {
            Some("Name is required")
        } else {
            None
        }
    }

    pub fn email_error(&self) -> Option<&'static str> {
        let email = self.email_clean();
        if email.is_empty() {
            Some("Email is required")
        } else if !email_looks_valid(&email) {
            Some("Enter a valid email address")
        } else {
            None
        }
    }

    /// Whether the draft differs from the stored identity
    pub fn is_dirty(&self, user: &SessionUser) -> bool {
        self.name_clean() != user.name || self.email_clean() != user.email
    }

    pub fn validate(&self) -> AppResult<ProfileUpdate> {
        if let Some(err) = self.name_error() {
            return Err(AppError::validation(err));
        }
        if let Some(err) = self.email_error() {
            return Err(AppError::validation(err));
        }
        Ok(ProfileUpdate {
            name: self.name_clean().to_string(),
            email: self.email_clean(),
        })
    }
}

/// Raw edit state for the password form
#[derive(Debug, Clone, Default)]
pub struct PasswordDraft {
    pub current: String,
    pub new_password: String,
    pub confirm: String,
}

impl PasswordDraft {
    pub fn validate(&self) -> AppResult<PasswordChange> {
        if self.current.is_empty() || self.new_password.is_empty() || self.confirm.is_empty() {
            return Err(AppError::validation("All password fields are required"));
        }
        if self.new_password.len() < MIN_PASSWORD_LEN {
            return Err(AppError::validation(
                "New password must be at least 6 characters",
            ));
        }
        if self.new_password != self.confirm {
            return Err(AppError::validation("New passwords do not match"));
        }
        Ok(PasswordChange {
            current_password: self.current.clone(),
            new_password: self.new_password.clone(),
        })
    }
}

/// Load the account for the profile screen.
///
/// The one deliberate error swallow in the app: a failed `/auth/me` falls
/// back to the last known good session user.
pub async fn bootstrap(client: &HttpClient, store: &mut SessionStore) -> Option<SessionUser> {
    match client.me().await {
        Ok(user) => {
            if let Err(err) = store.set_user(user.clone()) {
                tracing::warn!(error = %err, "could not cache refreshed profile");
            }
            Some(user)
        }
        Err(err) => {
            tracing::warn!(error = %err, "profile refresh failed, using cached session");
            store.user().cloned()
        }
    }
}

/// Validate and save the profile, then update the cached session identity
pub async fn save_profile(
    client: &HttpClient,
    store: &mut SessionStore,
    draft: &ProfileDraft,
) -> AppResult<SessionUser> {
    let update = draft.validate()?;
    let user = client.update_profile(&update).await?;
    store.set_user(user.clone())?;
    Ok(user)
}

/// Validate and submit a password change
pub async fn change_password(client: &HttpClient, draft: &PasswordDraft) -> AppResult<()> {
    let change = draft.validate()?;
    client.change_password(&change).await?;
    Ok(())
}

/// Avatar initials from a name or email (local part before the @)
pub fn initials(name_or_email: &str) -> String {
    let trimmed = name_or_email.trim();
    if trimmed.is_empty() {
        return "?".to_string();
    }

    let parts: Vec<&str> = if trimmed.contains('@') {
        trimmed.split('@').take(1).collect()
    } else {
        trimmed.split_whitespace().collect()
    };

    parts
        .iter()
        .filter(|p| !p.is_empty())
        .take(2)
        .filter_map(|p| p.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Role;

    fn user() -> SessionUser {
        SessionUser {
            id: "u_1".into(),
            email: "ops@store.com".into(),
            name: "Ops Lead".into(),
            role: Role::Manager,
        }
    }

    #[test]
    fn test_profile_draft_validation() {
        let draft = ProfileDraft {
            name: "  ".into(),
            email: "ops@store.com".into(),
        };
        assert_eq!(draft.name_error(), Some("Name is required"));

        let draft = ProfileDraft {
            name: "Ops".into(),
            email: "nope".into(),
        };
        assert_eq!(draft.email_error(), Some("Enter a valid email address"));
        assert!(draft.validate().is_err());

        let draft = ProfileDraft {
            name: " Ops Lead ".into(),
            email: " OPS@Store.com ".into(),
        };
        let update = draft.validate().unwrap();
        assert_eq!(update.name, "Ops Lead");
        assert_eq!(update.email, "ops@store.com");
    }

    #[test]
    fn test_dirty_tracking_uses_cleaned_values() {
        let user = user();
        let draft = ProfileDraft {
            name: " Ops Lead ".into(),
            email: " OPS@store.com ".into(),
        };
        assert!(!draft.is_dirty(&user));

        let draft = ProfileDraft {
            name: "New Name".into(),
            email: user.email.clone(),
        };
        assert!(draft.is_dirty(&user));
    }

    #[test]
    fn test_password_draft_rules() {
        let draft = PasswordDraft::default();
        assert!(draft.validate().is_err());

        let draft = PasswordDraft {
            current: "old-secret".into(),
            new_password: "short".into(),
            confirm: "short".into(),
        };
        assert_eq!(
            draft.validate().unwrap_err(),
            AppError::validation("New password must be at least 6 characters")
        );

        let draft = PasswordDraft {
            current: "old-secret".into(),
            new_password: "longenough".into(),
            confirm: "different".into(),
        };
        assert_eq!(
            draft.validate().unwrap_err(),
            AppError::validation("New passwords do not match")
        );

        let draft = PasswordDraft {
            current: "old-secret".into(),
            new_password: "longenough".into(),
            confirm: "longenough".into(),
        };
        let change = draft.validate().unwrap();
        assert_eq!(change.new_password, "longenough");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Ops Lead"), "OL");
        assert_eq!(initials("sam@store.com"), "S");
        assert_eq!(initials("Ada Maria Lovelace"), "AM");
        assert_eq!(initials("  "), "?");
    }
}
