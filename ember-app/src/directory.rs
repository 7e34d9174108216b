//! User directory filtering, sorting and actions
//!
//! Admin screen logic: filter conjunction over the account list, a
//! composite role-priority/recency sort, create validation, and the
//! role-gated enable/disable/remove actions.

use chrono::Utc;
use regex::Regex;
use shared::models::{Role, UserAccount, UserCreate};
use shared::{AppError, AppResult};
use std::sync::OnceLock;
use uuid::Uuid;

use crate::authz;
use crate::store::CollectionStore;

/// Minimal email shape: non-space run, @, non-space run, dot, non-space run
pub fn email_looks_valid(email: &str) -> bool {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE
        .get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email regex"))
        .is_match(email)
}

/// Filter state for the users screen
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    /// Case-insensitive substring match on name OR email
    pub search: String,
    /// `None` means "All"
    pub role: Option<Role>,
    pub only_active: bool,
}

/// Filter then sort: role priority ascending (admins first), then
/// creation time descending (newest first)
pub fn filter_and_sort(users: &[UserAccount], filter: &UserFilter) -> Vec<UserAccount> {
    let needle = filter.search.trim().to_lowercase();

    let mut rows: Vec<UserAccount> = users
        .iter()
        .filter(|user| !filter.only_active || user.is_active)
        .filter(|user| filter.role.is_none_or(|r| user.role == r))
        .filter(|user| {
            needle.is_empty()
                || user
                    .name
                    .as_deref()
                    .unwrap_or_default()
                    .to_lowercase()
                    .contains(&needle)
                || user.email.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    rows.sort_by(|a, b| {
        a.role
            .priority()
            .cmp(&b.role.priority())
            .then(b.created_at.cmp(&a.created_at))
    });
    rows
}

/// Raw form input for creating a user
#[derive(Debug, Clone)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl UserDraft {
    /// Validate against the current list; fires before any remote call
    pub fn validate(&self, existing: &[UserAccount]) -> AppResult<UserCreate> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Name is required"));
        }

        let email = self.email.trim().to_lowercase();
        if email.is_empty() {
            return Err(AppError::validation("Email is required"));
        }
        if !email_looks_valid(&email) {
            return Err(AppError::validation("Enter a valid email address"));
        }

        if existing.iter().any(|user| user.email.to_lowercase() == email) {
            return Err(AppError::conflict(format!(
                "A user with email \"{}\" already exists",
                email
            )));
        }

        Ok(UserCreate {
            name: name.to_string(),
            email,
            role: self.role,
        })
    }
}

// ========== Imperative actions (optimistic protocol) ==========

/// Create an account through the store after validation.
///
/// The appended row is provisional until the collaborator answers with
/// the authoritative account (server-assigned id; the one-time temp
/// password stays with the data source).
pub async fn create_user(
    store: &mut CollectionStore<UserAccount>,
    draft: &UserDraft,
) -> AppResult<UserAccount> {
    let create = draft.validate(store.items())?;
    let provisional = UserAccount {
        id: format!("u_{}", Uuid::new_v4()),
        name: Some(create.name.clone()),
        email: create.email.clone(),
        role: create.role,
        is_active: true,
        created_at: Utc::now(),
    };
    store.create(provisional).await
}

/// Enable or disable an account through the store.
///
/// ADMIN targets are refused before the optimistic apply, so neither the
/// local list nor the remote collaborator sees the attempt.
pub async fn set_active(
    store: &mut CollectionStore<UserAccount>,
    id: &str,
    active: bool,
) -> AppResult<UserAccount> {
    let target = store
        .items()
        .iter()
        .find(|user| user.id == id)
        .cloned()
        .ok_or_else(|| AppError::not_found("User"))?;
    authz::ensure_account_mutable(&target)?;

    let mut updated = target;
    updated.is_active = active;
    store.update(updated).await
}

/// Remove an account through the store; ADMIN targets are refused locally
pub async fn remove(store: &mut CollectionStore<UserAccount>, id: &str) -> AppResult<()> {
    let target = store
        .items()
        .iter()
        .find(|user| user.id == id)
        .cloned()
        .ok_or_else(|| AppError::not_found("User"))?;
    authz::ensure_account_mutable(&target)?;

    store.delete(id).await
}
