//! Centralized role predicates
//!
//! Every role check the screens perform goes through these functions so
//! the gating semantics stay identical everywhere. UI gating only, not a
//! security boundary.

use shared::models::{Role, UserAccount};
use shared::{AppError, AppResult};

/// User administration is an admin-only surface
pub fn can_manage_users(role: Role) -> bool {
    role == Role::Admin
}

/// Item editing is open to managers and admins
pub fn can_edit_items(role: Role) -> bool {
    matches!(role, Role::Admin | Role::Manager)
}

/// ADMIN accounts are exempt from enable/disable and removal.
///
/// Refused here, before any remote call is attempted.
pub fn ensure_account_mutable(target: &UserAccount) -> AppResult<()> {
    if target.role == Role::Admin {
        Err(AppError::forbidden(
            "Admin accounts cannot be disabled or removed",
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(role: Role) -> UserAccount {
        UserAccount {
            id: "u_1".into(),
            name: Some("Casey".into()),
            email: "casey@store.com".into(),
            role,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_manage_users_is_admin_only() {
        assert!(can_manage_users(Role::Admin));
        assert!(!can_manage_users(Role::Manager));
        assert!(!can_manage_users(Role::Staff));
    }

    #[test]
    fn test_admin_accounts_protected() {
        assert!(ensure_account_mutable(&user(Role::Staff)).is_ok());
        assert!(ensure_account_mutable(&user(Role::Manager)).is_ok());

        let err = ensure_account_mutable(&user(Role::Admin)).unwrap_err();
        assert!(matches!(err, AppError::PermissionDenied(_)));
    }
}
