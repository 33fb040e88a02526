use dioxus::prelude::*;
use shared_types::{AuthUser, UserRole};

/// Signed-in account, mirrored from the session cookie on first render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    /// Role of the signed-in user; visitors are `Public`.
    pub fn role(&self) -> UserRole {
        self.current_user
            .read()
            .as_ref()
            .map(|u| u.role)
            .unwrap_or(UserRole::Public)
    }

    pub fn display_name(&self) -> String {
        self.current_user
            .read()
            .as_ref()
            .map(|u| u.display_name.clone())
            .unwrap_or_default()
    }

    /// Whether `user_id` is the signed-in account.
    pub fn is_me(&self, user_id: i64) -> bool {
        self.current_user.read().as_ref().is_some_and(|u| u.id == user_id)
    }

    /// Dashboard pages belong to exactly one role; admins get their own
    /// screens rather than impersonating employers or job seekers.
    pub fn may_open(&self, required: Option<UserRole>) -> bool {
        required.map_or(true, |role| role == self.role())
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Role of the current user, re-read on every render.
pub fn use_user_role() -> UserRole {
    use_auth().role()
}
