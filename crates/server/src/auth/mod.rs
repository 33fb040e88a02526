pub mod cookies;
pub mod extractors;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod session;

use shared_types::UserRole;

/// Check if the given email matches the `ADMIN_EMAIL` env var (case-insensitive).
/// Returns `false` if the env var is empty or unset.
pub fn is_admin_email(email: &str) -> bool {
    match std::env::var("ADMIN_EMAIL") {
        Ok(admin) if !admin.trim().is_empty() => admin.trim().eq_ignore_ascii_case(email.trim()),
        _ => false,
    }
}

/// Promote the account to admin when its email matches `ADMIN_EMAIL`.
/// Returns the effective role; database errors leave the role unchanged.
pub async fn maybe_promote_admin(
    db: &sqlx::PgPool,
    user_id: i64,
    email: &str,
    current_role: UserRole,
) -> UserRole {
    if current_role == UserRole::Admin || !is_admin_email(email) {
        return current_role;
    }

    match crate::repo::user::set_role(db, user_id, UserRole::Admin).await {
        Ok(()) => {
            tracing::info!(user_id, email, "Promoted user to admin via ADMIN_EMAIL");
            UserRole::Admin
        }
        Err(e) => {
            tracing::error!(user_id, email, error = %e, "Failed to promote admin");
            current_role
        }
    }
}
