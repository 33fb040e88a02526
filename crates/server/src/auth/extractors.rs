use axum::{extract::FromRequestParts, http::request::Parts};
use shared_types::{AppError, UserRole};

use super::jwt::Claims;

/// Requires a valid access token. 401 otherwise.
pub struct AuthRequired(pub Claims);

impl<S: Send + Sync> FromRequestParts<S> for AuthRequired {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthRequired)
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}

/// Optional auth claims. Never fails.
pub struct MaybeAuth(pub Option<Claims>);

impl<S: Send + Sync> FromRequestParts<S> for MaybeAuth {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuth(parts.extensions.get::<Claims>().cloned()))
    }
}

pub const EMPLOYEE: u8 = 1;
pub const EMPLOYER: u8 = 2;
pub const ADMIN: u8 = 3;

/// Role for a `RoleRequired` const parameter.
pub fn required_role(role: u8) -> UserRole {
    match role {
        EMPLOYEE => UserRole::Employee,
        EMPLOYER => UserRole::Employer,
        ADMIN => UserRole::Admin,
        _ => UserRole::Public,
    }
}

/// Check a caller's role against the one an operation needs.
pub fn check_role(claims: &Claims, required: UserRole) -> Result<(), AppError> {
    if claims.user_role().satisfies(&required) {
        Ok(())
    } else {
        Err(AppError::forbidden(format!(
            "{} role required",
            required.as_str()
        )))
    }
}

/// Requires authentication and a role: 401 without a token, 403 when the
/// role does not satisfy `ROLE` (see `EMPLOYEE`, `EMPLOYER`, `ADMIN`).
/// Admins satisfy every role.
pub struct RoleRequired<const ROLE: u8>(pub Claims);

pub type EmployeeOnly = RoleRequired<EMPLOYEE>;
pub type EmployerOnly = RoleRequired<EMPLOYER>;
pub type AdminOnly = RoleRequired<ADMIN>;

impl<const ROLE: u8, S: Send + Sync> FromRequestParts<S> for RoleRequired<ROLE> {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts
            .extensions
            .get::<Claims>()
            .cloned()
            .ok_or_else(|| AppError::unauthorized("Authentication required"))?;

        check_role(&claims, required_role(ROLE))?;
        Ok(RoleRequired(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use shared_types::AppErrorKind;

    fn claims(role: &str) -> Claims {
        Claims {
            sub: 7,
            email: "user@example.com".into(),
            role: role.into(),
            exp: 0,
            iat: 0,
            jti: None,
            typ: "access".into(),
        }
    }

    fn parts_with(claims: Option<Claims>) -> Parts {
        let (mut parts, _) = Request::new(()).into_parts();
        if let Some(c) = claims {
            parts.extensions.insert(c);
        }
        parts
    }

    #[tokio::test]
    async fn missing_claims_is_401() {
        let mut parts = parts_with(None);
        let err = EmployerOnly::from_request_parts(&mut parts, &())
            .await
            .err()
            .unwrap();
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
    }

    #[tokio::test]
    async fn wrong_role_is_403() {
        let mut parts = parts_with(Some(claims("employee")));
        let err = EmployerOnly::from_request_parts(&mut parts, &())
            .await
            .err()
            .unwrap();
        assert_eq!(err.kind, AppErrorKind::Forbidden);
    }

    #[tokio::test]
    async fn admin_passes_every_gate() {
        let mut parts = parts_with(Some(claims("admin")));
        assert!(EmployerOnly::from_request_parts(&mut parts, &()).await.is_ok());
        assert!(EmployeeOnly::from_request_parts(&mut parts, &()).await.is_ok());
        assert!(AdminOnly::from_request_parts(&mut parts, &()).await.is_ok());
    }

    #[tokio::test]
    async fn maybe_auth_never_fails() {
        let mut parts = parts_with(None);
        let MaybeAuth(claims) = MaybeAuth::from_request_parts(&mut parts, &()).await.unwrap();
        assert!(claims.is_none());
    }
}
