use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::Lang;

/// Account role controlling which dashboard and actions a user gets.
///
/// - `Public` — unauthenticated or unknown role.
/// - `Employee` — job seeker: applies, saves jobs, keeps a profile.
/// - `Employer` — posts jobs and works their applicants.
/// - `Admin` — moderates jobs, users and contact messages (superset of all roles).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Public,
    Employee,
    Employer,
    Admin,
}

impl UserRole {
    /// Parse from a JWT `role` claim or database column. Unknown values default to Public.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "employee" => UserRole::Employee,
            "employer" => UserRole::Employer,
            "admin" => UserRole::Admin,
            _ => UserRole::Public,
        }
    }

    /// Lowercase string for database / JWT storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Public => "public",
            UserRole::Employee => "employee",
            UserRole::Employer => "employer",
            UserRole::Admin => "admin",
        }
    }

    /// Returns true if this role satisfies the `required` role.
    /// Admin satisfies all roles; employers and employees only themselves and Public.
    pub fn satisfies(&self, required: &UserRole) -> bool {
        match self {
            UserRole::Admin => true,
            UserRole::Employer => matches!(required, UserRole::Employer | UserRole::Public),
            UserRole::Employee => matches!(required, UserRole::Employee | UserRole::Public),
            UserRole::Public => matches!(required, UserRole::Public),
        }
    }

    /// Roles a visitor may pick on the sign-up form.
    pub fn is_self_registrable(&self) -> bool {
        matches!(self, UserRole::Employee | UserRole::Employer)
    }

    pub fn label(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (UserRole::Public, Lang::En) => "Visitor",
            (UserRole::Public, Lang::Ar) => "زائر",
            (UserRole::Employee, Lang::En) => "Job seeker",
            (UserRole::Employee, Lang::Ar) => "باحث عن عمل",
            (UserRole::Employer, Lang::En) => "Employer",
            (UserRole::Employer, Lang::Ar) => "صاحب عمل",
            (UserRole::Admin, Lang::En) => "Administrator",
            (UserRole::Admin, Lang::Ar) => "مسؤول",
        }
    }
}

/// A user as listed in the admin user table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub email: String,
    pub display_name: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn role(&self) -> UserRole {
        UserRole::from_str_or_default(&self.role)
    }
}

/// Authenticated user info (safe to send to client).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
}

impl From<User> for AuthUser {
    fn from(u: User) -> Self {
        let role = u.role();
        Self {
            id: u.id,
            email: u.email,
            display_name: u.display_name,
            role,
        }
    }
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// Register request. `role` must be `employer` or `employee`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct RegisterRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub password: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 120, message = "Display name is required"))
    )]
    pub display_name: String,
    pub role: UserRole,
}

/// Tokens plus the session user, returned by register / login / refresh.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuthResponse {
    pub user: AuthUser,
    pub access_token: String,
    pub refresh_token: String,
}

/// Refresh token request (used by REST/OpenAPI).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Admin request activating or deactivating an account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateUserStatusRequest {
    pub is_active: bool,
}

/// Query parameters for the admin user listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
pub struct UserSearchParams {
    pub q: Option<String>,
    pub role: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_satisfies_every_role() {
        for role in [
            UserRole::Public,
            UserRole::Employee,
            UserRole::Employer,
            UserRole::Admin,
        ] {
            assert!(UserRole::Admin.satisfies(&role));
        }
    }

    #[test]
    fn employer_and_employee_are_disjoint() {
        assert!(!UserRole::Employer.satisfies(&UserRole::Employee));
        assert!(!UserRole::Employee.satisfies(&UserRole::Employer));
        assert!(UserRole::Employer.satisfies(&UserRole::Public));
        assert!(!UserRole::Public.satisfies(&UserRole::Employee));
    }

    #[test]
    fn unknown_role_parses_as_public() {
        assert_eq!(UserRole::from_str_or_default("EMPLOYER"), UserRole::Employer);
        assert_eq!(UserRole::from_str_or_default("superuser"), UserRole::Public);
    }

    #[test]
    fn only_employer_and_employee_self_register() {
        assert!(UserRole::Employee.is_self_registrable());
        assert!(UserRole::Employer.is_self_registrable());
        assert!(!UserRole::Admin.is_self_registrable());
        assert!(!UserRole::Public.is_self_registrable());
    }

    #[test]
    fn register_request_reads_lowercase_role() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"email":"a@b.co","password":"longenough","display_name":"A","role":"employer"}"#,
        )
        .unwrap();
        assert_eq!(req.role, UserRole::Employer);
    }

    #[test]
    fn auth_user_from_user_parses_role() {
        let user = User {
            id: 7,
            email: "hr@acme.test".into(),
            display_name: "Acme HR".into(),
            role: "employer".into(),
            is_active: true,
            created_at: Utc::now(),
        };
        let auth: AuthUser = user.into();
        assert_eq!(auth.role, UserRole::Employer);
        assert_eq!(auth.id, 7);
    }
}
