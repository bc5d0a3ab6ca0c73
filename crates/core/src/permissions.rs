//! Coffee-shop permission scopes and authorization errors.
//!
//! Staff tokens carry a `permissions` claim listing the scopes granted to
//! their role (baristas get `get:drinks-detail`; managers get every scope).
//! Authorization failures are a distinct error type that carries its own
//! HTTP status and description so they render uniformly.

use std::fmt;

/// A permission scope required by a drinks endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    GetDrinksDetail,
    PostDrinks,
    PatchDrinks,
    DeleteDrinks,
}

impl Permission {
    pub const ALL: [Permission; 4] = [
        Permission::GetDrinksDetail,
        Permission::PostDrinks,
        Permission::PatchDrinks,
        Permission::DeleteDrinks,
    ];

    /// The scope string as it appears in the token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::GetDrinksDetail => "get:drinks-detail",
            Permission::PostDrinks => "post:drinks",
            Permission::PatchDrinks => "patch:drinks",
            Permission::DeleteDrinks => "delete:drinks",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An authentication or authorization failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {description}")]
pub struct AuthError {
    /// HTTP status code to respond with.
    pub status: u16,
    /// Machine-readable reason, e.g. `token_expired`.
    pub code: &'static str,
    /// Human-readable description returned as the response message.
    pub description: String,
}

impl AuthError {
    fn new(status: u16, code: &'static str, description: impl Into<String>) -> Self {
        Self {
            status,
            code,
            description: description.into(),
        }
    }

    pub fn header_missing() -> Self {
        Self::new(
            401,
            "authorization_header_missing",
            "Authorization header is expected.",
        )
    }

    pub fn invalid_header(description: &str) -> Self {
        Self::new(401, "invalid_header", description)
    }

    pub fn token_expired() -> Self {
        Self::new(401, "token_expired", "Token expired.")
    }

    pub fn invalid_claims(description: &str) -> Self {
        Self::new(401, "invalid_claims", description)
    }

    pub fn permissions_missing() -> Self {
        Self::new(400, "invalid_claims", "Permissions not included in JWT.")
    }

    pub fn forbidden(permission: Permission) -> Self {
        Self::new(
            403,
            "unauthorized",
            format!("Permission {permission} not found."),
        )
    }
}

/// Extract the token from an `Authorization` header value.
///
/// The header must be exactly `Bearer <token>` (scheme case-insensitive).
pub fn bearer_token(header: &str) -> Result<&str, AuthError> {
    let mut parts = header.split_whitespace();
    let scheme = parts.next();
    let token = parts.next();
    let extra = parts.next();

    match (scheme, token, extra) {
        (Some(s), Some(t), None) if s.eq_ignore_ascii_case("bearer") => Ok(t),
        (Some(s), _, _) if !s.eq_ignore_ascii_case("bearer") => Err(AuthError::invalid_header(
            "Authorization header must start with \"Bearer\".",
        )),
        (_, None, _) => Err(AuthError::invalid_header("Token not found.")),
        _ => Err(AuthError::invalid_header(
            "Authorization header must be bearer token.",
        )),
    }
}

/// Check that `granted` (the token's `permissions` claim) includes `required`.
pub fn check_permission(
    granted: Option<&[String]>,
    required: Permission,
) -> Result<(), AuthError> {
    let granted = granted.ok_or_else(AuthError::permissions_missing)?;
    if granted.iter().any(|p| p == required.as_str()) {
        Ok(())
    } else {
        Err(AuthError::forbidden(required))
    }
}
