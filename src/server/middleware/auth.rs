use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::token::{JwtKeys, Role},
    state::AppState,
};

pub enum Permission {
    /// Create, update and delete lectures and units. Granted to teachers and admins.
    ManageContent,
}

/// Caller identity taken from a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub role: Role,
}

pub struct AuthGuard<'a> {
    keys: &'a JwtKeys,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(keys: &'a JwtKeys, headers: &'a HeaderMap) -> Self {
        Self { keys, headers }
    }

    /// Verifies the bearer token and checks every permission in `permissions`.
    ///
    /// An empty slice only requires a valid token.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - Token valid and all permissions granted
    /// - `Err(AuthError::MissingToken)` - No bearer token in the `Authorization` header
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired or malformed claims
    /// - `Err(AuthError::AccessDenied)` - Role lacks one of the permissions
    pub fn require(&self, permissions: &[Permission]) -> Result<AuthUser, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self.keys.decode(token)?;

        for permission in permissions {
            match permission {
                Permission::ManageContent => {
                    if !matches!(claims.role, Role::Teacher | Role::Admin) {
                        return Err(AuthError::AccessDenied(
                            claims.sub,
                            "User attempted to manage course content without teacher or admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(AuthUser {
            id: claims.sub,
            role: claims.role,
        })
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Extracts any authenticated caller.
///
/// Runs from the request parts, before the body is read.
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        AuthGuard::new(&state.jwt, &parts.headers).require(&[])
    }
}

/// Extracts a caller holding `Permission::ManageContent`.
pub struct ContentManager(pub AuthUser);

impl FromRequestParts<AppState> for ContentManager {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        AuthGuard::new(&state.jwt, &parts.headers)
            .require(&[Permission::ManageContent])
            .map(ContentManager)
    }
}
