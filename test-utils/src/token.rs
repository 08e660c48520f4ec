//! Bearer tokens for exercising authenticated endpoints.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;

/// Secret shared by test servers and the tokens minted here.
pub const TEST_SECRET: &str = "courseboard-test-secret";

/// Mints an HS256 token for `sub` with the given role that expires in one hour.
///
/// # Panics
/// Panics if encoding fails, which only happens with an unusable key.
pub fn mint(sub: &str, role: &str) -> String {
    mint_with_expiry(sub, role, Utc::now() + Duration::hours(1))
}

/// Mints a token that expired an hour ago.
pub fn mint_expired(sub: &str, role: &str) -> String {
    mint_with_expiry(sub, role, Utc::now() - Duration::hours(1))
}

/// Mints a token signed with a different secret.
pub fn mint_foreign(sub: &str, role: &str) -> String {
    let claims = json!({
        "sub": sub,
        "role": role,
        "exp": (Utc::now() + Duration::hours(1)).timestamp(),
    });

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"some-other-secret"),
    )
    .unwrap()
}

fn mint_with_expiry(sub: &str, role: &str, exp: chrono::DateTime<Utc>) -> String {
    let claims = json!({
        "sub": sub,
        "role": role,
        "exp": exp.timestamp(),
    });

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

/// Formats `token` as an `Authorization` header value.
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
