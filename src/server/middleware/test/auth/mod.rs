use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        token::{JwtKeys, Role},
    },
};
use test_utils::token;

mod require;

fn keys() -> JwtKeys {
    JwtKeys::from_secret(token::TEST_SECRET.as_bytes())
}

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}
