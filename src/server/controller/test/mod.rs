use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory, fixture, token};
use tower::ServiceExt;

use crate::server::{middleware::token::JwtKeys, router::api_router, state::AppState};

mod unit;

/// Builds an in-memory database with the course tables and the API router on top of it.
async fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();

    let state = AppState::new(db, JwtKeys::from_secret(token::TEST_SECRET.as_bytes()));

    (test, api_router(state))
}

fn teacher() -> String {
    token::mint("teacher-1", "teacher")
}

fn admin() -> String {
    token::mint("admin-1", "admin")
}

fn student() -> String {
    token::mint("student-1", "student")
}

fn tutor() -> String {
    token::mint("tutor-1", "tutor")
}

/// Sends a request with an optional bearer token and raw body, returning status and JSON body.
async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    bearer: Option<String>,
    body: Option<String>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(bearer) = bearer {
        builder = builder.header(header::AUTHORIZATION, token::bearer(&bearer));
    }

    let body = match body {
        Some(body) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(body)
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    bearer: Option<String>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    send_raw(app, method, uri, bearer, body.map(|b| b.to_string())).await
}

async fn unit_count(db: &DatabaseConnection) -> u64 {
    entity::prelude::Unit::find().count(db).await.unwrap()
}

async fn membership_count(db: &DatabaseConnection) -> u64 {
    entity::prelude::LectureUnit::find().count(db).await.unwrap()
}
