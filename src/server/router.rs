//! Route table and OpenAPI documentation.
//!
//! Every endpoint is registered through `utoipa_axum::routes!` so the served OpenAPI document
//! always matches the routes. Access rules live on the handlers' extractors: `AuthUser` for
//! any authenticated caller and `ContentManager` for teachers and admins.

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{lecture, unit},
    state::AppState,
};

/// Adds the bearer token security scheme referenced by the handlers.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Courseboard API",
        description = "Lectures and their content units."
    ),
    tags(
        (name = "unit", description = "Course content units"),
        (name = "lecture", description = "Lectures owning ordered units")
    )
)]
pub struct ApiDoc;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(unit::create_unit))
        .routes(routes!(unit::get_unit, unit::update_unit, unit::delete_unit))
        .routes(routes!(lecture::create_lecture))
        .routes(routes!(lecture::get_lecture))
}

/// Builds the API router with Swagger UI at `/api/docs`.
pub fn api_router(state: AppState) -> Router {
    let (router, openapi) = router().split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", openapi))
        .with_state(state)
}
