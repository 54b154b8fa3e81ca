//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its OpenAPI specification, and
//! Swagger UI is served at `/api/docs` with the document at `/api/docs/openapi.json`.

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Adds the `bearer_auth` scheme referenced by the protected routes
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
                    .description(Some(
                        "Token returned by the candidate or company login routes",
                    ))
                    .build(),
            ),
        );
    }
}

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered in the same `routes!` call so the generated
/// document lists every method of the path.
///
/// # Returns
/// An Axum `Router<AppState>` that still needs its state, see
/// [`build_router`](crate::server::startup::build_router).
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        modifiers(&SecurityAddon),
        info(title = "Job Board", description = "Job board API"),
        tags(
            (name = controller::auth::AUTH_TAG, description = "Login and current identity"),
            (name = controller::candidate::CANDIDATE_TAG, description = "Candidate registration and profile"),
            (name = controller::company::COMPANY_TAG, description = "Company registration, profile and applicants"),
            (name = controller::listing::LISTING_TAG, description = "Job listings"),
            (name = controller::application::APPLICATION_TAG, description = "Applications to listings"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::candidate_login))
        .routes(routes!(controller::auth::company_login))
        .routes(routes!(controller::auth::candidate_me))
        .routes(routes!(controller::auth::company_me))
        .routes(routes!(controller::candidate::register_candidate))
        .routes(routes!(controller::candidate::update_candidate))
        .routes(routes!(controller::candidate::check_candidate_email))
        .routes(routes!(controller::candidate::check_candidate_address))
        .routes(routes!(controller::company::register_company))
        .routes(routes!(controller::company::update_company))
        .routes(routes!(controller::company::check_company_email))
        .routes(routes!(controller::company::check_company_cnpj))
        .routes(routes!(controller::company::check_company_address))
        .routes(routes!(controller::company::get_company_candidates))
        .routes(routes!(
            controller::listing::list_listings,
            controller::listing::create_listing
        ))
        .routes(routes!(
            controller::listing::get_listing,
            controller::listing::update_listing,
            controller::listing::delete_listing
        ))
        .routes(routes!(controller::listing::list_company_listings))
        .routes(routes!(
            controller::application::apply,
            controller::application::list_applications
        ))
        .routes(routes!(controller::application::update_application_status))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
