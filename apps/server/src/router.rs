use axum::Router;
use ihub::kernel::prelude::ApiState;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
struct ApiDoc;

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let api = ApiDoc::openapi();

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .merge(ihub::server::router::system_router())
        .merge(ihub::features::catalog::router())
        .merge(ihub::features::export::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone())
        .split_for_parts();

    // Create the Scalar UI routes
    let scalar_routes = Scalar::with_url("/api", api_doc);

    // Raw SVG mounts live outside the OpenAPI surface. The editing frontend
    // is hosted elsewhere, so CORS stays wide open.
    Router::new()
        .merge(openapi_routes)
        .merge(scalar_routes)
        .merge(ihub::features::catalog::static_router().with_state(state))
        .layer(CorsLayer::permissive())
}
