use axum::Router;
use axum::extract::MatchedPath;
use http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::bootstrap::app_context::AppContext;
use crate::presentation::openapi::ApiDoc;

pub mod auth;
pub mod extract;
pub mod health;
pub mod todos;
pub mod users;

/// The full HTTP surface: API routes, docs, CORS and request tracing.
pub fn router(ctx: AppContext) -> Router {
    let cors = cors_layer(&ctx);
    Router::new()
        .merge(health::routes(ctx.clone()))
        .merge(users::routes(ctx.clone()))
        .merge(todos::routes(ctx))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        )
}

fn cors_layer(ctx: &AppContext) -> CorsLayer {
    let auth_header = HeaderName::from_static(auth::AUTH_HEADER);
    let base = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE, auth_header.clone()])
        .expose_headers([auth_header]);

    match ctx.cfg.frontend_url.as_deref().map(HeaderValue::from_str) {
        Some(Ok(origin)) => base.allow_origin(origin),
        Some(Err(_)) | None if ctx.cfg.is_production => {
            // Production requires an explicit origin; deny cross-origin use otherwise
            base.allow_origin(AllowOrigin::exact(HeaderValue::from_static("http://invalid")))
        }
        _ => base.allow_origin(AllowOrigin::mirror_request()),
    }
}
