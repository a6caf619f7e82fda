use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use ihub_domain::config::ApiConfig;
use ihub_kernel::server::state::ApiState;
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;
use utoipa_axum::router::OpenApiRouter;

fn fixture_app() -> (TempDir, Router) {
    let tmp = tempfile::tempdir().expect("tempdir");
    let icons = tmp.path().join("icons");
    let flags = tmp.path().join("flags");
    fs::create_dir_all(&icons).expect("icons dir");
    fs::create_dir_all(&flags).expect("flags dir");
    fs::write(
        icons.join("dot.svg"),
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4">
            <rect width="4" height="4" fill="#00ff00"/>
        </svg>"##,
    )
    .expect("fixture");

    let mut cfg = ApiConfig::default();
    cfg.storage.icons_dir = icons;
    cfg.storage.flags_dir = flags;

    let slice = ihub_export::init(&cfg).expect("export init");
    let state = ApiState::builder().config(cfg).register_slice(slice).build().expect("state");

    let (app, _doc) =
        OpenApiRouter::new().merge(ihub_export::router()).with_state(state).split_for_parts();
    (tmp, app)
}

async fn post_export(app: &Router, body: &Value) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/export-png")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(body).expect("encode")))
                .expect("request"),
        )
        .await
        .expect("response")
}

#[cfg(not(feature = "svg_raster"))]
#[tokio::test]
async fn export_reports_unavailable_without_the_rasterizer() {
    let (_tmp, app) = fixture_app();

    let response =
        post_export(&app, &json!({ "icon_name": "dot.svg", "type": "icon" })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let reply: Value = serde_json::from_slice(&bytes).expect("json");
    let error = reply["error"].as_str().expect("error envelope");
    assert!(error.starts_with("PNG export not available"), "{error}");
}

#[cfg(feature = "svg_raster")]
mod raster_enabled {
    use super::*;

    #[tokio::test]
    async fn export_streams_png_bytes() {
        let (_tmp, app) = fixture_app();

        let response =
            post_export(&app, &json!({ "icon_name": "dot.svg", "type": "icon" })).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("image/png")
        );
        assert_eq!(
            response.headers().get(header::CONTENT_DISPOSITION).and_then(|v| v.to_str().ok()),
            Some("attachment; filename=dot.png")
        );

        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }

    #[tokio::test]
    async fn export_error_envelopes() {
        let (_tmp, app) = fixture_app();

        let response =
            post_export(&app, &json!({ "icon_name": "ghost.svg", "type": "icon" })).await;
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let reply: Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(reply, json!({ "error": "File not found" }));

        let response =
            post_export(&app, &json!({ "icon_name": "dot.svg", "type": "poster" })).await;
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let reply: Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(reply, json!({ "error": "Invalid type" }));
    }
}
