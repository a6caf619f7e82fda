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

const HEART: &str = r##"<svg xmlns="http://www.w3.org/2000/svg">
<style>.x { fill: #333333; }</style>
<g id="Layer_2">
<g id="heart"><path d="M0 0" fill="#ff0000"/><path d="M1 1" style="fill:#00ff00;stroke:none"/></g>
<g id="outline"><path d="M2 2" fill="#0000ff"/></g>
</g>
</svg>"##;

const BANNER: &str = r##"<svg xmlns="http://www.w3.org/2000/svg">
<rect width="3" height="2" fill="#0055a4"/>
<rect width="2" height="2" fill="#ffffff"/>
</svg>"##;

fn fixture_app() -> (TempDir, Router) {
    let tmp = tempfile::tempdir().expect("tempdir");
    let icons = tmp.path().join("icons");
    let flags = tmp.path().join("flags");

    let mut cfg = ApiConfig::default();
    cfg.storage.icons_dir = icons.clone();
    cfg.storage.flags_dir = flags.clone();

    let slice = ihub_catalog::init(&cfg).expect("catalog init");
    fs::write(icons.join("heart.svg"), HEART).expect("icon fixture");
    fs::write(flags.join("banner.svg"), BANNER).expect("flag fixture");

    let state = ApiState::builder().config(cfg).register_slice(slice).build().expect("state");

    let (api_routes, _doc) = OpenApiRouter::new()
        .merge(ihub_catalog::router())
        .with_state(state.clone())
        .split_for_parts();
    let app = api_routes.merge(ihub_catalog::static_router().with_state(state));

    (tmp, app)
}

async fn get_json(app: &Router, uri: &str) -> Value {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

async fn post_json(app: &Router, uri: &str, body: &Value) -> Value {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(body).expect("encode")))
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

fn icon_path(tmp: &TempDir) -> std::path::PathBuf {
    tmp.path().join("icons").join("heart.svg")
}

fn flag_path(tmp: &TempDir) -> std::path::PathBuf {
    tmp.path().join("flags").join("banner.svg")
}

#[tokio::test]
async fn listings_reflect_directory_contents() {
    let (_tmp, app) = fixture_app();

    let icons = get_json(&app, "/icons").await;
    assert_eq!(icons, json!({ "icons": ["heart"] }));

    let flags = get_json(&app, "/flags").await;
    assert_eq!(flags, json!({ "flags": ["banner.svg"] }));
}

#[tokio::test]
async fn groups_exposes_leaf_groups_only() {
    let (_tmp, app) = fixture_app();

    let groups = get_json(&app, "/groups/icon/heart.svg").await;
    assert_eq!(groups, json!({ "groups": ["heart", "outline"] }));
}

#[tokio::test]
async fn groups_reports_missing_files_and_bad_kinds() {
    let (_tmp, app) = fixture_app();

    let missing = get_json(&app, "/groups/icon/absent.svg").await;
    assert_eq!(missing, json!({ "error": "File not found" }));

    let invalid = get_json(&app, "/groups/sticker/heart.svg").await;
    assert_eq!(invalid, json!({ "error": "Invalid type" }));
}

#[tokio::test]
async fn update_color_rewrites_one_group_in_place() {
    let (tmp, app) = fixture_app();

    let reply = post_json(
        &app,
        "/update_color",
        &json!({
            "icon_name": "heart.svg",
            "group_id": "heart",
            "color": "#abcdef",
            "type": "icon",
        }),
    )
    .await;
    assert_eq!(reply, json!({ "status": "Color updated" }));

    let text = fs::read_to_string(icon_path(&tmp)).expect("reread");
    assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(text.contains(r##"fill="#abcdef""##));
    assert!(text.contains("fill:#abcdef;stroke:none"));
    // The sibling group keeps its color, and the style block is gone.
    assert!(text.contains(r##"fill="#0000ff""##));
    assert!(!text.contains("<style"));
}

#[tokio::test]
async fn entire_flag_recolors_the_whole_document() {
    let (tmp, app) = fixture_app();

    let reply = post_json(
        &app,
        "/update_color",
        &json!({
            "icon_name": "banner.svg",
            "group_id": "entire_flag",
            "color": "#112233",
            "type": "flag",
        }),
    )
    .await;
    assert_eq!(reply, json!({ "status": "Color updated" }));

    let text = fs::read_to_string(flag_path(&tmp)).expect("reread");
    assert!(!text.contains("#0055a4"));
    assert!(!text.contains("#ffffff"));
}

#[tokio::test]
async fn entire_flag_sentinel_is_rejected_for_icons() {
    let (tmp, app) = fixture_app();
    let before = fs::read_to_string(icon_path(&tmp)).expect("read");

    let reply = post_json(
        &app,
        "/update_color",
        &json!({
            "icon_name": "heart.svg",
            "group_id": "entire_flag",
            "color": "#112233",
            "type": "icon",
        }),
    )
    .await;
    assert_eq!(reply, json!({ "error": "Group not found" }));

    // Failed updates leave the file untouched.
    assert_eq!(fs::read_to_string(icon_path(&tmp)).expect("reread"), before);
}

#[tokio::test]
async fn update_color_defaults_to_the_icon_kind() {
    let (_tmp, app) = fixture_app();

    let reply = post_json(
        &app,
        "/update_color",
        &json!({ "icon_name": "heart.svg", "group_id": "heart", "color": "#010203" }),
    )
    .await;
    assert_eq!(reply, json!({ "status": "Color updated" }));
}

#[tokio::test]
async fn update_color_error_envelopes() {
    let (_tmp, app) = fixture_app();

    let missing = post_json(
        &app,
        "/update_color",
        &json!({ "icon_name": "ghost.svg", "group_id": "g", "color": "#000", "type": "icon" }),
    )
    .await;
    assert_eq!(missing, json!({ "error": "File not found" }));

    let bad_group = post_json(
        &app,
        "/update_color",
        &json!({ "icon_name": "heart.svg", "group_id": "nope", "color": "#000", "type": "icon" }),
    )
    .await;
    assert_eq!(bad_group, json!({ "error": "Group not found" }));

    let bad_kind = post_json(
        &app,
        "/update_color",
        &json!({ "icon_name": "heart.svg", "group_id": "heart", "color": "#000", "type": "poster" }),
    )
    .await;
    assert_eq!(bad_kind, json!({ "error": "Invalid type" }));
}

#[tokio::test]
async fn static_mounts_serve_raw_svg() {
    let (_tmp, app) = fixture_app();

    for uri in ["/static/heart.svg", "/flags/banner.svg"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("image/svg+xml")
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        assert!(bytes.starts_with(b"<svg"));
    }
}

#[tokio::test]
async fn static_mounts_hide_missing_and_unsafe_names() {
    let (_tmp, app) = fixture_app();

    for uri in ["/static/absent.svg", "/static/..%2Fflags%2Fbanner.svg"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn listing_tracks_directory_changes() {
    let (tmp, app) = fixture_app();

    fs::write(tmp.path().join("icons").join("star.svg"), "<svg/>").expect("new icon");
    let icons = get_json(&app, "/icons").await;
    assert_eq!(icons, json!({ "icons": ["heart", "star"] }));

    fs::remove_file(icon_path(&tmp)).expect("remove");
    let icons = get_json(&app, "/icons").await;
    assert_eq!(icons, json!({ "icons": ["star"] }));
}
