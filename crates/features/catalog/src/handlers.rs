use crate::error::CatalogError;
use crate::Catalog;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use ihub_domain::asset::AssetKind;
use ihub_domain::constants::CATALOG_TAG;
use ihub_kernel::server::reply::{ErrorReply, StatusReply};
use ihub_kernel::server::state::ApiState;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Names of the icons on disk, without the `.svg` extension.
#[derive(Debug, Serialize, ToSchema)]
struct IconListReply {
    icons: Vec<String>,
}

/// Names of the flag files on disk.
#[derive(Debug, Serialize, ToSchema)]
struct FlagListReply {
    flags: Vec<String>,
}

/// Leaf group ids of one SVG document.
#[derive(Debug, Serialize, ToSchema)]
struct GroupListReply {
    groups: Vec<String>,
}

/// Fill-color update request.
#[derive(Debug, Deserialize, ToSchema)]
struct UpdateColorRequest {
    /// File name, e.g. `heart.svg`.
    icon_name: String,
    /// A leaf group id, or `entire_flag` to recolor a whole flag.
    group_id: String,
    /// New fill color, applied verbatim (e.g. `#ff8800`).
    color: String,
    /// Asset kind: `icon` or `flag`.
    #[serde(rename = "type", default = "default_kind")]
    kind: String,
}

fn default_kind() -> String {
    AssetKind::Icon.to_string()
}

/// OpenAPI-documented catalog routes.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(list_icons))
        .routes(routes!(list_flags))
        .routes(routes!(list_groups))
        .routes(routes!(update_color))
}

/// Raw SVG mounts, kept outside the OpenAPI surface like any static mount.
pub fn static_router() -> Router<ApiState> {
    Router::new()
        .route("/static/{file}", get(serve_icon_file))
        .route("/flags/{file}", get(serve_flag_file))
}

fn catalog(state: &ApiState) -> Result<&Catalog, ErrorReply> {
    state.try_get_slice::<Catalog>().map_err(|err| ErrorReply::new(err.to_string()))
}

fn parse_kind(raw: &str) -> Result<AssetKind, ErrorReply> {
    raw.parse::<AssetKind>()
        .map_err(|_| ErrorReply::from(CatalogError::InvalidKind { given: raw.to_owned() }))
}

#[utoipa::path(
    get,
    path = "/icons",
    responses((status = OK, description = "Icon names, without extension", body = IconListReply)),
    tag = CATALOG_TAG,
)]
async fn list_icons(State(state): State<ApiState>) -> Result<Json<IconListReply>, ErrorReply> {
    let icons = catalog(&state)?.list(AssetKind::Icon).map_err(ErrorReply::from)?;
    Ok(Json(IconListReply { icons }))
}

#[utoipa::path(
    get,
    path = "/flags",
    responses((status = OK, description = "Flag file names", body = FlagListReply)),
    tag = CATALOG_TAG,
)]
async fn list_flags(State(state): State<ApiState>) -> Result<Json<FlagListReply>, ErrorReply> {
    let flags = catalog(&state)?.list(AssetKind::Flag).map_err(ErrorReply::from)?;
    Ok(Json(FlagListReply { flags }))
}

#[utoipa::path(
    get,
    path = "/groups/{type}/{name}",
    params(
        ("type" = String, Path, description = "Asset kind: icon or flag"),
        ("name" = String, Path, description = "SVG file name"),
    ),
    responses((status = OK, description = "Leaf group ids", body = GroupListReply)),
    tag = CATALOG_TAG,
)]
async fn list_groups(
    State(state): State<ApiState>,
    Path((kind, name)): Path<(String, String)>,
) -> Result<Json<GroupListReply>, ErrorReply> {
    let kind = parse_kind(&kind)?;
    let groups = catalog(&state)?.groups(kind, &name).await.map_err(ErrorReply::from)?;
    Ok(Json(GroupListReply { groups }))
}

#[utoipa::path(
    post,
    path = "/update_color",
    request_body = UpdateColorRequest,
    responses(
        (status = OK, description = "Color updated, or an error envelope", body = StatusReply),
    ),
    tag = CATALOG_TAG,
)]
async fn update_color(
    State(state): State<ApiState>,
    Json(req): Json<UpdateColorRequest>,
) -> Result<StatusReply, ErrorReply> {
    let kind = parse_kind(&req.kind)?;
    catalog(&state)?
        .update_color(kind, &req.icon_name, &req.group_id, &req.color)
        .await
        .map_err(ErrorReply::from)?;
    Ok(StatusReply::new("Color updated"))
}

async fn serve_icon_file(state: State<ApiState>, Path(file): Path<String>) -> Response {
    serve_asset(state, AssetKind::Icon, &file).await
}

async fn serve_flag_file(state: State<ApiState>, Path(file): Path<String>) -> Response {
    serve_asset(state, AssetKind::Flag, &file).await
}

async fn serve_asset(State(state): State<ApiState>, kind: AssetKind, file: &str) -> Response {
    let Ok(catalog) = state.try_get_slice::<Catalog>() else {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };

    match catalog.read_asset(kind, file).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "image/svg+xml")], bytes).into_response(),
        Err(CatalogError::NotFound { .. } | CatalogError::Guard { .. }) => {
            StatusCode::NOT_FOUND.into_response()
        }
        Err(err) => {
            tracing::error!(%err, kind = %kind, file, "Static asset read failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
