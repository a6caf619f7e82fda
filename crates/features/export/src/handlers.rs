use crate::{Export, error::ExportError, raster_available};
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ihub_domain::asset::AssetKind;
use ihub_domain::constants::EXPORT_TAG;
use ihub_kernel::server::reply::ErrorReply;
use ihub_kernel::server::state::ApiState;
use serde::Deserialize;
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// PNG export request.
#[derive(Debug, Deserialize, ToSchema)]
struct ExportPngRequest {
    /// File name, e.g. `heart.svg`.
    icon_name: String,
    /// Asset kind: `icon` or `flag`.
    #[serde(rename = "type", default = "default_kind")]
    kind: String,
}

fn default_kind() -> String {
    AssetKind::Icon.to_string()
}

pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(export_png))
}

#[utoipa::path(
    post,
    path = "/export-png",
    request_body = ExportPngRequest,
    responses(
        (status = OK, description = "PNG bytes as an attachment, or an error envelope"),
    ),
    tag = EXPORT_TAG,
)]
async fn export_png(
    State(state): State<ApiState>,
    Json(req): Json<ExportPngRequest>,
) -> Result<Response, ErrorReply> {
    // Capability first: a build without the rasterizer reports that before
    // validating the request.
    if !raster_available() {
        return Err(ErrorReply::from(ExportError::Unavailable));
    }

    let export = state.try_get_slice::<Export>().map_err(|err| ErrorReply::new(err.to_string()))?;
    let kind = req
        .kind
        .parse::<AssetKind>()
        .map_err(|_| ErrorReply::from(ExportError::InvalidKind { given: req.kind.clone() }))?;

    let png = export.export_png(kind, &req.icon_name).await.map_err(ErrorReply::from)?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/png".to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", png.file_name),
            ),
        ],
        png.bytes,
    )
        .into_response())
}
