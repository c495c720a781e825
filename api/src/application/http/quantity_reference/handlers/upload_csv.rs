use axum::extract::{Multipart, Query, State};
use chefco_core::domain::menu_import::{
    entities::{CourseHandling, ImportReport, ImportSheetInput, ImportTarget},
    ports::MenuImportService,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct UploadCsvQuery {
    /// Menu the sheet is imported into.
    pub menu_id: Uuid,
}

#[utoipa::path(
    post,
    path = "/upload-csv",
    tag = "quantity-reference",
    summary = "Import quantity references from a banquet sheet",
    params(UploadCsvQuery),
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, body = ImportReport),
        (status = 400, description = "No file uploaded or unreadable sheet"),
        (status = 403, description = "Staff access required"),
        (status = 404, description = "Menu not found")
    ),
)]
pub async fn upload_csv(
    Query(query): Query<UploadCsvQuery>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    mut multipart: Multipart,
) -> Result<Response<ImportReport>, ApiError> {
    let mut data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(e.to_string()))?;
            data = Some(bytes.to_vec());
        }
    }

    let data = data.ok_or_else(|| ApiError::BadRequest("No file uploaded".to_string()))?;

    let report = state
        .service
        .import_quantity_sheet(
            identity,
            ImportSheetInput {
                target: ImportTarget::MenuId(query.menu_id),
                data,
                course_handling: CourseHandling::RequireExisting,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(report))
}
