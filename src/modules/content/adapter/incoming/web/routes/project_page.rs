use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::ErrorCode;
use crate::modules::content::adapter::incoming::web::views::ProjectPageView;
use crate::modules::content::application::ports::incoming::use_cases::GetProjectPageError;
use crate::modules::content::domain::entities::RowId;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Project detail page
///
/// Needs both the project row and its details row. Either one missing, or
/// failing to load, renders the not-found page.
#[utoipa::path(
    get,
    path = "/projects/{id}",
    tag = "pages",
    params(
        ("id" = String, Path, description = "Project id")
    ),
    responses(
        (
            status = 200,
            description = "Project page model",
            body = inline(crate::api::schemas::PageEnvelope<ProjectPageView>)
        ),
        (
            status = 404,
            description = "Project or its details not found",
            body = crate::api::schemas::PageErrorEnvelope,
            example = json!({
                "success": false,
                "error": {
                    "code": "PROJECT_NOT_FOUND",
                    "message": "Project not found."
                }
            })
        ),
    )
)]
#[get("/projects/{id}")]
pub async fn get_project_page_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = RowId::from(path.into_inner());

    match data.content.project_page.execute(&id).await {
        Ok(page) => ApiResponse::success(ProjectPageView::build(page, &data.assets)),

        Err(GetProjectPageError::NotFound) => {
            project_not_found()
        }

        Err(GetProjectPageError::QueryFailed(msg)) => {
            error!("Failed to load project page id={}: {}", id, msg);
            project_not_found()
        }
    }
}

fn project_not_found() -> HttpResponse {
    let code = ErrorCode::ProjectNotFound;
    ApiResponse::not_found(code.as_str(), code.message())
}
