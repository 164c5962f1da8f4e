use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::modules::content::adapter::incoming::web::views::PastProjectsPageView;
use crate::modules::content::application::ports::incoming::use_cases::GetPastProjectsError;
use crate::modules::content::domain::entities::RowId;
use crate::modules::presentation::MasterDetail;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PastProjectsQuery {
    /// Id of the project to show in full. Omit for the list.
    pub active: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Past projects
///
/// List view by default; `?active=<id>` swaps to that project's detail.
/// An unknown id yields an empty `missing` view rather than an error.
#[utoipa::path(
    get,
    path = "/past-projects",
    tag = "pages",
    params(PastProjectsQuery),
    responses(
        (
            status = 200,
            description = "Past projects page model",
            body = inline(crate::api::schemas::PageEnvelope<PastProjectsPageView>)
        ),
    )
)]
#[get("/past-projects")]
pub async fn get_past_projects_page_handler(
    query: web::Query<PastProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let items = match data.content.past_projects.execute().await {
        Ok(items) => items,
        Err(GetPastProjectsError::QueryFailed(msg)) => {
            error!("Failed to load past projects: {}", msg);
            Vec::new()
        }
    };

    let active = query
        .into_inner()
        .active
        .filter(|id| !id.trim().is_empty())
        .map(RowId::from);

    let selector = MasterDetail::new(items).with_active(active);

    ApiResponse::success(PastProjectsPageView::build(&selector, &data.assets))
}
