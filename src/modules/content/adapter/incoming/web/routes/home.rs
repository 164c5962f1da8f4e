use actix_web::{get, web, Responder};
use chrono::{Datelike, Utc};

use crate::modules::content::adapter::incoming::web::views::HomePageView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Home page
///
/// Every section is loaded concurrently. A section whose query fails is
/// rendered with its placeholder content; the page itself never fails.
#[utoipa::path(
    get,
    path = "/",
    tag = "pages",
    responses(
        (
            status = 200,
            description = "Home page model",
            body = inline(crate::api::schemas::PageEnvelope<HomePageView>)
        ),
    )
)]
#[get("/")]
pub async fn get_home_page_handler(data: web::Data<AppState>) -> impl Responder {
    let sections = data.content.home.load_all().await;
    let year = Utc::now().year();

    ApiResponse::success(HomePageView::build(sections, &data.site, &data.assets, year))
}
