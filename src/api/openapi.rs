use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorCode, PageEnvelope, PageError, PageErrorEnvelope};
use crate::content::adapter::incoming::web::views::{
    AboutView, BehaviorView, ContactView, FooterView, HeroView, HomePageView, LinkView,
    PastProjectDetailView, PastProjectListItem, PastProjectNavItem, PastProjectsContent,
    PastProjectsPageView, PostView, ProjectCardView, ProjectPageView, SkillView,
};
use crate::health::{HealthResponse, ReadinessResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Site API",
        version = "1.0.0",
        description = "Page models for the portfolio home, past projects and project detail pages"
    ),
    paths(
        // Pages
        crate::content::adapter::incoming::web::routes::home::get_home_page_handler,
        crate::content::adapter::incoming::web::routes::past_projects::get_past_projects_page_handler,
        crate::content::adapter::incoming::web::routes::project_page::get_project_page_handler,

        // Health
        crate::health::health,
        crate::health::readiness,
    ),
    components(
        schemas(
            // Response wrappers
            PageEnvelope<HomePageView>,
            PageErrorEnvelope,
            PageError,
            ErrorCode,

            // Page models
            HomePageView,
            HeroView,
            AboutView,
            SkillView,
            ProjectCardView,
            PostView,
            ContactView,
            FooterView,
            BehaviorView,
            LinkView,
            PastProjectsPageView,
            PastProjectsContent,
            PastProjectNavItem,
            PastProjectListItem,
            PastProjectDetailView,
            ProjectPageView,

            HealthResponse,
            ReadinessResponse,
        )
    ),
    tags(
        (name = "pages", description = "Rendered page models"),
        (name = "health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn document_lists_every_page_route() {
        let doc = ApiDoc::openapi();

        for path in ["/", "/past-projects", "/projects/{id}", "/health", "/ready"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[actix_web::test]
    async fn document_describes_page_parameters() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();

        let project = &doc["paths"]["/projects/{id}"]["get"];
        assert_eq!(project["parameters"][0]["name"], "id");
        assert_eq!(project["parameters"][0]["in"], "path");

        let past = &doc["paths"]["/past-projects"]["get"];
        assert_eq!(past["parameters"][0]["in"], "query");
    }

    #[actix_web::test]
    async fn test_openapi_json_is_served() {
        let app = test::init_service(App::new().service(openapi_json)).await;

        let req = test::TestRequest::get()
            .uri("/api-docs/openapi.json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["info"]["title"], "Portfolio Site API");
        assert!(body["components"]["schemas"]["ProjectPageView"].is_object());
    }
}
