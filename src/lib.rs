pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::content;
pub use modules::gateway;
pub use modules::presentation;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use actix_web::web;

use crate::config::SiteProfile;
use crate::content::adapter::incoming::web::routes;
use crate::content::adapter::outgoing::GatewayContentQuery;
use crate::content::application::content_use_cases::ContentUseCases;
use crate::content::application::services::{
    HomeSectionsService, PastProjectsService, ProjectPageService,
};
use crate::gateway::application::ports::outgoing::RowGateway;
use crate::shared::assets::AssetResolver;

#[derive(Clone)]
pub struct AppState {
    pub content: ContentUseCases,
    pub site: SiteProfile,
    pub assets: AssetResolver,
}

impl AppState {
    /// Wires every content use case onto one shared gateway.
    pub fn from_gateway(
        gateway: Arc<dyn RowGateway>,
        site: SiteProfile,
        assets: AssetResolver,
    ) -> Self {
        let query = GatewayContentQuery::new(gateway);

        Self {
            content: ContentUseCases {
                home: Arc::new(HomeSectionsService::new(query.clone())),
                past_projects: Arc::new(PastProjectsService::new(query.clone())),
                project_page: Arc::new(ProjectPageService::new(query)),
            },
            site,
            assets,
        }
    }
}

#[cfg(not(tarpaulin_include))]
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Pages
    cfg.service(routes::home::get_home_page_handler);
    cfg.service(routes::past_projects::get_past_projects_page_handler);
    cfg.service(routes::project_page::get_project_page_handler);
    // Docs
    cfg.service(crate::api::openapi::openapi_json);
}
