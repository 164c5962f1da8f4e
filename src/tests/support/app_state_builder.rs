use std::sync::Arc;

use actix_web::web;

use crate::config::SiteProfile;
use crate::content::application::content_use_cases::ContentUseCases;
use crate::content::application::ports::incoming::use_cases::{
    GetHomeSectionsUseCase, GetPastProjectsUseCase, GetProjectPageUseCase,
};
use crate::shared::assets::AssetResolver;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    home: Option<Arc<dyn GetHomeSectionsUseCase + Send + Sync>>,
    past_projects: Option<Arc<dyn GetPastProjectsUseCase + Send + Sync>>,
    project_page: Option<Arc<dyn GetProjectPageUseCase + Send + Sync>>,
    site: Option<SiteProfile>,
    assets: Option<AssetResolver>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            home: Some(Arc::new(StubHomeSections)),
            past_projects: Some(Arc::new(StubGetPastProjectsUseCase::success(vec![]))),
            project_page: Some(Arc::new(StubGetProjectPageUseCase::not_found())),
            site: Some(SiteProfile::default()),
            assets: Some(AssetResolver::default()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_home_sections(
        mut self,
        uc: impl GetHomeSectionsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.home = Some(Arc::new(uc));
        self
    }

    pub fn with_past_projects(
        mut self,
        uc: impl GetPastProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.past_projects = Some(Arc::new(uc));
        self
    }

    pub fn with_project_page(
        mut self,
        uc: impl GetProjectPageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project_page = Some(Arc::new(uc));
        self
    }

    pub fn with_site(mut self, site: SiteProfile) -> Self {
        self.site = Some(site);
        self
    }

    pub fn with_assets(mut self, assets: AssetResolver) -> Self {
        self.assets = Some(assets);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            content: ContentUseCases {
                home: self.home.unwrap(),
                past_projects: self.past_projects.unwrap(),
                project_page: self.project_page.unwrap(),
            },
            site: self.site.unwrap(),
            assets: self.assets.unwrap(),
        })
    }
}
