use std::sync::Arc;

use crate::{
    config::ApplicationConfig,
    domain::graph::{GraphService, HttpGraphService},
};

use self::teams::{TeamsUseCase, TeamsUseCaseImpl};

pub(crate) mod teams;

pub(crate) struct Application {
    graph_service: Arc<dyn GraphService + Sync + Send>,
}

impl Application {
    pub fn new(graph_service: Arc<dyn GraphService + Sync + Send>) -> Self {
        Self { graph_service }
    }

    pub fn teams(&self) -> impl TeamsUseCase {
        TeamsUseCaseImpl::new(self.graph_service.clone())
    }
}

pub(super) fn init(config: &ApplicationConfig) -> anyhow::Result<Application> {
    let graph_service = Arc::new(HttpGraphService::new(config.graph_base_url.clone()));

    Ok(Application::new(graph_service))
}
