use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{self, graph::GraphService, teams::TeamsResource};

#[async_trait]
pub(crate) trait TeamsUseCase {
    async fn get(&self, resource: &TeamsResource, access_token: Option<&str>) -> Result<Value>;
}

pub(crate) struct TeamsUseCaseImpl {
    graph_service: Arc<dyn GraphService + Sync + Send>,
}

impl TeamsUseCaseImpl {
    pub fn new(graph_service: Arc<dyn GraphService + Sync + Send>) -> Self {
        Self { graph_service }
    }
}

#[async_trait]
impl TeamsUseCase for TeamsUseCaseImpl {
    async fn get(&self, resource: &TeamsResource, access_token: Option<&str>) -> Result<Value> {
        let access_token = access_token
            .filter(|token| !token.is_empty())
            .ok_or(Error::MissingAccessToken { user: resource.requires_user_token() })?;

        let value = self.graph_service.get(&resource.graph_path(), access_token).await?;

        Ok(value)
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("access token is missing")]
    MissingAccessToken { user: bool },
    #[error(transparent)]
    Graph(#[from] domain::graph::Error),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;
