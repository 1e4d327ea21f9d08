use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::header::CONTENT_TYPE;
use serde_json::{json, Value};
use tracing::debug;
use url::Url;

#[derive(thiserror::Error, Debug)]
pub(crate) enum Error {
    #[error("failed to reach microsoft graph: {0}")]
    Request(#[from] reqwest::Error),

    #[error(transparent)]
    Url(#[from] url::ParseError),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;

/// Delegated read access to Microsoft Graph on behalf of the token's user.
#[cfg_attr(test, automock)]
#[async_trait]
pub(crate) trait GraphService {
    /// `path` is relative to the Graph version root, e.g. `/me/joinedTeams`.
    async fn get(&self, path: &str, token: &str) -> Result<Value>;
}

pub(crate) struct HttpGraphService {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpGraphService {
    pub fn new(base_url: Url) -> Self {
        Self { client: reqwest::Client::new(), base_url }
    }

    fn url(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{}", path.trim_start_matches('/')))?)
    }
}

#[async_trait]
impl GraphService for HttpGraphService {
    async fn get(&self, path: &str, token: &str) -> Result<Value> {
        let url = self.url(path)?;
        debug!(%url, "relaying request to microsoft graph");

        let response =
            self.client.get(url).bearer_auth(token).header(CONTENT_TYPE, "application/json").send().await?;
        let status = response.status();
        let raw = response.text().await?;

        Ok(parse_body(status.as_u16(), raw))
    }
}

/// Graph answers are passed through as JSON; anything else is wrapped so the
/// caller still receives a JSON document.
fn parse_body(status: u16, raw: String) -> Value {
    match serde_json::from_str::<Value>(&raw) {
        Ok(value) => value,
        Err(e) => json!({
            "error": "Failed to parse response",
            "details": e.to_string(),
            "raw": raw,
            "status": status,
        }),
    }
}
