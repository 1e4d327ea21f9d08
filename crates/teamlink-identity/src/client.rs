use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use url::Url;

use crate::{
    authorize::AuthorizationRequest,
    callback::RedirectListener,
    config::IdentityConfig,
    error::{Error, Result},
    scope::Scopes,
    token::{exchange_code, AuthenticationResult},
};

type BrowserOpener = Arc<dyn Fn(&Url) -> std::io::Result<()> + Send + Sync>;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait InteractiveLogin: Send + Sync {
    /// Signs the user in through the browser and returns the issued tokens.
    async fn login_interactive(&self, scopes: &Scopes) -> Result<AuthenticationResult>;
}

/// Identity client for a public (secretless) application, using the
/// authorization code flow with PKCE and a loopback redirect.
pub struct PublicClientApplication {
    config: IdentityConfig,
    http: reqwest::Client,
    browser: BrowserOpener,
}

impl PublicClientApplication {
    pub fn new(config: IdentityConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            browser: Arc::new(|url: &Url| webbrowser::open(url.as_str())),
        }
    }

    pub fn with_browser<F>(mut self, browser: F) -> Self
    where
        F: Fn(&Url) -> std::io::Result<()> + Send + Sync + 'static,
    {
        self.browser = Arc::new(browser);
        self
    }

    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn config(&self) -> &IdentityConfig {
        &self.config
    }
}

#[async_trait]
impl InteractiveLogin for PublicClientApplication {
    async fn login_interactive(&self, scopes: &Scopes) -> Result<AuthenticationResult> {
        let request = AuthorizationRequest::new(&self.config, scopes)?;
        let listener = RedirectListener::bind(&self.config)?;

        info!(scopes = %request.scopes, "opening browser for interactive sign-in");
        (self.browser)(&request.url).map_err(Error::BrowserLaunch)?;

        let state = request.state.clone();
        let code = tokio::task::spawn_blocking(move || listener.wait(&state)).await??;

        exchange_code(&self.http, &self.config, &code, &request.verifier, &request.scopes).await
    }
}
