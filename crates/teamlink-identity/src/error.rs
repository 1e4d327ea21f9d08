use thiserror::Error;

use crate::pkce::PkceError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid identity configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Pkce(#[from] PkceError),

    #[error("failed to receive the authorization redirect: {0}")]
    Callback(String),

    #[error("the authorization redirect carried an unexpected state")]
    StateMismatch,

    #[error("the identity provider rejected the sign-in: {error}{}", description.as_deref().map(|d| format!(" ({d})")).unwrap_or_default())]
    Rejected { error: String, description: Option<String> },

    #[error("failed to open the system browser: {0}")]
    BrowserLaunch(#[source] std::io::Error),

    #[error("token request failed: {0}")]
    TokenExchange(#[from] reqwest::Error),

    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[error("sign-in task stopped unexpectedly: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, Error>;
