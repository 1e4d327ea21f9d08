use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use reqwest::header::AUTHORIZATION;

/// Bearer token of the caller, `None` when the header is absent or blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BearerToken(pub Option<String>);

impl BearerToken {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for BearerToken {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.strip_prefix("Bearer ").unwrap_or(value).trim())
            .filter(|token| !token.is_empty())
            .map(str::to_owned);

        Ok(BearerToken(token))
    }
}
