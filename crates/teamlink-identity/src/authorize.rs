use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::RngCore;
use url::Url;

use crate::{
    config::IdentityConfig,
    error::Result,
    pkce::{PkceVerifier, CHALLENGE_METHOD},
    scope::Scopes,
};

/// One interactive sign-in attempt: the browser url plus the secrets needed to
/// check and redeem its redirect.
#[derive(Debug)]
pub struct AuthorizationRequest {
    pub url: Url,
    pub state: String,
    pub verifier: PkceVerifier,
    pub scopes: Scopes,
}

impl AuthorizationRequest {
    pub fn new(config: &IdentityConfig, scopes: &Scopes) -> Result<Self> {
        Self::with_secrets(config, scopes, random_state(), PkceVerifier::generate())
    }

    pub(crate) fn with_secrets(
        config: &IdentityConfig,
        scopes: &Scopes,
        state: String,
        verifier: PkceVerifier,
    ) -> Result<Self> {
        let scopes = scopes.with_oidc();
        let mut url = config.authorize_endpoint()?;
        url.query_pairs_mut()
            .append_pair("client_id", config.client_id())
            .append_pair("response_type", "code")
            .append_pair("redirect_uri", config.redirect_uri().as_str())
            .append_pair("response_mode", "query")
            .append_pair("scope", &scopes.to_string())
            .append_pair("state", &state)
            .append_pair("code_challenge", verifier.challenge().as_str())
            .append_pair("code_challenge_method", CHALLENGE_METHOD)
            .append_pair("prompt", "select_account");

        Ok(Self { url, state, verifier, scopes })
    }
}

fn random_state() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
