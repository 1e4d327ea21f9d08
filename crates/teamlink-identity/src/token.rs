use serde::Deserialize;
use tracing::debug;

use crate::{
    config::IdentityConfig,
    error::{Error, Result},
    pkce::PkceVerifier,
    scope::Scopes,
};

/// Token endpoint answer. Nothing beyond the access token is interpreted.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticationResult {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub id_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OAuthErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

pub async fn exchange_code(
    client: &reqwest::Client,
    config: &IdentityConfig,
    code: &str,
    verifier: &PkceVerifier,
    scopes: &Scopes,
) -> Result<AuthenticationResult> {
    let token_endpoint = config.token_endpoint()?;
    let scope = scopes.to_string();
    let form = [
        ("grant_type", "authorization_code"),
        ("client_id", config.client_id()),
        ("code", code),
        ("redirect_uri", config.redirect_uri().as_str()),
        ("code_verifier", verifier.as_str()),
        ("scope", scope.as_str()),
    ];

    debug!(endpoint = %token_endpoint, "redeeming authorization code");
    let response = client.post(token_endpoint).form(&form).send().await?;

    if response.status().is_success() {
        return Ok(response.json::<AuthenticationResult>().await?);
    }

    let status = response.status();
    let body = response.text().await?;
    match serde_json::from_str::<OAuthErrorResponse>(&body) {
        Ok(error) => Err(Error::Rejected { error: error.error, description: error.error_description }),
        Err(_) => Err(Error::Rejected { error: format!("http_{}", status.as_u16()), description: Some(body) }),
    }
}

#[cfg(test)]
mod test {
    use url::Url;
    use wiremock::{
        matchers::{body_string_contains, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::exchange_code;
    use crate::{config::IdentityConfig, error::Error, pkce::PkceVerifier, scope::Scopes};

    const VERIFIER: &str = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";

    fn identity_config(server: &MockServer) -> IdentityConfig {
        IdentityConfig::new(
            "client-id",
            Url::parse(&format!("{}/tenant", server.uri())).unwrap(),
            Url::parse("http://localhost:3000").unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn when_code_is_redeemed_access_token_should_be_returned() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tenant/oauth2/v2.0/token"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("grant_type=authorization_code"))
            .and(body_string_contains("client_id=client-id"))
            .and(body_string_contains("code=the-code"))
            .and(body_string_contains(&format!("code_verifier={VERIFIER}")))
            .and(body_string_contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2F"))
            .and(body_string_contains("scope=Team.ReadBasic.All+openid"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token_type": "Bearer",
                "scope": "Team.ReadBasic.All",
                "expires_in": 3599,
                "access_token": "eyJ0eXAi",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = exchange_code(
            &reqwest::Client::new(),
            &identity_config(&server),
            "the-code",
            &PkceVerifier::new(VERIFIER).unwrap(),
            &Scopes::new(["Team.ReadBasic.All"]).with_oidc(),
        )
        .await
        .expect("exchange should succeed");

        assert_eq!(result.access_token, "eyJ0eXAi");
        assert_eq!(result.expires_in, Some(3599));
    }

    #[tokio::test]
    async fn when_token_endpoint_returns_oauth_error_it_should_be_a_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tenant/oauth2/v2.0/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "invalid_grant",
                "error_description": "AADSTS70008: code expired",
            })))
            .mount(&server)
            .await;

        let result = exchange_code(
            &reqwest::Client::new(),
            &identity_config(&server),
            "stale",
            &PkceVerifier::new(VERIFIER).unwrap(),
            &Scopes::new(["Team.ReadBasic.All"]),
        )
        .await;

        match result {
            Err(Error::Rejected { error, description }) => {
                assert_eq!(error, "invalid_grant");
                assert_eq!(description.as_deref(), Some("AADSTS70008: code expired"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn when_token_endpoint_fails_without_oauth_body_status_should_be_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let result = exchange_code(
            &reqwest::Client::new(),
            &identity_config(&server),
            "code",
            &PkceVerifier::new(VERIFIER).unwrap(),
            &Scopes::new(["Team.ReadBasic.All"]),
        )
        .await;

        assert!(matches!(result, Err(Error::Rejected { error, .. }) if error == "http_502"));
    }
}
