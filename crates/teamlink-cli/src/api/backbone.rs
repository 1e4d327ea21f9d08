use anyhow::Result;
use reqwest::IntoUrl;
use serde_json::Value;

/// Resolved against the backbone origin, any path on the configured host is replaced.
pub const USER_JOINED_TEAMS_PATH: &str = "/api/teams/user-joined";

/// Teams the signed-in user has joined, as returned by the backbone.
///
/// The status code is not inspected: whatever JSON the backbone answers with is
/// handed back to the caller.
pub async fn get_user_joined_teams(backbone_url: impl IntoUrl, token: &str) -> Result<Value> {
    let client = reqwest::Client::new();

    let url = backbone_url.into_url()?.join(USER_JOINED_TEAMS_PATH)?;
    let response = client.get(url).bearer_auth(token).send().await?.json::<Value>().await?;

    Ok(response)
}
