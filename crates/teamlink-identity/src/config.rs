use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

use url::{Host, Url};

use crate::error::{Error, Result};

const AUTHORIZE_PATH: &str = "oauth2/v2.0/authorize";
const TOKEN_PATH: &str = "oauth2/v2.0/token";

/// Immutable settings of a public client registered with the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    client_id: String,
    authority: Url,
    redirect_uri: Url,
}

impl IdentityConfig {
    /// The redirect URI must be a plain `http` loopback address, it is where the
    /// sign-in listener binds.
    pub fn new(client_id: impl Into<String>, authority: Url, redirect_uri: Url) -> Result<Self> {
        let client_id = client_id.into();
        if client_id.trim().is_empty() {
            return Err(Error::InvalidConfig("client id is empty".to_owned()));
        }
        if !matches!(authority.scheme(), "http" | "https") {
            return Err(Error::InvalidConfig(format!("authority `{authority}` is not an http(s) url")));
        }
        Self::check_redirect_uri(&redirect_uri)?;

        Ok(Self { client_id, authority, redirect_uri })
    }

    pub fn check_redirect_uri(redirect_uri: &Url) -> Result<()> {
        if redirect_uri.scheme() != "http" {
            return Err(Error::InvalidConfig(format!("redirect uri `{redirect_uri}` must use plain http")));
        }
        loopback_ip(redirect_uri).map(|_| ())
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn authority(&self) -> &Url {
        &self.authority
    }

    pub fn redirect_uri(&self) -> &Url {
        &self.redirect_uri
    }

    pub fn authorize_endpoint(&self) -> Result<Url> {
        self.endpoint(AUTHORIZE_PATH)
    }

    pub fn token_endpoint(&self) -> Result<Url> {
        self.endpoint(TOKEN_PATH)
    }

    /// Socket address the loopback listener binds for the redirect.
    ///
    /// `localhost` binds IPv4 `127.0.0.1` only; a browser resolving `localhost` to
    /// `::1` first reaches the listener through its IPv4 fallback. Register
    /// `http://[::1]:<port>` to listen on IPv6 instead.
    pub fn redirect_address(&self) -> Result<SocketAddr> {
        let ip = loopback_ip(&self.redirect_uri)?;
        let port = self
            .redirect_uri
            .port_or_known_default()
            .ok_or_else(|| Error::InvalidConfig(format!("redirect uri `{}` has no port", self.redirect_uri)))?;
        Ok(SocketAddr::new(ip, port))
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let mut base = self.authority.clone();
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        base.set_query(None);
        Ok(base.join(path)?)
    }
}

fn loopback_ip(redirect_uri: &Url) -> Result<IpAddr> {
    match redirect_uri.host() {
        Some(Host::Domain(domain)) if domain.eq_ignore_ascii_case("localhost") => Ok(IpAddr::V4(Ipv4Addr::LOCALHOST)),
        Some(Host::Ipv4(ip)) if ip.is_loopback() => Ok(IpAddr::V4(ip)),
        Some(Host::Ipv6(ip)) if ip.is_loopback() => Ok(IpAddr::V6(Ipv6Addr::LOCALHOST)),
        _ => Err(Error::InvalidConfig(format!("redirect uri `{redirect_uri}` is not a loopback address"))),
    }
}

#[cfg(test)]
mod test {
    use std::net::SocketAddr;

    use url::Url;

    use super::IdentityConfig;
    use crate::error::Error;

    fn config(authority: &str, redirect_uri: &str) -> Result<IdentityConfig, Error> {
        IdentityConfig::new("client", Url::parse(authority).unwrap(), Url::parse(redirect_uri).unwrap())
    }

    #[test]
    fn when_authority_has_tenant_path_endpoints_should_be_nested_under_it() {
        let config = config("https://login.microsoftonline.com/contoso", "http://localhost:3000").unwrap();

        assert_eq!(
            config.authorize_endpoint().unwrap().as_str(),
            "https://login.microsoftonline.com/contoso/oauth2/v2.0/authorize"
        );
        assert_eq!(config.token_endpoint().unwrap().as_str(), "https://login.microsoftonline.com/contoso/oauth2/v2.0/token");
    }

    #[test]
    fn when_authority_has_trailing_slash_endpoints_should_not_double_it() {
        let config = config("https://login.microsoftonline.com/common/", "http://localhost:3000").unwrap();

        assert_eq!(config.token_endpoint().unwrap().as_str(), "https://login.microsoftonline.com/common/oauth2/v2.0/token");
    }

    #[test]
    fn when_redirect_is_localhost_listener_should_bind_ipv4_loopback() {
        let config = config("https://login.microsoftonline.com/common", "http://localhost:3000/auth").unwrap();

        assert_eq!(config.redirect_address().unwrap(), "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn when_redirect_is_ipv6_loopback_listener_should_bind_ipv6() {
        let config = config("https://login.microsoftonline.com/common", "http://[::1]:3000/").unwrap();

        assert_eq!(config.redirect_address().unwrap(), "[::1]:3000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn when_redirect_has_no_port_listener_should_use_http_default() {
        let config = config("https://login.microsoftonline.com/common", "http://127.0.0.1/").unwrap();

        assert_eq!(config.redirect_address().unwrap().port(), 80);
    }

    #[test]
    fn when_redirect_is_not_loopback_config_should_be_rejected() {
        let result = config("https://login.microsoftonline.com/common", "http://example.com:3000");

        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn when_redirect_uses_https_config_should_be_rejected() {
        let result = config("https://login.microsoftonline.com/common", "https://localhost:3000");

        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn when_client_id_is_blank_config_should_be_rejected() {
        let result = IdentityConfig::new(
            "  ",
            Url::parse("https://login.microsoftonline.com/common").unwrap(),
            Url::parse("http://localhost:3000").unwrap(),
        );

        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }
}
