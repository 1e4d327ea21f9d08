use std::{collections::HashMap, io::Cursor, net::SocketAddr};

use tiny_http::{Header, Response, Server};
use tracing::{debug, warn};
use url::Url;

use crate::{
    config::IdentityConfig,
    error::{Error, Result},
};

const SIGNED_IN_PAGE: &str =
    "<!doctype html><html><body><h3>Signed in.</h3><p>You can close this window and return to the terminal.</p></body></html>";
const FAILED_PAGE: &str =
    "<!doctype html><html><body><h3>Sign-in failed.</h3><p>Return to the terminal for details.</p></body></html>";

/// Loopback HTTP listener that receives the authorization redirect.
pub struct RedirectListener {
    server: Server,
    path: String,
}

impl RedirectListener {
    pub fn bind(config: &IdentityConfig) -> Result<Self> {
        let address = config.redirect_address()?;
        let server = Server::http(address).map_err(|e| Error::Callback(format!("cannot listen on {address}: {e}")))?;
        debug!(%address, "listening for the authorization redirect");

        Ok(Self { server, path: config.redirect_uri().path().to_owned() })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.server.server_addr()
    }

    /// Blocks until a request hits the redirect path and returns the
    /// authorization code it carries.
    pub fn wait(self, expected_state: &str) -> Result<String> {
        let base = Url::parse("http://localhost")?;
        loop {
            let request = self.server.recv().map_err(|e| Error::Callback(e.to_string()))?;
            let url = base.join(request.url())?;

            if url.path() != self.path {
                debug!(path = url.path(), "ignoring request outside the redirect path");
                if let Err(e) = request.respond(Response::empty(404)) {
                    warn!(error = %e, "failed to answer the loopback request");
                }
                continue;
            }

            let outcome = parse_redirect(&url, expected_state);
            let page = if outcome.is_ok() { SIGNED_IN_PAGE } else { FAILED_PAGE };
            if let Err(e) = request.respond(html_response(page)) {
                warn!(error = %e, "failed to answer the authorization redirect");
            }
            return outcome;
        }
    }
}

pub(crate) fn parse_redirect(url: &Url, expected_state: &str) -> Result<String> {
    let mut params: HashMap<String, String> = url.query_pairs().into_owned().collect();

    if params.get("state").map(String::as_str) != Some(expected_state) {
        return Err(Error::StateMismatch);
    }
    if let Some(error) = params.remove("error") {
        return Err(Error::Rejected { error, description: params.remove("error_description") });
    }
    params.remove("code").ok_or_else(|| Error::Callback("redirect carried no authorization code".to_owned()))
}

fn html_response(body: &str) -> Response<Cursor<Vec<u8>>> {
    let response = Response::from_string(body);
    match Header::from_bytes(&b"Content-Type"[..], &b"text/html; charset=utf-8"[..]) {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}
