//! Interactive sign-in against the Microsoft identity platform for public
//! clients: authorization code flow with PKCE, redirect captured on a loopback
//! listener, code redeemed at the tenant's v2.0 token endpoint.

pub mod authorize;
pub mod callback;
pub mod client;
pub mod config;
pub mod error;
pub mod pkce;
pub mod scope;
pub mod token;

#[cfg(any(test, feature = "mock"))]
pub use client::MockInteractiveLogin;
pub use client::{InteractiveLogin, PublicClientApplication};
pub use config::IdentityConfig;
pub use error::{Error, Result};
pub use scope::{Scope, Scopes, TEAM_READ_BASIC_ALL};
pub use token::AuthenticationResult;
