use std::{fmt, ops::Deref};

use serde::{Deserialize, Serialize};

/// Delegated permission to read the names and descriptions of teams.
pub const TEAM_READ_BASIC_ALL: &str = "Team.ReadBasic.All";

/// Scopes always requested on interactive sign-in.
pub const OIDC_SCOPES: [&str; 3] = ["openid", "profile", "offline_access"];

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Scope(String);

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Scopes(Vec<Scope>);

impl From<&str> for Scope {
    fn from(scope: &str) -> Self {
        Scope(scope.to_string())
    }
}

impl From<String> for Scope {
    fn from(scope: String) -> Self {
        Scope(scope)
    }
}

impl Deref for Scope {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl<S: Into<Scope>> FromIterator<S> for Scopes {
    fn from_iter<I: IntoIterator<Item = S>>(values: I) -> Self {
        let mut scopes = Scopes::default();
        values.into_iter().for_each(|scope| scopes.push(scope.into()));
        scopes
    }
}

impl Scopes {
    pub fn new<S: Into<Scope>, I: IntoIterator<Item = S>>(values: I) -> Self {
        values.into_iter().collect()
    }

    pub fn contains(&self, scope: &Scope) -> bool {
        self.0.contains(scope)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scope> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Requested scopes followed by the OpenID Connect ones, each once.
    pub fn with_oidc(&self) -> Scopes {
        let mut scopes = self.clone();
        OIDC_SCOPES.iter().for_each(|scope| scopes.push(Scope::from(*scope)));
        scopes
    }

    fn push(&mut self, scope: Scope) {
        if !scope.is_empty() && !self.contains(&scope) {
            self.0.push(scope);
        }
    }
}

impl fmt::Display for Scopes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self.0.iter().map(|scope| scope.0.as_str()).collect::<Vec<_>>().join(" ");
        f.write_str(&joined)
    }
}
