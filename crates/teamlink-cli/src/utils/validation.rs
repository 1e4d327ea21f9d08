use inquire::validator::Validation;
use teamlink_identity::IdentityConfig;
use url::Url;

use crate::config::has_profile;

type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

pub fn validate_url(url: &str) -> Result<Validation, Error> {
    if Url::parse(url).is_ok() {
        Ok(Validation::Valid)
    } else {
        Ok(Validation::Invalid("Invalid url".into()))
    }
}

pub fn validate_client_id(value: &str) -> Result<Validation, Error> {
    if value.trim().is_empty() {
        Ok(Validation::Invalid("Client id is empty".into()))
    } else if value.len() > 100 {
        Ok(Validation::Invalid("Client id is too long".into()))
    } else {
        Ok(Validation::Valid)
    }
}

/// Accepts only redirect uris the sign-in listener can bind.
pub fn validate_redirect_uri(value: &str) -> Result<Validation, Error> {
    let Ok(redirect_uri) = Url::parse(value) else {
        return Ok(Validation::Invalid("Invalid url".into()));
    };
    match IdentityConfig::check_redirect_uri(&redirect_uri) {
        Ok(_) => Ok(Validation::Valid),
        Err(e) => Ok(Validation::Invalid(e.to_string().into())),
    }
}

pub fn validate_new_profile(config: Option<String>) -> impl Fn(&str) -> Result<Validation, Error> + Clone {
    let config = config.map(Into::into);
    move |value: &str| {
        if value.trim().is_empty() {
            Ok(Validation::Invalid("Profile name is empty".into()))
        } else if has_profile(value, config.clone())? {
            Ok(Validation::Invalid("Profile already exists".into()))
        } else {
            Ok(Validation::Valid)
        }
    }
}
