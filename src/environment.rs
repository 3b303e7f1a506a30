use crate::consts::cli_consts::DEFAULT_API_URL;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// The terminology API deployment the dashboard talks to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// The hosted NAMASTE ↔ ICD-11 service.
    #[default]
    Production,
    /// Any other deployment, e.g. a local development server.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the API base URL associated with the environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Production => DEFAULT_API_URL.to_string(),
            Environment::Custom { api_url } => api_url.clone(),
        }
    }

    /// Picks the environment for a user-supplied URL, falling back to production
    /// when the URL is the production one.
    pub fn from_url(url: &str) -> Self {
        let trimmed = url.trim().trim_end_matches('/');
        if trimmed.is_empty() || trimmed == DEFAULT_API_URL.trim_end_matches('/') {
            Environment::Production
        } else {
            Environment::Custom {
                api_url: trimmed.to_string(),
            }
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("production") {
            return Ok(Environment::Production);
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            return Ok(Environment::from_url(s));
        }
        Err(format!(
            "Invalid API URL: {}. It should start with http:// or https://",
            s
        ))
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "Production"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}
