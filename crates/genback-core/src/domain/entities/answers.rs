use serde::{Deserialize, Serialize};

use crate::domain::blueprint::ConfigurationDefaults;

pub const SERVER_PORT_KEY: &str = "SERVER_PORT";
pub const MONGODB_URL_KEY: &str = "MONGODB_URL";
pub const DATABASE_NAME_KEY: &str = "DATABASE_NAME";

/// Values captured by the configuration prompts.
///
/// Written verbatim into the env file; never retained anywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationAnswers {
    pub port: String,
    pub database_name: String,
    pub mongodb_url: String,
}

impl ConfigurationAnswers {
    /// Build answers from raw responses, substituting the default for any
    /// empty or whitespace-only response.
    pub fn from_responses(
        defaults: &ConfigurationDefaults,
        port: &str,
        database_name: &str,
        mongodb_url: &str,
    ) -> Self {
        Self {
            port: or_default(port, &defaults.port),
            database_name: or_default(database_name, &defaults.database_name),
            mongodb_url: or_default(mongodb_url, &defaults.mongodb_url),
        }
    }

    /// The env file body: three `KEY=VALUE` lines.
    pub fn to_env_file(&self) -> String {
        format!(
            "{SERVER_PORT_KEY}={}\n{MONGODB_URL_KEY}={}\n{DATABASE_NAME_KEY}={}\n",
            self.port, self.mongodb_url, self.database_name
        )
    }
}

impl From<&ConfigurationDefaults> for ConfigurationAnswers {
    fn from(defaults: &ConfigurationDefaults) -> Self {
        Self {
            port: defaults.port.clone(),
            database_name: defaults.database_name.clone(),
            mongodb_url: defaults.mongodb_url.clone(),
        }
    }
}

fn or_default(response: &str, default: &str) -> String {
    if response.trim().is_empty() {
        default.to_owned()
    } else {
        response.to_owned()
    }
}
