//! Startup configuration.
//!
//! The default API base address is read from the environment once, at
//! startup, and then passed around explicitly. Nothing else in the crate
//! looks at environment variables.

use std::env;

use crate::error::ConfigError;
use crate::factory::ClientFactory;

/// Environment variable holding the default API base address.
pub const SERVER_URL_VAR: &str = "TODO_SERVER_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
}

impl Settings {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let server_url = env::var(SERVER_URL_VAR)
            .map_err(|_| ConfigError::MissingEnvVar(SERVER_URL_VAR.to_string()))?;
        Ok(Self { server_url })
    }

    pub fn factory(&self) -> ClientFactory {
        ClientFactory::new(self.server_url.clone())
    }
}
