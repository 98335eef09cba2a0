//! Active network selection

use crate::network::NetworkType;
use crate::params::Params;
use crate::registry::Registry;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Chain configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Name of the active network
    pub network: String,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            network: NetworkType::Mainnet.name().to_string(),
        }
    }
}

impl ChainConfig {
    /// Select a network by name
    pub fn new(network: impl Into<String>) -> Self {
        Self {
            network: network.into(),
        }
    }

    /// Parse a JSON configuration document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!("Loaded chain config from {}: network={}", path.display(), config.network);
        Ok(config)
    }

    /// Built-in network the name refers to, accepting common aliases.
    pub fn network_type(&self) -> Result<NetworkType> {
        self.network.parse()
    }

    /// Find the parameters of the configured network in `registry`.
    ///
    /// Registered names are matched exactly first; built-in aliases such as
    /// `"testnet"` are tried after that.
    pub fn resolve<'a>(&self, registry: &'a Registry) -> Result<&'a Params> {
        if let Some(params) = registry.params_by_name(&self.network) {
            return Ok(params);
        }

        self.network_type()
            .ok()
            .and_then(|network| registry.params(network.net()))
            .ok_or_else(|| Error::UnknownNetwork(self.network.clone()))
    }
}
