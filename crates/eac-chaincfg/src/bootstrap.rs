//! Registration of the built-in networks.
//!
//! [`default_registry`] bootstraps a process-wide registry on first use. The
//! free functions here forward to it for callers that do not carry a
//! registry of their own.

use crate::network::NetworkType;
use crate::params::Params;
use crate::registry::Registry;
use crate::Result;
use once_cell::sync::Lazy;

static DEFAULT_REGISTRY: Lazy<Registry> = Lazy::new(Registry::with_defaults);

/// Build and validate the built-in networks, in registration order.
pub fn builtin_params() -> Result<Vec<Params>> {
    NetworkType::ALL
        .into_iter()
        .map(|network| {
            let params = Params::from_network(network)?;
            params.validate()?;
            Ok(params)
        })
        .collect()
}

impl Registry {
    /// Registry holding the four built-in networks.
    ///
    /// Panics if a built-in is malformed; that can only come from a defect
    /// in the hard-coded parameters.
    pub fn with_defaults() -> Self {
        let params = match builtin_params() {
            Ok(params) => params,
            Err(e) => panic!("built-in network parameters are invalid: {}", e),
        };

        let mut registry = Registry::new();
        for p in params {
            registry.must_register(p);
        }

        tracing::info!("Registered {} built-in networks", registry.len());
        registry
    }
}

/// Build a fresh registry of the built-in networks.
pub fn bootstrap() -> Registry {
    Registry::with_defaults()
}

/// Process-wide registry of the built-in networks.
///
/// It is never modified after bootstrap. Build a [`Registry`] or
/// [`SharedRegistry`](crate::SharedRegistry) to register custom networks.
pub fn default_registry() -> &'static Registry {
    &DEFAULT_REGISTRY
}

/// [`Registry::is_pub_key_hash_addr_id`] on the default registry
pub fn is_pub_key_hash_addr_id(id: u8) -> bool {
    default_registry().is_pub_key_hash_addr_id(id)
}

/// [`Registry::is_script_hash_addr_id`] on the default registry
pub fn is_script_hash_addr_id(id: u8) -> bool {
    default_registry().is_script_hash_addr_id(id)
}

/// [`Registry::is_bech32_segwit_prefix`] on the default registry
pub fn is_bech32_segwit_prefix(prefix: &str) -> bool {
    default_registry().is_bech32_segwit_prefix(prefix)
}

/// [`Registry::hd_private_key_to_public_key_id`] on the default registry
pub fn hd_private_key_to_public_key_id(id: &[u8]) -> Result<[u8; 4]> {
    default_registry().hd_private_key_to_public_key_id(id)
}
