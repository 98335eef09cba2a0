//! Registry of network parameters and cross-network lookup indices.
//!
//! A [`Registry`] has two phases. While it is being built, [`Registry::register`]
//! takes `&mut self`, so no lookup can run concurrently with a registration.
//! Once built it is only read: every lookup takes `&self` and the registry can
//! be shared across threads without locking.
//!
//! Processes that must register custom networks after readers have started
//! use [`SharedRegistry`], which serialises writers against readers.
//!
//! The address ID indices are unions over every registered network. When
//! two networks share an ID a lookup cannot tell them apart, and when an ID
//! is both a pubkey-hash and a script-hash ID the caller must resolve the
//! ambiguity from context.

use crate::network::BitcoinNet;
use crate::params::Params;
use crate::{Error, Result};
use parking_lot::{RwLock, RwLockReadGuard};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Separator between the human-readable part and data of a bech32 string.
const BECH32_SEPARATOR: char = '1';

/// Registered networks and the indices derived from them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    profiles: Vec<Params>,
    registered_nets: HashMap<BitcoinNet, usize>,
    pub_key_hash_addr_ids: HashSet<u8>,
    script_hash_addr_ids: HashSet<u8>,
    bech32_segwit_prefixes: HashSet<String>,
    hd_priv_to_pub_key_ids: HashMap<[u8; 4], [u8; 4]>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the parameters of a network.
    ///
    /// Fails with [`Error::DuplicateNetwork`] if a network with the same
    /// magic is already registered, in which case nothing is modified.
    /// Registering identical parameters twice fails the second time.
    pub fn register(&mut self, params: Params) -> Result<()> {
        if self.registered_nets.contains_key(&params.net) {
            return Err(Error::DuplicateNetwork(params.net));
        }

        if let Err(e) = params.validate() {
            tracing::warn!("Registering network {} with inconsistent parameters: {}", params.name, e);
        }

        self.pub_key_hash_addr_ids.insert(params.pub_key_hash_addr_id);
        self.script_hash_addr_ids.insert(params.script_hash_addr_id);
        self.hd_priv_to_pub_key_ids
            .insert(params.hd_private_key_id, params.hd_public_key_id);

        // A bech32 segwit address always starts with the hrp followed by '1'.
        let mut prefix = params.bech32_hrp_segwit.clone();
        prefix.push(BECH32_SEPARATOR);
        self.bech32_segwit_prefixes.insert(prefix);

        tracing::debug!("Registered network {} ({})", params.name, params.net);

        self.registered_nets.insert(params.net, self.profiles.len());
        self.profiles.push(params);
        Ok(())
    }

    /// Register parameters known to be valid, panicking on failure.
    ///
    /// Only for the built-in networks at startup, where a failure can only
    /// come from a defect in the hard-coded parameters.
    pub fn must_register(&mut self, params: Params) {
        if let Err(e) = self.register(params) {
            panic!("failed to register network: {}", e);
        }
    }

    /// Whether `id` prefixes a pay-to-pubkey-hash address on any registered network.
    ///
    /// Check [`is_script_hash_addr_id`](Self::is_script_hash_addr_id) as well:
    /// if both return true the address type is undeterminable from the ID alone.
    pub fn is_pub_key_hash_addr_id(&self, id: u8) -> bool {
        self.pub_key_hash_addr_ids.contains(&id)
    }

    /// Whether `id` prefixes a pay-to-script-hash address on any registered network.
    pub fn is_script_hash_addr_id(&self, id: u8) -> bool {
        self.script_hash_addr_ids.contains(&id)
    }

    /// Whether `prefix` (hrp plus separator) starts segwit addresses on any
    /// registered network. Comparison is case-insensitive.
    pub fn is_bech32_segwit_prefix(&self, prefix: &str) -> bool {
        self.bech32_segwit_prefixes
            .contains(prefix.to_lowercase().as_str())
    }

    /// Map an HD private extended key magic to its public counterpart.
    ///
    /// Fails with [`Error::UnknownHdKeyId`] if `id` is not exactly four bytes
    /// or is not registered.
    pub fn hd_private_key_to_public_key_id(&self, id: &[u8]) -> Result<[u8; 4]> {
        let key: [u8; 4] = id.try_into().map_err(|_| Error::UnknownHdKeyId)?;
        self.hd_priv_to_pub_key_ids
            .get(&key)
            .copied()
            .ok_or(Error::UnknownHdKeyId)
    }

    /// Whether a network with this magic is registered
    pub fn is_registered(&self, net: BitcoinNet) -> bool {
        self.registered_nets.contains_key(&net)
    }

    /// Parameters registered under `net`
    pub fn params(&self, net: BitcoinNet) -> Option<&Params> {
        self.registered_nets.get(&net).map(|&idx| &self.profiles[idx])
    }

    /// First registered parameters named `name`
    pub fn params_by_name(&self, name: &str) -> Option<&Params> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Registered parameters in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Params> {
        self.profiles.iter()
    }

    /// Number of registered networks
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Move the registry behind a lock for late registration
    pub fn into_shared(self) -> SharedRegistry {
        SharedRegistry::new(self)
    }
}

/// A registry that accepts registrations while being read.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<Registry>>,
}

impl SharedRegistry {
    /// Wrap a registry
    pub fn new(registry: Registry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// See [`Registry::register`]
    pub fn register(&self, params: Params) -> Result<()> {
        self.inner.write().register(params)
    }

    /// See [`Registry::is_pub_key_hash_addr_id`]
    pub fn is_pub_key_hash_addr_id(&self, id: u8) -> bool {
        self.inner.read().is_pub_key_hash_addr_id(id)
    }

    /// See [`Registry::is_script_hash_addr_id`]
    pub fn is_script_hash_addr_id(&self, id: u8) -> bool {
        self.inner.read().is_script_hash_addr_id(id)
    }

    /// See [`Registry::is_bech32_segwit_prefix`]
    pub fn is_bech32_segwit_prefix(&self, prefix: &str) -> bool {
        self.inner.read().is_bech32_segwit_prefix(prefix)
    }

    /// See [`Registry::hd_private_key_to_public_key_id`]
    pub fn hd_private_key_to_public_key_id(&self, id: &[u8]) -> Result<[u8; 4]> {
        self.inner.read().hd_private_key_to_public_key_id(id)
    }

    /// Copy of the parameters registered under `net`
    pub fn params(&self, net: BitcoinNet) -> Option<Params> {
        self.inner.read().params(net).cloned()
    }

    /// Hold the read lock for several lookups
    pub fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.inner.read()
    }
}

impl From<Registry> for SharedRegistry {
    fn from(registry: Registry) -> Self {
        Self::new(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkType;

    fn custom_params() -> Params {
        let mut params = Params::simnet().unwrap();
        params.name = "xyznet".to_string();
        params.net = BitcoinNet(0xaabb_ccdd);
        params.pub_key_hash_addr_id = 0x1f;
        params.script_hash_addr_id = 0x20;
        params.hd_private_key_id = [0x01, 0x02, 0x03, 0x04];
        params.hd_public_key_id = [0x05, 0x06, 0x07, 0x08];
        params.bech32_hrp_segwit = "xyz".to_string();
        params
    }

    #[test]
    fn test_custom_network_scenario() {
        let mut registry = Registry::new();
        registry.register(custom_params()).unwrap();

        assert!(registry.is_pub_key_hash_addr_id(0x1f));
        assert_eq!(
            registry
                .hd_private_key_to_public_key_id(&[0x01, 0x02, 0x03, 0x04])
                .unwrap(),
            [0x05, 0x06, 0x07, 0x08]
        );
        assert!(registry.is_bech32_segwit_prefix("xyz1"));
        assert!(matches!(
            registry.register(custom_params()),
            Err(Error::DuplicateNetwork(BitcoinNet(0xaabb_ccdd)))
        ));
    }

    #[test]
    fn test_duplicate_leaves_indices_untouched() {
        let mut registry = Registry::new();
        registry.register(custom_params()).unwrap();
        let before = registry.clone();

        let mut conflicting = custom_params();
        conflicting.pub_key_hash_addr_id = 0x77;
        conflicting.script_hash_addr_id = 0x78;
        conflicting.hd_private_key_id = [0xde, 0xad, 0xbe, 0xef];
        conflicting.bech32_hrp_segwit = "other".to_string();
        assert!(registry.register(conflicting).is_err());

        assert_eq!(registry, before);
        assert!(!registry.is_pub_key_hash_addr_id(0x77));
        assert!(!registry.is_bech32_segwit_prefix("other1"));
    }

    #[test]
    fn test_address_ids_after_registration() {
        let mut registry = Registry::new();
        for network in NetworkType::ALL {
            registry.register(Params::from_network(network).unwrap()).unwrap();
        }

        for params in registry.iter() {
            assert!(registry.is_pub_key_hash_addr_id(params.pub_key_hash_addr_id));
            assert!(registry.is_script_hash_addr_id(params.script_hash_addr_id));
        }
        assert!(!registry.is_pub_key_hash_addr_id(0x1f));
    }

    #[test]
    fn test_hd_lookup_rejects_bad_input() {
        let mut registry = Registry::new();
        registry.register(custom_params()).unwrap();

        assert!(matches!(
            registry.hd_private_key_to_public_key_id(&[0x01, 0x02, 0x03]),
            Err(Error::UnknownHdKeyId)
        ));
        assert!(matches!(
            registry.hd_private_key_to_public_key_id(&[0x01, 0x02, 0x03, 0x04, 0x05]),
            Err(Error::UnknownHdKeyId)
        ));
        assert!(matches!(
            registry.hd_private_key_to_public_key_id(&[0x09, 0x09, 0x09, 0x09]),
            Err(Error::UnknownHdKeyId)
        ));
    }

    #[test]
    fn test_bech32_prefix_case_folding() {
        let mut registry = Registry::new();
        registry.register(Params::mainnet().unwrap()).unwrap();

        assert!(registry.is_bech32_segwit_prefix("eac1"));
        assert!(registry.is_bech32_segwit_prefix("EAC1"));
        assert!(registry.is_bech32_segwit_prefix("Eac1"));
        assert!(!registry.is_bech32_segwit_prefix("eac"));
        assert!(!registry.is_bech32_segwit_prefix("teac1"));
    }

    #[test]
    fn test_upper_case_hrp_is_flagged_but_registered() {
        let mut params = custom_params();
        params.bech32_hrp_segwit = "XYZ".to_string();
        assert!(params.validate().is_err());

        let mut registry = Registry::new();
        registry.register(params).unwrap();
        assert!(registry.is_registered(BitcoinNet(0xaabb_ccdd)));
        assert!(!registry.is_bech32_segwit_prefix("xyz1"));
    }

    #[test]
    fn test_shared_ids_are_ambiguous() {
        let mut registry = Registry::new();
        registry.register(Params::mainnet().unwrap()).unwrap();

        let mut other = custom_params();
        other.pub_key_hash_addr_id = 0x32; // mainnet's script hash id
        registry.register(other).unwrap();

        assert!(registry.is_pub_key_hash_addr_id(0x32));
        assert!(registry.is_script_hash_addr_id(0x32));
    }

    #[test]
    fn test_read_access_to_profiles() {
        let mut registry = Registry::new();
        registry.register(custom_params()).unwrap();

        let params = registry.params(BitcoinNet(0xaabb_ccdd)).unwrap();
        assert_eq!(params.name, "xyznet");
        assert_eq!(registry.params_by_name("xyznet").unwrap().net, params.net);
        assert!(registry.params(BitcoinNet::MAIN_NET).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_shared_registry_late_registration() {
        let shared = Registry::new().into_shared();
        shared.register(Params::mainnet().unwrap()).unwrap();

        std::thread::scope(|s| {
            for _ in 0..4 {
                let reader = shared.clone();
                s.spawn(move || {
                    for _ in 0..100 {
                        assert!(reader.is_pub_key_hash_addr_id(0x30));
                    }
                });
            }
            s.spawn(|| shared.register(custom_params()).unwrap());
        });

        assert!(shared.is_bech32_segwit_prefix("XYZ1"));
        assert_eq!(shared.read().len(), 2);
        assert!(shared.params(BitcoinNet(0xaabb_ccdd)).is_some());
    }
}
