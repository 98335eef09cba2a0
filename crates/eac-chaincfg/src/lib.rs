//! Earthcoin chain parameters and cross-network registry
//!
//! This crate defines the consensus and encoding parameters for every
//! Earthcoin network (main, test v4, regression and simulation), and a
//! [`Registry`] that indexes registered networks so that address decoders,
//! extended-key parsers and handshake code can classify an identifier
//! without knowing which network produced it.
//!
//! Custom networks are added by building a [`Params`] value and handing it to
//! [`Registry::register`] during startup, before any lookups are issued.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod bootstrap;
pub mod checkpoints;
pub mod config;
pub mod deployment;
pub mod genesis;
pub mod hash;
pub mod network;
pub mod networks;
pub mod params;
pub mod pow;
pub mod registry;

pub use bootstrap::{
    builtin_params, default_registry, hd_private_key_to_public_key_id, is_bech32_segwit_prefix,
    is_pub_key_hash_addr_id, is_script_hash_addr_id,
};
pub use checkpoints::{Checkpoint, CheckpointList};
pub use config::ChainConfig;
pub use deployment::{ConsensusDeployment, DeploymentId, Deployments};
pub use genesis::{BlockHeader, GenesisBlock};
pub use hash::ChainHash;
pub use network::{BitcoinNet, DnsSeed, NetworkType};
pub use params::Params;
pub use registry::{Registry, SharedRegistry};

/// Error types for parameter and registry operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The network magic is already registered
    #[error("duplicate Earthcoin network: {0}")]
    DuplicateNetwork(BitcoinNet),

    /// The HD private extended key id is malformed or not registered
    #[error("unknown hd private extended key bytes")]
    UnknownHdKeyId,

    /// A hash literal could not be decoded
    #[error("Invalid hash: {0}")]
    InvalidHash(String),

    /// A parameter set violates one of its own invariants
    #[error("Invalid parameters for {network}: {reason}")]
    InvalidParams {
        /// Name of the offending network
        network: String,
        /// Every defect found, joined
        reason: String,
    },

    /// No registered network carries the requested name
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    /// IO error while reading configuration
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be parsed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for parameter and registry operations
pub type Result<T> = std::result::Result<T, Error>;
