//! Per-network consensus and encoding parameters

use crate::checkpoints::{Checkpoint, CheckpointList};
use crate::deployment::{ConsensusDeployment, DeploymentId, Deployments};
use crate::genesis::GenesisBlock;
use crate::hash::ChainHash;
use crate::network::{BitcoinNet, DnsSeed};
use crate::pow::{big_to_compact, MAX_TARGET_BYTES};
use crate::{Error, Result};
use num_bigint::BigUint;
use serde::Serialize;
use std::time::Duration;

/// Highest version bit usable by a BIP0009 deployment.
pub const MAX_DEPLOYMENT_BIT: u8 = 28;

/// An Earthcoin network defined by its parameters.
///
/// Applications use these to tell networks apart, and to tell addresses and
/// keys for one network from those of another. A value is never modified
/// once built; register it with a [`Registry`](crate::Registry) to make its
/// encoding magics visible to cross-network lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Params {
    /// Human-readable identifier for the network
    pub name: String,
    /// Magic bytes identifying the network
    pub net: BitcoinNet,
    /// Default peer-to-peer port
    pub default_port: String,
    /// DNS seeds used for peer discovery
    pub dns_seeds: Vec<DnsSeed>,

    /// First block of the chain
    pub genesis_block: &'static GenesisBlock,
    /// Hash of the genesis block
    pub genesis_hash: ChainHash,

    /// Highest allowed proof-of-work value
    pub pow_limit: BigUint,
    /// `pow_limit` in compact form
    pub pow_limit_bits: u32,

    /// Height at which BIP0034 became active
    pub bip0034_height: u32,
    /// Height at which BIP0065 became active
    pub bip0065_height: u32,
    /// Height at which BIP0066 became active
    pub bip0066_height: u32,

    /// Blocks before a coinbase output can be spent
    pub coinbase_maturity: u16,
    /// Blocks between subsidy reductions
    pub subsidy_reduction_interval: u32,

    /// Time that should elapse between difficulty retargets
    pub target_timespan: Duration,
    /// Desired time to generate each block
    pub target_time_per_block: Duration,
    /// Bound on how far difficulty may move in one retarget
    pub retarget_adjustment_factor: i64,
    /// Whether minimum difficulty drops after a long gap without blocks
    pub reduce_min_difficulty: bool,
    /// Gap after which minimum difficulty applies (only with `reduce_min_difficulty`)
    pub min_diff_reduction_time: Duration,
    /// Whether CPU mining is allowed
    pub generate_supported: bool,

    /// Checkpoints ordered from oldest to newest
    pub checkpoints: CheckpointList,

    /// Votes per window needed to lock in a rule change
    pub rule_change_activation_threshold: u32,
    /// Blocks per threshold state window
    pub miner_confirmation_window: u32,
    /// Rule change deployments
    pub deployments: Deployments,

    /// Whether the mempool relays non-standard transactions
    pub relay_non_std_txs: bool,

    /// Human-readable part of bech32 segwit addresses (BIP 173)
    pub bech32_hrp_segwit: String,

    /// First byte of a P2PKH address
    pub pub_key_hash_addr_id: u8,
    /// First byte of a P2SH address
    pub script_hash_addr_id: u8,
    /// First byte of a WIF private key
    pub private_key_id: u8,
    /// First byte of a P2WPKH address
    pub witness_pub_key_hash_addr_id: u8,
    /// First byte of a P2WSH address
    pub witness_script_hash_addr_id: u8,

    /// BIP32 extended private key magic
    pub hd_private_key_id: [u8; 4],
    /// BIP32 extended public key magic
    pub hd_public_key_id: [u8; 4],

    /// BIP44 coin type
    pub hd_coin_type: u32,
}

impl Params {
    /// Blocks between difficulty retargets
    pub fn difficulty_adjustment_interval(&self) -> u64 {
        let per_block = self.target_time_per_block.as_secs();
        if per_block == 0 {
            return 0;
        }
        self.target_timespan.as_secs() / per_block
    }

    /// Voting parameters of one deployment
    pub fn deployment(&self, id: DeploymentId) -> &ConsensusDeployment {
        &self.deployments[id]
    }

    /// Checkpoint pinned at exactly `height`
    pub fn checkpoint_at(&self, height: u32) -> Option<&Checkpoint> {
        self.checkpoints.get(height)
    }

    /// Whether `height` carries a checkpoint
    pub fn is_checkpoint_height(&self, height: u32) -> bool {
        self.checkpoint_at(height).is_some()
    }

    /// Newest checkpoint, if any
    pub fn latest_checkpoint(&self) -> Option<&Checkpoint> {
        self.checkpoints.latest()
    }

    /// Check the invariants the parameters must satisfy by convention.
    ///
    /// Every defect is collected into a single [`Error::InvalidParams`].
    pub fn validate(&self) -> Result<()> {
        let defects = self.defects();
        if defects.is_empty() {
            return Ok(());
        }

        Err(Error::InvalidParams {
            network: self.name.clone(),
            reason: defects.join("; "),
        })
    }

    fn defects(&self) -> Vec<String> {
        let mut defects = Vec::new();

        if !self.checkpoints.is_strictly_ordered() {
            defects.push("checkpoint heights are not strictly increasing".to_string());
        }

        for (id, deployment) in self.deployments.iter() {
            if !deployment.has_valid_window() {
                defects.push(format!(
                    "deployment {} starts at {} but expires at {}",
                    id, deployment.start_time, deployment.expire_time
                ));
            }
            if deployment.bit_number > MAX_DEPLOYMENT_BIT {
                defects.push(format!(
                    "deployment {} uses version bit {}",
                    id, deployment.bit_number
                ));
            }
        }

        if self.miner_confirmation_window == 0 {
            defects.push("miner confirmation window is zero".to_string());
        }
        if self.rule_change_activation_threshold > self.miner_confirmation_window {
            defects.push(format!(
                "activation threshold {} exceeds confirmation window {}",
                self.rule_change_activation_threshold, self.miner_confirmation_window
            ));
        }

        if self.pow_limit.bits() > (MAX_TARGET_BYTES * 8) as u64 {
            defects.push(format!(
                "pow limit is {} bits wide, more than a 256-bit hash",
                self.pow_limit.bits()
            ));
        }

        let encoded = big_to_compact(&self.pow_limit);
        if encoded != self.pow_limit_bits {
            defects.push(format!(
                "pow limit encodes to {:#010x}, not {:#010x}",
                encoded, self.pow_limit_bits
            ));
        }

        if let Err(e) = bech32::Hrp::parse(&self.bech32_hrp_segwit) {
            defects.push(format!(
                "bech32 hrp {:?} is invalid: {}",
                self.bech32_hrp_segwit, e
            ));
        }
        // Prefix lookups fold the query to lower case, so an upper-case hrp never matches.
        if self.bech32_hrp_segwit != self.bech32_hrp_segwit.to_lowercase() {
            defects.push(format!(
                "bech32 hrp {:?} is not lower case",
                self.bech32_hrp_segwit
            ));
        }

        defects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkType;

    #[test]
    fn test_builtins_validate() {
        for network in NetworkType::ALL {
            let params = Params::from_network(network).unwrap();
            params.validate().unwrap();
        }
    }

    #[test]
    fn test_difficulty_adjustment_interval() {
        let main = Params::mainnet().unwrap();
        assert_eq!(main.difficulty_adjustment_interval(), 30);

        let sim = Params::simnet().unwrap();
        assert_eq!(sim.difficulty_adjustment_interval(), 2016);
    }

    #[test]
    fn test_checkpoint_helpers() {
        let main = Params::mainnet().unwrap();
        assert!(main.is_checkpoint_height(100));
        assert!(!main.is_checkpoint_height(101));
        assert_eq!(main.latest_checkpoint().unwrap().height, 2_856_666);

        let regtest = Params::regtest().unwrap();
        assert!(regtest.latest_checkpoint().is_none());
    }

    #[test]
    fn test_validate_collects_every_defect() {
        let mut params = Params::regtest().unwrap();
        params.pow_limit_bits = 0x1d00_ffff;
        params.rule_change_activation_threshold = params.miner_confirmation_window + 1;
        params.bech32_hrp_segwit = String::new();

        let err = params.validate().unwrap_err();
        match err {
            Error::InvalidParams { network, reason } => {
                assert_eq!(network, "regtest");
                assert!(reason.contains("pow limit"));
                assert!(reason.contains("activation threshold"));
                assert!(reason.contains("bech32 hrp"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_rejects_upper_case_hrp() {
        let mut params = Params::simnet().unwrap();
        params.bech32_hrp_segwit = "XYZ".to_string();

        let err = params.validate().unwrap_err().to_string();
        assert!(err.contains("not lower case"));
    }

    #[test]
    fn test_validate_rejects_oversized_pow_limit() {
        let mut params = Params::regtest().unwrap();
        params.pow_limit = num_bigint::BigUint::from(1u32) << 256usize;
        params.pow_limit_bits = big_to_compact(&params.pow_limit);

        let err = params.validate().unwrap_err().to_string();
        assert!(err.contains("257 bits wide"));
    }

    #[test]
    fn test_validate_rejects_inverted_window() {
        let mut params = Params::testnet4().unwrap();
        let mut entries = [ConsensusDeployment::always_active(0); DeploymentId::COUNT];
        entries[DeploymentId::Csv.index()] = ConsensusDeployment {
            bit_number: 0,
            start_time: 1_517_356_801,
            expire_time: 1_483_228_800,
        };
        params.deployments = Deployments::new(entries);

        let err = params.validate().unwrap_err().to_string();
        assert!(err.contains("deployment csv"));
    }
}
