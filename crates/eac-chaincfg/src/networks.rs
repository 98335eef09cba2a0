//! Built-in Earthcoin network parameters

use crate::checkpoints::CheckpointList;
use crate::deployment::{ConsensusDeployment, Deployments};
use crate::genesis::{
    MAIN_NET_GENESIS_BLOCK, MAIN_NET_GENESIS_HASH, REG_TEST_GENESIS_BLOCK, REG_TEST_GENESIS_HASH,
    SIM_NET_GENESIS_BLOCK, SIM_NET_GENESIS_HASH, TEST_NET4_GENESIS_BLOCK, TEST_NET4_GENESIS_HASH,
};
use crate::network::{BitcoinNet, DnsSeed, NetworkType};
use crate::params::Params;
use crate::pow::max_target_with_bits;
use crate::Result;
use num_bigint::BigUint;
use std::time::Duration;

const MINUTE: Duration = Duration::from_secs(60);

/// Bit numbers of the test dummy, CSV and segwit deployments.
const TEST_DUMMY_BIT: u8 = 28;
const CSV_BIT: u8 = 0;
const SEGWIT_BIT: u8 = 1;

/// Main network seed hosts and whether each filters by service flags.
const MAIN_NET_SEEDS: &[(&str, bool)] = &[
    ("85.25.44.119", true),
    ("13.114.218.80", true),
    ("159.69.19.237", false),
    ("46.105.62.121", false),
    ("46.101.126.142", false),
    ("212.237.21.74", true),
    ("109.169.63.180", true),
    ("5.9.10.66", false),
    ("209.97.179.113", false),
    ("45.77.86.161", false),
];

/// Highest proof-of-work value on the main and test v4 networks.
fn main_pow_limit() -> BigUint {
    BigUint::from(0x0f_ffffu32) << 216usize
}

fn seeds(list: &[(&str, bool)]) -> Vec<DnsSeed> {
    list.iter()
        .map(|&(host, has_filtering)| DnsSeed::new(host, has_filtering))
        .collect()
}

impl Params {
    /// Get main network parameters
    pub fn mainnet() -> Result<Self> {
        Ok(Self {
            name: NetworkType::Mainnet.name().to_string(),
            net: BitcoinNet::MAIN_NET,
            default_port: "35677".to_string(),
            dns_seeds: seeds(MAIN_NET_SEEDS),

            genesis_block: &MAIN_NET_GENESIS_BLOCK,
            genesis_hash: MAIN_NET_GENESIS_HASH,
            pow_limit: main_pow_limit(),
            pow_limit_bits: 0x1e0f_ffff,
            bip0034_height: 710_000,
            // Not yet scheduled on main net
            bip0065_height: 99_999_999,
            bip0066_height: 99_999_999,
            coinbase_maturity: 30,
            subsidy_reduction_interval: 525_600,
            target_timespan: MINUTE * 30,
            target_time_per_block: MINUTE,
            retarget_adjustment_factor: 16,
            reduce_min_difficulty: false,
            min_diff_reduction_time: Duration::ZERO,
            generate_supported: false,

            checkpoints: CheckpointList::mainnet()?,

            // 75% of the confirmation window
            rule_change_activation_threshold: 6048,
            miner_confirmation_window: 8064,
            deployments: Deployments::new([
                ConsensusDeployment {
                    bit_number: TEST_DUMMY_BIT,
                    start_time: 1_199_145_601, // January 1, 2008 UTC
                    expire_time: 1_230_767_999, // December 31, 2008 UTC
                },
                ConsensusDeployment {
                    bit_number: CSV_BIT,
                    start_time: 1_485_561_600, // January 28, 2017 UTC
                    expire_time: 1_517_356_801, // January 31, 2018 UTC
                },
                ConsensusDeployment {
                    bit_number: SEGWIT_BIT,
                    start_time: 1_485_561_600,
                    expire_time: 1_517_356_801,
                },
            ]),

            relay_non_std_txs: false,
            bech32_hrp_segwit: "eac".to_string(),

            pub_key_hash_addr_id: 0x30,       // starts with L
            script_hash_addr_id: 0x32,        // starts with M
            private_key_id: 0xb0,
            witness_pub_key_hash_addr_id: 0x06,
            witness_script_hash_addr_id: 0x0a,

            hd_private_key_id: [0x04, 0x88, 0xad, 0xe4], // xprv
            hd_public_key_id: [0x04, 0x88, 0xb2, 0x1e],  // xpub
            hd_coin_type: 2,
        })
    }

    /// Get test network (version 4) parameters
    pub fn testnet4() -> Result<Self> {
        Ok(Self {
            name: NetworkType::Testnet4.name().to_string(),
            net: BitcoinNet::TEST_NET4,
            default_port: "25677".to_string(),
            dns_seeds: Vec::new(),

            genesis_block: &TEST_NET4_GENESIS_BLOCK,
            genesis_hash: TEST_NET4_GENESIS_HASH,
            pow_limit: main_pow_limit(),
            pow_limit_bits: 0x1e0f_ffff,
            bip0034_height: 76,
            bip0065_height: 76,
            bip0066_height: 76,
            coinbase_maturity: 30,
            subsidy_reduction_interval: 525_600,
            target_timespan: MINUTE * 30,
            target_time_per_block: MINUTE,
            retarget_adjustment_factor: 16,
            reduce_min_difficulty: true,
            min_diff_reduction_time: MINUTE * 5,
            generate_supported: false,

            checkpoints: CheckpointList::testnet4()?,

            rule_change_activation_threshold: 1512,
            miner_confirmation_window: 2016,
            deployments: Deployments::new([
                ConsensusDeployment {
                    bit_number: TEST_DUMMY_BIT,
                    start_time: 1_199_145_601,
                    expire_time: 1_230_767_999,
                },
                ConsensusDeployment {
                    bit_number: CSV_BIT,
                    start_time: 1_483_228_800, // January 1, 2017 UTC
                    expire_time: 1_517_356_801,
                },
                ConsensusDeployment {
                    bit_number: SEGWIT_BIT,
                    start_time: 1_483_228_800,
                    expire_time: 1_517_356_801,
                },
            ]),

            relay_non_std_txs: true,
            bech32_hrp_segwit: "teac".to_string(),

            pub_key_hash_addr_id: 0x6f,       // starts with m or n
            script_hash_addr_id: 0x3a,        // starts with Q
            private_key_id: 0xef,
            witness_pub_key_hash_addr_id: 0x52,
            witness_script_hash_addr_id: 0x31,

            hd_private_key_id: [0x04, 0x35, 0x83, 0x94], // tprv
            hd_public_key_id: [0x04, 0x35, 0x87, 0xcf],  // tpub
            hd_coin_type: 1,
        })
    }

    /// Get regression test network parameters
    pub fn regtest() -> Result<Self> {
        Ok(Self {
            name: NetworkType::Regtest.name().to_string(),
            net: BitcoinNet::TEST_NET,
            default_port: "18444".to_string(),
            dns_seeds: Vec::new(),

            genesis_block: &REG_TEST_GENESIS_BLOCK,
            genesis_hash: REG_TEST_GENESIS_HASH,
            pow_limit: max_target_with_bits(255),
            pow_limit_bits: 0x207f_ffff,
            // Not active, version 1 blocks stay valid
            bip0034_height: 100_000_000,
            bip0065_height: 1351,
            bip0066_height: 1251,
            coinbase_maturity: 30,
            subsidy_reduction_interval: 525_600,
            target_timespan: MINUTE * 30,
            target_time_per_block: MINUTE,
            retarget_adjustment_factor: 16,
            reduce_min_difficulty: true,
            min_diff_reduction_time: MINUTE * 20,
            generate_supported: true,

            checkpoints: CheckpointList::default(),

            rule_change_activation_threshold: 108,
            miner_confirmation_window: 144,
            deployments: Deployments::always_active(TEST_DUMMY_BIT, CSV_BIT, SEGWIT_BIT),

            relay_non_std_txs: true,
            bech32_hrp_segwit: "reac".to_string(),

            pub_key_hash_addr_id: 0x6f,
            script_hash_addr_id: 0x3a,
            private_key_id: 0xef,
            witness_pub_key_hash_addr_id: 0x00,
            witness_script_hash_addr_id: 0x00,

            hd_private_key_id: [0x04, 0x35, 0x83, 0x94],
            hd_public_key_id: [0x04, 0x35, 0x87, 0xcf],
            hd_coin_type: 1,
        })
    }

    /// Get simulation test network parameters.
    ///
    /// Simnet is for private groups doing simulation testing. It must never
    /// carry DNS seeds, or it would turn into another public testnet.
    pub fn simnet() -> Result<Self> {
        Ok(Self {
            name: NetworkType::Simnet.name().to_string(),
            net: BitcoinNet::SIM_NET,
            default_port: "18555".to_string(),
            dns_seeds: Vec::new(),

            genesis_block: &SIM_NET_GENESIS_BLOCK,
            genesis_hash: SIM_NET_GENESIS_HASH,
            pow_limit: max_target_with_bits(255),
            pow_limit_bits: 0x207f_ffff,
            bip0034_height: 0,
            bip0065_height: 0,
            bip0066_height: 0,
            coinbase_maturity: 30,
            subsidy_reduction_interval: 210_000,
            target_timespan: MINUTE * 60 * 24 * 14,
            target_time_per_block: MINUTE * 10,
            retarget_adjustment_factor: 16,
            reduce_min_difficulty: true,
            min_diff_reduction_time: MINUTE * 20,
            generate_supported: true,

            checkpoints: CheckpointList::default(),

            rule_change_activation_threshold: 75,
            miner_confirmation_window: 100,
            deployments: Deployments::always_active(TEST_DUMMY_BIT, CSV_BIT, SEGWIT_BIT),

            relay_non_std_txs: true,
            bech32_hrp_segwit: "seac".to_string(),

            pub_key_hash_addr_id: 0x3f,       // starts with S
            script_hash_addr_id: 0x7b,        // starts with s
            private_key_id: 0x64,
            witness_pub_key_hash_addr_id: 0x19,
            witness_script_hash_addr_id: 0x28,

            hd_private_key_id: [0x04, 0x20, 0xb9, 0x00], // sprv
            hd_public_key_id: [0x04, 0x20, 0xbd, 0x3a],  // spub
            hd_coin_type: 115,
        })
    }

    /// Get parameters by network type
    pub fn from_network(network_type: NetworkType) -> Result<Self> {
        match network_type {
            NetworkType::Mainnet => Self::mainnet(),
            NetworkType::Testnet4 => Self::testnet4(),
            NetworkType::Regtest => Self::regtest(),
            NetworkType::Simnet => Self::simnet(),
        }
    }
}
