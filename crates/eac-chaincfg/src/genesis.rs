//! Genesis block headers for the built-in networks.
//!
//! Only the header fields and hash are carried here. The coinbase
//! transaction is owned by the block codec.

use crate::hash::ChainHash;
use serde::Serialize;

/// Block header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockHeader {
    /// Block version
    pub version: i32,
    /// Hash of the previous block
    pub prev_block: ChainHash,
    /// Merkle root of the block's transactions
    pub merkle_root: ChainHash,
    /// Block time (Unix epoch seconds)
    pub timestamp: u32,
    /// Compact difficulty target
    pub bits: u32,
    /// Proof-of-work nonce
    pub nonce: u32,
}

/// The first block of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenesisBlock {
    /// Genesis header
    pub header: BlockHeader,
}

/// Merkle root shared by every built-in genesis block.
#[rustfmt::skip]
pub const GENESIS_MERKLE_ROOT: ChainHash = ChainHash::from_bytes([
    0xb1, 0x4b, 0x5c, 0x80, 0x81, 0x6e, 0x64, 0xe6,
    0x16, 0xa2, 0xab, 0xb5, 0xe5, 0xb0, 0x39, 0x63,
    0x94, 0x81, 0x7f, 0x4d, 0xf0, 0xc1, 0x2a, 0x45,
    0x91, 0x18, 0x41, 0x10, 0x36, 0x7c, 0x75, 0x13,
]);

/// Main network genesis hash.
#[rustfmt::skip]
pub const MAIN_NET_GENESIS_HASH: ChainHash = ChainHash::from_bytes([
    0xed, 0x6c, 0x14, 0xf9, 0xe2, 0x11, 0x95, 0x6c,
    0xcc, 0xd8, 0xbc, 0x8b, 0x72, 0x06, 0xad, 0x83,
    0xe4, 0x18, 0xf7, 0x9a, 0xcb, 0xf1, 0x38, 0x05,
    0x1c, 0x30, 0x03, 0xf4, 0x4d, 0x7d, 0x71, 0x21,
]);

/// Main network genesis block.
pub static MAIN_NET_GENESIS_BLOCK: GenesisBlock = GenesisBlock {
    header: BlockHeader {
        version: 1,
        prev_block: ChainHash::ZERO,
        merkle_root: GENESIS_MERKLE_ROOT,
        timestamp: 1_386_746_168,
        bits: 0x1e0f_fff0,
        nonce: 12_468_024,
    },
};

/// Regression test network genesis hash.
#[rustfmt::skip]
pub const REG_TEST_GENESIS_HASH: ChainHash = ChainHash::from_bytes([
    0xf9, 0x16, 0xc4, 0x56, 0xfc, 0x51, 0xdf, 0x62,
    0x78, 0x85, 0xd7, 0xd6, 0x74, 0xed, 0x02, 0xdc,
    0x88, 0xa2, 0x25, 0xad, 0xb3, 0xf0, 0x2a, 0xd1,
    0x3e, 0xb4, 0x93, 0x8f, 0xf3, 0x27, 0x08, 0x53,
]);

/// Regression test network genesis block.
pub static REG_TEST_GENESIS_BLOCK: GenesisBlock = GenesisBlock {
    header: BlockHeader {
        version: 1,
        prev_block: ChainHash::ZERO,
        merkle_root: GENESIS_MERKLE_ROOT,
        timestamp: 1_386_746_169,
        bits: 0x1e0f_fff0,
        nonce: 12_468_025,
    },
};

/// Test network (version 4) genesis hash.
#[rustfmt::skip]
pub const TEST_NET4_GENESIS_HASH: ChainHash = ChainHash::from_bytes([
    0xa0, 0x29, 0x3e, 0x4e, 0xeb, 0x3d, 0xa6, 0xe6,
    0xf5, 0x6f, 0x81, 0xed, 0x59, 0x5f, 0x57, 0x88,
    0x0d, 0x1a, 0x21, 0x56, 0x9e, 0x13, 0xee, 0xfd,
    0xd9, 0x51, 0x28, 0x4b, 0x5a, 0x62, 0x66, 0x49,
]);

/// Test network (version 4) genesis block.
pub static TEST_NET4_GENESIS_BLOCK: GenesisBlock = GenesisBlock {
    header: BlockHeader {
        version: 2,
        prev_block: ChainHash::ZERO,
        merkle_root: GENESIS_MERKLE_ROOT,
        timestamp: 1_386_746_169,
        bits: 0x1e0f_fff0,
        nonce: 12_468_025,
    },
};

/// Simulation test network genesis hash.
#[rustfmt::skip]
pub const SIM_NET_GENESIS_HASH: ChainHash = ChainHash::from_bytes([
    0xbe, 0xa4, 0x3b, 0x3a, 0xb4, 0xbc, 0x9d, 0x86,
    0x2b, 0xfa, 0xbc, 0x0d, 0x45, 0xa3, 0xc5, 0xc9,
    0xd0, 0x9f, 0x66, 0x20, 0xce, 0x7d, 0xb6, 0x78,
    0xb5, 0xdc, 0x1d, 0xb8, 0x19, 0xc9, 0x35, 0x12,
]);

/// Simulation test network genesis block.
pub static SIM_NET_GENESIS_BLOCK: GenesisBlock = GenesisBlock {
    header: BlockHeader {
        version: 1,
        prev_block: ChainHash::ZERO,
        merkle_root: GENESIS_MERKLE_ROOT,
        timestamp: 1_401_292_357,
        bits: 0x207f_ffff,
        nonce: 2,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merkle_root_text_form() {
        assert_eq!(
            GENESIS_MERKLE_ROOT.to_string(),
            "13757c3610411891452ac1f04d7f81946339b0e5b5aba216e6646e81805c4bb1"
        );
    }

    #[test]
    fn test_genesis_hashes_are_distinct() {
        let hashes = [
            MAIN_NET_GENESIS_HASH,
            REG_TEST_GENESIS_HASH,
            TEST_NET4_GENESIS_HASH,
            SIM_NET_GENESIS_HASH,
        ];
        for (i, a) in hashes.iter().enumerate() {
            for b in &hashes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
