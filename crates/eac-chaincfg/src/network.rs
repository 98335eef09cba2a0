//! Earthcoin network identifiers

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Magic value identifying which peer-to-peer network a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BitcoinNet(pub u32);

impl BitcoinNet {
    /// Main Earthcoin network.
    pub const MAIN_NET: BitcoinNet = BitcoinNet(0xfdf1_dbc0);
    /// Regression test network.
    pub const TEST_NET: BitcoinNet = BitcoinNet(0xdab5_bffa);
    /// Test network, version 4.
    pub const TEST_NET4: BitcoinNet = BitcoinNet(0xf1c8_d2fd);
    /// Simulation test network.
    pub const SIM_NET: BitcoinNet = BitcoinNet(0x1214_1c16);

    /// Raw magic value.
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<u32> for BitcoinNet {
    fn from(magic: u32) -> Self {
        BitcoinNet(magic)
    }
}

impl fmt::Display for BitcoinNet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BitcoinNet::MAIN_NET => write!(f, "MainNet"),
            BitcoinNet::TEST_NET => write!(f, "TestNet"),
            BitcoinNet::TEST_NET4 => write!(f, "TestNet4"),
            BitcoinNet::SIM_NET => write!(f, "SimNet"),
            BitcoinNet(other) => write!(f, "Unknown BitcoinNet ({:#010x})", other),
        }
    }
}

/// Built-in network enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    /// Mainnet
    Mainnet,
    /// Public test network, version 4
    Testnet4,
    /// Regression test network (local development)
    Regtest,
    /// Private simulation test network
    Simnet,
}

impl NetworkType {
    /// Every built-in network, in bootstrap order.
    pub const ALL: [NetworkType; 4] = [
        NetworkType::Mainnet,
        NetworkType::Testnet4,
        NetworkType::Regtest,
        NetworkType::Simnet,
    ];

    /// Name carried by the network's parameters.
    pub const fn name(self) -> &'static str {
        match self {
            NetworkType::Mainnet => "mainnet",
            NetworkType::Testnet4 => "testnet4",
            NetworkType::Regtest => "regtest",
            NetworkType::Simnet => "simnet",
        }
    }

    /// Wire magic of the network.
    pub const fn net(self) -> BitcoinNet {
        match self {
            NetworkType::Mainnet => BitcoinNet::MAIN_NET,
            NetworkType::Testnet4 => BitcoinNet::TEST_NET4,
            NetworkType::Regtest => BitcoinNet::TEST_NET,
            NetworkType::Simnet => BitcoinNet::SIM_NET,
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NetworkType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Ok(NetworkType::Mainnet),
            "testnet4" | "testnet" => Ok(NetworkType::Testnet4),
            "regtest" | "regression" => Ok(NetworkType::Regtest),
            "simnet" | "simulation" => Ok(NetworkType::Simnet),
            _ => Err(Error::UnknownNetwork(s.to_string())),
        }
    }
}

/// A DNS seed used for peer discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSeed {
    /// Hostname of the seed
    pub host: String,
    /// Whether the seed supports filtering by service flags
    pub has_filtering: bool,
}

impl DnsSeed {
    /// Create a seed entry
    pub fn new(host: impl Into<String>, has_filtering: bool) -> Self {
        Self {
            host: host.into(),
            has_filtering,
        }
    }
}

impl fmt::Display for DnsSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_magics_are_distinct() {
        let mut nets: Vec<_> = NetworkType::ALL.iter().map(|n| n.net()).collect();
        nets.sort();
        nets.dedup();
        assert_eq!(nets.len(), NetworkType::ALL.len());
    }

    #[test]
    fn test_network_from_str() {
        assert_eq!("mainnet".parse::<NetworkType>().unwrap(), NetworkType::Mainnet);
        assert_eq!("TestNet".parse::<NetworkType>().unwrap(), NetworkType::Testnet4);
        assert_eq!("regression".parse::<NetworkType>().unwrap(), NetworkType::Regtest);
        assert!(matches!(
            "signet".parse::<NetworkType>(),
            Err(Error::UnknownNetwork(_))
        ));
    }

    #[test]
    fn test_net_display() {
        assert_eq!(BitcoinNet::MAIN_NET.to_string(), "MainNet");
        assert_eq!(
            BitcoinNet(0xaabbccdd).to_string(),
            "Unknown BitcoinNet (0xaabbccdd)"
        );
    }

    #[test]
    fn test_seed_displays_host() {
        let seed = DnsSeed::new("85.25.44.119", true);
        assert_eq!(seed.to_string(), "85.25.44.119");
    }
}
