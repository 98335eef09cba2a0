//! BIP0009 soft-fork deployments

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// Rule change deployments voted on through block version bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeploymentId {
    /// Deployment used only for testing
    TestDummy,
    /// CSV soft-fork package (BIPs 68, 112 and 113)
    Csv,
    /// Segregated witness soft-fork package (BIPs 141, 142, 144, 145, 147 and 173)
    Segwit,
}

impl DeploymentId {
    /// Number of currently defined deployments.
    pub const COUNT: usize = 3;

    /// Every defined deployment, in table order.
    pub const ALL: [DeploymentId; Self::COUNT] =
        [DeploymentId::TestDummy, DeploymentId::Csv, DeploymentId::Segwit];

    /// Offset of the deployment in a [`Deployments`] table.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DeploymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeploymentId::TestDummy => write!(f, "testdummy"),
            DeploymentId::Csv => write!(f, "csv"),
            DeploymentId::Segwit => write!(f, "segwit"),
        }
    }
}

/// Voting window of one consensus rule change.
///
/// Times are compared against median time past by the threshold state
/// machine; this type only holds them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusDeployment {
    /// Bit in the block version signalling the deployment
    pub bit_number: u8,
    /// Median block time after which voting starts
    pub start_time: u64,
    /// Median block time after which the deployment expires
    pub expire_time: u64,
}

impl ConsensusDeployment {
    /// Expire time of a deployment that never times out.
    pub const NEVER_EXPIRES: u64 = i64::MAX as u64;

    /// Deployment open for voting from genesis and never expiring.
    pub const fn always_active(bit_number: u8) -> Self {
        Self {
            bit_number,
            start_time: 0,
            expire_time: Self::NEVER_EXPIRES,
        }
    }

    /// Whether the deployment carries the never-expires sentinel.
    pub const fn is_never_expiring(&self) -> bool {
        self.expire_time == Self::NEVER_EXPIRES
    }

    /// Whether `start_time` precedes `expire_time`, or the deployment never expires.
    pub const fn has_valid_window(&self) -> bool {
        self.is_never_expiring() || self.start_time < self.expire_time
    }

    /// Start time as a UTC timestamp.
    pub fn start_time_utc(&self) -> Option<DateTime<Utc>> {
        to_utc(self.start_time)
    }

    /// Expire time as a UTC timestamp, `None` for the sentinel.
    pub fn expire_time_utc(&self) -> Option<DateTime<Utc>> {
        if self.is_never_expiring() {
            return None;
        }
        to_utc(self.expire_time)
    }
}

fn to_utc(secs: u64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(i64::try_from(secs).ok()?, 0)
}

/// Fixed-size deployment table indexed by [`DeploymentId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployments([ConsensusDeployment; DeploymentId::COUNT]);

impl Deployments {
    /// Build a table from one entry per defined deployment, in [`DeploymentId::ALL`] order.
    pub const fn new(entries: [ConsensusDeployment; DeploymentId::COUNT]) -> Self {
        Self(entries)
    }

    /// Table where every deployment is votable from genesis and never expires.
    pub const fn always_active(test_dummy_bit: u8, csv_bit: u8, segwit_bit: u8) -> Self {
        Self([
            ConsensusDeployment::always_active(test_dummy_bit),
            ConsensusDeployment::always_active(csv_bit),
            ConsensusDeployment::always_active(segwit_bit),
        ])
    }

    /// Entry for `id`.
    pub fn get(&self, id: DeploymentId) -> &ConsensusDeployment {
        &self.0[id.index()]
    }

    /// Iterate entries with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (DeploymentId, &ConsensusDeployment)> {
        DeploymentId::ALL.into_iter().zip(self.0.iter())
    }
}

impl Index<DeploymentId> for Deployments {
    type Output = ConsensusDeployment;

    fn index(&self, id: DeploymentId) -> &ConsensusDeployment {
        self.get(id)
    }
}
