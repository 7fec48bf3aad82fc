//! Policy Enumerations
//!
//! This module defines the enumerated knobs shared by the operation policies,
//! along with [`PolicyKind`], which names each operation kind.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::PolicyError;

/// Priority of a request relative to other transactions on the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    /// Let the server decide
    #[default]
    Default,
    /// Run in a background thread
    Low,
    /// Run at medium priority
    Medium,
    /// Run in the foreground
    High,
}

/// How many replicas are consulted when reading a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsistencyLevel {
    /// Read a single replica
    #[default]
    ConsistencyOne,
    /// Read all replicas and return the most recent version
    ConsistencyAll,
}

/// Which replica of a partition a read is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Replica {
    /// Always use the node holding the master partition
    Master,
    /// Distribute reads across master and prole nodes round-robin
    MasterProles,
    /// Try the master first, then proles in sequence on retry
    #[default]
    Sequence,
    /// Distribute reads across all nodes at random
    Random,
}

/// Behaviour of a write when the record already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordExistsAction {
    /// Create or update the record, merging bins
    #[default]
    Update,
    /// Update only; fail if the record does not exist
    UpdateOnly,
    /// Create or replace the record
    Replace,
    /// Replace only; fail if the record does not exist
    ReplaceOnly,
    /// Create only; fail if the record exists
    CreateOnly,
}

/// How the record generation is checked on write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GenerationPolicy {
    /// Do not use the record generation
    #[default]
    None,
    /// Write only if the generation equals the expected value
    ExpectGenEqual,
    /// Write only if the expected generation is greater
    ExpectGenGt,
}

/// Replicas that must commit before a write succeeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommitLevel {
    /// Wait for master and all replicas
    #[default]
    CommitAll,
    /// Wait for the master only
    CommitMaster,
}

/// Operation kinds that carry their own default policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// Single-record reads
    Read,
    /// Single-record writes
    Write,
    /// Full namespace/set scans
    Scan,
    /// Multi-record batch reads
    Batch,
    /// Secondary-index queries
    Query,
}

impl PolicyKind {
    /// All kinds, in slot order
    pub const ALL: [PolicyKind; 5] = [
        PolicyKind::Read,
        PolicyKind::Write,
        PolicyKind::Scan,
        PolicyKind::Batch,
        PolicyKind::Query,
    ];

    /// Returns the lowercase name of this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Read => "read",
            PolicyKind::Write => "write",
            PolicyKind::Scan => "scan",
            PolicyKind::Batch => "batch",
            PolicyKind::Query => "query",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PolicyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PolicyError::UnknownPolicyKind(s.to_string()))
    }
}
