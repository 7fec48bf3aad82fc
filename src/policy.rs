//! Operation Policies
//!
//! This module defines the per-operation policy objects. Every specialized
//! policy embeds a [`BasePolicy`] and adds its own fields; the embedded base
//! is reachable through the [`OperationPolicy`] trait so that shared setters
//! can be written once.
//!
//! Numeric fields use the storage types of the wrapped client library and are
//! not range-checked here. Interpreting a negative timeout or a zero retry
//! count is left to the consuming network client.

use serde::{Deserialize, Serialize};

use crate::types::{
    CommitLevel, ConsistencyLevel, GenerationPolicy, PolicyKind, Priority, RecordExistsAction,
    Replica,
};

/// Default total transaction timeout in milliseconds (0 means no timeout)
pub const DEFAULT_TIMEOUT_MILLIS: i32 = 0;
/// Default number of retries after the initial attempt
pub const DEFAULT_MAX_RETRIES: i32 = 1;
/// Default pause between retries in milliseconds
pub const DEFAULT_SLEEP_BETWEEN_RETRIES_MILLIS: i32 = 500;
/// Default percentage of data scanned
pub const DEFAULT_SCAN_PERCENT: i32 = 100;
/// Default maximum concurrent batch threads
pub const DEFAULT_MAX_CONCURRENT_THREADS: i32 = 1;
/// Default query record queue size
pub const DEFAULT_RECORD_QUEUE_SIZE: i32 = 5000;

/// Common interface of every operation policy
///
/// Implementors expose the embedded [`BasePolicy`] and the kind of operation
/// they configure.
pub trait OperationPolicy: Clone + Default + PartialEq + Send + Sync + 'static {
    /// Operation kind this policy configures
    const KIND: PolicyKind;

    /// Returns the shared base fields
    fn base(&self) -> &BasePolicy;

    /// Returns the shared base fields for mutation
    fn base_mut(&mut self) -> &mut BasePolicy;
}

/// Fields shared by all operation policies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasePolicy {
    /// Request priority on the server
    pub priority: Priority,
    /// Number of replicas consulted on read
    pub consistency_level: ConsistencyLevel,
    /// Replica routing for reads
    pub replica: Replica,
    /// Total transaction timeout in milliseconds
    pub timeout_millis: i32,
    /// Maximum number of retries before aborting
    pub max_retries: i32,
    /// Pause between retries in milliseconds
    pub sleep_between_retries_millis: i32,
    /// Whether a timeout should trigger a retry
    pub retry_on_timeout: bool,
    /// Whether the user key is sent with the digest on writes
    pub send_key: bool,
}

impl Default for BasePolicy {
    fn default() -> Self {
        Self {
            priority: Priority::default(),
            consistency_level: ConsistencyLevel::default(),
            replica: Replica::default(),
            timeout_millis: DEFAULT_TIMEOUT_MILLIS,
            max_retries: DEFAULT_MAX_RETRIES,
            sleep_between_retries_millis: DEFAULT_SLEEP_BETWEEN_RETRIES_MILLIS,
            retry_on_timeout: false,
            send_key: false,
        }
    }
}

/// Read policy; reads use the base fields without additions
pub type ReadPolicy = BasePolicy;

impl OperationPolicy for BasePolicy {
    const KIND: PolicyKind = PolicyKind::Read;

    fn base(&self) -> &BasePolicy {
        self
    }

    fn base_mut(&mut self) -> &mut BasePolicy {
        self
    }
}

/// Policy for single-record write operations
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WritePolicy {
    /// Shared base fields
    #[serde(flatten)]
    pub base: BasePolicy,
    /// Behaviour when the record already exists
    pub record_exists_action: RecordExistsAction,
    /// How the record generation is checked
    pub generation_policy: GenerationPolicy,
    /// Replicas that must commit before success
    pub commit_level: CommitLevel,
    /// Expected generation, used with `generation_policy`
    pub generation: i32,
    /// Record time-to-live in seconds (0 uses the namespace default)
    pub expiration: i32,
    /// Return a result for every operation in a multi-op command
    pub respond_all_ops: bool,
    /// Leave a tombstone on delete
    pub durable_delete: bool,
}

impl OperationPolicy for WritePolicy {
    const KIND: PolicyKind = PolicyKind::Write;

    fn base(&self) -> &BasePolicy {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BasePolicy {
        &mut self.base
    }
}

/// Policy for scan operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanPolicy {
    /// Shared base fields
    #[serde(flatten)]
    pub base: BasePolicy,
    /// Percent of data to scan
    pub scan_percent: i32,
    /// Issue scan requests to nodes in parallel instead of serially
    pub concurrent_nodes: bool,
    /// Retrieve bin data; when false only digests are returned
    pub include_bin_data: bool,
    /// Maximum nodes scanned in parallel at any point in time.
    ///
    /// Only consulted when `concurrent_nodes` is true. With 16 nodes and a
    /// value of 8, eight nodes are scanned at once and each completion starts
    /// the next node. Zero scans all nodes in parallel.
    pub max_concurrent_nodes: i32,
    /// Abort the scan if the cluster is changing
    pub fail_on_cluster_change: bool,
}

impl Default for ScanPolicy {
    fn default() -> Self {
        Self {
            base: BasePolicy::default(),
            scan_percent: DEFAULT_SCAN_PERCENT,
            concurrent_nodes: true,
            include_bin_data: true,
            max_concurrent_nodes: 0,
            fail_on_cluster_change: true,
        }
    }
}

impl OperationPolicy for ScanPolicy {
    const KIND: PolicyKind = PolicyKind::Scan;

    fn base(&self) -> &BasePolicy {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BasePolicy {
        &mut self.base
    }
}

/// Policy for batch reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchPolicy {
    /// Shared base fields
    #[serde(flatten)]
    pub base: BasePolicy,
    /// Maximum threads issuing per-node batch requests (0 means one per node)
    pub max_concurrent_threads: i32,
    /// Use the older direct batch protocol
    pub use_batch_direct: bool,
    /// Process in-memory keys inline on the server's service thread
    pub allow_inline: bool,
    /// Send the set name with every key
    pub send_set_name: bool,
}

impl Default for BatchPolicy {
    fn default() -> Self {
        Self {
            base: BasePolicy::default(),
            max_concurrent_threads: DEFAULT_MAX_CONCURRENT_THREADS,
            use_batch_direct: false,
            allow_inline: true,
            send_set_name: false,
        }
    }
}

impl OperationPolicy for BatchPolicy {
    const KIND: PolicyKind = PolicyKind::Batch;

    fn base(&self) -> &BasePolicy {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BasePolicy {
        &mut self.base
    }
}

/// Policy for secondary-index queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryPolicy {
    /// Shared base fields
    #[serde(flatten)]
    pub base: BasePolicy,
    /// Maximum nodes queried in parallel (0 queries all nodes at once)
    pub max_concurrent_nodes: i32,
    /// Records buffered before producers block
    pub record_queue_size: i32,
}

impl Default for QueryPolicy {
    fn default() -> Self {
        Self {
            base: BasePolicy::default(),
            max_concurrent_nodes: 0,
            record_queue_size: DEFAULT_RECORD_QUEUE_SIZE,
        }
    }
}

impl OperationPolicy for QueryPolicy {
    const KIND: PolicyKind = PolicyKind::Query;

    fn base(&self) -> &BasePolicy {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BasePolicy {
        &mut self.base
    }
}

/// A policy of any operation kind
///
/// Used where the kind is only known at runtime, such as a declarative loader
/// assigning default policies by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyPolicy {
    /// A read policy
    Read(ReadPolicy),
    /// A write policy
    Write(WritePolicy),
    /// A scan policy
    Scan(ScanPolicy),
    /// A batch policy
    Batch(BatchPolicy),
    /// A query policy
    Query(QueryPolicy),
}

impl AnyPolicy {
    /// Returns the operation kind of the wrapped policy
    pub fn kind(&self) -> PolicyKind {
        match self {
            AnyPolicy::Read(_) => PolicyKind::Read,
            AnyPolicy::Write(_) => PolicyKind::Write,
            AnyPolicy::Scan(_) => PolicyKind::Scan,
            AnyPolicy::Batch(_) => PolicyKind::Batch,
            AnyPolicy::Query(_) => PolicyKind::Query,
        }
    }

    /// Returns the shared base fields of the wrapped policy
    pub fn base(&self) -> &BasePolicy {
        match self {
            AnyPolicy::Read(p) => p.base(),
            AnyPolicy::Write(p) => p.base(),
            AnyPolicy::Scan(p) => p.base(),
            AnyPolicy::Batch(p) => p.base(),
            AnyPolicy::Query(p) => p.base(),
        }
    }
}

impl From<ReadPolicy> for AnyPolicy {
    fn from(policy: ReadPolicy) -> Self {
        AnyPolicy::Read(policy)
    }
}

impl From<WritePolicy> for AnyPolicy {
    fn from(policy: WritePolicy) -> Self {
        AnyPolicy::Write(policy)
    }
}

impl From<ScanPolicy> for AnyPolicy {
    fn from(policy: ScanPolicy) -> Self {
        AnyPolicy::Scan(policy)
    }
}

impl From<BatchPolicy> for AnyPolicy {
    fn from(policy: BatchPolicy) -> Self {
        AnyPolicy::Batch(policy)
    }
}

impl From<QueryPolicy> for AnyPolicy {
    fn from(policy: QueryPolicy) -> Self {
        AnyPolicy::Query(policy)
    }
}
