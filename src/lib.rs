//! Aerospike Policy Builders
//!
//! Declarative builders for the policy objects that parameterize an Aerospike
//! client: connection limits, timeouts, idle eviction, credentials, and
//! per-operation defaults for reads, writes, scans, batches and queries.
//!
//! # Features
//!
//! - One builder per operation kind, sharing the base policy setters
//! - Client policy builder with typed default-policy slots
//! - Every materialization returns a fresh, independent value
//! - Runtime slot assignment for declarative loaders, with kind checking
//! - Serde support for every policy type
//!
//! # Example
//!
//! ```
//! use aerospike_policy::{ClientPolicyBuilder, ReadPolicyBuilder, ScanPolicyBuilder};
//!
//! let mut read = ReadPolicyBuilder::new();
//! read.set_timeout(50).set_max_retries(2);
//!
//! let mut scan = ScanPolicyBuilder::new();
//! scan.set_concurrent_nodes(true).set_max_concurrent_nodes(8);
//!
//! let mut client = ClientPolicyBuilder::new();
//! client
//!     .set_max_connections_per_node(500)
//!     .set_user("alice")
//!     .set_password("secret")
//!     .set_read_policy_default(read.materialize())
//!     .set_scan_policy_default(scan.materialize());
//!
//! let policy = client.materialize();
//! assert_eq!(policy.max_connections_per_node, 500);
//! assert_eq!(policy.scan_policy_default.unwrap().max_concurrent_nodes, 8);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod builder;
mod client_policy;
mod errors;
mod policy;
mod types;

// Re-export public API
pub use builder::{
    BasePolicyBuilder, BatchPolicyBuilder, PolicyBuilder, PolicyFactory, QueryPolicyBuilder,
    ReadPolicyBuilder, ScanPolicyBuilder, WritePolicyBuilder,
};
pub use client_policy::{
    ClientPolicy, ClientPolicyBuilder, DEFAULT_CONNECT_TIMEOUT_MILLIS,
    DEFAULT_MAX_CONNECTIONS_PER_NODE, DEFAULT_MAX_SOCKET_IDLE_MILLIS, DEFAULT_TEND_INTERVAL_MILLIS,
};
pub use errors::{PolicyError, Result};
pub use policy::{
    AnyPolicy, BasePolicy, BatchPolicy, OperationPolicy, QueryPolicy, ReadPolicy, ScanPolicy,
    WritePolicy, DEFAULT_MAX_CONCURRENT_THREADS, DEFAULT_MAX_RETRIES, DEFAULT_RECORD_QUEUE_SIZE,
    DEFAULT_SCAN_PERCENT, DEFAULT_SLEEP_BETWEEN_RETRIES_MILLIS, DEFAULT_TIMEOUT_MILLIS,
};
pub use types::{
    CommitLevel, ConsistencyLevel, GenerationPolicy, PolicyKind, Priority, RecordExistsAction,
    Replica,
};
