//! Operation Policy Builders
//!
//! [`PolicyBuilder`] accumulates setter calls against a draft policy and
//! hands out independent copies of it on [`PolicyBuilder::materialize`].
//! Setters for the shared base fields are defined once for every policy kind;
//! kind-specific setters live in separate impl blocks on the concrete builder
//! types, so specialization only ever adds setters.

use crate::policy::{
    BasePolicy, BatchPolicy, OperationPolicy, QueryPolicy, ReadPolicy, ScanPolicy, WritePolicy,
};
use crate::types::{
    CommitLevel, ConsistencyLevel, GenerationPolicy, Priority, RecordExistsAction, Replica,
};

/// A source of freshly built configuration objects
///
/// Implementors never hand out a shared instance: every call to
/// [`PolicyFactory::object`] produces a new value that the caller may tune
/// without affecting the factory or other callers.
pub trait PolicyFactory {
    /// Type of the produced object
    type Object;

    /// Produces a new object from the factory's current state
    fn object(&self) -> Self::Object;

    /// Whether every call returns the same shared instance; always false here
    fn is_singleton(&self) -> bool {
        false
    }

    /// Returns the type name of the produced object
    fn object_type(&self) -> &'static str {
        std::any::type_name::<Self::Object>()
    }
}

/// Builder for an operation policy of kind `P`
///
/// # Example
///
/// ```
/// use aerospike_policy::ScanPolicyBuilder;
///
/// let mut builder = ScanPolicyBuilder::new();
/// builder.set_timeout(500).set_concurrent_nodes(true);
///
/// let policy = builder.materialize();
/// assert_eq!(policy.base.timeout_millis, 500);
/// assert!(policy.concurrent_nodes);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolicyBuilder<P> {
    draft: P,
}

/// Builder for the general base policy
pub type BasePolicyBuilder = PolicyBuilder<BasePolicy>;
/// Builder for read policies
pub type ReadPolicyBuilder = PolicyBuilder<ReadPolicy>;
/// Builder for write policies
pub type WritePolicyBuilder = PolicyBuilder<WritePolicy>;
/// Builder for scan policies
pub type ScanPolicyBuilder = PolicyBuilder<ScanPolicy>;
/// Builder for batch policies
pub type BatchPolicyBuilder = PolicyBuilder<BatchPolicy>;
/// Builder for query policies
pub type QueryPolicyBuilder = PolicyBuilder<QueryPolicy>;

impl<P: OperationPolicy> PolicyBuilder<P> {
    /// Creates a builder with every field at the library default
    pub fn new() -> Self {
        Self {
            draft: P::default(),
        }
    }

    /// Creates a builder seeded from an existing policy
    pub fn from_policy(policy: P) -> Self {
        Self { draft: policy }
    }

    /// Returns the current draft without materializing it
    pub fn draft(&self) -> &P {
        &self.draft
    }

    /// Returns a new policy holding the draft's current values
    ///
    /// The builder stays usable. Later setter calls do not affect policies
    /// that were already materialized.
    pub fn materialize(&self) -> P {
        let kind = P::KIND;
        tracing::debug!(%kind, "materialized operation policy");
        self.draft.clone()
    }

    fn base(&mut self) -> &mut BasePolicy {
        self.draft.base_mut()
    }

    /// Sets the request priority
    pub fn set_priority(&mut self, priority: Priority) -> &mut Self {
        self.base().priority = priority;
        self
    }

    /// Sets how many replicas are consulted on read
    pub fn set_consistency_level(&mut self, level: ConsistencyLevel) -> &mut Self {
        self.base().consistency_level = level;
        self
    }

    /// Sets the replica routing for reads
    pub fn set_replica(&mut self, replica: Replica) -> &mut Self {
        self.base().replica = replica;
        self
    }

    /// Sets the total transaction timeout in milliseconds
    pub fn set_timeout(&mut self, timeout_millis: i32) -> &mut Self {
        self.base().timeout_millis = timeout_millis;
        self
    }

    /// Sets the maximum number of retries
    pub fn set_max_retries(&mut self, max_retries: i32) -> &mut Self {
        self.base().max_retries = max_retries;
        self
    }

    /// Sets the pause between retries in milliseconds
    pub fn set_sleep_between_retries(&mut self, sleep_millis: i32) -> &mut Self {
        self.base().sleep_between_retries_millis = sleep_millis;
        self
    }

    /// Sets whether a timeout triggers a retry
    pub fn set_retry_on_timeout(&mut self, retry_on_timeout: bool) -> &mut Self {
        self.base().retry_on_timeout = retry_on_timeout;
        self
    }

    /// Sets whether the user key is sent along with the digest
    pub fn set_send_key(&mut self, send_key: bool) -> &mut Self {
        self.base().send_key = send_key;
        self
    }
}

impl<P: OperationPolicy> PolicyFactory for PolicyBuilder<P> {
    type Object = P;

    fn object(&self) -> P {
        self.materialize()
    }
}

impl PolicyBuilder<WritePolicy> {
    /// Sets the behaviour when the record already exists
    pub fn set_record_exists_action(&mut self, action: RecordExistsAction) -> &mut Self {
        self.draft.record_exists_action = action;
        self
    }

    /// Sets how the record generation is checked
    pub fn set_generation_policy(&mut self, policy: GenerationPolicy) -> &mut Self {
        self.draft.generation_policy = policy;
        self
    }

    /// Sets which replicas must commit before success
    pub fn set_commit_level(&mut self, level: CommitLevel) -> &mut Self {
        self.draft.commit_level = level;
        self
    }

    /// Sets the expected record generation
    pub fn set_generation(&mut self, generation: i32) -> &mut Self {
        self.draft.generation = generation;
        self
    }

    /// Sets the record time-to-live in seconds
    pub fn set_expiration(&mut self, expiration: i32) -> &mut Self {
        self.draft.expiration = expiration;
        self
    }

    /// Sets whether every operation in a multi-op command returns a result
    pub fn set_respond_all_ops(&mut self, respond_all_ops: bool) -> &mut Self {
        self.draft.respond_all_ops = respond_all_ops;
        self
    }

    /// Sets whether deletes leave a tombstone
    pub fn set_durable_delete(&mut self, durable_delete: bool) -> &mut Self {
        self.draft.durable_delete = durable_delete;
        self
    }
}

impl PolicyBuilder<ScanPolicy> {
    /// Sets the percent of data to scan
    pub fn set_scan_percent(&mut self, scan_percent: i32) -> &mut Self {
        self.draft.scan_percent = scan_percent;
        self
    }

    /// Sets whether scan requests are issued to nodes in parallel
    pub fn set_concurrent_nodes(&mut self, concurrent_nodes: bool) -> &mut Self {
        self.draft.concurrent_nodes = concurrent_nodes;
        self
    }

    /// Sets whether bin data is retrieved; when false only digests are returned
    pub fn set_include_bin_data(&mut self, include_bin_data: bool) -> &mut Self {
        self.draft.include_bin_data = include_bin_data;
        self
    }

    /// Sets the maximum nodes scanned in parallel
    ///
    /// Stored as given regardless of `concurrent_nodes`, which decides
    /// whether the value is consulted at all. Zero means all nodes.
    pub fn set_max_concurrent_nodes(&mut self, max_concurrent_nodes: i32) -> &mut Self {
        self.draft.max_concurrent_nodes = max_concurrent_nodes;
        self
    }

    /// Sets whether the scan aborts while the cluster is changing
    pub fn set_fail_on_cluster_change(&mut self, fail_on_cluster_change: bool) -> &mut Self {
        self.draft.fail_on_cluster_change = fail_on_cluster_change;
        self
    }
}

impl PolicyBuilder<BatchPolicy> {
    /// Sets the maximum threads issuing per-node batch requests
    pub fn set_max_concurrent_threads(&mut self, max_concurrent_threads: i32) -> &mut Self {
        self.draft.max_concurrent_threads = max_concurrent_threads;
        self
    }

    /// Sets whether the older direct batch protocol is used
    pub fn set_use_batch_direct(&mut self, use_batch_direct: bool) -> &mut Self {
        self.draft.use_batch_direct = use_batch_direct;
        self
    }

    /// Sets whether in-memory keys may be processed inline on the server
    pub fn set_allow_inline(&mut self, allow_inline: bool) -> &mut Self {
        self.draft.allow_inline = allow_inline;
        self
    }

    /// Sets whether the set name is sent with every key
    pub fn set_send_set_name(&mut self, send_set_name: bool) -> &mut Self {
        self.draft.send_set_name = send_set_name;
        self
    }
}

impl PolicyBuilder<QueryPolicy> {
    /// Sets the maximum nodes queried in parallel (0 means all nodes)
    pub fn set_max_concurrent_nodes(&mut self, max_concurrent_nodes: i32) -> &mut Self {
        self.draft.max_concurrent_nodes = max_concurrent_nodes;
        self
    }

    /// Sets how many records are buffered before producers block
    pub fn set_record_queue_size(&mut self, record_queue_size: i32) -> &mut Self {
        self.draft.record_queue_size = record_queue_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_setters_write_through_to_embedded_base() {
        let mut builder = WritePolicyBuilder::new();
        builder.set_timeout(250).set_commit_level(CommitLevel::CommitMaster);

        assert_eq!(builder.draft().base.timeout_millis, 250);
        assert_eq!(builder.draft().commit_level, CommitLevel::CommitMaster);
    }

    #[test]
    fn factory_is_never_singleton() {
        assert!(!QueryPolicyBuilder::new().is_singleton());
        assert!(BatchPolicyBuilder::new().object_type().ends_with("BatchPolicy"));
    }
}
