//! Client Policy
//!
//! Top-level configuration handed to the cluster client: connection pool
//! sizing, timeouts, idle eviction, tend interval, credentials, and one
//! default policy per operation kind.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::builder::PolicyFactory;
use crate::errors::{PolicyError, Result};
use crate::policy::{AnyPolicy, BatchPolicy, QueryPolicy, ReadPolicy, ScanPolicy, WritePolicy};
use crate::types::PolicyKind;

/// Default maximum synchronous connections per server node
pub const DEFAULT_MAX_CONNECTIONS_PER_NODE: i32 = 300;
/// Default timeout for opening a connection in milliseconds
pub const DEFAULT_CONNECT_TIMEOUT_MILLIS: i32 = 1000;
/// Default idle time in milliseconds after which pooled sockets are discarded
pub const DEFAULT_MAX_SOCKET_IDLE_MILLIS: i32 = 55_000;
/// Default interval between cluster tends in milliseconds
pub const DEFAULT_TEND_INTERVAL_MILLIS: i32 = 1000;

/// Client configuration
///
/// Embedded default policies are held behind [`Arc`]: materializing a
/// [`ClientPolicyBuilder`] shares them instead of copying. Use
/// [`Arc::make_mut`] to tune one without touching other holders.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientPolicy {
    /// Maximum synchronous connections per server node
    pub max_connections_per_node: i32,
    /// Timeout for the first connection to a host, in milliseconds
    pub connect_timeout_millis: i32,
    /// Pooled sockets idle longer than this are discarded, in milliseconds
    pub max_socket_idle_millis: i32,
    /// Fail on construction if no host can be reached
    pub fail_if_not_connected: bool,
    /// Interval between cluster tends, in milliseconds
    pub tend_interval_millis: i32,
    /// User name; only used when the cluster has security enabled
    pub user: Option<String>,
    /// Password; only used when the cluster has security enabled
    pub password: Option<String>,
    /// Default policy for reads
    pub read_policy_default: Option<Arc<ReadPolicy>>,
    /// Default policy for writes
    pub write_policy_default: Option<Arc<WritePolicy>>,
    /// Default policy for scans
    pub scan_policy_default: Option<Arc<ScanPolicy>>,
    /// Default policy for batch reads
    pub batch_policy_default: Option<Arc<BatchPolicy>>,
    /// Default policy for queries
    pub query_policy_default: Option<Arc<QueryPolicy>>,
}

impl Default for ClientPolicy {
    fn default() -> Self {
        Self {
            max_connections_per_node: DEFAULT_MAX_CONNECTIONS_PER_NODE,
            connect_timeout_millis: DEFAULT_CONNECT_TIMEOUT_MILLIS,
            max_socket_idle_millis: DEFAULT_MAX_SOCKET_IDLE_MILLIS,
            fail_if_not_connected: true,
            tend_interval_millis: DEFAULT_TEND_INTERVAL_MILLIS,
            user: None,
            password: None,
            read_policy_default: None,
            write_policy_default: None,
            scan_policy_default: None,
            batch_policy_default: None,
            query_policy_default: None,
        }
    }
}

impl ClientPolicy {
    /// Creates a builder with every field at the library default
    pub fn builder() -> ClientPolicyBuilder {
        ClientPolicyBuilder::new()
    }

    /// Returns a copy of the default policy for `kind`, if one was set
    pub fn default_policy(&self, kind: PolicyKind) -> Option<AnyPolicy> {
        match kind {
            PolicyKind::Read => self.read_policy_default.as_deref().map(|p| p.clone().into()),
            PolicyKind::Write => self.write_policy_default.as_deref().map(|p| p.clone().into()),
            PolicyKind::Scan => self.scan_policy_default.as_deref().map(|p| p.clone().into()),
            PolicyKind::Batch => self.batch_policy_default.as_deref().map(|p| p.clone().into()),
            PolicyKind::Query => self.query_policy_default.as_deref().map(|p| p.clone().into()),
        }
    }
}

impl fmt::Debug for ClientPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientPolicy")
            .field("max_connections_per_node", &self.max_connections_per_node)
            .field("connect_timeout_millis", &self.connect_timeout_millis)
            .field("max_socket_idle_millis", &self.max_socket_idle_millis)
            .field("fail_if_not_connected", &self.fail_if_not_connected)
            .field("tend_interval_millis", &self.tend_interval_millis)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("read_policy_default", &self.read_policy_default)
            .field("write_policy_default", &self.write_policy_default)
            .field("scan_policy_default", &self.scan_policy_default)
            .field("batch_policy_default", &self.batch_policy_default)
            .field("query_policy_default", &self.query_policy_default)
            .finish()
    }
}

/// Builder for [`ClientPolicy`]
///
/// Default policy slots are typed, so assigning a policy of the wrong kind
/// does not compile:
///
/// ```compile_fail
/// use aerospike_policy::{ClientPolicyBuilder, WritePolicyBuilder};
///
/// let write = WritePolicyBuilder::new().materialize();
/// ClientPolicyBuilder::new().set_scan_policy_default(write);
/// ```
///
/// Loaders that only know the slot at runtime use
/// [`ClientPolicyBuilder::set_default_policy`], which reports the mismatch as
/// [`PolicyError::TypeMismatch`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientPolicyBuilder {
    draft: ClientPolicy,
}

impl ClientPolicyBuilder {
    /// Creates a builder with every field at the library default
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current draft without materializing it
    pub fn draft(&self) -> &ClientPolicy {
        &self.draft
    }

    /// Returns a new client policy holding the draft's current values
    ///
    /// Scalars and credentials are copied; embedded default policies are
    /// shared by reference.
    pub fn materialize(&self) -> ClientPolicy {
        tracing::debug!(
            max_connections_per_node = self.draft.max_connections_per_node,
            connect_timeout_millis = self.draft.connect_timeout_millis,
            tend_interval_millis = self.draft.tend_interval_millis,
            "materialized client policy"
        );
        self.draft.clone()
    }

    /// Sets the maximum synchronous connections per server node
    pub fn set_max_connections_per_node(&mut self, max_connections: i32) -> &mut Self {
        self.draft.max_connections_per_node = max_connections;
        self
    }

    /// Sets the timeout for the first connection to a host, in milliseconds
    pub fn set_connect_timeout(&mut self, timeout_millis: i32) -> &mut Self {
        self.draft.connect_timeout_millis = timeout_millis;
        self
    }

    /// Sets the idle time after which pooled sockets are discarded, in milliseconds
    pub fn set_max_socket_idle(&mut self, idle_millis: i32) -> &mut Self {
        self.draft.max_socket_idle_millis = idle_millis;
        self
    }

    /// Sets whether failing to reach any host is fatal
    pub fn set_fail_if_not_connected(&mut self, fail_if_not_connected: bool) -> &mut Self {
        self.draft.fail_if_not_connected = fail_if_not_connected;
        self
    }

    /// Sets the interval between cluster tends, in milliseconds
    pub fn set_tend_interval(&mut self, interval_millis: i32) -> &mut Self {
        self.draft.tend_interval_millis = interval_millis;
        self
    }

    /// Sets the user name for clusters with security enabled
    pub fn set_user(&mut self, user: impl Into<String>) -> &mut Self {
        self.draft.user = Some(user.into());
        self
    }

    /// Sets the password for clusters with security enabled
    pub fn set_password(&mut self, password: impl Into<String>) -> &mut Self {
        self.draft.password = Some(password.into());
        self
    }

    /// Sets the default read policy
    pub fn set_read_policy_default(&mut self, policy: impl Into<Arc<ReadPolicy>>) -> &mut Self {
        tracing::debug!(slot = %PolicyKind::Read, "assigned default policy");
        self.draft.read_policy_default = Some(policy.into());
        self
    }

    /// Sets the default write policy
    pub fn set_write_policy_default(&mut self, policy: impl Into<Arc<WritePolicy>>) -> &mut Self {
        tracing::debug!(slot = %PolicyKind::Write, "assigned default policy");
        self.draft.write_policy_default = Some(policy.into());
        self
    }

    /// Sets the default scan policy
    pub fn set_scan_policy_default(&mut self, policy: impl Into<Arc<ScanPolicy>>) -> &mut Self {
        tracing::debug!(slot = %PolicyKind::Scan, "assigned default policy");
        self.draft.scan_policy_default = Some(policy.into());
        self
    }

    /// Sets the default batch policy
    pub fn set_batch_policy_default(&mut self, policy: impl Into<Arc<BatchPolicy>>) -> &mut Self {
        tracing::debug!(slot = %PolicyKind::Batch, "assigned default policy");
        self.draft.batch_policy_default = Some(policy.into());
        self
    }

    /// Sets the default query policy
    pub fn set_query_policy_default(&mut self, policy: impl Into<Arc<QueryPolicy>>) -> &mut Self {
        tracing::debug!(slot = %PolicyKind::Query, "assigned default policy");
        self.draft.query_policy_default = Some(policy.into());
        self
    }

    /// Sets the default policy for a slot chosen at runtime
    ///
    /// Fails with [`PolicyError::TypeMismatch`] if `policy` is not of kind
    /// `slot`; the draft is left unchanged in that case.
    pub fn set_default_policy(
        &mut self,
        slot: PolicyKind,
        policy: impl Into<AnyPolicy>,
    ) -> Result<&mut Self> {
        let policy = policy.into();
        let found = policy.kind();
        if found != slot {
            tracing::warn!(%slot, %found, "rejected default policy of the wrong kind");
            return Err(PolicyError::TypeMismatch { slot, found });
        }

        match policy {
            AnyPolicy::Read(p) => {
                self.set_read_policy_default(p);
            }
            AnyPolicy::Write(p) => {
                self.set_write_policy_default(p);
            }
            AnyPolicy::Scan(p) => {
                self.set_scan_policy_default(p);
            }
            AnyPolicy::Batch(p) => {
                self.set_batch_policy_default(p);
            }
            AnyPolicy::Query(p) => {
                self.set_query_policy_default(p);
            }
        }
        Ok(self)
    }
}

impl PolicyFactory for ClientPolicyBuilder {
    type Object = ClientPolicy;

    fn object(&self) -> ClientPolicy {
        self.materialize()
    }
}
