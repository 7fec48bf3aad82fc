//! Property-based tests for the policy builders
//!
//! For arbitrary field values, a setter followed by materialize must read back
//! the same value, and materializing never depends on later mutation.

use aerospike_policy::*;
use proptest::prelude::*;

fn arb_priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Default),
        Just(Priority::Low),
        Just(Priority::Medium),
        Just(Priority::High),
    ]
}

fn arb_replica() -> impl Strategy<Value = Replica> {
    prop_oneof![
        Just(Replica::Master),
        Just(Replica::MasterProles),
        Just(Replica::Sequence),
        Just(Replica::Random),
    ]
}

fn arb_record_exists_action() -> impl Strategy<Value = RecordExistsAction> {
    prop_oneof![
        Just(RecordExistsAction::Update),
        Just(RecordExistsAction::UpdateOnly),
        Just(RecordExistsAction::Replace),
        Just(RecordExistsAction::ReplaceOnly),
        Just(RecordExistsAction::CreateOnly),
    ]
}

proptest! {
    /// Base setters read back verbatim on every specialized builder.
    #[test]
    fn prop_base_setters_read_back(
        timeout in any::<i32>(),
        retries in any::<i32>(),
        sleep in any::<i32>(),
        priority in arb_priority(),
        replica in arb_replica(),
        send_key in any::<bool>(),
    ) {
        let mut scan = ScanPolicyBuilder::new();
        scan.set_timeout(timeout)
            .set_max_retries(retries)
            .set_sleep_between_retries(sleep)
            .set_priority(priority)
            .set_replica(replica)
            .set_send_key(send_key);
        let scan = scan.materialize();

        let mut write = WritePolicyBuilder::new();
        write.set_timeout(timeout)
            .set_max_retries(retries)
            .set_sleep_between_retries(sleep)
            .set_priority(priority)
            .set_replica(replica)
            .set_send_key(send_key);
        let write = write.materialize();

        prop_assert_eq!(scan.base.timeout_millis, timeout);
        prop_assert_eq!(scan.base.max_retries, retries);
        prop_assert_eq!(scan.base.sleep_between_retries_millis, sleep);
        prop_assert_eq!(scan.base.priority, priority);
        prop_assert_eq!(scan.base.replica, replica);
        prop_assert_eq!(scan.base.send_key, send_key);
        prop_assert_eq!(&scan.base, &write.base);
    }

    /// max_concurrent_nodes is stored verbatim whatever concurrent_nodes is.
    #[test]
    fn prop_max_concurrent_nodes_verbatim(
        concurrent in any::<bool>(),
        max_nodes in any::<i32>(),
    ) {
        let mut builder = ScanPolicyBuilder::new();
        builder.set_max_concurrent_nodes(max_nodes).set_concurrent_nodes(concurrent);
        let policy = builder.materialize();

        prop_assert_eq!(policy.concurrent_nodes, concurrent);
        prop_assert_eq!(policy.max_concurrent_nodes, max_nodes);
    }

    /// A materialized policy is unaffected by later setter calls.
    #[test]
    fn prop_materialized_write_policy_frozen(
        first in any::<i32>(),
        second in any::<i32>(),
        action in arb_record_exists_action(),
    ) {
        let mut builder = WritePolicyBuilder::new();
        builder.set_expiration(first).set_record_exists_action(action);
        let frozen = builder.materialize();

        builder.set_expiration(second).set_record_exists_action(RecordExistsAction::Replace);

        prop_assert_eq!(frozen.expiration, first);
        prop_assert_eq!(frozen.record_exists_action, action);
        prop_assert_eq!(builder.materialize().expiration, second);
    }

    /// Client scalars and credentials read back verbatim.
    #[test]
    fn prop_client_fields_read_back(
        max_conns in any::<i32>(),
        connect_timeout in any::<i32>(),
        idle in any::<i32>(),
        tend in any::<i32>(),
        fail in any::<bool>(),
        user in "[a-z]{0,16}",
        password in ".{0,32}",
    ) {
        let mut builder = ClientPolicyBuilder::new();
        builder
            .set_max_connections_per_node(max_conns)
            .set_connect_timeout(connect_timeout)
            .set_max_socket_idle(idle)
            .set_tend_interval(tend)
            .set_fail_if_not_connected(fail)
            .set_user(user.clone())
            .set_password(password.clone());
        let policy = builder.materialize();

        prop_assert_eq!(policy.max_connections_per_node, max_conns);
        prop_assert_eq!(policy.connect_timeout_millis, connect_timeout);
        prop_assert_eq!(policy.max_socket_idle_millis, idle);
        prop_assert_eq!(policy.tend_interval_millis, tend);
        prop_assert_eq!(policy.fail_if_not_connected, fail);
        prop_assert_eq!(policy.user, Some(user));
        prop_assert_eq!(policy.password, Some(password));
    }
}
