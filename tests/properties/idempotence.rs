//! Property tests: a second defaulting pass changes nothing.

use std::fmt::Debug;

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use apidefaults::domain::entities::{LimitRange, LimitRangeSpec};
use apidefaults::{ApiObject, Defaulter};

use crate::strategies::*;

fn check_idempotent<T>(object: T) -> Result<(), TestCaseError>
where
    T: ApiObject + Clone + PartialEq + Debug,
{
    let defaulter = Defaulter::default();
    let once = defaulter.defaulted(object);
    let twice = defaulter.defaulted(once.clone());
    prop_assert_eq!(once, twice);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: defaulting a pod twice equals defaulting it once.
    #[test]
    fn property_pod_defaulting_is_idempotent(pod in pod()) {
        check_idempotent(pod)?;
    }

    /// PROPERTY: defaulting a service twice equals defaulting it once.
    #[test]
    fn property_service_defaulting_is_idempotent(service in service()) {
        check_idempotent(service)?;
    }

    /// PROPERTY: defaulting a limit range twice equals defaulting it once.
    #[test]
    fn property_limit_range_defaulting_is_idempotent(
        limits in proptest::collection::vec(limit_range_item(), 0..=3),
    ) {
        check_idempotent(LimitRange { spec: LimitRangeSpec { limits }, ..LimitRange::default() })?;
    }

    /// PROPERTY: label propagation and replicas settle after one pass.
    #[test]
    fn property_controller_defaulting_is_idempotent(controller in replication_controller()) {
        check_idempotent(controller)?;
    }

    #[test]
    fn property_node_defaulting_is_idempotent(node in node()) {
        check_idempotent(node)?;
    }

    #[test]
    fn property_endpoints_defaulting_is_idempotent(endpoints in endpoints()) {
        check_idempotent(endpoints)?;
    }

    #[test]
    fn property_persistent_volume_defaulting_is_idempotent(volume in persistent_volume()) {
        check_idempotent(volume)?;
    }

    #[test]
    fn property_claim_defaulting_is_idempotent(claim in persistent_volume_claim()) {
        check_idempotent(claim)?;
    }

    #[test]
    fn property_namespace_defaulting_is_idempotent(namespace in namespace()) {
        check_idempotent(namespace)?;
    }

    #[test]
    fn property_secret_defaulting_is_idempotent(secret in secret()) {
        check_idempotent(secret)?;
    }

    #[test]
    fn property_config_map_defaulting_is_idempotent(config_map in config_map()) {
        check_idempotent(config_map)?;
    }

    /// PROPERTY: forced streams stay forced.
    #[test]
    fn property_stream_options_defaulting_is_idempotent(
        exec in exec_options(),
        attach in attach_options(),
    ) {
        check_idempotent(exec)?;
        check_idempotent(attach)?;
    }
}
