//! Scenario: A pod on the host network
//!
//! Journey: A pod asks for host networking and declares container ports
//! without host ports. Requests are copied from limits.

use apidefaults::{Defaulter, Manifest};

use crate::common::*;

#[test]
fn scenario_host_ports_follow_container_ports() {
    let mut manifest = Manifest::from_yaml_str(HOST_NETWORK_POD).unwrap();
    manifest.apply_defaults(&Defaulter::default());

    let Manifest::Pod(pod) = manifest else {
        panic!("expected a pod");
    };
    let container = &pod.spec.containers[0];
    assert_eq!(container.ports[0].host_port, 80);
    assert_eq!(
        container.resources.requests,
        container.resources.limits,
        "requests should mirror limits"
    );
}

#[test]
fn scenario_pod_network_disabled_keeps_host_ports_unset() {
    let without_host_network = HOST_NETWORK_POD.replace("hostNetwork: true", "hostNetwork: false");
    let mut manifest = Manifest::from_yaml_str(&without_host_network).unwrap();
    manifest.apply_defaults(&Defaulter::default());

    let Manifest::Pod(pod) = manifest else {
        panic!("expected a pod");
    };
    assert_eq!(pod.spec.containers[0].ports[0].host_port, 0);
}
