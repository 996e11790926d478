//! Policy table
//!
//! Which field of which type gets which default. The rules themselves live
//! in `constants` (fixed values) and `derivations` (values computed from
//! other fields); `register_defaults` is the only place they are wired into
//! a registry.

pub mod constants;
pub mod derivations;

use crate::config::PolicyConfig;
use crate::domain::entities::{
    Container, IscsiVolumeSource, ObjectFieldSelector, PodSpec, Probe,
    ReplicationController,
};
use crate::domain::registry::DefaulterRegistry;

pub use derivations::{image_tag, DEFAULT_IMAGE_TAG};

/// Register one procedure per rule of the policy table.
pub fn register_defaults(registry: &mut DefaulterRegistry, policy: &PolicyConfig) {
    registry
        .register("exec-streams", constants::default_exec_streams)
        .register("attach-streams", constants::default_attach_streams);

    let replicas = policy.controller.replicas;
    registry
        .register("template-labels", derivations::propagate_template_labels)
        .register("replicas", move |controller: &mut ReplicationController| {
            constants::default_replicas(controller, replicas)
        });

    registry
        .register("empty-volume-source", constants::default_volume_source)
        .register("container-port-protocol", constants::default_container_port_protocol);

    let container_policy = policy.container.clone();
    registry
        .register("image-pull-policy", derivations::default_image_pull_policy)
        .register(
            "termination-message-path",
            move |container: &mut Container| {
                constants::default_termination_message_path(container, &container_policy)
            },
        );

    registry
        .register("service-type", constants::default_service_spec)
        .register("service-ports", derivations::default_service_ports);

    registry.register("requests-from-limits", derivations::default_requests_from_limits);

    let pod_policy = policy.pod.clone();
    registry
        .register("pod-spec", move |spec: &mut PodSpec| {
            constants::default_pod_spec(spec, &pod_policy)
        })
        .register("host-network-ports", derivations::default_host_network_ports);

    let probe_policy = policy.probe.clone();
    registry.register("probe-timing", move |probe: &mut Probe| {
        constants::default_probe(probe, &probe_policy)
    });

    registry
        .register("secret-type", constants::default_secret_type)
        .register("persistent-volume", constants::default_persistent_volume)
        .register("claim-phase", constants::default_claim_phase);

    let volume_policy = policy.volume.clone();
    registry.register("iscsi-interface", move |iscsi: &mut IscsiVolumeSource| {
        constants::default_iscsi_interface(iscsi, &volume_policy)
    });

    registry
        .register("endpoint-protocols", constants::default_endpoint_protocols)
        .register("http-get", constants::default_http_get)
        .register("namespace-phase", constants::default_namespace_phase)
        .register("node-external-id", derivations::default_node_external_id)
        .register("allocatable", derivations::default_allocatable);

    let selector_policy = policy.field_selector.clone();
    registry.register(
        "field-selector-api-version",
        move |selector: &mut ObjectFieldSelector| {
            constants::default_field_selector(selector, &selector_policy)
        },
    );

    registry
        .register("limit-range-chain", derivations::default_limit_range_item)
        .register("config-map-data", constants::default_config_map_data);
}
