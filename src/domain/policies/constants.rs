//! Constant defaults
//!
//! Each function fills the unset fields of one object type with a fixed
//! value (or a value taken from the policy config). None of them looks at
//! any other field.

use std::collections::BTreeMap;

use crate::config::{ContainerPolicy, FieldSelectorPolicy, PodPolicy, ProbePolicy, VolumePolicy};
use crate::domain::entities::{
    ClaimPhase, ConfigMap, Container, ContainerPort, EmptyDirVolumeSource, Endpoints,
    HttpGetAction, IscsiVolumeSource, NamespacePhase, NamespaceStatus, ObjectFieldSelector,
    PersistentVolume, PersistentVolumeClaim, PodAttachOptions, PodExecOptions,
    PodSecurityContext, PodSpec, Probe, Protocol, ReclaimPolicy, ReplicationController, Secret,
    SecretType, ServiceAffinity, ServiceSpec, ServiceType, UriScheme, Volume, VolumePhase,
};

/// Stdout and stderr are always streamed. A plain bool cannot tell unset
/// from an explicit `false`, so both are forced on.
pub fn default_exec_streams(options: &mut PodExecOptions) {
    options.stdout = true;
    options.stderr = true;
}

/// See [`default_exec_streams`].
pub fn default_attach_streams(options: &mut PodAttachOptions) {
    options.stdout = true;
    options.stderr = true;
}

pub fn default_replicas(controller: &mut ReplicationController, replicas: i32) {
    controller.spec.replicas.get_or_insert(replicas);
}

/// A volume with no source at all becomes an empty directory.
pub fn default_volume_source(volume: &mut Volume) {
    if volume.source.is_unspecified() {
        volume.source.empty_dir = Some(EmptyDirVolumeSource::default());
    }
}

pub fn default_container_port_protocol(port: &mut ContainerPort) {
    port.protocol.get_or_insert(Protocol::Tcp);
}

pub fn default_termination_message_path(container: &mut Container, policy: &ContainerPolicy) {
    if container.termination_message_path.is_empty() {
        container.termination_message_path = policy.termination_message_path.clone();
    }
}

pub fn default_service_spec(spec: &mut ServiceSpec) {
    spec.session_affinity.get_or_insert(ServiceAffinity::None);
    spec.service_type.get_or_insert(ServiceType::ClusterIP);
}

pub fn default_pod_spec(spec: &mut PodSpec, policy: &PodPolicy) {
    spec.dns_policy.get_or_insert(policy.dns_policy);
    spec.restart_policy.get_or_insert(policy.restart_policy);
    spec.security_context.get_or_insert_with(PodSecurityContext::default);
    spec.termination_grace_period_seconds.get_or_insert(policy.termination_grace_period_seconds);
    if spec.network_mode.is_empty() {
        spec.network_mode = policy.network_mode.clone();
    }
}

pub fn default_probe(probe: &mut Probe, policy: &ProbePolicy) {
    if probe.timeout_seconds == 0 {
        probe.timeout_seconds = policy.timeout_seconds;
    }
    if probe.period_seconds == 0 {
        probe.period_seconds = policy.period_seconds;
    }
    if probe.success_threshold == 0 {
        probe.success_threshold = policy.success_threshold;
    }
    if probe.failure_threshold == 0 {
        probe.failure_threshold = policy.failure_threshold;
    }
}

pub fn default_secret_type(secret: &mut Secret) {
    secret.secret_type.get_or_insert(SecretType::Opaque);
}

pub fn default_persistent_volume(volume: &mut PersistentVolume) {
    volume.status.phase.get_or_insert(VolumePhase::Pending);
    volume
        .spec
        .persistent_volume_reclaim_policy
        .get_or_insert(ReclaimPolicy::Retain);
}

pub fn default_claim_phase(claim: &mut PersistentVolumeClaim) {
    claim.status.phase.get_or_insert(ClaimPhase::Pending);
}

pub fn default_iscsi_interface(iscsi: &mut IscsiVolumeSource, policy: &VolumePolicy) {
    if iscsi.iscsi_interface.is_empty() {
        iscsi.iscsi_interface = policy.iscsi_interface.clone();
    }
}

pub fn default_endpoint_protocols(endpoints: &mut Endpoints) {
    for port in endpoints
        .subsets
        .iter_mut()
        .flat_map(|subset| subset.ports.iter_mut())
    {
        port.protocol.get_or_insert(Protocol::Tcp);
    }
}

pub fn default_http_get(action: &mut HttpGetAction) {
    if action.path.is_empty() {
        action.path = "/".to_string();
    }
    action.scheme.get_or_insert(UriScheme::Http);
}

pub fn default_namespace_phase(status: &mut NamespaceStatus) {
    status.phase.get_or_insert(NamespacePhase::Active);
}

pub fn default_field_selector(selector: &mut ObjectFieldSelector, policy: &FieldSelectorPolicy) {
    if selector.api_version.is_empty() {
        selector.api_version = policy.api_version.clone();
    }
}

pub fn default_config_map_data(config_map: &mut ConfigMap) {
    config_map.data.get_or_insert_with(BTreeMap::new);
}
