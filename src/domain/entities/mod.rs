//! Domain Entities
//!
//! The typed API object model the defaulting engine operates on. Unset
//! fields are `None`, an empty string, zero or an empty collection; the
//! policy table in `domain::policies` decides which of them get filled.

mod config_data;
mod container;
mod controller;
mod limit_range;
mod meta;
mod node;
mod pod;
mod service;
mod volume;

pub use config_data::{ConfigMap, Secret, SecretType};
pub use container::{
    Container, ContainerPort, EnvVar, EnvVarSource, ExecAction, Handler, HttpGetAction,
    KeySelector, Lifecycle, ObjectFieldSelector, Probe, Protocol, PullPolicy,
    ResourceRequirements, TcpSocketAction, UriScheme, VolumeMount,
};
pub use controller::{ReplicationController, ReplicationControllerSpec};
pub use limit_range::{LimitRange, LimitRangeItem, LimitRangeSpec, LimitType};
pub use meta::ObjectMeta;
pub use node::{Namespace, NamespacePhase, NamespaceSpec, NamespaceStatus, Node, NodeSpec, NodeStatus};
pub use pod::{
    DnsPolicy, Pod, PodAttachOptions, PodExecOptions, PodSecurityContext, PodSpec,
    PodTemplateSpec, RestartPolicy,
};
pub use service::{
    EndpointAddress, EndpointPort, EndpointSubset, Endpoints, Service, ServiceAffinity,
    ServicePort, ServiceSpec, ServiceType,
};
pub use volume::{
    AccessMode, ClaimPhase, ConfigMapVolumeSource, EmptyDirVolumeSource, HostPathVolumeSource,
    IscsiVolumeSource, NfsVolumeSource, PersistentVolume, PersistentVolumeClaim,
    PersistentVolumeClaimSpec, PersistentVolumeClaimStatus, PersistentVolumeClaimVolumeSource,
    PersistentVolumeSource, PersistentVolumeSpec, PersistentVolumeStatus, ReclaimPolicy,
    SecretVolumeSource, Volume, VolumePhase, VolumeSource,
};

/// `skip_serializing_if` helper for zero numbers and `false`.
pub(crate) fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}
