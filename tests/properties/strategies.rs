//! Shared generators for object graphs with a random mix of set and unset
//! fields.

use std::collections::BTreeMap;

use proptest::prelude::*;

use apidefaults::domain::entities::{
    ClaimPhase, ConfigMap, Container, ContainerPort, EndpointPort, EndpointSubset, Endpoints,
    IscsiVolumeSource, LimitRangeItem, LimitType, Namespace, NamespacePhase, Node, ObjectMeta,
    PersistentVolume, PersistentVolumeClaim, Pod, PodAttachOptions, PodExecOptions, PodSpec,
    PodTemplateSpec, Protocol, PullPolicy, ReclaimPolicy, ReplicationController,
    ResourceRequirements, RestartPolicy, Secret, SecretType, Service, ServicePort, ServiceSpec,
    VolumePhase,
};
use apidefaults::domain::value_objects::Labels;
use apidefaults::{IntOrString, Quantity, ResourceList};

pub fn quantity() -> impl Strategy<Value = Quantity> {
    prop_oneof![
        (1i64..=64_000).prop_map(Quantity::from_milli),
        (1u32..=512).prop_map(|mi| format!("{}Mi", mi).parse::<Quantity>().unwrap()),
    ]
}

pub fn resource_list() -> impl Strategy<Value = ResourceList> {
    proptest::collection::btree_map(
        prop_oneof![
            Just("cpu".to_string()),
            Just("memory".to_string()),
            Just("ephemeral-storage".to_string()),
        ],
        quantity(),
        0..=3,
    )
}

fn image() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("nginx"),
        Just("nginx:latest"),
        Just("nginx:1.25"),
        Just("registry.local:5000/app"),
        Just("registry.local:5000/app:v2"),
        Just("app@sha256:0123abcd"),
    ]
    .prop_map(str::to_string)
}

fn pull_policy() -> impl Strategy<Value = PullPolicy> {
    prop_oneof![
        Just(PullPolicy::Always),
        Just(PullPolicy::IfNotPresent),
        Just(PullPolicy::Never),
    ]
}

fn container_port() -> impl Strategy<Value = ContainerPort> {
    (1i32..=65_535, prop_oneof![Just(0i32), 1i32..=65_535]).prop_map(
        |(container_port, host_port)| ContainerPort {
            host_port,
            ..ContainerPort::new(container_port)
        },
    )
}

pub fn container() -> impl Strategy<Value = Container> {
    (
        image(),
        proptest::collection::vec(container_port(), 0..=2),
        proptest::option::of(resource_list()),
        proptest::option::of(resource_list()),
        proptest::option::of(pull_policy()),
    )
        .prop_map(|(image, ports, limits, requests, pull_policy)| {
            let mut container = Container::new("c", image)
                .with_ports(ports)
                .with_resources(ResourceRequirements { limits, requests });
            container.image_pull_policy = pull_policy;
            container
        })
}

pub fn pod() -> impl Strategy<Value = Pod> {
    (
        proptest::collection::vec(container(), 0..=3),
        any::<bool>(),
        proptest::option::of(prop_oneof![
            Just(RestartPolicy::Always),
            Just(RestartPolicy::OnFailure),
            Just(RestartPolicy::Never),
        ]),
        proptest::option::of(0i64..=600),
    )
        .prop_map(|(containers, host_network, restart_policy, grace)| {
            let mut spec = PodSpec::with_containers(containers);
            spec.host_network = host_network;
            spec.restart_policy = restart_policy;
            spec.termination_grace_period_seconds = grace;
            Pod::new("p", spec)
        })
}

fn target_port() -> impl Strategy<Value = IntOrString> {
    prop_oneof![
        Just(IntOrString::Int(0)),
        Just(IntOrString::from("")),
        (1i32..=65_535).prop_map(IntOrString::Int),
        Just(IntOrString::from("http")),
    ]
}

pub fn service() -> impl Strategy<Value = Service> {
    proptest::collection::vec((1i32..=65_535, target_port()), 0..=4).prop_map(|ports| Service {
        spec: ServiceSpec {
            ports: ports
                .into_iter()
                .map(|(port, target)| ServicePort::new(port).with_target_port(target))
                .collect(),
            ..ServiceSpec::default()
        },
        ..Service::default()
    })
}

pub fn limit_range_item() -> impl Strategy<Value = LimitRangeItem> {
    (
        prop_oneof![Just(LimitType::Container), Just(LimitType::Pod)],
        proptest::option::of(resource_list()),
        proptest::option::of(resource_list()),
        proptest::option::of(resource_list()),
        proptest::option::of(resource_list()),
    )
        .prop_map(|(limit_type, max, min, default, default_request)| LimitRangeItem {
            limit_type: Some(limit_type),
            max,
            min,
            default,
            default_request,
            ..LimitRangeItem::default()
        })
}

pub fn labels() -> impl Strategy<Value = Labels> {
    proptest::collection::btree_map(
        prop_oneof![Just("app"), Just("tier"), Just("track")].prop_map(str::to_string),
        prop_oneof![Just("web"), Just("db"), Just("canary")].prop_map(str::to_string),
        0..=2,
    )
}

fn pod_template() -> impl Strategy<Value = PodTemplateSpec> {
    (labels(), proptest::collection::vec(container(), 0..=2)).prop_map(|(labels, containers)| {
        PodTemplateSpec {
            metadata: ObjectMeta::default().with_labels(labels),
            spec: PodSpec::with_containers(containers),
        }
    })
}

/// Controllers with an optional template, and selector, labels and
/// replicas (zero included) either set or left empty.
pub fn replication_controller() -> impl Strategy<Value = ReplicationController> {
    (
        proptest::option::of(0i32..=5),
        labels(),
        labels(),
        proptest::option::of(pod_template()),
    )
        .prop_map(|(replicas, selector, own_labels, template)| {
            let mut controller = ReplicationController {
                metadata: ObjectMeta::named("rc").with_labels(own_labels),
                ..ReplicationController::default()
            };
            controller.spec.replicas = replicas;
            controller.spec.selector = selector;
            controller.spec.template = template;
            controller
        })
}

pub fn node() -> impl Strategy<Value = Node> {
    (
        prop_oneof![Just(String::new()), Just("i-0abc".to_string())],
        proptest::option::of(resource_list()),
        proptest::option::of(resource_list()),
    )
        .prop_map(|(external_id, capacity, allocatable)| {
            let mut node = Node {
                metadata: ObjectMeta::named("worker-1"),
                ..Node::default()
            };
            node.spec.external_id = external_id;
            node.status.capacity = capacity;
            node.status.allocatable = allocatable;
            node
        })
}

pub fn endpoints() -> impl Strategy<Value = Endpoints> {
    let port = (
        1i32..=65_535,
        proptest::option::of(prop_oneof![Just(Protocol::Tcp), Just(Protocol::Udp)]),
    )
        .prop_map(|(port, protocol)| EndpointPort {
            port,
            protocol,
            ..EndpointPort::default()
        });
    let subset = proptest::collection::vec(port, 0..=3).prop_map(|ports| EndpointSubset {
        ports,
        ..EndpointSubset::default()
    });
    proptest::collection::vec(subset, 0..=2).prop_map(|subsets| Endpoints {
        subsets,
        ..Endpoints::default()
    })
}

pub fn persistent_volume() -> impl Strategy<Value = PersistentVolume> {
    (
        proptest::option::of(prop_oneof![
            Just(ReclaimPolicy::Recycle),
            Just(ReclaimPolicy::Delete),
            Just(ReclaimPolicy::Retain),
        ]),
        proptest::option::of(prop_oneof![
            Just(VolumePhase::Available),
            Just(VolumePhase::Bound),
            Just(VolumePhase::Released),
        ]),
        proptest::option::of(prop_oneof![Just(String::new()), Just("iface0".to_string())]),
    )
        .prop_map(|(reclaim_policy, phase, iscsi_interface)| {
            let mut volume = PersistentVolume::default();
            volume.spec.persistent_volume_reclaim_policy = reclaim_policy;
            volume.status.phase = phase;
            volume.spec.source.iscsi = iscsi_interface.map(|iscsi_interface| IscsiVolumeSource {
                target_portal: "10.0.0.2:3260".to_string(),
                iqn: "iqn.2001-04.com.example:storage".to_string(),
                iscsi_interface,
                ..IscsiVolumeSource::default()
            });
            volume
        })
}

pub fn persistent_volume_claim() -> impl Strategy<Value = PersistentVolumeClaim> {
    proptest::option::of(prop_oneof![Just(ClaimPhase::Bound), Just(ClaimPhase::Lost)]).prop_map(
        |phase| {
            let mut claim = PersistentVolumeClaim::default();
            claim.status.phase = phase;
            claim
        },
    )
}

pub fn namespace() -> impl Strategy<Value = Namespace> {
    proptest::option::of(Just(NamespacePhase::Terminating)).prop_map(|phase| {
        let mut namespace = Namespace::default();
        namespace.status.phase = phase;
        namespace
    })
}

fn string_map() -> impl Strategy<Value = BTreeMap<String, String>> {
    proptest::collection::btree_map("[a-z]{1,8}", "[A-Za-z0-9=]{0,12}", 0..=3)
}

pub fn secret() -> impl Strategy<Value = Secret> {
    (
        proptest::option::of(prop_oneof![
            Just(SecretType::Opaque),
            Just(SecretType::ServiceAccountToken),
            Just(SecretType::DockerConfigJson),
        ]),
        string_map(),
    )
        .prop_map(|(secret_type, data)| Secret {
            secret_type,
            data,
            ..Secret::default()
        })
}

pub fn config_map() -> impl Strategy<Value = ConfigMap> {
    proptest::option::of(string_map()).prop_map(|data| ConfigMap {
        data,
        ..ConfigMap::default()
    })
}

pub fn exec_options() -> impl Strategy<Value = PodExecOptions> {
    (
        any::<[bool; 4]>(),
        proptest::collection::vec("[a-z]{1,6}", 0..=3),
    )
        .prop_map(|([stdin, stdout, stderr, tty], command)| PodExecOptions {
            stdin,
            stdout,
            stderr,
            tty,
            command,
            ..PodExecOptions::default()
        })
}

pub fn attach_options() -> impl Strategy<Value = PodAttachOptions> {
    any::<[bool; 4]>().prop_map(|[stdin, stdout, stderr, tty]| PodAttachOptions {
        stdin,
        stdout,
        stderr,
        tty,
        container: "app".to_string(),
        ..PodAttachOptions::default()
    })
}
