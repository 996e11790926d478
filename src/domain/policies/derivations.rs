//! Cross-field defaults
//!
//! Rules whose value comes from another field of the same object or of a
//! nested one. Every rule reads the raw nested state it needs; none of them
//! assumes another procedure has already run.

use crate::domain::entities::{
    Container, LimitRangeItem, LimitType, Node, NodeStatus, Pod, PodSpec, Protocol, PullPolicy,
    ReplicationController, ServiceSpec,
};
use crate::domain::value_objects::{copy_resource_list, IntOrString, ResourceList};

/// Tag assumed for an image reference that names none.
pub const DEFAULT_IMAGE_TAG: &str = "latest";

/// Copy the pod template's labels onto an unset selector and unset
/// controller labels. Nothing happens without template labels.
pub fn propagate_template_labels(controller: &mut ReplicationController) {
    let Some(template) = &controller.spec.template else {
        return;
    };
    let labels = &template.metadata.labels;
    if labels.is_empty() {
        return;
    }

    if controller.spec.selector.is_empty() {
        controller.spec.selector = labels.clone();
    }
    if controller.metadata.labels.is_empty() {
        controller.metadata.labels = labels.clone();
    }
}

/// Resolve the tag part of an image reference.
///
/// `repo@sha256:...` yields the digest, up to any further `@`. Otherwise the
/// text after the last `:` is the tag, unless it contains `/` (then the colon
/// belonged to a registry port). A missing or empty tag or digest resolves to
/// [`DEFAULT_IMAGE_TAG`].
pub fn image_tag(image: &str) -> &str {
    if let Some((_, reference)) = image.split_once('@') {
        let digest = reference.split_once('@').map_or(reference, |(digest, _)| digest);
        return if digest.is_empty() { DEFAULT_IMAGE_TAG } else { digest };
    }
    match image.rsplit_once(':') {
        Some((_, tag)) if !tag.is_empty() && !tag.contains('/') => tag,
        _ => DEFAULT_IMAGE_TAG,
    }
}

/// `latest` images are always pulled; pinned ones only when missing.
pub fn default_image_pull_policy(container: &mut Container) {
    if container.image_pull_policy.is_some() {
        return;
    }
    let policy = if image_tag(&container.image) == DEFAULT_IMAGE_TAG {
        PullPolicy::Always
    } else {
        PullPolicy::IfNotPresent
    };
    container.image_pull_policy = Some(policy);
}

/// Port protocol and target port. Both unset forms of the target port
/// (`0` and `""`) fall back to the service port number.
pub fn default_service_ports(spec: &mut ServiceSpec) {
    for port in &mut spec.ports {
        port.protocol.get_or_insert(Protocol::Tcp);
        if port.target_port.is_unset() {
            port.target_port = IntOrString::Int(port.port);
        }
    }
}

/// Per container and per resource name, a limit without a matching request
/// becomes the request. Only pods get this; pod templates do not.
pub fn default_requests_from_limits(pod: &mut Pod) {
    for container in &mut pod.spec.containers {
        let resources = &mut container.resources;
        let Some(limits) = &resources.limits else {
            continue;
        };
        let requests = resources.requests.get_or_insert_with(ResourceList::new);
        fill_missing(requests, Some(limits));
    }
}

/// With host networking, every unset host port mirrors its container port.
pub fn default_host_network_ports(spec: &mut PodSpec) {
    if !spec.host_network {
        return;
    }
    for port in spec
        .containers
        .iter_mut()
        .flat_map(|container| container.ports.iter_mut())
    {
        if port.host_port == 0 {
            port.host_port = port.container_port;
        }
    }
}

pub fn default_node_external_id(node: &mut Node) {
    if node.spec.external_id.is_empty() {
        node.spec.external_id = node.metadata.name.clone();
    }
}

pub fn default_allocatable(status: &mut NodeStatus) {
    if status.allocatable.is_some() {
        return;
    }
    if let Some(capacity) = &status.capacity {
        status.allocatable = Some(copy_resource_list(capacity));
    }
}

/// Container limit items resolve, per resource name:
/// default <- max, then default request <- default, then default request <- min.
pub fn default_limit_range_item(item: &mut LimitRangeItem) {
    if item.limit_type != Some(LimitType::Container) {
        return;
    }

    let default = item.default.get_or_insert_with(ResourceList::new);
    fill_missing(default, item.max.as_ref());

    let default_request = item.default_request.get_or_insert_with(ResourceList::new);
    fill_missing(default_request, item.default.as_ref());
    fill_missing(default_request, item.min.as_ref());
}

fn fill_missing(target: &mut ResourceList, source: Option<&ResourceList>) {
    for (name, quantity) in source.into_iter().flatten() {
        target
            .entry(name.clone())
            .or_insert_with(|| quantity.copy());
    }
}
