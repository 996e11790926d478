//! Scenario: Rolling out a replication controller
//!
//! Journey: An operator writes a controller with only a pod template and
//! labels on that template, then asks for the defaulted manifest.
//!
//! Success Criteria:
//! - Selector and controller labels come from the template labels
//! - One replica is assumed
//! - The embedded pod spec gets pod-spec defaults but no requests
//!   derived from limits (templates are not pods)

use apidefaults::domain::entities::{PullPolicy, RestartPolicy};
use apidefaults::{Defaulter, Manifest};

use crate::common::*;

#[test]
fn scenario_controller_selector_from_template() {
    let mut manifest = Manifest::from_yaml_str(LABELLED_CONTROLLER).unwrap();
    manifest.apply_defaults(&Defaulter::default());

    let Manifest::ReplicationController(controller) = manifest else {
        panic!("expected a replication controller");
    };

    let template = controller.spec.template.as_ref().unwrap();
    assert_eq!(controller.spec.selector, template.metadata.labels);
    assert_eq!(controller.metadata.labels, template.metadata.labels);
    assert_eq!(controller.spec.replicas, Some(1));

    assert_eq!(template.spec.restart_policy, Some(RestartPolicy::Always));
    let container = &template.spec.containers[0];
    assert_eq!(container.image_pull_policy, Some(PullPolicy::IfNotPresent));
    assert!(container.resources.requests.is_none());
}

#[test]
fn scenario_controller_round_trips_through_cli() {
    let env = TestEnv::new();
    env.write_project_file("frontend.yaml", LABELLED_CONTROLLER);

    let result = env.run(&["apply", "frontend.yaml", "--output", "json"]);
    assert!(result.success, "stderr:\n{}", result.stderr);

    let json = result.json();
    assert_eq!(json["kind"], "ReplicationController");
    assert_eq!(json["spec"]["replicas"], 1);
    assert_eq!(json["spec"]["selector"]["tier"], "web");
    assert!(json["spec"]["template"]["spec"]["containers"][0]["resources"]["requests"].is_null());
}
