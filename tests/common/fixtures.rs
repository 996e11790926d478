//! Test fixtures - reusable manifests.

/// A pod with limits but no requests, on the host network
pub const HOST_NETWORK_POD: &str = r#"kind: Pod
metadata:
  name: web
  labels:
    app: web
spec:
  hostNetwork: true
  containers:
    - name: nginx
      image: nginx
      ports:
        - containerPort: 80
      resources:
        limits:
          cpu: 500m
          memory: 128Mi
"#;

/// A controller whose selector must come from its template
pub const LABELLED_CONTROLLER: &str = r#"kind: ReplicationController
metadata:
  name: frontend
spec:
  template:
    metadata:
      labels:
        app: frontend
        tier: web
    spec:
      containers:
        - name: app
          image: registry.local:5000/frontend:2.1
          resources:
            limits:
              cpu: "1"
"#;

/// A service with one numbered and one named target port (JSON)
pub const SERVICE_JSON: &str = r#"{
  "kind": "Service",
  "metadata": {"name": "web"},
  "spec": {
    "selector": {"app": "web"},
    "ports": [
      {"port": 80},
      {"port": 443, "targetPort": "https"},
      {"port": 8443, "targetPort": 9443, "protocol": "TCP"}
    ]
  }
}
"#;

/// Container limits with only min and max bounds
pub const CONTAINER_LIMIT_RANGE: &str = r#"kind: LimitRange
metadata:
  name: bounds
spec:
  limits:
    - type: Container
      max:
        cpu: "2"
        memory: 1Gi
      min:
        cpu: 100m
        memory: 64Mi
        ephemeral-storage: 1Gi
    - type: Pod
      max:
        cpu: "4"
"#;

/// A node that only reports capacity
pub const CAPACITY_ONLY_NODE: &str = r#"kind: Node
metadata:
  name: worker-1
status:
  capacity:
    cpu: "8"
    memory: 32Gi
    pods: "110"
"#;
