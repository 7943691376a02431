use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use serde_json::json;

use k8_manifest::SequenceIds;
use k8_provider::ManifestProvider;
use k8_provider::ProviderConfig;
use k8_provider::ProviderError;

const TCP_ROUTE: &str = "k8s_gateway_networking_k8s_io_tcp_route_v1alpha2_manifest";
const INSTALLATION: &str = "k8s_operator_tigera_io_installation_v1_manifest";

fn sequence_provider() -> ManifestProvider<SequenceIds> {
    ManifestProvider::with_ids(ProviderConfig::default(), SequenceIds::starting_at(10))
        .expect("provider")
}

#[test]
fn test_successive_renders_differ_only_in_id() {
    let provider = ManifestProvider::new(ProviderConfig::default()).expect("provider");
    let resource = provider.resource(TCP_ROUTE).expect("tcp route");
    let input = json!({
        "metadata": { "name": "tcp" },
        "spec": { "rules": [{ "backend_refs": [{ "name": "db", "port": 5432 }] }] }
    });

    let first = resource.create(&input).expect("first");
    let second = resource.create(&input).expect("second");
    assert!(second.id > first.id);
    assert_eq!(first.yaml, second.yaml);
    assert_eq!(first.api_version, second.api_version);
    assert_eq!(first.kind, second.kind);
    assert_eq!(first.metadata, second.metadata);
    assert_eq!(first.spec, second.spec);
    assert!(first.same_manifest(&second));
}

#[test]
fn test_update_read_delete() {
    let provider = sequence_provider();
    let resource = provider.resource(TCP_ROUTE).expect("tcp route");
    let created = resource
        .create(&json!({
            "metadata": { "name": "tcp" },
            "spec": { "rules": [{ "backend_refs": [{ "name": "db" }] }] }
        }))
        .expect("create");
    assert_eq!(created.id, 10);

    let updated = resource
        .update(
            &created,
            &json!({
                "metadata": { "name": "tcp", "labels": { "tier": "db" } },
                "spec": { "rules": [{ "backend_refs": [{ "name": "db" }] }] }
            }),
        )
        .expect("update");
    assert_eq!(updated.id, 11);
    assert!(!updated.same_manifest(&created));
    assert!(updated.yaml.contains("labels:\n    tier: db\n"));

    let read = resource.read(updated.clone()).expect("read");
    assert_eq!(read, updated);
    resource.delete(&read).expect("delete");
}

#[test]
fn test_failed_update_keeps_prior_state() {
    let provider = sequence_provider();
    let resource = provider.resource(TCP_ROUTE).expect("tcp route");
    let prior = resource
        .create(&json!({
            "metadata": { "name": "tcp" },
            "spec": { "rules": [{ "backend_refs": [{ "name": "db" }] }] }
        }))
        .expect("create");

    let err = resource
        .update(&prior, &json!({ "metadata": { "name": "tcp" }, "spec": {} }))
        .expect_err("rules are required");
    assert!(matches!(err, ProviderError::Manifest(_)));

    // next successful render continues from the prior id
    let next = resource
        .update(
            &prior,
            &json!({
                "metadata": { "name": "tcp" },
                "spec": { "rules": [{ "backend_refs": [{ "name": "db" }] }] }
            }),
        )
        .expect("update");
    assert_eq!(next.id, prior.id + 1);
}

#[test]
fn test_installation() {
    let provider = sequence_provider();
    let resource = provider.resource(INSTALLATION).expect("installation");
    let state = resource
        .create(&json!({
            "metadata": { "name": "default" },
            "spec": {
                "variant": "Calico",
                "calico_network": {
                    "bgp": "Disabled",
                    "ip_pools": [{
                        "cidr": "10.48.0.0/16",
                        "encapsulation": "VXLAN",
                        "nat_outgoing": "Enabled",
                        "disable_bgp_export": false
                    }],
                    "container_ip_forwarding": "Enabled"
                },
                "certificate_management": {
                    "ca_cert": "aGVsbG8=",
                    "signer_name": "example.com/signer"
                }
            }
        }))
        .expect("create");

    assert_eq!(
        state.yaml,
        r#"apiVersion: operator.tigera.io/v1
kind: Installation
metadata:
  name: default
spec:
  variant: Calico
  calicoNetwork:
    bgp: Disabled
    ipPools:
    - cidr: 10.48.0.0/16
      encapsulation: VXLAN
      natOutgoing: Enabled
      disableBGPExport: false
    containerIPForwarding: Enabled
  certificateManagement:
    caCert: aGVsbG8=
    signerName: example.com/signer
"#
    );
    let meta = state.meta().expect("metadata");
    assert_eq!(meta.name, "default");
    assert!(meta.namespace.is_none());
}

#[test]
fn test_installation_violations() {
    let provider = sequence_provider();
    let resource = provider.resource(INSTALLATION).expect("installation");
    let err = resource
        .create(&json!({
            "metadata": { "name": "default", "namespace": "calico-system" },
            "spec": {
                "calico_network": { "ip_pools": [{ "cidr": "10.48.0.0/16", "encapsulation": "GRE" }] },
                "certificate_management": { "ca_cert": "not base64!", "signer_name": "s" }
            }
        }))
        .expect_err("invalid");

    let err = match err {
        ProviderError::Manifest(err) => err,
        other => panic!("unexpected error {}", other),
    };
    let validation = err.as_validation().expect("validation");
    assert_eq!(validation.violations.len(), 3);
    assert!(validation.find("metadata.namespace").is_some());
    assert!(validation
        .find("spec.calico_network.ip_pools[0].encapsulation")
        .is_some());
    assert!(validation
        .find("spec.certificate_management.ca_cert")
        .is_some());
}

#[test]
fn test_import_existing_manifest() {
    let provider = sequence_provider();
    let resource = provider.resource(INSTALLATION).expect("installation");
    let state = resource
        .import(
            r#"
apiVersion: operator.tigera.io/v1
kind: Installation
metadata:
  name: default
  resourceVersion: "123"
spec:
  variant: Calico
  cni:
    type: Calico
status:
  variant: Calico
"#,
        )
        .expect("import");
    assert_eq!(state.metadata, json!({ "name": "default" }));
    assert_eq!(
        state.spec,
        Some(json!({ "variant": "Calico", "cni": { "type": "Calico" } }))
    );

    let err = resource
        .import("apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: default\n")
        .expect_err("wrong kind");
    assert!(matches!(err, ProviderError::Manifest(_)));
}

#[test]
fn test_concurrent_creates_get_distinct_ids() {
    let provider = Arc::new(ManifestProvider::new(ProviderConfig::default()).expect("provider"));
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let provider = provider.clone();
            thread::spawn(move || {
                let resource = provider.resource(TCP_ROUTE).expect("tcp route");
                (0..50)
                    .map(|i| {
                        resource
                            .create(&json!({
                                "metadata": { "name": format!("tcp-{}-{}", worker, i) },
                                "spec": { "rules": [{ "backend_refs": [{ "name": "db" }] }] }
                            }))
                            .expect("create")
                            .id
                    })
                    .collect::<Vec<i64>>()
            })
        })
        .collect();

    let mut ids: Vec<i64> = handles
        .into_iter()
        .flat_map(|handle| handle.join().expect("worker"))
        .collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}
