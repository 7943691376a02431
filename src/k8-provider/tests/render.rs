use pretty_assertions::assert_eq;
use serde_json::json;
use serde_json::Value;

use k8_manifest::SequenceIds;
use k8_provider::ManifestProvider;
use k8_provider::ManifestResource;
use k8_provider::ProviderConfig;
use k8_provider::ProviderError;

const TLS_ROUTE: &str = "k8s_gateway_networking_k8s_io_tls_route_v1alpha2_manifest";

fn tls_route() -> ManifestResource<SequenceIds> {
    ManifestProvider::with_ids(ProviderConfig::default(), SequenceIds::starting_at(1))
        .expect("provider")
        .resource(TLS_ROUTE)
        .expect("tls route")
}

fn violation_paths(err: ProviderError) -> Vec<String> {
    match err {
        ProviderError::Manifest(err) => err
            .as_validation()
            .expect("validation error")
            .violations
            .iter()
            .map(|violation| violation.path.to_string())
            .collect(),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_tls_route_example() {
    let input = json!({
        "metadata": { "name": "tls-route-1" },
        "spec": { "hostnames": ["a.example.com"] }
    });
    let state = tls_route().create(&input).expect("create");

    assert_eq!(state.api_version, "gateway.networking.k8s.io/v1alpha2");
    assert_eq!(state.kind, "TLSRoute");
    assert_eq!(state.metadata, input["metadata"]);
    assert_eq!(state.spec, Some(input["spec"].clone()));
    assert_eq!(
        state.yaml,
        "apiVersion: gateway.networking.k8s.io/v1alpha2\nkind: TLSRoute\nmetadata:\n  name: tls-route-1\nspec:\n  hostnames:\n  - a.example.com\n"
    );
    assert!(!state.yaml.contains("parentRefs"));
    assert!(!state.yaml.contains("rules"));
}

#[test]
fn test_yaml_parses_back_to_input() {
    let input = json!({
        "metadata": {
            "name": "tls-route-1",
            "namespace": "edge",
            "labels": { "app.kubernetes.io/name": "edge" }
        },
        "spec": { "hostnames": ["a.example.com", "*.b.example.com"] }
    });
    let state = tls_route().create(&input).expect("create");

    let parsed: Value = serde_yaml::from_str(&state.yaml).expect("yaml");
    assert_eq!(parsed["apiVersion"], json!("gateway.networking.k8s.io/v1alpha2"));
    assert_eq!(parsed["kind"], json!("TLSRoute"));
    assert_eq!(parsed["metadata"], input["metadata"]);
    assert_eq!(parsed["spec"], input["spec"]);
}

#[test]
fn test_yaml11_ambiguous_strings_are_quoted() {
    let input = json!({
        "metadata": { "name": "on", "labels": { "enabled": "yes" } },
        "spec": { "hostnames": ["y"] }
    });
    let state = tls_route().create(&input).expect("create");
    assert_eq!(
        state.yaml,
        "apiVersion: gateway.networking.k8s.io/v1alpha2\nkind: TLSRoute\nmetadata:\n  name: 'on'\n  labels:\n    enabled: 'yes'\nspec:\n  hostnames:\n  - 'y'\n"
    );

    let parsed: Value = serde_yaml::from_str(&state.yaml).expect("yaml");
    assert_eq!(parsed["metadata"], input["metadata"]);
    assert_eq!(parsed["spec"], input["spec"]);
}

/// every case must come back unchanged from the rendered yaml,
/// both as plain yaml and through import
#[test]
fn test_round_trip_cases() {
    let provider =
        ManifestProvider::with_ids(ProviderConfig::default(), SequenceIds::starting_at(1))
            .expect("provider");

    let cases = [
        (
            TLS_ROUTE,
            json!({
                "metadata": {
                    "name": "on",
                    "namespace": "no",
                    "labels": {
                        "yes": "off",
                        "app.kubernetes.io/version": "1_000",
                        "tier": "Y"
                    },
                    "annotations": {
                        "j": "N",
                        "h": "1_000",
                        "t": "true",
                        "nul": "~",
                        "oct": "0755",
                        "hex": "0x1F",
                        "date": "2024-01-02",
                        "float": "1.5",
                        "sexagesimal": "1:30",
                        "empty": "",
                        "quote": "it's",
                        "multi": "line one\nline two"
                    }
                },
                "spec": {
                    "hostnames": ["y", "n.example.com"],
                    "parent_refs": [{ "name": "off", "section_name": "yes", "port": 1 }],
                    "rules": [
                        {
                            "backend_refs": [
                                { "name": "null", "port": 65535, "weight": 0 },
                                { "name": "true", "weight": 1000000 }
                            ]
                        },
                        { "backend_refs": [{ "name": "NO", "namespace": "on" }] }
                    ]
                }
            }),
        ),
        (
            "k8s_operator_tigera_io_installation_v1_manifest",
            json!({
                "metadata": { "name": "default", "labels": { "on": "On" } },
                "spec": {
                    "registry": "Yes",
                    "control_plane_replicas": i64::MAX,
                    "control_plane_node_selector": { "off": "1_000", "zone": "0" },
                    "calico_network": {
                        "mtu": i64::MIN,
                        "ip_pools": [
                            {
                                "cidr": "10.48.0.0/16",
                                "node_selector": "all()",
                                "block_size": 0,
                                "disable_bgp_export": false
                            },
                            { "cidr": "fd00::/64", "block_size": -1, "disable_bgp_export": true }
                        ],
                        "node_address_autodetection_v4": {
                            "first_found": true,
                            "cidrs": ["10.0.0.0/8", "0", "n"]
                        }
                    }
                }
            }),
        ),
    ];

    for (type_name, input) in cases {
        let resource = provider.resource(type_name).expect("resource");
        let state = resource.create(&input).expect("create");

        let parsed: Value = serde_yaml::from_str(&state.yaml).expect("yaml");
        assert_eq!(parsed["metadata"], input["metadata"], "{}", state.yaml);

        let imported = resource.import(&state.yaml).expect("import");
        assert_eq!(imported.metadata, input["metadata"]);
        assert_eq!(imported.spec, Some(input["spec"].clone()), "{}", state.yaml);
        assert_eq!(imported.yaml, state.yaml);
    }
}

#[test]
fn test_nested_input_round_trips_through_import() {
    let input = json!({
        "metadata": { "name": "tls-route-1", "namespace": "edge" },
        "spec": {
            "parent_refs": [{ "name": "gateway", "section_name": "tls" }],
            "rules": [{
                "backend_refs": [
                    { "name": "a", "port": 443, "weight": 0 },
                    { "name": "b", "port": 8443, "weight": 1000000 }
                ]
            }]
        }
    });
    let resource = tls_route();
    let state = resource.create(&input).expect("create");
    assert!(state.yaml.contains("parentRefs:\n  - name: gateway\n    sectionName: tls\n"));
    assert!(state.yaml.contains("weight: 0\n"));

    let imported = resource.import(&state.yaml).expect("import");
    assert_eq!(imported.metadata, input["metadata"]);
    assert_eq!(imported.spec, Some(input["spec"].clone()));
    assert_eq!(imported.yaml, state.yaml);
}

#[test]
fn test_missing_name() {
    let err = tls_route()
        .create(&json!({
            "metadata": { "namespace": "edge" },
            "spec": { "hostnames": ["a.example.com"] }
        }))
        .expect_err("name is required");
    assert_eq!(violation_paths(err), vec!["metadata.name"]);
}

#[test]
fn test_weight_above_maximum() {
    let err = tls_route()
        .create(&json!({
            "metadata": { "name": "tls-route-1" },
            "spec": {
                "rules": [{ "backend_refs": [{ "name": "svc", "weight": 2000000 }] }]
            }
        }))
        .expect_err("weight out of range");
    assert_eq!(
        violation_paths(err),
        vec!["spec.rules[0].backend_refs[0].weight"]
    );
}

#[test]
fn test_hostname_constraints() {
    let resource = tls_route();
    let render = |hostname: String| {
        resource.create(&json!({
            "metadata": { "name": "tls-route-1" },
            "spec": { "hostnames": [hostname] }
        }))
    };

    // length bound is 1..=253
    assert!(render("a".repeat(253)).is_ok());
    assert!(render("a".repeat(254)).is_err());
    assert!(render(String::new()).is_err());

    // pattern is anchored at both ends
    assert!(render("-a.example.com".to_owned()).is_err());
    assert!(render("a.example.com-".to_owned()).is_err());
    assert!(render("a.example.com".to_owned()).is_ok());
}

#[test]
fn test_unset_optionals_never_leak() {
    let state = tls_route()
        .create(&json!({
            "metadata": { "name": "tls-route-1", "namespace": null, "labels": {}, "annotations": null },
            "spec": { "hostnames": [], "parent_refs": [], "rules": null }
        }))
        .expect("create");
    assert_eq!(
        state.yaml,
        "apiVersion: gateway.networking.k8s.io/v1alpha2\nkind: TLSRoute\nmetadata:\n  name: tls-route-1\n"
    );
    assert!(!state.yaml.contains("null"));
    assert!(!state.yaml.contains("[]"));
    assert!(!state.yaml.contains("{}"));
}

#[test]
fn test_computed_attributes_rejected() {
    let err = tls_route()
        .create(&json!({
            "kind": "Gateway",
            "metadata": { "name": "tls-route-1" },
            "spec": {}
        }))
        .expect_err("kind is computed");
    assert_eq!(violation_paths(err), vec!["kind"]);
}
