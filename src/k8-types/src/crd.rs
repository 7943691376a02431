//!
//! # CRD Definition
//!
//! Identity of a Kubernetes API kind: group, version, names and scope.
//!
use heck::ToSnakeCase;
use serde::Serialize;

/// group used by built-in kinds, rendered without prefix
pub const CORE_GROUP: &str = "core";

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize)]
pub struct Crd {
    pub group: &'static str,
    pub version: &'static str,
    pub names: CrdNames,
    pub scope: Scope,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize)]
pub struct CrdNames {
    pub kind: &'static str,
    pub plural: &'static str,
    pub singular: &'static str,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize)]
pub enum Scope {
    Namespaced,
    Cluster,
}

impl Crd {
    pub fn kind(&self) -> &'static str {
        self.names.kind
    }

    pub fn api_version(&self) -> String {
        if self.group == CORE_GROUP {
            return self.version.to_owned();
        }
        format!("{}/{}", self.group, self.version)
    }

    pub fn is_namespaced(&self) -> bool {
        self.scope == Scope::Namespaced
    }

    /// name under which this kind is exposed as a manifest resource,
    /// e.g. `k8s_gateway_networking_k8s_io_tls_route_v1alpha2_manifest`
    pub fn type_name(&self, prefix: &str) -> String {
        let group = if self.group == CORE_GROUP {
            String::new()
        } else {
            format!("{}_", self.group.replace(['.', '-'], "_"))
        };
        format!(
            "{}_{}{}_{}_manifest",
            prefix,
            group,
            self.names.kind.to_snake_case(),
            self.version
        )
    }

    /// true if `api_version` and `kind` identify this definition
    pub fn matches(&self, api_version: &str, kind: &str) -> bool {
        self.names.kind == kind && self.api_version() == api_version
    }
}

#[cfg(test)]
mod test {

    use super::{Crd, CrdNames, Scope};

    const TLS_ROUTE: Crd = Crd {
        group: "gateway.networking.k8s.io",
        version: "v1alpha2",
        names: CrdNames {
            kind: "TLSRoute",
            plural: "tlsroutes",
            singular: "tlsroute",
        },
        scope: Scope::Namespaced,
    };

    const CONFIG_MAP: Crd = Crd {
        group: "core",
        version: "v1",
        names: CrdNames {
            kind: "ConfigMap",
            plural: "configmaps",
            singular: "configmap",
        },
        scope: Scope::Namespaced,
    };

    #[test]
    fn test_api_version() {
        assert_eq!(TLS_ROUTE.api_version(), "gateway.networking.k8s.io/v1alpha2");
        assert_eq!(CONFIG_MAP.api_version(), "v1");
    }

    #[test]
    fn test_type_name() {
        assert_eq!(
            TLS_ROUTE.type_name("k8s"),
            "k8s_gateway_networking_k8s_io_tls_route_v1alpha2_manifest"
        );
        assert_eq!(CONFIG_MAP.type_name("k8s"), "k8s_config_map_v1_manifest");
    }

    #[test]
    fn test_matches() {
        assert!(TLS_ROUTE.matches("gateway.networking.k8s.io/v1alpha2", "TLSRoute"));
        assert!(!TLS_ROUTE.matches("gateway.networking.k8s.io/v1beta1", "TLSRoute"));
        assert!(!TLS_ROUTE.matches("gateway.networking.k8s.io/v1alpha2", "TCPRoute"));
    }
}
