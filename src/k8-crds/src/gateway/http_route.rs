use k8_manifest::schema::Attribute;
use k8_manifest::schema::AttributeType;
use k8_manifest::schema::Constraint;
use k8_manifest::types::Crd;
use k8_manifest::types::CrdNames;
use k8_manifest::types::Scope;
use k8_manifest::ResourceDefinition;

use super::EXTENSION_REF;
use super::GROUP;
use super::GROUP_ATTRIBUTE;
use super::HEADER_MATCHES;
use super::HEADER_NAME_PATTERN;
use super::HOSTNAMES;
use super::KIND_ATTRIBUTE;
use super::MATCH_TYPES;
use super::NAMESPACE_ATTRIBUTE;
use super::NAME_ATTRIBUTE;
use super::PARENT_REFS;
use super::PORT_ATTRIBUTE;
use super::PRECISE_HOSTNAME_PATTERN;
use super::REQUEST_HEADER_MODIFIER;
use super::REQUEST_MIRROR;
use super::RESPONSE_HEADER_MODIFIER;
use super::V1BETA1;
use super::WEIGHT_ATTRIBUTE;

const PATH_MATCH_TYPES: &[&str] = &["Exact", "PathPrefix", "RegularExpression"];

const METHODS: &[&str] = &[
    "GET", "HEAD", "POST", "PUT", "DELETE", "CONNECT", "OPTIONS", "TRACE", "PATCH",
];

const FILTER_TYPES: &[&str] = &[
    "RequestHeaderModifier",
    "ResponseHeaderModifier",
    "RequestMirror",
    "RequestRedirect",
    "URLRewrite",
    "ExtensionRef",
];

const PATH_MATCH: &[Attribute] = &[
    Attribute::optional(
        "type",
        AttributeType::String,
        "Type specifies how to match against the path Value.",
    )
    .with(&[Constraint::one_of(PATH_MATCH_TYPES)]),
    Attribute::optional(
        "value",
        AttributeType::String,
        "Value of the HTTP path to match against.",
    )
    .with(&[Constraint::max_length(1024)]),
];

const QUERY_PARAM_MATCH: &[Attribute] = &[
    Attribute::optional(
        "type",
        AttributeType::String,
        "Type specifies how to match against the value of the query parameter.",
    )
    .with(&[Constraint::one_of(MATCH_TYPES)]),
    Attribute::required(
        "name",
        AttributeType::String,
        "Name is the name of the HTTP query param to be matched. This must be an exact string match.",
    )
    .with(&[
        Constraint::length(1, 256),
        Constraint::matches(HEADER_NAME_PATTERN),
    ]),
    Attribute::required(
        "value",
        AttributeType::String,
        "Value is the value of HTTP query param to be matched.",
    )
    .with(&[Constraint::length(1, 1024)]),
];

const MATCH: &[Attribute] = &[
    Attribute::optional(
        "path",
        AttributeType::Object(PATH_MATCH),
        "Path specifies a HTTP request path matcher.",
    ),
    HEADER_MATCHES,
    Attribute::optional(
        "queryParams",
        AttributeType::List(&AttributeType::Object(QUERY_PARAM_MATCH)),
        "QueryParams specifies HTTP query parameter matchers. Multiple match values are ANDed together.",
    )
    .with(&[Constraint::max_size(16)]),
    Attribute::optional(
        "method",
        AttributeType::String,
        "Method specifies HTTP method matcher.",
    )
    .with(&[Constraint::one_of(METHODS)]),
];

const PATH_MODIFIER: &[Attribute] = &[
    Attribute::required(
        "type",
        AttributeType::String,
        "Type defines the type of path modifier.",
    )
    .with(&[Constraint::one_of(&["ReplaceFullPath", "ReplacePrefixMatch"])]),
    Attribute::optional(
        "replaceFullPath",
        AttributeType::String,
        "ReplaceFullPath specifies the value with which to replace the full path of a request during a rewrite or redirect.",
    )
    .with(&[Constraint::max_length(1024)]),
    Attribute::optional(
        "replacePrefixMatch",
        AttributeType::String,
        "ReplacePrefixMatch specifies the value with which to replace the prefix match of a request during a rewrite or redirect.",
    )
    .with(&[Constraint::max_length(1024)]),
];

const REWRITE_HOSTNAME: Attribute = Attribute::optional(
    "hostname",
    AttributeType::String,
    "Hostname is the hostname to be used in the value of the Host header.",
)
.with(&[
    Constraint::length(1, 253),
    Constraint::matches(PRECISE_HOSTNAME_PATTERN),
]);

const REQUEST_REDIRECT_FILTER: &[Attribute] = &[
    Attribute::optional(
        "scheme",
        AttributeType::String,
        "Scheme is the scheme to be used in the value of the Location header in the response.",
    )
    .with(&[Constraint::one_of(&["http", "https"])]),
    REWRITE_HOSTNAME,
    Attribute::optional(
        "path",
        AttributeType::Object(PATH_MODIFIER),
        "Path defines parameters used to modify the path of the incoming request.",
    ),
    Attribute::optional(
        "port",
        AttributeType::Int64,
        "Port is the port to be used in the value of the Location header in the response.",
    )
    .with(&[Constraint::between(1, 65535)]),
    Attribute::optional(
        "statusCode",
        AttributeType::Int64,
        "StatusCode is the HTTP status code to be used in response.",
    )
    .with(&[Constraint::between(301, 302)]),
];

const URL_REWRITE_FILTER: &[Attribute] = &[
    REWRITE_HOSTNAME,
    Attribute::optional(
        "path",
        AttributeType::Object(PATH_MODIFIER),
        "Path defines a path rewrite.",
    ),
];

const FILTER: &[Attribute] = &[
    Attribute::required(
        "type",
        AttributeType::String,
        "Type identifies the type of filter to apply.",
    )
    .with(&[Constraint::one_of(FILTER_TYPES)]),
    REQUEST_HEADER_MODIFIER,
    RESPONSE_HEADER_MODIFIER,
    REQUEST_MIRROR,
    Attribute::optional(
        "requestRedirect",
        AttributeType::Object(REQUEST_REDIRECT_FILTER),
        "RequestRedirect defines a schema for a filter that responds to the request with an HTTP redirection.",
    ),
    Attribute::optional(
        "urlRewrite",
        AttributeType::Object(URL_REWRITE_FILTER),
        "URLRewrite defines a schema for a filter that modifies a request during forwarding.",
    ),
    EXTENSION_REF,
];

const FILTERS: Attribute = Attribute::optional(
    "filters",
    AttributeType::List(&AttributeType::Object(FILTER)),
    "Filters define the filters that are applied to requests that match this rule.",
)
.with(&[Constraint::max_size(16)]);

const HTTP_BACKEND_REF: &[Attribute] = &[
    GROUP_ATTRIBUTE,
    KIND_ATTRIBUTE,
    NAME_ATTRIBUTE,
    NAMESPACE_ATTRIBUTE,
    PORT_ATTRIBUTE,
    WEIGHT_ATTRIBUTE,
    FILTERS,
];

const RULE: &[Attribute] = &[
    Attribute::optional(
        "matches",
        AttributeType::List(&AttributeType::Object(MATCH)),
        "Matches define conditions used for matching the rule against incoming HTTP requests.",
    )
    .with(&[Constraint::max_size(8)]),
    FILTERS,
    Attribute::optional(
        "backendRefs",
        AttributeType::List(&AttributeType::Object(HTTP_BACKEND_REF)),
        "BackendRefs defines the backend(s) where matching requests should be sent.",
    )
    .with(&[Constraint::max_size(16)]),
];

const SPEC: &[Attribute] = &[
    PARENT_REFS,
    HOSTNAMES,
    Attribute::optional(
        "rules",
        AttributeType::List(&AttributeType::Object(RULE)),
        "Rules are a list of HTTP matchers, filters and actions.",
    )
    .with(&[Constraint::max_size(16)]),
];

pub static HTTP_ROUTE: ResourceDefinition = ResourceDefinition::new(
    Crd {
        group: GROUP,
        version: V1BETA1,
        names: CrdNames {
            kind: "HTTPRoute",
            plural: "httproutes",
            singular: "httproute",
        },
        scope: Scope::Namespaced,
    },
    "HTTPRoute provides a way to route HTTP requests. This includes the capability to match requests by hostname, path, header, or query param. Filters can be used to specify additional processing steps. Backends specify where matching requests should be routed.",
    Attribute::required(
        "spec",
        AttributeType::Object(SPEC),
        "Spec defines the desired state of HTTPRoute.",
    ),
);
