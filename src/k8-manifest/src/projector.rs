use serde_json::Map;
use serde_json::Value;
use serde_yaml::Mapping;
use serde_yaml::Value as YamlValue;
use tracing::debug;
use tracing::instrument;
use tracing::trace;

use k8_schema::AttributePath;
use k8_schema::ValidationError;
use k8_schema::Violation;

use crate::scalar::to_yaml_string;
use crate::walk::decode_block;
use crate::walk::encode_block;
use crate::IdGenerator;
use crate::ManifestError;
use crate::ResourceDefinition;
use crate::ResourceState;
use crate::SerializationError;
use crate::WallClockIds;

const DOCUMENT_START: &str = "---\n";

/// Turns validated input into resource state and manifest text
#[derive(Debug, Default)]
pub struct ManifestProjector<I = WallClockIds> {
    ids: I,
    document_start: bool,
}

impl ManifestProjector<WallClockIds> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<I> ManifestProjector<I>
where
    I: IdGenerator,
{
    pub fn with_ids(ids: I) -> Self {
        Self {
            ids,
            document_start: false,
        }
    }

    /// prefix rendered yaml with an explicit document start marker
    pub fn document_start(mut self, enabled: bool) -> Self {
        self.document_start = enabled;
        self
    }

    pub fn validate(
        &self,
        definition: &ResourceDefinition,
        input: &Value,
    ) -> Result<(), ValidationError> {
        definition.schema().validate(input)
    }

    /// validate input, render it and produce the complete state record.
    /// nothing is returned unless every step succeeded
    #[instrument(skip(self, definition, input), fields(kind = definition.crd.kind()))]
    pub fn render(
        &self,
        definition: &ResourceDefinition,
        input: &Value,
    ) -> Result<ResourceState, ManifestError> {
        self.validate(definition, input)?;
        let yaml = self.serialize(definition, input)?;
        let id = self.ids.next_id();

        let state = ResourceState {
            id,
            api_version: definition.crd.api_version(),
            kind: definition.crd.kind().to_owned(),
            metadata: input.get("metadata").cloned().unwrap_or(Value::Null),
            spec: input.get("spec").filter(|spec| !spec.is_null()).cloned(),
            yaml,
        };
        debug!(id, object = %state.object_key(), "rendered manifest");
        Ok(state)
    }

    /// manifest text only, no id is consumed
    pub fn render_yaml(
        &self,
        definition: &ResourceDefinition,
        input: &Value,
    ) -> Result<String, ManifestError> {
        self.validate(definition, input)?;
        self.serialize(definition, input)
    }

    /// build state from an existing manifest document.
    /// `apiVersion` and `kind` must match the definition
    #[instrument(skip(self, definition, manifest), fields(kind = definition.crd.kind()))]
    pub fn import(
        &self,
        definition: &ResourceDefinition,
        manifest: &str,
    ) -> Result<ResourceState, ManifestError> {
        let document: YamlValue =
            serde_yaml::from_str(manifest).map_err(SerializationError::from)?;
        let Some(mapping) = document.as_mapping() else {
            return Err(ValidationError::single(
                AttributePath::root(),
                "manifest must be a mapping",
            )
            .into());
        };

        let mut violations = vec![];
        check_identity(definition, mapping, &mut violations);
        let fields = decode_block(
            &definition.manifest_attributes(),
            mapping,
            &AttributePath::root(),
            &mut violations,
        );
        if !violations.is_empty() {
            return Err(ValidationError::new(violations).into());
        }

        trace!(fields = fields.len(), "decoded manifest");
        self.render(definition, &Value::Object(fields))
    }

    fn serialize(
        &self,
        definition: &ResourceDefinition,
        input: &Value,
    ) -> Result<String, ManifestError> {
        let empty = Map::new();
        let fields = input.as_object().unwrap_or(&empty);

        let mut document = Mapping::new();
        document.insert(
            YamlValue::String("apiVersion".to_owned()),
            YamlValue::String(definition.crd.api_version()),
        );
        document.insert(
            YamlValue::String("kind".to_owned()),
            YamlValue::String(definition.crd.kind().to_owned()),
        );
        if let Some(body) = encode_block(
            &definition.manifest_attributes(),
            fields,
            &AttributePath::root(),
        )? {
            for (key, value) in body {
                document.insert(key, value);
            }
        }

        let text = to_yaml_string(&document)?;
        if self.document_start {
            Ok(format!("{}{}", DOCUMENT_START, text))
        } else {
            Ok(text)
        }
    }
}

fn check_identity(definition: &ResourceDefinition, mapping: &Mapping, violations: &mut Vec<Violation>) {
    let expected_api_version = definition.crd.api_version();
    match mapping.get("apiVersion").and_then(YamlValue::as_str) {
        Some(api_version) if api_version == expected_api_version => {}
        other => violations.push(Violation::new(
            AttributePath::new("api_version"),
            format!("expected {:?}, got {:?}", expected_api_version, other),
        )),
    }
    match mapping.get("kind").and_then(YamlValue::as_str) {
        Some(kind) if kind == definition.crd.kind() => {}
        other => violations.push(Violation::new(
            AttributePath::new("kind"),
            format!("expected {:?}, got {:?}", definition.crd.kind(), other),
        )),
    }
}
