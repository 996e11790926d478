//! Manifest documents
//!
//! A manifest is one top-level object as it appears in a YAML or JSON file,
//! tagged with its `kind`. Decoding checks the tag first so an unsupported
//! kind is reported as such instead of as a generic parse error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::defaulter::Defaulter;
use crate::domain::entities::{
    ConfigMap, Endpoints, LimitRange, Namespace, Node, PersistentVolume, PersistentVolumeClaim,
    Pod, PodAttachOptions, PodExecOptions, ReplicationController, Secret, Service,
};
use crate::domain::object::ObjectKind;
use crate::error::{DefaultsError, DefaultsResult};

macro_rules! manifest_kinds {
    ($( $kind:ident ),+ $(,)?) => {
        /// One top-level API object, tagged by `kind`.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "kind")]
        pub enum Manifest {
            $( $kind($kind), )+
        }

        impl Manifest {
            /// Kinds a manifest may carry.
            pub const KINDS: &'static [ObjectKind] = &[ $( ObjectKind::$kind, )+ ];

            pub fn kind(&self) -> ObjectKind {
                match self {
                    $( Manifest::$kind(_) => ObjectKind::$kind, )+
                }
            }

            /// Default the wrapped object and everything nested in it.
            pub fn apply_defaults(&mut self, defaulter: &Defaulter) {
                match self {
                    $( Manifest::$kind(object) => defaulter.apply_defaults(object), )+
                }
            }
        }

        $(
            impl From<$kind> for Manifest {
                fn from(object: $kind) -> Self {
                    Manifest::$kind(object)
                }
            }
        )+
    };
}

manifest_kinds! {
    Pod,
    ReplicationController,
    Service,
    Endpoints,
    Node,
    Namespace,
    Secret,
    ConfigMap,
    PersistentVolume,
    PersistentVolumeClaim,
    LimitRange,
    PodExecOptions,
    PodAttachOptions,
}

impl Manifest {
    pub fn from_yaml_str(input: &str) -> DefaultsResult<Self> {
        let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(input)?;
        let kind = value.get("kind").and_then(serde_yaml_ng::Value::as_str);
        check_kind(kind)?;
        let manifest: Manifest = serde_yaml_ng::from_value(value.clone())?;
        manifest.ensure_complete(&serde_json::to_value(&value)?)?;
        Ok(manifest)
    }

    pub fn from_json_str(input: &str) -> DefaultsResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        let kind = value.get("kind").and_then(serde_json::Value::as_str);
        check_kind(kind)?;
        let manifest: Manifest = serde_json::from_value(value.clone())?;
        manifest.ensure_complete(&value)?;
        Ok(manifest)
    }

    pub fn to_yaml_string(&self) -> DefaultsResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Pretty-printed JSON.
    pub fn to_json_string(&self) -> DefaultsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Fails when the decoded object no longer holds a field of `input`.
    ///
    /// Fields outside the model would otherwise vanish on the way back out,
    /// and a volume with an unmodelled source would be defaulted to an
    /// empty dir.
    fn ensure_complete(&self, input: &Value) -> DefaultsResult<()> {
        let decoded = serde_json::to_value(self)?;
        match dropped_field("", input, &decoded) {
            Some(path) => Err(DefaultsError::UnsupportedField {
                kind: self.kind().name().to_string(),
                path,
            }),
            None => Ok(()),
        }
    }
}

fn check_kind(kind: Option<&str>) -> DefaultsResult<()> {
    let kind = kind.unwrap_or_default();
    if Manifest::KINDS.iter().any(|known| known.name() == kind) {
        Ok(())
    } else {
        Err(DefaultsError::UnknownKind {
            kind: kind.to_string(),
        })
    }
}

/// Path of the first field that carries data in `input` but is missing
/// from `decoded`. Scalars are not compared; quantities are re-formatted.
fn dropped_field(path: &str, input: &Value, decoded: &Value) -> Option<String> {
    match (input, decoded) {
        (Value::Object(fields), Value::Object(kept)) => fields.iter().find_map(|(key, value)| {
            let path = if path.is_empty() {
                key.clone()
            } else {
                format!("{path}.{key}")
            };
            match kept.get(key) {
                Some(kept_value) => dropped_field(&path, value, kept_value),
                None => carries_data(value).then_some(path),
            }
        }),
        (Value::Array(items), Value::Array(kept)) => items
            .iter()
            .zip(kept)
            .enumerate()
            .find_map(|(index, (item, kept_item))| {
                dropped_field(&format!("{path}[{index}]"), item, kept_item)
            }),
        _ => None,
    }
}

// Zero values are omitted on output, so losing them loses nothing.
fn carries_data(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64() != Some(0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => items.iter().any(carries_data),
        Value::Object(fields) => fields.values().any(carries_data),
    }
}
