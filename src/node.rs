//! Schema node model.
//!
//! A node is classified exactly once, at the boundary, into a closed set of
//! variants. The resolver then matches exhaustively, so an unsupported
//! fragment falls out as [`SchemaNode::Other`] rather than an implicit
//! fall-through somewhere in the middle of label computation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Primitive type keywords a schema may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Null,
    Boolean,
    Object,
    Array,
    Number,
    Integer,
    String,
}

impl TypeKind {
    /// Returns the keyword as it appears in a schema document.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Null => "null",
            TypeKind::Boolean => "boolean",
            TypeKind::Object => "object",
            TypeKind::Array => "array",
            TypeKind::Number => "number",
            TypeKind::Integer => "integer",
            TypeKind::String => "string",
        }
    }

    /// Parse a type keyword from its schema spelling.
    ///
    /// Returns `None` for anything outside the fixed keyword set.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "null" => Some(TypeKind::Null),
            "boolean" => Some(TypeKind::Boolean),
            "object" => Some(TypeKind::Object),
            "array" => Some(TypeKind::Array),
            "number" => Some(TypeKind::Number),
            "integer" => Some(TypeKind::Integer),
            "string" => Some(TypeKind::String),
            _ => None,
        }
    }
}

/// Combiner keywords expressing logical composition of sub-schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CombinerKind {
    OneOf,
    AnyOf,
    AllOf,
    Not,
}

impl CombinerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CombinerKind::OneOf => "oneOf",
            CombinerKind::AnyOf => "anyOf",
            CombinerKind::AllOf => "allOf",
            CombinerKind::Not => "not",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "oneOf" => Some(CombinerKind::OneOf),
            "anyOf" => Some(CombinerKind::AnyOf),
            "allOf" => Some(CombinerKind::AllOf),
            "not" => Some(CombinerKind::Not),
            _ => None,
        }
    }
}

/// A regular (typed and/or combined) schema node.
#[derive(Debug, Clone, PartialEq)]
pub struct RegularNode {
    /// Declared type keywords, in declaration order.
    pub types: Vec<TypeKind>,
    /// Declared combiner keywords, in declaration order.
    pub combiners: Vec<CombinerKind>,
    /// The original schema object. Opaque to the resolver except for the
    /// optional `format`, `$ref`, `objectRefType` and `items.*` hints.
    pub fragment: Value,
    /// Display name supplied with the node (e.g. the fragment `title`).
    /// The resolver treats this as an opaque string and never recomputes it.
    pub name: Option<String>,
}

/// One position in a parsed JSON Schema document.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// A `$ref` to another definition.
    Reference {
        /// Friendly name of the target, when known.
        resolved: Option<String>,
        /// The raw pointer value.
        pointer: String,
    },
    /// A schema that is literally `true` or `false`.
    Booleanish {
        /// `true` permits anything; `false` permits nothing.
        permits_anything: bool,
    },
    Regular(RegularNode),
    /// Anything else. Not renderable.
    Other,
}

impl SchemaNode {
    /// Classify a raw schema fragment into a node variant.
    ///
    /// A fragment counts as a reference only when it carries `$ref` and no
    /// type or combiner keywords; a `$ref` alongside a declared type stays on
    /// the regular node so the object/array override rules can see it.
    pub fn from_value(value: &Value) -> SchemaNode {
        match value {
            Value::Bool(b) => SchemaNode::Booleanish {
                permits_anything: *b,
            },
            Value::Object(map) => {
                let types = declared_types(value);
                let combiners: Vec<CombinerKind> = map
                    .keys()
                    .filter_map(|k| CombinerKind::parse(k))
                    .collect();

                if let Some(pointer) = map.get("$ref").and_then(Value::as_str) {
                    if types.is_empty() && combiners.is_empty() {
                        return SchemaNode::Reference {
                            resolved: reference_display_name(pointer),
                            pointer: pointer.to_string(),
                        };
                    }
                }

                SchemaNode::Regular(RegularNode {
                    types,
                    combiners,
                    name: map
                        .get("title")
                        .and_then(Value::as_str)
                        .map(str::to_string),
                    fragment: value.clone(),
                })
            }
            _ => SchemaNode::Other,
        }
    }
}

fn declared_types(fragment: &Value) -> Vec<TypeKind> {
    match fragment.get("type") {
        Some(Value::String(s)) => TypeKind::parse(s).into_iter().collect(),
        Some(Value::Array(arr)) => arr
            .iter()
            .filter_map(Value::as_str)
            .filter_map(TypeKind::parse)
            .collect(),
        _ => Vec::new(),
    }
}

/// Friendly name for a reference target: the pointer's last path segment,
/// when it has a named one.
fn reference_display_name(pointer: &str) -> Option<String> {
    let segment = last_path_segment(pointer);
    if segment.is_empty() {
        None
    } else {
        Some(segment)
    }
}

/// Extract the final path component of a JSON-Pointer-style reference.
///
/// `#/definitions/Widget` yields `Widget`. JSON Pointer escapes are undone
/// (`~1` = `/`, `~0` = `~`).
pub fn last_path_segment(pointer: &str) -> String {
    let trimmed = pointer.trim_start_matches('#').trim_end_matches('/');
    let segment = trimmed.rsplit('/').next().unwrap_or(trimmed);
    segment.replace("~1", "/").replace("~0", "~")
}
