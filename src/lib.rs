//! Schema Label Resolver
//!
//! Resolves human-readable type labels for nodes in a parsed JSON Schema
//! document, for display in a schema viewer.
//!
//! A node is classified once into a closed variant set (reference, boolean
//! schema, regular schema, or unsupported), then [`resolve_label`] turns it
//! into an ordered sequence of display segments: type keywords with optional
//! `format` suffixes, friendlier names derived from `$ref` targets or the
//! viewer's `objectRefType` annotation, and `" or "` separators when several
//! types apply.
//!
//! # Example
//!
//! ```
//! use schema_label::{label_text, SchemaNode};
//! use serde_json::json;
//!
//! let node = SchemaNode::from_value(&json!({
//!     "type": ["string", "number"],
//!     "format": "date-time"
//! }));
//! assert_eq!(label_text(&node).as_deref(), Some("string<date-time> or number"));
//!
//! let node = SchemaNode::from_value(&json!({
//!     "type": "array",
//!     "items": { "$ref": "#/definitions/Gadget" }
//! }));
//! assert_eq!(label_text(&node).as_deref(), Some("array[Gadget]"));
//! ```
//!
//! # Labeling Rules
//!
//! | Node | Label |
//! |------|-------|
//! | `$ref` with a known target name | the target name |
//! | `$ref`, target unknown | `$ref` |
//! | `true` / `false` schema | `any` / `never` |
//! | no types, no combiners | `any`, or `<format>` when a `format` exists |
//! | type with matching `format` | `string<date-time>` |
//! | `object` with `objectRefType` or `$ref` | the annotation / ref name |
//! | `array` with `items.objectRefType` or `items.$ref` | `array[Name]` |
//! | several keywords | joined with `" or "` |
//!
//! The resolver is a pure function of the node: it never mutates its input,
//! never fails on defined variants, and only reports "no label" for
//! fragments outside the variant set.

mod error;
mod format;
mod label;
mod loader;
mod node;

pub use error::LoadError;
pub use format::{applicable_format, format_owners};
pub use label::{label_text, resolve_label, Segment, TYPE_SEPARATOR};
pub use loader::{load_schema, load_schema_auto, load_schema_str, navigate_fragment};
pub use node::{last_path_segment, CombinerKind, RegularNode, SchemaNode, TypeKind};

#[cfg(feature = "remote")]
pub use loader::load_schema_url;
