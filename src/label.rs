//! Label resolution - turns a schema node into display segments.
//!
//! Pure and total over the defined node variants: every reference,
//! booleanish and regular node yields at least one segment, and anything
//! else yields no label at all. Malformed hints (wrong-typed `format`,
//! missing `items`, ...) fall back to the plain keyword rather than failing;
//! this is a best-effort display label.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::format::applicable_format;
use crate::node::{last_path_segment, CombinerKind, RegularNode, SchemaNode, TypeKind};

/// Separator rendered between consecutive type labels.
pub const TYPE_SEPARATOR: &str = " or ";

/// One piece of a rendered label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Segment {
    /// Regular text, e.g. a resolved `$ref` name.
    Plain(String),
    /// De-emphasized text, e.g. type keywords and fallbacks.
    Muted(String),
    /// The literal `" or "` between two type labels.
    Separator,
}

impl Segment {
    /// The printable text of this segment.
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(s) | Segment::Muted(s) => s,
            Segment::Separator => TYPE_SEPARATOR,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// A type or combiner keyword on a regular node, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Type(TypeKind),
    Combiner(CombinerKind),
}

impl Keyword {
    fn as_str(&self) -> &'static str {
        match self {
            Keyword::Type(t) => t.as_str(),
            Keyword::Combiner(c) => c.as_str(),
        }
    }

    /// Whether the node's own display name replaces the raw keyword.
    fn renders_name(&self) -> bool {
        matches!(self, Keyword::Type(TypeKind::Object) | Keyword::Type(TypeKind::Array))
    }
}

/// Resolve the display label for a schema node.
///
/// Returns one segment per applicable type/combiner keyword, with a
/// [`Segment::Separator`] between consecutive entries, or `None` when the
/// node variant is not renderable. Never fails; see the module docs.
///
/// # Example
///
/// ```
/// use schema_label::{resolve_label, SchemaNode, Segment};
/// use serde_json::json;
///
/// let node = SchemaNode::from_value(&json!({
///     "type": "string",
///     "format": "date-time"
/// }));
/// assert_eq!(
///     resolve_label(&node),
///     Some(vec![Segment::Muted("string<date-time>".into())])
/// );
/// ```
pub fn resolve_label(node: &SchemaNode) -> Option<Vec<Segment>> {
    match node {
        SchemaNode::Reference { resolved, .. } => Some(vec![Segment::Plain(
            resolved.clone().unwrap_or_else(|| "$ref".to_string()),
        )]),
        SchemaNode::Booleanish { permits_anything } => Some(vec![Segment::Muted(
            if *permits_anything { "any" } else { "never" }.to_string(),
        )]),
        SchemaNode::Regular(node) => Some(regular_label(node)),
        SchemaNode::Other => None,
    }
}

/// Resolve a node's label as a single joined string.
///
/// Convenience over [`resolve_label`] for callers that don't render
/// segments individually.
pub fn label_text(node: &SchemaNode) -> Option<String> {
    resolve_label(node).map(|segments| segments.iter().map(Segment::text).collect())
}

fn regular_label(node: &RegularNode) -> Vec<Segment> {
    let format = applicable_format(node);

    let keywords: Vec<Keyword> = node
        .types
        .iter()
        .copied()
        .map(Keyword::Type)
        .chain(node.combiners.iter().copied().map(Keyword::Combiner))
        .collect();

    if keywords.is_empty() {
        let text = match format {
            None => "any".to_string(),
            Some((_, f)) => format!("<{}>", f),
        };
        return vec![Segment::Muted(text)];
    }

    let mut segments = Vec::with_capacity(keywords.len() * 2 - 1);
    for keyword in keywords {
        if !segments.is_empty() {
            segments.push(Segment::Separator);
        }
        segments.push(Segment::Muted(printed_name(node, keyword, format.as_ref())));
    }
    segments
}

/// Compute the printed name for one keyword on a regular node.
fn printed_name(
    node: &RegularNode,
    keyword: Keyword,
    format: Option<&(TypeKind, String)>,
) -> String {
    let named = keyword.renders_name() && node.name.is_some();

    let mut printed = if named {
        node.name.clone().unwrap_or_default()
    } else {
        match (keyword, format) {
            (Keyword::Type(t), Some((owner, f))) if t == *owner => {
                format!("{}<{}>", keyword.as_str(), f)
            }
            _ => keyword.as_str().to_string(),
        }
    };

    match keyword {
        // The array override only fires while the name is still the
        // default; a display name supplied with the node wins.
        Keyword::Type(TypeKind::Array) if !named => {
            if let Some(name) = array_items_name(&node.fragment) {
                printed = name;
            }
        }
        Keyword::Type(TypeKind::Object) => {
            if let Some(name) = object_ref_name(&node.fragment) {
                printed = name;
            }
        }
        _ => {}
    }

    printed
}

/// Friendlier name for an `array` keyword, from the `items` sub-schema.
///
/// Precedence: `items.objectRefType` (the viewer's own annotation), then
/// `items.$ref`. Kept as an explicit chain so new annotation kinds slot in
/// without touching the general printed-name computation.
fn array_items_name(fragment: &Value) -> Option<String> {
    let items = fragment.get("items")?;
    if let Some(annotation) = items.get("objectRefType").and_then(Value::as_str) {
        return Some(format!("array[{}]", annotation));
    }
    let pointer = items.get("$ref").and_then(Value::as_str)?;
    Some(format!("array[{}]", last_path_segment(pointer)))
}

/// Friendlier name for an `object` keyword, from the fragment itself.
///
/// Same precedence as the array chain: `objectRefType` before `$ref`.
fn object_ref_name(fragment: &Value) -> Option<String> {
    if let Some(annotation) = fragment.get("objectRefType").and_then(Value::as_str) {
        return Some(annotation.to_string());
    }
    let pointer = fragment.get("$ref").and_then(Value::as_str)?;
    Some(last_path_segment(pointer))
}
