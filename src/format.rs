//! Format-to-type matching.
//!
//! A `format` keyword refines one of the primitive types. Which one is not
//! stated in the document, so ownership comes from a fixed table of known
//! formats: the integer/number formats from OpenAPI, everything else owned
//! by `string` (the JSON Schema drafts define string formats only).

use crate::node::{RegularNode, TypeKind};

/// Candidate owning types for a format string, in precedence order.
///
/// `int32`/`int64` may sit on either an `integer` or a `number` declaration,
/// so both are listed and the node's own declaration order decides.
pub fn format_owners(format: &str) -> &'static [TypeKind] {
    match format {
        "int32" | "int64" => &[TypeKind::Integer, TypeKind::Number],
        "float" | "double" | "decimal" => &[TypeKind::Number],
        _ => &[TypeKind::String],
    }
}

/// Compute the single format annotation applicable to a regular node.
///
/// Scans the node's declared types in order and returns the first one the
/// fragment's `format` can be declared against. A typeless node gets the
/// format's primary owner, so `{ "format": "email" }` still reports
/// `(string, "email")`. Returns `None` when the fragment carries no `format`
/// or no declared type matches.
pub fn applicable_format(node: &RegularNode) -> Option<(TypeKind, String)> {
    let format = node.fragment.get("format")?.as_str()?;
    let owners = format_owners(format);

    if node.types.is_empty() {
        return Some((owners[0], format.to_string()));
    }

    node.types
        .iter()
        .copied()
        .find(|t| owners.contains(t))
        .map(|t| (t, format.to_string()))
}
