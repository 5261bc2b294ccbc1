//! Schema Label CLI
//!
//! Command-line interface for resolving display labels of schema nodes.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use schema_label::{
    label_text, load_schema_auto, navigate_fragment, resolve_label, SchemaNode, Segment,
};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "schema-label")]
#[command(about = "Resolve display type labels for JSON Schema nodes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the label for a single schema node
    Label {
        /// Schema source: file path or URL (http:// or https://)
        schema: String,

        /// JSON Pointer to the node (default: document root)
        #[arg(long, short, default_value = "#")]
        pointer: String,

        /// Output the label and its segments as JSON
        #[arg(long)]
        json: bool,
    },

    /// Walk a schema document and print a label per node
    Outline {
        /// Schema source: file path or URL (http:// or https://)
        schema: String,

        /// Maximum nesting depth to descend into
        #[arg(long, default_value_t = 8)]
        depth: usize,

        /// Output rows as JSON
        #[arg(long)]
        json: bool,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Label {
            schema,
            pointer,
            json,
        } => run_label(&schema, &pointer, json),

        Commands::Outline {
            schema,
            depth,
            json,
            output,
        } => run_outline(&schema, depth, json, output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn run_label(schema_source: &str, pointer: &str, json: bool) -> Result<(), u8> {
    let schema = load_schema_auto(schema_source).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let fragment = navigate_fragment(&schema, pointer).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let node = SchemaNode::from_value(fragment);
    let segments = resolve_label(&node);

    if json {
        let label: Option<String> = segments
            .as_ref()
            .map(|segs| segs.iter().map(Segment::text).collect());
        let output = serde_json::json!({
            "pointer": pointer,
            "label": label,
            "segments": segments.as_deref().unwrap_or(&[]),
        });
        println!("{}", output);
    } else if let Some(segments) = &segments {
        let text: String = segments.iter().map(Segment::text).collect();
        println!("{}", text);
    }

    match segments {
        Some(_) => Ok(()),
        None => {
            if !json {
                eprintln!("Error: no label for node at {}", pointer);
            }
            Err(1)
        }
    }
}

#[derive(serde::Serialize)]
struct OutlineRow {
    pointer: String,
    label: String,
}

fn run_outline(
    schema_source: &str,
    depth: usize,
    json: bool,
    output: Option<PathBuf>,
) -> Result<(), u8> {
    let schema = load_schema_auto(schema_source).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let mut rows = Vec::new();
    collect_rows(&schema, "#".to_string(), depth, &mut rows);

    let rendered = if json {
        serde_json::to_string_pretty(&rows).map_err(|e| {
            eprintln!("Error serializing output: {}", e);
            2u8
        })?
    } else {
        let width = rows.iter().map(|r| r.pointer.len()).max().unwrap_or(0);
        rows.iter()
            .map(|r| format!("{:width$}  {}", r.pointer, r.label, width = width))
            .collect::<Vec<_>>()
            .join("\n")
    };

    match output {
        Some(path) => {
            std::fs::write(&path, rendered).map_err(|e| {
                eprintln!("Error writing to {}: {}", path.display(), e);
                3u8
            })?;
        }
        None => {
            println!("{}", rendered);
        }
    }

    Ok(())
}

/// Collect one labeled row per node, walking the places sub-schemas live:
/// `properties`, `items`, the combiner branches, and `$defs`/`definitions`.
fn collect_rows(value: &Value, pointer: String, depth: usize, rows: &mut Vec<OutlineRow>) {
    let node = SchemaNode::from_value(value);
    if let Some(label) = label_text(&node) {
        rows.push(OutlineRow {
            pointer: pointer.clone(),
            label,
        });
    }

    // A pure reference is a leaf; its target is listed under $defs anyway.
    if depth == 0 || matches!(node, SchemaNode::Reference { .. }) {
        return;
    }

    let Value::Object(map) = value else {
        return;
    };

    if let Some(Value::Object(props)) = map.get("properties") {
        for (name, child) in props {
            let child_pointer = format!("{}/properties/{}", pointer, escape_pointer_key(name));
            collect_rows(child, child_pointer, depth - 1, rows);
        }
    }

    if let Some(items) = map.get("items") {
        collect_rows(items, format!("{}/items", pointer), depth - 1, rows);
    }

    for combiner in ["oneOf", "anyOf", "allOf"] {
        if let Some(Value::Array(branches)) = map.get(combiner) {
            for (i, branch) in branches.iter().enumerate() {
                let branch_pointer = format!("{}/{}/{}", pointer, combiner, i);
                collect_rows(branch, branch_pointer, depth - 1, rows);
            }
        }
    }

    if let Some(negated) = map.get("not") {
        collect_rows(negated, format!("{}/not", pointer), depth - 1, rows);
    }

    for defs_key in ["$defs", "definitions"] {
        if let Some(Value::Object(defs)) = map.get(defs_key) {
            for (name, def) in defs {
                let def_pointer = format!("{}/{}/{}", pointer, defs_key, escape_pointer_key(name));
                collect_rows(def, def_pointer, depth - 1, rows);
            }
        }
    }
}

/// Apply JSON Pointer encoding to a key (~ = ~0, / = ~1).
fn escape_pointer_key(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}
