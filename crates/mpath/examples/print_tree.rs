//! CLI example that loads flat records and prints the tree built from them
//!
//! Usage:
//!   cargo run --example print_tree [records.json] [--strict] [--sort]
//!
//! The JSON file holds an array of records such as
//! `{"id": 2, "position": 0, "path": [1, 2], "name": "item 2"}`.
//! If no file is provided, a small built-in collection is used.
//! Set `RUST_LOG=debug` to see skipped records.

use anyhow::{Context, Result};
use mpath::prelude::*;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Label {
    #[serde(default)]
    name: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let mut file = None;
    let mut options = BuildOptions::new();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--strict" => options = options.strict(),
            "--sort" => options = options.sort_by_position(true),
            _ => file = Some(arg),
        }
    }

    let records: Vec<Node<Label>> = match &file {
        Some(path) => {
            println!("Loading records: {}", path);
            let json =
                fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
            serde_json::from_str(&json).with_context(|| format!("Failed to parse {}", path))?
        }
        None => sample(),
    };

    let index = RecordIndex::new(records);
    let mut tree = Node::default();
    let summary = TreeBuilder::new(&index)
        .with_options(options)
        .build_into(&mut tree)
        .context("Failed to build tree")?;

    println!();
    for (depth, node) in tree.walk(TraversalOrder::PreOrder) {
        let indent = "  ".repeat(depth);
        if node.data.name.is_empty() {
            println!("{}{} @{} (placeholder)", indent, node.id, node.position);
        } else {
            println!("{}{} @{} {}", indent, node.id, node.position, node.data.name);
        }
    }

    println!();
    println!("Summary:");
    println!("  Root: {}", summary.root);
    println!("  Records attached: {}", summary.attached);
    println!("  Placeholders: {}", summary.placeholders.len());
    println!("  Nodes: {}", tree.node_count());
    if !summary.skipped.is_empty() {
        let skipped: Vec<String> = summary.skipped.iter().map(|id| id.to_string()).collect();
        println!("  Skipped (other root): {}", skipped.join(", "));
    }

    Ok(())
}

fn sample() -> Vec<Node<Label>> {
    let label = |name: &str| Label {
        name: name.to_string(),
    };
    vec![
        Node::new(6, 0, &[1, 3, 6], label("item 6")),
        Node::new(1, 0, &[1], label("item 1")),
        Node::new(5, 1, &[1, 2, 5], label("item 5")),
        Node::new(2, 0, &[1, 2], label("item 2")),
        Node::new(4, 0, &[1, 2, 4], label("item 4")),
        Node::new(8, 2, &[1, 7, 8], label("item 8")),
    ]
}
