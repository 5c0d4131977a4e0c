//! Working with Node trees for runtime flexibility.
//!
//! Run with: cargo run --example dynamic_values

use std::error::Error;
use yamlet::{node, parse_str, to_string, to_value, Node};

fn main() -> Result<(), Box<dyn Error>> {
    // Build a document dynamically with the node! macro
    let config = node!({
        "host": "localhost",
        "port": 8080,
        "features": ["auth", "logging", "metrics"],
        "debug": true,
    });

    println!("Config as Yamlet:\n{}", to_string(&config)?);

    // Access values dynamically
    if let Some(obj) = config.as_mapping() {
        if let Some(host) = obj.get("host").and_then(Node::as_str) {
            println!("Accessing field 'host': {}", host);
        }

        if let Some(port) = obj.get("port").and_then(Node::as_i64) {
            println!("Accessing field 'port': {}", port);
        }

        if let Some(features) = obj.get("features").and_then(Node::as_sequence) {
            println!("Accessing field 'features': {} items\n", features.len());
        }
    }

    // Parse text into a tree without deciding any types up front
    let doc = parse_str("service: billing\nreplicas: 3\nlimits:\n  cpu: 2\n  memory: 512\n")?;
    let limits = doc
        .as_mapping()
        .and_then(|m| m.get("limits"))
        .and_then(Node::as_mapping);
    if let Some(limits) = limits {
        println!("cpu limit:    {:?}", limits.get("cpu").and_then(Node::as_i64));
        println!("memory limit: {:?}\n", limits.get("memory").and_then(Node::as_i64));
    }

    // Convert any serializable value into a tree
    let tree = to_value(&vec![("x", 1), ("y", 2)])?;
    println!("Tuples as a tree: {}", tree);

    // Runtime type checks
    println!("is_mapping:  {}", config.is_mapping());
    println!("is_sequence: {}", config.is_sequence());
    println!("is_scalar:   {}", config.is_scalar());

    Ok(())
}
