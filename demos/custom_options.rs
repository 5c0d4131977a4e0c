//! Customizing Yamlet output with Options.
//!
//! Run with: cargo run --example custom_options

use std::error::Error;
use yamlet::{node, to_string, to_string_with_options, Options};

fn main() -> Result<(), Box<dyn Error>> {
    let config = node!({
        "name": "MyApp",
        "version": "1.0.0",
        "profiles": ["dev", "release"],
        "debug": true,
    });

    // Default format: two-space indent, no document marker
    println!("Default:");
    println!("{}", to_string(&config)?);

    // Wider indentation
    println!("Four-space indent:");
    let wide = to_string_with_options(&config, Options::new().with_indent(4))?;
    println!("{}", wide);

    // Lead with the `---` document start marker
    println!("With document marker:");
    let marked = to_string_with_options(&config, Options::new().with_doc_start(true))?;
    println!("{}", marked);

    // The parser accepts any of these forms
    let reparsed = yamlet::parse_str(&marked)?;
    assert_eq!(reparsed, config);
    println!("All variants parse back to the same tree");

    Ok(())
}
