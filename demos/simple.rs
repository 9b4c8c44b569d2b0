//! Parse a content file, inspect it and write it back.
//!
//! Run with: cargo run --example simple

use pdx_script::{parse, to_string, Node};
use std::error::Error;

const SOURCE: &str = r#"
# common/institutions/00_institutions.txt
institution_schools = {
    icon = "gfx/interface/icons/institution_icons/schools.dds"
    max_size = 5
    possible = { has_law = law_public_schools }
    possible = { has_law = law_religious_schools }
}
"#;

fn main() -> Result<(), Box<dyn Error>> {
    let doc = parse(SOURCE);

    let root = doc.as_table().ok_or("expected a table at the root")?;
    let name = root.first_key().ok_or("empty file")?;
    println!("Defines: {}", name);

    // `possible` repeats, so the block arrives as an entry list
    let institution = root.get(name).ok_or("missing body")?;
    println!("Body kind: {}", institution.kind());

    if let Some(icon) = institution.get("icon").and_then(Node::as_str) {
        println!("Icon: {}", icon);
    }

    for entry in institution.clone().into_list() {
        if let Some(law) = entry.get("possible").and_then(|p| p.get("has_law")) {
            println!("Possible with: {}", law);
        }
    }

    println!("\nWritten back:\n{}", to_string(&doc));
    Ok(())
}
