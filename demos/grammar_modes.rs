//! The three operator grammars side by side.
//!
//! Run with: cargo run --example grammar_modes

use pdx_script::{parse_with_options, to_string, Grammar, ParseOptions};
use std::error::Error;

const TRIGGER: &str = "trigger = {\n\tage >= 16\n\tgold<100\n\tis_ai = no\n}";

fn main() -> Result<(), Box<dyn Error>> {
    println!("Input:\n{}\n", TRIGGER);

    for grammar in [Grammar::Extended, Grammar::Plain, Grammar::FoldComparisons] {
        let doc = parse_with_options(TRIGGER, ParseOptions::new().with_grammar(grammar));
        let trigger = doc
            .get("trigger")
            .and_then(|t| t.as_table())
            .ok_or("trigger block missing")?;

        println!("{:?}:", grammar);
        for (key, value) in trigger {
            println!("  {:<10} -> {}", key, value.kind());
        }
        println!("{}\n", to_string(&doc));
    }

    Ok(())
}
