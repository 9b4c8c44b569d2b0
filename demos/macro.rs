//! Building script trees with the pdx! macro.
//!
//! Run with: cargo run --example macro

use pdx_script::{pdx, to_string};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let flag = pdx!(flag);
    let yes = pdx!(true);
    let number = pdx!(42);
    let text = pdx!("Hello, script!");

    println!("Leaves:");
    println!("  flag:   {:?}", flag);
    println!("  bool:   {}", yes);
    println!("  number: {}", number);
    println!("  text:   {}\n", text);

    let short = pdx!({ "required_techs": ["tech_a", "tech_b", "tech_c"] });
    let long = pdx!({ "states": ["s1", "s2", "s3", "s4", "s5"] });

    println!("Lists:");
    println!("{}\n{}\n", to_string(&short), to_string(&long));

    let decision = pdx!({
        "my_decision": {
            "is_shown": { "has_law": "law_a" },
            "possible": { "is_at_war": false, "has_variable": flag },
            "effects": [
                { "add_gold": 100 },
                { "add_prestige": 10 }
            ],
            "ai_chance": { "base": 0.5 }
        }
    });

    println!("Document:\n{}", to_string(&decision));
    Ok(())
}
