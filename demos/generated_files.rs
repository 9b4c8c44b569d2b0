//! Generating script files from Rust data.
//!
//! Each building becomes one file with the standard generated-file header.
//!
//! Run with: cargo run --example generated_files

use pdx_script::{parse, to_node, to_writer_with_options, Node, Table, WriterOptions};
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
struct Building {
    texture: String,
    city_type: CityType,
    unique: bool,
    production_method_groups: Vec<String>,
    upkeep: Option<f64>,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum CityType {
    City,
    Farm,
    Mine,
}

fn main() -> Result<(), Box<dyn Error>> {
    let buildings = [
        (
            "building_iron_mine",
            Building {
                texture: "gfx/interface/icons/building_icons/iron mine.dds".to_string(),
                city_type: CityType::Mine,
                unique: false,
                production_method_groups: vec!["pmg_base_iron".to_string()],
                upkeep: Some(1.5),
            },
        ),
        (
            "building_wheat_farm",
            Building {
                texture: "gfx/interface/icons/building_icons/wheat_farm.dds".to_string(),
                city_type: CityType::Farm,
                unique: false,
                production_method_groups: vec![
                    "pmg_base_wheat".to_string(),
                    "pmg_secondary_wheat".to_string(),
                    "pmg_harvesting_wheat".to_string(),
                    "pmg_ownership_wheat".to_string(),
                ],
                upkeep: None,
            },
        ),
        (
            "building_palace",
            Building {
                texture: "gfx/interface/icons/building_icons/palace.dds".to_string(),
                city_type: CityType::City,
                unique: true,
                production_method_groups: vec![],
                upkeep: Some(10.0),
            },
        ),
    ];

    let options = WriterOptions::new().generated_by("generated_files.rs");

    for (name, building) in &buildings {
        let mut root = Table::new();
        root.insert(name.to_string(), to_node(building)?);
        let root = Node::Table(root);

        let mut file = Vec::new();
        to_writer_with_options(&mut file, &root, options.clone())?;

        let text = String::from_utf8(file)?;
        println!("==> {}.txt\n{}\n", name, text);

        // Lists come back as tables of flags, but the definition name survives
        let back = parse(&text);
        assert_eq!(back.as_table().and_then(Table::first_key), Some(*name));
    }

    Ok(())
}
