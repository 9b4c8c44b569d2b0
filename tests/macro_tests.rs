use pdx_script::{parse, pdx, to_string, Node, Table};

#[test]
fn test_pdx_macro_flag() {
    assert_eq!(pdx!(flag), Node::Flag);
}

#[test]
fn test_pdx_macro_booleans() {
    assert_eq!(pdx!(true), Node::from("yes"));
    assert_eq!(pdx!(false), Node::from("no"));
}

#[test]
fn test_pdx_macro_numbers() {
    assert_eq!(pdx!(42), Node::from("42"));
    assert_eq!(pdx!(3.5), Node::from("3.5"));
    assert_eq!(pdx!((-123)), Node::from("-123"));
}

#[test]
fn test_pdx_macro_strings() {
    assert_eq!(pdx!("hello world"), Node::scalar("hello world"));
    assert_eq!(pdx!(""), Node::scalar(""));
}

#[test]
fn test_pdx_macro_lists() {
    assert_eq!(pdx!([]), Node::List(vec![]));

    let list = pdx!(["a", 1, flag, [2, 3]]);
    assert_eq!(
        list,
        Node::List(vec![
            Node::from("a"),
            Node::from(1),
            Node::Flag,
            Node::List(vec![Node::from(2), Node::from(3)]),
        ])
    );
}

#[test]
fn test_pdx_macro_tables() {
    assert_eq!(pdx!({}), Node::Table(Table::new()));

    let node = pdx!({
        "icon": "gfx/icon.dds",
        "max_size": 5,
        "is_hidden": flag,
    });

    let table = node.as_table().unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.get("icon"), Some(&Node::from("gfx/icon.dds")));
    assert_eq!(table.get("max_size"), Some(&Node::from("5")));
    assert_eq!(table.get("is_hidden"), Some(&Node::Flag));
}

#[test]
fn test_pdx_macro_nested_document() {
    let node = pdx!({
        "my_decision": {
            "is_shown": { "has_law": "law_a" },
            "effects": [
                { "add_gold": 5 },
                { "add_prestige": 10 }
            ],
            "ai_chance": { "base": 0.5 }
        }
    });

    let text = to_string(&node);
    assert_eq!(
        text,
        "my_decision = {\n\
         \tis_shown = {\n\
         \t\thas_law = law_a\n\
         \t}\n\
         \teffects = {\n\
         \t\tadd_gold = 5\n\
         \t\tadd_prestige = 10\n\
         \t}\n\
         \tai_chance = {\n\
         \t\tbase = 0.5\n\
         \t}\n\
         }"
    );

    // Distinct keys in the flattened list read back as one table
    let back = parse(&text);
    let effects = back
        .get("my_decision")
        .and_then(|d| d.get("effects"))
        .and_then(Node::as_table)
        .unwrap();
    assert_eq!(effects.get("add_gold"), Some(&Node::from("5")));
    assert_eq!(effects.get("add_prestige"), Some(&Node::from("10")));
}

#[test]
fn test_pdx_macro_with_variables() {
    let name = "law_dynamic";
    let level = 3u8;
    let modifiers = vec![Node::from("a"), Node::from("b")];

    let node = pdx!({
        "name": name,
        "level": level,
        "modifiers": modifiers
    });

    assert_eq!(node.get("name"), Some(&Node::from("law_dynamic")));
    assert_eq!(node.get("level"), Some(&Node::from("3")));
    assert_eq!(
        node.get("modifiers"),
        Some(&Node::List(vec![Node::from("a"), Node::from("b")]))
    );
}
