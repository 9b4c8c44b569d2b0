//! Property-based tests for the parser and writer.
//!
//! The central property: a tree of tables with distinct keys, holding scalars and flags,
//! comes back unchanged from `parse(to_string(tree))`. Arbitrary input must never panic.

use pdx_script::{parse, parse_with_options, to_string, Node, ParseOptions, Table};
use proptest::prelude::*;

fn key() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,10}"
}

fn scalar() -> impl Strategy<Value = Node> {
    prop_oneof![
        "[a-zA-Z0-9_./@:-]{1,12}",
        "[a-z]{1,5}( [a-z]{1,5}){1,2}",
        "[a-z]{1,4}[={}<>#][a-z]{1,4}",
        "[a-z]{1,4}\"[a-z]{1,4}",
        "['\"][a-z0-9_]{0,6}",
        "'[a-z]{1,4}'[a-z]{1,4}",
    ]
    .prop_map(Node::Scalar)
}

fn leaf() -> impl Strategy<Value = Node> {
    prop_oneof![4 => scalar(), 1 => Just(Node::Flag)]
}

fn table_of(value: impl Strategy<Value = Node>) -> impl Strategy<Value = Table> {
    prop::collection::vec((key(), value), 0..6).prop_map(|entries| {
        let mut table = Table::new();
        for (key, value) in entries {
            if !table.contains_key(&key) {
                table.insert(key, value);
            }
        }
        table
    })
}

fn unique_key_tree() -> impl Strategy<Value = Table> {
    let node = leaf().prop_recursive(3, 32, 6, |inner| table_of(inner).prop_map(Node::Table));
    table_of(node)
}

fn short_scalar_list() -> impl Strategy<Value = Vec<Node>> {
    prop::collection::vec("[a-z0-9]{1,6}".prop_map(Node::Scalar), 1..=3)
}

proptest! {
    #[test]
    fn prop_unique_key_tree_round_trips(table in unique_key_tree()) {
        let tree = Node::Table(table);
        let text = to_string(&tree);
        prop_assert_eq!(parse(&text), tree, "written as:\n{}", text);
    }

    #[test]
    fn prop_scalar_values_survive_quoting(value in scalar()) {
        let mut table = Table::new();
        table.insert("key".to_string(), value.clone());
        let text = to_string(&Node::Table(table));
        let parsed = parse(&text);
        prop_assert_eq!(parsed.get("key"), Some(&value));
    }

    #[test]
    fn prop_short_lists_are_inline(items in short_scalar_list()) {
        let mut table = Table::new();
        table.insert("list".to_string(), Node::List(items.clone()));
        let text = to_string(&Node::Table(table));
        prop_assert!(!text.contains('\n'));

        // A short list reads back as a table of flags keyed by its values
        let back = parse(&text);
        let list = back.get("list").and_then(Node::as_table).cloned().unwrap_or_default();
        for item in &items {
            prop_assert!(list.contains_key(item.as_str().unwrap_or_default()));
        }
    }

    #[test]
    fn prop_parse_never_panics(input in any::<String>()) {
        for options in [
            ParseOptions::extended(),
            ParseOptions::plain(),
            ParseOptions::fold_comparisons(),
        ] {
            let doc = parse_with_options(&input, options);
            let _ = to_string(&doc);
        }
    }

    #[test]
    fn prop_parse_never_panics_on_script_like_input(input in "[a-z{}=<>#\"' \n\\\\]{0,64}") {
        let doc = parse(&input);
        let _ = parse(&to_string(&doc));
    }
}
