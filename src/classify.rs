//! Shape recovery for a single brace-delimited region.
//!
//! The parser collects every `key`, `key = value` and nested block of a region as a flat
//! list of [`Item`]s. [`classify`] then decides what the region denotes, looking only at
//! that list:
//!
//! | Items | Result |
//! |---|---|
//! | none | empty [`Node::Table`] |
//! | all assignments, keys distinct | [`Node::Table`] |
//! | all assignments, some key repeats | [`Node::EntryList`], one single-key table per item |
//! | no assignments | [`Node::Table`] of flags; a repeated key holds a [`Node::List`] of flags |
//! | mixed | [`Node::Table`]; a repeated key holds a [`Node::List`] of its values in order |
//! | any anonymous block | [`Node::List`] of the region's elements |
//!
//! No context from enclosing regions is consulted, so text written from a tree can be
//! classified differently when it is read back.

use crate::{Node, Table};
use indexmap::IndexMap;

/// What appeared in key position.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Key {
    Text(String),
    /// A nested block standing on its own, as in `{ { a = 1 } { b = 2 } }`.
    Block(Node),
}

/// One collected entry of a region.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Item {
    pub(crate) key: Key,
    pub(crate) value: Node,
    pub(crate) has_operator: bool,
}

impl Item {
    pub(crate) fn assignment(key: String, value: Node) -> Self {
        Item {
            key: Key::Text(key),
            value,
            has_operator: true,
        }
    }

    pub(crate) fn bare(key: String) -> Self {
        Item {
            key: Key::Text(key),
            value: Node::Flag,
            has_operator: false,
        }
    }

    pub(crate) fn block(node: Node) -> Self {
        Item {
            key: Key::Block(node),
            value: Node::Flag,
            has_operator: false,
        }
    }
}

/// Builds the node a region denotes from its collected items.
pub(crate) fn classify(items: Vec<Item>) -> Node {
    if items.is_empty() {
        tracing::trace!(shape = "table", items = 0, "classified region");
        return Node::Table(Table::new());
    }

    if items.iter().any(|item| matches!(item.key, Key::Block(_))) {
        tracing::trace!(shape = "list", items = items.len(), "classified anonymous region");
        return anonymous_sequence(items);
    }

    let all_assignments = items.iter().all(|item| item.has_operator);
    let count = items.len();

    let mut grouped: IndexMap<String, Vec<Node>> = IndexMap::with_capacity(count);
    let mut order = Vec::with_capacity(count);
    for item in items {
        if let Key::Text(key) = item.key {
            order.push(key.clone());
            grouped.entry(key).or_default().push(item.value);
        }
    }

    let has_duplicates = grouped.len() != count;

    if all_assignments && has_duplicates {
        tracing::trace!(shape = "entry_list", items = count, "classified region");
        return entry_list(order, grouped);
    }

    // Distinct assignments, bare keys and mixed regions all fold into one table; a key
    // seen more than once keeps every value in source order.
    tracing::trace!(
        shape = "table",
        items = count,
        duplicates = has_duplicates,
        "classified region"
    );
    let table = grouped
        .into_iter()
        .map(|(key, mut values)| {
            let value = if values.len() == 1 {
                values.pop().unwrap_or(Node::Flag)
            } else {
                Node::List(values)
            };
            (key, value)
        })
        .collect();
    Node::Table(table)
}

/// Rebuilds the original item order as single-key tables.
fn entry_list(order: Vec<String>, grouped: IndexMap<String, Vec<Node>>) -> Node {
    let mut queues: IndexMap<String, std::vec::IntoIter<Node>> = grouped
        .into_iter()
        .map(|(key, values)| (key, values.into_iter()))
        .collect();

    let entries = order
        .into_iter()
        .filter_map(|key| {
            let value = queues.get_mut(&key)?.next()?;
            let mut entry = Table::with_capacity(1);
            entry.insert(key, value);
            Some(entry)
        })
        .collect();
    Node::EntryList(entries)
}

fn anonymous_sequence(items: Vec<Item>) -> Node {
    let elements = items
        .into_iter()
        .map(|item| match item.key {
            Key::Block(node) => node,
            Key::Text(key) if item.has_operator => {
                let mut entry = Table::with_capacity(1);
                entry.insert(key, item.value);
                Node::Table(entry)
            }
            Key::Text(key) => Node::Scalar(key),
        })
        .collect();
    Node::List(elements)
}
