//! Ordered, unique-key map used for script blocks.
//!
//! [`Table`] wraps an [`IndexMap`] so that entries come back out in the order they were
//! read or inserted. Order is meaningful in script: the writer emits entries in exactly
//! this order.
//!
//! ## Examples
//!
//! ```rust
//! use pdx_script::{Node, Table};
//!
//! let mut table = Table::new();
//! table.insert("icon".to_string(), Node::from("gfx/icon.dds"));
//! table.insert("possible".to_string(), Node::Flag);
//!
//! let keys: Vec<_> = table.keys().cloned().collect();
//! assert_eq!(keys, vec!["icon", "possible"]);
//! ```

use crate::Node;
use indexmap::IndexMap;

/// An ordered map of unique keys to nodes.
///
/// # Examples
///
/// ```rust
/// use pdx_script::{Node, Table};
///
/// let mut table = Table::new();
/// assert!(table.insert("a".to_string(), Node::from(1)).is_none());
/// assert!(table.insert("a".to_string(), Node::from(2)).is_some());
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table(IndexMap<String, Node>);

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Table(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Table(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, returning the previous value for the key.
    ///
    /// Replacing a value keeps the key's original position.
    pub fn insert(&mut self, key: String, value: Node) -> Option<Node> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.0.get_mut(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key, keeping the relative order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Node> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first key in the table.
    ///
    /// Content fragments usually wrap everything in one named block, so this is the name
    /// of the thing the fragment defines.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pdx_script::parse;
    ///
    /// let doc = parse("my_institution = { icon = x }");
    /// assert_eq!(doc.as_table().and_then(|t| t.first_key()), Some("my_institution"));
    /// ```
    #[must_use]
    pub fn first_key(&self) -> Option<&str> {
        self.0.keys().next().map(String::as_str)
    }

    /// Returns the value under `key` as a list of nodes, whatever its shape.
    ///
    /// A key that repeated in the source may hold a list, and a block whose assignments
    /// repeated may hold an entry list; both come back as their elements. Any other value
    /// comes back as a one-element list, and a missing key as an empty one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pdx_script::parse;
    ///
    /// let doc = parse("visible = { a = 1 } visible = { b = 2 } shown");
    /// let table = doc.as_table().unwrap();
    ///
    /// assert_eq!(table.get_block("visible").len(), 2);
    /// assert_eq!(table.get_block("shown").len(), 1);
    /// assert!(table.get_block("missing").is_empty());
    /// ```
    #[must_use]
    pub fn get_block(&self, key: &str) -> Vec<Node> {
        self.0
            .get(key)
            .map(|node| node.clone().into_list())
            .unwrap_or_default()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Node> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Node> {
        self.0.values()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Node> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Node> {
        self.0.iter_mut()
    }
}

impl From<IndexMap<String, Node>> for Table {
    fn from(map: IndexMap<String, Node>) -> Self {
        Table(map)
    }
}

impl From<Table> for IndexMap<String, Node> {
    fn from(table: Table) -> Self {
        table.0
    }
}

impl IntoIterator for Table {
    type Item = (String, Node);
    type IntoIter = indexmap::map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = (&'a String, &'a Node);
    type IntoIter = indexmap::map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Node)> for Table {
    fn from_iter<T: IntoIterator<Item = (String, Node)>>(iter: T) -> Self {
        Table(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        [
            ("first".to_string(), Node::from("1")),
            ("second".to_string(), Node::Flag),
            ("third".to_string(), Node::from("3")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_insertion_order_survives_replace_and_remove() {
        let mut table = sample();
        table.insert("first".to_string(), Node::from("one"));
        assert_eq!(table.remove("second"), Some(Node::Flag));

        let keys: Vec<_> = table.keys().cloned().collect();
        assert_eq!(keys, vec!["first", "third"]);
        assert_eq!(table.get("first"), Some(&Node::from("one")));
    }

    #[test]
    fn test_first_key() {
        assert_eq!(sample().first_key(), Some("first"));
        assert_eq!(Table::new().first_key(), None);
    }

    #[test]
    fn test_get_block_wraps_single_values() {
        let mut inner = Table::new();
        inner.insert("has_variable".to_string(), Node::Flag);

        let mut table = Table::new();
        table.insert("possible".to_string(), Node::Table(inner.clone()));

        assert_eq!(table.get_block("possible"), vec![Node::Table(inner)]);
    }

    #[test]
    fn test_get_block_flattens_lists_and_entry_lists() {
        let single = |k: &str, v: &str| -> Table {
            let mut t = Table::new();
            t.insert(k.to_string(), Node::from(v));
            t
        };

        let mut table = Table::new();
        table.insert(
            "list".to_string(),
            Node::List(vec![Node::Flag, Node::from("x")]),
        );
        table.insert(
            "entries".to_string(),
            Node::EntryList(vec![single("a", "1"), single("a", "2")]),
        );

        assert_eq!(table.get_block("list"), vec![Node::Flag, Node::from("x")]);
        assert_eq!(
            table.get_block("entries"),
            vec![
                Node::Table(single("a", "1")),
                Node::Table(single("a", "2"))
            ]
        );
    }

    #[test]
    fn test_get_mut_and_iter_mut() {
        let mut table = sample();
        if let Some(node) = table.get_mut("third") {
            *node = Node::Flag;
        }
        for (_, value) in table.iter_mut() {
            if value.is_scalar() {
                *value = Node::from("changed");
            }
        }
        assert_eq!(table.get("first"), Some(&Node::from("changed")));
        assert_eq!(table.get("third"), Some(&Node::Flag));
    }
}
