//! The generic document tree.
//!
//! Script carries no type annotations, so a parsed document is a tree of [`Node`]s whose
//! shape is recovered from how each block was written:
//!
//! - [`Node::Scalar`]: a leaf token, kept exactly as written (`1.50` stays `1.50`)
//! - [`Node::Flag`]: a key that was present with no value (`has_variable`)
//! - [`Node::Table`]: a block of assignments with distinct keys
//! - [`Node::List`]: a sequence, including the values of a key that repeated
//! - [`Node::EntryList`]: a block of assignments in which some key repeated
//!
//! ## Shape is not fixed
//!
//! The same field can arrive as different kinds depending on what the source did: one
//! `visible = { ... }` block is a Table, two of them next to a bare key become a List.
//! Read fields through [`Table::get_block`](crate::Table::get_block) or
//! [`Node::into_list`] instead of assuming a kind.
//!
//! ```rust
//! use pdx_script::{parse, Node};
//!
//! let doc = parse("a\na = 1");
//! assert_eq!(
//!     doc.get("a"),
//!     Some(&Node::List(vec![Node::Flag, Node::from("1")]))
//! );
//! ```

use crate::{Table, WriterOptions};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A node of a parsed or generated script document.
///
/// # Examples
///
/// ```rust
/// use pdx_script::{Node, Table};
///
/// let mut possible = Table::new();
/// possible.insert("has_variable".to_string(), Node::Flag);
///
/// let node = Node::Table(possible);
/// assert!(node.is_table());
/// assert_eq!(node.get("has_variable"), Some(&Node::Flag));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Scalar(String),
    Flag,
    Table(Table),
    List(Vec<Node>),
    /// Single-key tables, one per assignment of a block whose keys repeated.
    EntryList(Vec<Table>),
}

impl Default for Node {
    fn default() -> Self {
        Node::Table(Table::new())
    }
}

impl Node {
    /// Creates a scalar from any text.
    pub fn scalar(text: impl Into<String>) -> Self {
        Node::Scalar(text.into())
    }

    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_flag(&self) -> bool {
        matches!(self, Node::Flag)
    }

    #[inline]
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, Node::Table(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Node::List(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_entry_list(&self) -> bool {
        matches!(self, Node::EntryList(_))
    }

    /// Short lowercase name of the node's kind, for messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Node::Scalar(_) => "scalar",
            Node::Flag => "flag",
            Node::Table(_) => "table",
            Node::List(_) => "list",
            Node::EntryList(_) => "entry list",
        }
    }

    /// The text of a scalar.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pdx_script::Node;
    ///
    /// assert_eq!(Node::from("gfx/icon.dds").as_str(), Some("gfx/icon.dds"));
    /// assert_eq!(Node::Flag.as_str(), None);
    /// ```
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Node::Table(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_table_mut(&mut self) -> Option<&mut Table> {
        match self {
            Node::Table(t) => Some(t),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&Vec<Node>> {
        match self {
            Node::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_entry_list(&self) -> Option<&Vec<Table>> {
        match self {
            Node::EntryList(entries) => Some(entries),
            _ => None,
        }
    }

    /// Parses a scalar as an integer.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_str().and_then(|s| s.parse().ok())
    }

    /// Parses a scalar as a floating-point number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_str().and_then(|s| s.parse().ok())
    }

    /// Reads a node as a boolean: a flag or `yes` is true, `no` is false.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pdx_script::Node;
    ///
    /// assert_eq!(Node::Flag.as_bool(), Some(true));
    /// assert_eq!(Node::from("yes").as_bool(), Some(true));
    /// assert_eq!(Node::from("no").as_bool(), Some(false));
    /// assert_eq!(Node::from("maybe").as_bool(), None);
    /// ```
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Flag => Some(true),
            Node::Scalar(s) if s == "yes" => Some(true),
            Node::Scalar(s) if s == "no" => Some(false),
            _ => None,
        }
    }

    /// Looks up a key in a table, or in the first entry of an entry list that has it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Table(t) => t.get(key),
            Node::EntryList(entries) => entries.iter().find_map(|t| t.get(key)),
            _ => None,
        }
    }

    /// Normalizes any node into a list of nodes.
    ///
    /// Lists yield their elements, entry lists yield their single-key tables, and every
    /// other node becomes a one-element list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pdx_script::Node;
    ///
    /// assert_eq!(Node::from("x").into_list(), vec![Node::from("x")]);
    /// assert!(Node::List(vec![]).into_list().is_empty());
    /// ```
    #[must_use]
    pub fn into_list(self) -> Vec<Node> {
        match self {
            Node::List(items) => items,
            Node::EntryList(entries) => entries.into_iter().map(Node::Table).collect(),
            other => vec![other],
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::to_string_with_options(self, WriterOptions::default()))
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Node::Scalar(s) => serializer.serialize_str(s),
            Node::Flag => serializer.serialize_bool(true),
            Node::Table(table) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(table.len()))?;
                for (k, v) in table.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Node::List(items) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Node::EntryList(entries) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(entries.len()))?;
                for entry in entries {
                    seq.serialize_element(&Node::Table(entry.clone()))?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{MapAccess, SeqAccess, Visitor};

        struct NodeVisitor;

        impl<'de> Visitor<'de> for NodeVisitor {
            type Value = Node;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a script value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(if value {
                    Node::Flag
                } else {
                    Node::scalar("no")
                })
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Node::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Node::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Node::from(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Node::scalar(value))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Node::Scalar(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Node::Flag)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Node::Flag)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(Node::List(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut table = Table::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, Node>()? {
                    table.insert(key, value);
                }
                Ok(Node::Table(table))
            }
        }

        deserializer.deserialize_any(NodeVisitor)
    }
}

// TryFrom implementations for extracting values from a Node
impl TryFrom<Node> for String {
    type Error = crate::Error;

    fn try_from(node: Node) -> crate::Result<Self> {
        match node {
            Node::Scalar(s) => Ok(s),
            other => Err(crate::Error::type_mismatch("scalar", other.kind())),
        }
    }
}

impl TryFrom<Node> for i64 {
    type Error = crate::Error;

    fn try_from(node: Node) -> crate::Result<Self> {
        node.as_i64()
            .ok_or_else(|| crate::Error::type_mismatch("integer", &describe(&node)))
    }
}

impl TryFrom<Node> for f64 {
    type Error = crate::Error;

    fn try_from(node: Node) -> crate::Result<Self> {
        node.as_f64()
            .ok_or_else(|| crate::Error::type_mismatch("number", &describe(&node)))
    }
}

impl TryFrom<Node> for bool {
    type Error = crate::Error;

    fn try_from(node: Node) -> crate::Result<Self> {
        node.as_bool()
            .ok_or_else(|| crate::Error::type_mismatch("yes, no or flag", &describe(&node)))
    }
}

fn describe(node: &Node) -> String {
    match node {
        Node::Scalar(s) => format!("scalar '{}'", s),
        other => other.kind().to_string(),
    }
}

// From implementations for building nodes from primitives
impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::scalar(if value { "yes" } else { "no" })
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::Scalar(value.to_string())
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64);

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Scalar(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Scalar(value.to_string())
    }
}

impl From<Table> for Node {
    fn from(value: Table) -> Self {
        Node::Table(value)
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Node::List(value)
    }
}

impl From<Vec<Table>> for Node {
    fn from(value: Vec<Table>) -> Self {
        Node::EntryList(value)
    }
}
