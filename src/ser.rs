//! Script writing.
//!
//! This module provides the [`Writer`], which renders a [`Node`] tree back to script
//! text, and [`NodeSerializer`], which builds a [`Node`] tree from any Rust value
//! implementing `Serialize`.
//!
//! ## Layout
//!
//! The writer dispatches on node kind only:
//!
//! - **Root table**: one entry per line at indent level 0, no enclosing braces
//! - **Nested table**: `key = {` then entries one level deeper, then `}`
//! - **Flag**: the bare key, with no operator
//! - **Entry lists** and lists of single-key tables: flattened into sibling assignments
//!   inside one shared block
//! - **Short plain lists**: inline, as `key = { a b c }`
//! - **Other lists**: one element per line
//!
//! Comments are never written, and whether a tree survives a round trip unchanged depends
//! on how its regions are classified when read back.
//!
//! ## Usage
//!
//! ```rust
//! use pdx_script::{parse, to_string};
//!
//! let doc = parse("my_law = { icon = \"gfx/law.dds\" is_visible = yes progressive }");
//! assert_eq!(
//!     to_string(&doc),
//!     "my_law = {\n\ticon = gfx/law.dds\n\tis_visible = yes\n\tprogressive\n}"
//! );
//! ```
//!
//! ## Building trees from Rust data
//!
//! ```rust
//! use pdx_script::{to_node, to_string};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Modifier { name: String, value: f64, hidden: bool }
//!
//! let node = to_node(&Modifier { name: "tax".into(), value: 0.5, hidden: false }).unwrap();
//! assert_eq!(to_string(&node), "name = tax\nvalue = 0.5\nhidden = no");
//! ```

use crate::{Error, Node, Result, Table, WriterOptions, MAX_DEPTH};
use serde::{ser, Serialize};

/// Returns `true` if `text` must be wrapped in double quotes to be read back as one token.
///
/// Text already wrapped in a matching pair of quotes, with no backslash and no further
/// quote of the same kind inside, is taken as pre-quoted and left alone. Any other text
/// opening with a quote character is quoted.
///
/// # Examples
///
/// ```rust
/// use pdx_script::ser::needs_quotes;
///
/// assert!(needs_quotes("gfx/interface/icon two.dds"));
/// assert!(needs_quotes("a=b"));
/// assert!(needs_quotes("'tis"));
/// assert!(!needs_quotes("gfx/interface/icon.dds"));
/// assert!(!needs_quotes("\"already quoted\""));
/// ```
#[inline]
#[must_use]
pub fn needs_quotes(text: &str) -> bool {
    if is_quoted_token(text) {
        return false;
    }

    text.starts_with(&['"', '\''][..])
        || text.chars().any(|ch| {
            matches!(
                ch,
                ' ' | '\t' | '\r' | '\n' | '{' | '}' | '=' | '<' | '>' | '#'
            )
        })
}

/// Text that the parser reads as exactly one quoted string spanning all of it.
fn is_quoted_token(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open @ ('"' | '\'')), Some(close)) if open == close => {
            !chars.as_str().contains(&[open, '\\'][..])
        }
        _ => false,
    }
}

/// Renders scalar text as a token, quoting and escaping it when needed.
///
/// # Examples
///
/// ```rust
/// use pdx_script::ser::format_scalar;
///
/// assert_eq!(format_scalar("yes"), "yes");
/// assert_eq!(format_scalar("say \"hi\""), "\"say \\\"hi\\\"\"");
/// assert_eq!(format_scalar(""), "\"\"");
/// ```
#[must_use]
pub fn format_scalar(text: &str) -> String {
    if text.is_empty() {
        return "\"\"".to_string();
    }
    if !needs_quotes(text) {
        return text.to_string();
    }

    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for ch in text.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}

/// The script writer.
///
/// Total over [`Node`]: every tree renders to some text. Created via [`Writer::new`].
///
/// # Examples
///
/// ```rust
/// use pdx_script::{pdx, Writer, WriterOptions};
///
/// let node = pdx!({ "building": { "required_techs": ["tech_a", "tech_b"] } });
/// let writer = Writer::new(WriterOptions::new().with_spaces(2));
/// assert_eq!(
///     writer.write(&node),
///     "building = {\n  required_techs = { tech_a tech_b }\n}"
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct Writer {
    options: WriterOptions,
}

impl Writer {
    pub fn new(options: WriterOptions) -> Self {
        Writer { options }
    }

    /// Renders `node` as script text, preceded by the configured header.
    #[must_use]
    pub fn write(&self, node: &Node) -> String {
        let mut body = String::with_capacity(256);
        match node {
            Node::Table(table) => self.write_entries(&mut body, table, 0),
            Node::Flag => {}
            Node::Scalar(text) => body.push_str(&format_scalar(text)),
            Node::List(_) | Node::EntryList(_) => self.write_composite(&mut body, "", node, 0),
        }

        tracing::debug!(kind = node.kind(), bytes = body.len(), "wrote script");

        if self.options.header.is_empty() {
            return body;
        }
        let mut output = String::with_capacity(body.len() + 64);
        for line in &self.options.header {
            output.push_str("# ");
            output.push_str(line);
            output.push('\n');
        }
        output.push('\n');
        output.push_str(&body);
        output
    }

    fn push_line(&self, output: &mut String, depth: usize, text: &str) {
        if !output.is_empty() {
            output.push('\n');
        }
        for _ in 0..depth {
            output.push_str(&self.options.indent);
        }
        output.push_str(text);
    }

    fn write_entries(&self, output: &mut String, table: &Table, depth: usize) {
        for (key, value) in table {
            self.write_entry(output, key, value, depth);
        }
    }

    fn write_entry(&self, output: &mut String, key: &str, value: &Node, depth: usize) {
        let key = format_scalar(key);
        match value {
            Node::Flag => self.push_line(output, depth, &key),
            Node::Scalar(text) => {
                self.push_line(output, depth, &format!("{} = {}", key, format_scalar(text)))
            }
            _ => self.write_composite(output, &format!("{} = ", key), value, depth),
        }
    }

    /// Writes a table, list or entry list as a block that opens on the current line.
    ///
    /// `head` is what precedes the opening brace on that line, `key = ` or nothing. Blocks
    /// nested past [`MAX_DEPTH`] are written empty.
    fn write_composite(&self, output: &mut String, head: &str, node: &Node, depth: usize) {
        if depth > MAX_DEPTH && !matches!(node, Node::Scalar(_) | Node::Flag) {
            tracing::debug!(depth, "block nesting limit reached, writing empty block");
            self.push_line(output, depth, &format!("{}{{}}", head));
            return;
        }

        match node {
            Node::Table(table) if table.is_empty() => {
                self.push_line(output, depth, &format!("{}{{}}", head))
            }
            Node::Table(table) => {
                self.push_line(output, depth, &format!("{}{{", head));
                self.write_entries(output, table, depth + 1);
                self.push_line(output, depth, "}");
            }
            Node::EntryList(entries) => {
                self.write_flattened(output, head, entries.iter(), depth)
            }
            Node::List(items) if is_flattenable(items) => {
                let entries = items.iter().filter_map(Node::as_table);
                self.write_flattened(output, head, entries, depth)
            }
            Node::List(items)
                if items.len() <= self.options.inline_list_max
                    && items.iter().all(|item| item.is_scalar() || item.is_flag()) =>
            {
                let values: Vec<String> = items
                    .iter()
                    .filter_map(Node::as_str)
                    .map(format_scalar)
                    .collect();
                if values.is_empty() {
                    self.push_line(output, depth, &format!("{}{{}}", head));
                } else {
                    let line = format!("{}{{ {} }}", head, values.join(" "));
                    self.push_line(output, depth, &line);
                }
            }
            Node::List(items) => {
                self.push_line(output, depth, &format!("{}{{", head));
                for item in items {
                    self.write_element(output, item, depth + 1);
                }
                self.push_line(output, depth, "}");
            }
            Node::Scalar(text) => {
                self.push_line(output, depth, &format!("{}{}", head, format_scalar(text)))
            }
            Node::Flag => {
                let key = head.trim_end_matches(" = ");
                if !key.is_empty() {
                    self.push_line(output, depth, key);
                }
            }
        }
    }

    /// Writes the entries of several tables as siblings inside one block.
    fn write_flattened<'t>(
        &self,
        output: &mut String,
        head: &str,
        entries: impl Iterator<Item = &'t Table>,
        depth: usize,
    ) {
        let mut entries = entries.peekable();
        if entries.peek().is_none() {
            self.push_line(output, depth, &format!("{}{{}}", head));
            return;
        }

        self.push_line(output, depth, &format!("{}{{", head));
        for table in entries {
            self.write_entries(output, table, depth + 1);
        }
        self.push_line(output, depth, "}");
    }

    /// Writes one element of a multi-line list. Flags have no textual form and are skipped.
    fn write_element(&self, output: &mut String, item: &Node, depth: usize) {
        match item {
            Node::Flag => {}
            Node::Scalar(text) => self.push_line(output, depth, &format_scalar(text)),
            _ => self.write_composite(output, "", item, depth),
        }
    }
}

/// A non-empty list whose every element is a single-key table, the shape a repeated-key
/// group takes once it has been collected into a list.
fn is_flattenable(items: &[Node]) -> bool {
    !items.is_empty()
        && items
            .iter()
            .all(|item| item.as_table().map_or(false, |table| table.len() == 1))
}

/// Serializer that builds a [`Node`] tree from any `Serialize` value.
///
/// Used by [`to_node`](crate::to_node). Booleans become `yes`/`no`, numbers become their
/// decimal text, unit and `None` become [`Node::Flag`], sequences become lists and maps
/// and structs become tables. Enum variants carrying data become a single-key table named
/// after the variant.
pub struct NodeSerializer;

pub struct SerializeList {
    items: Vec<Node>,
}

pub struct SerializeVariantList {
    variant: &'static str,
    items: Vec<Node>,
}

pub struct SerializeTable {
    table: Table,
    current_key: Option<String>,
}

pub struct SerializeVariantTable {
    variant: &'static str,
    table: Table,
}

fn variant_table(variant: &str, value: Node) -> Node {
    let mut table = Table::with_capacity(1);
    table.insert(variant.to_string(), value);
    Node::Table(table)
}

impl ser::Serializer for NodeSerializer {
    type Ok = Node;
    type Error = Error;

    type SerializeSeq = SerializeList;
    type SerializeTuple = SerializeList;
    type SerializeTupleStruct = SerializeList;
    type SerializeTupleVariant = SerializeVariantList;
    type SerializeMap = SerializeTable;
    type SerializeStruct = SerializeTable;
    type SerializeStructVariant = SerializeVariantTable;

    fn serialize_bool(self, v: bool) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_char(self, v: char) -> Result<Node> {
        Ok(Node::Scalar(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Node> {
        Ok(Node::scalar(v))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Node> {
        Err(Error::unsupported_type("byte arrays"))
    }

    fn serialize_none(self) -> Result<Node> {
        Ok(Node::Flag)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Node>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Node> {
        Ok(Node::Flag)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Node> {
        Ok(Node::Flag)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Node> {
        Ok(Node::scalar(variant))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Node>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Node>
    where
        T: ?Sized + Serialize,
    {
        Ok(variant_table(variant, to_node(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeList> {
        Ok(SerializeList {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeList> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeList> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVariantList> {
        Ok(SerializeVariantList {
            variant,
            items: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeTable> {
        Ok(SerializeTable {
            table: Table::with_capacity(len.unwrap_or(0)),
            current_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeTable> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVariantTable> {
        Ok(SerializeVariantTable {
            variant,
            table: Table::with_capacity(len),
        })
    }
}

impl ser::SerializeSeq for SerializeList {
    type Ok = Node;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.items.push(to_node(value)?);
        Ok(())
    }

    fn end(self) -> Result<Node> {
        Ok(Node::List(self.items))
    }
}

impl ser::SerializeTuple for SerializeList {
    type Ok = Node;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Node> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeList {
    type Ok = Node;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Node> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleVariant for SerializeVariantList {
    type Ok = Node;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.items.push(to_node(value)?);
        Ok(())
    }

    fn end(self) -> Result<Node> {
        Ok(variant_table(self.variant, Node::List(self.items)))
    }
}

impl ser::SerializeMap for SerializeTable {
    type Ok = Node;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_node(key)? {
            Node::Scalar(text) => {
                self.current_key = Some(text);
                Ok(())
            }
            other => Err(Error::type_mismatch("scalar map key", other.kind())),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.table.insert(key, to_node(value)?);
        Ok(())
    }

    fn end(self) -> Result<Node> {
        Ok(Node::Table(self.table))
    }
}

impl ser::SerializeStruct for SerializeTable {
    type Ok = Node;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.table.insert(key.to_string(), to_node(value)?);
        Ok(())
    }

    fn end(self) -> Result<Node> {
        Ok(Node::Table(self.table))
    }
}

impl ser::SerializeStructVariant for SerializeVariantTable {
    type Ok = Node;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.table.insert(key.to_string(), to_node(value)?);
        Ok(())
    }

    fn end(self) -> Result<Node> {
        Ok(variant_table(self.variant, Node::Table(self.table)))
    }
}

/// Converts any `Serialize` value into a [`Node`] tree.
///
/// # Errors
///
/// Fails on byte arrays, and on map keys that do not serialize to plain text.
///
/// # Examples
///
/// ```rust
/// use pdx_script::{to_node, Node};
/// use std::collections::BTreeMap;
///
/// let mut weights = BTreeMap::new();
/// weights.insert("farms", 2);
/// weights.insert("mines", 1);
///
/// let node = to_node(&weights).unwrap();
/// assert_eq!(node.get("farms"), Some(&Node::from("2")));
/// ```
pub fn to_node<T>(value: &T) -> Result<Node>
where
    T: ?Sized + Serialize,
{
    value.serialize(NodeSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::collections::HashMap;

    fn write(node: &Node) -> String {
        Writer::default().write(node)
    }

    fn table(entries: Vec<(&str, Node)>) -> Table {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    fn s(text: &str) -> Node {
        Node::scalar(text)
    }

    #[test]
    fn test_needs_quotes_characters() {
        for special in [" ", "\t", "\r", "\n", "{", "}", "=", "<", ">", "#"] {
            assert!(needs_quotes(&format!("a{}b", special)), "{:?}", special);
        }
        assert!(!needs_quotes("plain_token"));
        assert!(!needs_quotes("'single quoted'"));
        assert!(needs_quotes("\"half quoted"));
    }

    #[test]
    fn test_leading_quote_needs_quotes() {
        assert!(needs_quotes("\""));
        assert!(needs_quotes("'tis"));
        assert!(needs_quotes("\"x"));
        assert!(needs_quotes("'a'b'"));
        assert!(needs_quotes("\"a\\\""));
        assert!(!needs_quotes("\"\""));
        assert!(!needs_quotes("'it\"s'"));
        assert_eq!(format_scalar("'tis"), "\"'tis\"");
        assert_eq!(format_scalar("\"x"), "\"\\\"x\"");
    }

    #[test]
    fn test_format_scalar_escapes_backslash_only_when_quoting() {
        assert_eq!(format_scalar("a\\b"), "a\\b");
        assert_eq!(format_scalar("a \\b"), "\"a \\\\b\"");
    }

    #[test]
    fn test_flag_without_key_writes_nothing() {
        let mut output = String::new();
        Writer::default().write_composite(&mut output, "", &Node::Flag, 0);
        assert_eq!(output, "");

        let list = Node::List(vec![Node::Flag, s("x"), Node::Flag, s("y"), s("z"), s("w")]);
        assert_eq!(write(&list), "{\n\tx\n\ty\n\tz\n\tw\n}");
    }

    #[test]
    fn test_blocks_past_nesting_limit_are_written_empty() {
        let mut node = Node::Flag;
        for _ in 0..MAX_DEPTH + 5 {
            node = Node::Table(table(vec![("a", node)]));
        }

        let text = write(&node);
        let empty: Vec<&str> = text.lines().filter(|line| line.ends_with("a = {}")).collect();
        assert_eq!(empty.len(), 1);
        assert_eq!(empty[0], format!("{}a = {{}}", "\t".repeat(MAX_DEPTH + 1)));
    }

    #[test]
    fn test_empty_root_table_writes_nothing() {
        assert_eq!(write(&Node::Table(Table::new())), "");
        assert_eq!(write(&Node::Flag), "");
    }

    #[test]
    fn test_root_scalar() {
        assert_eq!(write(&s("hello world")), "\"hello world\"");
    }

    #[test]
    fn test_flags_are_bare_keys() {
        let node = Node::Table(table(vec![("a", Node::Flag), ("b", s("1"))]));
        assert_eq!(write(&node), "a\nb = 1");
    }

    #[test]
    fn test_nested_tables_indent() {
        let inner = table(vec![("leaf", s("x"))]);
        let middle = table(vec![("inner", Node::Table(inner))]);
        let node = Node::Table(table(vec![("outer", Node::Table(middle))]));
        assert_eq!(
            write(&node),
            "outer = {\n\tinner = {\n\t\tleaf = x\n\t}\n}"
        );
    }

    #[test]
    fn test_empty_composites_under_keys() {
        let node = Node::Table(table(vec![
            ("t", Node::Table(Table::new())),
            ("l", Node::List(vec![])),
            ("e", Node::EntryList(vec![])),
            ("f", Node::List(vec![Node::Flag, Node::Flag])),
        ]));
        assert_eq!(write(&node), "t = {}\nl = {}\ne = {}\nf = {}");
    }

    #[test]
    fn test_inline_list_skips_flags() {
        let node = Node::Table(table(vec![(
            "techs",
            Node::List(vec![s("a"), Node::Flag, s("b c")]),
        )]));
        assert_eq!(write(&node), "techs = { a \"b c\" }");
    }

    #[test]
    fn test_long_list_is_multi_line() {
        let node = Node::Table(table(vec![(
            "items",
            Node::List(vec![s("a"), s("b"), Node::Flag, s("c")]),
        )]));
        assert_eq!(write(&node), "items = {\n\ta\n\tb\n\tc\n}");
    }

    #[test]
    fn test_inline_threshold_is_configurable() {
        let node = Node::Table(table(vec![("items", Node::List(vec![s("a"), s("b")]))]));
        let writer = Writer::new(WriterOptions::new().with_inline_list_max(1));
        assert_eq!(writer.write(&node), "items = {\n\ta\n\tb\n}");
    }

    #[test]
    fn test_list_of_single_key_tables_is_flattened() {
        let node = Node::Table(table(vec![(
            "possible",
            Node::List(vec![
                Node::Table(table(vec![("has_law", s("x"))])),
                Node::Table(table(vec![("has_law", s("y"))])),
            ]),
        )]));
        assert_eq!(
            write(&node),
            "possible = {\n\thas_law = x\n\thas_law = y\n}"
        );
    }

    #[test]
    fn test_mixed_list_writes_tables_as_blocks() {
        let node = Node::Table(table(vec![(
            "mixed",
            Node::List(vec![
                Node::Flag,
                s("1"),
                Node::Table(table(vec![("a", s("1")), ("b", s("2"))])),
            ]),
        )]));
        assert_eq!(
            write(&node),
            "mixed = {\n\t1\n\t{\n\t\ta = 1\n\t\tb = 2\n\t}\n}"
        );
    }

    #[test]
    fn test_entry_list_value_and_root() {
        let entries = vec![
            table(vec![("a", s("1"))]),
            table(vec![("b", s("2"))]),
            table(vec![("a", s("3"))]),
        ];
        let node = Node::Table(table(vec![("block", Node::EntryList(entries.clone()))]));
        assert_eq!(write(&node), "block = {\n\ta = 1\n\tb = 2\n\ta = 3\n}");
        assert_eq!(
            write(&Node::EntryList(entries)),
            "{\n\ta = 1\n\tb = 2\n\ta = 3\n}"
        );
    }

    #[test]
    fn test_root_list() {
        assert_eq!(write(&Node::List(vec![s("a"), s("b")])), "{ a b }");
    }

    #[test]
    fn test_keys_are_quoted_when_needed() {
        let node = Node::Table(table(vec![("two words", s("v")), ("", Node::Flag)]));
        assert_eq!(write(&node), "\"two words\" = v\n\"\"");
    }

    #[test]
    fn test_header_precedes_body() {
        let writer = Writer::new(WriterOptions::new().with_header(["one", "two"]));
        let node = Node::Table(table(vec![("a", s("1"))]));
        assert_eq!(writer.write(&node), "# one\n# two\n\na = 1");
    }

    #[test]
    fn test_space_indent() {
        let writer = Writer::new(WriterOptions::new().with_spaces(4));
        let node = Node::Table(table(vec![("a", Node::Table(table(vec![("b", s("c"))])))]));
        assert_eq!(writer.write(&node), "a = {\n    b = c\n}");
    }

    #[derive(Serialize)]
    enum Effect {
        Nothing,
        AddGold(i32),
        Pair(u8, u8),
        Move { x: i32, y: i32 },
    }

    #[derive(Serialize)]
    struct Decision {
        name: String,
        cost: u32,
        ai_will_do: Option<f32>,
        major: bool,
        effects: Vec<Effect>,
    }

    #[test]
    fn test_to_node_struct() {
        let decision = Decision {
            name: "found_city".to_string(),
            cost: 100,
            ai_will_do: None,
            major: true,
            effects: vec![
                Effect::Nothing,
                Effect::AddGold(5),
                Effect::Pair(1, 2),
                Effect::Move { x: 3, y: -4 },
            ],
        };
        let node = to_node(&decision).unwrap();
        let t = node.as_table().unwrap();

        assert_eq!(t.get("name"), Some(&s("found_city")));
        assert_eq!(t.get("cost"), Some(&s("100")));
        assert_eq!(t.get("ai_will_do"), Some(&Node::Flag));
        assert_eq!(t.get("major"), Some(&s("yes")));

        let effects = t.get("effects").and_then(Node::as_list).unwrap();
        assert_eq!(effects[0], s("Nothing"));
        assert_eq!(effects[1].get("AddGold"), Some(&s("5")));
        assert_eq!(
            effects[2].get("Pair"),
            Some(&Node::List(vec![s("1"), s("2")]))
        );
        assert_eq!(
            effects[3].get("Move").and_then(|m| m.get("y")),
            Some(&s("-4"))
        );
    }

    #[test]
    fn test_to_node_rejects_bytes_and_composite_keys() {
        let bytes = serde_bytes_like(&[1, 2, 3]);
        assert!(matches!(to_node(&bytes), Err(Error::UnsupportedType(_))));

        let mut map = HashMap::new();
        map.insert(vec![1], "x");
        assert!(matches!(to_node(&map), Err(Error::TypeMismatch { .. })));
    }

    struct BytesLike<'a>(&'a [u8]);

    impl Serialize for BytesLike<'_> {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: ser::Serializer,
        {
            serializer.serialize_bytes(self.0)
        }
    }

    fn serde_bytes_like(bytes: &[u8]) -> BytesLike<'_> {
        BytesLike(bytes)
    }
}
