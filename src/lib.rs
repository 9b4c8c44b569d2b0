//! # pdx_script
//!
//! A parser and writer for the brace-delimited script dialect used by Paradox-style game
//! content: `key = value` pairs, nested `{ ... }` blocks, bare flag keys, quoted strings and
//! `#` line comments.
//!
//! ## What the format looks like
//!
//! ```text
//! # institutions/my_institution.txt
//! my_institution = {
//!     icon = "gfx/interface/icons/institution.dds"
//!     possible = { has_law = law_a }
//!     possible = { has_law = law_b }
//!     can_disband
//! }
//! ```
//!
//! Script has no type annotations and no distinction between a map and a list. The same
//! key may appear several times in one block, and a key may stand alone with no value.
//! This crate recovers structure per block:
//!
//! - **Table**: assignments with distinct keys
//! - **EntryList**: assignments where a key repeats, kept as single-key tables in source order
//! - **Mixed table**: a repeated key in a block with bare keys holds a List of its values
//! - **Flag**: a bare key with no value
//!
//! ## Key Features
//!
//! - **Never fails on text**: truncated or malformed input yields the structure read so far
//! - **Order preserving**: entries come back out in the order they were read
//! - **Configurable grammar**: choose whether `<` and `>` assign or form comparisons
//! - **Generator friendly**: build trees with [`pdx!`] or from any `Serialize` value
//!
//! ## Quick Start
//!
//! ```rust
//! use pdx_script::{parse, to_string, Node};
//!
//! let doc = parse(r#"
//!     my_institution = {
//!         icon = "gfx/interface/icons/institution.dds"
//!         possible = { has_law = law_a }
//!         possible = { has_law = law_b }
//!     }
//! "#);
//!
//! let root = doc.as_table().unwrap();
//! assert_eq!(root.first_key(), Some("my_institution"));
//!
//! // A repeated key turns its block into an entry list
//! let institution = doc.get("my_institution").unwrap();
//! assert!(institution.is_entry_list());
//! assert_eq!(institution.get("icon"), Some(&Node::from("gfx/interface/icons/institution.dds")));
//!
//! let text = to_string(&doc);
//! assert!(text.starts_with("my_institution = {\n\ticon = gfx/interface/icons/institution.dds"));
//! ```
//!
//! ### Generated files
//!
//! ```rust
//! use pdx_script::{pdx, to_string_with_options, WriterOptions};
//!
//! let node = pdx!({ "my_decision": { "is_shown": flag } });
//! let text = to_string_with_options(&node, WriterOptions::new().generated_by("build.rs"));
//! assert_eq!(
//!     text,
//!     "# This file is autogenerated by build.rs\n# Do not edit this file directly\n\nmy_decision = {\n\tis_shown\n}"
//! );
//! ```
//!
//! ## Round trips
//!
//! Comments are discarded, quoting is normalised, and every block is classified from its
//! own contents when read back. A tree with distinct keys, no flags inside lists and no
//! empty blocks survives `parse(to_string(tree))` unchanged; other trees may come back in
//! a different shape.
//!
//! ## Logging
//!
//! Parse and write entry points emit `tracing` events at `debug` level, and each
//! classified block emits one at `trace` level. No subscriber is installed.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - parse, inspect and write back a content file
//! - **`macro.rs`** - building trees with the pdx! macro
//! - **`generated_files.rs`** - producing generated files from Rust data with a header
//! - **`grammar_modes.rs`** - the three operator grammars side by side
//!
//! Run any example with: `cargo run --example <name>`

mod classify;
pub mod cursor;
pub mod de;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use cursor::Cursor;
pub use de::Parser;
pub use error::{Error, Result};
pub use map::Table;
pub use options::{Grammar, ParseOptions, WriterOptions, MAX_DEPTH};
pub use ser::{to_node, NodeSerializer, Writer};
pub use value::Node;

use std::io;

/// Parses script text with the default grammar.
///
/// # Examples
///
/// ```rust
/// use pdx_script::{parse, Node};
///
/// let doc = parse("a = 1 b = { c }");
/// assert_eq!(doc.get("a"), Some(&Node::from("1")));
/// assert_eq!(doc.get("b").and_then(|b| b.get("c")), Some(&Node::Flag));
/// ```
#[must_use]
pub fn parse(input: &str) -> Node {
    parse_with_options(input, ParseOptions::default())
}

/// Parses script text with the given options.
///
/// # Examples
///
/// ```rust
/// use pdx_script::{parse_with_options, ParseOptions, Node};
///
/// let doc = parse_with_options("limit = { age < 16 }", ParseOptions::fold_comparisons());
/// assert_eq!(doc.get("limit").and_then(|l| l.get("age<16")), Some(&Node::Flag));
/// ```
#[must_use]
pub fn parse_with_options(input: &str, options: ParseOptions) -> Node {
    tracing::debug!(bytes = input.len(), grammar = ?options.grammar, "parsing script");
    Parser::new(input, options).parse()
}

/// Parses script from bytes, which must be UTF-8.
///
/// A leading byte order mark is skipped.
///
/// # Examples
///
/// ```rust
/// use pdx_script::{parse_slice, Node};
///
/// let doc = parse_slice(b"\xEF\xBB\xBFkey = value").unwrap();
/// assert_eq!(doc.get("key"), Some(&Node::from("value")));
/// ```
///
/// # Errors
///
/// Returns [`Error::Utf8`] if the bytes are not valid UTF-8.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_slice(v: &[u8]) -> Result<Node> {
    let text = std::str::from_utf8(v)?;
    Ok(parse(text.strip_prefix('\u{feff}').unwrap_or(text)))
}

/// Parses script read to the end from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use pdx_script::{parse_reader, Node};
/// use std::io::Cursor;
///
/// let doc = parse_reader(Cursor::new(b"key = value")).unwrap();
/// assert_eq!(doc.get("key"), Some(&Node::from("value")));
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid UTF-8.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_reader<R>(mut reader: R) -> Result<Node>
where
    R: io::Read,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse_slice(&bytes)
}

/// Writes a node as script text with default options.
///
/// # Examples
///
/// ```rust
/// use pdx_script::{pdx, to_string};
///
/// let node = pdx!({ "a": 1, "b": ["x", "y"] });
/// assert_eq!(to_string(&node), "a = 1\nb = { x y }");
/// ```
#[must_use]
pub fn to_string(node: &Node) -> String {
    to_string_with_options(node, WriterOptions::default())
}

/// Writes a node as script text with the given options.
#[must_use]
pub fn to_string_with_options(node: &Node, options: WriterOptions) -> String {
    Writer::new(options).write(node)
}

/// Writes a node as script text to an I/O stream.
///
/// # Examples
///
/// ```rust
/// use pdx_script::{pdx, to_writer};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &pdx!({ "a": flag })).unwrap();
/// assert_eq!(buffer, b"a");
/// ```
///
/// # Errors
///
/// Returns an error if writing to the stream fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, node: &Node) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, node, WriterOptions::default())
}

/// Writes a node as script text to an I/O stream with the given options.
///
/// # Errors
///
/// Returns an error if writing to the stream fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(mut writer: W, node: &Node, options: WriterOptions) -> Result<()>
where
    W: io::Write,
{
    let text = to_string_with_options(node, options);
    writer.write_all(text.as_bytes())?;
    Ok(())
}
