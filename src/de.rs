//! Script parsing.
//!
//! [`Parser`] reads script text into a [`Node`] tree in a single forward pass with no
//! backtracking. Each brace-delimited region is scanned into a flat list of items and then
//! handed to the classifier, which decides whether the region is a table, a list or an
//! entry list.
//!
//! ## Error behaviour
//!
//! Parsing never fails. Unterminated strings run to the end of input, missing closing
//! braces close at the end of input, and a stray operator in key position ends the current
//! region, with whatever was collected so far kept. A block nested deeper than
//! [`MAX_DEPTH`] stops every open region the same way, its key reading as a flag.
//!
//! ```rust
//! use pdx_script::{parse, Node};
//!
//! let doc = parse("a = { b = \"unterminated");
//! assert_eq!(doc.get("a").and_then(|a| a.get("b")), Some(&Node::from("unterminated")));
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use pdx_script::{Parser, ParseOptions, Node};
//!
//! let parser = Parser::new("my_institution = { icon = \"gfx/icon.dds\" }", ParseOptions::new());
//! let doc = parser.parse();
//!
//! let icon = doc.get("my_institution").and_then(|n| n.get("icon"));
//! assert_eq!(icon, Some(&Node::from("gfx/icon.dds")));
//! ```

use crate::classify::{classify, Item};
use crate::{Cursor, Node, ParseOptions, MAX_DEPTH};

/// A token read from key or value position.
enum Token<'a> {
    Quoted(String),
    Bare(&'a str),
    Block(Node),
}

/// The script parser.
///
/// Created via [`Parser::new`]; consumed by [`Parser::parse`].
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    options: ParseOptions,
    depth: usize,
    stopped: bool,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, options: ParseOptions) -> Self {
        Parser {
            cursor: Cursor::new(input),
            options,
            depth: 0,
            stopped: false,
        }
    }

    /// Parses the whole input as the top-level region.
    pub fn parse(mut self) -> Node {
        let node = self.parse_region();
        tracing::debug!(
            kind = node.kind(),
            lines = self.cursor.line(),
            grammar = ?self.options.grammar,
            "parsed script"
        );
        node
    }

    /// Parses one region, consuming a leading `{` and the matching `}` when present.
    fn parse_region(&mut self) -> Node {
        self.cursor.skip_whitespace_and_comments();
        if self.cursor.current() == Some('{') {
            self.cursor.advance();
        }

        let mut items = Vec::new();
        while !self.stopped {
            self.cursor.skip_whitespace_and_comments();
            match self.cursor.current() {
                None => break,
                Some('}') => {
                    self.cursor.advance();
                    break;
                }
                Some(_) => {}
            }

            match self.read_token() {
                None | Some(Token::Bare("")) => break,
                Some(Token::Block(node)) => items.push(Item::block(node)),
                Some(Token::Bare(key)) => items.push(self.read_entry(key.to_string())),
                Some(Token::Quoted(key)) => items.push(self.read_entry(key)),
            }
        }

        if self.cursor.current().is_none() && !items.is_empty() {
            tracing::trace!(line = self.cursor.line(), "region closed by end of input");
        }
        classify(items)
    }

    /// Reads whatever follows a key: an operator and a value, or nothing.
    fn read_entry(&mut self, key: String) -> Item {
        self.cursor.skip_whitespace_and_comments();
        let grammar = self.options.grammar;

        match self.cursor.current() {
            Some(ch) if grammar.is_operator_start(ch) => {
                self.read_operator();
                Item::assignment(key, self.read_assigned_value())
            }
            Some(ch) if grammar.is_comparison_start(ch) => {
                let operator = self.read_operator();
                if self.cursor.current() == Some('{') {
                    return Item::assignment(key, self.read_assigned_value());
                }
                let rhs = match self.read_token() {
                    Some(Token::Bare(text)) => text.to_string(),
                    Some(Token::Quoted(text)) => text,
                    Some(Token::Block(_)) | None => String::new(),
                };
                Item::bare(format!("{}{}{}", key, operator, rhs))
            }
            _ => Item::bare(key),
        }
    }

    /// Consumes a one- or two-character operator and the whitespace after it.
    fn read_operator(&mut self) -> String {
        let mut operator = String::with_capacity(2);
        if let Some(first) = self.cursor.current() {
            operator.push(first);
            self.cursor.advance();
        }
        if self.cursor.current() == Some('=') {
            operator.push('=');
            self.cursor.advance();
        }
        self.cursor.skip_whitespace_and_comments();
        operator
    }

    /// Reads the value after an operator. A missing value reads as a flag.
    fn read_assigned_value(&mut self) -> Node {
        match self.read_token() {
            Some(Token::Quoted(text)) => Node::Scalar(text),
            Some(Token::Bare("")) | None => Node::Flag,
            Some(Token::Bare(text)) => Node::scalar(text),
            Some(Token::Block(node)) => node,
        }
    }

    /// Reads one value: a quoted string, a nested block or a bare token.
    ///
    /// Returns `None` at end of input.
    pub fn read_value(&mut self) -> Option<Node> {
        self.read_token().map(|token| match token {
            Token::Quoted(text) => Node::Scalar(text),
            Token::Bare(text) => Node::scalar(text),
            Token::Block(node) => node,
        })
    }

    fn read_token(&mut self) -> Option<Token<'a>> {
        self.cursor.skip_whitespace_and_comments();
        match self.cursor.current()? {
            '"' | '\'' => Some(Token::Quoted(self.read_quoted_string())),
            '{' if self.depth >= MAX_DEPTH => {
                tracing::debug!(line = self.cursor.line(), "block nesting limit reached");
                self.stopped = true;
                None
            }
            '{' => {
                self.depth += 1;
                let node = self.parse_region();
                self.depth -= 1;
                Some(Token::Block(node))
            }
            _ => Some(Token::Bare(self.read_bare_token())),
        }
    }

    /// Reads a string opened by `"` or `'` up to the matching quote.
    ///
    /// A backslash copies the next character verbatim. An unterminated string ends at
    /// the end of input.
    pub fn read_quoted_string(&mut self) -> String {
        let quote = self.cursor.current();
        self.cursor.advance();

        let mut result = String::new();
        while let Some(ch) = self.cursor.current() {
            if Some(ch) == quote {
                self.cursor.advance();
                break;
            }
            self.cursor.advance();
            if ch == '\\' {
                if let Some(escaped) = self.cursor.current() {
                    result.push(escaped);
                    self.cursor.advance();
                }
            } else {
                result.push(ch);
            }
        }
        result
    }

    /// Reads characters up to the next delimiter. May return an empty token.
    pub fn read_bare_token(&mut self) -> &'a str {
        let grammar = self.options.grammar;
        let start = self.cursor.position();
        let mut previous = None;

        while let Some(ch) = self.cursor.current() {
            // Outside the extended grammar `<=` and `>=` stay inside a token.
            let comparison_tail = ch == '=' && matches!(previous, Some('<' | '>'))
                && !grammar.is_operator_start('<');
            if grammar.is_delimiter(ch) && !comparison_tail {
                break;
            }
            previous = Some(ch);
            self.cursor.advance();
        }

        self.cursor.slice_from(start)
    }
}
