//! Configuration options for parsing and writing script.
//!
//! - [`Grammar`]: which characters act as key/value operators
//! - [`ParseOptions`]: parser configuration
//! - [`WriterOptions`]: indentation, list inlining threshold and header comments
//! - [`MAX_DEPTH`]: how deeply blocks may nest
//!
//! ## Examples
//!
//! ```rust
//! use pdx_script::{parse_with_options, to_string_with_options, ParseOptions, WriterOptions};
//!
//! let doc = parse_with_options("age >= 16", ParseOptions::fold_comparisons());
//! assert!(doc.get("age>=16").is_some());
//!
//! let options = WriterOptions::new().with_spaces(4);
//! let text = to_string_with_options(&doc, options);
//! assert_eq!(text, "\"age>=16\"");
//! ```

/// Deepest block nesting the parser descends into and the writer renders.
///
/// The parser stops collecting at a `{` that would open a block past this depth, the same
/// way it stops at a stray operator. The writer renders a block past it as `{}`.
pub const MAX_DEPTH: usize = 256;

/// Operator set recognised between a key and its value.
///
/// Script written for different tools disagrees on whether `<` and `>` separate a key
/// from its value or belong to a comparison expression, so the choice is explicit.
///
/// # Examples
///
/// ```rust
/// use pdx_script::Grammar;
///
/// assert!(Grammar::Extended.is_operator_start('<'));
/// assert!(!Grammar::Plain.is_operator_start('<'));
/// assert!(Grammar::Plain.is_operator_start('='));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Grammar {
    /// `=`, `<`, `>`, `==`, `<=` and `>=` all assign; `<` and `>` end bare tokens.
    #[default]
    Extended,
    /// Only `=` and `==` assign; `<` and `>` are ordinary token characters.
    Plain,
    /// Like [`Grammar::Plain`], but a bare key followed by a spaced `<`, `>`, `<=` or `>=`
    /// and a plain right-hand side is folded into one comparison token (`a < 5` → `a<5`).
    FoldComparisons,
}

impl Grammar {
    /// Returns `true` if `ch` can begin an assignment operator.
    #[must_use]
    pub const fn is_operator_start(&self, ch: char) -> bool {
        match self {
            Grammar::Extended => matches!(ch, '=' | '<' | '>'),
            Grammar::Plain | Grammar::FoldComparisons => ch == '=',
        }
    }

    /// Returns `true` if `ch` terminates a bare token.
    #[must_use]
    pub const fn is_delimiter(&self, ch: char) -> bool {
        match ch {
            '{' | '}' | '=' | '#' | ' ' | '\t' | '\r' | '\n' => true,
            '<' | '>' => matches!(self, Grammar::Extended),
            _ => false,
        }
    }

    /// Returns `true` if `ch` can begin a comparison that this grammar folds into a token.
    #[must_use]
    pub const fn is_comparison_start(&self, ch: char) -> bool {
        matches!(self, Grammar::FoldComparisons) && matches!(ch, '<' | '>')
    }
}

/// Configuration for [`Parser`](crate::Parser).
///
/// # Examples
///
/// ```rust
/// use pdx_script::{Grammar, ParseOptions};
///
/// let options = ParseOptions::new();
/// assert_eq!(options.grammar, Grammar::Extended);
///
/// let options = ParseOptions::new().with_grammar(Grammar::Plain);
/// assert_eq!(options.grammar, Grammar::Plain);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub grammar: Grammar,
}

impl ParseOptions {
    /// Creates default options ([`Grammar::Extended`]).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for [`Grammar::Extended`].
    #[must_use]
    pub fn extended() -> Self {
        Self::new().with_grammar(Grammar::Extended)
    }

    /// Options for [`Grammar::Plain`].
    #[must_use]
    pub fn plain() -> Self {
        Self::new().with_grammar(Grammar::Plain)
    }

    /// Options for [`Grammar::FoldComparisons`].
    #[must_use]
    pub fn fold_comparisons() -> Self {
        Self::new().with_grammar(Grammar::FoldComparisons)
    }

    /// Sets the operator grammar.
    #[must_use]
    pub fn with_grammar(mut self, grammar: Grammar) -> Self {
        self.grammar = grammar;
        self
    }
}

/// Configuration for [`Writer`](crate::Writer).
///
/// Controls the indentation unit, how many plain values a list may hold and still be
/// written on one line, and an optional comment header placed before the body.
///
/// # Examples
///
/// ```rust
/// use pdx_script::WriterOptions;
///
/// // One tab per level, lists of up to 3 values inline
/// let options = WriterOptions::new();
/// assert_eq!(options.indent, "\t");
/// assert_eq!(options.inline_list_max, 3);
///
/// let options = WriterOptions::new()
///     .with_spaces(4)
///     .with_inline_list_max(5)
///     .generated_by("build.rs");
/// assert_eq!(options.header.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriterOptions {
    pub indent: String,
    pub inline_list_max: usize,
    pub header: Vec<String>,
}

impl Default for WriterOptions {
    fn default() -> Self {
        WriterOptions {
            indent: "\t".to_string(),
            inline_list_max: 3,
            header: Vec::new(),
        }
    }
}

impl WriterOptions {
    /// Creates default options (tab indent, inline lists of up to 3 values, no header).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the string written once per nesting level.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Indents with `count` spaces per nesting level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pdx_script::WriterOptions;
    ///
    /// let options = WriterOptions::new().with_spaces(2);
    /// assert_eq!(options.indent, "  ");
    /// ```
    #[must_use]
    pub fn with_spaces(self, count: usize) -> Self {
        self.with_indent(" ".repeat(count))
    }

    /// Sets the largest list of plain values that is written on a single line.
    #[must_use]
    pub fn with_inline_list_max(mut self, max: usize) -> Self {
        self.inline_list_max = max;
        self
    }

    /// Sets the comment lines written before the body. Each line gets a `# ` prefix.
    #[must_use]
    pub fn with_header<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the standard notice for files produced by a generator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pdx_script::{to_string_with_options, Node, WriterOptions};
    ///
    /// let text = to_string_with_options(&Node::from("x"), WriterOptions::new().generated_by("gen"));
    /// assert!(text.starts_with("# This file is autogenerated by gen\n# Do not edit this file directly\n\n"));
    /// ```
    #[must_use]
    pub fn generated_by(self, tool: &str) -> Self {
        self.with_header([
            format!("This file is autogenerated by {}", tool),
            "Do not edit this file directly".to_string(),
        ])
    }
}
