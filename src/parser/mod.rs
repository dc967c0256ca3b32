// Author: Dustin Pilgrim
// License: MIT

use log::debug;

use crate::ast::Tree;
use crate::options::Options;
use crate::JessyError;

mod block;
mod line;

/// Indentation-sensitive parser over the lines of a jessy document.
///
/// The parser owns a cursor into the line list; nested blocks advance the
/// same cursor and hand control back to their caller on the first line that
/// is indented less than the block.
pub struct Parser {
    lines: Vec<String>,
    cursor: usize,
    tab: String,
}

impl Parser {
    pub fn new(input: &str) -> Self {
        let normalized = input.replace("\r\n", "\n").replace('\r', "\n");
        Self {
            lines: normalized.split('\n').map(str::to_string).collect(),
            cursor: 0,
            tab: Options::default().tab,
        }
    }

    /// Use `tab` as the indentation unit instead of four spaces.
    pub fn with_tab(mut self, tab: impl Into<String>) -> Self {
        self.tab = tab.into();
        self
    }

    pub(crate) fn current(&self) -> Option<&str> {
        self.lines.get(self.cursor).map(String::as_str)
    }

    pub(crate) fn advance(&mut self) {
        self.cursor += 1;
    }

    /// 1-based number of the line under the cursor.
    pub(crate) fn line_number(&self) -> usize {
        self.cursor + 1
    }

    pub(crate) fn tab(&self) -> &str {
        &self.tab
    }

    pub fn parse_tree(&mut self) -> Result<Tree, JessyError> {
        let tree = block::parse_block(self, 0)?;
        debug!(
            "parsed {} lines into {} top-level keys",
            self.lines.len(),
            tree.len()
        );
        Ok(tree)
    }
}

/// Parse a jessy document using the default four-space indentation unit.
///
/// # Examples
/// ```
/// use jessy::{parse, Value};
///
/// let tree = parse("some:\n\tany:\n\t\tthing: plop").unwrap();
/// let any = tree["some"].as_namespace().unwrap();
/// let thing = any["any"].as_namespace().unwrap();
/// assert_eq!(thing["thing"], Value::scalar("plop"));
/// ```
///
/// # Errors
/// Returns [`JessyError::ParseError`] for the first line that is neither
/// blank, a comment, nor a `key: value` pair.
pub fn parse(input: &str) -> Result<Tree, JessyError> {
    Parser::new(input).parse_tree()
}

/// Parse a jessy document with the indentation unit from `options`.
pub fn parse_with(input: &str, options: &Options) -> Result<Tree, JessyError> {
    Parser::new(input).with_tab(options.tab.clone()).parse_tree()
}
