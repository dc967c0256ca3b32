// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::JessyError;

/// Which renderer consumes the resolved tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Target {
    #[default]
    Js,
    /// Sass/SCSS variables (`$name: value;`).
    Sass,
}

impl Target {
    /// Only the exact name `"js"` selects the script renderer, every other
    /// name is treated as a member of the stylesheet family.
    pub fn from_name(name: &str) -> Self {
        if name == "js" {
            Target::Js
        } else {
            Target::Sass
        }
    }
}

impl From<String> for Target {
    fn from(name: String) -> Self {
        Target::from_name(&name)
    }
}

/// Fully populated configuration record. Built once per call and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Reference marker, also the Sass variable prefix.
    pub symbol: String,
    /// Container name or dotted path for the JavaScript output.
    pub namespace: Option<String>,
    pub target: Target,
    pub quotes: String,
    /// Wrap dotted-namespace output in a strict-mode IIFE.
    pub closure: bool,
    /// Run reference resolution before rendering.
    pub solve: bool,
    /// Indentation unit, for both input depth counting and output.
    pub tab: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            symbol: "$".into(),
            namespace: None,
            target: Target::Js,
            quotes: "'".into(),
            closure: false,
            solve: true,
            tab: "    ".into(),
        }
    }
}

/// Options as supplied by a caller: every field may be missing. Unknown
/// keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PartialOptions {
    pub symbol: Option<String>,
    pub namespace: Option<String>,
    pub target: Option<Target>,
    pub quotes: Option<String>,
    pub closure: Option<bool>,
    pub solve: Option<bool>,
    pub tab: Option<String>,
}

impl Options {
    /// Merge caller options over the defaults.
    pub fn merge(partial: PartialOptions) -> Self {
        Self::default().overlay(partial)
    }

    /// Apply every field present in `partial` on top of `self`.
    pub fn overlay(self, partial: PartialOptions) -> Self {
        Self {
            symbol: partial.symbol.unwrap_or(self.symbol),
            namespace: partial.namespace.or(self.namespace).filter(|ns| !ns.is_empty()),
            target: partial.target.unwrap_or(self.target),
            quotes: partial.quotes.unwrap_or(self.quotes),
            closure: partial.closure.unwrap_or(self.closure),
            solve: partial.solve.unwrap_or(self.solve),
            tab: partial.tab.unwrap_or(self.tab),
        }
    }

    /// Parse a JSON options object and merge it over the defaults.
    ///
    /// # Examples
    /// ```
    /// use jessy::{Options, Target};
    ///
    /// let opts = Options::from_json(r#"{"target": "sass", "symbol": "@"}"#).unwrap();
    /// assert_eq!(opts.target, Target::Sass);
    /// assert_eq!(opts.symbol, "@");
    /// assert_eq!(opts.quotes, "'");
    /// ```
    pub fn from_json(content: &str) -> Result<Self, JessyError> {
        let partial: PartialOptions =
            serde_json::from_str(content).map_err(|e| JessyError::ConfigError {
                message: format!("Invalid options: {}", e),
                hint: Some(
                    "Options must be a JSON object, e.g. {\"target\": \"sass\"}".into(),
                ),
                code: Some(310),
            })?;
        Ok(Self::merge(partial))
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, JessyError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| JessyError::from_io_error(&e, path))?;
        Self::from_json(&content)
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        let ns = namespace.into();
        self.namespace = if ns.is_empty() { None } else { Some(ns) };
        self
    }

    pub fn with_closure(mut self, closure: bool) -> Self {
        self.closure = closure;
        self
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    pub fn with_quotes(mut self, quotes: impl Into<String>) -> Self {
        self.quotes = quotes.into();
        self
    }

    pub fn with_solve(mut self, solve: bool) -> Self {
        self.solve = solve;
        self
    }

    pub fn with_tab(mut self, tab: impl Into<String>) -> Self {
        self.tab = tab.into();
        self
    }
}
