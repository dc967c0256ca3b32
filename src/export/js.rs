// Author: Dustin Pilgrim
// License: MIT

use once_cell::sync::Lazy;
use regex::Regex;

use super::indent;
use crate::ast::{Tree, Value};
use crate::options::Options;

/// Values made only of digits and dots are emitted bare. `1.2.3` matches too.
static NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9.]+$").unwrap());

/// Render a tree as JavaScript variable declarations.
///
/// Without a namespace every top-level key becomes its own `var`
/// declarator. A plain namespace binds one `var` to an object literal, a
/// dotted namespace assigns to that path instead and may be wrapped in a
/// strict-mode closure.
///
/// # Examples
/// ```
/// use jessy::{parse, render_script, Options};
///
/// let tree = parse("color: 5").unwrap();
/// let options = Options::default()
///     .with_namespace("hello.world")
///     .with_closure(true);
///
/// assert_eq!(
///     render_script(&tree, &options),
///     "(function() {\n    'use strict';\n    hello.world = {\n        color: 5\n    };\n}());"
/// );
/// ```
pub fn render_script(tree: &Tree, options: &Options) -> String {
    if tree.is_empty() {
        return String::new();
    }

    let writer = Writer { options };

    match options.namespace.as_deref() {
        None => {
            let separator = format!(",\n{}", indent(&options.tab, 1));
            format!("var {};", writer.entries(tree, " = ", 1).join(&separator))
        }
        Some(ns) if !ns.contains('.') => {
            format!("var {} = {};", ns, writer.object(tree, 0))
        }
        Some(ns) if options.closure => {
            let tab = &options.tab;
            format!(
                "(function() {{\n{tab}'use strict';\n{tab}{ns} = {};\n}}());",
                writer.object(tree, 1)
            )
        }
        Some(ns) => format!("{} = {};", ns, writer.object(tree, 0)),
    }
}

/// Declared name for a key: hyphens become underscores.
pub fn identifier(key: &str) -> String {
    key.replace('-', "_")
}

pub fn is_numeric(value: &str) -> bool {
    NUMERIC.is_match(value)
}

struct Writer<'a> {
    options: &'a Options,
}

impl Writer<'_> {
    /// `ident<assign>value` for each entry, values laid out for `level`.
    fn entries(&self, tree: &Tree, assign: &str, level: usize) -> Vec<String> {
        tree.iter()
            .map(|(key, value)| format!("{}{}{}", identifier(key), assign, self.value(value, level)))
            .collect()
    }

    fn value(&self, value: &Value, level: usize) -> String {
        match value {
            Value::Scalar(s) => self.literal(s),
            Value::Namespace(children) => self.object(children, level),
        }
    }

    /// Object literal whose closing brace sits at `level`.
    fn object(&self, tree: &Tree, level: usize) -> String {
        if tree.is_empty() {
            return "{}".into();
        }

        let inner = indent(&self.options.tab, level + 1);
        format!(
            "{{\n{}{}\n{}}}",
            inner,
            self.entries(tree, ": ", level + 1).join(&format!(",\n{}", inner)),
            indent(&self.options.tab, level)
        )
    }

    fn literal(&self, s: &str) -> String {
        if is_numeric(s) {
            s.to_string()
        } else {
            format!("{q}{}{q}", s, q = self.options.quotes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::indexmap;

    fn js(tree: &Tree) -> String {
        render_script(tree, &Options::default())
    }

    fn single(key: &str, value: &str) -> Tree {
        indexmap! { key.to_string() => Value::scalar(value) }
    }

    #[test]
    fn test_single_string_value() {
        assert_eq!(js(&single("color", "#000")), "var color = '#000';");
    }

    #[test]
    fn test_empty_tree() {
        assert_eq!(js(&Tree::new()), "");

        let options = Options::default().with_namespace("a.b").with_closure(true);
        assert_eq!(render_script(&Tree::new(), &options), "");
    }

    #[test]
    fn test_two_values() {
        let tree = indexmap! {
            "color".to_string() => Value::scalar("#000"),
            "plop".to_string() => Value::scalar("val"),
        };
        assert_eq!(js(&tree), "var color = '#000',\n    plop = 'val';");
    }

    #[test]
    fn test_numeric_value() {
        assert_eq!(js(&single("color", "5")), "var color = 5;");
        assert_eq!(js(&single("ratio", "1.5")), "var ratio = 1.5;");
        assert_eq!(js(&single("version", "1.2.3")), "var version = 1.2.3;");
        assert_eq!(js(&single("neg", "-1")), "var neg = '-1';");
        assert_eq!(js(&single("size", "12px")), "var size = '12px';");
    }

    #[test]
    fn test_hyphen_becomes_underscore() {
        assert_eq!(js(&single("co-lor", "5")), "var co_lor = 5;");
        assert_eq!(js(&single("a-b-c", "5")), "var a_b_c = 5;");
    }

    #[test]
    fn test_simple_namespace() {
        let options = Options::default().with_namespace("hello");
        assert_eq!(
            render_script(&single("color", "5"), &options),
            "var hello = {\n    color: 5\n};"
        );
    }

    #[test]
    fn test_dotted_namespace() {
        let options = Options::default().with_namespace("hello.world");
        assert_eq!(
            render_script(&single("color", "5"), &options),
            "hello.world = {\n    color: 5\n};"
        );
    }

    #[test]
    fn test_dotted_namespace_with_closure() {
        let options = Options::default().with_namespace("hello.world").with_closure(true);
        assert_eq!(
            render_script(&single("color", "5"), &options),
            "(function() {\n    'use strict';\n    hello.world = {\n        color: 5\n    };\n}());"
        );
    }

    #[test]
    fn test_closure_ignored_without_dotted_namespace() {
        let options = Options::default().with_closure(true);
        assert_eq!(render_script(&single("color", "5"), &options), "var color = 5;");

        let options = options.with_namespace("hello");
        assert_eq!(
            render_script(&single("color", "5"), &options),
            "var hello = {\n    color: 5\n};"
        );
    }

    #[test]
    fn test_custom_quotes() {
        let options = Options::default().with_quotes("\"");
        assert_eq!(render_script(&single("name", "demo"), &options), "var name = \"demo\";");
    }

    #[test]
    fn test_nested_object_literal() {
        let tree = indexmap! {
            "theme".to_string() => Value::Namespace(indexmap! {
                "font-size".to_string() => Value::scalar("12"),
                "face".to_string() => Value::scalar("serif"),
            }),
        };
        let options = Options::default().with_namespace("cfg");
        assert_eq!(
            render_script(&tree, &options),
            "var cfg = {\n    theme: {\n        font_size: 12,\n        face: 'serif'\n    }\n};"
        );
    }

    #[test]
    fn test_nested_object_without_namespace() {
        let tree = indexmap! {
            "theme".to_string() => Value::Namespace(indexmap! {
                "size".to_string() => Value::scalar("12"),
            }),
            "empty".to_string() => Value::Namespace(Tree::new()),
        };
        assert_eq!(
            js(&tree),
            "var theme = {\n        size: 12\n    },\n    empty = {};"
        );
    }

    #[test]
    fn test_tab_option_drives_output_indent() {
        let options = Options::default().with_namespace("ns").with_tab("\t");
        assert_eq!(
            render_script(&single("a", "1"), &options),
            "var ns = {\n\ta: 1\n};"
        );
    }
}
