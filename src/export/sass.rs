// Author: Dustin Pilgrim
// License: MIT

use crate::ast::{Tree, Value};
use crate::options::Options;

/// Render a tree as Sass variables.
///
/// Nested keys are joined with `-`, so `bg` under `color` becomes
/// `$color-bg`. One line per scalar, in tree order, no trailing newline.
///
/// # Examples
/// ```
/// use jessy::{parse, render_stylesheet, Options};
///
/// let tree = parse("color:\n\tbg:\n\t\tlight: 5\n\t\tdark: 0").unwrap();
/// assert_eq!(
///     render_stylesheet(&tree, &Options::default()),
///     "$color-bg-light: 5;\n$color-bg-dark: 0;"
/// );
/// ```
pub fn render_stylesheet(tree: &Tree, options: &Options) -> String {
    let mut lines = Vec::new();
    flatten(tree, None, &options.symbol, &mut lines);
    lines.join("\n")
}

fn flatten(tree: &Tree, prefix: Option<&str>, symbol: &str, out: &mut Vec<String>) {
    for (key, value) in tree {
        let name = match prefix {
            Some(p) => format!("{}-{}", p, key),
            None => key.clone(),
        };

        match value {
            Value::Scalar(s) => out.push(format!("{}{}: {};", symbol, name, s)),
            Value::Namespace(children) => flatten(children, Some(&name), symbol, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::indexmap;

    fn sass(tree: &Tree) -> String {
        render_stylesheet(tree, &Options::default())
    }

    #[test]
    fn test_single_value() {
        let tree = indexmap! { "color".to_string() => Value::scalar("#000") };
        assert_eq!(sass(&tree), "$color: #000;");
    }

    #[test]
    fn test_empty_tree() {
        assert_eq!(sass(&Tree::new()), "");
    }

    #[test]
    fn test_two_values() {
        let tree = indexmap! {
            "color".to_string() => Value::scalar("#000"),
            "plop".to_string() => Value::scalar("val"),
        };
        assert_eq!(sass(&tree), "$color: #000;\n$plop: val;");
    }

    #[test]
    fn test_nested_flattening() {
        let tree = indexmap! {
            "color".to_string() => Value::Namespace(indexmap! {
                "bg".to_string() => Value::Namespace(indexmap! {
                    "light".to_string() => Value::scalar("5"),
                    "dark".to_string() => Value::scalar("0"),
                }),
            }),
        };
        assert_eq!(sass(&tree), "$color-bg-light: 5;\n$color-bg-dark: 0;");
    }

    #[test]
    fn test_namespace_expands_in_place() {
        let tree = indexmap! {
            "first".to_string() => Value::scalar("1"),
            "group".to_string() => Value::Namespace(indexmap! {
                "a".to_string() => Value::scalar("2"),
            }),
            "empty".to_string() => Value::Namespace(Tree::new()),
            "last".to_string() => Value::scalar("3"),
        };
        assert_eq!(sass(&tree), "$first: 1;\n$group-a: 2;\n$last: 3;");
    }

    #[test]
    fn test_custom_symbol() {
        let tree = indexmap! { "gap".to_string() => Value::scalar("4px") };
        let options = Options::default().with_symbol("@");
        assert_eq!(render_stylesheet(&tree, &options), "@gap: 4px;");
    }
}
