// Author: Dustin Pilgrim
// License: MIT

use log::{debug, trace};

use crate::ast::{Tree, Value};
use crate::options::Options;

/// Resolve references according to `options`, or hand the tree back
/// untouched when `solve` is off.
pub fn resolve(tree: Tree, options: &Options) -> Tree {
    if !options.solve {
        debug!("reference resolution disabled");
        return tree;
    }
    resolve_references(tree, &options.symbol)
}

/// Replace every scalar of the form `<symbol>key` with the root-level value
/// stored under `key`.
///
/// All lookups go against the tree as it was before the pass started, so a
/// reference to another reference is substituted once and not followed.
/// Unknown keys leave the literal in place.
///
/// # Examples
/// ```
/// use jessy::{parse, resolve_references, Value};
///
/// let tree = parse("some: thing\nother: $some\nlost: $missing").unwrap();
/// let tree = resolve_references(tree, "$");
/// assert_eq!(tree["other"], Value::scalar("thing"));
/// assert_eq!(tree["lost"], Value::scalar("$missing"));
/// ```
pub fn resolve_references(mut tree: Tree, symbol: &str) -> Tree {
    if symbol.is_empty() || tree.is_empty() {
        return tree;
    }

    let root = tree.clone();
    let substituted = resolve_in(&mut tree, &root, symbol);
    debug!("resolved {} reference(s)", substituted);
    tree
}

fn resolve_in(tree: &mut Tree, root: &Tree, symbol: &str) -> usize {
    let mut count = 0;

    for (key, value) in tree.iter_mut() {
        match value {
            Value::Namespace(children) => {
                count += resolve_in(children, root, symbol);
            }
            Value::Scalar(s) => {
                let Some(found) = s.strip_prefix(symbol).and_then(|target| root.get(target)) else {
                    continue;
                };
                trace!("{}: substituting {}", key, s);
                *value = found.clone();
                count += 1;
            }
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_resolves_root_reference() {
        let tree = parse("some: thing\nother: $some").unwrap();
        let tree = resolve(tree, &Options::default());
        assert_eq!(tree["other"], Value::scalar("thing"));
        assert_eq!(tree["some"], Value::scalar("thing"));
    }

    #[test]
    fn test_missing_reference_is_left_alone() {
        let tree = parse("other: $missing").unwrap();
        let tree = resolve(tree, &Options::default());
        assert_eq!(tree["other"], Value::scalar("$missing"));
    }

    #[test]
    fn test_nested_values_look_up_root_only() {
        let input = "base: 10\ntheme:\n\tbase: 2\n\tsize: $base";
        let tree = resolve(parse(input).unwrap(), &Options::default());

        let theme = tree["theme"].as_namespace().unwrap();
        assert_eq!(theme["size"], Value::scalar("10"));
    }

    #[test]
    fn test_nested_path_is_not_followed() {
        let input = "theme:\n\tbase: 2\nsize: $theme.base";
        let tree = resolve(parse(input).unwrap(), &Options::default());
        assert_eq!(tree["size"], Value::scalar("$theme.base"));
    }

    #[test]
    fn test_reference_to_namespace_expands() {
        let input = "palette:\n\tred: 1\n\tblue: 2\nprimary: $palette";
        let tree = resolve(parse(input).unwrap(), &Options::default());

        let primary = tree["primary"].as_namespace().expect("Expected namespace");
        assert_eq!(primary["red"], Value::scalar("1"));
        assert_eq!(primary["blue"], Value::scalar("2"));
    }

    #[test]
    fn test_resolution_is_not_transitive() {
        let input = "a: $b\nb: $c\nc: final";
        let tree = resolve(parse(input).unwrap(), &Options::default());

        assert_eq!(tree["a"], Value::scalar("$c"));
        assert_eq!(tree["b"], Value::scalar("final"));
    }

    #[test]
    fn test_custom_symbol() {
        let tree = parse("x: 1\ny: @x\nz: $x").unwrap();
        let tree = resolve(tree, &Options::default().with_symbol("@"));
        assert_eq!(tree["y"], Value::scalar("1"));
        assert_eq!(tree["z"], Value::scalar("$x"));
    }

    #[test]
    fn test_solve_disabled() {
        let tree = parse("some: thing\nother: $some").unwrap();
        let tree = resolve(tree, &Options::default().with_solve(false));
        assert_eq!(tree["other"], Value::scalar("$some"));
    }
}
