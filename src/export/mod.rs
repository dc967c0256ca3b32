// Author: Dustin Pilgrim
// License: MIT

use log::debug;

use crate::ast::Tree;
use crate::options::{Options, Target};

pub mod js;
pub mod json;
pub mod sass;

pub use js::render_script;
pub use json::export_tree_to_json;
pub use sass::render_stylesheet;

/// Render `tree` with the renderer selected by `options.target`.
pub fn render(tree: &Tree, options: &Options) -> String {
    debug!("rendering {} top-level keys as {:?}", tree.len(), options.target);
    match options.target {
        Target::Js => render_script(tree, options),
        Target::Sass => render_stylesheet(tree, options),
    }
}

/// One indentation prefix of `level` units.
pub(crate) fn indent(tab: &str, level: usize) -> String {
    tab.repeat(level)
}
