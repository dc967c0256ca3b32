// Author: Dustin Pilgrim
// License: MIT

use crate::ast::Tree;
use crate::JessyError;

/// Export a parsed tree as pretty-printed JSON.
///
/// Scalars become JSON strings (numeric-looking values included), namespaces
/// become objects. Key order follows declaration order.
pub fn export_tree_to_json(tree: &Tree) -> Result<String, JessyError> {
    serde_json::to_string_pretty(tree).map_err(|e| JessyError::RuntimeError {
        message: format!("Failed to serialize tree: {}", e),
        hint: None,
        code: Some(501),
    })
}
