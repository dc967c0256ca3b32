// Author: Dustin Pilgrim
// License: MIT

use super::*;
use crate::ast::Value;

/// Parse every entry of the block at `depth`, stopping before the first
/// entry indented less than `depth`.
pub(super) fn parse_block(parser: &mut Parser, depth: usize) -> Result<Tree, JessyError> {
    let mut tree = Tree::new();

    while let Some(raw) = parser.current() {
        let Some(entry) = line::classify(raw, parser.line_number(), parser.tab())? else {
            parser.advance();
            continue;
        };

        if entry.depth < depth {
            break;
        }
        parser.advance();

        let value = if entry.value.is_empty() {
            Value::Namespace(parse_block(parser, depth + 1)?)
        } else {
            Value::Scalar(entry.value)
        };

        tree.insert(entry.key, value);
    }

    Ok(tree)
}
