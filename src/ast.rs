// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;
use serde::Serialize;

/// Ordered key/value mapping produced by the parser. Insertion order is
/// declaration order.
pub type Tree = IndexMap<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(String),
    Namespace(Tree),
}

impl Value {
    pub fn scalar(s: impl Into<String>) -> Self {
        Value::Scalar(s.into())
    }

    pub fn as_namespace(&self) -> Option<&Tree> {
        if let Value::Namespace(items) = self {
            Some(items)
        } else {
            None
        }
    }
}
