// Author: Dustin Pilgrim
// License: MIT

use crate::JessyError;

/// A `key: value` line with its indentation depth.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Entry {
    pub depth: usize,
    pub key: String,
    pub value: String,
}

/// Classify one raw line. Blank and comment lines yield `None`.
pub(super) fn classify(raw: &str, line_no: usize, tab: &str) -> Result<Option<Entry>, JessyError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (key, value) = trimmed
        .split_once(':')
        .ok_or_else(|| JessyError::missing_separator(line_no, raw))?;

    Ok(Some(Entry {
        depth: depth(raw, tab),
        key: key.trim().to_string(),
        value: value.trim().to_string(),
    }))
}

/// Count leading indentation units. A literal tab character always counts
/// as one unit, as does each occurrence of `tab`.
pub(super) fn depth(raw: &str, tab: &str) -> usize {
    let mut rest = raw;
    let mut depth = 0;

    loop {
        if let Some(r) = rest.strip_prefix('\t') {
            rest = r;
        } else if let Some(r) = rest.strip_prefix(tab).filter(|_| !tab.is_empty()) {
            rest = r;
        } else {
            break;
        }
        depth += 1;
    }

    depth
}
