//! Response repair — turns free text from the generator into something parseable.
//!
//! Pipeline: strip code fences → take the outermost `{ ... }` span → parse.
//! Shape validation is the caller's job; this module only guarantees JSON.

use serde_json::Value;
use thiserror::Error;

const FENCE: &str = "```";

/// Language tags dropped wherever they directly follow a fence marker.
const FENCE_TAGS: &[&str] = &["json", "text", "txt", "plaintext", "markdown", "md"];

#[derive(Debug, Error)]
pub enum RepairError {
    #[error("no JSON object found in response")]
    NoJsonObject,

    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
}

/// Removes every ``` marker (plus a directly attached language tag) and trims.
pub fn strip_code_fences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find(FENCE) {
        out.push_str(&rest[..pos]);
        rest = skip_fence_tag(&rest[pos + FENCE.len()..]);
    }
    out.push_str(rest);

    out.trim().to_string()
}

/// Drops the info string after an opening fence. A known tag always goes; any
/// other word goes only when it ends the line, so inline prose survives.
fn skip_fence_tag(after: &str) -> &str {
    let tag_len = after
        .find(|c: char| c.is_whitespace() || c == '`')
        .unwrap_or(after.len());
    if tag_len == 0 {
        return after;
    }

    let (tag, rest) = after.split_at(tag_len);
    let known = FENCE_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag));
    let ends_line = rest.is_empty() || rest.starts_with('\n') || rest.starts_with("\r\n");

    if known || ends_line {
        rest
    } else {
        after
    }
}

/// The span from the first `{` to the last `}`, if both exist in that order.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Full repair pipeline for a generator reply that should contain one JSON object.
pub fn repair_json(raw: &str) -> Result<Value, RepairError> {
    let cleaned = strip_code_fences(raw);
    let candidate = extract_json_object(&cleaned).ok_or(RepairError::NoJsonObject)?;
    Ok(serde_json::from_str(candidate)?)
}
