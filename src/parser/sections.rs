//! Shared text-scraping helpers for completion text.
//!
//! Completion replies are markdown-ish free text: usually shaped the way
//! the prompt commanded, sometimes not. Every helper here is a pure
//! function over the input; "couldn't find it" is always `None` or an
//! empty collection, never an error.

use regex::Regex;

/// Returns the interior of the first fenced code block, regardless of the
/// declared language tag.
///
/// A block is the text between a fence-open marker (``` plus an optional
/// info string ending at the first newline) and the next fence-close
/// marker. Returns `None` when no complete block exists, including an
/// opening fence that never closes.
pub fn first_fenced_block(text: &str) -> Option<String> {
    let re = Regex::new(r"(?s)```.*?\n(.*?)```").ok()?;
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Returns the text after the first occurrence of `header`, trimmed, up to
/// the next line starting with `###` or the end of input.
pub fn section_until_next_header(text: &str, header: &str) -> Option<String> {
    let start = text.find(header)? + header.len();
    let rest = &text[start..];
    let end = rest.find("\n###").unwrap_or(rest.len());
    Some(rest[..end].trim().to_string())
}

/// Returns the text after the first occurrence of `header`, trimmed, to
/// the end of input.
pub fn section_to_end(text: &str, header: &str) -> Option<String> {
    let start = text.find(header)? + header.len();
    Some(text[start..].trim().to_string())
}

/// Splits `text` into blocks on the numbered-header pattern
/// `#### <keyword> <number>:`, dropping blocks that are empty after
/// trimming.
///
/// The number in each header carries no meaning; record ids are assigned
/// by position in the split result. The empty-block filter guards against
/// the split artifact before the first header.
pub fn numbered_blocks(text: &str, keyword: &str) -> Vec<String> {
    let pattern = format!(r"#### {} \d+:", regex::escape(keyword));
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(_) => return Vec::new(),
    };

    re.split(text)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Returns the text after `label` within a block, trimmed, up to the next
/// occurrence of `until` or the end of the block when `until` is `None`
/// or never appears.
pub fn labeled_field(block: &str, label: &str, until: Option<&str>) -> Option<String> {
    let start = block.find(label)? + label.len();
    let rest = &block[start..];
    let end = until.and_then(|u| rest.find(u)).unwrap_or(rest.len());
    Some(rest[..end].trim().to_string())
}
