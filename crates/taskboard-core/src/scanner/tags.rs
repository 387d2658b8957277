//! Hashtag extraction and stripping.

use crate::text::collapse_ws_runs;

/// Characters allowed in a tag after the `#`.
fn is_tag_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '/' || c == '-'
}

/// A matched tag occurrence.
///
/// `start` includes the single preceding whitespace character when there is
/// one; stripping replaces the whole span with a space.
struct TagMatch {
    start: usize,
    hash: usize,
    end: usize,
}

/// Finds tag occurrences: `#` plus at least one tag character, preceded by
/// start-of-string or whitespace.
fn tag_matches(text: &str) -> Vec<TagMatch> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut matches = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let (hash, c) = chars[i];
        let boundary = i == 0 || chars[i - 1].1.is_whitespace();
        if c == '#' && boundary {
            let mut j = i + 1;
            while j < chars.len() && is_tag_char(chars[j].1) {
                j += 1;
            }
            if j > i + 1 {
                let start = if i == 0 { hash } else { chars[i - 1].0 };
                let end = chars.get(j).map_or(text.len(), |&(b, _)| b);
                matches.push(TagMatch { start, hash, end });
                i = j;
                continue;
            }
        }
        i += 1;
    }
    matches
}

/// Extracts the tags in `text`, deduplicated, in first-seen order.
///
/// Each tag is returned with its `#` prefix, e.g. `#in/wip`.
pub fn extract_tags(text: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for m in tag_matches(text) {
        let tag = &text[m.hash..m.end];
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// Removes every tag from `text`, collapsing the whitespace left behind.
pub fn strip_tags(text: &str) -> String {
    let matches = tag_matches(text);
    if matches.is_empty() {
        return collapse_ws_runs(text).trim().to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    for m in &matches {
        out.push_str(&text[copied..m.start]);
        out.push(' ');
        copied = m.end;
    }
    out.push_str(&text[copied..]);
    collapse_ws_runs(&out).trim().to_string()
}
