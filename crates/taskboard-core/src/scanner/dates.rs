//! Role-marked date extraction from task text.
//!
//! Task lines may carry up to four date roles, each introduced by a marker
//! glyph: `➕` created, `⏳` scheduled, `📅` due, `✅` completed. A marker is
//! recognized as `<ws><marker><ws>YYYY-MM-DD`, optionally followed by an
//! `HH:MM` time that is recognized but discarded.

use chrono::NaiveDate;

use crate::text::collapse_ws_runs;

/// Marker glyph for the created role.
pub const CREATED_MARKER: char = '➕';
/// Marker glyph for the scheduled role.
pub const SCHEDULED_MARKER: char = '⏳';
/// Marker glyph for the due role.
pub const DUE_MARKER: char = '📅';
/// Marker glyph for the completed role.
pub const COMPLETED_MARKER: char = '✅';

/// Dates pulled off a task line, plus the remaining display text.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractedDates {
    /// The text with accepted date spans removed and whitespace collapsed.
    pub text: String,
    /// `➕` date.
    pub created: Option<String>,
    /// `⏳` date.
    pub scheduled: Option<String>,
    /// `📅` date.
    pub due: Option<String>,
    /// `✅` date.
    pub completed: Option<String>,
}

/// Extracts the four role-marked dates from `text`.
///
/// Candidates are validated against the real calendar (leap years included);
/// rejected candidates stay in the display text untouched. When a role
/// appears more than once, the last valid occurrence wins. Roles are
/// processed in the fixed order created, scheduled, due, completed, each as
/// one left-to-right pass over the progressively stripped text.
pub fn extract_dates(text: &str) -> ExtractedDates {
    let (text, created) = strip_role(text, CREATED_MARKER);
    let (text, scheduled) = strip_role(&text, SCHEDULED_MARKER);
    let (text, due) = strip_role(&text, DUE_MARKER);
    let (text, completed) = strip_role(&text, COMPLETED_MARKER);
    ExtractedDates {
        text: collapse_ws_runs(&text).trim().to_string(),
        created,
        scheduled,
        due,
        completed,
    }
}

/// A candidate date stamp found in the text.
struct StampMatch {
    /// Byte span of the whole match, leading whitespace included.
    start: usize,
    end: usize,
    /// Char index just past the match, where scanning resumes.
    resume: usize,
    /// The `YYYY-MM-DD` text.
    date: String,
    /// Whether the date exists on the calendar.
    valid: bool,
}

/// Tries to match `<ws><marker><ws>YYYY-MM-DD[<ws+>HH:MM]` at char index `i`.
fn match_stamp(text: &str, chars: &[(usize, char)], i: usize, marker: char) -> Option<StampMatch> {
    if !chars.get(i)?.1.is_whitespace() {
        return None;
    }
    if chars.get(i + 1)?.1 != marker {
        return None;
    }
    if !chars.get(i + 2)?.1.is_whitespace() {
        return None;
    }

    let date_start = i + 3;
    let date_bytes = chars.get(date_start)?.0;
    for (offset, want_digit) in [
        true, true, true, true, false, true, true, false, true, true,
    ]
    .iter()
    .enumerate()
    {
        let c = chars.get(date_start + offset)?.1;
        let ok = if *want_digit { c.is_ascii_digit() } else { c == '-' };
        if !ok {
            return None;
        }
    }
    let date = text[date_bytes..date_bytes + 10].to_string();

    // Optional discarded time tail.
    let after_date = date_start + 10;
    let mut k = after_date;
    while chars.get(k).is_some_and(|&(_, c)| c.is_whitespace()) {
        k += 1;
    }
    let resume = if k > after_date && matches_time(chars, k) {
        k + 5
    } else {
        after_date
    };

    let end = chars.get(resume).map_or(text.len(), |&(b, _)| b);
    Some(StampMatch {
        start: chars[i].0,
        end,
        resume,
        valid: is_valid_iso_date(&date),
        date,
    })
}

/// True when `HH:MM` starts at char index `k`.
fn matches_time(chars: &[(usize, char)], k: usize) -> bool {
    let digit = |idx: usize| chars.get(idx).is_some_and(|&(_, c)| c.is_ascii_digit());
    digit(k)
        && digit(k + 1)
        && chars.get(k + 2).is_some_and(|&(_, c)| c == ':')
        && digit(k + 3)
        && digit(k + 4)
}

/// Removes the valid stamps for one role, keeping the last value seen.
fn strip_role(text: &str, marker: char) -> (String, Option<String>) {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut value = None;
    let mut i = 0;
    while i < chars.len() {
        match match_stamp(text, &chars, i, marker) {
            Some(m) => {
                if m.valid {
                    out.push_str(&text[copied..m.start]);
                    copied = m.end;
                    value = Some(m.date);
                }
                // Invalid candidates stay in place; either way the scan
                // continues past the matched span.
                i = m.resume;
            }
            None => i += 1,
        }
    }
    out.push_str(&text[copied..]);
    (out, value)
}

/// Byte span of the first stamp for `marker`, calendar validity ignored.
pub(crate) fn first_stamp_span(text: &str, marker: char) -> Option<(usize, usize)> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut i = 0;
    while i < chars.len() {
        if let Some(m) = match_stamp(text, &chars, i, marker) {
            return Some((m.start, m.end));
        }
        i += 1;
    }
    None
}

/// Validates a `YYYY-MM-DD` string against the real calendar.
fn is_valid_iso_date(s: &str) -> bool {
    let Some(year) = s.get(0..4).and_then(|y| y.parse::<i32>().ok()) else {
        return false;
    };
    let Some(month) = s.get(5..7).and_then(|m| m.parse::<u32>().ok()) else {
        return false;
    };
    let Some(day) = s.get(8..10).and_then(|d| d.parse::<u32>().ok()) else {
        return false;
    };
    NaiveDate::from_ymd_opt(year, month, day).is_some()
}
