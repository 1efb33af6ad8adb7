//! Placeholder substitution for file name and content patterns.
//!
//! Patterns use `%` as the slot marker:
//! - `%s` and `%[1]s` are slots that receive the real name
//! - `%%` is a literal `%`
//!
//! Whether a pattern is formatted at all is decided by [`net_slot_count`]:
//! a pattern with no net slot is returned untouched, escapes included.

const MARKER: char = '%';
const ESCAPED_MARKER: &str = "%%";
const POSITIONAL_SLOT: &str = "[1]s";

/// Number of marker characters that are not part of a `%%` escape.
///
/// Counts every `%` and subtracts two for each non-overlapping `%%`.
///
/// # Examples
/// ```ignore
/// assert_eq!(net_slot_count("style.css"), 0);
/// assert_eq!(net_slot_count("%s.js"), 1);
/// assert_eq!(net_slot_count("%%"), 0);
/// ```
pub fn net_slot_count(pattern: &str) -> usize {
    let markers = pattern.matches(MARKER).count();
    let escapes = pattern.matches(ESCAPED_MARKER).count();
    markers - 2 * escapes
}

/// Resolves `pattern` against `real_name`.
///
/// Every slot receives the same name. Patterns with a zero net slot count are
/// returned verbatim.
pub fn resolve(pattern: &str, real_name: &str) -> String {
    if net_slot_count(pattern) == 0 {
        return pattern.to_string();
    }
    format_slots(pattern, real_name)
}

fn format_slots(pattern: &str, real_name: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + real_name.len());
    let mut rest = pattern;

    while let Some(pos) = rest.find(MARKER) {
        out.push_str(&rest[..pos]);
        let directive = &rest[pos + 1..];

        if directive.starts_with(MARKER) {
            out.push(MARKER);
            rest = &directive[1..];
        } else if directive.starts_with('s') {
            out.push_str(real_name);
            rest = &directive[1..];
        } else if directive.starts_with(POSITIONAL_SLOT) {
            out.push_str(real_name);
            rest = &directive[POSITIONAL_SLOT.len()..];
        } else {
            // Unknown directive: keep the marker as written.
            out.push(MARKER);
            rest = directive;
        }
    }

    out.push_str(rest);
    out
}
