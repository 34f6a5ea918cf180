//! Last-known-well extraction.

use regex::Regex;

/// Return the time expression captured by the first pattern that matches.
///
/// Patterns are tried in order and the first match ends the search, even
/// when its capture is blank. A blank capture yields `None`, so the note
/// reads as undocumented instead of falling through to a vaguer pattern.
pub fn extract_lkw(patterns: &[Regex], note_lower: &str) -> Option<String> {
    let caps = patterns.iter().find_map(|pattern| pattern.captures(note_lower))?;
    let time = caps.get(1)?.as_str().trim();
    (!time.is_empty()).then(|| time.to_string())
}
