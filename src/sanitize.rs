use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::Transcript;

static BRACKETED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.*?\]").unwrap());

/// Strips `[...]` stage-direction markers from every entry in place.
///
/// Entries whose text is emptied by the removal stay in the sequence; the
/// output file gets a blank line for them.
pub fn scrub_entries(transcript: &mut Transcript) {
    for entry in &mut transcript.entries {
        entry.text = scrub_text(&entry.text);
    }
}

/// Removes every non-overlapping `[...]` span and trims the remainder.
/// Interior whitespace is left alone; an unmatched bracket passes through.
pub fn scrub_text(text: &str) -> String {
    BRACKETED.replace_all(text, "").trim().to_string()
}

/// Deletes filesystem-reserved characters from a title. Nothing else is
/// touched, so `&` and `:` survive.
pub fn sanitize_filename(title: &str) -> String {
    title
        .chars()
        .filter(|c| !matches!(c, '\\' | '/' | '*' | '?' | '"' | '<' | '>' | '|'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TranscriptEntry;

    fn entry(text: &str) -> TranscriptEntry {
        TranscriptEntry {
            text: text.to_string(),
            start: 0.0,
            duration: 1.0,
        }
    }

    #[test]
    fn strips_bracketed_spans_and_trims_outer_whitespace() {
        assert_eq!(scrub_text("Hello [Music] world [Applause]"), "Hello  world");
        assert_eq!(scrub_text("[Music] Hi there"), "Hi there");
        assert_eq!(scrub_text("Bye [Applause]"), "Bye");
    }

    #[test]
    fn scrub_is_idempotent() {
        for input in ["Hello [Music] world", "[a][b] x", "plain", "  padded  "] {
            let once = scrub_text(input);
            assert_eq!(scrub_text(&once), once);
        }
    }

    #[test]
    fn unmatched_bracket_passes_through() {
        assert_eq!(scrub_text("Hello [Music world"), "Hello [Music world");
        assert_eq!(scrub_text("oops] here"), "oops] here");
    }

    #[test]
    fn emptied_entry_stays_in_sequence() {
        let mut t = Transcript::new(
            "abc".to_string(),
            "en".to_string(),
            vec![entry("[Music]"), entry("Hi")],
        );
        scrub_entries(&mut t);
        assert_eq!(t.entries.len(), 2);
        assert_eq!(t.entries[0].text, "");
        assert_eq!(t.entries[1].text, "Hi");
    }

    #[test]
    fn filename_drops_reserved_characters_only() {
        assert_eq!(sanitize_filename("Q&A: What? <Really>"), "QA What Really");
        assert_eq!(sanitize_filename(r#"a\b/c*d?e"f<g>h|i"#), "abcdefghi");
        assert_eq!(sanitize_filename("untouched - title!"), "untouched - title!");
    }

    #[test]
    fn video_ids_are_already_filename_safe() {
        // The title fallback is the raw video id; this pins the assumption
        // that ids come through sanitization unchanged.
        assert_eq!(sanitize_filename("dQw4w9WgXcQ"), "dQw4w9WgXcQ");
        assert_eq!(sanitize_filename("a-b_c123XYZ"), "a-b_c123XYZ");
    }
}
