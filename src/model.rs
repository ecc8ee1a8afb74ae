use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub video_id: String,
    pub language_code: String,
    pub entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new(video_id: String, language_code: String, entries: Vec<TranscriptEntry>) -> Self {
        Self {
            video_id,
            language_code,
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn duration_secs(&self) -> f64 {
        self.entries
            .last()
            .map(|e| e.start + e.duration)
            .unwrap_or(0.0)
            .max(0.0)
    }
}

/// One timed caption segment. Timing is carried through but only the text
/// reaches the output file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
    pub generated: bool,
}

/// Caption languages offered for one video, in provider order.
#[derive(Debug, Clone, Default)]
pub struct LanguageListing {
    languages: Vec<Language>,
}

impl LanguageListing {
    pub fn new(languages: Vec<Language>) -> Self {
        Self { languages }
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.languages.iter().any(|l| l.code == code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.languages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> LanguageListing {
        LanguageListing::new(vec![
            Language {
                code: "en".to_string(),
                name: "English".to_string(),
                generated: false,
            },
            Language {
                code: "de".to_string(),
                name: "German".to_string(),
                generated: true,
            },
        ])
    }

    #[test]
    fn listing_membership_is_by_code() {
        let l = listing();
        assert!(l.contains("en"));
        assert!(l.contains("de"));
        assert!(!l.contains("fr"));
        assert!(!l.contains("English"));
    }

    #[test]
    fn listing_preserves_provider_order() {
        let l = listing();
        let codes: Vec<&str> = l.iter().map(|x| x.code.as_str()).collect();
        assert_eq!(codes, ["en", "de"]);
    }

    #[test]
    fn empty_listing() {
        let l = LanguageListing::default();
        assert!(l.is_empty());
        assert_eq!(l.len(), 0);
        assert!(!l.contains("en"));
    }

    #[test]
    fn transcript_duration_uses_last_entry() {
        let t = Transcript::new(
            "abc".to_string(),
            "en".to_string(),
            vec![
                TranscriptEntry {
                    text: "a".to_string(),
                    start: 0.0,
                    duration: 2.0,
                },
                TranscriptEntry {
                    text: "b".to_string(),
                    start: 2.5,
                    duration: 1.5,
                },
            ],
        );
        assert_eq!(t.duration_secs(), 4.0);
        assert!(!t.is_empty());
    }
}
