use anyhow::Result;
use yt_transcript_rs::api::YouTubeTranscriptApi;

use crate::{
    error::ProcessError,
    model::{Language, LanguageListing, Transcript, TranscriptEntry},
};

/// Wrapper around the transcript provider. The wire protocol is owned by
/// `yt_transcript_rs`; this boundary only shapes results and classifies
/// failures.
pub struct TranscriptService {
    api: YouTubeTranscriptApi,
}

impl TranscriptService {
    pub fn new() -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None)?;
        Ok(Self { api })
    }

    /// Lists the caption languages offered for a video. Failures are logged
    /// here and surface to the caller as an empty listing.
    pub async fn list_languages(&self, video_id: &str) -> LanguageListing {
        match self.api.list_transcripts(video_id).await {
            Ok(list) => {
                let mut languages = Vec::new();
                for t in list.transcripts() {
                    languages.push(Language {
                        code: t.language_code().to_string(),
                        name: t.language().to_string(),
                        generated: t.is_generated(),
                    });
                }
                LanguageListing::new(languages)
            }
            Err(e) => {
                tracing::error!(video_id, error = %e, "could not list caption languages");
                LanguageListing::default()
            }
        }
    }

    /// Fetches the transcript in the given language. Entries come back in
    /// provider order with their text untouched; sanitization is a separate
    /// step.
    pub async fn fetch(&self, video_id: &str, language: &str) -> Result<Transcript, ProcessError> {
        match self.api.fetch_transcript(video_id, &[language], false).await {
            Ok(fetched) => {
                let mut entries = Vec::new();
                for part in fetched.parts() {
                    entries.push(TranscriptEntry {
                        text: part.text.clone(),
                        start: part.start,
                        duration: part.duration,
                    });
                }
                Ok(Transcript::new(
                    video_id.to_string(),
                    language.to_string(),
                    entries,
                ))
            }
            Err(e) => Err(classify_fetch_error(video_id, e.to_string())),
        }
    }
}

// The provider funnels every retrieval failure through one error type; the
// three report categories are recovered from its message text.
fn classify_fetch_error(video_id: &str, message: String) -> ProcessError {
    let lower = message.to_lowercase();
    if lower.contains("disabled") {
        ProcessError::TranscriptsDisabled {
            video_id: video_id.to_string(),
        }
    } else if lower.contains("unavailable") || lower.contains("no longer available") {
        ProcessError::VideoUnavailable {
            video_id: video_id.to_string(),
        }
    } else {
        ProcessError::TranscriptFetch {
            video_id: video_id.to_string(),
            message,
        }
    }
}
