use std::io;

use thiserror::Error;

/// Everything that can stop one video from reaching the output folder.
///
/// All variants except `Io` are scoped to the current video: the pipeline
/// reports them and moves on to the next link. `Io` has no per-video
/// recovery and aborts the run.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("unrecognized video link: {link}")]
    InvalidLink { link: String },

    #[error("no caption languages available for video {video_id}")]
    NoLanguages { video_id: String },

    #[error("language '{code}' is not offered for video {video_id}")]
    InvalidLanguageSelection { video_id: String, code: String },

    #[error("captions are disabled for video {video_id}")]
    TranscriptsDisabled { video_id: String },

    #[error("video {video_id} is unavailable")]
    VideoUnavailable { video_id: String },

    #[error("transcript fetch failed for video {video_id}: {message}")]
    TranscriptFetch { video_id: String, message: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ProcessError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, ProcessError::Io(_))
    }
}
