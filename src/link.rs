use crate::error::ProcessError;

const WATCH_MARKER: &str = "watch?v=";
const SHORT_MARKER: &str = "youtu.be/";

/// Extracts the video id from a standard watch URL or a short URL.
///
/// Only these two shapes are recognized; embed, shorts, and playlist URLs
/// are rejected.
pub fn extract_video_id(link: &str) -> Result<String, ProcessError> {
    let id = if let Some((_, rest)) = link.split_once(WATCH_MARKER) {
        rest.split('&').next().unwrap_or(rest)
    } else if let Some((_, rest)) = link.split_once(SHORT_MARKER) {
        rest.split('?').next().unwrap_or(rest)
    } else {
        ""
    };

    if id.is_empty() {
        return Err(ProcessError::InvalidLink {
            link: link.to_string(),
        });
    }
    Ok(id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_url_with_extra_params() {
        let id = extract_video_id("https://www.youtube.com/watch?v=abc123&t=30").unwrap();
        assert_eq!(id, "abc123");
    }

    #[test]
    fn watch_url_id_runs_to_end_of_string() {
        let id = extract_video_id("https://www.youtube.com/watch?v=abc123").unwrap();
        assert_eq!(id, "abc123");
    }

    #[test]
    fn short_url_with_query() {
        let id = extract_video_id("https://youtu.be/abc123?t=5").unwrap();
        assert_eq!(id, "abc123");
    }

    #[test]
    fn short_url_id_runs_to_end_of_string() {
        let id = extract_video_id("https://youtu.be/abc123").unwrap();
        assert_eq!(id, "abc123");
    }

    #[test]
    fn unrecognized_link_is_rejected() {
        let err = extract_video_id("not a url").unwrap_err();
        assert!(matches!(err, ProcessError::InvalidLink { .. }));
    }

    #[test]
    fn marker_with_empty_id_is_rejected() {
        let err = extract_video_id("https://www.youtube.com/watch?v=").unwrap_err();
        assert!(matches!(err, ProcessError::InvalidLink { .. }));
        let err = extract_video_id("https://youtu.be/?t=1").unwrap_err();
        assert!(matches!(err, ProcessError::InvalidLink { .. }));
    }
}
