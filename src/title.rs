use std::time::Duration;

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::Http;

static TITLE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap());

const SITE_SUFFIX: &str = " - YouTube";

pub struct TitleResolver {
    client: reqwest::Client,
}

impl TitleResolver {
    pub fn new(http: &Http) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(http.timeout_secs))
            .user_agent(http.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

    /// Resolves the watch-page title for a video. Any failure degrades to
    /// the video id itself; the output filename must never be blocked on
    /// the title lookup.
    pub async fn resolve(&self, video_id: &str) -> String {
        match self.fetch_title(video_id).await {
            Ok(Some(title)) => title,
            Ok(None) => {
                tracing::warn!(video_id, "watch page had no usable title, using video id");
                video_id.to_string()
            }
            Err(e) => {
                tracing::warn!(video_id, error = %e, "title fetch failed, using video id");
                video_id.to_string()
            }
        }
    }

    async fn fetch_title(&self, video_id: &str) -> Result<Option<String>> {
        let url = format!("https://www.youtube.com/watch?v={video_id}");
        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Ok(None);
        }
        let body = resp.text().await?;
        Ok(extract_title(&body))
    }
}

/// Pulls the `<title>` element out of a watch page.
pub fn extract_title(html: &str) -> Option<String> {
    let raw = TITLE_TAG.captures(html)?.get(1)?.as_str();
    clean_title(&decode_entities(raw))
}

fn clean_title(title: &str) -> Option<String> {
    let t = title.trim();
    let t = t.strip_suffix(SITE_SUFFIX).unwrap_or(t).trim();
    if t.is_empty() {
        None
    } else {
        Some(t.to_string())
    }
}

/// Decodes the entities YouTube emits in `<title>`: the five named ones
/// plus numeric references. Anything unrecognized is left as written.
fn decode_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        let semi = match rest.find(';') {
            Some(i) if i <= 9 => i,
            _ => {
                out.push('&');
                rest = &rest[1..];
                continue;
            }
        };

        let entity = &rest[1..semi];
        let decoded = match entity {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => entity
                .strip_prefix("#x")
                .or_else(|| entity.strip_prefix("#X"))
                .and_then(|h| u32::from_str_radix(h, 16).ok())
                .or_else(|| entity.strip_prefix('#').and_then(|d| d.parse().ok()))
                .and_then(char::from_u32),
        };

        match decoded {
            Some(c) => {
                out.push(c);
                rest = &rest[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
