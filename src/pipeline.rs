use std::{
    io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::Instrument;

use crate::{
    cli::DownloadCmd,
    config::Config,
    error::ProcessError,
    link::extract_video_id,
    model::{LanguageListing, Transcript},
    prompt, sanitize,
    service::TranscriptService,
    title::TitleResolver,
    writer,
};

/// Boundary callback that turns a language listing into the user's choice.
pub type LanguagePicker<'a> = dyn FnMut(&str, &LanguageListing) -> io::Result<String> + 'a;

pub async fn run_download(cmd: DownloadCmd, cfg: &Config) -> Result<()> {
    let folder = cmd
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&cfg.output.folder));
    let out_dir = writer::ensure_output_dir(&folder)
        .with_context(|| format!("failed preparing output folder: {}", folder.display()))?;

    let links = if cmd.links.is_empty() {
        prompt::read_links()?
    } else {
        cmd.links.clone()
    };
    if links.is_empty() {
        tracing::warn!("no video links given, nothing to do");
        return Ok(());
    }

    let service = TranscriptService::new()?;
    let titles = TitleResolver::new(&cfg.http)?;

    let mut pick: Box<LanguagePicker> = match cmd.language.clone() {
        Some(code) => Box::new(move |_, _| Ok(code.clone())),
        None => Box::new(prompt::pick_language),
    };

    for link in &links {
        let span = tracing::info_span!("video", link = %link);
        let outcome = process_video(link, &service, &titles, &out_dir, cfg, pick.as_mut())
            .instrument(span)
            .await;
        match outcome {
            Ok(path) => tracing::info!(link = %link, path = %path.display(), "transcript saved"),
            Err(e) if e.is_fatal() => {
                return Err(e).with_context(|| format!("while processing {link}"));
            }
            Err(e) => tracing::error!(link = %link, error = %e, "skipping video"),
        }
    }

    Ok(())
}

/// Runs one link through the whole pipeline: id extraction, language
/// listing, selection, fetch, sanitization, title lookup, file write.
/// Stops at the first failed stage.
pub async fn process_video(
    link: &str,
    service: &TranscriptService,
    titles: &TitleResolver,
    out_dir: &Path,
    cfg: &Config,
    pick: &mut LanguagePicker<'_>,
) -> Result<PathBuf, ProcessError> {
    tracing::info!("processing");

    let video_id = extract_video_id(link)?;

    let listing = service.list_languages(&video_id).await;
    if listing.is_empty() {
        return Err(ProcessError::NoLanguages { video_id });
    }
    tracing::debug!(languages = listing.len(), "caption languages listed");

    let code = pick(&video_id, &listing)?;
    if !listing.contains(&code) {
        return Err(ProcessError::InvalidLanguageSelection { video_id, code });
    }

    let mut transcript = service.fetch(&video_id, &code).await?;
    if transcript.is_empty() {
        return Err(ProcessError::TranscriptFetch {
            video_id,
            message: "provider returned an empty transcript".to_string(),
        });
    }
    sanitize::scrub_entries(&mut transcript);
    log_transcript_summary(&transcript, cfg);

    let title = titles.resolve(&video_id).await;
    let path = writer::save(&transcript, &title, out_dir)?;

    Ok(path)
}

fn log_transcript_summary(t: &Transcript, cfg: &Config) {
    tracing::info!(
        entries = t.entries.len(),
        duration_secs = t.duration_secs(),
        language = t.language_code.as_str(),
        "transcript fetched"
    );

    if tracing::enabled!(tracing::Level::DEBUG) {
        let n = cfg.logging.debug_entry_samples.min(t.entries.len());
        for (i, e) in t.entries.iter().take(n).enumerate() {
            tracing::debug!(
                idx = i,
                start = e.start,
                chars = e.text.chars().count(),
                "entry sample"
            );
        }
    }
}
