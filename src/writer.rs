use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{model::Transcript, sanitize::sanitize_filename};

/// Writes one entry text per line, newline-terminated, truncating any
/// existing file with the same name. Returns the path written.
pub fn save(transcript: &Transcript, title: &str, folder: &Path) -> io::Result<PathBuf> {
    let stem = sanitize_filename(title);
    let path = folder.join(format!("{stem}.txt"));

    let mut body = String::new();
    for entry in &transcript.entries {
        body.push_str(&entry.text);
        body.push('\n');
    }
    fs::write(&path, body)?;

    Ok(path)
}

/// Creates the output folder (with parents) if absent and resolves it to an
/// absolute path, so saved paths are reported absolute.
pub fn ensure_output_dir(folder: &Path) -> io::Result<PathBuf> {
    if !folder.exists() {
        fs::create_dir_all(folder)?;
        tracing::info!(folder = %folder.display(), "created output folder");
    }
    folder.canonicalize()
}
