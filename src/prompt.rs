//! Interactive boundary: everything that touches stdin lives here, keeping
//! the pipeline free of console reads.

use std::io::{self, Write};

use crate::model::LanguageListing;

pub fn read_links() -> io::Result<Vec<String>> {
    println!("Enter YouTube video links separated by commas:");
    let line = read_line()?;
    Ok(split_links(&line))
}

/// Splits a comma-separated link list, trimming entries and dropping blanks.
pub fn split_links(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Shows the available languages and reads a code from stdin. The choice is
/// validated by the pipeline, not here.
pub fn pick_language(_video_id: &str, listing: &LanguageListing) -> io::Result<String> {
    println!("Available languages:");
    for lang in listing.iter() {
        if lang.generated {
            println!("- {} ({}) [auto-generated]", lang.name, lang.code);
        } else {
            println!("- {} ({})", lang.name, lang.code);
        }
    }
    print!("Enter the language code to download: ");
    io::stdout().flush()?;
    read_line()
}

fn read_line() -> io::Result<String> {
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}
