use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::models::{SourceRef, TextSource};
use crate::utils::validate_file_size;

/// Source handle given to the description; comments are numbered from 1
pub const DESCRIPTION_REF: SourceRef = SourceRef(0);

const MAX_CONSECUTIVE_ERRORS: usize = 100;

/// One line of a comment dump
#[derive(Debug, Deserialize)]
struct CommentLine {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    id: Option<u64>,
}

/// Read a plain-text description file as the primary source.
pub fn read_description_file(path: &Path) -> Result<TextSource> {
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open description file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let mut text = String::new();
    file.read_to_string(&mut text)
        .with_context(|| format!("Failed to read description file: {}", path.display()))?;

    Ok(TextSource::primary(text, DESCRIPTION_REF))
}

/// Parse a JSONL comment dump, one `{"text": ..., "id": ...}` object per line.
///
/// `id` defaults to the 1-based line number. Blank lines are skipped.
/// Returns an error if more than 50% of lines fail to parse or >100 consecutive errors
pub fn parse_comments_file(path: &Path) -> Result<Vec<TextSource>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open comments file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let reader = BufReader::new(file);
    let mut sources = Vec::new();
    let mut skipped_count = 0;
    let mut total_lines = 0;
    let mut consecutive_errors = 0;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read line from comments file")?;

        if line.trim().is_empty() {
            continue;
        }

        total_lines += 1;

        match serde_json::from_str::<CommentLine>(&line) {
            Ok(comment) => {
                let source_ref = SourceRef(comment.id.unwrap_or(line_num as u64 + 1));
                sources.push(match comment.text {
                    Some(text) => TextSource::comment(text, source_ref),
                    None => TextSource::missing(source_ref, false),
                });
                consecutive_errors = 0;
            }
            Err(e) => {
                warn!(line = line_num + 1, error = %e, "Failed to parse comment line");
                skipped_count += 1;
                consecutive_errors += 1;

                if consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
                    bail!(
                        "Too many consecutive parse errors ({}) in comments file - file may be corrupted",
                        consecutive_errors
                    );
                }
            }
        }
    }

    if total_lines > 0 {
        let failure_rate = (skipped_count as f64) / (total_lines as f64);
        if failure_rate > 0.5 {
            bail!(
                "Too many parse failures in comments file: {} of {} lines failed ({:.1}%)",
                skipped_count,
                total_lines,
                failure_rate * 100.0
            );
        }
    }

    debug!(comments = sources.len(), skipped = skipped_count, "Parsed comments file");

    Ok(sources)
}
