//! Extraction of timestamp records from host text.
//!
//! Every pass is a pure transform: sources in, a fresh flat record list out. Records
//! are emitted in source order, then line order, then left-to-right within a line.

use tracing::{debug, warn};

use crate::error::MarkerError;
use crate::models::{TextSource, TimestampRecord};
use crate::parsers::parse_timecodes;

/// Outcome of one extraction pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionReport {
    pub records: Vec<TimestampRecord>,
    /// One [`MarkerError::MalformedInput`] per source that had no text
    pub malformed: Vec<MarkerError>,
    pub sources_scanned: usize,
}

impl ExtractionReport {
    /// Number of distinct sources that contributed at least one record
    pub fn contributing_sources(&self) -> usize {
        let mut refs: Vec<_> = self.records.iter().map(|r| r.source_ref).collect();
        refs.sort_unstable();
        refs.dedup();
        refs.len()
    }
}

/// Extract every time code from `sources`, discarding the malformed-source report.
pub fn extract(sources: &[TextSource]) -> Vec<TimestampRecord> {
    extract_report(sources).records
}

/// Extract every time code from `sources`.
///
/// Each record carries the trimmed line its token appeared on, not just the token,
/// so the detail surface can show context. A source without text (or with only
/// whitespace) contributes no records and is listed in
/// [`ExtractionReport::malformed`]; the batch is never aborted.
pub fn extract_report(sources: &[TextSource]) -> ExtractionReport {
    let mut report = ExtractionReport::default();

    for source in sources {
        report.sources_scanned += 1;

        let text = match source.text.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                warn!(
                    source = %source.source_ref,
                    primary = source.is_primary,
                    "Source has no text, skipping"
                );
                report.malformed.push(MarkerError::malformed(source.source_ref));
                continue;
            }
        };

        for line in text.split('\n') {
            let tokens = parse_timecodes(line);
            if tokens.is_empty() {
                continue;
            }

            let line_text = line.trim();
            report.records.extend(tokens.into_iter().map(|token| TimestampRecord {
                token,
                line_text: line_text.to_string(),
                source_ref: source.source_ref,
                is_primary: source.is_primary,
            }));
        }
    }

    debug!(
        timestamps = report.records.len(),
        sources = report.sources_scanned,
        malformed = report.malformed.len(),
        "Found timestamps in description and comments"
    );

    report
}
