use anyhow::{Result, bail};

use crate::cues::SourceSpan;

/// A cue re-mapped onto the output file's timeline: zero-based, sorted,
/// with the dead time between selected spans removed.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputCue {
    pub start: f64,
    pub end: f64,
    pub label: String,
}

/// Build the output timeline matching what ffmpeg's frame selection will
/// produce: the selection filter drops all unselected time, so consecutive
/// spans become adjacent in the output regardless of their original
/// spacing, and the key file has to reflect that adjacency.
///
/// Spans are shifted so the earliest start lands at zero, sorted by start
/// (stable, so equal starts keep their key-table order), then packed
/// back-to-back: each cue begins exactly where the previous one ends and
/// keeps its own duration.
pub fn build_timeline(spans: &[SourceSpan]) -> Result<Vec<OutputCue>> {
    if spans.is_empty() {
        bail!("Key table contains no segments; at least one is required");
    }

    let origin = spans
        .iter()
        .map(|span| span.start)
        .fold(f64::INFINITY, f64::min);

    let mut shifted: Vec<(f64, &SourceSpan)> = spans
        .iter()
        .map(|span| (span.start - origin, span))
        .collect();
    shifted.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut cues = Vec::with_capacity(shifted.len());
    let mut cursor = 0.0;
    for (_, span) in shifted {
        // Duration comes from the span itself, so it is unaffected by the
        // shift and the sort. Inverted spans select no frames, which a
        // zero-length cue mirrors.
        let duration = (span.end - span.start).max(0.0);
        cues.push(OutputCue {
            start: cursor,
            end: cursor + duration,
            label: span.label.clone(),
        });
        cursor += duration;
    }
    Ok(cues)
}
