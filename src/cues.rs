use anyhow::{Context, Result};

use crate::timefmt::clock_to_seconds;

/// One row of the key table, exactly as read: clock-format start and end
/// timestamps plus a free-form clip label.
#[derive(Debug, Clone)]
pub struct Cue {
    pub start: String,
    pub end: String,
    pub label: String,
}

/// A cue resolved to absolute seconds in the source file, with fuzz
/// already applied. `end >= start` is not guaranteed; consumers clamp the
/// derived duration instead of asserting.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSpan {
    pub start: f64,
    pub end: f64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuzzDirection {
    /// Move a start timestamp earlier.
    ExpandStart,
    /// Move an end timestamp later.
    ExpandEnd,
}

/// Pad a timestamp outward by `fuzz` seconds, clamped at zero so fuzzing
/// near the head of the file never produces a negative offset.
pub fn fuzz_adjust(seconds: f64, fuzz: f64, direction: FuzzDirection) -> f64 {
    let adjusted = match direction {
        FuzzDirection::ExpandStart => seconds - fuzz,
        FuzzDirection::ExpandEnd => seconds + fuzz,
    };
    adjusted.max(0.0)
}

impl Cue {
    /// Parse both timestamps and apply the fuzz padding, yielding this
    /// cue's span in source-file coordinates.
    pub fn resolve(&self, fuzz: f64) -> Result<SourceSpan> {
        let start = clock_to_seconds(&self.start)
            .with_context(|| format!("Bad start timestamp for clip '{}'", self.label))?;
        let end = clock_to_seconds(&self.end)
            .with_context(|| format!("Bad end timestamp for clip '{}'", self.label))?;
        Ok(SourceSpan {
            start: fuzz_adjust(start, fuzz, FuzzDirection::ExpandStart),
            end: fuzz_adjust(end, fuzz, FuzzDirection::ExpandEnd),
            label: self.label.clone(),
        })
    }
}
