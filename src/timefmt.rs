use anyhow::{Context, Result, bail};

/// Parse a human clock timestamp into elapsed seconds.
///
/// The template is selected by string length, covering the formats key
/// tables are written in: `M:SS`/`MM:SS` (4 or 5 chars), `HH:MM:SS`
/// (8 chars), `MM:SS.fff` (9 chars) and `HH:MM:SS.fff` (12 chars).
/// Any other length is an error.
pub fn clock_to_seconds(value: &str) -> Result<f64> {
    let (with_hours, with_fraction) = match value.len() {
        4 | 5 => (false, false),
        8 => (true, false),
        9 => (false, true),
        12 => (true, true),
        other => bail!("Unrecognized timestamp format '{value}' ({other} characters)"),
    };

    let (clock, fraction) = if with_fraction {
        let (clock, fraction) = value
            .split_once('.')
            .with_context(|| format!("Timestamp '{value}' is missing its fractional part"))?;
        (clock, Some(fraction))
    } else {
        (value, None)
    };

    let mut fields = clock.split(':');
    let hours = if with_hours {
        parse_field(&mut fields, "hours", value)?
    } else {
        0
    };
    let minutes = parse_field(&mut fields, "minutes", value)?;
    let seconds = parse_field(&mut fields, "seconds", value)?;
    if fields.next().is_some() {
        bail!("Timestamp '{value}' has too many ':'-separated fields");
    }

    let mut total = (hours * 3600 + minutes * 60 + seconds) as f64;
    if let Some(fraction) = fraction {
        let digits = fraction
            .parse::<u64>()
            .with_context(|| format!("Invalid fractional seconds in timestamp '{value}'"))?;
        total += digits as f64 / 10f64.powi(fraction.len() as i32);
    }
    Ok(total)
}

/// Render elapsed seconds as an SRT timestamp (`HH:MM:SS,mmm`).
///
/// Hours are not wrapped at 24 and the fraction is truncated to
/// milliseconds, so every value the pipeline emits survives a round trip
/// through [`srt_to_seconds`].
pub fn seconds_to_srt(seconds: f64) -> String {
    if seconds == 0.0 {
        return "00:00:00,000".to_string();
    }
    // Round to whole microseconds first so float representation noise
    // does not leak into the millisecond truncation.
    let micros = (seconds * 1_000_000.0).round() as u64;
    let total_millis = micros / 1000;
    let hours = total_millis / 3_600_000;
    let minutes = (total_millis % 3_600_000) / 60_000;
    let secs = (total_millis % 60_000) / 1000;
    let millis = total_millis % 1000;
    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}

/// Parse an SRT timestamp (`HH:MM:SS,mmm`) back into elapsed seconds.
pub fn srt_to_seconds(value: &str) -> Result<f64> {
    if value == "00:00:00,000" {
        return Ok(0.0);
    }

    let (clock, fraction) = value
        .split_once(',')
        .with_context(|| format!("SRT timestamp '{value}' must contain a ',' separator"))?;

    let mut fields = clock.split(':');
    let hours = parse_field(&mut fields, "hours", value)?;
    let minutes = parse_field(&mut fields, "minutes", value)?;
    let seconds = parse_field(&mut fields, "seconds", value)?;
    if fields.next().is_some() {
        bail!("SRT timestamp '{value}' has too many ':'-separated fields");
    }

    let mut millis_str = fraction.to_string();
    if millis_str.len() < 3 {
        millis_str.push_str(&"0".repeat(3 - millis_str.len()));
    }
    let millis = millis_str
        .chars()
        .take(3)
        .collect::<String>()
        .parse::<u64>()
        .with_context(|| format!("Invalid milliseconds in SRT timestamp '{value}'"))?;

    Ok((hours * 3600 + minutes * 60 + seconds) as f64 + millis as f64 / 1000.0)
}

fn parse_field<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    name: &str,
    value: &str,
) -> Result<u64> {
    fields
        .next()
        .with_context(|| format!("Timestamp '{value}' is missing {name}"))?
        .parse::<u64>()
        .with_context(|| format!("Invalid {name} in timestamp '{value}'"))
}
