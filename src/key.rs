use std::path::Path;

use anyhow::{Context, Result, bail};
use deunicode::deunicode;

use crate::cues::Cue;
use crate::timefmt::seconds_to_srt;
use crate::timeline::OutputCue;

/// Read the key table. The header row is required but its names are
/// ignored; the first three columns are taken positionally as start, end
/// and label.
pub fn read_cues(path: &Path) -> Result<Vec<Cue>> {
    // Flexible: tables often carry extra annotation columns, and row
    // width is checked below where the error can name the row.
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open key table {}", path.display()))?;

    let mut cues = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("Failed to read key table {}", path.display()))?;
        // Data rows start on line 2, after the header.
        let line = index + 2;
        let mut columns = record.iter();
        let (Some(start), Some(end), Some(label)) =
            (columns.next(), columns.next(), columns.next())
        else {
            bail!(
                "Row {line} of {} has fewer than 3 columns (start, end, label)",
                path.display()
            );
        };
        cues.push(Cue {
            start: start.to_string(),
            end: end.to_string(),
            label: label.to_string(),
        });
    }
    Ok(cues)
}

/// Write the output key table: SRT timestamps on the output timeline plus
/// ASCII-folded labels, under the fixed `ts1,ts2,clip_description` header.
pub fn write_key(path: &Path, cues: &[OutputCue]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create key file {}", path.display()))?;

    writer.write_record(["ts1", "ts2", "clip_description"])?;
    for cue in cues {
        writer.write_record([
            &seconds_to_srt(cue.start),
            &seconds_to_srt(cue.end),
            &deunicode(&cue.label),
        ])?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write key file {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn reads_first_three_columns_regardless_of_header_names() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("clips.csv");
        fs::write(&path, "from,to,what,notes\n00:10,00:12,intro,ignored\n").expect("write");

        let cues = read_cues(&path).expect("read");
        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].start, "00:10");
        assert_eq!(cues[0].end, "00:12");
        assert_eq!(cues[0].label, "intro");
    }

    #[test]
    fn short_rows_are_rejected_with_their_line_number() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("clips.csv");
        fs::write(&path, "a,b,c\n00:10,00:12\n").expect("write");

        let err = read_cues(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Row 2"));
    }

    #[test]
    fn missing_table_is_an_error() {
        assert!(read_cues(Path::new("/no/such/table.csv")).is_err());
    }

    #[test]
    fn writes_srt_rows_with_folded_labels() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("clips_out.csv");
        let cues = vec![
            OutputCue { start: 0.0, end: 2.0, label: "intro".to_string() },
            OutputCue { start: 2.0, end: 3.0, label: "café".to_string() },
        ];

        write_key(&path, &cues).expect("write");
        // SRT timestamps contain commas, so minimal quoting wraps them.
        let written = fs::read_to_string(&path).expect("read back");
        assert_eq!(
            written,
            "ts1,ts2,clip_description\n\
             \"00:00:00,000\",\"00:00:02,000\",intro\n\
             \"00:00:02,000\",\"00:00:03,000\",cafe\n"
        );
    }
}
