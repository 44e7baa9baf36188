use std::path::Path;

use crate::cues::SourceSpan;
use crate::paths::output_path;

/// Which stream layout the input file has, and therefore which filters
/// the ffmpeg invocation needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Video,
}

/// Boolean OR of `between(t,start,end)` predicates over the fuzzed spans,
/// in source-file coordinates. An empty span list yields an empty
/// expression that selects nothing; callers reject empty key tables
/// before getting here.
pub fn select_expression(spans: &[SourceSpan]) -> String {
    spans
        .iter()
        .map(|span| format!("between(t,{},{})", span.start, span.end))
        .collect::<Vec<_>>()
        .join("+")
}

/// Video filter: select the frames inside the spans, then renumber their
/// presentation timestamps so the survivors play back-to-back.
pub fn video_filter(expression: &str) -> String {
    format!("select='{expression}',setpts=N/FRAME_RATE/TB")
}

/// Audio counterpart of [`video_filter`], resynchronized independently
/// over the same spans.
pub fn audio_filter(expression: &str) -> String {
    format!("aselect='{expression}',asetpts=N/SR/TB")
}

/// Assemble the full ffmpeg argument vector. Builds only; execution is
/// the launcher's job.
pub fn ffmpeg_args(spans: &[SourceSpan], input: &Path, kind: MediaKind) -> Vec<String> {
    let expression = select_expression(spans);
    let mut args = vec![
        "-y".to_string(),
        "-i".to_string(),
        input.to_string_lossy().into_owned(),
    ];
    if kind == MediaKind::Video {
        args.push("-vf".to_string());
        args.push(video_filter(&expression));
    }
    args.push("-af".to_string());
    args.push(audio_filter(&expression));
    args.push(output_path(input).to_string_lossy().into_owned());
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: f64, end: f64) -> SourceSpan {
        SourceSpan {
            start,
            end,
            label: String::new(),
        }
    }

    #[test]
    fn predicates_are_joined_with_plus() {
        let expr = select_expression(&[span(10.0, 12.0), span(20.0, 21.0)]);
        assert_eq!(expr, "between(t,10,12)+between(t,20,21)");
    }

    #[test]
    fn fractional_seconds_keep_their_precision() {
        let expr = select_expression(&[span(8.5, 13.75)]);
        assert_eq!(expr, "between(t,8.5,13.75)");
    }

    #[test]
    fn empty_span_list_selects_nothing() {
        assert_eq!(select_expression(&[]), "");
    }

    #[test]
    fn video_args_filter_both_streams() {
        let args = ffmpeg_args(&[span(10.0, 12.0)], Path::new("movie.mp4"), MediaKind::Video);
        assert_eq!(
            args,
            vec![
                "-y",
                "-i",
                "movie.mp4",
                "-vf",
                "select='between(t,10,12)',setpts=N/FRAME_RATE/TB",
                "-af",
                "aselect='between(t,10,12)',asetpts=N/SR/TB",
                "movie_out.mp4",
            ]
        );
    }

    #[test]
    fn audio_args_skip_the_video_filter() {
        let args = ffmpeg_args(&[span(10.0, 12.0)], Path::new("talk.mp3"), MediaKind::Audio);
        assert_eq!(
            args,
            vec![
                "-y",
                "-i",
                "talk.mp3",
                "-af",
                "aselect='between(t,10,12)',asetpts=N/SR/TB",
                "talk_out.mp3",
            ]
        );
    }
}
