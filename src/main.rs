mod cues;
mod ffmpeg;
mod filter;
mod key;
mod paths;
mod timefmt;
mod timeline;

use std::path::PathBuf;
use std::process;

use anyhow::{Result, bail};
use clap::{ArgGroup, Parser, ValueHint};

use crate::filter::MediaKind;

/// Cut up audio/video clips using timestamps from a .csv file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("media").required(true).args(["audio", "video"])))]
struct Cli {
    /// Audio file to cut
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    audio: Option<PathBuf>,

    /// Video file to cut
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    video: Option<PathBuf>,

    /// Csv file with start/end timestamps and clip labels
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    key: PathBuf,

    /// Seconds of padding added to either end of each clip
    #[arg(short, long, default_value_t = 0.0)]
    fuzz: f64,

    /// Print the ffmpeg command instead of launching it
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.fuzz < 0.0 {
        bail!("Fuzz must be non-negative, got {}", cli.fuzz);
    }

    let (input, kind) = match (&cli.audio, &cli.video) {
        (Some(path), None) => (path.as_path(), MediaKind::Audio),
        (None, Some(path)) => (path.as_path(), MediaKind::Video),
        _ => unreachable!("clap enforces exactly one of --audio/--video"),
    };

    let cues = key::read_cues(&cli.key)?;
    let spans = cues
        .iter()
        .map(|cue| cue.resolve(cli.fuzz))
        .collect::<Result<Vec<_>>>()?;

    // The key file lands on disk before ffmpeg is launched; the media cut
    // finishes on its own schedule (see ffmpeg::launch).
    let output_cues = timeline::build_timeline(&spans)?;
    let key_out = paths::output_path(&cli.key);
    key::write_key(&key_out, &output_cues)?;
    println!("Wrote key file {}", key_out.display());

    let args = filter::ffmpeg_args(&spans, input, kind);
    if cli.dry_run {
        println!("ffmpeg {}", shell_words::join(&args));
    } else {
        ffmpeg::launch(&args)?;
        println!(
            "Launched ffmpeg; output will be {}",
            paths::output_path(input).display()
        );
    }
    Ok(())
}
