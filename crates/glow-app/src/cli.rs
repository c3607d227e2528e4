use std::path::PathBuf;

use clap::Parser;

/// Headless glow demo: renders the sample scene with a glow halo to a PNG.
#[derive(Parser, Debug)]
#[command(name = "glow-demo", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. "debug", "glow_renderer=trace").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Where to write the rendered PNG.
    #[arg(short, long, default_value = "glow.png")]
    pub output: PathBuf,

    /// Comma-separated key presses applied before rendering (e.g. "Up,Up,Space").
    #[arg(short, long, value_delimiter = ',')]
    pub keys: Vec<String>,

    /// Number of frames to render.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub frames: u32,

    /// Count draw calls without rasterizing or writing a PNG.
    #[arg(long)]
    pub dry_run: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["glow-demo"]).unwrap();
        assert_eq!(args.output, PathBuf::from("glow.png"));
        assert_eq!(args.frames, 1);
        assert!(args.keys.is_empty());
        assert!(!args.dry_run);
        assert!(args.config.is_none());
    }

    #[test]
    fn keys_split_on_commas() {
        let args = Args::try_parse_from(["glow-demo", "--keys", "Up,Up,Space"]).unwrap();
        assert_eq!(args.keys, vec!["Up", "Up", "Space"]);
    }

    #[test]
    fn zero_frames_rejected() {
        assert!(Args::try_parse_from(["glow-demo", "--frames", "0"]).is_err());
    }
}
