use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use lm_align::AlignMode;

#[derive(Parser)]
#[command(
    name = "lm",
    about = "LayerMerge: merge conflicting record overrides into a patch",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ModeArg {
    Global,
    Extended,
}

impl From<ModeArg> for AlignMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Global => AlignMode::Global,
            ModeArg::Extended => AlignMode::Extended,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge every conflicting record of a load order into a patch
    Patch(PatchArgs),
    /// Show the merged form of one record
    Merge(MergeArgs),
    /// Show which overrides of a record are merged
    Extent(ExtentArgs),
    /// Align two comma-separated token lists
    Align(AlignArgs),
}

#[derive(Args)]
pub struct PatchArgs {
    /// Load order file (.toml or .json)
    pub load_order: PathBuf,
    /// Write the patch here (.toml or .json); print it otherwise
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Merge configuration (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct MergeArgs {
    pub load_order: PathBuf,
    pub record: String,
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ExtentArgs {
    pub load_order: PathBuf,
    pub record: String,
}

#[derive(Args)]
pub struct AlignArgs {
    pub left: String,
    pub right: String,
    #[arg(long, default_value = "global")]
    pub mode: ModeArg,
    /// Match reward (defaults per mode)
    #[arg(long = "match", allow_negative_numbers = true)]
    pub match_score: Option<i32>,
    /// Gap penalty (defaults per mode)
    #[arg(long = "gap", allow_negative_numbers = true)]
    pub gap_score: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_patch() {
        let cli = Cli::try_parse_from(["lm", "patch", "order.toml", "-o", "out.json"]).unwrap();
        if let Command::Patch(args) = cli.command {
            assert_eq!(args.load_order, PathBuf::from("order.toml"));
            assert_eq!(args.output, Some(PathBuf::from("out.json")));
            assert!(args.config.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_merge_with_config() {
        let cli = Cli::try_parse_from([
            "lm", "merge", "order.toml", "0001A3:Skyrim.esm", "--config", "lm.toml",
        ])
        .unwrap();
        if let Command::Merge(args) = cli.command {
            assert_eq!(args.record, "0001A3:Skyrim.esm");
            assert_eq!(args.config, Some(PathBuf::from("lm.toml")));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_extent() {
        let cli = Cli::try_parse_from(["lm", "extent", "order.json", "key"]).unwrap();
        assert!(matches!(cli.command, Command::Extent(_)));
    }

    #[test]
    fn parse_align_defaults() {
        let cli = Cli::try_parse_from(["lm", "align", "A,B", "B,A"]).unwrap();
        if let Command::Align(args) = cli.command {
            assert_eq!(args.mode, ModeArg::Global);
            assert!(args.match_score.is_none());
            assert!(args.gap_score.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_align_negative_gap() {
        let cli = Cli::try_parse_from([
            "lm", "align", "A,B", "A", "--mode", "extended", "--match", "2", "--gap", "-4",
        ])
        .unwrap();
        if let Command::Align(args) = cli.command {
            assert_eq!(args.mode, ModeArg::Extended);
            assert_eq!(args.match_score, Some(2));
            assert_eq!(args.gap_score, Some(-4));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["lm", "--verbose", "extent", "o.toml", "k"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["lm", "--format", "json", "patch", "o.toml"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
