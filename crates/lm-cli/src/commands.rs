use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context};
use colored::Colorize;

use lm_align::{align, Scoring, Slot};
use lm_extent::resolve_extent;
use lm_merge::{merge_chain, plan_patch, ChainProvider, MergeConfig, PatchSet};
use lm_store::{save_patch, LoadOrder};
use lm_types::{MergedRecord, RecordKey};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Patch(args) => cmd_patch(args, cli.format),
        Command::Merge(args) => cmd_merge(args, cli.format),
        Command::Extent(args) => cmd_extent(args, cli.format),
        Command::Align(args) => cmd_align(args, cli.format),
    }
}

fn load_order(path: &Path) -> anyhow::Result<LoadOrder> {
    LoadOrder::load(path).with_context(|| format!("reading load order {}", path.display()))
}

fn load_config(path: Option<&Path>) -> anyhow::Result<MergeConfig> {
    let Some(path) = path else {
        return Ok(MergeConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    MergeConfig::from_toml_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn chain_for(order: &LoadOrder, record: &str) -> anyhow::Result<lm_types::Chain> {
    let key = RecordKey::from(record);
    order
        .chain(&key)
        .ok_or_else(|| anyhow!("no enabled source contributes record {key}"))
}

fn cmd_patch(args: PatchArgs, format: OutputFormat) -> anyhow::Result<()> {
    let order = load_order(&args.load_order)?;
    let config = load_config(args.config.as_deref())?;
    let patch = plan_patch(&order, &config).context("planning patch")?;

    if let Some(output) = &args.output {
        save_patch(output, &patch)
            .with_context(|| format!("writing patch {}", output.display()))?;
    }

    match format {
        OutputFormat::Json if args.output.is_none() => {
            println!("{}", serde_json::to_string_pretty(&patch)?);
        }
        OutputFormat::Json => {}
        OutputFormat::Text => print_patch_summary(&patch, args.output.as_deref()),
    }
    Ok(())
}

fn print_patch_summary(patch: &PatchSet, output: Option<&Path>) {
    for record in &patch.records {
        print_record(record);
    }
    for key in &patch.skipped {
        println!("  {} {} (matches winning override)", "skipped".dimmed(), key);
    }
    let written = match output {
        Some(path) => format!(" → {}", path.display().to_string().bold()),
        None => String::new(),
    };
    println!(
        "{} {} merged, {} skipped{}",
        "✓".green().bold(),
        patch.len().to_string().bold(),
        patch.skipped.len(),
        written
    );
}

fn print_record(record: &MergedRecord) {
    let editor_id = record.editor_id.as_deref().unwrap_or("-");
    println!("{} {}", record.key.to_string().yellow().bold(), editor_id.cyan());
    let sources: Vec<&str> = record.sources.iter().map(|s| s.as_str()).collect();
    println!("  Sources: {}", sources.join(", "));
    println!(
        "  Flags: {:#06x}  Priority: {}  Ducking: {} dB  Fade: {} s",
        record.flags.bits(),
        record.priority,
        record.ducking_decibel,
        record.fade_duration
    );
    let tracks: Vec<&str> = record.tracks.iter().map(|t| t.as_str()).collect();
    println!("  Tracks: {}", tracks.join(", "));
}

fn cmd_merge(args: MergeArgs, format: OutputFormat) -> anyhow::Result<()> {
    let order = load_order(&args.load_order)?;
    let config = load_config(args.config.as_deref())?;
    let chain = chain_for(&order, &args.record)?;
    let merged = merge_chain(&chain, &order, &config)
        .with_context(|| format!("merging {}", chain.key()))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&merged)?),
        OutputFormat::Text => print_record(&merged),
    }
    Ok(())
}

fn cmd_extent(args: ExtentArgs, format: OutputFormat) -> anyhow::Result<()> {
    let order = load_order(&args.load_order)?;
    let chain = chain_for(&order, &args.record)?;
    let extent = resolve_extent(&chain, &order);
    let sources = extent.sources(&chain);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&sources)?),
        OutputFormat::Text => {
            println!("{} ({} of {} overrides)", chain.key().to_string().yellow().bold(), sources.len(), chain.len());
            for source in &sources {
                println!("  {}", source.as_str().green());
            }
        }
    }
    Ok(())
}

/// Split a comma-separated list, trimming blanks. An empty string is an
/// empty list.
fn parse_tokens(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

fn scoring_for(args: &AlignArgs) -> anyhow::Result<Scoring> {
    let defaults = match args.mode {
        ModeArg::Global => Scoring::GLOBAL_DEFAULT,
        ModeArg::Extended => Scoring::EXTENDED_DEFAULT,
    };
    let scoring = Scoring::new(
        args.match_score.unwrap_or(defaults.match_score),
        args.gap_score.unwrap_or(defaults.gap_score),
    )?;
    Ok(scoring)
}

fn slot_pair(slot: Slot<'_, String>) -> (Option<&str>, Option<&str>) {
    (slot.left().map(String::as_str), slot.right().map(String::as_str))
}

fn cmd_align(args: AlignArgs, format: OutputFormat) -> anyhow::Result<()> {
    let left = parse_tokens(&args.left);
    let right = parse_tokens(&args.right);
    let scoring = scoring_for(&args)?;
    let slots = align(&left, &right, scoring, args.mode.into());

    match format {
        OutputFormat::Json => {
            let pairs: Vec<_> = slots.into_iter().map(slot_pair).collect();
            println!("{}", serde_json::to_string_pretty(&pairs)?);
        }
        OutputFormat::Text => {
            for slot in slots {
                let line = match slot_pair(slot) {
                    (Some(l), Some(r)) if l == r => format!("{l:>12}   {r}"),
                    (Some(l), Some(r)) => format!("{:>12} ~ {}", l.yellow(), r.yellow()),
                    (Some(l), None) => format!("{:>12} -", l.red()),
                    (None, Some(r)) => format!("{:>12} + {}", "", r.green()),
                    (None, None) => continue,
                };
                println!("{line}");
            }
        }
    }
    Ok(())
}
