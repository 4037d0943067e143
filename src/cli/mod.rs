//! CLI entry point: module declarations and the `run()` dispatcher

mod args;
mod files;
mod init;
mod process;

use anyhow::Context;
use args::{Args, Command};
use clap::Parser;
use files::{expand_paths, filter_ignored};
use mkdtoc::{Config, RunOptions, run_sync};
use std::path::{Path, PathBuf};

/// Main CLI entry point; parse args and dispatch to the appropriate handler
pub fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);

    if args.no_color {
        colored::control::set_override(false);
    }

    if let Command::Init { output, format } = &args.command {
        return init::init_config(output, format);
    }

    let Some((action, input)) = args.command.action() else {
        return Ok(());
    };

    if input.stdin && !input.files.is_empty() {
        anyhow::bail!("FILES cannot be combined with --stdin");
    }
    if input.files.is_empty() && !input.stdin {
        anyhow::bail!("FILES argument required (or use --stdin)");
    }

    let config = load_config(&args, &input.files)?;
    let mut options = RunOptions::new(action).with_config(config);

    if input.stdin {
        let content = std::io::read_to_string(std::io::stdin()).context("failed to read stdin")?;
        options = options.with_string(process::STDIN_NAME, content);
    } else {
        let files = filter_ignored(expand_paths(&input.files), &input.ignore)?;
        if files.is_empty() {
            if !args.quiet {
                println!("No files to process.");
            }
            return Ok(());
        }
        options = options.with_files(files);
    }

    let results = run_sync(&options)?;
    let ok = process::report(&args, input, &results)?;
    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();
}

/// Explicit --config, else the nearest discovered file, else defaults; --levels wins
fn load_config(args: &Args, files: &[String]) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .and_then(|c| c.resolve_extends())
            .with_context(|| format!("failed to load configuration from {}", path))?,
        None => discovery_dir(files)
            .or_else(|| std::env::current_dir().ok())
            .and_then(Config::discover)
            .map(|c| c.resolve_extends())
            .transpose()?
            .unwrap_or_default(),
    };

    if !args.levels.is_empty() {
        config.toc_levels = Some(args.levels.clone());
    }
    config.validate()?;
    Ok(config)
}

/// Directory of the first input, where config discovery starts
fn discovery_dir(files: &[String]) -> Option<PathBuf> {
    let first = Path::new(files.first()?);
    let dir = if first.is_dir() { first } else { first.parent()? };
    if dir.as_os_str().is_empty() {
        None
    } else {
        Some(dir.to_path_buf())
    }
}
