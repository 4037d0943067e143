//! Writing results back and reporting what happened

use super::args::{Args, InputArgs, OutputFormat};
use anyhow::Context;
use colored::Colorize;
use mkdtoc::{Action, Error, Outcome, RunResults, formatters};

/// Name under which stdin content is processed
pub(crate) const STDIN_NAME: &str = "-";

/// Apply results to disk (or stdout) and print diagnostics.
///
/// Returns `false` when the process should exit with status 1.
pub(crate) fn report(
    args: &Args,
    input: &InputArgs,
    results: &RunResults,
) -> anyhow::Result<bool> {
    let Some((action, _)) = args.command.action() else {
        return Ok(true);
    };

    if action == Action::Outline {
        print_outline(args, results);
        return Ok(results.failure_count() == 0);
    }

    let changed = if input.stdin {
        if let Some(report) = results.get(STDIN_NAME) {
            print!("{}", report.updated);
        }
        0
    } else if input.check {
        list_would_change(args, results)
    } else {
        write_changed(args, results)?
    };

    // stdout carries the document itself when reading stdin
    let format = if input.stdin {
        OutputFormat::Text
    } else {
        args.output_format
    };
    print_problems(format, results);

    if !args.quiet && !input.stdin {
        summarize(input.check, changed);
    }

    Ok(!results.has_problems() && !(input.check && changed > 0))
}

fn print_outline(args: &Args, results: &RunResults) {
    let output = match args.output_format {
        OutputFormat::Text => formatters::format_text(results),
        OutputFormat::Json => formatters::format_json(results),
        OutputFormat::Github => formatters::format_github(results),
    };
    if !output.is_empty() {
        println!("{}", output);
    }
}

fn write_changed(args: &Args, results: &RunResults) -> anyhow::Result<usize> {
    let mut written = 0;
    for name in results.names() {
        let Some(report) = results.get(name) else {
            continue;
        };
        if !report.is_changed() {
            continue;
        }
        std::fs::write(name, &report.updated)
            .with_context(|| format!("failed to write {}", name))?;
        written += 1;
        if !args.quiet {
            println!("{} {}", "Updated:".green().bold(), name);
        }
    }
    Ok(written)
}

fn list_would_change(args: &Args, results: &RunResults) -> usize {
    let mut count = 0;
    for name in results.names() {
        if results.get(name).is_some_and(|r| r.is_changed()) {
            count += 1;
            if !args.quiet {
                println!("{} {}", "Would update:".yellow().bold(), name);
            }
        }
    }
    count
}

fn print_problems(format: OutputFormat, results: &RunResults) {
    match format {
        OutputFormat::Json => println!("{}", formatters::format_json(results)),
        OutputFormat::Github => {
            let output = formatters::format_github(results);
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        OutputFormat::Text => {
            for name in results.names() {
                let Some(report) = results.get(name) else {
                    continue;
                };
                match &report.outcome {
                    Outcome::Failed(Error::Numbering { line, source }) => {
                        eprintln!("{}:{}: {} {}", name, line, "error:".red().bold(), source);
                    }
                    Outcome::Failed(err) => {
                        eprintln!("{}: {} {}", name, "error:".red().bold(), err);
                    }
                    Outcome::TocNotFound => {
                        let label = "warning:".yellow().bold();
                        eprintln!("{}: {} {}", name, label, Error::TocNotFound);
                    }
                    Outcome::Changed | Outcome::Unchanged => {}
                }
            }
        }
    }
}

fn summarize(check: bool, changed: usize) {
    match (check, changed) {
        (_, 0) => println!("{}", "Nothing to update.".dimmed()),
        (true, n) => println!(
            "\n{} {} file(s) would be updated (run without {} to apply).",
            "»".yellow().bold(),
            n.to_string().yellow(),
            "--check".bold()
        ),
        (false, n) => println!(
            "{} {} file(s) updated.",
            "✓".green().bold(),
            n.to_string().green()
        ),
    }
}
