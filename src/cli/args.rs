//! CLI argument definitions for mkdtoc

use clap::Parser;

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
    /// GitHub Actions workflow command annotations (::error file=...)
    Github,
}

#[derive(Parser, Debug)]
#[command(name = "mkdtoc")]
#[command(about = "Number Markdown headings and keep a table of contents in sync", long_about = None)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub(crate) command: Command,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub(crate) config: Option<String>,

    /// Relative heading levels to list in the TOC (e.g. --levels 1,2)
    #[arg(long, value_delimiter = ',', global = true)]
    pub(crate) levels: Vec<usize>,

    /// Output format for outlines and diagnostics
    #[arg(short = 'o', long, default_value = "text", global = true)]
    pub(crate) output_format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    /// Quiet mode - only report problems
    #[arg(short, long, global = true)]
    pub(crate) quiet: bool,
}

/// Where the documents come from and what to do with the result
#[derive(clap::Args, Debug, Clone, Default)]
pub(crate) struct InputArgs {
    /// Files or directories to process
    pub(crate) files: Vec<String>,

    /// Read a single document from stdin and write the result to stdout
    #[arg(long)]
    pub(crate) stdin: bool,

    /// Do not write anything; exit 1 if any file would change
    #[arg(long)]
    pub(crate) check: bool,

    /// Glob patterns for files to ignore (repeatable)
    #[arg(long, action = clap::ArgAction::Append)]
    pub(crate) ignore: Vec<String>,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Command {
    /// Add or remove section numbers on headings
    #[command(subcommand)]
    Number(NumberCommand),

    /// Insert, update or remove the table of contents
    #[command(subcommand)]
    Toc(TocCommand),

    /// Print the numbered heading outline
    Outline(InputArgs),

    /// Initialize a new configuration file
    Init {
        /// Output file path
        #[arg(long, default_value = ".mkdtoc.json")]
        output: String,

        /// Output format (json, yaml, or toml)
        #[arg(long, default_value = "json")]
        format: String,
    },
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum NumberCommand {
    /// Insert section numbers after each heading marker
    Add(InputArgs),
    /// Strip section numbers from headings
    Remove(InputArgs),
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum TocCommand {
    /// Insert a new table of contents
    Add {
        /// 1-based line the TOC is inserted above
        #[arg(long, default_value_t = 1)]
        line: usize,

        #[command(flatten)]
        input: InputArgs,
    },
    /// Regenerate the existing table of contents
    Update(InputArgs),
    /// Replace the existing table of contents with a blank line
    Remove(InputArgs),
}

impl Command {
    /// The library action and its inputs, or `None` for `init`
    pub(crate) fn action(&self) -> Option<(mkdtoc::Action, &InputArgs)> {
        use mkdtoc::Action;
        match self {
            Command::Number(NumberCommand::Add(input)) => Some((Action::AddNumbers, input)),
            Command::Number(NumberCommand::Remove(input)) => Some((Action::RemoveNumbers, input)),
            Command::Toc(TocCommand::Add { line, input }) => Some((
                Action::AddToc {
                    line: line.saturating_sub(1),
                },
                input,
            )),
            Command::Toc(TocCommand::Update(input)) => Some((Action::UpdateToc, input)),
            Command::Toc(TocCommand::Remove(input)) => Some((Action::RemoveToc, input)),
            Command::Outline(input) => Some((Action::Outline, input)),
            Command::Init { .. } => None,
        }
    }
}
