//! Command-line interface for mkdtoc

#[cfg(feature = "cli")]
mod cli;

#[cfg(feature = "cli")]
fn main() -> anyhow::Result<()> {
    cli::run()
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Rebuild with --features cli");
    std::process::exit(1);
}
