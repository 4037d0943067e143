//! `mkdtoc init` subcommand - write a starter configuration file

const JSON_TEMPLATE: &str = r#"{
  "toc_levels": [1, 2, 3]
}
"#;

const YAML_TEMPLATE: &str = r#"# mkdtoc configuration
# Relative heading levels listed in the TOC (1 = level of the first heading).
# Remove the key or leave it empty to list every level.
toc_levels:
  - 1
  - 2
  - 3
"#;

const TOML_TEMPLATE: &str = r#"# mkdtoc configuration
# Relative heading levels listed in the TOC (1 = level of the first heading).
# Remove the key or leave it empty to list every level.
toc_levels = [1, 2, 3]
"#;

/// Starter configuration in the requested format
pub(crate) fn template(format: &str) -> Option<&'static str> {
    match format {
        "json" => Some(JSON_TEMPLATE),
        "yaml" | "yml" => Some(YAML_TEMPLATE),
        "toml" => Some(TOML_TEMPLATE),
        _ => None,
    }
}

/// Initialize a new configuration file
pub(crate) fn init_config(output_path: &str, format: &str) -> anyhow::Result<()> {
    use anyhow::Context;
    use colored::Colorize;
    use std::path::Path;

    if Path::new(output_path).exists() {
        anyhow::bail!(
            "configuration file '{}' already exists; remove it first or choose another --output",
            output_path
        );
    }

    let Some(content) = template(format) else {
        anyhow::bail!("unknown format '{}' (expected json, yaml, or toml)", format);
    };

    std::fs::write(output_path, content)
        .with_context(|| format!("failed to write {}", output_path))?;
    println!("{} Created {}", "✓".green().bold(), output_path.cyan());
    Ok(())
}
