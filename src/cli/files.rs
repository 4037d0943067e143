//! File expansion and ignore-pattern filtering

/// Expand directories to .md/.markdown files recursively
pub(crate) fn expand_paths(paths: &[String]) -> Vec<String> {
    use walkdir::WalkDir;

    let mut expanded = Vec::new();
    for path in paths {
        let p = std::path::Path::new(path);
        if p.is_dir() {
            for entry in WalkDir::new(p).into_iter().filter_map(|e| e.ok()) {
                let ep = entry.path();
                if ep.is_file()
                    && let Some(ext) = ep.extension().and_then(|e| e.to_str())
                    && (ext == "md" || ext == "markdown")
                {
                    expanded.push(ep.to_string_lossy().to_string());
                }
            }
        } else {
            expanded.push(path.clone());
        }
    }
    expanded.sort();
    expanded.dedup();
    log::debug!("expanded {} path(s) to {} file(s)", paths.len(), expanded.len());
    expanded
}

/// Filter files by ignore glob patterns
pub(crate) fn filter_ignored(
    files: Vec<String>,
    ignore_patterns: &[String],
) -> anyhow::Result<Vec<String>> {
    if ignore_patterns.is_empty() {
        return Ok(files);
    }

    use globset::{Glob, GlobSetBuilder};

    let mut builder = GlobSetBuilder::new();
    for pattern in ignore_patterns {
        builder.add(Glob::new(pattern)?);
    }
    let ignore_set = builder.build()?;

    Ok(files
        .into_iter()
        .filter(|f| !ignore_set.is_match(f))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("a.md"), "# A\n").unwrap();
        std::fs::write(dir.path().join("sub").join("b.markdown"), "# B\n").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "# C\n").unwrap();

        let files = expand_paths(&[dir.path().to_string_lossy().to_string()]);
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.ends_with(".md") || f.ends_with(".markdown")));
    }

    #[test]
    fn test_filter_ignored() {
        let files = vec!["docs/a.md".to_string(), "vendor/b.md".to_string()];
        let kept = filter_ignored(files, &["vendor/**".to_string()]).unwrap();
        assert_eq!(kept, vec!["docs/a.md"]);
    }
}
