//! Starter ruleset generation for `folder-enforcer init`.

use std::fs;
use std::path::Path;

use tracing::info;
use walkdir::WalkDir;

use crate::loader::{Result, RuleError};

/// Render a starter ruleset from the immediate sub-directories of `dir`.
///
/// Hidden directories are left out; names are sorted.
pub fn generate(dir: &Path) -> Result<String> {
    let mut categories = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name.starts_with('.') {
            continue;
        }
        categories.push(name.into_owned());
    }

    Ok(render(&dir.display().to_string(), &categories))
}

fn render(source: &str, categories: &[String]) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Folder rules generated from {source}\n"));
    out.push_str("# One allowed top-level folder per line.\n");
    out.push_str("# Lines starting with '.' are valid targets but hidden from suggestions.\n\n");
    for category in categories {
        out.push_str(category);
        out.push('\n');
    }
    out.push_str("\n# Pattern hints: pattern:<glob>[|<glob>...] -> <folder>/\n");
    match categories.first() {
        Some(first) => out.push_str(&format!("# pattern:*{first}* -> {first}/\n")),
        None => out.push_str("# pattern:*invoice*|*proposal* -> clients/\n"),
    }
    out
}

/// Write `text` to `path` atomically (temp file, then rename).
///
/// Fails with [`RuleError::AlreadyExists`] when `path` exists and `force` is false.
pub fn write_rules(path: &Path, text: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(RuleError::AlreadyExists(path.to_path_buf()));
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "folder-rules".to_string());
    let tmp_path = path.with_file_name(format!(".{file_name}.tmp"));

    fs::write(&tmp_path, text)?;
    fs::rename(&tmp_path, path)?;

    info!(path = %path.display(), "wrote ruleset");
    Ok(())
}
