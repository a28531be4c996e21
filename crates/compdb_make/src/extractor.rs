use anyhow::{Context, Result};
use compdb_core::{CompileCommand, is_source_file, split_words};
use log::{debug, trace};
use std::path::Path;

/// Scans a dry-run trace for compiler invocations.
///
/// A line yields an entry when, after trimming, it starts with one of
/// `compiler_prefixes` and one of its shell words ends in a source extension.
/// Everything else is skipped without a diagnostic. The prefix test is a raw
/// `starts_with`, so `gcc-wrapper` matches `gcc`.
///
/// A line that starts with a prefix but cannot be split (unbalanced quotes)
/// fails the whole extraction.
pub fn extract_compile_commands(
    trace: &str,
    compiler_prefixes: &[String],
    directory: &Path,
) -> Result<Vec<CompileCommand>> {
    let directory = directory.to_string_lossy().into_owned();
    let mut entries = Vec::new();

    for line in trace.lines() {
        let stripped = line.trim();
        if stripped.is_empty() {
            continue;
        }

        if !compiler_prefixes.iter().any(|p| stripped.starts_with(p.as_str())) {
            continue;
        }

        let words = split_words(stripped)
            .with_context(|| format!("Failed to tokenize line {:?}", stripped))?;

        let Some(file) = words.into_iter().find(|w| is_source_file(w)) else {
            trace!("No source file in compiler line: {}", stripped);
            continue;
        };

        trace!("Found compile command for {}", file);
        entries.push(CompileCommand {
            directory: directory.clone(),
            command: stripped.to_string(),
            file,
        });
    }

    debug!("Extracted {} compile commands", entries.len());
    Ok(entries)
}
