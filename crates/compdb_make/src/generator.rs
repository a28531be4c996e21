use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::Write;

use compdb_core::write_compile_commands;

use crate::{
    config::Config,
    detector::detect_compiler_names,
    extractor::extract_compile_commands,
    reporter::{
        print_compiler_prefixes, print_generated_message, print_no_commands_warning,
        print_progress,
    },
    runner::run_make_dry_run,
    types::GenerateResult,
};

/// Generates `compile_commands.json` from a `make -n` dry run.
///
/// Progress is reported on `out` as each step starts. Finding no compile
/// commands is not an error: a warning is printed and an empty database is
/// still written.
pub fn run_generate<W: Write>(mut cfg: Config, out: &mut W) -> Result<GenerateResult> {
    info!("Starting compile command generation");

    cfg.initialize()?;
    generate_from(&cfg, out, run_make_dry_run)
}

/// Runs the pipeline on an initialized config with a caller-supplied dry run.
pub(crate) fn generate_from<W, F>(cfg: &Config, out: &mut W, dry_run: F) -> Result<GenerateResult>
where
    W: Write,
    F: FnOnce(&[String]) -> Result<String>,
{
    let directory = cfg.directory()?.clone();

    let compiler_prefixes = detect_compiler_names(cfg.preferred_compiler.as_deref())?;
    print_compiler_prefixes(out, &compiler_prefixes)?;

    print_progress(out, "Running make in dry-run mode...")?;
    debug!("Forwarding make arguments: {:?}", cfg.make_args);
    let trace = dry_run(&cfg.make_args)?;

    print_progress(out, "Extracting compile commands...")?;
    let entries = extract_compile_commands(&trace, &compiler_prefixes, &directory)?;

    if entries.is_empty() {
        warn!("No compile commands found in {} bytes of dry-run output", trace.len());
        print_no_commands_warning(out)?;
    }

    let output = directory.join(&cfg.output);
    write_compile_commands(&entries, &output)
        .with_context(|| format!("Failed to write {}", cfg.output.display()))?;
    print_generated_message(out, &cfg.output, entries.len())?;

    info!("Compile command generation complete. Wrote {} entries", entries.len());
    Ok(GenerateResult { compiler_prefixes, entries, output })
}
