use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::{
    io::{self, Read},
    process::Command,
};

/// Build tool driven by [`run_make_dry_run`]
pub const MAKE_PROGRAM: &str = "make";

/// Flag asking make to print commands instead of running them
pub const DRY_RUN_FLAG: &str = "-n";

/// Runs `make -n` with `make_args` appended and returns everything it printed.
pub fn run_make_dry_run(make_args: &[String]) -> Result<String> {
    run_dry_run(MAKE_PROGRAM, DRY_RUN_FLAG, make_args)
}

/// Runs `program dry_run_flag extra_args...` in the current directory.
///
/// Standard output and standard error share one pipe, so the returned text
/// keeps the order the tool wrote it in. A non-zero exit status is logged and
/// otherwise ignored. There is no timeout: a hanging tool blocks this call.
pub fn run_dry_run(program: &str, dry_run_flag: &str, extra_args: &[String]) -> Result<String> {
    info!("Running {} {} {}", program, dry_run_flag, extra_args.join(" "));

    let (mut reader, writer) = io::pipe().context("Failed to create output pipe")?;
    let stderr_writer = writer.try_clone().context("Failed to create output pipe")?;

    let mut command = Command::new(program);
    command.arg(dry_run_flag).args(extra_args).stdout(writer).stderr(stderr_writer);

    let mut child = command.spawn().with_context(|| format!("Failed to run `{}`", program))?;
    // The command holds the write ends; drop them so the read sees EOF
    drop(command);

    let mut raw = Vec::new();
    reader
        .read_to_end(&mut raw)
        .with_context(|| format!("Failed to read output of `{}`", program))?;
    let status = child.wait().with_context(|| format!("Failed to wait for `{}`", program))?;

    if !status.success() {
        warn!("`{} {}` exited with {}", program, dry_run_flag, status);
    }
    debug!("Captured {} bytes from `{}`", raw.len(), program);

    Ok(String::from_utf8_lossy(&raw).into_owned())
}
