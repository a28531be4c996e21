use anyhow::Result;
use clap::Parser;
use compdb_make::Config;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cfg = Config::parse();
    debug!("Parsed CLI arguments: {:?}", cfg.make_args);

    let start = Instant::now();
    let result = compdb_make::run_generate(cfg, &mut stdout)?;
    stdout.flush()?;

    info!(
        "Wrote {} entries to {} in {}ms",
        result.entries.len(),
        result.output.display(),
        start.elapsed().as_millis()
    );

    Ok(())
}
