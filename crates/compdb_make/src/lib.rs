//! Compilation database generation from `make` dry runs.
//!
//! This crate runs `make -n`, picks the compiler invocations out of the
//! printed commands and writes them to `compile_commands.json` for editors,
//! language servers and static analyzers.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use compdb_make::{Config, run_generate};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config::new(vec!["-B".to_string(), "all".to_string()]);
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! let result = run_generate(cfg, &mut stdout)?;
//! stdout.flush()?;
//!
//! for entry in &result.entries {
//!     println!("{} <- {}", entry.file, entry.command);
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod detector;
mod extractor;
mod generator;
mod reporter;
mod runner;
mod types;

// Re-export public API
pub use config::{Config, PREFERRED_COMPILER_VAR};
pub use detector::detect_compiler_names;
pub use extractor::extract_compile_commands;
pub use generator::run_generate;
pub use runner::{DRY_RUN_FLAG, MAKE_PROGRAM, run_dry_run, run_make_dry_run};
pub use types::GenerateResult;
