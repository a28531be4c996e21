//! Core utilities for compdb tools.
//!
//! This crate provides the pieces shared by every compilation database
//! generator, including:
//! - The `compile_commands.json` entry type
//! - Baseline compiler names and recognized source file extensions
//! - Shell-style splitting of command lines
//! - Writing the database to disk

mod constants;
mod shell;
mod types;
mod writer;

// Re-export public API
pub use constants::{BASELINE_COMPILERS, DEFAULT_OUTPUT_FILE, SOURCE_EXTENSIONS, is_source_file};
pub use shell::{ParseError, split_words};
pub use types::CompileCommand;
pub use writer::write_compile_commands;
