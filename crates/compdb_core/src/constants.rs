//! Constants for compiler names, source extensions and output naming.
//!
//! Source detection is a plain suffix test on a command-line token, so the
//! extensions below carry their leading dot.

/// Compiler executables recognized even when `CC` is unset
pub const BASELINE_COMPILERS: &[&str] = &["gcc", "g++"];

/// Suffixes that mark a token as the translation unit of a compile command
pub const SOURCE_EXTENSIONS: &[&str] = &[
    ".c",   // C
    ".cc",  // C++
    ".cpp", // C++
    ".cxx", // C++
];

/// File name written into the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "compile_commands.json";

/// Returns true when the token ends with one of [`SOURCE_EXTENSIONS`].
pub fn is_source_file(token: &str) -> bool {
    SOURCE_EXTENSIONS.iter().any(|ext| token.ends_with(ext))
}
