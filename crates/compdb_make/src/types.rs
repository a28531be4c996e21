use compdb_core::CompileCommand;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub compiler_prefixes: Vec<String>,
    pub entries: Vec<CompileCommand>,
    /// Where the database was written
    pub output: PathBuf,
}
