use anyhow::{Result, anyhow};
use clap::Parser;
use compdb_core::DEFAULT_OUTPUT_FILE;
use log::{debug, info};
use std::{env, path::PathBuf};

/// Environment variable naming the preferred compiler command
pub const PREFERRED_COMPILER_VAR: &str = "CC";

#[derive(Debug, Clone, Parser)]
#[command(name = "compdb")]
#[command(about = "Generate compile_commands.json from a `make -n` dry run")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Config {
    /// Arguments forwarded verbatim to `make -n`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub make_args: Vec<String>,

    #[clap(skip)]
    pub preferred_compiler: Option<String>,

    #[clap(skip)]
    pub directory: Option<PathBuf>,

    #[clap(skip = PathBuf::from(DEFAULT_OUTPUT_FILE))]
    pub output: PathBuf,
}

impl Config {
    pub fn new(make_args: Vec<String>) -> Self {
        Self {
            make_args,
            preferred_compiler: None,
            directory: None,
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }

    /// Initialize the config by capturing the working directory and reading `CC`
    pub fn initialize(&mut self) -> Result<()> {
        let directory = env::current_dir()?;
        info!("Using working directory: {}", directory.display());
        self.directory = Some(directory);

        // Non-unicode values are treated like an unset variable
        self.preferred_compiler = env::var(PREFERRED_COMPILER_VAR).ok();
        debug!("{}={:?}", PREFERRED_COMPILER_VAR, self.preferred_compiler);
        Ok(())
    }

    /// Get the working directory, returning an error if not initialized
    pub fn directory(&self) -> Result<&PathBuf> {
        self.directory
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }
}
