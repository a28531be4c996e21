use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use log::debug;

pub fn print_compiler_prefixes<W: Write>(writer: &mut W, prefixes: &[String]) -> io::Result<()> {
    writeln!(writer, "{} {}", "Detected compiler prefixes:".bold(), prefixes.join(", ").cyan())?;
    writer.flush()
}

pub fn print_progress<W: Write>(writer: &mut W, message: &str) -> io::Result<()> {
    writeln!(writer, "{} {}", "●".bright_blue(), message)?;
    writer.flush()
}

pub fn print_no_commands_warning<W: Write>(writer: &mut W) -> io::Result<()> {
    debug!("No compile commands detected");
    writeln!(
        writer,
        "{} no compile commands detected. Try `{}` then rerun.",
        "Warning:".yellow().bold(),
        "make clean".bold()
    )?;
    writer.flush()
}

pub fn print_generated_message<W: Write>(
    writer: &mut W,
    output: &Path,
    count: usize,
) -> io::Result<()> {
    writeln!(
        writer,
        "{} Generated {} with {} entries.",
        "✓".green().bold(),
        output.display().to_string().blue(),
        count.to_string().cyan()
    )?;
    writer.flush()
}
