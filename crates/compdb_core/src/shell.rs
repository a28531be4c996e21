use log::trace;

pub use shell_words::ParseError;

/// Splits a command line into words using POSIX shell quoting rules.
///
/// Quoted arguments containing spaces stay a single word. Unbalanced quotes
/// or a trailing backslash produce a [`ParseError`].
pub fn split_words(line: &str) -> Result<Vec<String>, ParseError> {
    let words = shell_words::split(line)?;
    trace!("Split {:?} into {} words", line, words.len());
    Ok(words)
}
