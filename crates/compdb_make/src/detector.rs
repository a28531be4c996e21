use anyhow::{Context, Result};
use compdb_core::{BASELINE_COMPILERS, split_words};
use log::{debug, trace};
use std::collections::HashSet;

/// Returns the compiler names a trace line may start with.
///
/// The baseline names come first, followed by the first word of `preferred`
/// (the value of `CC`) when it has one. Duplicates are dropped keeping the
/// first occurrence.
pub fn detect_compiler_names(preferred: Option<&str>) -> Result<Vec<String>> {
    let mut candidates: Vec<String> = BASELINE_COMPILERS.iter().map(|c| c.to_string()).collect();

    if let Some(value) = preferred
        && !value.is_empty()
    {
        let words = split_words(value)
            .with_context(|| format!("Failed to parse compiler command {:?}", value))?;
        if let Some(first) = words.into_iter().next() {
            trace!("Preferred compiler executable: {}", first);
            candidates.push(first);
        }
    }

    let mut seen = HashSet::new();
    candidates.retain(|c| seen.insert(c.clone()));

    debug!("Compiler prefixes: {:?}", candidates);
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use compdb_core::ParseError;

    #[test]
    fn test_detect_without_preferred() {
        assert_eq!(detect_compiler_names(None).unwrap(), vec!["gcc", "g++"]);
    }

    #[test]
    fn test_detect_empty_preferred() {
        assert_eq!(detect_compiler_names(Some("")).unwrap(), vec!["gcc", "g++"]);
    }

    #[test]
    fn test_detect_whitespace_preferred() {
        assert_eq!(detect_compiler_names(Some("   ")).unwrap(), vec!["gcc", "g++"]);
    }

    #[test]
    fn test_detect_appends_preferred() {
        assert_eq!(detect_compiler_names(Some("clang")).unwrap(), vec!["gcc", "g++", "clang"]);
    }

    #[test]
    fn test_detect_uses_first_word_only() {
        let names = detect_compiler_names(Some("/opt/cross/bin/arm-gcc -mcpu=cortex-m4")).unwrap();
        assert_eq!(names, vec!["gcc", "g++", "/opt/cross/bin/arm-gcc"]);
    }

    #[test]
    fn test_detect_quoted_path() {
        let names = detect_compiler_names(Some("'/tools/my cc/clang' -O2")).unwrap();
        assert_eq!(names, vec!["gcc", "g++", "/tools/my cc/clang"]);
    }

    #[test]
    fn test_detect_deduplicates_baseline() {
        assert_eq!(detect_compiler_names(Some("gcc -std=c99")).unwrap(), vec!["gcc", "g++"]);
        assert_eq!(detect_compiler_names(Some("g++")).unwrap(), vec!["gcc", "g++"]);
    }

    #[test]
    fn test_detect_malformed_quoting() {
        let err = detect_compiler_names(Some("\"clang -O2")).unwrap_err();
        assert!(err.downcast_ref::<ParseError>().is_some());
        assert!(err.to_string().contains("Failed to parse compiler command"));
    }
}
