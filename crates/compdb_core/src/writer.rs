use anyhow::{Context, Result};
use log::{debug, trace};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::types::CompileCommand;

/// Writes `entries` to `path` as a pretty-printed JSON array, replacing any
/// existing file.
///
/// The file handle is dropped before returning on both the success and the
/// error path. An empty slice produces `[]`.
pub fn write_compile_commands(entries: &[CompileCommand], path: &Path) -> Result<()> {
    debug!("Writing {} entries to {}", entries.len(), path.display());
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, entries)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writer.flush().with_context(|| format!("Failed to write {}", path.display()))?;

    trace!("Finished writing {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::TempDir;

    fn entry(n: usize) -> CompileCommand {
        CompileCommand {
            directory: "/work/project".to_string(),
            command: format!("gcc -c -o obj{n}.o src/file{n}.c"),
            file: format!("src/file{n}.c"),
        }
    }

    #[test]
    fn test_write_and_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("compile_commands.json");
        let entries: Vec<_> = (0..3).map(entry).collect();

        write_compile_commands(&entries, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: Vec<CompileCommand> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, entries);

        let json: Value = serde_json::from_str(&content).unwrap();
        let array = json.as_array().unwrap();
        assert_eq!(array.len(), 3);
        for (obj, original) in array.iter().zip(&entries) {
            let obj = obj.as_object().unwrap();
            assert_eq!(obj.len(), 3);
            assert_eq!(obj["directory"], original.directory.as_str());
            assert_eq!(obj["command"], original.command.as_str());
            assert_eq!(obj["file"], original.file.as_str());
        }
    }

    #[test]
    fn test_write_key_order_and_indentation() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("compile_commands.json");

        write_compile_commands(&[entry(1)], &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let expected = r#"[
  {
    "directory": "/work/project",
    "command": "gcc -c -o obj1.o src/file1.c",
    "file": "src/file1.c"
  }
]"#;
        assert_eq!(content, expected);
    }

    #[test]
    fn test_write_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("compile_commands.json");

        write_compile_commands(&[], &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[]");
        let json: Value = serde_json::from_str(&content).unwrap();
        assert!(json.as_array().unwrap().is_empty());
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("compile_commands.json");
        fs::write(&path, "stale content that is much longer than the new output").unwrap();

        write_compile_commands(&[], &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_write_unwritable_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("compile_commands.json");

        let result = write_compile_commands(&[entry(0)], &path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to create"));
    }
}
