use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::Command;

/// Scaffold written to the temp file when creating a new prompt; it is
/// stripped from the content the editor returns
pub const CONTENT_SCAFFOLD: &str = "# Write your prompt here\n# Use {{param}} syntax for parameters\n\n";

/// Temp file removed on drop, so the editor handoff cleans up on every
/// exit path (success, non-zero exit, or error)
struct TempFile {
    path: PathBuf,
}

impl TempFile {
    fn create(content: &str) -> Result<Self> {
        let path = std::env::temp_dir().join(format!(
            "prompta-{}-{}.txt",
            std::process::id(),
            uuid::Uuid::new_v4().simple()
        ));
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to create temp file: {path:?}"))?;
        Ok(Self { path })
    }

    fn read(&self) -> Result<String> {
        std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read temp file: {:?}", self.path))
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Write `seed` (or the scaffold) to a temp file, run `editor` on it
/// synchronously, and return the edited content. Supports editor
/// commands with arguments, e.g. `code --wait`.
pub fn open_editor(editor: &str, seed: Option<&str>) -> Result<String> {
    let temp = TempFile::create(seed.unwrap_or(CONTENT_SCAFFOLD))?;

    let mut parts = editor.split_whitespace();
    let program = parts.next().context("Editor command is empty")?;

    let status = Command::new(program)
        .args(parts)
        .arg(&temp.path)
        .status()
        .with_context(|| format!("Failed to launch editor: {editor}"))?;

    if !status.success() {
        anyhow::bail!("Editor exited with non-zero status");
    }

    let content = temp.read()?;
    Ok(strip_scaffold(&content, seed.is_none()))
}

fn strip_scaffold(content: &str, seeded_with_scaffold: bool) -> String {
    if seeded_with_scaffold {
        content
            .strip_prefix(CONTENT_SCAFFOLD)
            .unwrap_or(content)
            .to_string()
    } else {
        content.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_scaffold_removes_the_header() {
        let edited = format!("{CONTENT_SCAFFOLD}Hello {{{{name}}}}!");
        assert_eq!(strip_scaffold(&edited, true), "Hello {{name}}!");
    }

    #[test]
    fn test_strip_scaffold_is_noop_when_seeded_with_content() {
        let edited = "existing content";
        assert_eq!(strip_scaffold(edited, false), "existing content");
    }

    #[test]
    fn test_strip_scaffold_keeps_content_without_header() {
        // User deleted or rewrote the scaffold lines
        assert_eq!(strip_scaffold("just text", true), "just text");
    }

    #[test]
    fn test_temp_file_removed_on_drop() {
        let path = {
            let temp = TempFile::create("x").unwrap();
            assert!(temp.path.exists());
            temp.path.clone()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_editor_uses_the_seed_content() {
        // `cat`-less check: "true" succeeds without touching the file,
        // so the seed comes back unchanged
        if cfg!(unix) {
            let content = open_editor("true", Some("seeded {{a}}")).unwrap();
            assert_eq!(content, "seeded {{a}}");
        }
    }

    #[test]
    fn test_failing_editor_surfaces_an_error() {
        if cfg!(unix) {
            assert!(open_editor("false", Some("x")).is_err());
        }
    }

    #[test]
    fn test_missing_editor_surfaces_an_error() {
        assert!(open_editor("prompta-no-such-editor-command", Some("x")).is_err());
    }
}
