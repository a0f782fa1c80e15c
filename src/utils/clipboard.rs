use anyhow::{Context, Result};
use std::io::Write;
use std::process::{Command, Stdio};

fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to spawn {program}"))?;

    if let Some(stdin) = child.stdin.as_mut() {
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("Failed to write to {program}"))?;
    }

    let status = child
        .wait()
        .with_context(|| format!("Failed to wait for {program}"))?;

    if !status.success() {
        anyhow::bail!("{program} exited with non-zero status");
    }

    Ok(())
}

/// Destination for copied text. Commands receive this instead of
/// calling the system clipboard directly, so flows can run in tests
/// with a capturing double.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// System clipboard backed by the platform's pipe utility
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        copy_to_clipboard(text)
    }
}

/// Write text to the system clipboard via the platform's pipe utility
fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to("pbcopy", &[], text)?;
    }

    #[cfg(target_os = "linux")]
    {
        // Try xclip first, then xsel
        if pipe_to("xclip", &["-selection", "clipboard"], text).is_err() {
            pipe_to("xsel", &["--clipboard", "--input"], text)?;
        }
    }

    #[cfg(target_os = "windows")]
    {
        pipe_to("clip", &[], text)?;
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        anyhow::bail!("Clipboard is not supported on this platform");
    }

    Ok(())
}

#[cfg(test)]
pub mod capture {
    //! Capturing clipboard for driving command flows in tests.

    use super::Clipboard;
    use anyhow::Result;

    #[derive(Default)]
    pub struct Captured {
        pub copied: Vec<String>,
    }

    impl Captured {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl Clipboard for Captured {
        fn copy(&mut self, text: &str) -> Result<()> {
            self.copied.push(text.to_string());
            Ok(())
        }
    }
}
