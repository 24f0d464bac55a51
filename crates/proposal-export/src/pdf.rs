use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::ExportError;

/// Turns an assembled HTML document into a paginated PDF on disk.
///
/// Implementations must not leave a file at `output` unless rendering
/// succeeded.
pub trait DocumentRenderer {
    /// `base_dir` resolves relative URLs (images, stylesheets) in `markup`.
    fn render_pdf(&self, markup: &str, base_dir: &Path, output: &Path) -> Result<(), ExportError>;
}

/// Renders by piping the document to the `weasyprint` command line tool.
///
/// The PDF is written to `<output>.pdf.tmp` first and renamed over
/// `output` only after weasyprint exits successfully.
#[derive(Debug, Clone)]
pub struct WeasyPrint {
    program: PathBuf,
}

impl WeasyPrint {
    pub const DEFAULT_PROGRAM: &'static str = "weasyprint";

    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn run(&self, markup: &str, base_dir: &Path, target: &Path) -> Result<(), ExportError> {
        let program = self.program.display();

        let mut child = Command::new(&self.program)
            .arg("--base-url")
            .arg(base_dir)
            .arg("-")
            .arg(target)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ExportError::Backend(format!("failed to start {program}: {e}")))?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(markup.as_bytes()) {
                let _ = child.kill();
                let _ = child.wait();
                return Err(ExportError::Backend(format!(
                    "failed to send document to {program}: {e}"
                )));
            }
        }
        // stdin is dropped here, weasyprint sees EOF

        let output = child
            .wait_with_output()
            .map_err(|e| ExportError::Backend(format!("failed to wait for {program}: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExportError::Backend(format!(
                "{program} exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}

impl Default for WeasyPrint {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PROGRAM)
    }
}

impl DocumentRenderer for WeasyPrint {
    fn render_pdf(&self, markup: &str, base_dir: &Path, output: &Path) -> Result<(), ExportError> {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ExportError::Backend(format!("failed to create {}: {e}", parent.display()))
                })?;
            }
        }

        let tmp_path = temp_path(output);
        let result = self.run(markup, base_dir, &tmp_path).and_then(|()| {
            std::fs::rename(&tmp_path, output).map_err(|e| {
                ExportError::Backend(format!("failed to move PDF into {}: {e}", output.display()))
            })
        });

        if let Err(e) = result {
            discard(&tmp_path);
            return Err(e);
        }

        tracing::info!(
            program = %self.program.display(),
            path = %output.display(),
            "PDF written"
        );
        Ok(())
    }
}

/// Sibling scratch file for `output`.
pub fn temp_path(output: &Path) -> PathBuf {
    output.with_extension("pdf.tmp")
}

fn discard(tmp_path: &Path) {
    if !tmp_path.exists() {
        return;
    }
    if let Err(e) = std::fs::remove_file(tmp_path) {
        tracing::warn!(
            path = %tmp_path.display(),
            error = %e,
            "failed to remove partial PDF"
        );
    }
}
