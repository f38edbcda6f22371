use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};

/// The external OCR collaborator: runs the Tesseract CLI against an image and
/// returns its raw stdout text.
///
/// This is the only side-effecting, failure-prone boundary of the program.
/// Callers treat any error (or all-whitespace output) as "no text to analyze"
/// rather than a user-visible failure.
pub struct TesseractOcr {
    binary: PathBuf,
    language: String,
}

impl TesseractOcr {
    pub fn new(binary: PathBuf, language: String) -> Self {
        Self { binary, language }
    }

    /// Extract raw text from an image. The returned text may span multiple
    /// lines and contain hyphenation artifacts; normalization is the caller's
    /// job.
    pub fn extract(&self, image: &Path) -> Result<String> {
        if !image.is_file() {
            bail!("image not readable: {}", image.display());
        }

        // Tesseract chatters on stderr even on success; discard it.
        let output = Command::new(&self.binary)
            .arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .stderr(Stdio::null())
            .output()
            .with_context(|| format!("failed to run {}", self.binary.display()))?;

        if !output.status.success() {
            bail!("{} exited with {}", self.binary.display(), output.status);
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
