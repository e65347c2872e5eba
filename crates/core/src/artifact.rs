//! Binary results (audio, images) held as temporary local files.
//!
//! A [`BinaryResource`] owns its file: dropping the resource removes the file,
//! so the locator lives exactly as long as the result that carries it.

use std::fmt;
use std::io::Write;
use std::path::Path;
use tempfile::{Builder, TempPath};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Failed to store binary payload: {0}")]
    Io(#[from] std::io::Error),
}

pub struct BinaryResource {
    path: TempPath,
    mime: String,
    len: usize,
}

impl BinaryResource {
    /// Write `bytes` to a fresh temp file, in `dir` if given, otherwise the system temp dir.
    pub fn store(bytes: &[u8], mime: &str, dir: Option<&Path>) -> Result<Self, ArtifactError> {
        let mime = essence(mime);
        let suffix = format!(".{}", extension_for(&mime));

        let mut builder = Builder::new();
        builder.prefix("toolhub-").suffix(&suffix);
        let mut file = match dir {
            Some(dir) => {
                std::fs::create_dir_all(dir)?;
                builder.tempfile_in(dir)?
            }
            None => builder.tempfile()?,
        };
        file.write_all(bytes)?;
        file.flush()?;

        tracing::debug!(
            "Stored {} byte {} payload at {}",
            bytes.len(),
            mime,
            file.path().display()
        );

        Ok(Self {
            path: file.into_temp_path(),
            mime,
            len: bytes.len(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `file://` URL usable by players and viewers.
    pub fn locator(&self) -> String {
        format!("file://{}", self.path.display())
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_audio(&self) -> bool {
        self.mime.starts_with("audio/")
    }

    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

impl fmt::Debug for BinaryResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryResource")
            .field("path", &self.path())
            .field("mime", &self.mime)
            .field("len", &self.len)
            .finish()
    }
}

/// Media type without parameters, lowercased. Empty input becomes octet-stream.
fn essence(mime: &str) -> String {
    let essence = mime.split(';').next().unwrap_or("").trim().to_lowercase();
    if essence.is_empty() {
        "application/octet-stream".to_string()
    } else {
        essence
    }
}

fn extension_for(mime: &str) -> &'static str {
    match mime {
        "audio/flac" | "audio/x-flac" => "flac",
        "audio/wav" | "audio/x-wav" | "audio/wave" => "wav",
        "audio/mpeg" => "mp3",
        "audio/ogg" => "ogg",
        "image/png" => "png",
        "image/jpeg" | "image/jpg" => "jpg",
        "image/webp" => "webp",
        "image/gif" => "gif",
        _ => "bin",
    }
}
