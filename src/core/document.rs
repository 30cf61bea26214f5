//! The document selected for upload and its client-side validation.

use std::error::Error as StdError;
use std::fmt;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// A document picked by the user. The file is only read when the upload
/// request is built, so this holds the path rather than the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedDocument {
    pub name: String,
    pub path: PathBuf,
    /// Media type declared by the file name, e.g. `application/pdf`.
    pub media_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    NotPdf { media_type: String },
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::NotPdf { .. } => write!(f, "Please upload a PDF file"),
        }
    }
}

impl StdError for DocumentError {}

impl UploadedDocument {
    /// Accept `path` only if its declared media type is PDF.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let media_type = declared_media_type(path);
        if media_type != PDF_MEDIA_TYPE {
            return Err(DocumentError::NotPdf { media_type });
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document.pdf".to_string());

        Ok(Self {
            name,
            path: path.to_path_buf(),
            media_type,
        })
    }
}

pub fn declared_media_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Turn text typed into the file prompt into a path.
///
/// Terminals that support drag and drop paste quoted paths, and `~` is
/// expanded to the home directory.
pub fn parse_selected_path(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| {
            trimmed
                .strip_prefix('\'')
                .and_then(|s| s.strip_suffix('\''))
        })
        .unwrap_or(trimmed);

    if unquoted.is_empty() {
        return None;
    }

    if let Some(rest) = unquoted.strip_prefix("~/") {
        if let Some(dirs) = BaseDirs::new() {
            return Some(dirs.home_dir().join(rest));
        }
    }

    Some(PathBuf::from(unquoted))
}
