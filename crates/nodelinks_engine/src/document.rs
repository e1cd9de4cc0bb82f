use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use engine_logging::{engine_debug, engine_warn};
use thiserror::Error;
use url::Url;

use crate::decode::{decode_document, DecodeError};

/// Where the HTML document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Path(PathBuf),
    Stdin,
}

impl DocumentSource {
    /// `None` and `-` both mean standard input.
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != "-" => Self::Path(path),
            _ => Self::Stdin,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Path(path) => path.display().to_string(),
            Self::Stdin => "<stdin>".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    pub html: String,
    pub encoding_label: String,
    /// Address a browser would give the page: `file://` for files, none for stdin.
    pub document_url: Option<Url>,
    pub byte_len: usize,
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {source_label}: {source}")]
    Read {
        source_label: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Read and decode a whole document from `source`.
pub fn load_document(
    source: &DocumentSource,
    charset_hint: Option<&str>,
) -> Result<LoadedDocument, DocumentError> {
    let label = source.label();
    let document = match source {
        DocumentSource::Path(path) => {
            let file = fs::File::open(path).map_err(|source| DocumentError::Read {
                source_label: label.clone(),
                source,
            })?;
            let mut document = read_and_decode(file, &label, charset_hint)?;
            document.document_url = file_url(path);
            document
        }
        DocumentSource::Stdin => read_and_decode(io::stdin().lock(), &label, charset_hint)?,
    };

    if document.document_url.is_none() {
        engine_debug!("{} has no document URL; relative hrefs stay unresolved", label);
    }
    Ok(document)
}

/// Read and decode a document from any reader. The result has no document URL.
pub fn load_document_from_reader<R: Read>(
    reader: R,
    charset_hint: Option<&str>,
) -> Result<LoadedDocument, DocumentError> {
    read_and_decode(reader, "<reader>", charset_hint)
}

fn read_and_decode<R: Read>(
    mut reader: R,
    label: &str,
    charset_hint: Option<&str>,
) -> Result<LoadedDocument, DocumentError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| DocumentError::Read {
            source_label: label.to_string(),
            source,
        })?;

    let decoded = decode_document(&bytes, charset_hint)?;
    engine_debug!(
        "Read {} bytes from {} as {}",
        bytes.len(),
        label,
        decoded.encoding_label
    );
    if decoded.had_errors {
        engine_warn!(
            "{} contains bytes that are not valid {}; they were replaced",
            label,
            decoded.encoding_label
        );
    }

    Ok(LoadedDocument {
        html: decoded.html,
        encoding_label: decoded.encoding_label,
        document_url: None,
        byte_len: bytes.len(),
    })
}

fn file_url(path: &Path) -> Option<Url> {
    let absolute = fs::canonicalize(path).ok()?;
    Url::from_file_path(absolute).ok()
}
