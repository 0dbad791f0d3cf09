//! Upload handling: dataset uploads, general uploads and path references
//!
//! Two deliberately different policies live here. Dataset uploads enforce an
//! extension allow-list and a DICOM content probe; the general upload path
//! accepts any extension and, in reference mode, only checks that the path
//! exists. Do not merge them: each has its own caller contract.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::dataset::{
    dicom_header_is_valid, file_extension, is_allowed_dataset_extension, DICOM_MAGIC,
    DICOM_PREAMBLE_LEN,
};
use crate::domain::{DomainError, UploadedAsset};

static UNSAFE_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_.-]+").unwrap());

/// Strip path components and unsafe characters from a client-supplied
/// filename so the destination path cannot escape the upload directory.
pub fn sanitize_filename(name: &str) -> String {
    // Only the final path component survives, whichever separator the
    // client's platform used.
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(name);

    let cleaned = UNSAFE_CHARS.replace_all(base, "_");
    let trimmed = cleaned.trim_matches(['.', '_']);

    if trimmed.is_empty() {
        "file".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Writes uploads into a configured directory and validates their content.
///
/// Uploads need no shared lock: concurrent uploads act on per-request paths,
/// and two uploads to the same filename race last-writer-wins by design.
pub struct UploadService {
    upload_dir: PathBuf,
}

impl UploadService {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
        }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Dataset upload: allow-listed extension, sanitized name, and for DICOM
    /// files a structural probe of the written content. A failed probe
    /// removes the just-written file before returning, so no invalid
    /// artifact is left behind.
    pub fn save_dataset_file(&self, filename: &str, data: &[u8]) -> Result<UploadedAsset, DomainError> {
        if filename.is_empty() {
            return Err(DomainError::EmptyFilename);
        }

        let extension = file_extension(filename).unwrap_or_default();
        if !is_allowed_dataset_extension(&extension) {
            return Err(DomainError::invalid_extension(extension));
        }

        let asset = self.write_upload(&sanitize_filename(filename), data)?;

        if extension == "dcm" && !self.probe_dicom(&asset.path)? {
            if let Err(error) = fs::remove_file(&asset.path) {
                warn!(path = %asset.path.display(), error = %error, "Failed to remove invalid DICOM upload");
            }
            return Err(DomainError::invalid_content(format!(
                "'{}' does not have a valid DICOM header",
                asset.file_name
            )));
        }

        debug!(path = %asset.path.display(), "Dataset file stored");
        Ok(asset)
    }

    /// General upload: no extension policy. A missing or empty filename gets
    /// a generated one.
    pub fn store_file(&self, filename: Option<&str>, data: &[u8]) -> Result<UploadedAsset, DomainError> {
        let name = match filename {
            Some(name) if !name.is_empty() => sanitize_filename(name),
            _ => format!("file-{}", Uuid::new_v4()),
        };

        let asset = self.write_upload(&name, data)?;
        debug!(path = %asset.path.display(), "File stored");
        Ok(asset)
    }

    /// Reference mode: resolve a client-supplied path and accept it iff it
    /// exists on disk. Absolute paths are taken as-is, relative ones resolve
    /// against the upload directory. No content validation happens here;
    /// that asymmetry with `save_dataset_file` is intentional.
    pub fn resolve_reference(&self, path: &str) -> Result<UploadedAsset, DomainError> {
        if path.is_empty() {
            return Err(DomainError::NoInput);
        }

        let candidate = Path::new(path);
        let resolved = if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.upload_dir.join(candidate)
        };

        if !resolved.is_file() {
            return Err(DomainError::invalid_reference(path));
        }

        let file_name = resolved
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(UploadedAsset {
            file_name,
            path: resolved,
        })
    }

    fn write_upload(&self, file_name: &str, data: &[u8]) -> Result<UploadedAsset, DomainError> {
        fs::create_dir_all(&self.upload_dir)
            .map_err(|e| DomainError::storage(format!("Cannot create upload directory: {e}")))?;

        let path = self.upload_dir.join(file_name);
        fs::write(&path, data)
            .map_err(|e| DomainError::storage(format!("Cannot write upload: {e}")))?;

        Ok(UploadedAsset {
            file_name: file_name.to_string(),
            path,
        })
    }

    /// Read just enough of the written file to check the part-10 envelope.
    fn probe_dicom(&self, path: &Path) -> Result<bool, DomainError> {
        let file = fs::File::open(path)
            .map_err(|e| DomainError::storage(format!("Cannot read upload back: {e}")))?;

        let mut header = Vec::with_capacity(DICOM_PREAMBLE_LEN + DICOM_MAGIC.len());
        file.take((DICOM_PREAMBLE_LEN + DICOM_MAGIC.len()) as u64)
            .read_to_end(&mut header)
            .map_err(|e: io::Error| DomainError::storage(format!("Cannot read upload back: {e}")))?;

        Ok(dicom_header_is_valid(&header))
    }
}
