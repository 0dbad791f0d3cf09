//! Dataset file types and the DICOM structural probe

use std::path::PathBuf;

use serde::Serialize;

/// Extensions accepted by the dataset-upload endpoint (case-insensitive).
///
/// This allow-list is specific to dataset uploads; the general upload
/// endpoint deliberately has none.
pub const DATASET_EXTENSIONS: [&str; 3] = ["npy", "png", "dcm"];

/// DICOM part-10 files start with a 128-byte preamble followed by "DICM".
pub const DICOM_PREAMBLE_LEN: usize = 128;
pub const DICOM_MAGIC: &[u8; 4] = b"DICM";

/// A file accepted by one of the upload endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedAsset {
    /// Sanitized filename, no path components.
    pub file_name: String,
    /// Destination path the caller can hand to downstream tooling.
    pub path: PathBuf,
}

/// Lowercased extension of a filename, if it has one.
pub fn file_extension(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Whether an extension is on the dataset allow-list.
pub fn is_allowed_dataset_extension(ext: &str) -> bool {
    DATASET_EXTENSIONS.contains(&ext)
}

/// Structural probe for DICOM content: the header must be at least
/// preamble + magic long, with "DICM" at offset 128. This is a shallow
/// check of the part-10 envelope, not a parse of the data set.
pub fn dicom_header_is_valid(header: &[u8]) -> bool {
    header.len() >= DICOM_PREAMBLE_LEN + DICOM_MAGIC.len()
        && &header[DICOM_PREAMBLE_LEN..DICOM_PREAMBLE_LEN + DICOM_MAGIC.len()] == DICOM_MAGIC
}
