use thiserror::Error;

/// Core domain errors
///
/// Client-input failures carry enough structure for the API layer to keep the
/// outward classifications distinct; infrastructure failures collapse into
/// `Storage`/`Internal` and are never fatal to the process.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid or missing JSON payload")]
    InvalidPayload,

    #[error("Missing required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },

    #[error("Field 'hyperparameters' must be an object")]
    InvalidHyperparameters,

    #[error("No file part in the request")]
    NoFile,

    #[error("No file selected")]
    EmptyFilename,

    #[error("Invalid file type: .{extension}")]
    InvalidExtension { extension: String },

    #[error("Invalid DICOM file: {message}")]
    InvalidContent { message: String },

    #[error("No file or file path provided")]
    NoInput,

    #[error("Invalid or missing file reference: {path}")]
    InvalidReference { path: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn missing_fields(fields: Vec<String>) -> Self {
        Self::MissingFields { fields }
    }

    pub fn invalid_extension(extension: impl Into<String>) -> Self {
        Self::InvalidExtension {
            extension: extension.into(),
        }
    }

    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }

    pub fn invalid_reference(path: impl Into<String>) -> Self {
        Self::InvalidReference { path: path.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_names_fields() {
        let error = DomainError::missing_fields(vec![
            "model_type".to_string(),
            "hyperparameters".to_string(),
        ]);
        assert_eq!(
            error.to_string(),
            "Missing required fields: model_type, hyperparameters"
        );
    }

    #[test]
    fn test_invalid_extension_message() {
        let error = DomainError::invalid_extension("txt");
        assert_eq!(error.to_string(), "Invalid file type: .txt");
    }

    #[test]
    fn test_invalid_reference_message() {
        let error = DomainError::invalid_reference("/no/such/file");
        assert_eq!(
            error.to_string(),
            "Invalid or missing file reference: /no/such/file"
        );
    }
}
