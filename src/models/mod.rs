use bytes::Bytes;
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::utils::validation::ValidationError;

/// A file part received in a multipart request. Lives for one request only.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub content: Bytes,
}

impl UploadedFile {
    /// Rejects parts sent with an empty `filename` parameter
    pub fn ensure_selected(&self) -> Result<&Self, ValidationError> {
        if self.file_name.is_empty() {
            Err(ValidationError::EmptyFilename)
        } else {
            Ok(self)
        }
    }

    /// The name echoed back to the client: the supplied display name when it
    /// is non-empty, otherwise the uploaded filename.
    pub fn display_name(&self, supplied: Option<&str>) -> String {
        match supplied {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.file_name.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Lowercase hex digests of one file's content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DigestSet {
    pub md5: String,
    pub sha1: String,
    pub sha256: String,
    pub sha384: String,
}

/// Per-algorithm equality of two digest sets. SHA-384 is not compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct ComparisonResult {
    pub md5: bool,
    pub sha1: bool,
    pub sha256: bool,
}

impl ComparisonResult {
    pub fn all_identical(&self) -> bool {
        self.md5 && self.sha1 && self.sha256
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn total_pixels(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Target size requested from the resize endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Validate)]
pub struct ResizeDimensions {
    #[validate(range(min = 1, max = 16384))]
    pub width: u32,
    #[validate(range(min = 1, max = 16384))]
    pub height: u32,
}

impl ResizeDimensions {
    pub fn attachment_name(&self) -> String {
        format!("imagem_redimensionada_{}x{}.png", self.width, self.height)
    }
}
