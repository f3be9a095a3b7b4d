//! Profile attachments (CV, certificates, ID scans)

use super::lenient;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Upload limit applied when nothing else is configured (5 MiB)
pub const DEFAULT_MAX_ATTACHMENT_BYTES: u64 = 5 * 1024 * 1024;

/// Attachment as listed by `GET /profile/attachments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: u64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub document_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub url: Option<String>,
}

/// A document ready to be sent as multipart form data
#[derive(Clone, PartialEq, Eq)]
pub struct AttachmentUpload {
    pub document_type_id: u64,
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl AttachmentUpload {
    /// Build an upload, deriving the MIME type from the file extension.
    ///
    /// Only images and PDF documents are accepted.
    pub fn new(
        document_type_id: u64,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, DomainError> {
        let file_name = file_name.into();
        let mime_type = mime_for(&file_name)
            .ok_or_else(|| DomainError::UnsupportedFileType(file_name.clone()))?;
        Ok(Self {
            document_type_id,
            file_name,
            mime_type,
            bytes,
        })
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn validate_size(&self, limit: u64) -> Result<(), DomainError> {
        if self.size() > limit {
            return Err(DomainError::AttachmentTooLarge {
                size: self.size(),
                limit,
            });
        }
        Ok(())
    }
}

impl fmt::Debug for AttachmentUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttachmentUpload")
            .field("document_type_id", &self.document_type_id)
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

fn mime_for(file_name: &str) -> Option<&'static str> {
    let extension = Path::new(file_name)
        .extension()?
        .to_str()?
        .to_ascii_lowercase();
    match extension.as_str() {
        "pdf" => Some("application/pdf"),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "heic" => Some("image/heic"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_from_extension() {
        let upload = AttachmentUpload::new(2, "cv.PDF", vec![1, 2, 3]).unwrap();
        assert_eq!(upload.mime_type, "application/pdf");
        let upload = AttachmentUpload::new(2, "ktp.jpeg", vec![]).unwrap();
        assert_eq!(upload.mime_type, "image/jpeg");
    }

    #[test]
    fn test_rejects_other_documents() {
        let err = AttachmentUpload::new(2, "cv.docx", vec![]).unwrap_err();
        assert_eq!(err, DomainError::UnsupportedFileType("cv.docx".into()));
        assert!(AttachmentUpload::new(2, "noextension", vec![]).is_err());
    }

    #[test]
    fn test_size_limit() {
        let upload = AttachmentUpload::new(1, "scan.png", vec![0; 10]).unwrap();
        assert!(upload.validate_size(10).is_ok());
        assert_eq!(
            upload.validate_size(9),
            Err(DomainError::AttachmentTooLarge { size: 10, limit: 9 })
        );
    }
}
