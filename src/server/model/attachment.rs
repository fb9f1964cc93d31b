//! File attachment naming and content types.
//!
//! Uploaded files are written flat into the upload directory as
//! `{prefix}_{owner_id}_{uuid}.{ext}` and served back from `/api/files/{name}`.

/// Route prefix under which stored files are served.
pub const FILES_ROUTE: &str = "/api/files";

/// Longest extension kept from an uploaded file name.
const MAX_EXTENSION_LEN: usize = 16;

/// Record type an uploaded file is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentOwner {
    Transaction,
    BankDocument,
    MiscItem,
    ImportantUpload,
    ServiceEntry,
    CustomerRemark,
    Vehicle,
}

impl AttachmentOwner {
    /// Prefix of stored file names for this owner type.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Transaction => "transaction",
            Self::BankDocument => "bank",
            Self::MiscItem => "misc",
            Self::ImportantUpload => "important",
            Self::ServiceEntry => "service",
            Self::CustomerRemark => "remark",
            Self::Vehicle => "vehicle",
        }
    }

    /// Human readable name used in not found messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Transaction => "Transaction",
            Self::BankDocument => "Bank document",
            Self::MiscItem => "Misc item",
            Self::ImportantUpload => "Important upload",
            Self::ServiceEntry => "Service entry",
            Self::CustomerRemark => "Customer remark",
            Self::Vehicle => "Vehicle",
        }
    }
}

/// A file received from a multipart upload.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client supplied file name, used only for its extension.
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

/// A file read back from the upload directory.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredFile {
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Lowercased alphanumeric extension of `file_name`, if it has one.
pub fn file_extension(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }

    let ext: String = ext
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(MAX_EXTENSION_LEN)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    (!ext.is_empty()).then_some(ext)
}

/// Builds the stored name for a new upload.
///
/// # Arguments
/// - `owner` - Record type the file belongs to
/// - `owner_id` - ID of the owning record
/// - `original` - Client supplied file name
pub fn stored_file_name(owner: AttachmentOwner, owner_id: &str, original: Option<&str>) -> String {
    let random = uuid::Uuid::new_v4();

    match original.and_then(file_extension) {
        Some(ext) => format!("{}_{}_{}.{}", owner.prefix(), owner_id, random, ext),
        None => format!("{}_{}_{}", owner.prefix(), owner_id, random),
    }
}

/// Retrieval URL stored on the owning record.
pub fn file_url(name: &str) -> String {
    format!("{}/{}", FILES_ROUTE, name)
}

/// Whether `name` refers to a file directly inside the upload directory.
pub fn is_safe_file_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains("..")
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains('\0')
}

/// Content type served for a stored file, derived from its extension.
pub fn content_type_for(name: &str) -> &'static str {
    match file_extension(name).as_deref() {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased_and_sanitised() {
        assert_eq!(file_extension("Beleg.PDF").as_deref(), Some("pdf"));
        assert_eq!(file_extension("scan.tar.gz").as_deref(), Some("gz"));
        assert_eq!(file_extension("evil.p/../df").as_deref(), Some("df"));
        assert_eq!(file_extension("noext"), None);
        assert_eq!(file_extension(".bashrc"), None);
        assert_eq!(file_extension("trailing."), None);
    }

    #[test]
    fn stored_name_has_prefix_owner_and_extension() {
        let name = stored_file_name(AttachmentOwner::BankDocument, "abc", Some("Auszug.Pdf"));
        assert!(name.starts_with("bank_abc_"));
        assert!(name.ends_with(".pdf"));
        assert!(is_safe_file_name(&name));

        let bare = stored_file_name(AttachmentOwner::Vehicle, "v1", None);
        assert!(bare.starts_with("vehicle_v1_"));
        assert!(!bare.contains('.'));
    }

    #[test]
    fn rejects_names_escaping_upload_dir() {
        for bad in ["", "../secret", "a/b", "a\\b", "..", "x..y"] {
            assert!(!is_safe_file_name(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn maps_content_types() {
        assert_eq!(content_type_for("a.pdf"), "application/pdf");
        assert_eq!(content_type_for("a.JPG"), "image/jpeg");
        assert_eq!(content_type_for("a.txt"), "text/plain");
        assert_eq!(content_type_for("a.docx"), "application/octet-stream");
        assert_eq!(content_type_for("a"), "application/octet-stream");
    }
}
