//! Uploaded Image Naming

use std::fmt;
use std::path::Path;

use uuid::Uuid;

use crate::error::{UploadError, UploadResult};

/// Extensions accepted for upload (lower case, without the dot)
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// An allowed image extension, taken from the client's file name.
///
/// Only the name is checked; the content is not sniffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageExtension(&'static str);

impl ImageExtension {
    pub fn from_filename(filename: &str) -> UploadResult<Self> {
        let ext = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .ok_or(UploadError::InvalidType)?;

        ALLOWED_EXTENSIONS
            .iter()
            .find(|allowed| **allowed == ext)
            .map(|allowed| Self(allowed))
            .ok_or(UploadError::InvalidType)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// `<uuid>.<ext>`, the only name a stored file is known by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredName(String);

impl StoredName {
    pub fn generate(ext: ImageExtension) -> Self {
        Self(format!("{}.{}", Uuid::new_v4(), ext.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoredName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored upload and where it is served from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub filename: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extensions() {
        for name in ["a.jpg", "a.JPEG", "photo.final.png", "x.gif", "y.WebP"] {
            assert!(ImageExtension::from_filename(name).is_ok(), "{name}");
        }
        assert_eq!(ImageExtension::from_filename("A.JPG").unwrap().as_str(), "jpg");
    }

    #[test]
    fn test_rejected_extensions() {
        for name in ["virus.exe", "noext", "", "image.png.exe", "svg.svg", ".png"] {
            assert!(
                matches!(
                    ImageExtension::from_filename(name),
                    Err(UploadError::InvalidType)
                ),
                "{name}"
            );
        }
    }

    #[test]
    fn test_stored_name_keeps_extension() {
        let ext = ImageExtension::from_filename("cat.PNG").unwrap();
        let a = StoredName::generate(ext);
        let b = StoredName::generate(ext);
        assert!(a.as_str().ends_with(".png"));
        assert_eq!(a.as_str().len(), 36 + 4);
        assert_ne!(a, b);
    }
}
