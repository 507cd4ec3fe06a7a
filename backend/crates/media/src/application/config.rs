//! Application Configuration

use std::path::PathBuf;

/// Largest accepted file (10 MiB)
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Room for multipart boundaries and part headers on top of the file
const MULTIPART_OVERHEAD: u64 = 64 * 1024;

/// Upload configuration
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Directory files are written to and served from
    pub dir: PathBuf,
    pub max_file_size: u64,
    /// URL prefix the directory is mounted at
    pub public_prefix: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./uploads"),
            max_file_size: MAX_FILE_SIZE,
            public_prefix: "/uploads".to_string(),
        }
    }
}

impl UploadConfig {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    /// Largest request body the upload route accepts
    pub fn body_limit(&self) -> u64 {
        self.max_file_size.saturating_add(MULTIPART_OVERHEAD)
    }

    pub fn public_url(&self, filename: &str) -> String {
        format!("{}/{}", self.public_prefix.trim_end_matches('/'), filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UploadConfig::default();
        assert_eq!(config.max_file_size, 10 * 1024 * 1024);
        assert!(config.body_limit() > config.max_file_size);
        assert_eq!(config.public_url("a.png"), "/uploads/a.png");
    }
}
