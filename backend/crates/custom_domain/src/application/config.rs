//! Application Configuration

/// Custom domain application configuration
#[derive(Debug, Clone)]
pub struct DomainConfig {
    /// Label prepended to the domain for the TXT challenge
    pub verification_label: String,
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            verification_label: "_dyeink-verification".to_string(),
        }
    }
}
