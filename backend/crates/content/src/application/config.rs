//! Application Configuration

/// Content application configuration
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// How many slug candidates (`base`, `base-1`, …) to try before giving up
    pub max_slug_attempts: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            max_slug_attempts: 100,
        }
    }
}
