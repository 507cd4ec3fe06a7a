//! hickory-resolver backed TXT lookups

use hickory_resolver::TokioAsyncResolver;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::error::ResolveErrorKind;

use crate::domain::resolver::{LookupError, TxtResolver};

/// TXT resolver using the public resolvers from `ResolverConfig::default()`
#[derive(Clone)]
pub struct HickoryTxtResolver {
    inner: TokioAsyncResolver,
}

impl HickoryTxtResolver {
    pub fn new() -> Self {
        let mut opts = ResolverOpts::default();
        // A retry right after publishing the record must not hit a cached miss
        opts.cache_size = 0;
        opts.use_hosts_file = false;

        Self {
            inner: TokioAsyncResolver::tokio(ResolverConfig::default(), opts),
        }
    }
}

impl Default for HickoryTxtResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TxtResolver for HickoryTxtResolver {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        match self.inner.txt_lookup(name).await {
            Ok(lookup) => Ok(lookup
                .iter()
                .map(|txt| {
                    txt.txt_data()
                        .iter()
                        .map(|chunk| String::from_utf8_lossy(chunk))
                        .collect::<String>()
                })
                .collect()),
            Err(e) => match e.kind() {
                ResolveErrorKind::NoRecordsFound { .. } => {
                    tracing::debug!(name = %name, "No TXT records");
                    Ok(Vec::new())
                }
                _ => Err(LookupError {
                    name: name.to_string(),
                    reason: e.to_string(),
                }),
            },
        }
    }
}
