pub mod errors;
pub mod fetchers;
pub mod identifiers;
pub mod normalize;
pub mod parsers;
pub mod registry;
pub mod types;

pub use errors::{PipelineError, ResolveError};
pub use registry::{ProviderDescriptor, Registry};
pub use types::{ItemMeta, ItemType, MetaValue, NormalizedItem};

use crate::config::Config;
use anyhow::{Context, Result};
use std::fmt;

/// Where an invocation was when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetching,
    Parsing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Fetching => write!(f, "fetching"),
            Stage::Parsing => write!(f, "parsing"),
        }
    }
}

/// Turns URLs into [`NormalizedItem`]s.
///
/// Holds no mutable state; share one instance (behind an `Arc` if needed)
/// across any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct Resolver {
    registry: Registry,
}

impl Resolver {
    /// Resolver with the standard provider table. Credentials are taken from
    /// `config` once, here.
    pub fn new(config: &Config) -> Result<Self> {
        let client = crate::scrape::build_client(config)?;
        let registry =
            Registry::standard(client, config).context("failed to build provider registry")?;

        Ok(Self { registry })
    }

    pub fn with_registry(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Name of the provider that would handle `url`. No network access.
    pub fn provider_for(&self, url: &str) -> &'static str {
        self.registry.select(url).name
    }

    /// Fetch, parse and normalize `url`.
    ///
    /// Every failure is reported as [`ResolveError::ProcessingFailed`] with the
    /// input URL; the underlying cause is logged.
    pub async fn resolve_item(&self, url: &str) -> Result<NormalizedItem, ResolveError> {
        let provider = self.registry.select(url);
        log::info!("{url}: using provider {}", provider.name);

        match Self::run(provider, url).await {
            Ok(item) => Ok(normalize::trim_item(item)),
            Err((stage, err)) => {
                log::warn!(
                    "{url}: provider={} stage={stage} err={err} cause={}",
                    provider.name,
                    crate::scrape::get_error(&err)
                );
                Err(ResolveError::ProcessingFailed(url.to_string()))
            }
        }
    }

    async fn run(
        provider: &ProviderDescriptor,
        url: &str,
    ) -> Result<NormalizedItem, (Stage, PipelineError)> {
        let body = provider
            .fetch
            .fetch(url)
            .await
            .map_err(|e| (Stage::Fetching, e))?;
        log::debug!("{url}: fetched {} bytes with {}", body.len(), provider.fetch.name());

        provider
            .parse
            .parse(url, &body)
            .map_err(|e| (Stage::Parsing, e))
    }
}
