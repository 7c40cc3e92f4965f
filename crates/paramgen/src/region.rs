//! AWS region resolution.
//!
//! The region comes from `AWS_DEFAULT_REGION` when it is set. Otherwise a
//! [`RegionResolver`] discovers it (profile files, instance metadata, ...)
//! and the result is exported back into `AWS_DEFAULT_REGION` so the rest of
//! the process sees the same value.

use std::env;

use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;

use crate::error::ConfigError;

pub const REGION_ENV: &str = "AWS_DEFAULT_REGION";

/// Discovers a region when none is configured explicitly.
#[async_trait]
pub trait RegionResolver: Send + Sync {
    async fn discover(&self) -> Option<String>;
}

/// Uses the AWS SDK default region provider chain.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultChainResolver;

#[async_trait]
impl RegionResolver for DefaultChainResolver {
    async fn discover(&self) -> Option<String> {
        RegionProviderChain::default_provider()
            .region()
            .await
            .map(|region| region.to_string())
    }
}

/// A resolved region and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRegion {
    pub name: String,
    /// True when the region was not configured and had to be discovered.
    pub discovered: bool,
}

impl ResolvedRegion {
    /// Value to write into `AWS_DEFAULT_REGION`, if any.
    pub fn exported_value(&self) -> Option<&str> {
        self.discovered.then_some(self.name.as_str())
    }

    /// Writes a discovered region into `AWS_DEFAULT_REGION`.
    ///
    /// Must run while the process is single-threaded: `main` calls it
    /// before the serving runtime starts its worker threads.
    pub fn export(&self) {
        if let Some(name) = self.exported_value() {
            env::set_var(REGION_ENV, name);
            tracing::info!(region = %name, "AWS_DEFAULT_REGION environment variable set");
        }
    }
}

/// Resolve the region from `configured` (the value of `AWS_DEFAULT_REGION`)
/// or, when it is missing or empty, from `resolver`.
pub async fn resolve_region(
    configured: Option<String>,
    resolver: &dyn RegionResolver,
) -> Result<ResolvedRegion, ConfigError> {
    if let Some(name) = configured.filter(|name| !name.is_empty()) {
        return Ok(ResolvedRegion {
            name,
            discovered: false,
        });
    }

    let name = resolver
        .discover()
        .await
        .filter(|name| !name.is_empty())
        .ok_or(ConfigError::RegionUnavailable)?;

    Ok(ResolvedRegion {
        name,
        discovered: true,
    })
}

/// Resolve the region from the process environment and the SDK chain.
pub async fn resolve_region_from_env() -> Result<ResolvedRegion, ConfigError> {
    resolve_region(env::var(REGION_ENV).ok(), &DefaultChainResolver).await
}
