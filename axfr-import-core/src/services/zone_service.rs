//! Hosted zone resolution

use std::sync::Arc;

use axfr_import_provider::{same_domain, HostedZone, HostedZoneProvider, ProviderError};

use crate::error::{CoreError, CoreResult};

/// How the target zone was obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneOutcome {
    Existing(HostedZone),
    Created(HostedZone),
}

impl ZoneOutcome {
    pub fn zone(&self) -> &HostedZone {
        match self {
            Self::Existing(zone) | Self::Created(zone) => zone,
        }
    }

    pub fn into_zone(self) -> HostedZone {
        match self {
            Self::Existing(zone) | Self::Created(zone) => zone,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Hosted zone lookup / creation service
pub struct ZoneService {
    provider: Arc<dyn HostedZoneProvider>,
}

impl ZoneService {
    /// 创建 Zone 服务实例
    #[must_use]
    pub fn new(provider: Arc<dyn HostedZoneProvider>) -> Self {
        Self { provider }
    }

    /// Reuses the zone named `domain` if it exists, otherwise creates it.
    ///
    /// `Ok(None)` means the zone is listed but could not be fetched by name.
    pub async fn resolve_zone(&self, domain: &str) -> CoreResult<Option<ZoneOutcome>> {
        let zones = self
            .provider
            .list_hosted_zones()
            .await
            .map_err(|source| resolution_error(domain, source))?;

        if zones.iter().any(|zone| same_domain(&zone.name, domain)) {
            log::warn!("Hosted zone {domain} already exists, using existing");

            let zone = self
                .provider
                .get_hosted_zone_by_name(domain)
                .await
                .map_err(|source| resolution_error(domain, source))?;

            if zone.is_none() {
                log::warn!("Hosted zone {domain} is listed but could not be fetched by name");
            }
            return Ok(zone.map(ZoneOutcome::Existing));
        }

        let zone = self
            .provider
            .create_hosted_zone(domain)
            .await
            .map_err(|source| resolution_error(domain, source))?;

        log::info!("Created hosted zone {domain} ({})", zone.id);
        Ok(Some(ZoneOutcome::Created(zone)))
    }

    /// Like [`resolve_zone`](Self::resolve_zone), with a missing zone as an error.
    pub async fn require_zone(&self, domain: &str) -> CoreResult<ZoneOutcome> {
        self.resolve_zone(domain)
            .await?
            .ok_or_else(|| CoreError::ZoneNotFound(domain.to_string()))
    }
}

fn resolution_error(domain: &str, source: ProviderError) -> CoreError {
    CoreError::ZoneResolution {
        domain: domain.to_string(),
        source,
    }
}
