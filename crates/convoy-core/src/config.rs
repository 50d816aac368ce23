use std::path::PathBuf;

/// Environment variable consulted when `--consul-location` is not given.
pub const CONSUL_LOCATION_ENV: &str = "CONVOY_CONSUL_LOCATION";

/// Resolved per-run configuration.
///
/// `envoy_version` is passed through verbatim; an empty string means "use the
/// default baked into the image template".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvoyConfig {
    pub consul_location: PathBuf,
    pub envoy_version: String,
}

impl ConvoyConfig {
    /// Resolve configuration from CLI flag values, falling back to the
    /// `CONVOY_CONSUL_LOCATION` environment variable for the source location.
    pub fn resolve(
        consul_location: Option<String>,
        envoy_version: Option<String>,
    ) -> Result<Self, ConfigError> {
        let env_location = std::env::var(CONSUL_LOCATION_ENV).ok();
        Self::resolve_from(consul_location, env_location, envoy_version)
    }

    /// Pure resolution core: the flag value wins over the environment value,
    /// and empty strings count as absent.
    pub fn resolve_from(
        flag_location: Option<String>,
        env_location: Option<String>,
        envoy_version: Option<String>,
    ) -> Result<Self, ConfigError> {
        let consul_location = flag_location
            .filter(|l| !l.is_empty())
            .or_else(|| env_location.filter(|l| !l.is_empty()))
            .ok_or(ConfigError::ConsulLocationMissing)?;

        Ok(Self {
            consul_location: PathBuf::from(consul_location),
            envoy_version: envoy_version.unwrap_or_default(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "consul source location must be supplied: pass --consul-location or set {}",
        CONSUL_LOCATION_ENV
    )]
    ConsulLocationMissing,
}
