use crate::error::{
    BaseUrlCannotBeABaseSnafu, ParseBaseUrlSnafu, ParseNumberSnafu, RosterError, RosterResult,
};
use dotenvy::var;
use snafu::{ResultExt, ensure};
use std::{env::VarError, sync::Arc, time::Duration};
use url::Url;

pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api/student/";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    api_config: Arc<ApiConfig>,
}

impl RuntimeConfiguration {
    pub fn new() -> RosterResult<Self> {
        Ok(Self {
            api_config: Arc::new(ApiConfig::new()?),
        })
    }

    pub fn api_config(&self) -> Arc<ApiConfig> {
        self.api_config.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl ApiConfig {
    /// Reads `ROSTER_API_BASE`, `ROSTER_API_TIMEOUT_SECS` and `ROSTER_API_CONNECT_TIMEOUT_SECS`,
    /// falling back to the local development backend.
    pub fn new() -> RosterResult<Self> {
        let get_secs = |name: &'static str, default: u64| -> RosterResult<Duration> {
            let secs = match optional_env_var(name)? {
                Some(raw) => raw.trim().parse().context(ParseNumberSnafu { name })?,
                None => default,
            };
            Ok(Duration::from_secs(secs))
        };

        let base_url = optional_env_var("ROSTER_API_BASE")?;

        Ok(Self {
            base_url: parse_base_url(base_url.as_deref().unwrap_or(DEFAULT_API_BASE))?,
            request_timeout: get_secs("ROSTER_API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            connect_timeout: get_secs(
                "ROSTER_API_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
        })
    }

    pub fn with_base_url(base_url: &str) -> RosterResult<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        })
    }

    /// The collection endpoint, always ending in exactly one `/`.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }
}

fn optional_env_var(name: &'static str) -> RosterResult<Option<String>> {
    match var(name) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(None),
        Err(source) => Err(RosterError::BadEnvVar { source, name }),
    }
}

fn normalise_base_url(raw: &str) -> String {
    format!("{}/", raw.trim().trim_end_matches('/'))
}

fn parse_base_url(raw: &str) -> RosterResult<Url> {
    let url = Url::parse(&normalise_base_url(raw)).context(ParseBaseUrlSnafu { raw })?;
    ensure!(!url.cannot_be_a_base(), BaseUrlCannotBeABaseSnafu { raw });
    Ok(url)
}
