use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use url::Url;

use quiz_core::model::CountryDraft;

use crate::countries::CountrySource;
use crate::error::SourceError;

/// Public catalog endpoint, limited to the two fields the quiz needs.
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all?fields=name,flags";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Clone, Debug)]
pub struct CountriesApiConfig {
    pub endpoint: Url,
    pub timeout: Duration,
}

impl CountriesApiConfig {
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Parse a user-supplied endpoint.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` when `raw` is not an absolute URL.
    pub fn parse_endpoint(raw: &str) -> Result<Url, url::ParseError> {
        Url::parse(raw.trim())
    }
}

/// Fetches the catalog with a single unauthenticated GET.
#[derive(Clone)]
pub struct RestCountriesSource {
    client: Client,
    config: CountriesApiConfig,
}

impl RestCountriesSource {
    /// # Errors
    ///
    /// Returns `SourceError::Http` if the HTTP client cannot be built.
    pub fn new(config: CountriesApiConfig) -> Result<Self, SourceError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl CountrySource for RestCountriesSource {
    async fn fetch_countries(&self) -> Result<Vec<CountryDraft>, SourceError> {
        let response = self
            .client
            .get(self.config.endpoint.clone())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SourceError::HttpStatus(response.status()));
        }

        let body = response.bytes().await?;
        parse_countries(&body)
    }
}

/// Decode a catalog body into drafts, one per array entry.
///
/// # Errors
///
/// Returns `SourceError::Decode` when the body is not an array of country objects.
pub fn parse_countries(body: &[u8]) -> Result<Vec<CountryDraft>, SourceError> {
    let raw: Vec<RawCountry> = serde_json::from_slice(body)?;
    Ok(raw.into_iter().map(RawCountry::into_draft).collect())
}

#[derive(Debug, Deserialize)]
struct RawCountry {
    name: Option<RawName>,
    flags: Option<RawFlags>,
}

#[derive(Debug, Deserialize)]
struct RawName {
    common: Option<String>,
    official: Option<String>,
    #[serde(rename = "nativeName")]
    native_name: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
struct RawFlags {
    svg: Option<String>,
    png: Option<String>,
}

impl RawCountry {
    fn into_draft(self) -> CountryDraft {
        let (common_name, official_name, native_names) = match self.name {
            Some(name) => {
                let natives = name
                    .native_name
                    .map(|map| {
                        map.values()
                            .filter_map(|entry| entry.get("common").and_then(Value::as_str))
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default();
                (name.common, name.official, natives)
            }
            None => (None, None, Vec::new()),
        };
        let (flag_svg, flag_png) = self
            .flags
            .map_or((None, None), |flags| (flags.svg, flags.png));

        CountryDraft {
            common_name,
            official_name,
            native_names,
            flag_svg,
            flag_png,
        }
    }
}
