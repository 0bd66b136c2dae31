//! HTTP oracle backed by the anagrammer.com word unscrambler.

use std::time::Duration;

use async_trait::async_trait;
use scraper::{Html, Selector};

use super::{OracleError, WordOracle};

/// Pulls candidate words out of an unscrambler results page.
///
/// Candidates are the text of every link matched by `link` inside every
/// element matched by `container`, in document order. The selectors are the
/// whole structural contract with the site, so they live here and nowhere
/// else.
#[derive(Debug, Clone)]
pub struct MarkupExtractor {
    container: Selector,
    link: Selector,
}

impl MarkupExtractor {
    pub const CONTAINER: &'static str = r#"div[class="vissible-sm"]"#;
    pub const LINK: &'static str = ".r > a";

    pub fn new(container: &str, link: &str) -> Result<Self, OracleError> {
        Ok(Self {
            container: parse_selector(container)?,
            link: parse_selector(link)?,
        })
    }

    /// Extractor for the anagrammer.com results layout.
    pub fn anagrammer() -> Result<Self, OracleError> {
        Self::new(Self::CONTAINER, Self::LINK)
    }

    pub fn extract(&self, markup: &str) -> Vec<String> {
        let document = Html::parse_document(markup);

        document
            .select(&self.container)
            .flat_map(|container| container.select(&self.link))
            .map(|link| link.text().collect::<String>().trim().to_string())
            .filter(|word| !word.is_empty())
            .collect()
    }
}

fn parse_selector(selector: &str) -> Result<Selector, OracleError> {
    Selector::parse(selector).map_err(|e| OracleError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Word oracle using anagrammer.com HTTP endpoints.
///
/// The client timeout bounds every lookup; the round orchestrator never
/// waits on the network without one.
pub struct AnagrammerOracle {
    /// Results page prefix; the rack is appended as the last path segment
    base_url: String,

    http_client: reqwest::Client,

    extractor: MarkupExtractor,
}

impl AnagrammerOracle {
    pub const DEFAULT_BASE_URL: &'static str = "https://www.anagrammer.com/word-unscrambler";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, OracleError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(OracleError::Client)?;

        Ok(Self {
            base_url: base_url.into(),
            http_client,
            extractor: MarkupExtractor::anagrammer()?,
        })
    }

    /// Swap the extraction rule, e.g. after the site changes its layout.
    pub fn with_extractor(mut self, extractor: MarkupExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    fn lookup_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), key)
    }
}

#[async_trait]
impl WordOracle for AnagrammerOracle {
    async fn lookup(&self, key: &str) -> Result<Vec<String>, OracleError> {
        let url = self.lookup_url(key);

        tracing::debug!("Querying word oracle: {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|source| OracleError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(OracleError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let markup = response
            .text()
            .await
            .map_err(|source| OracleError::Transport {
                url: url.clone(),
                source,
            })?;

        let candidates = self.extractor.extract(&markup);
        tracing::debug!("Oracle returned {} candidates for {:?}", candidates.len(), key);

        Ok(candidates)
    }
}
