use news_core::QuerySettings;
use url::Url;

use crate::{FailureKind, FetchError};

pub const GUARDIAN_SEARCH_URL: &str = "https://content.guardianapis.com/search";

/// Guardian's public developer key.
pub const DEFAULT_API_KEY: &str = "test";

const SECTION: &str = "technology";
const SHOW_TAGS: &str = "contributor";

/// Ordered query parameters on top of a base endpoint.
///
/// Setting a key twice replaces the earlier value in place, so every key
/// appears exactly once and keeps its first position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    base: String,
    params: Vec<(String, String)>,
}

impl SearchQuery {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            params: Vec::new(),
        }
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.params.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => self.params.push((key, value)),
        }
        self
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Produces the final URL. Fails only when the base is not an absolute URL.
    pub fn build(&self) -> Result<String, FetchError> {
        let mut url = Url::parse(&self.base)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(FetchError::new(
                FailureKind::InvalidUrl,
                format!("{} cannot carry a query", self.base),
            ));
        }

        let encoded = self
            .params
            .iter()
            .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)));
        let existing = url.query().filter(|query| !query.is_empty()).map(str::to_string);
        let query = existing
            .into_iter()
            .chain(encoded)
            .collect::<Vec<_>>()
            .join("&");

        url.set_query((!query.is_empty()).then_some(query.as_str()));
        Ok(url.into())
    }
}

/// Search URL for the technology section with the user's ordering and page size.
pub fn guardian_search_url(
    base: &str,
    settings: &QuerySettings,
    api_key: &str,
) -> Result<String, FetchError> {
    SearchQuery::new(base)
        .param("order-by", settings.order_by.as_str())
        .param("section", SECTION)
        .param("show-tags", SHOW_TAGS)
        .param("page-size", settings.page_size.as_str())
        .param("q", "")
        .param("api-key", api_key)
        .build()
}
