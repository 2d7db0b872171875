//! Search link construction. Builds strings only; nothing here is fetched.

use std::sync::LazyLock;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;
use tracing::instrument;

use crate::domain::SearchUrls;

/// Characters left literal in a query component: unreserved marks plus `/`.
/// Everything else (space, `&`, `=`, `?`, `#`, `+`, non-ASCII bytes...) is `%XX`.
const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Key of the synthesized natural-language search entry.
pub const GOOGLE_ENGINE_ID: &str = "google";
pub const GOOGLE_SEARCH_BASE: &str = "https://www.google.com/search?q=";

/// A search engine: appending an encoded query to `base_url` yields a search link.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SearchEngine {
    pub id: String,
    pub base_url: String,
}

impl SearchEngine {
    pub fn new(id: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self { id: id.into(), base_url: base_url.into() }
    }

    pub fn url_for(&self, encoded_query: &str) -> String {
        format!("{}{}", self.base_url, encoded_query)
    }
}

/// Built-in engine table, in output order.
pub fn default_engines() -> Vec<SearchEngine> {
    vec![
        SearchEngine::new("wolfram", "https://www.wolframalpha.com/input/?i="),
        SearchEngine::new("khan_academy", "https://www.khanacademy.org/search?page_search_query="),
        SearchEngine::new("mathway", "https://www.mathway.com/Algebra"),
    ]
}

pub(crate) static DEFAULT_ENGINES: LazyLock<Vec<SearchEngine>> = LazyLock::new(default_engines);

/// Percent-encode text for use inside a URL query component.
pub fn encode_query(text: &str) -> String {
    utf8_percent_encode(text, QUERY_ESCAPE).to_string()
}

/// The sentence sent to the general-purpose web search.
pub fn google_query(problem: &str) -> String {
    format!("how to solve {} step by step", problem)
}

/// Build one link per engine (in table order) plus the trailing `google` entry.
/// `engines` must already have passed `validate_engines`.
#[instrument(level = "debug", skip(engines, problem), fields(engines = engines.len(), problem_len = problem.len()))]
pub(crate) fn build_search_urls_with(engines: &[SearchEngine], problem: &str) -> SearchUrls {
    let encoded = encode_query(problem);

    let mut urls = SearchUrls::new();
    for engine in engines {
        urls.insert(engine.id.as_str(), engine.url_for(&encoded));
    }

    // Encodes the whole sentence, not the bare problem.
    let google = format!("{}{}", GOOGLE_SEARCH_BASE, encode_query(&google_query(problem)));
    urls.insert(GOOGLE_ENGINE_ID, google);
    urls
}

/// `build_search_urls_with` over the built-in engine table.
pub fn build_search_urls(problem: &str) -> SearchUrls {
    build_search_urls_with(&DEFAULT_ENGINES, problem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_reserved_and_non_ascii() {
        assert_eq!(encode_query("2 + 3 = 5"), "2%20%2B%203%20%3D%205");
        assert_eq!(encode_query("a&b?c#d"), "a%26b%3Fc%23d");
        assert_eq!(encode_query("π"), "%CF%80");
        assert_eq!(encode_query("x/2 -y_z.~"), "x/2%20-y_z.~");
        assert_eq!(encode_query(""), "");
    }

    #[test]
    fn builds_engine_links_then_google() {
        let urls = build_search_urls("x + 5 = 10");
        assert_eq!(
            urls.keys().collect::<Vec<_>>(),
            vec!["wolfram", "khan_academy", "mathway", "google"]
        );
        assert_eq!(
            urls.get("wolfram"),
            Some("https://www.wolframalpha.com/input/?i=x%20%2B%205%20%3D%2010")
        );
        assert_eq!(
            urls.get("google"),
            Some("https://www.google.com/search?q=how%20to%20solve%20x%20%2B%205%20%3D%2010%20step%20by%20step")
        );
    }

    #[test]
    fn custom_engine_table_is_respected() {
        let engines = vec![SearchEngine::new("ddg", "https://duckduckgo.com/?q=")];
        let urls = build_search_urls_with(&engines, "1/2");
        assert_eq!(urls.keys().collect::<Vec<_>>(), vec!["ddg", "google"]);
        assert_eq!(urls.get("ddg"), Some("https://duckduckgo.com/?q=1/2"));
    }

    #[test]
    fn empty_engine_table_still_has_google() {
        let urls = build_search_urls_with(&[], "");
        assert_eq!(urls.len(), 1);
        assert!(urls.contains_key(GOOGLE_ENGINE_ID));
    }
}
