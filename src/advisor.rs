//! Composition: classify once, then look up steps, search links and resources.
//!
//! Used by the REPL, the one-shot command and both the HTTP and WebSocket handlers.
//! Everything here is pure; an `Advisor` can be shared across tasks freely.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::classify::classify;
use crate::config::{validate_engines, AppConfig, ConfigError};
use crate::domain::{AdviceResult, ParsedProblem};
use crate::resources::helpful_resources;
use crate::search::{build_search_urls_with, encode_query, SearchEngine, DEFAULT_ENGINES};
use crate::steps::teaching_steps;
use crate::util::trunc_for_log;

/// Trim, classify and encode a problem.
pub fn parse_problem(problem: &str) -> ParsedProblem {
  let original = problem.trim().to_string();
  let category = classify(&original);
  let encoded = encode_query(&original);
  ParsedProblem { original, category, encoded }
}

/// Advice using the built-in search-engine table.
pub fn advise(problem: &str) -> AdviceResult {
  advise_with(&DEFAULT_ENGINES, problem)
}

#[instrument(level = "debug", skip(engines, problem), fields(problem_len = problem.len()))]
fn advise_with(engines: &[SearchEngine], problem: &str) -> AdviceResult {
  let parsed = parse_problem(problem);
  debug!(
    target: "advisor",
    category = %parsed.category,
    problem = %trunc_for_log(&parsed.original, 80),
    "classified problem"
  );

  AdviceResult {
    steps: teaching_steps(parsed.category).to_vec(),
    search_urls: build_search_urls_with(engines, &parsed.original),
    resources: helpful_resources(parsed.category).to_vec(),
    category: parsed.category,
    problem: parsed.original,
  }
}

/// Advisor bound to a configured search-engine table.
#[derive(Clone, Debug)]
pub struct Advisor {
  engines: Arc<Vec<SearchEngine>>,
}

impl Default for Advisor {
  fn default() -> Self {
    Self { engines: Arc::new(DEFAULT_ENGINES.clone()) }
  }
}

impl Advisor {
  /// Engine ids must be unique and must not be the reserved `google` id.
  pub fn new(engines: Vec<SearchEngine>) -> Result<Self, ConfigError> {
    validate_engines(&engines)?;
    Ok(Self { engines: Arc::new(engines) })
  }

  pub fn from_config(cfg: &AppConfig) -> Result<Self, ConfigError> {
    Self::new(cfg.engines())
  }

  pub fn engines(&self) -> &[SearchEngine] { &self.engines }

  pub fn advise(&self, problem: &str) -> AdviceResult {
    advise_with(&self.engines, problem)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Category;

  #[test]
  fn parse_trims_and_encodes() {
    let p = parse_problem("  x + 1 = 2 \n");
    assert_eq!(p.original, "x + 1 = 2");
    assert_eq!(p.category, Category::Algebra);
    assert_eq!(p.encoded, "x%20%2B%201%20%3D%202");
  }

  #[test]
  fn advise_assembles_all_sections() {
    let r = advise("solve x + 5 = 10");
    assert_eq!(r.problem, "solve x + 5 = 10");
    assert_eq!(r.category, Category::Algebra);
    assert_eq!(r.steps, teaching_steps(Category::Algebra));
    assert_eq!(r.resources, helpful_resources(Category::Algebra));
    assert_eq!(r.search_urls.len(), 4);
  }

  #[test]
  fn search_links_use_trimmed_problem() {
    let r = advise("   1+1   ");
    assert_eq!(r.search_urls.get("wolfram"), Some("https://www.wolframalpha.com/input/?i=1%2B1"));
    assert!(r.search_urls.get("google").unwrap().ends_with("how%20to%20solve%201%2B1%20step%20by%20step"));
  }

  #[test]
  fn configured_advisor_uses_its_engines() {
    let advisor = Advisor::new(vec![SearchEngine::new("ddg", "https://duckduckgo.com/?q=")]).unwrap();
    let r = advisor.advise("area of a square");
    assert_eq!(r.category, Category::Geometry);
    assert_eq!(r.search_urls.keys().collect::<Vec<_>>(), vec!["ddg", "google"]);
  }

  #[test]
  fn engine_table_with_google_id_is_rejected() {
    let engines = vec![
      SearchEngine::new("google", "https://g.example/?q="),
      SearchEngine::new("wolfram", "https://www.wolframalpha.com/input/?i="),
    ];
    assert!(matches!(Advisor::new(engines), Err(ConfigError::ReservedEngine(id)) if id == "google"));
  }

  #[test]
  fn engine_table_with_repeated_id_is_rejected() {
    let engines = vec![
      SearchEngine::new("wolfram", "https://a.example/?q="),
      SearchEngine::new("wolfram", "https://b.example/?q="),
    ];
    assert!(matches!(Advisor::new(engines), Err(ConfigError::DuplicateEngine(id)) if id == "wolfram"));
  }

  #[test]
  fn valid_table_keeps_order_with_google_last() {
    let advisor = Advisor::new(vec![
      SearchEngine::new("mathway", "https://www.mathway.com/Algebra"),
      SearchEngine::new("wolfram", "https://www.wolframalpha.com/input/?i="),
    ])
    .unwrap();
    let r = advisor.advise("1+1");
    assert_eq!(r.search_urls.keys().collect::<Vec<_>>(), vec!["mathway", "wolfram", "google"]);
  }

  #[test]
  fn from_config_rejects_unvalidated_table() {
    let cfg = AppConfig {
      search_engines: vec![SearchEngine::new("google", "https://g.example/?q=")],
      ..AppConfig::default()
    };
    assert!(Advisor::from_config(&cfg).is_err());
  }

  #[test]
  fn default_advisor_matches_free_function() {
    assert_eq!(Advisor::default().advise("sin(x)"), advise("sin(x)"));
  }
}
