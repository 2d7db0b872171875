//! Domain models: problem categories, parsed problems, resources and the advice record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Coarse math domain assigned to a problem. `General` is the fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
  Arithmetic,
  Algebra,
  Calculus,
  Geometry,
  Trigonometry,
  General,
}
impl Default for Category {
  fn default() -> Self { Category::General }
}

impl Category {
  /// Every category, in classification priority order (general last).
  pub const ALL: [Category; 6] = [
    Category::Arithmetic,
    Category::Algebra,
    Category::Calculus,
    Category::Geometry,
    Category::Trigonometry,
    Category::General,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Category::Arithmetic => "arithmetic",
      Category::Algebra => "algebra",
      Category::Calculus => "calculus",
      Category::Geometry => "geometry",
      Category::Trigonometry => "trigonometry",
      Category::General => "general",
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
  type Err = UnknownCategory;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let label = s.trim().to_lowercase();
    Category::ALL
      .into_iter()
      .find(|c| c.as_str() == label)
      .ok_or_else(|| UnknownCategory(s.to_string()))
  }
}

/// Result of classifying a trimmed problem string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParsedProblem {
  pub original: String,
  pub category: Category,
  /// Query-component percent-encoding of `original`.
  pub encoded: String,
}

/// A curated learning link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResourceEntry {
  pub name: &'static str,
  pub url: &'static str,
}

/// Engine id -> search URL, kept in insertion order.
/// Serializes as a JSON object with the same key order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchUrls(Vec<(String, String)>);

impl SearchUrls {
  pub fn new() -> Self { Self::default() }

  /// Insert or replace. A replaced key keeps its original position.
  pub fn insert(&mut self, engine: impl Into<String>, url: impl Into<String>) {
    let engine = engine.into();
    let url = url.into();
    match self.0.iter_mut().find(|(k, _)| *k == engine) {
      Some(slot) => slot.1 = url,
      None => self.0.push((engine, url)),
    }
  }

  pub fn get(&self, engine: &str) -> Option<&str> {
    self.0.iter().find(|(k, _)| k == engine).map(|(_, v)| v.as_str())
  }

  pub fn contains_key(&self, engine: &str) -> bool { self.get(engine).is_some() }

  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.0.iter().map(|(k, _)| k.as_str())
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }

  pub fn len(&self) -> usize { self.0.len() }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl Serialize for SearchUrls {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(self.iter())
  }
}

/// Everything the advisor returns for one problem.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AdviceResult {
  pub problem: String,
  pub category: Category,
  pub steps: Vec<&'static str>,
  pub search_urls: SearchUrls,
  pub resources: Vec<ResourceEntry>,
}
