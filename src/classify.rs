//! Problem classification.
//!
//! Rules are checked in a fixed order and every matching rule overwrites the
//! running category, so the last match wins:
//!   arithmetic < algebra < calculus < geometry < trigonometry.
//! Keyword rules match substrings ("sin" also hits "using"), which is relied on.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::domain::Category;

/// Which form of the input a rule looks at.
#[derive(Clone, Copy, Debug)]
enum Subject {
  Raw,
  Lowercase,
}

/// One classification rule: every pattern must match for the rule to fire.
struct Rule {
  category: Category,
  subject: Subject,
  all_of: Vec<Regex>,
}

impl Rule {
  fn new(category: Category, subject: Subject, patterns: &[&str]) -> Self {
    let all_of = patterns
      .iter()
      .map(|p| Regex::new(p).expect("classification pattern must compile"))
      .collect();
    Self { category, subject, all_of }
  }

  fn matches(&self, raw: &str, lower: &str) -> bool {
    let text = match self.subject {
      Subject::Raw => raw,
      Subject::Lowercase => lower,
    };
    self.all_of.iter().all(|re| re.is_match(text))
  }
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
  vec![
    Rule::new(Category::Arithmetic, Subject::Raw, &[r"[+\-*/]"]),
    Rule::new(Category::Algebra, Subject::Raw, &[r"[a-zA-Z]", r"="]),
    Rule::new(Category::Calculus, Subject::Lowercase, &[r"derivative|integral|limit|differential"]),
    Rule::new(
      Category::Geometry,
      Subject::Lowercase,
      &[r"area|perimeter|volume|triangle|circle|square|rectangle"],
    ),
    Rule::new(Category::Trigonometry, Subject::Lowercase, &[r"sin|cos|tan|sine|cosine|tangent"]),
  ]
});

/// Classify a problem. Total and pure: the input is trimmed, and anything
/// no rule matches (including the empty string) is `General`.
pub fn classify(text: &str) -> Category {
  let raw = text.trim();
  let lower = raw.to_lowercase();

  let mut category = Category::General;
  for rule in RULES.iter() {
    if rule.matches(raw, &lower) {
      trace!(target: "classify", from = %category, to = %rule.category, "rule matched");
      category = rule.category;
    }
  }
  category
}
