//! Curated learning links per category.

use tracing::debug;

use crate::domain::{Category, ResourceEntry};

macro_rules! res {
  ($name:expr, $url:expr) => {
    ResourceEntry { name: $name, url: $url }
  };
}

const ARITHMETIC: &[ResourceEntry] = &[
  res!("Khan Academy - Arithmetic", "https://www.khanacademy.org/math/arithmetic"),
  res!("Math is Fun - Basic Operations", "https://www.mathsisfun.com/numbers/arithmetic.html"),
];

const ALGEBRA: &[ResourceEntry] = &[
  res!("Khan Academy - Algebra", "https://www.khanacademy.org/math/algebra"),
  res!("Purple Math - Algebra Lessons", "https://www.purplemath.com/modules/index.htm"),
];

const CALCULUS: &[ResourceEntry] = &[
  res!("Khan Academy - Calculus", "https://www.khanacademy.org/math/calculus-1"),
  res!("Paul's Online Math Notes", "https://tutorial.math.lamar.edu/Classes/CalcI/CalcI.aspx"),
];

const GEOMETRY: &[ResourceEntry] = &[
  res!("Khan Academy - Geometry", "https://www.khanacademy.org/math/geometry"),
  res!("Math is Fun - Geometry", "https://www.mathsisfun.com/geometry/index.html"),
];

const TRIGONOMETRY: &[ResourceEntry] = &[
  res!("Khan Academy - Trigonometry", "https://www.khanacademy.org/math/trigonometry"),
  res!("Math is Fun - Trigonometry", "https://www.mathsisfun.com/algebra/trigonometry.html"),
];

const GENERAL: &[ResourceEntry] = &[
  res!("Khan Academy", "https://www.khanacademy.org/math"),
  res!("Wolfram MathWorld", "https://mathworld.wolfram.com/"),
];

/// Learning resources for a category, in display order. Never empty.
pub fn helpful_resources(category: Category) -> &'static [ResourceEntry] {
  match category {
    Category::Arithmetic => ARITHMETIC,
    Category::Algebra => ALGEBRA,
    Category::Calculus => CALCULUS,
    Category::Geometry => GEOMETRY,
    Category::Trigonometry => TRIGONOMETRY,
    Category::General => GENERAL,
  }
}

/// Lookup by label; unrecognized labels get the general resources.
pub fn helpful_resources_for_label(label: &str) -> &'static [ResourceEntry] {
  let category = label.parse::<Category>().unwrap_or_else(|e| {
    debug!(target: "advisor", error = %e, "falling back to general resources");
    Category::General
  });
  helpful_resources(category)
}
