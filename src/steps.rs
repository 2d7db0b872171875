//! Built-in teaching steps, one ordered checklist per category.

use crate::domain::Category;

const ARITHMETIC: &[&str] = &[
  "1. Identify the operation(s) needed (+, -, *, /)",
  "2. Follow the order of operations (PEMDAS/BODMAS)",
  "3. Parentheses/Brackets first",
  "4. Then Exponents/Orders",
  "5. Then Multiplication and Division (left to right)",
  "6. Finally Addition and Subtraction (left to right)",
  "7. Calculate step by step, showing your work",
];

const ALGEBRA: &[&str] = &[
  "1. Identify the variable(s) you need to solve for",
  "2. Simplify both sides of the equation if needed",
  "3. Use inverse operations to isolate the variable",
  "4. Perform the same operation on both sides of the equation",
  "5. Check your answer by substituting back into the original equation",
];

const CALCULUS: &[&str] = &[
  "1. Identify what type of calculus problem this is (derivative, integral, limit)",
  "2. Review the relevant rules and formulas",
  "3. Apply the appropriate technique step by step",
  "4. Simplify your answer",
  "5. Check your work if possible",
];

const GEOMETRY: &[&str] = &[
  "1. Draw a diagram if one isn't provided",
  "2. Label all known measurements",
  "3. Identify what formula(s) you need",
  "4. Substitute the known values into the formula",
  "5. Solve for the unknown value",
  "6. Include appropriate units in your answer",
];

const TRIGONOMETRY: &[&str] = &[
  "1. Draw a right triangle if applicable",
  "2. Label the sides (opposite, adjacent, hypotenuse)",
  "3. Identify which trigonometric ratio to use (SOH-CAH-TOA)",
  "4. Set up the equation",
  "5. Solve for the unknown",
  "6. Check if your answer makes sense",
];

// Domain-agnostic problem-solving checklist.
const GENERAL: &[&str] = &[
  "1. Read the problem carefully",
  "2. Identify what is being asked",
  "3. List what information you know",
  "4. Determine what math concepts apply",
  "5. Break the problem into smaller steps",
  "6. Work through each step methodically",
  "7. Check your answer",
];

/// Ordered instructions for a category. Never empty.
pub fn teaching_steps(category: Category) -> &'static [&'static str] {
  match category {
    Category::Arithmetic => ARITHMETIC,
    Category::Algebra => ALGEBRA,
    Category::Calculus => CALCULUS,
    Category::Geometry => GEOMETRY,
    Category::Trigonometry => TRIGONOMETRY,
    Category::General => GENERAL,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_category_has_five_to_seven_numbered_steps() {
    for c in Category::ALL {
      let steps = teaching_steps(c);
      assert!((5..=7).contains(&steps.len()), "{c}: {} steps", steps.len());
      for (i, step) in steps.iter().enumerate() {
        assert!(step.starts_with(&format!("{}. ", i + 1)), "{c}: {step}");
      }
    }
  }

  #[test]
  fn arithmetic_mentions_order_of_operations() {
    assert!(teaching_steps(Category::Arithmetic).iter().any(|s| s.contains("PEMDAS")));
    assert!(teaching_steps(Category::Trigonometry).iter().any(|s| s.contains("SOH-CAH-TOA")));
  }
}
