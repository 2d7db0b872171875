//! Plain-text rendering of an `AdviceResult` for the terminal.

use std::io::{self, Write};

use crate::domain::AdviceResult;

const WIDTH: usize = 70;

fn section(out: &mut impl Write, title: &str) -> io::Result<()> {
  let rule = "-".repeat(WIDTH);
  writeln!(out)?;
  writeln!(out, "{rule}")?;
  writeln!(out, "{title}")?;
  writeln!(out, "{rule}")
}

/// Write the banner, problem echo, steps, search links and resources.
pub fn render_advice(advice: &AdviceResult, out: &mut impl Write) -> io::Result<()> {
  let banner = "=".repeat(WIDTH);
  writeln!(out)?;
  writeln!(out, "{banner}")?;
  writeln!(out, "MATH HELPER - Teaching You Step by Step")?;
  writeln!(out, "{banner}")?;

  writeln!(out)?;
  writeln!(out, "Problem: {}", advice.problem)?;
  writeln!(out, "Problem Type: {}", advice.category.as_str().to_uppercase())?;

  section(out, "STEP-BY-STEP APPROACH:")?;
  for step in &advice.steps {
    writeln!(out, "{step}")?;
  }

  section(out, "SEARCH THESE RESOURCES FOR DETAILED SOLUTIONS:")?;
  for (engine, url) in advice.search_urls.iter() {
    writeln!(out, "• {}: {}", engine.to_uppercase(), url)?;
  }

  section(out, "HELPFUL LEARNING RESOURCES:")?;
  for r in &advice.resources {
    writeln!(out, "• {}: {}", r.name, r.url)?;
  }

  writeln!(out)?;
  writeln!(out, "{banner}")
}
