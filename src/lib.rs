//! Math Helper · classify a math problem and point the learner at guidance.
//!
//! `advise` trims the problem, classifies it into a coarse [`Category`], then
//! returns the category's teaching steps, search links for a few engines plus a
//! Google query, and curated learning resources. Nothing is solved and nothing
//! is fetched.

pub mod advisor;
pub mod classify;
pub mod config;
pub mod domain;
pub mod protocol;
pub mod render;
pub mod repl;
pub mod resources;
pub mod routes;
pub mod search;
pub mod state;
pub mod steps;
pub mod telemetry;
pub mod util;

pub use advisor::{advise, parse_problem, Advisor};
pub use classify::classify;
pub use domain::{AdviceResult, Category, ParsedProblem, ResourceEntry, SearchUrls};
pub use resources::{helpful_resources, helpful_resources_for_label};
pub use search::{build_search_urls, encode_query, SearchEngine};
pub use steps::teaching_steps;
