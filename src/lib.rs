//! rulens library: extract enabled lint rules from Biome and ESLint,
//! normalize them into a shared representation, and render a Markdown
//! reference document.

pub mod descriptions;
pub mod exit_codes;
pub mod markdown;
pub mod model;
pub mod normalize;
pub mod tools;
pub mod utils;

pub use model::{RulensCategory, RulensLinter, RulensRule, Severity};
