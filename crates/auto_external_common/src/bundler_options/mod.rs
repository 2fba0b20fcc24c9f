pub mod external;
pub mod output_format;
pub mod platform;

use std::path::PathBuf;

use crate::{External, OutputFormat, Platform};

/// The options a bundler hands to the `options` hook on every pass.
///
/// Only `format`, `targets` and `external` are inspected; the rest is passed through untouched.
#[derive(Default, Debug, Clone)]
pub struct InputOptions {
  // --- Input
  pub input: Option<Vec<String>>,
  pub cwd: Option<PathBuf>,
  pub platform: Option<Platform>,
  pub treeshake: Option<bool>,
  pub external: Option<External>,

  // --- Output
  pub format: Option<OutputFormat>,
  /// Set when a single pass writes several outputs. Takes precedence over `format`.
  pub targets: Option<Vec<OutputTarget>>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
  pub format: Option<OutputFormat>,
}

impl OutputTarget {
  pub fn new(format: OutputFormat) -> Self {
    Self { format: Some(format) }
  }
}
