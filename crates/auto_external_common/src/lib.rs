mod auto_external_options;
mod bundler_options;
mod types;

pub use crate::{
  auto_external_options::{
    builtins::Builtins, normalized_auto_external_options::NormalizedAutoExternalOptions,
    AutoExternalOptions,
  },
  bundler_options::{
    external::{External, ExternalFn},
    output_format::{OutputFormat, ParseOutputFormatError},
    platform::Platform,
    InputOptions, OutputTarget,
  },
  types::package_json::PackageJson,
};
