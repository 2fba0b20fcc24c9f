pub mod builtins;
pub mod normalized_auto_external_options;

use std::path::PathBuf;

use serde::Deserialize;

use crate::Builtins;

/// Construction options of the auto-external plugin.
///
/// Deserializes from the same camelCase shape the JavaScript plugin accepts:
/// `{ "builtins": true | false | "6.0.0", "dependencies": bool, "peerDependencies": bool,
/// "packagePath": "..." }`.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AutoExternalOptions {
  /// Defaults to the built-ins of the current runtime.
  pub builtins: Option<Builtins>,
  /// `None` lets the output format decide.
  pub dependencies: Option<bool>,
  /// Defaults to `true`.
  pub peer_dependencies: Option<bool>,
  /// A `package.json` file or the directory containing one. Relative paths are resolved against
  /// the plugin's `cwd`. Defaults to the nearest `package.json` above `cwd`.
  pub package_path: Option<PathBuf>,
}
