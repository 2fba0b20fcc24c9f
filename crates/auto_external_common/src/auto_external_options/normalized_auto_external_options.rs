use std::path::PathBuf;

use crate::Builtins;

#[derive(Debug, Clone)]
pub struct NormalizedAutoExternalOptions {
  pub builtins: Builtins,
  pub dependencies: Option<bool>,
  pub peer_dependencies: bool,
  /// Absolute. `None` means "search upwards from `cwd`".
  pub package_path: Option<PathBuf>,
  pub cwd: PathBuf,
}
