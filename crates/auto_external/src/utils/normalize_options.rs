use std::path::PathBuf;

use auto_external_common::{AutoExternalOptions, NormalizedAutoExternalOptions};
use auto_external_utils::path_ext::PathExt;

pub fn normalize_options(
  raw_options: AutoExternalOptions,
  cwd: PathBuf,
) -> NormalizedAutoExternalOptions {
  NormalizedAutoExternalOptions {
    builtins: raw_options.builtins.unwrap_or_default(),
    dependencies: raw_options.dependencies,
    peer_dependencies: raw_options.peer_dependencies.unwrap_or(true),
    package_path: raw_options.package_path.map(|package_path| package_path.absolutize_from(&cwd)),
    cwd,
  }
}

#[test]
fn test_normalize_options() {
  use auto_external_common::Builtins;

  let normalized = normalize_options(AutoExternalOptions::default(), PathBuf::from("/app"));
  assert_eq!(normalized.builtins, Builtins::Current);
  assert_eq!(normalized.dependencies, None);
  assert!(normalized.peer_dependencies);
  assert_eq!(normalized.package_path, None);

  let normalized = normalize_options(
    AutoExternalOptions {
      builtins: Some(Builtins::Disabled),
      dependencies: Some(true),
      peer_dependencies: Some(false),
      package_path: Some(PathBuf::from("../lib")),
    },
    PathBuf::from("/repo/app"),
  );
  assert_eq!(normalized.builtins, Builtins::Disabled);
  assert_eq!(normalized.dependencies, Some(true));
  assert!(!normalized.peer_dependencies);
  assert_eq!(normalized.package_path, Some(PathBuf::from("/repo/lib")));
}
