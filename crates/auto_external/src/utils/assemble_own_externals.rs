use auto_external_builtins::{builtin_modules, parse_node_version};
use auto_external_common::{Builtins, NormalizedAutoExternalOptions, PackageJson};
use auto_external_utils::indexmap::FxIndexSet;

/// Ids the project itself implies are external: dependencies, then peer dependencies, then
/// runtime built-ins. Each group keeps its own order; repeated names keep their first position.
pub fn assemble_own_externals(
  options: &NormalizedAutoExternalOptions,
  package_json: &PackageJson,
  include_dependencies: bool,
) -> Vec<String> {
  let mut ids = FxIndexSet::default();

  if include_dependencies {
    ids.extend(package_json.dependency_names().map(ToString::to_string));
  }

  if options.peer_dependencies {
    ids.extend(package_json.peer_dependency_names().map(ToString::to_string));
  }

  match &options.builtins {
    Builtins::Disabled => {}
    Builtins::Current => ids.extend(builtin_modules(None).into_iter().map(ToString::to_string)),
    Builtins::Version(raw_version) => {
      let version = parse_node_version(raw_version);
      if version.is_none() {
        tracing::warn!(
          "Invalid Node.js version {raw_version:?} for option \"builtins\", using the built-ins of the current runtime."
        );
      }
      ids.extend(builtin_modules(version.as_ref()).into_iter().map(ToString::to_string));
    }
  }

  ids.into_iter().collect()
}
