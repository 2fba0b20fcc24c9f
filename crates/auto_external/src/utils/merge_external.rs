use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use auto_external_common::External;
use auto_external_resolver::ResolvedModule;
use auto_external_utils::{indexmap::dedup_in_order, path_ext::PathExt};
use rustc_hash::FxHashSet;

use crate::types::SharedModuleResolver;

/// Combines the user's `external` option with the project's own externals.
///
/// The result has the shape the user chose: a predicate stays a predicate, an array (or nothing)
/// becomes a deduplicated array with the user's ids first.
pub fn merge_external(
  own_externals: Vec<String>,
  user_external: Option<External>,
  resolver: &SharedModuleResolver,
  base_dir: &Path,
) -> External {
  match user_external {
    None => External::ArrayOfIds(dedup_in_order(own_externals)),
    Some(External::ArrayOfIds(user_ids)) => {
      External::ArrayOfIds(dedup_in_order(user_ids.into_iter().chain(own_externals)))
    }
    Some(External::Fn(user_fn)) => {
      let matcher = OwnExternalMatcher::new(&own_externals, Arc::clone(resolver), base_dir);
      External::Fn(Arc::new(move |id: &str| user_fn(id) || matcher.matches(id)))
    }
  }
}

/// Matches ids against own externals by where they live on disk rather than by name.
///
/// Bundlers that resolve imports before asking (node-resolve, commonjs) pass absolute file paths,
/// and deep imports such as `lodash/fp` never equal a dependency name. Both still match when the
/// resolved file sits in or below the directory of a resolved own external.
#[derive(Debug)]
struct OwnExternalMatcher {
  resolver: SharedModuleResolver,
  base_dir: PathBuf,
  builtins: FxHashSet<String>,
  dirs: Vec<PathBuf>,
}

impl OwnExternalMatcher {
  fn new(own_externals: &[String], resolver: SharedModuleResolver, base_dir: &Path) -> Self {
    let mut builtins = FxHashSet::default();
    let mut dirs = Vec::new();

    for id in own_externals {
      match resolver.resolve(base_dir, id) {
        Some(ResolvedModule::Builtin(name)) => {
          builtins.insert(name);
        }
        Some(ResolvedModule::Path(path)) => dirs.push(path.containing_dir().to_path_buf()),
        None => tracing::debug!("Skipping external {id:?}, it cannot be resolved"),
      }
    }

    Self { resolver, base_dir: base_dir.to_path_buf(), builtins, dirs }
  }

  fn matches(&self, id: &str) -> bool {
    match self.resolver.resolve(&self.base_dir, id) {
      Some(ResolvedModule::Builtin(name)) => self.builtins.contains(&name),
      Some(ResolvedModule::Path(path)) => {
        let dir = path.containing_dir();
        self.dirs.iter().any(|own_dir| dir.is_within(own_dir))
      }
      None => false,
    }
  }
}

#[cfg(test)]
mod tests {
  use auto_external_resolver::ModuleResolver;
  use rustc_hash::FxHashMap;

  use super::*;

  /// Resolves from a fixed table and treats ids starting with `/` as already resolved.
  #[derive(Debug, Default)]
  struct StaticResolver {
    modules: FxHashMap<String, ResolvedModule>,
  }

  impl StaticResolver {
    fn new(entries: &[(&str, &str)]) -> Self {
      let modules = entries
        .iter()
        .map(|(id, path)| (id.to_string(), ResolvedModule::Path(PathBuf::from(path))))
        .chain(
          ["fs", "path"].map(|name| (name.to_string(), ResolvedModule::Builtin(name.to_string()))),
        )
        .collect();
      Self { modules }
    }
  }

  impl ModuleResolver for StaticResolver {
    fn resolve(&self, _base_dir: &Path, id: &str) -> Option<ResolvedModule> {
      if id.starts_with('/') {
        return Some(ResolvedModule::Path(PathBuf::from(id)));
      }
      let id = id.strip_prefix("node:").unwrap_or(id);
      self.modules.get(id).cloned()
    }
  }

  fn resolver() -> SharedModuleResolver {
    Arc::new(StaticResolver::new(&[
      ("depA", "/app/node_modules/depA/index.js"),
      ("depA/lib", "/app/node_modules/depA/lib/index.js"),
      ("peerB", "/app/node_modules/peerB/dist/peer.js"),
      ("@scope/name", "/app/node_modules/@scope/name/index.js"),
      ("@scope/name/deep", "/app/node_modules/@scope/name/deep/index.js"),
      ("@scope/other", "/app/node_modules/@scope/other/index.js"),
      ("depA-extra", "/app/node_modules/depA-extra/index.js"),
    ]))
  }

  fn strings(ids: &[&str]) -> Vec<String> {
    ids.iter().map(ToString::to_string).collect()
  }

  fn merge(own: &[&str], user: Option<External>) -> External {
    merge_external(strings(own), user, &resolver(), Path::new("/app"))
  }

  #[test]
  fn no_override_yields_deduplicated_array() {
    let external = merge(&["depA", "peerB", "depA", "fs"], None);
    assert_eq!(external.as_array_of_ids(), Some(&strings(&["depA", "peerB", "fs"])[..]));
  }

  #[test]
  fn array_override_comes_first() {
    let external = merge(&["depA", "peerB"], Some(strings(&["x", "depA"]).into()));
    assert_eq!(external.as_array_of_ids(), Some(&strings(&["x", "depA", "peerB"])[..]));
  }

  #[test]
  fn empty_array_override() {
    let external = merge(&["depA"], Some(External::ArrayOfIds(vec![])));
    assert_eq!(external.as_array_of_ids(), Some(&strings(&["depA"])[..]));
  }

  #[test]
  fn predicate_override_stays_a_predicate() {
    let external = merge(&["depA"], Some(External::from_fn(|id| id == "x")));
    assert!(external.as_array_of_ids().is_none());
    assert!(external.is_external("x"));
    assert!(external.is_external("depA"));
    assert!(!external.is_external("peerB"));
  }

  #[test]
  fn predicate_matches_deep_imports_and_resolved_paths() {
    let external = merge(&["depA", "@scope/name"], Some(External::from_fn(|_| false)));

    assert!(external.is_external("depA/lib"));
    assert!(external.is_external("/app/node_modules/depA/lib/index.js"));
    assert!(external.is_external("/app/node_modules/depA/index.js"));
    assert!(external.is_external("@scope/name"));
    assert!(external.is_external("@scope/name/deep"));
    assert!(!external.is_external("@scope/other"));
    assert!(!external.is_external("depA-extra"));
    assert!(!external.is_external("/app/src/index.js"));
  }

  #[test]
  fn predicate_matches_builtins_with_and_without_prefix() {
    let external = merge(&["fs"], Some(External::from_fn(|_| false)));
    assert!(external.is_external("fs"));
    assert!(external.is_external("node:fs"));
    assert!(!external.is_external("path"));
  }

  #[test]
  fn predicate_never_fails_on_unknown_ids() {
    let external = merge(&["depA", "not-installed"], Some(External::from_fn(|_| false)));
    assert!(!external.is_external("path/to/unknown"));
    assert!(!external.is_external("not-installed"));
  }

  #[test]
  fn user_predicate_is_consulted_first() {
    let external = merge(&[], Some(External::from_fn(|id| id.starts_with("virtual:"))));
    assert!(external.is_external("virtual:entry"));
    assert!(!external.is_external("depA"));
  }
}
