use std::path::{Path, PathBuf};

use auto_external_builtins::is_builtin_module;
use oxc_resolver::{ResolveError, ResolveOptions as OxcResolverOptions, Resolver};

/// Where a module id ends up once resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedModule {
  /// A runtime built-in, named without the `node:` prefix.
  Builtin(String),
  /// An absolute path to the module's entry file.
  Path(PathBuf),
}

/// Locates module ids on the host filesystem.
///
/// Implementations never fail loudly: anything that cannot be located is `None`.
pub trait ModuleResolver: std::fmt::Debug + Send + Sync {
  fn resolve(&self, base_dir: &Path, id: &str) -> Option<ResolvedModule>;

  /// Drops whatever the resolver memoized, so the next lookup sees the filesystem as it is now.
  fn clear_cache(&self) {}
}

/// Node.js `require.resolve` semantics on top of `oxc_resolver`.
#[derive(Debug)]
pub struct NodeModuleResolver {
  resolver: Resolver,
}

impl Default for NodeModuleResolver {
  fn default() -> Self {
    Self::new()
  }
}

impl NodeModuleResolver {
  pub fn new() -> Self {
    let options = OxcResolverOptions {
      builtin_modules: true,
      condition_names: vec!["node".to_string(), "require".to_string(), "default".to_string()],
      main_fields: vec!["main".to_string()],
      extensions: vec![".js".to_string(), ".json".to_string(), ".node".to_string()],
      ..Default::default()
    };

    Self { resolver: Resolver::new(options) }
  }
}

impl ModuleResolver for NodeModuleResolver {
  fn resolve(&self, base_dir: &Path, id: &str) -> Option<ResolvedModule> {
    // Covers built-ins `oxc_resolver` no longer knows about, such as `freelist`.
    if is_builtin_module(id) {
      return Some(ResolvedModule::Builtin(strip_node_prefix(id).to_string()));
    }

    match self.resolver.resolve(base_dir, id) {
      Ok(resolution) => Some(ResolvedModule::Path(resolution.full_path())),
      Err(ResolveError::Builtin { resolved, .. }) => {
        Some(ResolvedModule::Builtin(strip_node_prefix(&resolved).to_string()))
      }
      Err(err) => {
        tracing::trace!("Cannot resolve {id:?} from {}: {err}", base_dir.display());
        None
      }
    }
  }

  fn clear_cache(&self) {
    self.resolver.clear_cache();
  }
}

fn strip_node_prefix(id: &str) -> &str {
  id.strip_prefix("node:").unwrap_or(id)
}
