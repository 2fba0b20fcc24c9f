use std::{borrow::Cow, path::PathBuf, sync::Arc};

use auto_external_common::{
  AutoExternalOptions, InputOptions, NormalizedAutoExternalOptions, PackageJson,
};
use auto_external_error::BuildResult;
use auto_external_fs::{FileSystem, OsFileSystem};
use auto_external_resolver::{ManifestReader, NodeModuleResolver};
use auto_external_utils::path_ext::PathExt;

use crate::{
  plugin::Plugin,
  types::{SharedModuleResolver, SharedOptions},
  utils::{
    assemble_own_externals::assemble_own_externals, merge_external::merge_external,
    normalize_options::normalize_options,
    resolve_include_dependencies::resolve_include_dependencies,
  },
};

pub const AUTO_EXTERNAL_PLUGIN_NAME: &str = "auto-external";

/// Marks the project's dependencies, peer dependencies and runtime built-ins as external.
///
/// The manifest is read again on every `options` call, so edits to `package.json` between
/// passes of a watching bundler are picked up.
#[derive(Debug)]
pub struct AutoExternalPlugin<F: FileSystem = OsFileSystem> {
  options: SharedOptions,
  manifest_reader: ManifestReader<F>,
  resolver: SharedModuleResolver,
}

impl AutoExternalPlugin {
  /// `cwd` is where the default `package.json` lookup starts and what a relative `package_path`
  /// is resolved against.
  pub fn new(options: AutoExternalOptions, cwd: impl Into<PathBuf>) -> Self {
    Self::with_collaborators(options, cwd, OsFileSystem, Arc::new(NodeModuleResolver::new()))
  }
}

impl<F: FileSystem> AutoExternalPlugin<F> {
  pub fn with_collaborators(
    options: AutoExternalOptions,
    cwd: impl Into<PathBuf>,
    fs: F,
    resolver: SharedModuleResolver,
  ) -> Self {
    Self {
      options: Arc::new(normalize_options(options, cwd.into())),
      manifest_reader: ManifestReader::new(fs),
      resolver,
    }
  }

  pub fn normalized_options(&self) -> &NormalizedAutoExternalOptions {
    &self.options
  }

  /// The project's own externals for a pass with the given options, before the user's `external`
  /// option is merged in.
  pub fn own_externals(&self, input: &InputOptions) -> BuildResult<Vec<String>> {
    self.read_own_externals(input).map(|(_, own_externals)| own_externals)
  }

  fn read_own_externals(&self, input: &InputOptions) -> BuildResult<(PackageJson, Vec<String>)> {
    let package_json =
      self.manifest_reader.read(self.options.package_path.as_deref(), &self.options.cwd)?;
    let include_dependencies = resolve_include_dependencies(&self.options, input);
    let own_externals = assemble_own_externals(&self.options, &package_json, include_dependencies);

    tracing::debug!(
      "{} own externals from {} (dependencies included: {include_dependencies})",
      own_externals.len(),
      package_json.path.display(),
    );

    Ok((package_json, own_externals))
  }
}

impl<F: FileSystem> Plugin for AutoExternalPlugin<F> {
  fn name(&self) -> Cow<'static, str> {
    Cow::Borrowed(AUTO_EXTERNAL_PLUGIN_NAME)
  }

  fn options(&self, mut options: InputOptions) -> BuildResult<InputOptions> {
    self.resolver.clear_cache();

    let (package_json, own_externals) = self.read_own_externals(&options)?;
    let external = merge_external(
      own_externals,
      options.external.take(),
      &self.resolver,
      package_json.path.containing_dir(),
    );

    Ok(InputOptions { external: Some(external), ..options })
  }
}
