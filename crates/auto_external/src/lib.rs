mod auto_external_plugin;
mod plugin;
mod types;
mod utils;

pub use crate::{
  auto_external_plugin::{AutoExternalPlugin, AUTO_EXTERNAL_PLUGIN_NAME},
  plugin::Plugin,
  types::SharedModuleResolver,
  utils::{
    assemble_own_externals::assemble_own_externals, merge_external::merge_external,
    resolve_include_dependencies::resolve_include_dependencies,
  },
};
pub use auto_external_builtins::{builtin_modules, is_builtin_module, parse_node_version};
pub use auto_external_common::*;
pub use auto_external_error::{BuildError, BuildResult, ManifestError};
pub use auto_external_fs::{FileSystem, OsFileSystem};
pub use auto_external_resolver::{
  ManifestReader, ModuleResolver, NodeModuleResolver, ResolvedModule,
};
