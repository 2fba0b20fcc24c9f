// Collaborators of the externals engine: reading `package.json` and locating module ids on disk.

mod manifest;
mod resolver;

pub use crate::{
  manifest::{ManifestReader, PACKAGE_JSON},
  resolver::{ModuleResolver, NodeModuleResolver, ResolvedModule},
};
