use std::{io, path::Path};

/// The slice of filesystem access needed to locate and read a `package.json`.
pub trait FileSystem: std::fmt::Debug + Send + Sync {
  fn read_to_string(&self, path: &Path) -> io::Result<String>;

  fn is_file(&self, path: &Path) -> bool;

  fn is_dir(&self, path: &Path) -> bool;
}
