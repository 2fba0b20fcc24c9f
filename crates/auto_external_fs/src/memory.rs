use std::{
  io::{self, Read, Write},
  path::{Component, Path},
};

use vfs::{FileSystem as _, MemoryFS, VfsFileType, VfsResult};

use crate::FileSystem;

/// An in-memory filesystem for tests. Paths are expected to be absolute, unix style.
#[derive(Debug)]
pub struct MemoryFileSystem {
  fs: MemoryFS,
}

impl Default for MemoryFileSystem {
  fn default() -> Self {
    Self { fs: MemoryFS::new() }
  }
}

impl MemoryFileSystem {
  pub fn new(files: &[(&str, &str)]) -> VfsResult<Self> {
    let mut fs = Self::default();
    for (path, content) in files {
      fs.add_file(Path::new(path), content)?;
    }
    Ok(fs)
  }

  /// Creates missing parent directories and overwrites an existing file.
  pub fn add_file(&mut self, path: &Path, content: &str) -> VfsResult<()> {
    if let Some(parent) = path.parent() {
      self.add_dir(parent)?;
    }
    let mut file = self.fs.create_file(&vfs_path(path))?;
    file.write_all(content.as_bytes())?;
    Ok(())
  }

  pub fn add_dir(&mut self, path: &Path) -> VfsResult<()> {
    let mut current = String::new();
    for component in path.components() {
      if let Component::Normal(name) = component {
        current.push('/');
        current.push_str(&name.to_string_lossy());
        if !self.fs.exists(&current)? {
          self.fs.create_dir(&current)?;
        }
      }
    }
    Ok(())
  }

  fn file_type(&self, path: &Path) -> Option<VfsFileType> {
    self.fs.metadata(&vfs_path(path)).ok().map(|metadata| metadata.file_type)
  }
}

impl FileSystem for MemoryFileSystem {
  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    let mut file = self
      .fs
      .open_file(&vfs_path(path))
      .map_err(|err| io::Error::new(io::ErrorKind::NotFound, err.to_string()))?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
  }

  fn is_file(&self, path: &Path) -> bool {
    matches!(self.file_type(path), Some(VfsFileType::File))
  }

  fn is_dir(&self, path: &Path) -> bool {
    matches!(self.file_type(path), Some(VfsFileType::Directory))
  }
}

// `MemoryFS` keys are `/`-joined component lists rooted at "".
fn vfs_path(path: &Path) -> String {
  let mut result = String::new();
  for component in path.components() {
    if let Component::Normal(name) = component {
      result.push('/');
      result.push_str(&name.to_string_lossy());
    }
  }
  result
}

#[test]
fn test_memory_file_system() {
  let mut fs = MemoryFileSystem::new(&[("/app/package.json", r#"{"name":"app"}"#)]).unwrap();

  assert!(fs.is_dir(Path::new("/app")));
  assert!(fs.is_file(Path::new("/app/package.json")));
  assert!(!fs.is_file(Path::new("/app")));
  assert!(!fs.is_file(Path::new("/app/missing.json")));
  assert_eq!(fs.read_to_string(Path::new("/app/package.json")).unwrap(), r#"{"name":"app"}"#);
  assert!(fs.read_to_string(Path::new("/app/missing.json")).is_err());

  let manifest = Path::new("/app/package.json");
  fs.add_file(manifest, r#"{"name":"renamed"}"#).unwrap();
  assert_eq!(fs.read_to_string(manifest).unwrap(), r#"{"name":"renamed"}"#);
  fs.add_dir(Path::new("/app/src/nested")).unwrap();
  assert!(fs.is_dir(Path::new("/app/src/nested")));
}
