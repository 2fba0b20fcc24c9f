use std::path::{Path, PathBuf};

use auto_external_common::PackageJson;
use auto_external_error::ManifestError;
use auto_external_fs::{FileSystem, OsFileSystem};
use auto_external_utils::path_ext::PathExt;

pub const PACKAGE_JSON: &str = "package.json";

/// Reads the project manifest. Nothing is cached: every call hits the filesystem again.
#[derive(Debug, Default)]
pub struct ManifestReader<F: FileSystem = OsFileSystem> {
  fs: F,
}

impl<F: FileSystem> ManifestReader<F> {
  pub fn new(fs: F) -> Self {
    Self { fs }
  }

  /// `package_path` may point at a `package.json` or at the directory holding one. Without it,
  /// the nearest `package.json` at or above `cwd` is used.
  pub fn read(
    &self,
    package_path: Option<&Path>,
    cwd: &Path,
  ) -> Result<PackageJson, ManifestError> {
    let path = self.locate(package_path, cwd)?;
    tracing::trace!("Reading manifest {}", path.display());

    let content = self
      .fs
      .read_to_string(&path)
      .map_err(|source| ManifestError::Io { path: path.clone(), source })?;

    match serde_json::from_str::<PackageJson>(&content) {
      Ok(package_json) => Ok(package_json.with_path(path)),
      Err(source) => Err(ManifestError::Malformed { path, source }),
    }
  }

  fn locate(&self, package_path: Option<&Path>, cwd: &Path) -> Result<PathBuf, ManifestError> {
    let Some(package_path) = package_path else {
      return cwd
        .ancestors()
        .map(|dir| dir.join(PACKAGE_JSON))
        .find(|candidate| self.fs.is_file(candidate))
        .ok_or_else(|| ManifestError::NotFound { path: cwd.join(PACKAGE_JSON) });
    };

    let package_path = package_path.absolutize_from(cwd);
    let path =
      if self.fs.is_dir(&package_path) { package_path.join(PACKAGE_JSON) } else { package_path };

    if self.fs.is_file(&path) {
      Ok(path)
    } else {
      Err(ManifestError::NotFound { path })
    }
  }
}

#[cfg(test)]
mod tests {
  use auto_external_fs::MemoryFileSystem;

  use super::*;

  fn reader() -> ManifestReader<MemoryFileSystem> {
    ManifestReader::new(MemoryFileSystem::new(&[
      ("/repo/package.json", r#"{ "name": "repo", "dependencies": { "lodash": "^4.0.0" } }"#),
      (
        "/repo/packages/app/package.json",
        r#"{ "name": "app", "peerDependencies": { "react": "*" } }"#,
      ),
      ("/repo/packages/app/src/index.js", ""),
      ("/repo/packages/custom/pkg.json", r#"{ "name": "custom" }"#),
      ("/repo/packages/broken/package.json", r#"{ "name": "#),
    ])
    .unwrap())
  }

  #[test]
  fn nearest_manifest_above_cwd() {
    let package_json = reader().read(None, Path::new("/repo/packages/app/src")).unwrap();
    assert_eq!(package_json.name.as_deref(), Some("app"));
    assert_eq!(package_json.path, Path::new("/repo/packages/app/package.json"));

    let package_json = reader().read(None, Path::new("/repo/packages")).unwrap();
    assert_eq!(package_json.name.as_deref(), Some("repo"));
  }

  #[test]
  fn directory_package_path() {
    let package_json =
      reader().read(Some(Path::new("packages/app")), Path::new("/repo")).unwrap();
    assert_eq!(package_json.name.as_deref(), Some("app"));
  }

  #[test]
  fn file_package_path() {
    let package_json = reader()
      .read(Some(Path::new("/repo/packages/custom/pkg.json")), Path::new("/elsewhere"))
      .unwrap();
    assert_eq!(package_json.name.as_deref(), Some("custom"));
  }

  #[test]
  fn missing_manifest() {
    let error = reader().read(None, Path::new("/elsewhere")).unwrap_err();
    assert!(matches!(error, ManifestError::NotFound { .. }));
    assert_eq!(error.path(), Path::new("/elsewhere/package.json"));

    let error =
      reader().read(Some(Path::new("/repo/packages/custom")), Path::new("/repo")).unwrap_err();
    assert!(matches!(error, ManifestError::NotFound { .. }));
    assert_eq!(error.path(), Path::new("/repo/packages/custom/package.json"));
  }

  #[test]
  fn malformed_manifest() {
    let error =
      reader().read(Some(Path::new("/repo/packages/broken")), Path::new("/repo")).unwrap_err();
    assert!(matches!(error, ManifestError::Malformed { .. }));
  }
}
