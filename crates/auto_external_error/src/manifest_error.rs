use std::{
  io,
  path::{Path, PathBuf},
};

/// Failures while locating or reading the project's `package.json`.
///
/// None of these are recovered from: a broken manifest aborts the options hook.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
  #[error("No package.json found at {}", .path.display())]
  NotFound { path: PathBuf },

  #[error("Failed to read {}: {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Failed to parse {}: {source}", .path.display())]
  Malformed {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },
}

impl ManifestError {
  pub fn path(&self) -> &Path {
    match self {
      Self::NotFound { path } | Self::Io { path, .. } | Self::Malformed { path, .. } => path,
    }
  }
}

#[test]
fn test_display_names_the_location() {
  let error = ManifestError::NotFound { path: PathBuf::from("/app/package.json") };
  assert_eq!(error.to_string(), "No package.json found at /app/package.json");
  assert_eq!(error.path(), Path::new("/app/package.json"));
}
