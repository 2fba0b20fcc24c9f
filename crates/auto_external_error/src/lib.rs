mod manifest_error;

use std::ops::{Deref, DerefMut};

pub use crate::manifest_error::ManifestError;

#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

impl From<ManifestError> for BuildError {
  fn from(error: ManifestError) -> Self {
    Self(vec![error.into()])
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn test_manifest_error_keeps_its_type() {
  use std::path::PathBuf;

  let path = PathBuf::from("/app/package.json");
  let error = BuildError::from(ManifestError::NotFound { path });
  assert_eq!(error.len(), 1);
  assert!(matches!(error[0].downcast_ref::<ManifestError>(), Some(ManifestError::NotFound { .. })));
}
