use std::path::PathBuf;

use auto_external_utils::indexmap::FxIndexMap;
use serde::Deserialize;

/// The parts of a `package.json` that decide what is external. Map entries keep the order they
/// are declared in.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
  #[serde(skip)]
  pub path: PathBuf,
  pub name: Option<String>,
  #[serde(default)]
  pub dependencies: Option<FxIndexMap<String, String>>,
  #[serde(default)]
  pub peer_dependencies: Option<FxIndexMap<String, String>>,
}

impl PackageJson {
  #[must_use]
  pub fn with_path(mut self, path: PathBuf) -> Self {
    self.path = path;
    self
  }

  pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
    self.dependencies.iter().flat_map(|deps| deps.keys().map(String::as_str))
  }

  pub fn peer_dependency_names(&self) -> impl Iterator<Item = &str> {
    self.peer_dependencies.iter().flat_map(|deps| deps.keys().map(String::as_str))
  }
}

#[test]
fn test_keeps_declaration_order() {
  let package_json: PackageJson = serde_json::from_str(
    r#"{
      "name": "app",
      "dependencies": { "zod": "^3.0.0", "@babel/core": "^7.0.0", "lodash": "^4.0.0" },
      "peerDependencies": { "react": "*" },
      "devDependencies": { "jest": "*" }
    }"#,
  )
  .unwrap();

  assert_eq!(package_json.dependency_names().collect::<Vec<_>>(), ["zod", "@babel/core", "lodash"]);
  assert_eq!(package_json.peer_dependency_names().collect::<Vec<_>>(), ["react"]);
}

#[test]
fn test_missing_sections_are_empty() {
  let package_json: PackageJson = serde_json::from_str(r#"{ "name": "app" }"#).unwrap();
  assert_eq!(package_json.dependency_names().count(), 0);
  assert_eq!(package_json.peer_dependency_names().count(), 0);
}
