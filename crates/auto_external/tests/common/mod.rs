use std::{
  fs,
  path::{Path, PathBuf},
};

use auto_external::{builtin_modules, parse_node_version};
use tempfile::TempDir;

pub const PACKAGE_JSON: &str = r#"{
  "name": "fixture",
  "dependencies": { "lodash": "^4.17.21", "@babel/core": "^7.24.0" },
  "peerDependencies": { "react": "^18.0.0" },
  "devDependencies": { "jest": "^29.0.0" }
}"#;

pub const CUSTOM_PACKAGE_JSON: &str = r#"{
  "name": "custom",
  "dependencies": { "lodash": "^4.17.21", "@babel/core": "^7.24.0" }
}"#;

/// A project on disk with `lodash`, `@babel/core` and `react` installed.
pub struct Fixture {
  dir: TempDir,
}

impl Fixture {
  pub fn new() -> Self {
    let fixture = Self { dir: tempfile::tempdir().unwrap() };

    fixture.write("package.json", PACKAGE_JSON);
    fixture.write("fixtures/pkg.json", CUSTOM_PACKAGE_JSON);
    fixture.write("src/index.js", "import _ from 'lodash';");

    fixture.write("node_modules/lodash/package.json", r#"{ "main": "lodash.js" }"#);
    fixture.write("node_modules/lodash/lodash.js", "");
    fixture.write("node_modules/lodash/fp.js", "");
    fixture.write("node_modules/lodash/fp/map.js", "");

    fixture.write(
      "node_modules/@babel/core/package.json",
      r#"{ "name": "@babel/core", "main": "lib/index.js" }"#,
    );
    fixture.write("node_modules/@babel/core/lib/index.js", "");
    fixture.write("node_modules/@babel/core/lib/parse.js", "");

    fixture.write("node_modules/react/package.json", r#"{ "name": "react" }"#);
    fixture.write("node_modules/react/index.js", "");

    fixture.write("node_modules/lodash-es/package.json", r#"{ "name": "lodash-es" }"#);
    fixture.write("node_modules/lodash-es/index.js", "");

    fixture
  }

  pub fn root(&self) -> &Path {
    self.dir.path()
  }

  pub fn path(&self, relative: &str) -> PathBuf {
    self.root().join(relative)
  }

  pub fn write(&self, relative: &str, content: &str) {
    let path = self.path(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
  }
}

pub fn strings(ids: &[&str]) -> Vec<String> {
  ids.iter().map(ToString::to_string).collect()
}

pub fn concat(groups: &[&[&str]]) -> Vec<String> {
  groups.iter().flat_map(|group| strings(group)).collect()
}

pub fn current_builtins() -> Vec<&'static str> {
  builtin_modules(None)
}

pub fn node_6_builtins() -> Vec<&'static str> {
  builtin_modules(parse_node_version("6.0.0").as_ref())
}
