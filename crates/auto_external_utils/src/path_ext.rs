use std::path::{Path, PathBuf};

use sugar_path::SugarPath;

pub trait PathExt {
  /// The directory a resolved module file lives in.
  ///
  /// Bare names like `fs` have no parent directory and yield an empty path.
  fn containing_dir(&self) -> &Path;

  /// Whether `self` is `dir` or sits somewhere below it. The comparison is done on whole path
  /// components, so `/a/lodash-es` is not considered to be inside `/a/lodash`.
  fn is_within(&self, dir: &Path) -> bool;

  /// Joins `self` onto `base` unless it is already absolute, and normalizes the result.
  fn absolutize_from(&self, base: &Path) -> PathBuf;
}

impl PathExt for Path {
  fn containing_dir(&self) -> &Path {
    self.parent().unwrap_or_else(|| Path::new(""))
  }

  fn is_within(&self, dir: &Path) -> bool {
    self.starts_with(dir)
  }

  fn absolutize_from(&self, base: &Path) -> PathBuf {
    if self.is_absolute() {
      self.normalize()
    } else {
      base.join(self).normalize()
    }
  }
}

#[test]
fn test_containing_dir() {
  let root = Path::new("/project/node_modules");
  assert_eq!(root.join("lodash/lodash.js").containing_dir(), root.join("lodash"));
  assert_eq!(Path::new("fs").containing_dir(), Path::new(""));
}

#[test]
fn test_is_within() {
  let lodash = Path::new("/project/node_modules/lodash");
  assert!(Path::new("/project/node_modules/lodash").is_within(lodash));
  assert!(Path::new("/project/node_modules/lodash/fp").is_within(lodash));
  assert!(!Path::new("/project/node_modules/lodash-es").is_within(lodash));
  assert!(!Path::new("/project/node_modules").is_within(lodash));
}

#[test]
fn test_absolutize_from() {
  let cwd = Path::new("/project/packages/app");
  assert_eq!(
    Path::new("../lib/package.json").absolutize_from(cwd),
    Path::new("/project/packages/lib/package.json")
  );
  assert_eq!(
    Path::new("/elsewhere/./package.json").absolutize_from(cwd),
    Path::new("/elsewhere/package.json")
  );
}
