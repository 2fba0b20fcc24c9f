use serde::Deserialize;

/// Which runtime built-in modules to treat as external.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "RawBuiltins")]
pub enum Builtins {
  Disabled,
  /// The built-ins of the current runtime.
  #[default]
  Current,
  /// The built-ins shipped by a specific runtime version, e.g. `"6.0.0"`.
  Version(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBuiltins {
  Enabled(bool),
  Version(String),
}

impl From<RawBuiltins> for Builtins {
  fn from(raw: RawBuiltins) -> Self {
    match raw {
      RawBuiltins::Enabled(true) => Self::Current,
      RawBuiltins::Enabled(false) => Self::Disabled,
      RawBuiltins::Version(version) => Self::Version(version),
    }
  }
}

impl From<bool> for Builtins {
  fn from(enabled: bool) -> Self {
    RawBuiltins::Enabled(enabled).into()
  }
}

#[test]
fn test_deserialize_builtins() {
  assert_eq!(serde_json::from_str::<Builtins>("true").unwrap(), Builtins::Current);
  assert_eq!(serde_json::from_str::<Builtins>("false").unwrap(), Builtins::Disabled);
  assert_eq!(
    serde_json::from_str::<Builtins>(r#""6.0.0""#).unwrap(),
    Builtins::Version("6.0.0".to_string())
  );
  assert!(serde_json::from_str::<Builtins>("6").is_err());
}
