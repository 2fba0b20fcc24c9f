use std::{fmt::Display, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
  Esm,
  Cjs,
  Amd,
  Iife,
  Umd,
  System,
}

impl OutputFormat {
  /// Formats whose consumers load dependencies as globals (or through a loader config) instead of
  /// importing them by name, so dependencies are not externalized for them unless asked to.
  #[inline]
  pub fn expects_global_dependencies(self) -> bool {
    matches!(self, Self::Amd | Self::Iife | Self::Umd)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutputFormatError(pub String);

impl Display for ParseOutputFormatError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "Invalid value \"{}\" for option \"output.format\" - Valid values are \"amd\", \"cjs\", \"system\", \"es\", \"iife\" or \"umd\".",
      self.0
    )
  }
}

impl std::error::Error for ParseOutputFormatError {}

impl FromStr for OutputFormat {
  type Err = ParseOutputFormatError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "es" | "esm" | "module" => Ok(Self::Esm),
      "cjs" | "commonjs" => Ok(Self::Cjs),
      "amd" => Ok(Self::Amd),
      "iife" => Ok(Self::Iife),
      "umd" => Ok(Self::Umd),
      "system" | "systemjs" => Ok(Self::System),
      _ => Err(ParseOutputFormatError(s.to_string())),
    }
  }
}

#[test]
fn test_parse_output_format() {
  assert_eq!("es".parse(), Ok(OutputFormat::Esm));
  assert_eq!("commonjs".parse(), Ok(OutputFormat::Cjs));
  assert_eq!("systemjs".parse(), Ok(OutputFormat::System));
  assert_eq!("umd".parse(), Ok(OutputFormat::Umd));
  assert_eq!("xml".parse::<OutputFormat>(), Err(ParseOutputFormatError("xml".to_string())));
}

#[test]
fn test_expects_global_dependencies() {
  assert!(OutputFormat::Amd.expects_global_dependencies());
  assert!(OutputFormat::Iife.expects_global_dependencies());
  assert!(OutputFormat::Umd.expects_global_dependencies());
  assert!(!OutputFormat::Esm.expects_global_dependencies());
  assert!(!OutputFormat::Cjs.expects_global_dependencies());
  assert!(!OutputFormat::System.expects_global_dependencies());
}
