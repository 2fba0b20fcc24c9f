use semver::Version;

/// Parses a Node.js version the way `process.version` spells it: surrounding whitespace and a
/// leading `v` or `=` are tolerated. Anything else that is not a full `major.minor.patch`
/// version yields `None`.
pub fn parse_node_version(raw: &str) -> Option<Version> {
  let trimmed = raw.trim();
  let trimmed = trimmed.strip_prefix('=').unwrap_or(trimmed).trim_start();
  let trimmed = trimmed.strip_prefix(['v', 'V']).unwrap_or(trimmed);
  Version::parse(trimmed).ok()
}

#[test]
fn test_parse_node_version() {
  assert_eq!(parse_node_version("6.0.0"), Some(Version::new(6, 0, 0)));
  assert_eq!(parse_node_version(" v18.12.1 "), Some(Version::new(18, 12, 1)));
  assert_eq!(parse_node_version("=8.4.0"), Some(Version::new(8, 4, 0)));
  assert_eq!(parse_node_version("6"), None);
  assert_eq!(parse_node_version("latest"), None);
  assert_eq!(parse_node_version(""), None);
}
