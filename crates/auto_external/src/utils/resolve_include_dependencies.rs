use auto_external_common::{InputOptions, NormalizedAutoExternalOptions, OutputFormat};

/// Whether `dependencies` of the manifest are externalized in this pass.
///
/// An explicit `dependencies` option always wins. Otherwise dependencies are left out as soon as
/// any output of the pass uses a format that expects them as globals. `targets` is authoritative
/// when present, `format` is only consulted without it.
pub fn resolve_include_dependencies(
  options: &NormalizedAutoExternalOptions,
  input: &InputOptions,
) -> bool {
  if let Some(dependencies) = options.dependencies {
    return dependencies;
  }

  let expects_globals = |format: Option<OutputFormat>| {
    format.is_some_and(OutputFormat::expects_global_dependencies)
  };

  let any_global_format = match &input.targets {
    Some(targets) => targets.iter().any(|target| expects_globals(target.format)),
    None => expects_globals(input.format),
  };

  !any_global_format
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use auto_external_common::{Builtins, OutputTarget};

  use super::*;

  fn options(dependencies: Option<bool>) -> NormalizedAutoExternalOptions {
    NormalizedAutoExternalOptions {
      builtins: Builtins::Current,
      dependencies,
      peer_dependencies: true,
      package_path: None,
      cwd: PathBuf::from("/app"),
    }
  }

  fn with_format(format: OutputFormat) -> InputOptions {
    InputOptions { format: Some(format), ..Default::default() }
  }

  fn with_targets(formats: &[OutputFormat]) -> InputOptions {
    InputOptions {
      targets: Some(formats.iter().copied().map(OutputTarget::new).collect()),
      ..Default::default()
    }
  }

  #[test]
  fn no_format_includes_dependencies() {
    assert!(resolve_include_dependencies(&options(None), &InputOptions::default()));
    assert!(resolve_include_dependencies(&options(None), &with_targets(&[])));
  }

  #[test]
  fn global_formats_exclude_dependencies() {
    for format in [OutputFormat::Amd, OutputFormat::Iife, OutputFormat::Umd] {
      assert!(!resolve_include_dependencies(&options(None), &with_format(format)));
    }
    for format in [OutputFormat::Esm, OutputFormat::Cjs, OutputFormat::System] {
      assert!(resolve_include_dependencies(&options(None), &with_format(format)));
    }
  }

  #[test]
  fn any_global_target_excludes_dependencies() {
    let input = with_targets(&[OutputFormat::Esm, OutputFormat::Cjs, OutputFormat::Umd]);
    assert!(!resolve_include_dependencies(&options(None), &input));

    let input = with_targets(&[OutputFormat::Esm, OutputFormat::Cjs]);
    assert!(resolve_include_dependencies(&options(None), &input));
  }

  #[test]
  fn targets_take_precedence_over_format() {
    let input = InputOptions {
      format: Some(OutputFormat::Iife),
      ..with_targets(&[OutputFormat::Esm])
    };
    assert!(resolve_include_dependencies(&options(None), &input));

    let input = InputOptions {
      format: Some(OutputFormat::Esm),
      ..with_targets(&[OutputFormat::Amd])
    };
    assert!(!resolve_include_dependencies(&options(None), &input));
  }

  #[test]
  fn explicit_option_ignores_formats() {
    assert!(resolve_include_dependencies(&options(Some(true)), &with_format(OutputFormat::Umd)));
    assert!(!resolve_include_dependencies(&options(Some(false)), &with_format(OutputFormat::Esm)));
    assert!(!resolve_include_dependencies(&options(Some(false)), &InputOptions::default()));
  }
}
