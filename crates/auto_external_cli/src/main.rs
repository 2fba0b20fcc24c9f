mod args;

use std::{fs, process::ExitCode};

use ansi_term::Colour;
use anyhow::Context;
use args::{ExternalArgs, OutputArgs, PluginArgs};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use auto_external::{
  AutoExternalOptions, AutoExternalPlugin, Builtins, External, InputOptions, OutputTarget, Plugin,
};

#[derive(Parser)]
#[command(version, about = "Print which module ids a bundle should leave external", long_about = None)]
struct Commands {
  #[clap(flatten)]
  plugin: PluginArgs,

  #[clap(flatten)]
  output: OutputArgs,

  #[clap(flatten)]
  external: ExternalArgs,
}

fn load_options(args: &PluginArgs) -> anyhow::Result<AutoExternalOptions> {
  let mut options = match &args.config {
    Some(config) => {
      let content = fs::read_to_string(config)
        .with_context(|| format!("Failed to read config {}", config.display()))?;
      serde_json::from_str::<AutoExternalOptions>(&content)
        .with_context(|| format!("Invalid config {}", config.display()))?
    }
    None => AutoExternalOptions::default(),
  };

  if args.no_builtins {
    options.builtins = Some(Builtins::Disabled);
  } else if let Some(version) = &args.builtins_version {
    options.builtins = Some(Builtins::Version(version.clone()));
  }

  if args.dependencies.is_some() {
    options.dependencies = args.dependencies;
  }

  if args.no_peer_dependencies {
    options.peer_dependencies = Some(false);
  }

  if args.package_path.is_some() {
    options.package_path.clone_from(&args.package_path);
  }

  Ok(options)
}

fn print_verdicts(external: &External, ids: &[String]) {
  let width = ids.iter().map(String::len).max().unwrap_or_default();

  for id in ids {
    let verdict = if external.is_external(id) {
      Colour::Cyan.paint("external")
    } else {
      Colour::White.dimmed().paint("bundled")
    };
    println!("{id:width$} {verdict}");
  }
}

fn run(args: Commands) -> anyhow::Result<()> {
  let options = load_options(&args.plugin)?;
  let cwd = match args.plugin.cwd {
    Some(cwd) => cwd,
    None => std::env::current_dir().context("Failed to get current dir")?,
  };

  let plugin = AutoExternalPlugin::new(options, cwd);

  let user_ids = args.external.external.unwrap_or_default();
  let external = match &args.external.check {
    Some(_) => External::from_fn(move |id| user_ids.iter().any(|user_id| user_id == id)),
    None => External::ArrayOfIds(user_ids),
  };

  let input = InputOptions {
    format: args.output.format,
    targets: args
      .output
      .targets
      .map(|formats| formats.into_iter().map(OutputTarget::new).collect()),
    external: Some(external),
    ..Default::default()
  };

  let resolved = match plugin.options(input) {
    Ok(resolved) => resolved,
    Err(errors) => {
      let mut errors = errors.0.into_iter();
      let first = errors.next().unwrap_or_else(|| anyhow::anyhow!("The options hook failed"));
      for error in errors {
        tracing::error!("{error:#}");
      }
      return Err(first);
    }
  };
  let external = resolved.external.context("The options hook did not set `external`")?;

  if args.external.silent {
    return Ok(());
  }

  if let Some(ids) = &args.external.check {
    print_verdicts(&external, ids);
  } else if let Some(ids) = external.as_array_of_ids() {
    println!("{}", serde_json::to_string_pretty(ids)?);
  }

  Ok(())
}

fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_env("AUTO_EXTERNAL_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
    )
    .with_writer(std::io::stderr)
    .init();

  let args = Commands::parse();

  match run(args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(error) => {
      eprintln!("{} {error:#}", Colour::Red.paint("Error:"));
      ExitCode::FAILURE
    }
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use auto_external::OutputFormat;
  use clap::Parser;

  use super::*;

  #[test]
  fn flags_override_defaults() {
    let args = Commands::parse_from([
      "auto-external",
      "--builtins-version",
      "6.0.0",
      "--dependencies",
      "false",
      "--no-peer-dependencies",
      "--package-path",
      "packages/app",
    ]);
    let options = load_options(&args.plugin).unwrap();

    assert_eq!(options.builtins, Some(Builtins::Version("6.0.0".to_string())));
    assert_eq!(options.dependencies, Some(false));
    assert_eq!(options.peer_dependencies, Some(false));
    assert_eq!(options.package_path, Some(PathBuf::from("packages/app")));
  }

  #[test]
  fn format_aliases() {
    let args = Commands::parse_from(["auto-external", "--format", "es", "--target", "commonjs"]);
    assert_eq!(args.output.format, Some(OutputFormat::Esm));
    assert_eq!(args.output.targets, Some(vec![OutputFormat::Cjs]));
  }

  #[test]
  fn unknown_format_is_rejected() {
    let error = Commands::try_parse_from(["auto-external", "--format", "xml"]).err().unwrap();
    assert!(error.to_string().contains("Invalid value \"xml\" for option \"output.format\""));
  }

  #[test]
  fn no_builtins_conflicts_with_version() {
    assert!(Commands::try_parse_from([
      "auto-external",
      "--no-builtins",
      "--builtins-version",
      "6.0.0"
    ])
    .is_err());
  }
}
