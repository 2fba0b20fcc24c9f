use std::path::PathBuf;

use clap::Args;

use auto_external::OutputFormat;

#[derive(Args)]
pub struct PluginArgs {
  /// A JSON file with the plugin options, e.g. `{ "builtins": "6.0.0" }`. Flags override it.
  #[clap(long)]
  pub config: Option<PathBuf>,

  #[clap(long)]
  pub cwd: Option<PathBuf>,

  /// A package.json file or the directory containing one.
  #[clap(long, short = 'p')]
  pub package_path: Option<PathBuf>,

  #[clap(long, conflicts_with = "builtins_version")]
  pub no_builtins: bool,

  /// Only include the built-ins shipped by this Node.js version.
  #[clap(long)]
  pub builtins_version: Option<String>,

  /// Force dependencies in or out instead of deciding by output format.
  #[clap(long)]
  pub dependencies: Option<bool>,

  #[clap(long)]
  pub no_peer_dependencies: bool,
}

#[derive(Args)]
pub struct OutputArgs {
  #[clap(long, short = 'f')]
  pub format: Option<OutputFormat>,

  /// Output formats of a multi-output pass. Takes precedence over `--format`.
  #[clap(long = "target", action = clap::ArgAction::Append)]
  pub targets: Option<Vec<OutputFormat>>,
}

#[derive(Args)]
pub struct ExternalArgs {
  /// Ids the user already marks as external.
  #[clap(long, short = 'e', action = clap::ArgAction::Append)]
  pub external: Option<Vec<String>>,

  /// Ask whether these ids (bare names or resolved paths) are external instead of printing the
  /// list. Switches `--external` to a predicate.
  #[clap(long, short = 'c', action = clap::ArgAction::Append)]
  pub check: Option<Vec<String>>,

  #[clap(long, short = 's')]
  pub silent: bool,
}
