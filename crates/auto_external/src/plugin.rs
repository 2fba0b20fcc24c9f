use std::{borrow::Cow, fmt::Debug};

use auto_external_common::InputOptions;
use auto_external_error::BuildResult;

pub trait Plugin: Debug + Send + Sync {
  fn name(&self) -> Cow<'static, str>;

  /// Called once per build pass, before anything is resolved. The returned options replace the
  /// ones passed in.
  fn options(&self, options: InputOptions) -> BuildResult<InputOptions> {
    Ok(options)
  }
}
