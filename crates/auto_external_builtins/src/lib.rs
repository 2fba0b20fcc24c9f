//! The registry of Node.js built-in modules.
//!
//! Each module records the first Node.js release that shipped it and, for the few that were
//! dropped, the release that removed it. Names are stored without the `node:` prefix. Modules
//! that can only be imported with the prefix, such as `node:test`, are known but never listed.

mod node_version;

use semver::Version;

pub use crate::node_version::parse_node_version;

type NodeRelease = (u64, u64, u64);

struct BuiltinModule {
  name: &'static str,
  since: NodeRelease,
  removed_in: Option<NodeRelease>,
  prefix_only: bool,
}

impl BuiltinModule {
  const fn new(name: &'static str, since: NodeRelease) -> Self {
    Self { name, since, removed_in: None, prefix_only: false }
  }

  const fn removed_in(self, release: NodeRelease) -> Self {
    Self { removed_in: Some(release), ..self }
  }

  const fn prefix_only(self) -> Self {
    Self { prefix_only: true, ..self }
  }

  fn is_available_in(&self, version: &Version) -> bool {
    let introduced = release_version(self.since) <= *version;
    let removed = self.removed_in.is_some_and(|release| *version >= release_version(release));
    introduced && !removed
  }
}

const fn v(major: u64, minor: u64, patch: u64) -> NodeRelease {
  (major, minor, patch)
}

fn release_version((major, minor, patch): NodeRelease) -> Version {
  Version::new(major, minor, patch)
}

static NODE_BUILTINS: &[BuiltinModule] = &[
  BuiltinModule::new("assert", v(0, 0, 0)),
  BuiltinModule::new("buffer", v(0, 0, 0)),
  BuiltinModule::new("child_process", v(0, 0, 0)),
  BuiltinModule::new("cluster", v(0, 0, 0)),
  BuiltinModule::new("console", v(0, 0, 0)),
  BuiltinModule::new("constants", v(0, 0, 0)),
  BuiltinModule::new("crypto", v(0, 0, 0)),
  BuiltinModule::new("dgram", v(0, 0, 0)),
  BuiltinModule::new("dns", v(0, 0, 0)),
  BuiltinModule::new("domain", v(0, 0, 0)),
  BuiltinModule::new("events", v(0, 0, 0)),
  BuiltinModule::new("freelist", v(0, 0, 0)).removed_in(v(6, 0, 0)),
  BuiltinModule::new("fs", v(0, 0, 0)),
  BuiltinModule::new("http", v(0, 0, 0)),
  BuiltinModule::new("https", v(0, 0, 0)),
  BuiltinModule::new("module", v(0, 0, 0)),
  BuiltinModule::new("net", v(0, 0, 0)),
  BuiltinModule::new("os", v(0, 0, 0)),
  BuiltinModule::new("path", v(0, 0, 0)),
  BuiltinModule::new("punycode", v(0, 0, 0)),
  BuiltinModule::new("querystring", v(0, 0, 0)),
  BuiltinModule::new("readline", v(0, 0, 0)),
  BuiltinModule::new("repl", v(0, 0, 0)),
  BuiltinModule::new("stream", v(0, 0, 0)),
  BuiltinModule::new("string_decoder", v(0, 0, 0)),
  BuiltinModule::new("sys", v(0, 0, 0)),
  BuiltinModule::new("timers", v(0, 0, 0)),
  BuiltinModule::new("tls", v(0, 0, 0)),
  BuiltinModule::new("tty", v(0, 0, 0)),
  BuiltinModule::new("url", v(0, 0, 0)),
  BuiltinModule::new("util", v(0, 0, 0)),
  BuiltinModule::new("vm", v(0, 0, 0)),
  BuiltinModule::new("zlib", v(0, 0, 0)),
  BuiltinModule::new("v8", v(1, 0, 0)),
  BuiltinModule::new("process", v(1, 1, 0)),
  BuiltinModule::new("inspector", v(8, 0, 0)),
  BuiltinModule::new("async_hooks", v(8, 1, 0)),
  BuiltinModule::new("http2", v(8, 4, 0)),
  BuiltinModule::new("perf_hooks", v(8, 5, 0)),
  BuiltinModule::new("trace_events", v(10, 0, 0)),
  BuiltinModule::new("worker_threads", v(12, 0, 0)),
  BuiltinModule::new("wasi", v(13, 3, 0)),
  BuiltinModule::new("fs/promises", v(14, 0, 0)),
  BuiltinModule::new("assert/strict", v(15, 0, 0)),
  BuiltinModule::new("dns/promises", v(15, 0, 0)),
  BuiltinModule::new("stream/promises", v(15, 0, 0)),
  BuiltinModule::new("timers/promises", v(15, 0, 0)),
  BuiltinModule::new("diagnostics_channel", v(15, 1, 0)),
  BuiltinModule::new("path/posix", v(15, 3, 0)),
  BuiltinModule::new("path/win32", v(15, 3, 0)),
  BuiltinModule::new("util/types", v(15, 3, 0)),
  BuiltinModule::new("stream/web", v(16, 5, 0)),
  BuiltinModule::new("stream/consumers", v(16, 7, 0)),
  BuiltinModule::new("readline/promises", v(17, 0, 0)),
  BuiltinModule::new("test", v(18, 0, 0)).prefix_only(),
  BuiltinModule::new("test/reporters", v(19, 9, 0)).prefix_only(),
  BuiltinModule::new("sea", v(20, 12, 0)).prefix_only(),
  BuiltinModule::new("sqlite", v(22, 5, 0)).prefix_only(),
];

/// Built-in module names, in registry order.
///
/// With `None` this is the built-in set of the current runtime, i.e. everything that has not
/// been removed. With a version, only the modules that version actually shipped are returned.
pub fn builtin_modules(version: Option<&Version>) -> Vec<&'static str> {
  NODE_BUILTINS
    .iter()
    .filter(|module| !module.prefix_only)
    .filter(|module| match version {
      Some(version) => module.is_available_in(version),
      None => module.removed_in.is_none(),
    })
    .map(|module| module.name)
    .collect()
}

/// Whether `name` is a built-in module of any known Node.js release. Accepts the `node:` prefix,
/// which prefix-only modules require.
pub fn is_builtin_module(name: &str) -> bool {
  let (bare, prefixed) = match name.strip_prefix("node:") {
    Some(bare) => (bare, true),
    None => (name, false),
  };
  NODE_BUILTINS.iter().any(|module| module.name == bare && (prefixed || !module.prefix_only))
}
