use std::{fmt::Debug, sync::Arc};

pub type ExternalFn = dyn Fn(&str) -> bool + Send + Sync;

/// Which module ids the bundler leaves unresolved.
#[derive(Clone)]
pub enum External {
  ArrayOfIds(Vec<String>),
  Fn(Arc<ExternalFn>),
}

impl External {
  pub fn from_fn(f: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
    Self::Fn(Arc::new(f))
  }

  /// Asks the decision about a single id, whichever shape it has.
  pub fn is_external(&self, id: &str) -> bool {
    match self {
      Self::ArrayOfIds(ids) => ids.iter().any(|external| external == id),
      Self::Fn(f) => f(id),
    }
  }

  pub fn as_array_of_ids(&self) -> Option<&[String]> {
    match self {
      Self::ArrayOfIds(ids) => Some(ids),
      Self::Fn(_) => None,
    }
  }
}

impl Debug for External {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::ArrayOfIds(ids) => f.debug_tuple("ArrayOfIds").field(ids).finish(),
      Self::Fn(_) => f.write_str("Fn(...)"),
    }
  }
}

impl From<Vec<String>> for External {
  fn from(ids: Vec<String>) -> Self {
    Self::ArrayOfIds(ids)
  }
}

#[test]
fn test_is_external() {
  let array = External::from(vec!["react".to_string()]);
  assert!(array.is_external("react"));
  assert!(!array.is_external("react-dom"));
  assert_eq!(array.as_array_of_ids(), Some(&["react".to_string()][..]));

  let predicate = External::from_fn(|id| id.starts_with("@scope/"));
  assert!(predicate.is_external("@scope/name"));
  assert!(!predicate.is_external("scope"));
  assert!(predicate.as_array_of_ids().is_none());
  assert_eq!(format!("{predicate:?}"), "Fn(...)");
}
