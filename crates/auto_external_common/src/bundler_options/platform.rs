#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
  Node,
  Browser,
  Neutral,
}
