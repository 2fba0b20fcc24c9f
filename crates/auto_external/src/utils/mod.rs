pub mod assemble_own_externals;
pub mod merge_external;
pub mod normalize_options;
pub mod resolve_include_dependencies;
