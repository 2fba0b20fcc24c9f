pub mod package_json;
