use std::path::PathBuf;

pub fn default_entry() -> String {
    "mod.js".to_string()
}

pub fn default_name() -> String {
    "tinycolor".to_string()
}

pub fn default_npm_dir() -> PathBuf {
    PathBuf::from("npm")
}

pub fn default_test_source() -> PathBuf {
    PathBuf::from("test.js")
}

pub fn default_legacy_copies() -> bool {
    true
}

pub fn default_metadata() -> Vec<String> {
    vec!["README.md".to_string(), "LICENSE".to_string()]
}
