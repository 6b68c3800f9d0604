use std::path::PathBuf;

mod errors_tests;

/// Temp file path unique to this test process
pub(crate) fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("rectkit_{}_{}", std::process::id(), name))
}
