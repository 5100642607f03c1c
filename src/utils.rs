use std::path::PathBuf;

/// Path of the debug log written when `--debug` is set.
pub fn get_debug_log_path() -> PathBuf {
    std::env::temp_dir().join("flicktui-debug.log")
}
