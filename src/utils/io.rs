// src/utils/io.rs
use std::path::PathBuf;

/// Get the application data directory
pub fn get_app_data_dir() -> Option<PathBuf> {
    if let Some(proj_dirs) = directories::ProjectDirs::from("com", "kairos", "kairos") {
        Some(proj_dirs.data_dir().to_path_buf())
    } else {
        log::error!("Could not determine data directory");
        None
    }
}
