pub mod txt;

use std::fs;
use std::path::Path;

use crate::errors::AppError;

pub use txt::TxtStore;

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
