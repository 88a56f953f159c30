//! Image upload and export on the local filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, Image, ImageFormat};

/// Read an image from disk, enforcing the upload size limit and accepted formats.
pub fn load_image_file(path: &Path, max_bytes: u64) -> Result<Image, AppError> {
    let size = fs::metadata(path)?.len();
    if size > max_bytes {
        return Err(AppError::ImageTooLarge { size, limit: max_bytes });
    }

    let bytes = fs::read(path)?;
    match ImageFormat::sniff(&bytes) {
        Some(format) if ImageFormat::UPLOADABLE.contains(&format) => Ok(Image::new(format, bytes)),
        _ => Err(AppError::UnsupportedImage(path.display().to_string())),
    }
}

/// Download file name embedding the given epoch-millis time.
pub fn export_file_name(epoch_millis: i64, format: ImageFormat) -> String {
    format!("imagelab-edit-{}.{}", epoch_millis, format.extension())
}

/// Write `image` into `dir` under a time-stamped name and return the path.
pub fn export_image(image: &Image, dir: &Path) -> Result<PathBuf, AppError> {
    fs::create_dir_all(dir)?;
    let name = export_file_name(chrono::Utc::now().timestamp_millis(), image.format());
    let path = dir.join(name);
    fs::write(&path, image.bytes())?;
    tracing::debug!(path = %path.display(), "Exported image");
    Ok(path)
}
