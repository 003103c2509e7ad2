//! Image selection for the analyze flow: reading, validation, and probing
//! of the intrinsic dimensions the overlay scales against.
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::ImageFormat;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Maximum accepted image size (10MB), matching the backend's limit.
const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ImageSourceError {
  #[error("no file selected: {0}")]
  NotFound(String),
  #[error("image data is empty")]
  Empty,
  #[error("image is too large: {0} bytes (max: {1} bytes)")]
  TooLarge(usize, usize),
  #[error("failed to decode image: {0}")]
  DecodeFailed(String),
}

/// The user-chosen image: raw bytes plus intrinsic dimensions.
///
/// At most one selection is active at a time; loading a new file replaces
/// the previous selection rather than merging with it.
#[derive(Debug, Clone)]
pub struct SelectedImage {
  pub path: PathBuf,
  pub bytes: Vec<u8>,
  pub width: u32,
  pub height: u32,
  pub format: ImageFormat,
}

impl SelectedImage {
  /// Reads and validates an image file. Fails without touching the network,
  /// so an unusable selection never produces a request.
  pub async fn load(path: &Path) -> Result<Self, ImageSourceError> {
    let bytes = tokio::fs::read(path)
      .await
      .map_err(|e| ImageSourceError::NotFound(format!("{}: {}", path.display(), e)))?;

    if bytes.is_empty() {
      return Err(ImageSourceError::Empty);
    }
    if bytes.len() > MAX_IMAGE_SIZE {
      return Err(ImageSourceError::TooLarge(bytes.len(), MAX_IMAGE_SIZE));
    }

    let format = image::guess_format(&bytes)
      .map_err(|_| ImageSourceError::DecodeFailed("unrecognized image format".to_string()))?;
    let img = image::load_from_memory_with_format(&bytes, format)
      .map_err(|e| ImageSourceError::DecodeFailed(e.to_string()))?;

    Ok(Self {
      path: path.to_path_buf(),
      width: img.width(),
      height: img.height(),
      bytes,
      format,
    })
  }

  /// Standard base64 of the raw bytes, without a data-URI prefix.
  pub fn to_base64(&self) -> String {
    STANDARD.encode(&self.bytes)
  }

  /// MIME type for embedding the image in a data URI.
  pub fn mime_type(&self) -> &'static str {
    self.format.to_mime_type()
  }
}
