//! Texture loading from disk.
//!
//! Assets are optional: the game must come up even when no asset files
//! are shipped next to the binary, so callers are expected to fall back
//! to a generated placeholder when loading fails.

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    path::{Path, PathBuf},
};

use image::ImageReader;

/// Decoded RGBA8 pixel data, ready for upload into a texture.
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

#[derive(Debug)]
pub enum AssetError {
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl Display for AssetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "cannot open asset {}: {source}", path.display())
            }
            Self::Decode { path, source } => {
                write!(f, "cannot decode asset {}: {source}", path.display())
            }
        }
    }
}

impl Error for AssetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
        }
    }
}

/// Loads an image file and converts it to RGBA8.
///
/// # Errors
/// Returns an error when the file cannot be read or is not a decodable
/// image format.
pub fn load_rgba(path: &Path) -> Result<ImageData, AssetError> {
    let reader = ImageReader::open(path).map_err(|source| AssetError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let image = reader
        .decode()
        .map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgba8();

    let (width, height) = image.dimensions();
    Ok(ImageData {
        width,
        height,
        pixels: image.into_raw(),
    })
}
