use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop an icon run.
///
/// `NotFound` is detected before any decoding happens. The other variants
/// come out of the decode-through-write sequence and keep the underlying
/// cause as their source.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("logo not found at {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode {filename} as PNG: {source}")]
    Encode {
        filename: String,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid icon target table: {0}")]
    InvalidTarget(String),
}

impl IconError {
    /// Static hints printed under the error line.
    pub fn troubleshooting(&self) -> &'static [&'static str] {
        match self {
            IconError::NotFound { .. } => &[
                "Place the source logo at public/logoimage.png",
                "Or point --public-dir at the directory that holds it",
            ],
            IconError::Decode { .. } => &[
                "Make sure this binary was built with PNG support (image crate `png` feature)",
                "Check that logoimage.png is a valid image file",
            ],
            IconError::Encode { .. } => &[
                "Make sure this binary was built with PNG support (image crate `png` feature)",
                "Check that the source image dimensions are sane",
            ],
            IconError::Write { .. } => &[
                "Check that the output directory exists and is writable",
                "Check that there is free space left on the device",
            ],
            IconError::InvalidTarget(_) => &[
                "Every icon target needs a non-zero size and a unique filename",
            ],
        }
    }
}
