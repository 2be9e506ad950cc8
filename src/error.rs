use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image")]
    Image(#[from] image::ImageError),

    #[cfg(feature = "audio")]
    #[error("failed to parse audio file")]
    Audio(#[from] lofty::LoftyError),

    #[error("no cover image found in the audio file")]
    NoCoverArt,

    #[error("unsupported file type: {0:?}")]
    UnsupportedFile(String),

    #[error("resolution must be greater than zero, got {0}")]
    InvalidResolution(f32),
}
