use crate::error::Error;
use std::path::Path;

const AUDIO_EXTENSIONS: &[&str] = &["mp3", "m4a", "flac", "ogg", "wav", "wma"];
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "tiff", "tif"];

/// An encoded cover image lifted out of an audio file's metadata, plus the
/// MIME type the metadata declared for it, if any.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverArt {
    pub data: Vec<u8>,
    pub mime: Option<String>,
}

/// A capability for reading embedded cover art out of audio files.
///
/// Implementations parse an audio container's metadata and hand back the
/// first embedded picture as an encoded image buffer, which is then decoded
/// like any standalone image file. An audio file without a picture is the
/// distinct [`Error::NoCoverArt`] failure, never a decode error.
pub trait AudioCoverReader {
    fn read_cover(&self, path: &Path) -> Result<CoverArt, Error>;
}

/// An [`AudioCoverReader`] backed by the lofty tag parser.
#[cfg(feature = "audio")]
#[derive(Debug)]
pub struct LoftyCoverReader;

#[cfg(feature = "audio")]
impl AudioCoverReader for LoftyCoverReader {
    fn read_cover(&self, path: &Path) -> Result<CoverArt, Error> {
        use lofty::TaggedFileExt;

        let tagged = lofty::read_from_path(path)?;

        // take the first picture out of whichever tag carries one
        let picture = tagged
            .tags()
            .iter()
            .flat_map(|tag| tag.pictures())
            .next()
            .ok_or(Error::NoCoverArt)?;

        log::debug!(
            "found embedded picture: {} bytes, mime type {}",
            picture.data().len(),
            picture
                .mime_type()
                .map(|mime| mime.as_str())
                .unwrap_or("unknown")
        );

        Ok(CoverArt {
            data: picture.data().to_vec(),
            mime: picture.mime_type().map(|mime| mime.as_str().to_owned()),
        })
    }
}

/// The broad kind of input file, decided by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Audio,
}

/// Classify an input path as an image or an audio file by its extension.
///
/// Extensions outside both sets are rejected with
/// [`Error::UnsupportedFile`].
pub fn classify_path(path: &Path) -> Result<FileKind, Error> {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.to_ascii_lowercase())
        .unwrap_or_default();

    if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        Ok(FileKind::Image)
    } else if AUDIO_EXTENSIONS.contains(&extension.as_str()) {
        Ok(FileKind::Audio)
    } else {
        Err(Error::UnsupportedFile(extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_extension() {
        assert_eq!(classify_path(Path::new("cover.JPG")).unwrap(), FileKind::Image);
        assert_eq!(classify_path(Path::new("a/b/c.webp")).unwrap(), FileKind::Image);
        assert_eq!(classify_path(Path::new("song.mp3")).unwrap(), FileKind::Audio);
        assert_eq!(classify_path(Path::new("song.flac")).unwrap(), FileKind::Audio);
    }

    #[test]
    fn unknown_extensions_are_rejected() {
        assert!(matches!(
            classify_path(Path::new("notes.txt")),
            Err(Error::UnsupportedFile(_))
        ));
        assert!(matches!(
            classify_path(Path::new("no_extension")),
            Err(Error::UnsupportedFile(_))
        ));
    }
}
