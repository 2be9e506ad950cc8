//! A library to extract a representative color palette from an image.
//!
//! Pixels are bucketed into coarse color cells, the cells are ranked by how
//! many pixels they received, and the most frequent sufficiently-distinct
//! colors become the palette. Images are usually resampled to a small working
//! resolution first, and cover art embedded in audio file metadata can serve
//! as the input image.
//!
//! ```no_run
//! use palex::Palette;
//!
//! let palette = Palette::from_path("cover.jpg")?
//!     .max_colors(3)
//!     .exclude_black_white()
//!     .generate()?;
//!
//! for entry in palette.entries() {
//!     println!("{} ({}%)", entry.hex(), entry.percentage());
//! }
//! # Ok::<(), palex::Error>(())
//! ```

mod cover;
mod entry;
mod error;
mod filter;
mod quantizer;
mod resample;

/// How many colors a palette holds unless configured otherwise.
pub const DEFAULT_MAX_COLORS: usize = 5;
/// The resolution used unless configured otherwise: the longer side of the
/// working image becomes 100 pixels.
pub const DEFAULT_RESOLUTION: f32 = 100.0;

#[cfg(feature = "audio")]
pub use crate::cover::LoftyCoverReader;
pub use crate::{
    cover::{classify_path, AudioCoverReader, CoverArt, FileKind},
    entry::PaletteEntry,
    error::Error,
    filter::{BlackWhiteFilter, Filter},
    quantizer::{MIN_COLOR_DISTANCE, QUANTIZE_STEP},
    resample::{target_dimensions, Kernel},
};
pub use image;

use crate::quantizer::Quantizer;
use image::RgbaImage;
use std::path::Path;

/// The colors extracted from a single image, most frequent first.
///
/// Holds at most the configured number of entries; fewer when the image did
/// not contain enough distinct-enough colors, and none at all only when no
/// valid pixels existed (a fully transparent image, or everything filtered
/// out).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    valid_pixels: u64,
}

/// A builder for extracting a [`Palette`] out of one image.
///
/// All options live for a single [`generate`](PaletteBuilder::generate) call;
/// nothing is shared or cached across extractions.
pub struct PaletteBuilder {
    image: RgbaImage,
    max_colors: usize,
    resolution: f32,
    kernel: Kernel,
    filters: Vec<Box<dyn Filter>>,
}

impl Palette {
    /// Start building a palette from a decoded RGBA image.
    pub fn from_image(image: RgbaImage) -> PaletteBuilder {
        PaletteBuilder::from_image(image)
    }

    /// Start building a palette from an image file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<PaletteBuilder, Error> {
        PaletteBuilder::from_path(path)
    }

    /// The extracted colors, most frequent first.
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// The most frequent extracted color, if any valid pixels existed.
    pub fn dominant(&self) -> Option<PaletteEntry> {
        self.entries.first().copied()
    }

    /// How many pixels passed the alpha and color filters. Entry percentages
    /// are shares of this total.
    pub fn valid_pixels(&self) -> u64 {
        self.valid_pixels
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl PaletteBuilder {
    pub fn from_image(image: RgbaImage) -> Self {
        Self {
            image,
            max_colors: DEFAULT_MAX_COLORS,
            resolution: DEFAULT_RESOLUTION,
            kernel: Kernel::default(),
            filters: Vec::new(),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let reader = image::io::Reader::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::from_image(reader.decode()?.to_rgba8()))
    }

    /// Start building a palette from cover art read out of an audio file.
    ///
    /// See [`AudioCoverReader`] for obtaining the cover buffer.
    pub fn from_cover_art(cover: &CoverArt) -> Result<Self, Error> {
        Ok(Self::from_image(
            image::load_from_memory(&cover.data)?.to_rgba8(),
        ))
    }

    /// Set the maximum number of colors in the palette. Values below 1 are
    /// clamped to 1.
    pub fn max_colors(self, max_colors: usize) -> Self {
        Self {
            max_colors: max_colors.max(1),
            ..self
        }
    }

    /// Set the working resolution: `1` keeps the source size, values above 1
    /// are an absolute pixel size for the longer side, values between 0 and 1
    /// are a scale factor.
    pub fn resolution(self, resolution: f32) -> Self {
        Self { resolution, ..self }
    }

    /// Set the interpolation kernel for the resampling step.
    pub fn kernel(self, kernel: Kernel) -> Self {
        Self { kernel, ..self }
    }

    /// Drop near-black, near-white and grayish pixels from the counting
    /// entirely. See [`BlackWhiteFilter`].
    pub fn exclude_black_white(self) -> Self {
        self.add_filter(BlackWhiteFilter)
    }

    pub fn add_filter<F>(mut self, filter: F) -> Self
    where
        F: Filter + 'static,
    {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn clear_filters(self) -> Self {
        Self {
            filters: Vec::new(),
            ..self
        }
    }

    /// Run the extraction: resample the image to the working resolution,
    /// count the quantized colors, and pick the palette.
    pub fn generate(self) -> Result<Palette, Error> {
        let image = resample::resample(self.image, self.resolution, self.kernel)?;

        let quantizer = Quantizer::new(self.max_colors, self.filters);
        let (entries, valid_pixels) = quantizer.extract(&image);

        Ok(Palette {
            entries,
            valid_pixels,
        })
    }
}
