use crate::error::Error;
use image::{imageops, imageops::FilterType, RgbaImage};
use log::debug;

/// Interpolation kernel used when resampling an image to its working
/// resolution. Only affects the resize step, not the counting or selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kernel {
    Nearest,
    #[default]
    Linear,
    Cubic,
    Lanczos,
}

impl Kernel {
    fn filter_type(self) -> FilterType {
        match self {
            Kernel::Nearest => FilterType::Nearest,
            Kernel::Linear => FilterType::Triangle,
            Kernel::Cubic => FilterType::CatmullRom,
            Kernel::Lanczos => FilterType::Lanczos3,
        }
    }
}

/// Compute the working dimensions for a source image under a given resolution
/// parameter.
///
/// - `resolution == 1` keeps the source dimensions.
/// - `resolution > 1` is an absolute pixel size for the longer side; the
///   shorter side is scaled proportionally and rounded.
/// - `0 < resolution < 1` is a scale factor applied to both sides.
///
/// Neither dimension ever comes out as zero. Resolutions of zero or below are
/// rejected with [`Error::InvalidResolution`].
pub fn target_dimensions(width: u32, height: u32, resolution: f32) -> Result<(u32, u32), Error> {
    if resolution <= 0.0 {
        return Err(Error::InvalidResolution(resolution));
    }

    if resolution == 1.0 {
        Ok((width, height))
    } else if resolution > 1.0 {
        let size = resolution.round();

        if width > height {
            let scaled = (height as f32 / width as f32 * size).round().max(1.0);
            Ok((size as u32, scaled as u32))
        } else {
            let scaled = (width as f32 / height as f32 * size).round().max(1.0);
            Ok((scaled as u32, size as u32))
        }
    } else {
        let scaled_width = (width as f32 * resolution).round().max(1.0);
        let scaled_height = (height as f32 * resolution).round().max(1.0);

        Ok((scaled_width as u32, scaled_height as u32))
    }
}

pub(crate) fn resample(image: RgbaImage, resolution: f32, kernel: Kernel) -> Result<RgbaImage, Error> {
    let (width, height) = image.dimensions();
    let (target_width, target_height) = target_dimensions(width, height, resolution)?;

    if (target_width, target_height) == (width, height) {
        debug!("keeping original size {width}x{height}");
        return Ok(image);
    }

    debug!("resampling {width}x{height} to {target_width}x{target_height} with {kernel:?}");
    Ok(imageops::resize(
        &image,
        target_width,
        target_height,
        kernel.filter_type(),
    ))
}
