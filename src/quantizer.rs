use crate::{entry::PaletteEntry, filter::Filter};
use image::RgbaImage;
use log::debug;
use std::{cmp::Reverse, collections::HashMap};

/// The channel rounding granularity. Each channel is rounded to the nearest
/// multiple of this step, coarsening the 256 levels into roughly 22 buckets
/// per channel so near-identical colors merge before counting.
pub const QUANTIZE_STEP: u8 = 12;

/// The minimum Euclidean RGB distance required between two colors in the
/// final palette.
pub const MIN_COLOR_DISTANCE: f32 = 45.0;

const MIN_OPAQUE_ALPHA: u8 = 128;

pub(crate) struct Quantizer {
    max_colors: usize,
    filters: Vec<Box<dyn Filter>>,
}

impl Quantizer {
    pub(crate) fn new(max_colors: usize, filters: Vec<Box<dyn Filter>>) -> Self {
        Self { max_colors, filters }
    }

    pub(crate) fn extract(&self, image: &RgbaImage) -> (Vec<PaletteEntry>, u64) {
        let (buckets, valid_pixels) = self.count_colors(image);
        let entries = self.select_diverse(buckets, valid_pixels);

        (entries, valid_pixels)
    }

    /// Tally every sufficiently opaque, unfiltered pixel into its quantized
    /// color bucket.
    fn count_colors(&self, image: &RgbaImage) -> (HashMap<(u8, u8, u8), u32>, u64) {
        let mut buckets = HashMap::new();
        let mut valid_pixels = 0u64;
        let mut transparent = 0u64;
        let mut filtered = 0u64;

        for pixel in image.pixels() {
            let [r, g, b, a] = pixel.0;

            if a < MIN_OPAQUE_ALPHA {
                transparent += 1;
                continue;
            }

            // filters classify the original channel values, not the quantized ones
            if self.should_ignore_color((r, g, b)) {
                filtered += 1;
                continue;
            }

            let quantized = (quantize_channel(r), quantize_channel(g), quantize_channel(b));
            *buckets.entry(quantized).or_insert(0u32) += 1;
            valid_pixels += 1;
        }

        debug!(
            "{} pixels: {transparent} transparent, {filtered} filtered, {valid_pixels} valid across {} buckets",
            image.width() as u64 * image.height() as u64,
            buckets.len()
        );

        (buckets, valid_pixels)
    }

    /// Pick the most frequent colors, skipping candidates too close to an
    /// already picked one.
    fn select_diverse(
        &self,
        buckets: HashMap<(u8, u8, u8), u32>,
        valid_pixels: u64,
    ) -> Vec<PaletteEntry> {
        let mut colors = buckets.into_iter().collect::<Vec<_>>();

        // order by count, most frequent first. ties are broken by combining the
        // channels into a single integer where the red channel is the most
        // significant and the blue the least, so the result never depends on
        // map iteration order
        colors.sort_by_key(|&((r, g, b), count)| {
            (
                Reverse(count),
                ((r as u32) << 16) | ((g as u32) << 8) | b as u32,
            )
        });

        let mut selected: Vec<PaletteEntry> = Vec::with_capacity(self.max_colors.min(colors.len()));
        let mut skipped_similar = 0usize;

        for &(rgb, count) in &colors {
            if selected.len() >= self.max_colors {
                break;
            }

            let too_similar = selected
                .iter()
                .any(|entry| color_distance(entry.rgb(), rgb) < MIN_COLOR_DISTANCE);

            if too_similar {
                skipped_similar += 1;
            } else {
                selected.push(to_entry(rgb, count, valid_pixels));
            }
        }

        debug!(
            "selected {} of {} colors, skipped {skipped_similar} similar",
            selected.len(),
            colors.len()
        );

        // the first candidate is always accepted, so the walk above cannot end
        // up empty while candidates exist. the guarantee still stands on its
        // own: valid pixels must always produce a palette
        if selected.is_empty() && !colors.is_empty() {
            selected = colors
                .iter()
                .take(self.max_colors)
                .map(|&(rgb, count)| to_entry(rgb, count, valid_pixels))
                .collect();
        }

        selected
    }

    fn should_ignore_color(&self, rgb: (u8, u8, u8)) -> bool {
        self.filters.iter().any(|filter| !filter.is_allowed(rgb))
    }
}

fn quantize_channel(channel: u8) -> u8 {
    (channel as f32 / QUANTIZE_STEP as f32).round() as u8 * QUANTIZE_STEP
}

fn to_entry(rgb: (u8, u8, u8), count: u32, valid_pixels: u64) -> PaletteEntry {
    let percentage = (count as f64 / valid_pixels as f64 * 100.0).round() as u8;
    PaletteEntry::new(rgb, count, percentage)
}

fn color_distance((r1, g1, b1): (u8, u8, u8), (r2, g2, b2): (u8, u8, u8)) -> f32 {
    let dr = r1 as f32 - r2 as f32;
    let dg = g1 as f32 - g2 as f32;
    let db = b1 as f32 - b2 as f32;

    (dr * dr + dg * dg + db * db).sqrt()
}
