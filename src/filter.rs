const BLACK_MAX_CHANNEL_SUM: u16 = 60;
const WHITE_MIN_CHANNEL_SUM: u16 = 710;
const GRAY_MAX_CHANNEL_SPREAD: u8 = 15;

/// A trait used to implement per-pixel color filters for the counting process.
///
/// During counting, filters are used to remove pixels from the palette
/// entirely: a disallowed pixel is not bucketed and does not contribute to the
/// valid-pixel total that percentages are computed against. Filters always see
/// the original 8-bit channel values, before quantization. This trait allows
/// the library consumer to implement custom filters.
///
/// See [`crate::PaletteBuilder::add_filter`] on how to add filters to the
/// counting process.
pub trait Filter {
    /// Return whether a given color should be counted or not.
    fn is_allowed(&self, rgb: (u8, u8, u8)) -> bool;
}

/// The filter installed by [`crate::PaletteBuilder::exclude_black_white`].
///
/// This filter will disallow colors very close to black, colors very close to
/// white, and colors with so little channel spread they read as gray at any
/// brightness.
#[derive(Debug)]
pub struct BlackWhiteFilter;
impl Filter for BlackWhiteFilter {
    fn is_allowed(&self, rgb: (u8, u8, u8)) -> bool {
        !is_near_black(rgb) && !is_near_white(rgb) && !is_grayish(rgb)
    }
}

fn channel_sum((r, g, b): (u8, u8, u8)) -> u16 {
    r as u16 + g as u16 + b as u16
}

fn is_near_black(rgb: (u8, u8, u8)) -> bool {
    channel_sum(rgb) < BLACK_MAX_CHANNEL_SUM
}

fn is_near_white(rgb: (u8, u8, u8)) -> bool {
    channel_sum(rgb) > WHITE_MIN_CHANNEL_SUM
}

fn is_grayish((r, g, b): (u8, u8, u8)) -> bool {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    max - min < GRAY_MAX_CHANNEL_SPREAD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_extremes_and_grays() {
        let filter = BlackWhiteFilter;

        assert!(!filter.is_allowed((0, 0, 0)));
        assert!(!filter.is_allowed((10, 10, 30)));
        assert!(!filter.is_allowed((255, 255, 255)));
        assert!(!filter.is_allowed((250, 240, 230)));
        assert!(!filter.is_allowed((128, 128, 128)));
        assert!(!filter.is_allowed((100, 110, 105)));
    }

    #[test]
    fn allows_saturated_colors() {
        let filter = BlackWhiteFilter;

        assert!(filter.is_allowed((200, 30, 30)));
        assert!(filter.is_allowed((0, 60, 0)));
        assert!(filter.is_allowed((30, 60, 200)));
    }
}
