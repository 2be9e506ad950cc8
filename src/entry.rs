/// A single extracted color together with how much of the image it covers.
///
/// The channel values are the quantized bucket values, so they are always
/// multiples of [`crate::QUANTIZE_STEP`]. The percentage is computed against
/// the count of pixels that survived the alpha and color filters, not against
/// the total pixel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaletteEntry {
    red: u8,
    green: u8,
    blue: u8,
    count: u32,
    percentage: u8,
}

impl PaletteEntry {
    pub fn new((red, green, blue): (u8, u8, u8), count: u32, percentage: u8) -> PaletteEntry {
        Self {
            red,
            green,
            blue,
            count,
            percentage,
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    /// How many counted pixels fell into this color's bucket.
    pub fn count(self) -> u32 {
        self.count
    }

    /// This color's share of all counted pixels, rounded to the nearest
    /// integer percent.
    pub fn percentage(self) -> u8 {
        self.percentage
    }

    /// The color as a lowercase `#rrggbb` string.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// The color as a CSS `rgb(r, g, b)` string.
    pub fn css_rgb(self) -> String {
        format!("rgb({}, {}, {})", self.red, self.green, self.blue)
    }

    /// The color as a CSS `rgba(r, g, b, 1)` string.
    pub fn css_rgba(self) -> String {
        format!("rgba({}, {}, {}, 1)", self.red, self.green, self.blue)
    }
}
