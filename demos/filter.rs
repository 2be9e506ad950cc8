use palex::{Filter, Palette};

// this filter uses the same channel-sum approach as the built-in black/white
// filter, except it only drops dark colors and is stricter about it
struct DarkFilter;
impl Filter for DarkFilter {
    fn is_allowed(&self, (r, g, b): (u8, u8, u8)) -> bool {
        r as u16 + g as u16 + b as u16 >= 120
    }
}

fn main() {
    let palette = Palette::from_path("cover.jpg")
        .unwrap()
        .add_filter(DarkFilter)
        .generate()
        .unwrap();

    for entry in palette.entries() {
        println!("{} ({}%)", entry.css_rgb(), entry.percentage());
    }
}
