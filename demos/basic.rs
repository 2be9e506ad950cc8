use palex::Palette;

fn main() {
    let palette = Palette::from_path("cover.jpg").unwrap().generate().unwrap();

    for entry in palette.entries() {
        println!("{} ({}%)", entry.hex(), entry.percentage());
    }
}
