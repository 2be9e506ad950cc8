use image::{Rgba, RgbaImage};
use palex::{Kernel, Palette, MIN_COLOR_DISTANCE};

fn textured(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let r = ((x * 37) % 256) as u8;
        let g = ((y * 53) % 256) as u8;
        let b = ((x * y * 11) % 256) as u8;

        Rgba([r, g, b, 255])
    })
}

fn assert_diverse(palette: &Palette) {
    let entries = palette.entries();

    for (i, first) in entries.iter().enumerate() {
        for second in &entries[i + 1..] {
            let (r1, g1, b1) = first.rgb();
            let (r2, g2, b2) = second.rgb();

            let dr = r1 as f32 - r2 as f32;
            let dg = g1 as f32 - g2 as f32;
            let db = b1 as f32 - b2 as f32;
            let distance = (dr * dr + dg * dg + db * db).sqrt();

            assert!(
                distance >= MIN_COLOR_DISTANCE,
                "{} and {} are only {distance} apart",
                first.hex(),
                second.hex()
            );
        }
    }
}

#[test]
fn repeated_extraction_is_deterministic() {
    let image = textured(64, 48);

    let first = Palette::from_image(image.clone())
        .resolution(0.5)
        .kernel(Kernel::Lanczos)
        .exclude_black_white()
        .generate()
        .unwrap();
    let second = Palette::from_image(image)
        .resolution(0.5)
        .kernel(Kernel::Lanczos)
        .exclude_black_white()
        .generate()
        .unwrap();

    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn counts_and_percentages_stay_within_bounds() {
    let mut image = RgbaImage::from_pixel(10, 10, Rgba([12, 12, 240, 255]));
    for x in 0..10 {
        for y in 0..6 {
            image.put_pixel(x, y, Rgba([240, 12, 12, 255]));
        }
    }

    let palette = Palette::from_image(image).resolution(1.0).generate().unwrap();

    assert_eq!(palette.valid_pixels(), 100);
    assert_eq!(palette.len(), 2);

    let total: u64 = palette.entries().iter().map(|entry| entry.count() as u64).sum();
    assert!(total <= palette.valid_pixels());

    for entry in &palette {
        assert!(entry.percentage() <= 100);

        let expected =
            (entry.count() as f64 / palette.valid_pixels() as f64 * 100.0).round() as u8;
        assert_eq!(entry.percentage(), expected);
    }

    assert_eq!(palette.entries()[0].rgb(), (240, 12, 12));
    assert_eq!(palette.entries()[0].count(), 60);
    assert_eq!(palette.entries()[0].percentage(), 60);
    assert_eq!(palette.entries()[1].count(), 40);
    assert_eq!(palette.entries()[1].percentage(), 40);
}

#[test]
fn result_never_exceeds_max_colors() {
    let palette = Palette::from_image(textured(32, 32))
        .resolution(1.0)
        .max_colors(3)
        .generate()
        .unwrap();

    assert!(palette.len() <= 3);
    assert_diverse(&palette);
}

#[test]
fn valid_pixels_always_produce_a_palette() {
    let image = RgbaImage::from_pixel(2, 2, Rgba([24, 180, 60, 255]));

    let palette = Palette::from_image(image).resolution(1.0).generate().unwrap();

    assert_eq!(palette.valid_pixels(), 4);
    assert!(palette.len() >= 1);
    assert_eq!(palette.dominant().unwrap().rgb(), (24, 180, 60));
}

#[test]
fn fully_gray_image_filters_down_to_nothing() {
    let image = RgbaImage::from_pixel(8, 8, Rgba([128, 128, 128, 255]));

    let palette = Palette::from_image(image)
        .resolution(1.0)
        .exclude_black_white()
        .generate()
        .unwrap();

    assert_eq!(palette.valid_pixels(), 0);
    assert!(palette.is_empty());
}

#[test]
fn fully_transparent_image_yields_an_empty_palette() {
    let image = RgbaImage::from_pixel(4, 4, Rgba([200, 30, 30, 0]));

    let palette = Palette::from_image(image).resolution(1.0).generate().unwrap();

    assert_eq!(palette.valid_pixels(), 0);
    assert!(palette.is_empty());
    assert!(palette.dominant().is_none());
}

#[test]
fn percentages_are_shares_of_the_filtered_total() {
    // half gray, half red; with the filter on, red owns all counted pixels
    let mut image = RgbaImage::from_pixel(10, 10, Rgba([128, 128, 128, 255]));
    for x in 0..10 {
        for y in 0..5 {
            image.put_pixel(x, y, Rgba([240, 24, 24, 255]));
        }
    }

    let palette = Palette::from_image(image)
        .resolution(1.0)
        .exclude_black_white()
        .generate()
        .unwrap();

    assert_eq!(palette.valid_pixels(), 50);
    assert_eq!(palette.len(), 1);
    assert_eq!(palette.entries()[0].count(), 50);
    assert_eq!(palette.entries()[0].percentage(), 100);
}

#[test]
fn selected_colors_keep_their_distance() {
    let palette = Palette::from_image(textured(48, 48))
        .resolution(1.0)
        .generate()
        .unwrap();

    assert!(!palette.is_empty());
    assert_diverse(&palette);
}

#[test]
fn two_by_two_example() {
    let mut image = RgbaImage::new(2, 2);
    image.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
    image.put_pixel(1, 0, Rgba([255, 0, 0, 255]));
    image.put_pixel(0, 1, Rgba([0, 255, 0, 255]));
    image.put_pixel(1, 1, Rgba([0, 0, 0, 50]));

    let palette = Palette::from_image(image).resolution(1.0).generate().unwrap();

    assert_eq!(palette.valid_pixels(), 3);
    assert_eq!(palette.len(), 2);

    let red = palette.entries()[0];
    assert_eq!(red.hex(), "#fc0000");
    assert_eq!(red.rgb(), (252, 0, 0));
    assert_eq!(red.count(), 2);
    assert_eq!(red.percentage(), 67);

    let green = palette.entries()[1];
    assert_eq!(green.hex(), "#00fc00");
    assert_eq!(green.count(), 1);
    assert_eq!(green.percentage(), 33);

    assert_eq!(palette.dominant().unwrap(), red);
}
