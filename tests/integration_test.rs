use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use icondex::catalog::generator::generate_catalog;
use icondex::prelude::*;

const WHITE_PATHS: &str = "\
alert/add_alert/materialiconsoutlined/48dp/2x/outline_add_alert_white_48dp.png
device/widgets/materialiconsround/48dp/2x/round_widgets_white_48dp.png
";

const BLACK_PATHS: &str = "\
alert/add_alert/materialiconsoutlined/48dp/2x/outline_add_alert_black_48dp.png
navigation/apps/materialiconssharp/48dp/1x/sharp_apps_black_48dp.png
action/hotel/materialiconstwotone/48dp/2x/twotone_hotel_black_48dp.png
";

fn write_lists(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let white = dir.join("listOfFiles_white.txt");
    let black = dir.join("listOfFiles_black.txt");
    fs::write(&white, WHITE_PATHS).unwrap();
    fs::write(&black, BLACK_PATHS).unwrap();
    (white, black)
}

#[test]
fn generated_entries_round_trip_through_the_accessor() {
    let dir = tempdir().unwrap();
    let (white, black) = write_lists(dir.path());

    let catalog = generate_catalog(&white, &black).unwrap();
    assert_eq!(catalog.len(), 5);

    let catalog_path = dir.path().join("icons.yml");
    catalog.save(&catalog_path).unwrap();

    let library = IconLibrary::open(&catalog_path, dir.path()).unwrap();
    for record in catalog.records() {
        let request = IconRequest::new(
            record.color.as_str(),
            &record.name,
            record.style.as_str(),
        )
        .size(record.size.as_str())
        .kind("info");

        let IconData::Record(found) = library.get_icon(&request).unwrap() else {
            panic!("expected a record for {}", record.name);
        };
        assert_eq!(&found, record);
        assert_eq!(found.size, record.size);
        assert_eq!(found.color, record.color);
        assert_eq!(found.style, record.style);
        assert_eq!(found.name, record.name);
    }
}

#[test]
fn generation_is_idempotent() {
    let dir = tempdir().unwrap();
    let (white, black) = write_lists(dir.path());

    let first = generate_catalog(&white, &black).unwrap();
    let second = generate_catalog(&white, &black).unwrap();
    assert_eq!(first, second);

    let first_yaml = serde_yaml::to_string(&first).unwrap();
    let second_yaml = serde_yaml::to_string(&second).unwrap();
    assert_eq!(first_yaml, second_yaml);
}

#[test]
fn the_material_outlined_scenario_holds_end_to_end() {
    let dir = tempdir().unwrap();
    let (white, black) = write_lists(dir.path());

    let catalog = generate_catalog(&white, &black).unwrap();
    let record = catalog
        .get(IconSize::TwoX, IconColor::Black, IconStyle::Outlined, "add_alert")
        .expect("generated record");
    assert_eq!(
        record.path,
        "png/alert/add_alert/materialiconsoutlined/48dp/2x/outline_add_alert_black_48dp.png"
    );

    let library = IconLibrary::with_catalog(catalog.clone(), dir.path());
    let request = IconRequest::new("black", "add_alert", "outlined").kind("path");
    let IconData::Field(path) = library.get_icon(&request).unwrap() else {
        panic!("expected a field");
    };
    assert_eq!(
        path,
        "png/alert/add_alert/materialiconsoutlined/48dp/2x/outline_add_alert_black_48dp.png"
    );
}

#[test]
fn out_of_set_color_returns_a_typed_error() {
    let dir = tempdir().unwrap();
    let (white, black) = write_lists(dir.path());
    let catalog = generate_catalog(&white, &black).unwrap();
    let library = IconLibrary::with_catalog(catalog, dir.path());

    let request = IconRequest::new("purple", "add_alert", "outlined");
    assert!(matches!(
        library.get_icon(&request),
        Err(Error::InvalidColor(_))
    ));
}

#[test]
fn image_kinds_load_and_resize_the_asset() {
    let dir = tempdir().unwrap();
    let (white, black) = write_lists(dir.path());
    let catalog = generate_catalog(&white, &black).unwrap();

    // Materialize the referenced asset: a 48x48 opaque black square.
    let record = catalog
        .get(IconSize::TwoX, IconColor::Black, IconStyle::Outlined, "add_alert")
        .unwrap();
    let asset_path = dir.path().join(&record.path);
    fs::create_dir_all(asset_path.parent().unwrap()).unwrap();
    let black_square =
        image::RgbaImage::from_pixel(48, 48, image::Rgba([0, 0, 0, 255]));
    black_square.save(&asset_path).unwrap();

    let library = IconLibrary::with_catalog(catalog, dir.path());

    let request = IconRequest::new("black", "add_alert", "outlined").dimensions(20, 20);
    let IconData::Texture(texture) = library.get_icon(&request).unwrap() else {
        panic!("expected a texture");
    };
    assert_eq!((texture.width, texture.height), (20, 20));
    assert_eq!(texture.rgba.len(), 20 * 20 * 4);

    let request = IconRequest::new("black", "add_alert", "outlined")
        .dimensions(32, 16)
        .kind("image");
    let IconData::Image(img) = library.get_icon(&request).unwrap() else {
        panic!("expected an image");
    };
    assert_eq!((img.width(), img.height()), (32, 16));
}

#[test]
fn missing_catalog_fails_construction_loudly() {
    let dir = tempdir().unwrap();
    let err = IconLibrary::open(dir.path().join("icons.yml"), dir.path()).unwrap_err();
    assert!(matches!(err, Error::CatalogNotFound { .. }));
}

#[test]
fn rasterization_writes_the_fixed_crop() {
    let dir = tempdir().unwrap();
    let svg_path = dir.path().join("icon.svg");
    fs::write(
        &svg_path,
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="400">
<rect x="0" y="0" width="400" height="400" fill="#000000"/>
</svg>"##,
    )
    .unwrap();

    let png_path = dir.path().join("icon.png");
    rasterize_svg(&svg_path, &png_path).unwrap();

    let rendered = image::open(&png_path).unwrap().into_rgba8();
    assert_eq!(
        (rendered.width(), rendered.height()),
        (icondex::converter::CROP_WIDTH, icondex::converter::CROP_HEIGHT)
    );
    assert_eq!(rendered.get_pixel(0, 0), &image::Rgba([0, 0, 0, 255]));
}

#[test]
fn recoloring_turns_black_ink_white_and_keeps_alpha() {
    let dir = tempdir().unwrap();

    // Black ink on a transparent background.
    let mut icon = image::RgbaImage::from_pixel(8, 8, image::Rgba([0, 0, 0, 0]));
    icon.put_pixel(3, 3, image::Rgba([0, 0, 0, 255]));
    let src = dir.path().join("black.png");
    icon.save(&src).unwrap();

    let dst = dir.path().join("white.png");
    recolor_to_white(&src, &dst).unwrap();

    let out = image::open(&dst).unwrap().into_rgba8();
    // Ink pixel: full white, alpha kept.
    assert_eq!(out.get_pixel(3, 3), &image::Rgba([255, 255, 255, 255]));
    // Background: remapped channels, but still fully transparent.
    assert_eq!(out.get_pixel(0, 0).0[3], 0);

    let back = dir.path().join("back.png");
    recolor_to_black(&dst, &back).unwrap();
    let out = image::open(&back).unwrap().into_rgba8();
    assert_eq!(out.get_pixel(3, 3), &image::Rgba([0, 0, 0, 255]));
}
