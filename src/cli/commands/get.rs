//! CLI interface for icon lookup

use std::path::Path;

use image::RgbaImage;

use crate::library::{IconData, IconLibrary, IconRequest};

pub fn execute(
    color: &str,
    name: &str,
    style: &str,
    size: &str,
    width: u32,
    height: u32,
    kind: &str,
    catalog: &Path,
    assets: &Path,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let library = IconLibrary::open(catalog, assets)?;
    let request = IconRequest::new(color, name, style)
        .size(size)
        .dimensions(width, height)
        .kind(kind);

    match library.get_icon(&request)? {
        IconData::Record(record) => print!("{}", serde_yaml::to_string(&record)?),
        IconData::Field(value) => println!("{value}"),
        IconData::Texture(texture) => {
            let output = require_output(kind, output)?;
            let img: RgbaImage = RgbaImage::from_raw(texture.width, texture.height, texture.rgba)
                .ok_or_else(|| anyhow::anyhow!("texture buffer has the wrong size"))?;
            img.save(output)?;
            println!("wrote {}x{} texture to {}", width, height, output.display());
        }
        IconData::Image(image) => {
            let output = require_output(kind, output)?;
            image.save(output)?;
            println!("wrote {}x{} image to {}", width, height, output.display());
        }
    }

    Ok(())
}

fn require_output<'a>(kind: &str, output: Option<&'a Path>) -> anyhow::Result<&'a Path> {
    output.ok_or_else(|| {
        anyhow::anyhow!("return kind '{kind}' produces an image; pass --output <file.png>")
    })
}
