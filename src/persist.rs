use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use json_pretty_compact::PrettyCompactFormatter;
use log::info;
use png::{BitDepth as PngDepth, ColorType};
use serde::Serialize;
use serde_json::Serializer;

use crate::{
    palette::{generate, BitDepth},
    raster::{rasterize, Canvas, ColorMode},
};

fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    info!("Saving {}", path.display());
    let formatter = PrettyCompactFormatter::new();
    let mut data_bytes = vec![];
    let mut ser = Serializer::with_formatter(&mut data_bytes, formatter);
    data.serialize(&mut ser)?;
    std::fs::write(path, &data_bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

pub fn encode_png<W: Write>(canvas: &Canvas, w: W) -> Result<()> {
    let mut encoder = png::Encoder::new(w, canvas.width, canvas.height);
    encoder.set_color(match canvas.mode {
        ColorMode::Rgb => ColorType::Rgb,
        ColorMode::Rgba => ColorType::Rgba,
    });
    encoder.set_depth(PngDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&canvas.pixels)?;
    writer.finish()?;
    Ok(())
}

pub fn save_png(path: &Path, canvas: &Canvas) -> Result<()> {
    info!("Saving {}", path.display());
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    encode_png(canvas, &mut out).with_context(|| format!("encoding {}", path.display()))?;
    out.flush()?;
    Ok(())
}

/// Generates the palette for `depth`, writes `<N>-bit-palette.png` (and the
/// `.json` color list if requested) into `out_dir`, and returns the PNG path.
pub fn export_palette(depth: BitDepth, out_dir: &Path, with_json: bool) -> Result<PathBuf> {
    let palette = generate(depth);
    let canvas = rasterize(&palette);
    let stem = depth.file_stem();
    let png_path = out_dir.join(format!("{}.png", stem));
    save_png(&png_path, &canvas)?;
    if with_json {
        save_json(&out_dir.join(format!("{}.json", stem)), &palette)?;
    }
    Ok(png_path)
}
