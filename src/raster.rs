// Module for laying out palette colors as a grid of square tiles
use itertools::iproduct;
use log::debug;

use crate::{common::Color, palette::Palette};

pub const TILE_SIZE: u32 = 16;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Rgb,
    Rgba,
}

impl ColorMode {
    pub fn channels(self) -> usize {
        match self {
            ColorMode::Rgb => 3,
            ColorMode::Rgba => 4,
        }
    }
}

pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pub mode: ColorMode,
    pub pixels: Vec<u8>,
}

impl Canvas {
    /// Allocates a canvas cleared to zero (black, and transparent in RGBA mode).
    pub fn new(width: u32, height: u32, mode: ColorMode) -> Self {
        Canvas {
            width,
            height,
            mode,
            pixels: vec![0; width as usize * height as usize * mode.channels()],
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.mode.channels()
    }

    /// Fills the rectangle with corners (x0, y0) and (x1, y1), both inclusive,
    /// clipped to the canvas.
    pub fn fill_rectangle(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: Color) {
        if self.width == 0 || self.height == 0 || x0 >= self.width || y0 >= self.height {
            return;
        }
        let x1 = x1.min(self.width - 1);
        let y1 = y1.min(self.height - 1);
        let channels = self.mode.channels();
        let rgba = color.to_rgba();
        for (y, x) in iproduct!(y0..=y1, x0..=x1) {
            let i = self.offset(x, y);
            self.pixels[i..i + channels].copy_from_slice(&rgba[..channels]);
        }
    }

    /// Reads back a pixel; RGB canvases report no alpha.
    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let i = self.offset(x, y);
        let p = &self.pixels[i..i + self.mode.channels()];
        Color {
            red: p[0],
            green: p[1],
            blue: p[2],
            alpha: p.get(3).copied(),
        }
    }
}

/// Paints the tile at grid position (col, row).
pub fn draw_color(canvas: &mut Canvas, col: u32, row: u32, color: Color) {
    let x = col * TILE_SIZE;
    let y = row * TILE_SIZE;
    canvas.fill_rectangle(x, y, x + TILE_SIZE, y + TILE_SIZE, color);
}

pub fn rasterize(palette: &Palette) -> Canvas {
    let depth = palette.depth;
    let (width, height) = depth.canvas_size();
    let mode = if palette.has_alpha() {
        ColorMode::Rgba
    } else {
        ColorMode::Rgb
    };
    debug!(
        "Rasterizing {}-bit palette: {} colors onto {}x{} {:?}",
        depth.bits(),
        palette.colors.len(),
        width,
        height,
        mode
    );
    let mut canvas = Canvas::new(width, height, mode);
    let columns = depth.columns();
    for (i, &color) in palette.colors.iter().enumerate() {
        let i = i as u32;
        draw_color(&mut canvas, i % columns, i / columns, color);
    }
    canvas
}
