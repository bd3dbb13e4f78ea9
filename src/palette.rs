// Module for generating the fixed reference palettes
use clap::ValueEnum;
use serde::Serialize;

use crate::common::{Color, ColorValue, PackedValue};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum BitDepth {
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
    #[value(name = "8")]
    Eight,
}

impl BitDepth {
    pub const ALL: [BitDepth; 3] = [BitDepth::One, BitDepth::Two, BitDepth::Eight];

    pub fn bits(self) -> u8 {
        match self {
            BitDepth::One => 1,
            BitDepth::Two => 2,
            BitDepth::Eight => 8,
        }
    }

    /// Number of tiles laid out per canvas row.
    pub fn columns(self) -> u32 {
        match self {
            BitDepth::One => 2,
            BitDepth::Two => 2,
            BitDepth::Eight => 16,
        }
    }

    /// Canvas dimensions in pixels, (width, height).
    pub fn canvas_size(self) -> (u32, u32) {
        match self {
            BitDepth::One => (32, 16),
            BitDepth::Two => (32, 32),
            BitDepth::Eight => (256, 256),
        }
    }

    pub fn file_stem(self) -> String {
        format!("{}-bit-palette", self.bits())
    }
}

impl Serialize for BitDepth {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.bits())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub depth: BitDepth,
    pub colors: Vec<Color>,
}

impl Palette {
    pub fn has_alpha(&self) -> bool {
        self.colors.iter().any(|c| c.alpha.is_some())
    }
}

/// Expands a 2-bit value to 8 bits by replicating its bit pattern,
/// e.g. `0b01` becomes `0b01010101`.
pub fn expand_2bit(value: PackedValue) -> ColorValue {
    let mut out = value & 0b11;
    for _ in 0..3 {
        out |= out << 2;
    }
    out
}

pub fn one_bit_palette() -> Palette {
    Palette {
        depth: BitDepth::One,
        colors: vec![Color::gray(0x00), Color::gray(0xFF)],
    }
}

pub fn two_bit_palette() -> Palette {
    Palette {
        depth: BitDepth::Two,
        colors: (0..4).map(|v| Color::gray(expand_2bit(v))).collect(),
    }
}

// Index bits, low to high: RRGGBBAA
pub fn eight_bit_palette() -> Palette {
    let colors = (0..=255u8)
        .map(|n| {
            Color::rgba(
                expand_2bit(n & 0b11),
                expand_2bit((n >> 2) & 0b11),
                expand_2bit((n >> 4) & 0b11),
                expand_2bit(n >> 6),
            )
        })
        .collect();
    Palette {
        depth: BitDepth::Eight,
        colors,
    }
}

pub fn generate(depth: BitDepth) -> Palette {
    match depth {
        BitDepth::One => one_bit_palette(),
        BitDepth::Two => two_bit_palette(),
        BitDepth::Eight => eight_bit_palette(),
    }
}
