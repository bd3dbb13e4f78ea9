use serde::Serialize;

pub type ColorValue = u8; // Channel intensity (0-255)
pub type PackedValue = u8; // Low-bit-depth channel value before expansion (0-3)

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    pub red: ColorValue,
    pub green: ColorValue,
    pub blue: ColorValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<ColorValue>,
}

impl Color {
    pub const fn gray(value: ColorValue) -> Self {
        Color {
            red: value,
            green: value,
            blue: value,
            alpha: None,
        }
    }

    pub const fn rgba(
        red: ColorValue,
        green: ColorValue,
        blue: ColorValue,
        alpha: ColorValue,
    ) -> Self {
        Color {
            red,
            green,
            blue,
            alpha: Some(alpha),
        }
    }

    pub fn to_rgba(self) -> [ColorValue; 4] {
        [self.red, self.green, self.blue, self.alpha.unwrap_or(0xFF)]
    }
}
