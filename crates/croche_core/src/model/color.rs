//! Packed ARGB display color.

use serde::{Deserialize, Serialize};

/// 32-bit `0xAARRGGBB` color as used by the Flutter/Compose presentation layer.
///
/// Serialized as the bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArgbColor(pub u32);

impl ArgbColor {
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    pub const BLACK: Self = Self(0xFF00_0000);

    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Perceived luminance in `0.0..=1.0`, ignoring alpha.
    pub fn luminance(self) -> f32 {
        let channel = |value: u8| f32::from(value) / 255.0;
        channel(self.red()) * 0.299 + channel(self.green()) * 0.587 + channel(self.blue()) * 0.114
    }

    /// Returns whether light text is needed on top of this color.
    pub fn is_dark(self) -> bool {
        self.luminance() < 0.5
    }

    /// Text color that stays readable on top of this background.
    pub fn contrast_text(self) -> Self {
        if self.is_dark() {
            Self::WHITE
        } else {
            Self::BLACK
        }
    }
}

impl From<u32> for ArgbColor {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<ArgbColor> for u32 {
    fn from(value: ArgbColor) -> Self {
        value.0
    }
}
